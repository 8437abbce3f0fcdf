mod auth_state;
mod driver;
mod driver_form;
mod web_config;

pub use self::auth_state::*;
pub use self::driver::*;
pub use self::driver_form::*;
pub use self::web_config::*;
