mod driver_form;
mod driver_table;
mod guard;
mod input;
mod loading_indicator;
mod login;
mod no_content;
mod toastr;

pub use self::driver_form::*;
pub use self::driver_table::*;
pub use self::guard::*;
pub use self::input::*;
pub use self::loading_indicator::*;
pub use self::login::*;
pub use self::no_content::*;
pub use self::toastr::*;
