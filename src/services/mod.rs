mod auth_service;
mod driver_service;
mod requests;
mod session;
mod toastr_service;

pub use self::auth_service::*;
pub use self::driver_service::*;
pub use self::requests::*;
pub use self::session::*;
pub use self::toastr_service::*;
