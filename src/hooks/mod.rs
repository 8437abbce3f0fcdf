mod use_service_context;

pub use self::use_service_context::*;
