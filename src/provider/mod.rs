mod service_context_provider;

pub use self::service_context_provider::*;
