use crate::model::WebConfig;
use crate::services::{AuthService, DriverService, SessionContext, ToastrService};
use std::rc::Rc;
use yew::prelude::*;

pub struct Services {
    pub auth: Rc<AuthService>,
    pub drivers: Rc<DriverService>,
    pub toastr: Rc<ToastrService>,
}

impl Services {
    pub fn new(config: &WebConfig) -> Self {
        // the session context has one explicit lifecycle: created here at
        // app start, cleared through AuthService::logout
        let session = Rc::new(SessionContext::new());
        let auth = Rc::new(AuthService::new(Rc::clone(&session)));
        let drivers = Rc::new(DriverService::new(config, Rc::clone(&session)));
        let toastr = Rc::new(ToastrService::new());
        Self {
            auth,
            drivers,
            toastr,
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Services {}

#[derive(PartialEq, Eq, Clone)]
pub struct ServiceContext {
    services: Rc<Services>,
}

impl ServiceContext {
    pub fn new(config: &WebConfig) -> Self {
        Self {
            services: Rc::new(Services::new(config)),
        }
    }

    pub fn services(&self) -> Rc<Services> {
        self.services.clone()
    }
}

#[hook]
pub fn use_service_context() -> Rc<Services> {
    use_context::<UseStateHandle<ServiceContext>>()
        .expect("Services context not found")
        .services()
}
