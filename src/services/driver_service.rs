use crate::error::Error;
use crate::model::{decode_drivers, find_driver, Driver, DriverPayload, WebConfig};
use crate::services::{request_get, request_post, request_put, SessionContext};
use log::error;
use serde_json::Value;
use std::rc::Rc;

/// API access for the driver registry. The backend has no single-record
/// read; the collection fetch serves both the list view and the edit-mode
/// lookup.
pub struct DriverService {
    api_url: String,
    session: Rc<SessionContext>,
}

impl DriverService {
    pub fn new(config: &WebConfig, session: Rc<SessionContext>) -> Self {
        Self {
            api_url: config.api.api_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/admin/drivers", self.api_url)
    }

    fn record_url(&self, id: u32) -> String {
        format!("{}/admin/driver/{id}", self.api_url)
    }

    fn create_url(&self) -> String {
        format!("{}/admin/driver", self.api_url)
    }

    /// Fetch the full collection, server-ordered. A payload without the
    /// expected `drivers` sequence is an explicit error, not an empty list.
    pub async fn fetch_all(&self) -> Result<Vec<Driver>, Error> {
        let token = self.session.token();
        let value = request_get::<Value>(&self.collection_url(), token.as_deref()).await?;
        match decode_drivers(&value) {
            Ok(drivers) => Ok(drivers),
            Err(err) => {
                error!("drivers response had an unexpected shape: {value}");
                Err(err)
            }
        }
    }

    pub async fn find_by_id(&self, id: u32) -> Result<Option<Driver>, Error> {
        let drivers = self.fetch_all().await?;
        Ok(find_driver(&drivers, id).cloned())
    }

    pub async fn create(&self, payload: &DriverPayload) -> Result<(), Error> {
        let token = self.session.token();
        match request_post::<_, Value>(&self.create_url(), payload, token.as_deref()).await {
            Ok(_) => Ok(()),
            Err(err) => {
                error!("{err}");
                Err(err)
            }
        }
    }

    pub async fn update(&self, id: u32, payload: &DriverPayload) -> Result<(), Error> {
        let token = self.session.token();
        match request_put::<_, Value>(&self.record_url(id), payload, token.as_deref()).await {
            Ok(_) => Ok(()),
            Err(err) => {
                error!("{err}");
                Err(err)
            }
        }
    }
}
