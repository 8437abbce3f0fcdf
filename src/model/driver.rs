use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// The registry manages a single role in this console.
pub const DEFAULT_ROLE: &str = "Driver";

/// One registered driver with the assigned vehicle, as returned by the
/// collection endpoint. The backend never includes the password.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Driver {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub operational_time: String,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub vehicle_number: String,
    #[serde(default)]
    pub vehicle_brand: String,
    #[serde(default)]
    pub vehicle_series: String,
}

/// Write model for create/update submissions. A `None` password serializes
/// to no `password` key at all, which the backend reads as "leave unchanged".
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct DriverPayload {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
    pub operational_time: String,
    pub route: String,
    pub vehicle_number: String,
    pub vehicle_brand: String,
    pub vehicle_series: String,
}

/// Decode the collection payload. A missing or non-sequence `drivers` field
/// counts as a malformed response, not as an empty registry.
pub fn decode_drivers(value: &Value) -> Result<Vec<Driver>, Error> {
    let Some(entries) = value.get("drivers").and_then(Value::as_array) else {
        return Err(Error::MalformedResponse);
    };
    entries
        .iter()
        .map(|entry| serde_json::from_value(entry.clone()).map_err(|_| Error::DeserializeError))
        .collect()
}

/// The collection endpoint doubles as the lookup table for a single record.
pub fn find_driver(drivers: &[Driver], id: u32) -> Option<&Driver> {
    drivers.iter().find(|driver| driver.id == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn driver(id: u32, username: &str) -> Driver {
        Driver {
            id: Some(id),
            username: username.to_string(),
            role: DEFAULT_ROLE.to_string(),
            ..Driver::default()
        }
    }

    #[test]
    fn decode_accepts_a_well_formed_collection() {
        let value = json!({"drivers": [{"id": 7, "username": "jdoe"}]});
        let drivers = decode_drivers(&value).unwrap();
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].id, Some(7));
        assert_eq!(drivers[0].username, "jdoe");
    }

    #[test]
    fn decode_flags_missing_drivers_field_as_malformed() {
        let value = json!({"data": []});
        assert_eq!(decode_drivers(&value), Err(Error::MalformedResponse));
    }

    #[test]
    fn decode_flags_non_sequence_drivers_field_as_malformed() {
        let value = json!({"drivers": "oops"});
        assert_eq!(decode_drivers(&value), Err(Error::MalformedResponse));
    }

    #[test]
    fn decode_accepts_an_empty_collection() {
        let value = json!({"drivers": []});
        assert_eq!(decode_drivers(&value), Ok(vec![]));
    }

    #[test]
    fn find_matches_on_id() {
        let drivers = vec![driver(1, "a"), driver(7, "b")];
        assert_eq!(find_driver(&drivers, 7).map(|d| d.username.as_str()), Some("b"));
        assert!(find_driver(&drivers, 9).is_none());
    }

    #[test]
    fn payload_without_password_serializes_without_the_key() {
        let payload = DriverPayload {
            username: "jdoe".to_string(),
            password: None,
            firstname: String::new(),
            lastname: String::new(),
            email: "a@b.com".to_string(),
            phone_number: "555".to_string(),
            role: DEFAULT_ROLE.to_string(),
            operational_time: "08-16".to_string(),
            route: "A1".to_string(),
            vehicle_number: String::new(),
            vehicle_brand: String::new(),
            vehicle_series: String::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["username"], "jdoe");
    }
}
