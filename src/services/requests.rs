use crate::error::{Error, ErrorInfo};
use log::error;
use reqwasm::http::Request;
use serde::{de::DeserializeOwned, Serialize};

enum RequestMethod {
    Get,
    Post,
    Put,
}

/// build all kinds of http request: get/post/put. The bearer token is
/// passed in by the caller; this layer never reads it from storage itself.
async fn request<B, T>(
    method: RequestMethod,
    url: &str,
    body: B,
    token: Option<&str>,
) -> Result<T, Error>
where
    T: DeserializeOwned + 'static + std::fmt::Debug,
    B: Serialize + std::fmt::Debug,
{
    let mut request = match method {
        RequestMethod::Get => Request::get(url),
        RequestMethod::Post => {
            let json = serde_json::to_string(&body).map_err(|_| Error::RequestError)?;
            Request::post(url).body(json)
        }
        RequestMethod::Put => {
            let json = serde_json::to_string(&body).map_err(|_| Error::RequestError)?;
            Request::put(url).body(json)
        }
    }
    .header("Content-Type", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", format!("Bearer {token}").as_str());
    }
    match request.send().await {
        Ok(response) => match response.status() {
            200 | 201 => {
                let data: Result<T, _> = response.json::<T>().await;
                if let Ok(data) = data {
                    Ok(data)
                } else {
                    Err(Error::DeserializeError)
                }
            }
            400 => {
                let data: Result<ErrorInfo, _> = response.json::<ErrorInfo>().await;
                if let Ok(data) = data {
                    Err(Error::BadRequest(data.error))
                } else {
                    Err(Error::BadRequest("400".to_string()))
                }
            }
            401 => Err(Error::Unauthorized),
            403 => Err(Error::Forbidden),
            404 => Err(Error::NotFound),
            500 => Err(Error::InternalServerError),
            _ => Err(Error::RequestError),
        },
        Err(e) => {
            error!("{e}");
            Err(Error::RequestError)
        }
    }
}

/// Get request
pub async fn request_get<T>(url: &str, token: Option<&str>) -> Result<T, Error>
where
    T: DeserializeOwned + 'static + std::fmt::Debug,
{
    request(RequestMethod::Get, url, (), token).await
}

/// Post request with a body
pub async fn request_post<B, T>(url: &str, body: B, token: Option<&str>) -> Result<T, Error>
where
    T: DeserializeOwned + 'static + std::fmt::Debug,
    B: Serialize + std::fmt::Debug,
{
    request(RequestMethod::Post, url, body, token).await
}

/// Put request with a body
pub async fn request_put<B, T>(url: &str, body: B, token: Option<&str>) -> Result<T, Error>
where
    T: DeserializeOwned + 'static + std::fmt::Debug,
    B: Serialize + std::fmt::Debug,
{
    request(RequestMethod::Put, url, body, token).await
}
