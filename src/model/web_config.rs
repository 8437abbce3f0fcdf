use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Serialize, Deserialize, Debug)]
pub struct ApiConfig {
    #[serde(alias = "apiUrl")]
    pub api_url: String,
}

#[derive(PartialEq, Eq, Clone, Serialize, Deserialize, Debug)]
pub struct WebConfig {
    #[serde(alias = "appTitle")]
    pub app_title: Option<String>,
    pub api: ApiConfig,
}
