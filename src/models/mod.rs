use chrono::{Datelike, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw keyword parameters handed to a strategy constructor
pub type StrategyParams = Map<String, Value>;

/// One site's configuration block
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub strategy: StrategyParams,
    pub repository: RepositorySettings,
}

/// Output location for a site
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RepositorySettings {
    pub path: String,
    #[serde(default = "current_year")]
    pub year: i32,
}

pub fn current_year() -> i32 {
    Utc::now().year()
}
