use crate::models::current_year;
use serde::Deserialize;

/// Parameters accepted by the INMET extraction strategy.
///
/// Keys in a site's `strategy` block that are not listed here are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InmetParams {
    /// Archive URL, with `{year}` substituted before download
    pub url: String,
    /// Year of the archive to fetch
    #[serde(default = "current_year")]
    pub year: i32,
    /// City names matched case-insensitively against archive entry names
    #[serde(default)]
    pub cities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_keys_are_ignored() {
        let params: InmetParams = serde_json::from_value(json!({
            "url": "https://example.org/{year}.zip",
            "year": 2024,
            "cities": ["Tapes"],
            "years": [2000, 2001],
            "repository": "ignored"
        }))
        .unwrap();

        assert_eq!(params.year, 2024);
        assert_eq!(params.cities, vec!["Tapes".to_string()]);
    }

    #[test]
    fn test_defaults() {
        let params: InmetParams =
            serde_json::from_value(json!({ "url": "https://example.org/{year}.zip" })).unwrap();

        assert_eq!(params.year, current_year());
        assert!(params.cities.is_empty());
    }

    #[test]
    fn test_url_is_required() {
        assert!(serde_json::from_value::<InmetParams>(json!({ "year": 2024 })).is_err());
    }
}
