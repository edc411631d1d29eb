use thiserror::Error;

/// Errors raised while resolving a `{year}` template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown placeholder '{{{name}}}' in template '{template}'")]
    UnknownPlaceholder { template: String, name: String },

    #[error("unbalanced brace at byte {position} in template '{template}'")]
    UnbalancedBrace { template: String, position: usize },
}

/// Errors raised by a single site's extraction job
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("failed to fetch {url}: status code {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Archive(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("extraction task did not complete: {0}")]
    Task(String),
}

/// Errors raised while building a strategy for a site
#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("no extraction strategy registered for site '{0}'")]
    UnknownSite(String),

    #[error("invalid strategy parameters for site '{site}': {source}")]
    InvalidParams {
        site: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// A site whose job failed during a run
#[derive(Debug, Clone)]
pub struct SiteFailure {
    pub site: String,
    pub message: String,
}

/// Errors returned by the orchestrator
#[derive(Error, Debug)]
pub enum RunError {
    #[error("invalid configuration for site '{site}': {source}")]
    Config {
        site: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error("{} site extraction(s) failed: {}", .0.len(), format_failures(.0))]
    SitesFailed(Vec<SiteFailure>),
}

fn format_failures(failures: &[SiteFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("[{}] {}", f.site, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_site_names_the_site() {
        let err = FactoryError::UnknownSite("unknown_site".to_string());
        assert!(err.to_string().contains("unknown_site"));
    }

    #[test]
    fn test_status_error_carries_code() {
        let err = ExtractionError::Status {
            url: "http://localhost/2024.zip".to_string(),
            status: 404,
        };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_sites_failed_lists_every_site() {
        let err = RunError::SitesFailed(vec![
            SiteFailure {
                site: "a".to_string(),
                message: "boom".to_string(),
            },
            SiteFailure {
                site: "b".to_string(),
                message: "bang".to_string(),
            },
        ]);
        let text = err.to_string();
        assert!(text.starts_with("2 site extraction(s) failed"));
        assert!(text.contains("[a] boom"));
        assert!(text.contains("[b] bang"));
    }
}
