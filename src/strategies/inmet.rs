use crate::errors::{ExtractionError, FactoryError};
use crate::models::StrategyParams;
use crate::repository::Repository;
use crate::strategies::archive::extract_matching;
use crate::strategies::traits::ExtractionStrategy;
use crate::strategies::types::InmetParams;
use crate::template::render_year;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::io::Cursor;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// INMET historical data extractor.
///
/// Downloads the yearly ZIP bundle into memory and unpacks the entries
/// belonging to the configured cities.
pub struct InmetStrategy {
    client: Client,
    repository: Arc<dyn Repository>,
    params: InmetParams,
}

impl InmetStrategy {
    pub fn new(repository: Arc<dyn Repository>, params: InmetParams) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            repository,
            params,
        })
    }

    /// Registry constructor: keeps only the keys `InmetParams` declares
    pub fn build(
        site: &str,
        params: &StrategyParams,
        repository: Arc<dyn Repository>,
    ) -> Result<Box<dyn ExtractionStrategy>, FactoryError> {
        let params: InmetParams = serde_json::from_value(params.clone().into()).map_err(|source| {
            FactoryError::InvalidParams {
                site: site.to_string(),
                source,
            }
        })?;
        let strategy = Self::new(repository, params).map_err(FactoryError::Client)?;
        Ok(Box::new(strategy))
    }

    async fn fetch_archive(&self, url: &str) -> Result<Vec<u8>, ExtractionError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ExtractionError::Request {
                url: url.to_string(),
                source,
            })?;

        if response.status() != StatusCode::OK {
            warn!("INMET returned status: {}", response.status());
            return Err(ExtractionError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ExtractionError::Request {
                url: url.to_string(),
                source,
            })?;

        Ok(body.to_vec())
    }
}

#[async_trait]
impl ExtractionStrategy for InmetStrategy {
    async fn extract_data(&self) -> Result<(), ExtractionError> {
        let url = render_year(&self.params.url, self.params.year)?;
        let output_dir = self.repository.get_path()?;

        info!("Fetching INMET archive for {} from {}", self.params.year, url);
        let archive = self.fetch_archive(&url).await?;
        debug!("Downloaded {} bytes", archive.len());

        let cities = self.params.cities.clone();
        let target = output_dir.clone();
        let extracted = tokio::task::spawn_blocking(move || {
            extract_matching(Cursor::new(archive), &cities, &target)
        })
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))??;

        info!(
            "✅ Extracted {} INMET file(s) into {}",
            extracted.len(),
            output_dir.display()
        );
        Ok(())
    }

    fn source_name(&self) -> &'static str {
        "INMET"
    }
}
