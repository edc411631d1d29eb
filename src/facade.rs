use crate::config::AppSettings;
use crate::errors::{ExtractionError, RunError, SiteFailure};
use crate::factory::{ExtractorFactory, StrategyRegistry};
use crate::models::SiteSettings;
use crate::repository::{LocalRepository, Repository};
use crate::strategies::ExtractionStrategy;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

/// A strategy ready to run for one site
pub struct SiteJob {
    pub site: String,
    pub strategy: Box<dyn ExtractionStrategy>,
}

/// Runs every configured site's extraction on a bounded pool of tasks
pub struct ExtractionFacade {
    settings: AppSettings,
    registry: StrategyRegistry,
}

impl ExtractionFacade {
    pub fn new(settings: AppSettings, registry: StrategyRegistry) -> Self {
        Self { settings, registry }
    }

    /// Build one repository and one strategy per site.
    ///
    /// Entries that are not tables, and sites without a registered strategy,
    /// are skipped.
    pub fn build_jobs(&self) -> Result<Vec<SiteJob>, RunError> {
        let mut jobs = Vec::new();

        for (site_name, value) in &self.settings.sites {
            if !value.is_object() {
                debug!("Skipping non-table entry '{}'", site_name);
                continue;
            }
            if !self.registry.contains(site_name) {
                warn!("No extraction strategy registered for '{}', skipping", site_name);
                continue;
            }

            let site: SiteSettings =
                serde_json::from_value(value.clone()).map_err(|source| RunError::Config {
                    site: site_name.clone(),
                    source,
                })?;

            let repository: Arc<dyn Repository> =
                Arc::new(LocalRepository::from_settings(&site.repository));
            let factory = ExtractorFactory::new(repository, &self.registry);
            let strategy = factory.create(site_name, &site.strategy)?;

            jobs.push(SiteJob {
                site: site_name.clone(),
                strategy,
            });
        }

        Ok(jobs)
    }

    /// Extract every site and wait for all of them.
    ///
    /// All jobs run to completion; every failure is reported together.
    pub async fn run(&self) -> Result<(), RunError> {
        let jobs = self.build_jobs()?;
        let total = jobs.len();
        info!(
            "Running {} extraction job(s) on a pool of {}",
            total, self.settings.pool_size
        );

        let semaphore = Arc::new(Semaphore::new(self.settings.pool_size));
        let (sites, handles): (Vec<_>, Vec<_>) = jobs
            .into_iter()
            .map(|job| {
                let semaphore = Arc::clone(&semaphore);
                let site = job.site.clone();
                let handle = tokio::spawn(async move {
                    let _permit = semaphore
                        .acquire_owned()
                        .await
                        .map_err(|e| ExtractionError::Task(e.to_string()))?;
                    info!(
                        "Starting {} extraction for site '{}'",
                        job.strategy.source_name(),
                        job.site
                    );
                    job.strategy.extract_data().await
                });
                (site, handle)
            })
            .unzip();

        let mut failures = Vec::new();
        for (site, result) in sites.into_iter().zip(join_all(handles).await) {
            let message = match result {
                Ok(Ok(())) => {
                    info!("Site '{}' finished", site);
                    continue;
                }
                Ok(Err(e)) => e.to_string(),
                Err(e) => format!("extraction job did not complete: {}", e),
            };
            error!("Extraction for site '{}' failed: {}", site, message);
            failures.push(SiteFailure { site, message });
        }

        if !failures.is_empty() {
            return Err(RunError::SitesFailed(failures));
        }

        println!("All {} extraction(s) completed.", total);
        Ok(())
    }
}
