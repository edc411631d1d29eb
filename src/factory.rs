use crate::errors::FactoryError;
use crate::models::StrategyParams;
use crate::repository::Repository;
use crate::strategies::{ExtractionStrategy, InmetStrategy};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Builds a strategy from a site name, its raw parameters and its repository.
///
/// Each constructor deserializes the parameters into the strategy's own
/// parameter struct, so keys it does not declare are dropped there.
pub type StrategyConstructor = fn(
    &str,
    &StrategyParams,
    Arc<dyn Repository>,
) -> Result<Box<dyn ExtractionStrategy>, FactoryError>;

/// Site name to strategy constructor
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    constructors: HashMap<String, StrategyConstructor>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every source this crate ships
    pub fn builtin() -> Self {
        Self::new().with("inmet", InmetStrategy::build)
    }

    pub fn with(mut self, site: impl Into<String>, constructor: StrategyConstructor) -> Self {
        self.constructors.insert(site.into(), constructor);
        self
    }

    pub fn contains(&self, site: &str) -> bool {
        self.constructors.contains_key(site)
    }

    pub fn get(&self, site: &str) -> Option<StrategyConstructor> {
        self.constructors.get(site).copied()
    }

    pub fn sites(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

/// Creates strategies bound to one repository
pub struct ExtractorFactory<'a> {
    repository: Arc<dyn Repository>,
    registry: &'a StrategyRegistry,
}

impl<'a> ExtractorFactory<'a> {
    pub fn new(repository: Arc<dyn Repository>, registry: &'a StrategyRegistry) -> Self {
        Self {
            repository,
            registry,
        }
    }

    /// Look up `site_name` and build its strategy with the factory's repository
    pub fn create(
        &self,
        site_name: &str,
        params: &StrategyParams,
    ) -> Result<Box<dyn ExtractionStrategy>, FactoryError> {
        let constructor = self
            .registry
            .get(site_name)
            .ok_or_else(|| FactoryError::UnknownSite(site_name.to_string()))?;

        debug!("Building strategy for site '{}'", site_name);
        constructor(site_name, params, Arc::clone(&self.repository))
    }
}
