use crate::errors::ExtractionError;
use async_trait::async_trait;

/// Common trait for all extraction sources
/// New sources implement this and add one registry entry
#[async_trait]
pub trait ExtractionStrategy: Send + Sync {
    /// Download, filter and unpack this source's archive
    async fn extract_data(&self) -> Result<(), ExtractionError>;

    /// Get the name of the extraction source
    fn source_name(&self) -> &'static str;
}
