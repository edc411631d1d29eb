pub mod archive;
pub mod inmet;
pub mod traits;
pub mod types;

pub use inmet::InmetStrategy;
pub use traits::ExtractionStrategy;
pub use types::InmetParams;
