pub mod extraction;
pub mod prediction;

pub use extraction::ExtractionService;
pub use prediction::PredictionService;
