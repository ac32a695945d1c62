//! External collaborators

pub mod document;
pub mod model;

pub use document::DocumentTextLoader;
pub use model::DemandModelClient;
