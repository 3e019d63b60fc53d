//! Axum extractors for request handling

mod path;
mod validated;

pub use path::{ApiPath, LabelPath, NamespacePath};
pub use validated::ValidatedJson;
