//! Data transfer objects for the HTTP layer

mod requests;
mod responses;

pub use requests::ResolveLabelsRequest;
pub use responses::{
    HealthResponse, LabelCatalogResponse, LabelResponse, ResolveLabelsResponse, ResolvedLabel,
};
