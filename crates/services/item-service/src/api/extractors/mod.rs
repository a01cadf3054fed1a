//! Custom request extractors.

mod params;
mod validated_json;

pub use params::{PathParam, QueryParams};
pub use validated_json::ValidatedJson;
