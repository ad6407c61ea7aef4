//! Schema analysis: type inference, header detection, and key discovery.

mod keys;
mod schema;

pub use keys::{candidate_keys, foreign_keys, iter_foreign_keys};
pub use schema::{SchemaAnalyzer, has_header, infer_schema};
