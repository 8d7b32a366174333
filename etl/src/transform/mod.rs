//! Transformation module.
//!
//! - Normalize: date, season and composer string cleanups
//! - Flatten: program records to one row per work
//! - Pipeline: load, flatten and export in one call

pub mod flatten;
pub mod normalize;
pub mod pipeline;

pub use flatten::{extract_program, extract_programs, extract_work, flatten, flatten_document, FlattenOptions};
pub use normalize::{clean_date, extract_composer_name, extract_text, simplify_season};
pub use pipeline::*;
