//! # nyphil - NY Philharmonic performance history flattener
//!
//! Reads the archive XML dump (`complete.xml`) and writes one pipe-delimited
//! row per performed work.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  XML File   │────▶│   Parser    │────▶│  Flatten    │────▶│  | table    │
//! │ (auto-enc)  │     │ (elem tree) │     │ (1 row/work)│     │ (indexed)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nyphil::{run, TransformOptions};
//!
//! let summary = run(&TransformOptions::default()).unwrap();
//! println!("Wrote {} rows", summary.row_count);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Program, Work, OutputRow
//! - [`parser`] - Document loading and element tree
//! - [`transform`] - Normalizers, flattener, pipeline
//! - [`export`] - Delimited table writer
//! - [`config`] - Run options
//! - [`logs`] - Progress logging

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod export;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{TransformOptions, DEFAULT_INPUT, DEFAULT_OUTPUT};

pub use error::{ExportError, ExtractError, PipelineError, PipelineResult, XmlError};

pub use models::{Column, OutputRow, Program, Work, MISSING_VALUE};

pub use parser::{load_document, parse_bytes_auto, parse_document, Element, LoadResult};

pub use transform::{
    clean_date, extract_composer_name, extract_programs, extract_text, flatten,
    flatten_document, simplify_season, FlattenOptions,
};

pub use transform::pipeline::{load_programs, run, transform_programs, InputInfo, PipelineSummary};

pub use export::{write_table, write_table_file};
