//! Error types for the program flattening pipeline.
//!
//! - [`XmlError`] - reading and parsing the archive document
//! - [`ExtractError`] - pulling program and work fields out of the tree
//! - [`ExportError`] - writing the delimited table
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Conversion into [`PipelineError`] is automatic via `From`, so `?` works
//! across stage boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// XML Errors
// =============================================================================

/// Errors while loading the archive document.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed XML.
    #[error("Invalid XML at byte {position}: {message}")]
    ParseError { position: u64, message: String },

    /// Closing tag without a matching opening tag, or unclosed elements at EOF.
    #[error("Unbalanced XML: {0}")]
    Unbalanced(String),

    /// Content after the root element closed.
    #[error("Multiple root elements: <{extra}> after <{first}>")]
    MultipleRoots { first: String, extra: String },

    /// Document has no root element.
    #[error("XML document is empty")]
    EmptyDocument,
}

// =============================================================================
// Extraction Errors
// =============================================================================

/// Errors while extracting fields from a program record.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    /// A program is missing one of its scalar fields.
    #[error("Program '{program_id}' is missing required field '{field}'")]
    RequiredFieldMissing { field: String, program_id: String },

    /// Date or season does not start with the expected pattern.
    #[error("Malformed date: '{0}'")]
    MalformedDate(String),
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while writing the output table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create or write the output file.
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    /// Delimited writer error.
    #[error("CSV writer error: {0}")]
    CsvError(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input loading error.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// Field extraction error.
    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),

    /// Output error.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for XML loading.
pub type XmlResult<T> = Result<T, XmlError>;

/// Result type for field extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Result type for table export.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
