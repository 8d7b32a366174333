//! High-level pipeline: load, extract, flatten, export.
//!
//! # Example
//!
//! ```rust,ignore
//! use nyphil::{run, TransformOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = run(&TransformOptions::default())?;
//!     println!("Wrote {} rows", result.row_count);
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::TransformOptions;
use crate::error::PipelineResult;
use crate::export::write_table_file;
use crate::logs::{log_info, log_info_indent, log_success};
use crate::models::{OutputRow, Program};
use crate::parser::{load_document, LoadResult};

use super::flatten::{extract_programs, flatten};

/// Summary of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    /// Input metadata
    pub input_info: InputInfo,
    /// Number of program records read
    pub program_count: usize,
    /// Programs that contributed no rows
    pub empty_program_count: usize,
    /// Rows written
    pub row_count: usize,
    /// Options the run used, including where the table was written
    pub options: TransformOptions,
}

/// Input file information
#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    pub path: PathBuf,
    pub encoding: String,
    pub size_bytes: usize,
}

/// Load the archive and extract its programs.
pub fn load_programs(input: &Path) -> PipelineResult<(InputInfo, Vec<Program>)> {
    log_info(format!("Reading {}...", input.display()));
    let LoadResult {
        root,
        encoding,
        size_bytes,
    } = load_document(input)?;
    log_success(format!("Loaded {} bytes ({})", size_bytes, encoding));

    let programs = extract_programs(&root)?;
    log_success(format!("Extracted {} programs", programs.len()));

    let info = InputInfo {
        path: input.to_path_buf(),
        encoding,
        size_bytes,
    };
    Ok((info, programs))
}

/// Flatten already-extracted programs into rows.
pub fn transform_programs(programs: &[Program], options: &TransformOptions) -> Vec<OutputRow> {
    flatten(programs, options.flatten_options())
}

/// Run the whole pipeline.
///
/// Nothing is written if loading or extraction fails.
pub fn run(options: &TransformOptions) -> PipelineResult<PipelineSummary> {
    let (input_info, programs) = load_programs(&options.input)?;

    let rows = transform_programs(&programs, options);
    let empty_program_count = programs.iter().filter(|p| p.works.is_empty()).count();
    log_success(format!("Flattened {} rows", rows.len()));
    if empty_program_count > 0 {
        log_info_indent(format!("{} programs without works", empty_program_count), 1);
    }

    let columns = options.columns();
    log_info(format!("Writing {}...", options.output.display()));
    write_table_file(&options.output, &rows, &columns)?;
    log_success(format!("Wrote {} rows, {} columns", rows.len(), columns.len()));

    Ok(PipelineSummary {
        input_info,
        program_count: programs.len(),
        empty_program_count,
        row_count: rows.len(),
        options: options.clone(),
    })
}
