//! Flatten program records into one row per performed work.
//!
//! ```text
//! <program>                          OutputRow
//! ├── programID, concertInfo   →     ┌──────────────────────────────┐
//! └── worksInfo                      │ 3853 | 1842-12-07 | ... | W1 │
//!     ├── work W1                    │ 3853 | 1842-12-07 | ... | W2 │
//!     └── work W2                    └──────────────────────────────┘
//! ```
//!
//! Extraction fails fast: the first program missing a scalar field aborts the
//! whole run. Programs without works contribute no rows.

use crate::error::{ExtractError, ExtractResult};
use crate::logs::log_warning;
use crate::models::{OutputRow, Program, Work};
use crate::parser::Element;

use super::normalize::{clean_date, extract_composer_name, extract_text, simplify_season};

/// Options controlling how works become rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenOptions {
    /// Reduce `composerName` to the surname via [`extract_composer_name`].
    pub surname_only: bool,
}

/// Extract every top-level `program` record under `root`, in document order.
pub fn extract_programs(root: &Element) -> ExtractResult<Vec<Program>> {
    root.find_all("program")
        .enumerate()
        .map(|(index, program)| extract_program(program, index))
        .collect()
}

/// Extract one program record.
///
/// `index` is the record position, used to name the program in errors when
/// `programID` itself is missing.
pub fn extract_program(program: &Element, index: usize) -> ExtractResult<Program> {
    let program_id = program
        .find("programID")
        .map(|el| el.text().unwrap_or_default().to_string())
        .ok_or_else(|| missing("programID", &format!("#{}", index)))?;

    let concert_info = program
        .find("concertInfo")
        .ok_or_else(|| missing("concertInfo", &program_id))?;

    let required = |field: &str| -> ExtractResult<String> {
        concert_info
            .find(field)
            .map(|el| el.text().unwrap_or_default().to_string())
            .ok_or_else(|| missing(field, &program_id))
    };

    let date = clean_date(&required("Date")?)?;
    let time = required("Time")?;
    let event_type = required("eventType")?;
    let location = required("Location")?;
    let venue = required("Venue")?;

    let season = program
        .find("season")
        .and_then(Element::text)
        .and_then(|raw| match simplify_season(raw) {
            Ok(year) => Some(year),
            Err(e) => {
                log_warning(format!("Program '{}': ignoring season: {}", program_id, e));
                None
            }
        });

    let works = match program.find("worksInfo") {
        Some(works_info) => works_info.find_all("work").map(extract_work).collect(),
        None => {
            log_warning(format!("Program '{}' has no worksInfo, skipping", program_id));
            Vec::new()
        }
    };

    Ok(Program {
        program_id,
        season,
        date,
        time,
        event_type,
        location,
        venue,
        works,
    })
}

/// Extract one `work` entry. Absent fields become `"NA"`.
pub fn extract_work(work: &Element) -> Work {
    Work {
        composer_name: extract_text(work.find("composerName")),
        work_title: extract_text(work.find("workTitle")),
        conductor_name: extract_text(work.find("conductorName")),
    }
}

/// One row per (program, work) pair, programs and works in order.
pub fn flatten(programs: &[Program], options: FlattenOptions) -> Vec<OutputRow> {
    programs
        .iter()
        .flat_map(|program| {
            program.works.iter().map(move |work| {
                let mut row = OutputRow::new(program, work);
                if options.surname_only {
                    row.composer_name = extract_composer_name(&row.composer_name);
                }
                row
            })
        })
        .collect()
}

/// Extract and flatten a whole document.
pub fn flatten_document(root: &Element, options: FlattenOptions) -> ExtractResult<Vec<OutputRow>> {
    let programs = extract_programs(root)?;
    Ok(flatten(&programs, options))
}

fn missing(field: &str, program_id: &str) -> ExtractError {
    ExtractError::RequiredFieldMissing {
        field: field.to_string(),
        program_id: program_id.to_string(),
    }
}
