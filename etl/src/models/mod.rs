//! Domain models for the flattening pipeline.
//!
//! - [`Program`] - one concert record with its scalar fields
//! - [`Work`] - one piece performed within a program
//! - [`OutputRow`] - a (program, work) pair flattened into table cells
//! - [`Column`] - output table columns in emission order

use serde::{Deserialize, Serialize};

/// Value used for work fields whose element is absent from the record.
pub const MISSING_VALUE: &str = "NA";

// =============================================================================
// Program
// =============================================================================

/// One concert event record, identified by `programID`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(rename = "programID")]
    pub program_id: String,
    /// Leading year of the season label, e.g. `1842` for `1842-43`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    /// Normalized to `YYYY-MM-DD`.
    pub date: String,
    /// Empty when the archive records no start time.
    pub time: String,
    pub event_type: String,
    pub location: String,
    pub venue: String,
    pub works: Vec<Work>,
}

// =============================================================================
// Work
// =============================================================================

/// One musical piece within a program.
///
/// Each field holds [`MISSING_VALUE`] when its element is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub composer_name: String,
    pub work_title: String,
    pub conductor_name: String,
}

impl Default for Work {
    fn default() -> Self {
        Self {
            composer_name: MISSING_VALUE.to_string(),
            work_title: MISSING_VALUE.to_string(),
            conductor_name: MISSING_VALUE.to_string(),
        }
    }
}

// =============================================================================
// Output Row
// =============================================================================

/// Output table columns, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    ProgramId,
    Date,
    Time,
    EventType,
    Location,
    Venue,
    ComposerName,
    WorkTitle,
    ConductorName,
}

impl Column {
    /// The eight columns of the historical table.
    pub const BASE: [Column; 8] = [
        Column::ProgramId,
        Column::Date,
        Column::Time,
        Column::EventType,
        Column::Location,
        Column::Venue,
        Column::ComposerName,
        Column::WorkTitle,
    ];

    /// Columns to emit, with the conductor column appended when requested.
    pub fn selection(include_conductor: bool) -> Vec<Column> {
        let mut columns = Self::BASE.to_vec();
        if include_conductor {
            columns.push(Column::ConductorName);
        }
        columns
    }

    /// Header label.
    pub fn header(&self) -> &'static str {
        match self {
            Column::ProgramId => "programID",
            Column::Date => "date",
            Column::Time => "Time",
            Column::EventType => "eventType",
            Column::Location => "Location",
            Column::Venue => "Venue",
            Column::ComposerName => "composerName",
            Column::WorkTitle => "workTitle",
            Column::ConductorName => "conductorName",
        }
    }
}

/// One (program, work) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub program_id: String,
    pub date: String,
    pub time: String,
    pub event_type: String,
    pub location: String,
    pub venue: String,
    pub composer_name: String,
    pub work_title: String,
    pub conductor_name: String,
}

impl OutputRow {
    pub fn new(program: &Program, work: &Work) -> Self {
        Self {
            program_id: program.program_id.clone(),
            date: program.date.clone(),
            time: program.time.clone(),
            event_type: program.event_type.clone(),
            location: program.location.clone(),
            venue: program.venue.clone(),
            composer_name: work.composer_name.clone(),
            work_title: work.work_title.clone(),
            conductor_name: work.conductor_name.clone(),
        }
    }

    /// Cell value for a column.
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::ProgramId => &self.program_id,
            Column::Date => &self.date,
            Column::Time => &self.time,
            Column::EventType => &self.event_type,
            Column::Location => &self.location,
            Column::Venue => &self.venue,
            Column::ComposerName => &self.composer_name,
            Column::WorkTitle => &self.work_title,
            Column::ConductorName => &self.conductor_name,
        }
    }
}
