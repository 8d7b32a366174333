//! Run configuration.

use serde::Serialize;
use std::path::PathBuf;

use crate::models::Column;
use crate::transform::flatten::FlattenOptions;

/// Archive file read when no input is given.
pub const DEFAULT_INPUT: &str = "complete.xml";

/// Table written when no output is given.
pub const DEFAULT_OUTPUT: &str = "NY_Philharmonic_df.csv";

/// Options for the transformation pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformOptions {
    /// Archive XML to read
    pub input: PathBuf,

    /// Delimited table to write (overwritten)
    pub output: PathBuf,

    /// Append a `conductorName` column
    pub include_conductor: bool,

    /// Reduce composer names to the surname
    pub surname_only: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            include_conductor: false,
            surname_only: false,
        }
    }
}

impl TransformOptions {
    /// Columns emitted for these options.
    pub fn columns(&self) -> Vec<Column> {
        Column::selection(self.include_conductor)
    }

    pub fn flatten_options(&self) -> FlattenOptions {
        FlattenOptions {
            surname_only: self.surname_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_historical_files() {
        let options = TransformOptions::default();
        assert_eq!(options.input, PathBuf::from("complete.xml"));
        assert_eq!(options.output, PathBuf::from("NY_Philharmonic_df.csv"));
        assert_eq!(options.columns().len(), 8);
        assert!(!options.flatten_options().surname_only);
    }
}
