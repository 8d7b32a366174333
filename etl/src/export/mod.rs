//! Pipe-delimited table export.
//!
//! Layout matches the historical dataframe dump: a header row whose first
//! cell is empty, then one line per row prefixed with its 0-based index.
//!
//! ```text
//! |programID|date|Time|eventType|Location|Venue|composerName|workTitle
//! 0|3853|1842-12-07|8:00PM|Subscription Season|Manhattan, NY|Apollo Rooms|...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::ExportResult;
use crate::models::{Column, OutputRow};

/// Field separator.
pub const DELIMITER: u8 = b'|';

/// Write `rows` to `writer`.
pub fn write_table<W: Write>(writer: W, rows: &[OutputRow], columns: &[Column]) -> ExportResult<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let header = std::iter::once("").chain(columns.iter().map(Column::header));
    wtr.write_record(header)?;

    for (index, row) in rows.iter().enumerate() {
        let index = index.to_string();
        let record = std::iter::once(index.as_str()).chain(columns.iter().map(|c| row.get(*c)));
        wtr.write_record(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write `rows` to a file, replacing any existing file at `path`.
pub fn write_table_file<P: AsRef<Path>>(
    path: P,
    rows: &[OutputRow],
    columns: &[Column],
) -> ExportResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_table(&mut writer, rows, columns)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, composer: &str, title: &str) -> OutputRow {
        OutputRow {
            program_id: id.into(),
            date: "1842-12-07".into(),
            time: "8:00PM".into(),
            event_type: "Subscription Season".into(),
            location: "Manhattan, NY".into(),
            venue: "Apollo Rooms".into(),
            composer_name: composer.into(),
            work_title: title.into(),
            conductor_name: "Hill, Ureli Corelli".into(),
        }
    }

    fn render(rows: &[OutputRow], columns: &[Column]) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, rows, columns).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_and_index() {
        let out = render(
            &[row("3853", "Beethoven", "SYMPHONY NO. 5"), row("3853", "Weber", "OBERON")],
            &Column::selection(false),
        );
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0],
            "|programID|date|Time|eventType|Location|Venue|composerName|workTitle"
        );
        assert_eq!(
            lines[1],
            "0|3853|1842-12-07|8:00PM|Subscription Season|Manhattan, NY|Apollo Rooms|Beethoven|SYMPHONY NO. 5"
        );
        assert!(lines[2].starts_with("1|3853|"));
        assert!(out.ends_with("OBERON\n"));
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let out = render(&[], &Column::selection(false));
        assert_eq!(out, "|programID|date|Time|eventType|Location|Venue|composerName|workTitle\n");
    }

    #[test]
    fn test_conductor_column() {
        let out = render(&[row("1", "Beethoven", "X")], &Column::selection(true));
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].ends_with("|workTitle|conductorName"));
        assert!(lines[1].ends_with("|X|Hill, Ureli Corelli"));
    }

    #[test]
    fn test_quotes_fields_with_delimiter() {
        let out = render(&[row("1", "Lennon|McCartney", "\"Yesterday\"")], &Column::selection(false));
        assert!(out.contains("|\"Lennon|McCartney\"|\"\"\"Yesterday\"\"\"\n"));
    }

    #[test]
    fn test_file_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NY_Philharmonic_df.csv");
        std::fs::write(&path, "stale contents that are longer than the table").unwrap();

        write_table_file(&path, &[], &Column::selection(false)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("|programID|"));
        assert!(!written.contains("stale"));
    }
}
