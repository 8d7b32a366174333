//! Archive document loading with encoding auto-detection.
//!
//! Reads the whole file into memory, decodes it to UTF-8 and builds an
//! [`Element`] tree. No program-specific logic here.

pub mod tree;

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{XmlError, XmlResult};

pub use tree::{parse_document, Element};

/// Loaded document with metadata
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Root element of the document
    pub root: Element,
    /// Detected encoding
    pub encoding: String,
    /// Size of the input in bytes
    pub size_bytes: usize,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is taken as is; anything else is handed to chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the given encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes).into_owned(),
        // WHATWG treats latin-1 labels as windows-1252, a superset.
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(enc) => enc.decode(bytes).0.into_owned(),
            // Fallback: lossy UTF-8
            None => String::from_utf8_lossy(bytes).into_owned(),
        },
    }
}

/// Parse raw document bytes with encoding auto-detection.
pub fn parse_bytes_auto(bytes: &[u8]) -> XmlResult<LoadResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let root = parse_document(&content)?;

    Ok(LoadResult {
        root,
        encoding,
        size_bytes: bytes.len(),
    })
}

/// Load an archive file into memory.
///
/// # Errors
///
/// [`XmlError::InputNotFound`] when the path does not exist, otherwise any
/// read or parse failure.
pub fn load_document<P: AsRef<Path>>(path: P) -> XmlResult<LoadResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => XmlError::InputNotFound(path.to_path_buf()),
        _ => XmlError::IoError(e),
    })?;

    parse_bytes_auto(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_utf8() {
        assert_eq!(detect_encoding("Dvořák".as_bytes()), "utf-8");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_parse_bytes_auto() {
        let xml = "<programs><program><programID>7</programID></program></programs>";
        let result = parse_bytes_auto(xml.as_bytes()).unwrap();

        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.size_bytes, xml.len());
        assert_eq!(result.root.find_all("program").count(), 1);
    }

    fn latin1_archive() -> Vec<u8> {
        let xml = "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>
<programs>
  <program>
    <programID>10421</programID>
    <concertInfo>
      <Location>Paris, FRANCE</Location>
      <Venue>Société Philharmonique, Théâtre des Champs-Élysées</Venue>
    </concertInfo>
    <worksInfo>
      <work><composerName>Debussy,  Claude</composerName><workTitle>La mer</workTitle></work>
    </worksInfo>
  </program>
</programs>";
        let (bytes, _, unmappable) = encoding_rs::WINDOWS_1252.encode(xml);
        assert!(!unmappable);
        bytes.into_owned()
    }

    #[test]
    fn test_detect_latin1_document() {
        let bytes = latin1_archive();
        assert!(std::str::from_utf8(&bytes).is_err());

        let encoding = detect_encoding(&bytes);
        assert!(
            encoding == "iso-8859-1" || encoding == "windows-1252",
            "unexpected encoding {}",
            encoding
        );
    }

    #[test]
    fn test_parse_bytes_auto_latin1() {
        let result = parse_bytes_auto(&latin1_archive()).unwrap();
        assert_ne!(result.encoding, "utf-8");

        let program = result.root.find("program").unwrap();
        let concert = program.find("concertInfo").unwrap();
        assert_eq!(
            concert.find("Venue").and_then(Element::text),
            Some("Société Philharmonique, Théâtre des Champs-Élysées")
        );

        let work = program.find("worksInfo").and_then(|w| w.find("work")).unwrap();
        assert_eq!(work.find("composerName").and_then(Element::text), Some("Debussy,  Claude"));
    }

    #[test]
    fn test_load_latin1_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&latin1_archive()).unwrap();

        let result = load_document(file.path()).unwrap();
        let venue = result
            .root
            .find("program")
            .and_then(|p| p.find("concertInfo"))
            .and_then(|c| c.find("Venue"))
            .and_then(Element::text);
        assert_eq!(venue, Some("Société Philharmonique, Théâtre des Champs-Élysées"));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_document(dir.path()).unwrap_err();
        assert!(matches!(err, XmlError::IoError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("complete.xml");

        let err = load_document(&missing).unwrap_err();
        assert!(matches!(err, XmlError::InputNotFound(p) if p == missing));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<programs><program/></programs>").unwrap();

        let result = load_document(file.path()).unwrap();
        assert_eq!(result.root.name, "programs");
    }
}
