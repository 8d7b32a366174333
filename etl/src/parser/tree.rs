//! Minimal in-memory element tree.
//!
//! Only what the archive needs: element names, leading text, and ordered
//! children. Attributes, comments and processing instructions are dropped.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{XmlError, XmlResult};

/// An XML element with its children in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Text that appears before the first child element, if any.
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// First direct child with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given name, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text content, `None` for an empty element.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn push_text(&mut self, text: &str) {
        // Text after the first child is tail text and is not kept.
        if !self.children.is_empty() {
            return;
        }
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }
}

/// Parse a whole document and return its root element.
pub fn parse_document(content: &str) -> XmlResult<Element> {
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| XmlError::ParseError {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;

        match event {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                stack.push(Element::new(name));
            }
            Event::Empty(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                attach(&mut stack, &mut root, Element::new(name))?;
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    XmlError::Unbalanced(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    let unescaped = text.unescape().map_err(|e| XmlError::ParseError {
                        position: reader.buffer_position(),
                        message: e.to_string(),
                    })?;
                    current.push_text(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Unbalanced(format!("unclosed element <{}>", open.name)));
    }

    root.ok_or(XmlError::EmptyDocument)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> XmlResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if let Some(first) = root {
                return Err(XmlError::MultipleRoots {
                    first: first.name.clone(),
                    extra: element.name,
                });
            }
            *root = Some(element);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<programs>
  <program><programID>1</programID></program>
  <program><programID>2</programID></program>
</programs>"#;
        let root = parse_document(xml).unwrap();

        assert_eq!(root.name, "programs");
        let ids: Vec<_> = root
            .find_all("program")
            .filter_map(|p| p.find("programID").and_then(Element::text))
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_empty_element_has_no_text() {
        let root = parse_document("<a><Time/><Venue></Venue></a>").unwrap();
        assert_eq!(root.find("Time").unwrap().text(), None);
        assert_eq!(root.find("Venue").unwrap().text(), None);
    }

    #[test]
    fn test_entities_and_cdata() {
        let root = parse_document(
            "<w><t>Romeo &amp; Juliet</t><c><![CDATA[Gilbert & Sullivan]]></c></w>",
        )
        .unwrap();
        assert_eq!(root.find("t").unwrap().text(), Some("Romeo & Juliet"));
        assert_eq!(root.find("c").unwrap().text(), Some("Gilbert & Sullivan"));
    }

    #[test]
    fn test_find_missing_child() {
        let root = parse_document("<work><workTitle>X</workTitle></work>").unwrap();
        assert!(root.find("composerName").is_none());
    }

    #[test]
    fn test_unclosed_element_error() {
        let result = parse_document("<programs><program>");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_document_error() {
        let result = parse_document("<?xml version=\"1.0\"?>");
        assert!(matches!(result, Err(XmlError::EmptyDocument)));
    }

    #[test]
    fn test_multiple_roots_error() {
        let result = parse_document("<programs><program/></programs><programs><program/></programs>");
        assert!(matches!(
            result,
            Err(XmlError::MultipleRoots { ref first, ref extra }) if first == "programs" && extra == "programs"
        ));

        let result = parse_document("<programs/><stray/>");
        assert!(matches!(result, Err(XmlError::MultipleRoots { .. })));
    }
}
