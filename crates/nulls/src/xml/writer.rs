//! Minimal XML text writer.

use crate::error::NullError;

use super::name::{StartElement, XmlName};

/// Appends escaped XML markup to an internal buffer.
///
/// Only what nullable encoders need: start tags with attributes, escaped
/// character data and end tags. Attributes with an empty name are dropped.
/// Characters XML 1.0 cannot carry are written as U+FFFD.
///
/// # Example
///
/// ```
/// use nulls::xml::{StartElement, XmlAttr, XmlWriter};
///
/// let mut writer = XmlWriter::new();
/// let start = StartElement::new("row")
///     .with_attr(XmlAttr::new("id", "7"))
///     .with_attr(XmlAttr::empty());
/// writer.encode_element(&start, "a < b").unwrap();
/// assert_eq!(writer.flush(), r#"<row id="7">a &lt; b</row>"#);
/// ```
#[derive(Debug, Default)]
pub struct XmlWriter {
    out: String,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Writes `<name attr="...">`.
    pub fn write_start(&mut self, start: &StartElement) -> Result<(), NullError> {
        check_name(&start.name)?;
        self.out.push('<');
        self.out.push_str(&start.name.local);
        for attr in start.attrs.iter().filter(|attr| !attr.is_empty()) {
            self.out.push(' ');
            self.out.push_str(&attr.name.local);
            self.out.push_str("=\"");
            escape_into(&mut self.out, &attr.value, true);
            self.out.push('"');
        }
        self.out.push('>');
        Ok(())
    }

    /// Writes `</name>`.
    pub fn write_end(&mut self, name: &XmlName) -> Result<(), NullError> {
        check_name(name)?;
        self.out.push_str("</");
        self.out.push_str(&name.local);
        self.out.push('>');
        Ok(())
    }

    /// Writes escaped character data.
    pub fn write_text(&mut self, text: &str) {
        escape_into(&mut self.out, text, false);
    }

    /// Writes a complete element whose content is `text`.
    pub fn encode_element(&mut self, start: &StartElement, text: &str) -> Result<(), NullError> {
        self.write_start(start)?;
        self.write_text(text);
        self.write_end(&start.name)
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Returns the written markup and resets the writer.
    pub fn flush(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

fn check_name(name: &XmlName) -> Result<(), NullError> {
    if name.is_empty() {
        return Err(NullError::Xml("start tag with no name".to_owned()));
    }
    Ok(())
}

fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => out.push_str("&#13;"),
            // Attribute-value normalization would turn these into spaces.
            '\n' if attribute => out.push_str("&#10;"),
            '\t' if attribute => out.push_str("&#9;"),
            ch if !is_xml_char(ch) => out.push('\u{FFFD}'),
            _ => out.push(ch),
        }
    }
}

/// The `Char` production of XML 1.0; no escape makes other characters legal.
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}
