//! Markup surface: element and attribute encoding.
//!
//! Encoding goes through [`XmlWriter`]; decoding reads nodes of a parsed
//! [`roxmltree::Document`].

mod name;
mod reader;
mod writer;

pub use name::{StartElement, XmlAttr, XmlName};
pub use reader::{attr_of, child_element, element_text};
pub use roxmltree::{Document, Node};
pub use writer::XmlWriter;
