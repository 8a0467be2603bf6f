//! Element and attribute names.

/// A local XML name. Namespaces are not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct XmlName {
    pub local: String,
}

impl XmlName {
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            local: local.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.local.is_empty()
    }
}

impl From<&str> for XmlName {
    fn from(local: &str) -> Self {
        Self::new(local)
    }
}

impl From<String> for XmlName {
    fn from(local: String) -> Self {
        Self { local }
    }
}

/// A single attribute.
///
/// An attribute with an empty name stands for "no attribute": writers drop
/// it instead of emitting `=""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlAttr {
    pub name: XmlName,
    pub value: String,
}

impl XmlAttr {
    pub fn new(name: impl Into<XmlName>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The omitted attribute.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// An opening tag: name plus attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartElement {
    pub name: XmlName,
    pub attrs: Vec<XmlAttr>,
}

impl StartElement {
    pub fn new(name: impl Into<XmlName>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Appends an attribute, skipping omitted ones.
    pub fn with_attr(mut self, attr: XmlAttr) -> Self {
        self.push_attr(attr);
        self
    }

    pub fn push_attr(&mut self, attr: XmlAttr) {
        if !attr.is_empty() {
            self.attrs.push(attr);
        }
    }
}

impl From<&str> for StartElement {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
