use std::collections::BTreeMap;

/// Value of a single attribute inside an info report block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// `Key: value` on a single line
    Scalar(String),
    /// `Key:` followed by more deeply indented lines, one entry per line
    List(Vec<String>),
}

impl AttributeValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            AttributeValue::Scalar(value) => Some(value),
            AttributeValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Scalar(_) => None,
            AttributeValue::List(items) => Some(items),
        }
    }
}

/// DependencyRecord represents one block of a `conan info` report
///
/// The identifier is the raw header token (usually `name/version`, but may be
/// a bare name or a full recipe reference). Attribute keys are case-sensitive
/// and unique; setting a key twice keeps the last value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    identifier: String,
    attributes: BTreeMap<String, AttributeValue>,
}

impl DependencyRecord {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Returns the scalar value for `key`, or `None` when absent or list-valued
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(AttributeValue::as_scalar)
    }

    /// Returns the list value for `key`, or `None` when absent or scalar-valued
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.attribute(key).and_then(AttributeValue::as_list)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.attributes.insert(key.into(), value);
    }
}
