use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use time::OffsetDateTime;

/// One attribute value in a request's attribute context.
///
/// The kinds mirror what transport layers commonly deliver; this core never
/// interprets values itself, it only hands the bag to process functions and
/// the expression evaluator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeValue {
    String(String),
    Int64(i64),
    Double(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Timestamp(OffsetDateTime),
    Duration(Duration),
    StringMap(BTreeMap<String, String>),
}

/// Read-only view over one request's attributes.
///
/// Supplied per request by the calling layer and never retained across
/// `execute` calls.
pub trait AttributeBag: Send + Sync {
    fn get(&self, name: &str) -> Option<&AttributeValue>;

    /// Names present in the bag, in deterministic order.
    fn names(&self) -> Vec<&str>;
}

/// Map-backed attribute bag. An empty bag is legal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    values: BTreeMap<String, AttributeValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.values.insert(name.into(), value);
    }

    pub fn with(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.set(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AttributeBag for Attributes {
    fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    fn names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}
