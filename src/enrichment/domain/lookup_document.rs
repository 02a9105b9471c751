use serde_json::Value;

/// Raw lookup response for one CVE ID
///
/// The lookup service publishes CVE JSON 5 records with no schema guarantee
/// beyond the handful of fields the extractor reads, so the body is kept as
/// an untyped tree and navigated through [`JsonNode`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LookupDocument {
    root: Value,
}

impl LookupDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// A document representing an empty (or unparseable) response body
    pub fn empty() -> Self {
        Self { root: Value::Null }
    }

    /// Parses a response body, degrading to an empty document on invalid JSON
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body)
            .map(Self::new)
            .unwrap_or_else(|_| Self::empty())
    }

    pub fn root(&self) -> JsonNode<'_> {
        JsonNode::new(Some(&self.root))
    }
}

/// Total accessor over an optional JSON value
///
/// Every navigation step returns another node, absent when the key, index
/// or type does not line up. Nothing here panics.
#[derive(Debug, Clone, Copy)]
pub struct JsonNode<'a> {
    value: Option<&'a Value>,
}

impl<'a> JsonNode<'a> {
    pub fn new(value: Option<&'a Value>) -> Self {
        Self { value }
    }

    /// Object member lookup
    pub fn get(&self, key: &str) -> JsonNode<'a> {
        JsonNode::new(self.value.and_then(|v| v.as_object()).and_then(|o| o.get(key)))
    }

    /// Array element lookup
    pub fn at(&self, index: usize) -> JsonNode<'a> {
        JsonNode::new(self.value.and_then(|v| v.as_array()).and_then(|a| a.get(index)))
    }

    /// Iterates array elements; yields nothing for absent or non-array nodes
    pub fn items(&self) -> impl Iterator<Item = JsonNode<'a>> + 'a {
        self.value
            .and_then(|v| v.as_array())
            .map(|a| a.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|v| JsonNode::new(Some(v)))
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    pub fn is_object(&self) -> bool {
        matches!(self.value, Some(Value::Object(_)))
    }

    /// Loose truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy
    pub fn is_truthy(&self) -> bool {
        match self.value {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.value.and_then(|v| v.as_str())
    }

    /// Scalar rendered as text: strings verbatim, numbers and booleans in JSON form
    pub fn to_text(&self) -> Option<String> {
        match self.value? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
