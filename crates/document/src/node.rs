//! Generic tree node: the value type the builder produces.

use indexmap::IndexMap;

/// One node of a document tree.
///
/// Map keys are unique and keep their insertion order, so serializing the
/// same tree twice gives identical output.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Node>),
    Map(IndexMap<String, Node>),
}

impl Node {
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Node::Float(f) => Some(*f),
            Node::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

// ============================================================================
// Scalar conversions
// ============================================================================

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Int(i)
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Int(i64::from(i))
    }
}

impl From<u32> for Node {
    fn from(i: u32) -> Self {
        Node::Int(i64::from(i))
    }
}

impl From<usize> for Node {
    fn from(i: usize) -> Self {
        // Saturate rather than wrap on 64-bit counts beyond i64 range.
        Node::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Float(f)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_owned())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

// ============================================================================
// serde_json interop (the external printer/parser)
// ============================================================================

impl From<Node> for serde_json::Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Null => serde_json::Value::Null,
            Node::Bool(b) => serde_json::Value::Bool(b),
            Node::Int(i) => serde_json::Value::from(i),
            Node::Float(f) => serde_json::Value::from(f),
            Node::String(s) => serde_json::Value::String(s),
            Node::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Node::Map(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::Int(i)
                } else {
                    // u64 beyond i64::MAX, or a float
                    Node::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Node::String(s),
            serde_json::Value::Array(items) => {
                Node::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => Node::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Node::from(()), Node::Null);
        assert_eq!(Node::from(true), Node::Bool(true));
        assert_eq!(Node::from(42), Node::Int(42));
        assert_eq!(Node::from(2.5), Node::Float(2.5));
        assert_eq!(Node::from("map"), Node::String("map".to_owned()));
    }

    #[test]
    fn test_usize_conversion_saturates() {
        assert_eq!(Node::from(7usize), Node::Int(7));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(Node::from(usize::MAX), Node::Int(i64::MAX));
    }

    #[test]
    fn test_accessors() {
        let node = Node::Int(7);
        assert_eq!(node.as_int(), Some(7));
        assert_eq!(node.as_float(), Some(7.0));
        assert_eq!(node.as_str(), None);
        assert!(!node.is_null());
    }

    #[test]
    fn test_json_value_round_trip() {
        let mut entries = IndexMap::new();
        entries.insert("zulu".to_owned(), Node::Int(1));
        entries.insert("alpha".to_owned(), Node::Array(vec![Node::Null, Node::Bool(false)]));
        entries.insert("mike".to_owned(), Node::Float(0.25));
        let tree = Node::Map(entries);

        let value: serde_json::Value = tree.clone().into();
        let text = value.to_string();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(Node::from(parsed), tree);

        // Insertion order survives printing.
        let zulu = text.find("zulu").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zulu < alpha);
    }
}
