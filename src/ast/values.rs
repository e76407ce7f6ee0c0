use serde::{Deserialize, Serialize};

/// A literal column value.
///
/// Serde uses the untagged representation, so values travel as plain
/// JSON scalars (`null`, `true`, `21`, `"Krish"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// String
    String(String),
}

impl Value {
    /// True when the value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True when the runtime kind is a string. Only string values get
    /// double quotes in the rendered SQL.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// The value's bare text, before any string quoting. Null renders
    /// as the lowercase word `null`.
    pub fn lexeme(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => s.clone(),
        }
    }

    /// Human-readable kind name, used in validation errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl std::fmt::Display for Value {
    /// SQL literal rendering: strings wrap in double quotes with no
    /// escaping of embedded quotes, everything else is the bare lexeme.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            other => f.write_str(&other.lexeme()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_rendering() {
        assert_eq!(Value::from("Tejas").to_string(), "\"Tejas\"");
        assert_eq!(Value::from(21).to_string(), "21");
        assert_eq!(Value::from(21.5).to_string(), "21.5");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_embedded_quotes_pass_through() {
        // The inline-literal contract: no escaping happens.
        assert_eq!(Value::from("O\"Brien").to_string(), "\"O\"Brien\"");
    }

    #[test]
    fn test_untagged_scalars() {
        assert_eq!(
            serde_json::from_str::<Value>("\"Krish\"").unwrap(),
            Value::String("Krish".to_string())
        );
        assert_eq!(serde_json::from_str::<Value>("21").unwrap(), Value::Int(21));
        assert_eq!(serde_json::from_str::<Value>("null").unwrap(), Value::Null);
        assert_eq!(serde_json::to_string(&Value::Bool(false)).unwrap(), "false");
    }
}
