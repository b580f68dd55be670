//! Untyped driver value.

/// A value as exchanged with a relational-storage driver.
///
/// `Null` is the absence marker. The remaining variants cover the kinds
/// drivers natively traffic in; `Array` stands in for composite column
/// types (which have no byte coercion).
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    Bytes(Vec<u8>),
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<DriverValue>),
}

impl DriverValue {
    /// Kind tag, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Text(_) => "text",
            DriverValue::Integer(_) => "integer",
            DriverValue::Float(_) => "float",
            DriverValue::Bool(_) => "bool",
            DriverValue::Array(_) => "array",
        }
    }

    /// Returns `true` if this is the absence marker.
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(bytes: Vec<u8>) -> Self {
        DriverValue::Bytes(bytes)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(bytes: &[u8]) -> Self {
        DriverValue::Bytes(bytes.to_vec())
    }
}

impl From<String> for DriverValue {
    fn from(text: String) -> Self {
        DriverValue::Text(text)
    }
}

impl From<&str> for DriverValue {
    fn from(text: &str) -> Self {
        DriverValue::Text(text.to_string())
    }
}

impl From<i64> for DriverValue {
    fn from(n: i64) -> Self {
        DriverValue::Integer(n)
    }
}

impl From<f64> for DriverValue {
    fn from(n: f64) -> Self {
        DriverValue::Float(n)
    }
}

impl From<bool> for DriverValue {
    fn from(b: bool) -> Self {
        DriverValue::Bool(b)
    }
}
