use serde_json::{Map, Value};

/// Caller-supplied parameters for a remote call.
///
/// JSON-RPC methods accept either a keyed object or a positional array,
/// and some Zabbix methods (bulk delete-by-id, for one) only understand
/// the array form. The variants keep that distinction explicit instead
/// of sniffing runtime types.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Params {
    #[default]
    Empty,
    Scalar(Value),
    List(Vec<Value>),
    Object(Map<String, Value>),
}

impl Params {
    /// Normalize into the wire-level `params` value:
    ///
    /// - empty input becomes an object,
    /// - a scalar is wrapped into a single-element array,
    /// - session defaults are merged underneath object-style params
    ///   (caller-supplied keys win on conflict),
    /// - a non-empty positional array passes through untouched, with no
    ///   default keys injected.
    pub fn normalize(self, defaults: &Map<String, Value>) -> Value {
        match self {
            Params::Empty => Value::Object(merge_defaults(Map::new(), defaults)),
            Params::Scalar(value) => Value::Array(vec![value]),
            Params::List(items) if items.is_empty() => {
                Value::Object(merge_defaults(Map::new(), defaults))
            }
            Params::List(items) => Value::Array(items),
            Params::Object(map) => Value::Object(merge_defaults(map, defaults)),
        }
    }
}

fn merge_defaults(caller: Map<String, Value>, defaults: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = defaults.clone();
    for (key, value) in caller {
        merged.insert(key, value);
    }
    merged
}

impl From<()> for Params {
    fn from(_: ()) -> Self {
        Params::Empty
    }
}

impl From<Value> for Params {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Params::Empty,
            Value::Array(items) => Params::List(items),
            Value::Object(map) => Params::Object(map),
            scalar => Params::Scalar(scalar),
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params::Object(map)
    }
}

impl From<Vec<Value>> for Params {
    fn from(items: Vec<Value>) -> Self {
        Params::List(items)
    }
}

impl From<&str> for Params {
    fn from(value: &str) -> Self {
        Params::Scalar(Value::String(value.to_string()))
    }
}

impl From<String> for Params {
    fn from(value: String) -> Self {
        Params::Scalar(Value::String(value))
    }
}

impl From<i64> for Params {
    fn from(value: i64) -> Self {
        Params::Scalar(Value::from(value))
    }
}

impl From<bool> for Params {
    fn from(value: bool) -> Self {
        Params::Scalar(Value::Bool(value))
    }
}
