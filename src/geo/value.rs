use serde_json::Value as JsonValue;
use std::{collections::BTreeMap, fmt::{Debug, Display}};

/// An attribute value as it appears in feature properties or per-part data.
///
/// The variants cover everything the supported source formats can express:
/// JSON scalars, nested lists and objects, and typed dBase cells.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Int(i64),
	List(Vec<GeoValue>),
	Null,
	Object(BTreeMap<String, GeoValue>),
	String(String),
	UInt(u64),
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::List(v) => f.debug_list().entries(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::Object(v) => f.debug_map().entries(v).finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(value as i64)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u32> for GeoValue {
	fn from(value: u32) -> Self {
		GeoValue::UInt(value as u64)
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f32> for GeoValue {
	fn from(value: f32) -> Self {
		GeoValue::Double(f64::from(value))
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl From<Vec<GeoValue>> for GeoValue {
	fn from(value: Vec<GeoValue>) -> Self {
		GeoValue::List(value)
	}
}

impl From<&JsonValue> for GeoValue {
	/// Converts a JSON value recursively. Integral numbers become `UInt`/`Int`,
	/// everything else numeric becomes `Double`.
	fn from(value: &JsonValue) -> Self {
		match value {
			JsonValue::Null => GeoValue::Null,
			JsonValue::Bool(v) => GeoValue::Bool(*v),
			JsonValue::Number(v) => {
				if let Some(v) = v.as_u64() {
					GeoValue::UInt(v)
				} else if let Some(v) = v.as_i64() {
					GeoValue::Int(v)
				} else {
					GeoValue::Double(v.as_f64().unwrap_or(f64::NAN))
				}
			}
			JsonValue::String(v) => GeoValue::String(v.clone()),
			JsonValue::Array(v) => GeoValue::List(v.iter().map(GeoValue::from).collect()),
			JsonValue::Object(v) => GeoValue::Object(
				v.iter().map(|(k, v)| (k.clone(), GeoValue::from(v))).collect(),
			),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => write!(f, "null"),
			GeoValue::String(v) => write!(f, "{v}"),
			GeoValue::UInt(v) => write!(f, "{v}"),
			GeoValue::List(v) => {
				let entries = v.iter().map(GeoValue::to_string).collect::<Vec<_>>();
				write!(f, "[{}]", entries.join(", "))
			}
			GeoValue::Object(v) => {
				let entries = v.iter().map(|(k, v)| format!("{k}: {v}")).collect::<Vec<_>>();
				write!(f, "{{{}}}", entries.join(", "))
			}
		}
	}
}

impl GeoValue {
	/// Returns the length of a `List` value, or `None` for every other variant.
	pub fn list_len(&self) -> Option<usize> {
		match self {
			GeoValue::List(v) => Some(v.len()),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_from_scalars() {
		assert_eq!(GeoValue::from("a"), GeoValue::String("a".to_string()));
		assert_eq!(GeoValue::from(7u32), GeoValue::UInt(7));
		assert_eq!(GeoValue::from(-7), GeoValue::Int(-7));
		assert_eq!(GeoValue::from(7), GeoValue::UInt(7));
		assert_eq!(GeoValue::from(1.5), GeoValue::Double(1.5));
		assert_eq!(GeoValue::from(true), GeoValue::Bool(true));
	}

	#[test]
	fn test_from_json() {
		assert_eq!(GeoValue::from(&json!(null)), GeoValue::Null);
		assert_eq!(GeoValue::from(&json!(3)), GeoValue::UInt(3));
		assert_eq!(GeoValue::from(&json!(-3)), GeoValue::Int(-3));
		assert_eq!(GeoValue::from(&json!(2.25)), GeoValue::Double(2.25));
		assert_eq!(
			GeoValue::from(&json!([1.1, 2.2])),
			GeoValue::List(vec![GeoValue::Double(1.1), GeoValue::Double(2.2)])
		);
		assert_eq!(
			GeoValue::from(&json!({"a": "b"})),
			GeoValue::Object(BTreeMap::from([("a".to_string(), GeoValue::from("b"))]))
		);
	}

	#[test]
	fn test_list_len() {
		assert_eq!(GeoValue::from(&json!([1, 2, 3])).list_len(), Some(3));
		assert_eq!(GeoValue::from("x").list_len(), None);
		assert_eq!(GeoValue::Null.list_len(), None);
	}

	#[test]
	fn test_display() {
		assert_eq!(GeoValue::from("x").to_string(), "x");
		assert_eq!(GeoValue::Null.to_string(), "null");
		assert_eq!(GeoValue::from(&json!([1, "a"])).to_string(), "[1, a]");
		assert_eq!(GeoValue::from(&json!({"k": 2})).to_string(), "{k: 2}");
	}
}
