use super::GeoValue;
use serde_json::Value as JsonValue;
use std::{
	collections::{btree_map, BTreeMap},
	fmt::Debug,
};

/// Scalar attributes attached to a whole geometry.
///
/// Keys are kept sorted so conversions and debug output are deterministic.
#[derive(Clone, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, GeoValue>,
}

impl Default for GeoProperties {
	fn default() -> Self {
		Self::new()
	}
}

impl GeoProperties {
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.properties.insert(key, value);
	}
	pub fn update(&mut self, new_properties: &GeoProperties) {
		for (k, v) in new_properties.iter() {
			self.properties.insert(k.to_string(), v.clone());
		}
	}
	pub fn remove(&mut self, key: &str) {
		self.properties.remove(key);
	}
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.get(key)
	}
	pub fn iter(&self) -> btree_map::Iter<String, GeoValue> {
		self.properties.iter()
	}
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	pub fn len(&self) -> usize {
		self.properties.len()
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = btree_map::IntoIter<String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl From<Vec<(&str, &str)>> for GeoProperties {
	fn from(value: Vec<(&str, &str)>) -> Self {
		GeoProperties {
			properties: value
				.into_iter()
				.map(|(k, v)| (k.to_string(), GeoValue::from(v)))
				.collect(),
		}
	}
}

impl From<&serde_json::Map<String, JsonValue>> for GeoProperties {
	/// Converts a JSON object, e.g. the `properties` member of a GeoJSON feature.
	fn from(value: &serde_json::Map<String, JsonValue>) -> Self {
		GeoProperties {
			properties: value.iter().map(|(k, v)| (k.clone(), GeoValue::from(v))).collect(),
		}
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn from_json_object() {
		let json = json!({"name": "A", "tags": [1, 2], "meta": {"k": true}});
		let properties = GeoProperties::from(json.as_object().unwrap());
		assert_eq!(properties.len(), 3);
		assert_eq!(properties.get("name"), Some(&GeoValue::from("A")));
		assert_eq!(properties.get("tags").unwrap().list_len(), Some(2));
	}

	#[test]
	fn update_overrides_existing_keys() {
		let mut properties = GeoProperties::from(vec![("a", "1"), ("b", "2")]);
		properties.update(&GeoProperties::from(vec![("b", GeoValue::from(9))]));
		assert_eq!(properties.get("b"), Some(&GeoValue::UInt(9)));
		assert_eq!(properties.len(), 2);
	}

	#[test]
	fn remove_and_is_empty() {
		let mut properties = GeoProperties::from(vec![("a", "1")]);
		assert!(!properties.is_empty());
		properties.remove("a");
		assert!(properties.is_empty());
	}

	#[test]
	fn debug_format() {
		let properties = GeoProperties::from(vec![("b", GeoValue::from(2)), ("a", GeoValue::from("x"))]);
		assert_eq!(format!("{properties:?}"), "{\"a\": String(\"x\"), \"b\": UInt(2)}");
	}
}
