use super::GeoValue;
use anyhow::{ensure, Result};
use std::{
	collections::{btree_map, BTreeMap},
	fmt::Debug,
};

/// Per-part attribute arrays attached to a geometry.
///
/// Every array carries exactly one entry per geometry part; [`GeoData::verify`]
/// checks this against a given part count.
#[derive(Clone, PartialEq)]
pub struct GeoData {
	fields: BTreeMap<String, Vec<GeoValue>>,
}

impl Default for GeoData {
	fn default() -> Self {
		Self::new()
	}
}

impl GeoData {
	pub fn new() -> GeoData {
		GeoData {
			fields: BTreeMap::new(),
		}
	}
	pub fn insert(&mut self, key: String, values: Vec<GeoValue>) {
		self.fields.insert(key, values);
	}
	pub fn remove(&mut self, key: &str) {
		self.fields.remove(key);
	}
	pub fn get(&self, key: &str) -> Option<&Vec<GeoValue>> {
		self.fields.get(key)
	}
	pub fn iter(&self) -> btree_map::Iter<String, Vec<GeoValue>> {
		self.fields.iter()
	}
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Checks that every array has exactly `part_count` entries.
	pub fn verify(&self, part_count: usize) -> Result<()> {
		for (key, values) in &self.fields {
			ensure!(
				values.len() == part_count,
				"data array {key:?} has {} entries for {part_count} parts",
				values.len()
			);
		}
		Ok(())
	}
}

impl IntoIterator for GeoData {
	type Item = (String, Vec<GeoValue>);
	type IntoIter = btree_map::IntoIter<String, Vec<GeoValue>>;
	fn into_iter(self) -> Self::IntoIter {
		self.fields.into_iter()
	}
}

impl From<Vec<(&str, Vec<GeoValue>)>> for GeoData {
	fn from(value: Vec<(&str, Vec<GeoValue>)>) -> Self {
		GeoData {
			fields: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl FromIterator<(String, Vec<GeoValue>)> for GeoData {
	fn from_iter<T: IntoIterator<Item = (String, Vec<GeoValue>)>>(iter: T) -> Self {
		GeoData {
			fields: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoData {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.fields.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify_accepts_matching_lengths() {
		let data = GeoData::from(vec![
			("ele", vec![GeoValue::from(1.0), GeoValue::from(2.0)]),
			("label", vec![GeoValue::from("a"), GeoValue::from("b")]),
		]);
		assert!(data.verify(2).is_ok());
	}

	#[test]
	fn verify_rejects_wrong_length() {
		let data = GeoData::from(vec![("ele", vec![GeoValue::from(1.0)])]);
		let error = data.verify(3).unwrap_err().to_string();
		assert_eq!(error, "data array \"ele\" has 1 entries for 3 parts");
	}

	#[test]
	fn empty_data_fits_any_part_count() {
		assert!(GeoData::new().verify(0).is_ok());
		assert!(GeoData::new().verify(17).is_ok());
	}

	#[test]
	fn get_and_len() {
		let data = GeoData::from(vec![("ele", vec![GeoValue::from(1.0)])]);
		assert_eq!(data.len(), 1);
		assert_eq!(data.get("ele"), Some(&vec![GeoValue::Double(1.0)]));
		assert_eq!(data.get("missing"), None);
	}
}
