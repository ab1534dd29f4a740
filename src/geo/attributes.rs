use super::{GeoData, GeoProperties, GeoValue};
use anyhow::{bail, Result};

/// The two attribute planes of a geometry: scalar `properties` describing the
/// whole feature and per-part `data` arrays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoAttributes {
	pub properties: GeoProperties,
	pub data: GeoData,
}

impl GeoAttributes {
	pub fn new() -> GeoAttributes {
		GeoAttributes {
			properties: GeoProperties::new(),
			data: GeoData::new(),
		}
	}

	/// Wraps properties that apply to the whole geometry; `data` stays empty.
	pub fn scalar(properties: GeoProperties) -> GeoAttributes {
		GeoAttributes {
			properties,
			data: GeoData::new(),
		}
	}

	/// Partitions a feature's attributes for a geometry with `part_count` parts.
	///
	/// List values whose length equals the part count become per-part `data`
	/// arrays; everything else stays a scalar property. A list of any other
	/// length is a contract violation and fails.
	pub fn split(attributes: GeoProperties, part_count: usize) -> Result<GeoAttributes> {
		let mut properties = GeoProperties::new();
		let mut data = GeoData::new();
		for (key, value) in attributes {
			match value {
				GeoValue::List(values) if values.len() == part_count => data.insert(key, values),
				GeoValue::List(values) => bail!(
					"properties must be singleton or per-vertex: {key:?} has {} values for {part_count} parts",
					values.len()
				),
				value => properties.insert(key, value),
			}
		}
		Ok(GeoAttributes { properties, data })
	}
}
