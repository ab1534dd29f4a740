//! Conversion of geo-interface mappings into canonical geometries.
//!
//! The geo-interface protocol is the minimal `{"type", "coordinates"}`
//! mapping, optionally wrapped in a `{"type": "Feature", "properties",
//! "geometry"}` envelope, that many geospatial libraries use to exchange
//! geometry. The shapefile reader feeds every record through here.

use crate::{Crs, GeoAttributes, GeoProperties, Geometry, Position, Ring};
use anyhow::{anyhow, bail, Result};
use serde_json::Value as JsonValue;

/// Converts one geo-interface mapping into a canonical geometry.
///
/// An explicit `properties` argument wins over a `"properties"` member found
/// in the mapping itself. Mappings without coordinates yield `Ok(None)`; some
/// writers emit those as placeholders for empty geometries.
pub fn from_geo_interface(
	interface: &JsonValue,
	properties: Option<GeoProperties>,
	crs: &Crs,
) -> Result<Option<Geometry>> {
	if interface.is_null() {
		return Ok(None);
	}
	let Some(mapping) = interface.as_object() else {
		bail!("geo interface must be a mapping, got {interface}");
	};
	let kind = mapping
		.get("type")
		.and_then(JsonValue::as_str)
		.ok_or_else(|| anyhow!("geo interface mapping has no \"type\""))?;

	let properties = properties
		.or_else(|| mapping.get("properties").and_then(JsonValue::as_object).map(GeoProperties::from));

	if kind == "Feature" {
		let geometry = mapping
			.get("geometry")
			.ok_or_else(|| anyhow!("feature has no \"geometry\""))?;
		return from_geo_interface(geometry, properties, crs);
	}

	let coordinates = match mapping.get("coordinates") {
		None | Some(JsonValue::Null) => return Ok(None),
		Some(coordinates) => coordinates,
	};
	let attributes = GeoAttributes::scalar(properties.unwrap_or_default());

	Ok(Some(match kind {
		"Point" => Geometry::new_point(parse_position(coordinates)?, attributes, crs.clone()),
		"LineString" => Geometry::new_line(parse_positions(coordinates)?, attributes, crs.clone()),
		"Polygon" => Geometry::new_polygon(parse_rings(coordinates)?, attributes, crs.clone())?,
		"MultiPoint" => Geometry::new_multi_point(parse_positions(coordinates)?, attributes, crs.clone()),
		"MultiLineString" => Geometry::new_multi_line(parse_rings(coordinates)?, attributes, crs.clone()),
		"MultiPolygon" => {
			Geometry::new_multi_polygon(parse_ring_groups(coordinates)?, attributes, crs.clone())
		}
		other => bail!("geometry type {other:?} is not implemented"),
	}))
}

fn parse_position(value: &JsonValue) -> Result<Position> {
	value
		.as_array()
		.ok_or_else(|| anyhow!("expected a coordinate array, got {value}"))?
		.iter()
		.map(|axis| {
			axis
				.as_f64()
				.ok_or_else(|| anyhow!("coordinate axis {axis} is not a number"))
		})
		.collect()
}

fn parse_positions(value: &JsonValue) -> Result<Vec<Position>> {
	value
		.as_array()
		.ok_or_else(|| anyhow!("expected an array of positions, got {value}"))?
		.iter()
		.map(parse_position)
		.collect()
}

fn parse_rings(value: &JsonValue) -> Result<Vec<Ring>> {
	value
		.as_array()
		.ok_or_else(|| anyhow!("expected an array of rings, got {value}"))?
		.iter()
		.map(parse_positions)
		.collect()
}

fn parse_ring_groups(value: &JsonValue) -> Result<Vec<Vec<Ring>>> {
	value
		.as_array()
		.ok_or_else(|| anyhow!("expected an array of ring groups, got {value}"))?
		.iter()
		.map(parse_rings)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{AttributesTrait, GeoValue, GeometryTrait};
	use serde_json::json;

	fn convert(value: &JsonValue) -> Option<Geometry> {
		from_geo_interface(value, None, &Crs::wgs84()).unwrap()
	}

	#[test]
	fn feature_wrapping_a_point() {
		let feature = json!({
			"type": "Feature",
			"properties": {"name": "A"},
			"geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
		});
		let Some(Geometry::Point(point)) = convert(&feature) else {
			panic!("expected a point");
		};
		assert_eq!(point.coordinates, vec![1.0, 2.0]);
		assert_eq!(point.properties.get("name"), Some(&GeoValue::from("A")));
		assert!(point.data.is_empty());
	}

	#[test]
	fn explicit_properties_win_over_embedded_ones() {
		let feature = json!({
			"type": "Feature",
			"properties": {"name": "embedded"},
			"geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
		});
		let properties = GeoProperties::from(vec![("name", "external")]);
		let geometry = from_geo_interface(&feature, Some(properties), &Crs::wgs84())
			.unwrap()
			.unwrap();
		assert_eq!(geometry.properties().get("name"), Some(&GeoValue::from("external")));
	}

	#[test]
	fn missing_coordinates_produce_nothing() {
		assert!(convert(&json!(null)).is_none());
		assert!(convert(&json!({"type": "Point", "coordinates": null})).is_none());
		assert!(convert(&json!({"type": "MultiPolygon"})).is_none());
	}

	#[test]
	fn feature_wrapping_a_null_geometry_produces_nothing() {
		let feature = json!({"type": "Feature", "properties": {}, "geometry": null});
		assert!(convert(&feature).is_none());
	}

	#[test]
	fn feature_without_a_geometry_member_fails() {
		let feature = json!({"type": "Feature", "properties": {}});
		let error = from_geo_interface(&feature, None, &Crs::wgs84()).unwrap_err();
		assert_eq!(error.to_string(), "feature has no \"geometry\"");
	}

	#[test]
	fn polygon_rings_become_subs() {
		let polygon = json!({
			"type": "Polygon",
			"coordinates": [
				[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]],
				[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]],
				[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]
			],
			"properties": {"name": "lake"}
		});
		let Some(Geometry::Polygon(polygon)) = convert(&polygon) else {
			panic!("expected a polygon");
		};
		assert_eq!(polygon.subs.len(), 2);
		assert_eq!(polygon.properties.get("name"), Some(&GeoValue::from("lake")));
		for sub in &polygon.subs {
			assert!(sub.properties.is_empty());
			assert!(sub.subs.is_empty());
			assert_eq!(sub.crs, Crs::wgs84());
		}
	}

	#[test]
	fn multi_kinds_report_their_part_count() {
		let multi_line = json!({
			"type": "MultiLineString",
			"coordinates": [
				[[0.0, 0.0], [1.0, 1.0]],
				[[2.0, 2.0], [3.0, 3.0]],
				[[4.0, 4.0], [5.0, 5.0]]
			]
		});
		let geometry = convert(&multi_line).unwrap();
		assert_eq!(geometry.type_name(), "MultiLine");
		assert_eq!(geometry.part_count(), 3);
	}

	#[test]
	fn bare_geometry_properties_are_honored() {
		let point = json!({
			"type": "Point",
			"coordinates": [3.0, 4.0],
			"properties": {"name": "B"}
		});
		let geometry = convert(&point).unwrap();
		assert_eq!(geometry.properties().get("name"), Some(&GeoValue::from("B")));
	}

	#[test]
	fn integer_coordinates_are_accepted() {
		let Some(Geometry::Point(point)) = convert(&json!({"type": "Point", "coordinates": [1, 2]}))
		else {
			panic!("expected a point");
		};
		assert_eq!(point.coordinates, vec![1.0, 2.0]);
	}

	#[test]
	fn unknown_kind_fails_naming_it() {
		let triangle = json!({"type": "Triangle", "coordinates": [[0.0, 0.0]]});
		let error = from_geo_interface(&triangle, None, &Crs::wgs84()).unwrap_err();
		assert_eq!(error.to_string(), "geometry type \"Triangle\" is not implemented");
	}

	#[test]
	fn malformed_mappings_fail() {
		let missing_type = json!({"coordinates": []});
		assert_eq!(
			from_geo_interface(&missing_type, None, &Crs::wgs84())
				.unwrap_err()
				.to_string(),
			"geo interface mapping has no \"type\""
		);
		let not_a_mapping = json!([1, 2, 3]);
		assert!(from_geo_interface(&not_a_mapping, None, &Crs::wgs84()).is_err());
		let bad_axis = json!({"type": "Point", "coordinates": [1.0, "x"]});
		assert!(from_geo_interface(&bad_axis, None, &Crs::wgs84()).is_err());
	}
}
