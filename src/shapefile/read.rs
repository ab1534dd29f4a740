use super::{Companions, PrjWkt};
use crate::{from_geo_interface, resolve_crs, GeoProperties, GeoValue, Geometry};
use ::shapefile::{
	dbase::{FieldValue, Record},
	PolygonRing, Shape,
};
use anyhow::{bail, Context, Result};
use serde_json::{json, Value as JsonValue};
use std::path::Path;

/// Reads a shapefile dataset into canonical geometries.
///
/// `stem` names the dataset with or without its `.shp` extension. Every
/// record is paired with its `.dbf` attributes; a `.prj` sidecar, when
/// present, determines the reference system of the whole layer. With `check`
/// set, the mandatory companion files are verified before opening, which
/// turns a half-copied dataset into one clear error instead of a read
/// failure halfway through.
pub fn read_shapefile(stem: &Path, check: bool) -> Result<Vec<Geometry>> {
	let companions = Companions::from_stem(stem);
	if check {
		companions.check()?;
	}
	log::debug!("opening shapefile {:?}", companions.shp);

	let crs = resolve_crs(PrjWkt::from_file(&companions.prj)?.as_ref())?;
	let mut reader = ::shapefile::Reader::from_path(&companions.shp)
		.with_context(|| format!("opening shapefile {:?}", companions.shp))?;

	let mut geometries = Vec::new();
	for (index, pair) in reader.iter_shapes_and_records().enumerate() {
		let (shape, record) = pair.with_context(|| format!("reading record {index}"))?;
		let interface = shape_to_geo_interface(&shape)?;
		let properties = record_to_properties(record);
		if let Some(geometry) = from_geo_interface(&interface, Some(properties), &crs)
			.with_context(|| format!("converting record {index}"))?
		{
			geometries.push(geometry);
		}
	}
	log::debug!("read {} geometries from {:?}", geometries.len(), companions.shp);
	Ok(geometries)
}

// Shapes become geo-interface mappings first; the shared converter then
// builds the canonical geometry. Measured variants drop their measure,
// elevated ones keep their third axis.
fn shape_to_geo_interface(shape: &Shape) -> Result<JsonValue> {
	Ok(match shape {
		Shape::NullShape => JsonValue::Null,
		Shape::Point(point) => geo_interface("Point", point.position()),
		Shape::PointM(point) => geo_interface("Point", point.position()),
		Shape::PointZ(point) => geo_interface("Point", point.position()),
		Shape::Polyline(polyline) => polyline_interface(polyline.parts()),
		Shape::PolylineM(polyline) => polyline_interface(polyline.parts()),
		Shape::PolylineZ(polyline) => polyline_interface(polyline.parts()),
		Shape::Polygon(polygon) => polygon_interface(polygon.rings()),
		Shape::PolygonM(polygon) => polygon_interface(polygon.rings()),
		Shape::PolygonZ(polygon) => polygon_interface(polygon.rings()),
		Shape::Multipoint(multipoint) => geo_interface("MultiPoint", positions(multipoint.points())),
		Shape::MultipointM(multipoint) => geo_interface("MultiPoint", positions(multipoint.points())),
		Shape::MultipointZ(multipoint) => geo_interface("MultiPoint", positions(multipoint.points())),
		Shape::Multipatch(_) => bail!("geometry type \"Multipatch\" is not implemented"),
	})
}

trait JsonPosition {
	fn position(&self) -> JsonValue;
}

impl JsonPosition for ::shapefile::Point {
	fn position(&self) -> JsonValue {
		json!([self.x, self.y])
	}
}

impl JsonPosition for ::shapefile::PointM {
	fn position(&self) -> JsonValue {
		json!([self.x, self.y])
	}
}

impl JsonPosition for ::shapefile::PointZ {
	fn position(&self) -> JsonValue {
		json!([self.x, self.y, self.z])
	}
}

fn positions<P: JsonPosition>(points: &[P]) -> JsonValue {
	JsonValue::Array(points.iter().map(JsonPosition::position).collect())
}

fn polyline_interface<P: JsonPosition>(parts: &[Vec<P>]) -> JsonValue {
	if let [part] = parts {
		geo_interface("LineString", positions(part))
	} else {
		let lines = parts.iter().map(|part| positions(part)).collect();
		geo_interface("MultiLineString", JsonValue::Array(lines))
	}
}

// Rings arrive as a flat list; every outer ring opens a new group and
// collects the inner rings that follow it.
fn polygon_interface<P: JsonPosition>(rings: &[PolygonRing<P>]) -> JsonValue {
	let mut groups: Vec<Vec<JsonValue>> = Vec::new();
	for ring in rings {
		match ring {
			PolygonRing::Outer(points) => groups.push(vec![positions(points)]),
			PolygonRing::Inner(points) => match groups.last_mut() {
				Some(group) => group.push(positions(points)),
				// An inner ring before any outer one starts its own group.
				None => groups.push(vec![positions(points)]),
			},
		}
	}
	if groups.len() == 1 {
		geo_interface("Polygon", JsonValue::Array(groups.remove(0)))
	} else {
		let polygons = groups.into_iter().map(JsonValue::Array).collect();
		geo_interface("MultiPolygon", JsonValue::Array(polygons))
	}
}

fn geo_interface(kind: &str, coordinates: JsonValue) -> JsonValue {
	json!({"type": kind, "coordinates": coordinates})
}

fn record_to_properties(record: Record) -> GeoProperties {
	record
		.into_iter()
		.map(|(key, value)| (key, field_to_value(value)))
		.collect()
}

fn field_to_value(field: FieldValue) -> GeoValue {
	match field {
		FieldValue::Character(value) => value.map_or(GeoValue::Null, GeoValue::from),
		FieldValue::Numeric(value) => value.map_or(GeoValue::Null, GeoValue::from),
		FieldValue::Logical(value) => value.map_or(GeoValue::Null, GeoValue::from),
		FieldValue::Float(value) => value.map_or(GeoValue::Null, GeoValue::from),
		FieldValue::Integer(value) => GeoValue::from(value),
		FieldValue::Double(value) => GeoValue::from(value),
		FieldValue::Currency(value) => GeoValue::from(value),
		FieldValue::Date(value) => value.map_or(GeoValue::Null, |date| {
			GeoValue::from(format!(
				"{:04}-{:02}-{:02}",
				date.year(),
				date.month(),
				date.day()
			))
		}),
		FieldValue::DateTime(value) => {
			let (date, time) = (value.date(), value.time());
			GeoValue::from(format!(
				"{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
				date.year(),
				date.month(),
				date.day(),
				time.hours(),
				time.minutes(),
				time.seconds()
			))
		}
		FieldValue::Memo(value) => GeoValue::from(value),
	}
}
