use crate::{Crs, GeoAttributes, GeoProperties, Geometry};
use ::geojson::{Feature, GeoJson, Geometry as JsonGeometry, Value};
use anyhow::{bail, Result};

/// Parses GeoJSON text and converts it into canonical geometries.
///
/// A `FeatureCollection` yields one geometry per feature, in document order.
/// Every geometry is bound to `crs`; GeoJSON itself carries no projection
/// information, so callers pass the reference system the document was written
/// in, usually [`Crs::wgs84`].
pub fn read_geojson(text: &str, crs: &Crs) -> Result<Vec<Geometry>> {
	convert_geojson(&text.parse::<GeoJson>()?, crs)
}

/// Converts an already parsed GeoJSON document.
pub fn convert_geojson(document: &GeoJson, crs: &Crs) -> Result<Vec<Geometry>> {
	match document {
		GeoJson::FeatureCollection(collection) => {
			let mut geometries = Vec::with_capacity(collection.features.len());
			for feature in &collection.features {
				geometries.append(&mut convert_feature(feature, crs)?);
			}
			Ok(geometries)
		}
		GeoJson::Feature(feature) => convert_feature(feature, crs),
		GeoJson::Geometry(geometry) => convert_geometry(geometry, &GeoAttributes::new(), crs),
	}
}

// Multi-part kinds route their properties through the splitter: a list whose
// length equals the part count becomes a per-part data array, everything else
// stays a scalar property. Simple kinds keep all properties as scalars, lists
// included.
fn convert_feature(feature: &Feature, crs: &Crs) -> Result<Vec<Geometry>> {
	let Some(geometry) = &feature.geometry else {
		bail!("feature has no geometry");
	};
	let properties = feature
		.properties
		.as_ref()
		.map(GeoProperties::from)
		.unwrap_or_default();
	let attributes = match &geometry.value {
		Value::MultiPoint(coordinates) => GeoAttributes::split(properties, coordinates.len())?,
		Value::MultiLineString(coordinates) => GeoAttributes::split(properties, coordinates.len())?,
		Value::MultiPolygon(coordinates) => GeoAttributes::split(properties, coordinates.len())?,
		_ => GeoAttributes::scalar(properties),
	};
	convert_geometry(geometry, &attributes, crs)
}

fn convert_geometry(
	geometry: &JsonGeometry,
	attributes: &GeoAttributes,
	crs: &Crs,
) -> Result<Vec<Geometry>> {
	Ok(match &geometry.value {
		Value::Point(coordinates) => vec![Geometry::new_point(
			coordinates.clone(),
			attributes.clone(),
			crs.clone(),
		)],
		Value::LineString(coordinates) => vec![Geometry::new_line(
			coordinates.clone(),
			attributes.clone(),
			crs.clone(),
		)],
		Value::Polygon(coordinates) => vec![Geometry::new_polygon(
			coordinates.clone(),
			attributes.clone(),
			crs.clone(),
		)?],
		Value::MultiPoint(coordinates) => vec![Geometry::new_multi_point(
			coordinates.clone(),
			attributes.clone(),
			crs.clone(),
		)],
		Value::MultiLineString(coordinates) => vec![Geometry::new_multi_line(
			coordinates.clone(),
			attributes.clone(),
			crs.clone(),
		)],
		Value::MultiPolygon(coordinates) => vec![Geometry::new_multi_polygon(
			coordinates.clone(),
			attributes.clone(),
			crs.clone(),
		)],
		Value::GeometryCollection(members) => {
			// Collections flatten into the output; every member inherits the
			// attributes of the enclosing feature.
			let mut geometries = Vec::with_capacity(members.len());
			for member in members {
				geometries.append(&mut convert_geometry(member, attributes, crs)?);
			}
			geometries
		}
	})
}
