use crate::{Crs, GeoAttributes, GeoProperties, GeoValue, LineGeometry, PointGeometry};
use ::gpx::{Gpx, Track, TrackSegment, Waypoint};
use anyhow::{Context, Result};
use std::{fs::File, io::BufReader, path::Path};

/// Reads the waypoints of a GPX file, one point geometry per waypoint.
///
/// GPX stores geographic WGS84 coordinates by definition, so every geometry
/// is bound to [`Crs::wgs84`]. Waypoint tags (name, elevation, timestamp and
/// so on) become scalar properties.
pub fn read_gpx_waypoints(path: &Path) -> Result<Vec<PointGeometry>> {
	waypoints_to_points(&open(path)?)
}

/// Reads the tracks of a GPX file.
///
/// Every track yields one line geometry per segment; the segments inherit
/// the tags of their track since GPX keeps no metadata per segment.
pub fn read_gpx_tracks(path: &Path) -> Result<Vec<Vec<LineGeometry>>> {
	Ok(tracks_to_lines(&open(path)?))
}

fn open(path: &Path) -> Result<Gpx> {
	log::debug!("opening gpx {path:?}");
	let file = File::open(path).with_context(|| format!("opening gpx {path:?}"))?;
	Ok(::gpx::read(BufReader::new(file))?)
}

/// Converts the waypoints of an already parsed GPX document.
pub fn waypoints_to_points(gpx: &Gpx) -> Result<Vec<PointGeometry>> {
	gpx.waypoints.iter().map(waypoint_to_point).collect()
}

/// Converts the tracks of an already parsed GPX document.
pub fn tracks_to_lines(gpx: &Gpx) -> Vec<Vec<LineGeometry>> {
	gpx.tracks.iter().map(track_to_lines).collect()
}

fn track_to_lines(track: &Track) -> Vec<LineGeometry> {
	let properties = track_properties(track);
	track
		.segments
		.iter()
		.map(|segment| segment_to_line(segment, &properties))
		.collect()
}

fn waypoint_to_point(waypoint: &Waypoint) -> Result<PointGeometry> {
	let mut properties = GeoProperties::new();
	insert_string(&mut properties, "name", &waypoint.name);
	insert_string(&mut properties, "cmt", &waypoint.comment);
	insert_string(&mut properties, "desc", &waypoint.description);
	insert_string(&mut properties, "src", &waypoint.source);
	insert_string(&mut properties, "sym", &waypoint.symbol);
	if let Some(elevation) = waypoint.elevation {
		properties.insert("ele".to_string(), GeoValue::from(elevation));
	}
	if let Some(time) = &waypoint.time {
		properties.insert("time".to_string(), GeoValue::from(time.format()?));
	}

	let point = waypoint.point();
	Ok(PointGeometry::new(
		vec![point.x(), point.y()],
		GeoAttributes::scalar(properties),
		Crs::wgs84(),
	))
}

fn segment_to_line(segment: &TrackSegment, properties: &GeoProperties) -> LineGeometry {
	let coordinates = segment
		.points
		.iter()
		.map(|waypoint| {
			let point = waypoint.point();
			vec![point.x(), point.y()]
		})
		.collect();
	LineGeometry::new(
		coordinates,
		GeoAttributes::scalar(properties.clone()),
		Crs::wgs84(),
	)
}

fn track_properties(track: &Track) -> GeoProperties {
	let mut properties = GeoProperties::new();
	insert_string(&mut properties, "name", &track.name);
	insert_string(&mut properties, "cmt", &track.comment);
	insert_string(&mut properties, "desc", &track.description);
	insert_string(&mut properties, "src", &track.source);
	insert_string(&mut properties, "type", &track.type_);
	if let Some(number) = track.number {
		properties.insert("number".to_string(), GeoValue::from(number));
	}
	properties
}

fn insert_string(properties: &mut GeoProperties, key: &str, value: &Option<String>) {
	if let Some(value) = value {
		properties.insert(key.to_string(), GeoValue::from(value));
	}
}
