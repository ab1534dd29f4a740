use super::*;
use crate::Crs;
use anyhow::Result;
use std::fmt::Debug;

/// A canonical geometry of any of the six kinds.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	Line(LineGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLine(MultiLineGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

macro_rules! delegate {
	($self:ident, $geometry:ident => $expression:expr) => {
		match $self {
			Geometry::Point($geometry) => $expression,
			Geometry::Line($geometry) => $expression,
			Geometry::Polygon($geometry) => $expression,
			Geometry::MultiPoint($geometry) => $expression,
			Geometry::MultiLine($geometry) => $expression,
			Geometry::MultiPolygon($geometry) => $expression,
		}
	};
}

impl Geometry {
	pub fn new_point(coordinates: Position, attributes: GeoAttributes, crs: Crs) -> Self {
		Self::Point(PointGeometry::new(coordinates, attributes, crs))
	}
	pub fn new_line(coordinates: Vec<Position>, attributes: GeoAttributes, crs: Crs) -> Self {
		Self::Line(LineGeometry::new(coordinates, attributes, crs))
	}
	/// Fails when `rings` is empty; further rings become hole sub-polygons.
	pub fn new_polygon(rings: Vec<Ring>, attributes: GeoAttributes, crs: Crs) -> Result<Self> {
		Ok(Self::Polygon(PolygonGeometry::from_rings(rings, attributes, crs)?))
	}
	pub fn new_multi_point(coordinates: Vec<Position>, attributes: GeoAttributes, crs: Crs) -> Self {
		Self::MultiPoint(MultiPointGeometry::new(coordinates, attributes, crs))
	}
	pub fn new_multi_line(coordinates: Vec<Vec<Position>>, attributes: GeoAttributes, crs: Crs) -> Self {
		Self::MultiLine(MultiLineGeometry::new(coordinates, attributes, crs))
	}
	pub fn new_multi_polygon(coordinates: Vec<Vec<Ring>>, attributes: GeoAttributes, crs: Crs) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::new(coordinates, attributes, crs))
	}

	/// The kind name, for diagnostics.
	pub fn type_name(&self) -> &str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::Line(_) => "Line",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLine(_) => "MultiLine",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}
}

impl AttributesTrait for Geometry {
	fn properties(&self) -> &GeoProperties {
		delegate!(self, g => g.properties())
	}
	fn properties_mut(&mut self) -> &mut GeoProperties {
		delegate!(self, g => g.properties_mut())
	}
	fn data(&self) -> &GeoData {
		delegate!(self, g => g.data())
	}
	fn data_mut(&mut self) -> &mut GeoData {
		delegate!(self, g => g.data_mut())
	}
	fn crs(&self) -> &Crs {
		delegate!(self, g => g.crs())
	}
	fn set_crs(&mut self, crs: &Crs) {
		delegate!(self, g => g.set_crs(crs));
	}
}

impl GeometryTrait for Geometry {
	fn part_count(&self) -> usize {
		delegate!(self, g => g.part_count())
	}
	fn verify(&self) -> Result<()> {
		delegate!(self, g => g.verify())
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		delegate!(self, g => g.fmt(f))
	}
}
