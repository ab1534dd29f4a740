use super::{verify_positions, GeometryTrait, Position};
use crate::{Crs, GeoAttributes, GeoData, GeoProperties};
use anyhow::Result;

/// An ordered sequence of lines, one part per line.
#[derive(Clone, PartialEq)]
pub struct MultiLineGeometry {
	pub coordinates: Vec<Vec<Position>>,
	pub properties: GeoProperties,
	pub data: GeoData,
	pub crs: Crs,
}

impl MultiLineGeometry {
	pub fn new(coordinates: Vec<Vec<Position>>, attributes: GeoAttributes, crs: Crs) -> Self {
		Self {
			coordinates,
			properties: attributes.properties,
			data: attributes.data,
			crs,
		}
	}
}

impl GeometryTrait for MultiLineGeometry {
	fn part_count(&self) -> usize {
		self.coordinates.len()
	}

	fn verify(&self) -> Result<()> {
		for line in &self.coordinates {
			verify_positions(line)?;
		}
		self.data.verify(self.part_count())
	}
}

crate::impl_attributes!(MultiLineGeometry);
crate::impl_geometry_debug!(MultiLineGeometry, "MultiLine");
