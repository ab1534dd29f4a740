use super::{verify_position, GeometryTrait, Position};
use crate::{Crs, GeoAttributes, GeoData, GeoProperties};
use anyhow::Result;

/// A single position bound to a CRS.
#[derive(Clone, PartialEq)]
pub struct PointGeometry {
	pub coordinates: Position,
	pub properties: GeoProperties,
	pub data: GeoData,
	pub crs: Crs,
}

impl PointGeometry {
	pub fn new(coordinates: Position, attributes: GeoAttributes, crs: Crs) -> Self {
		Self {
			coordinates,
			properties: attributes.properties,
			data: attributes.data,
			crs,
		}
	}
}

impl GeometryTrait for PointGeometry {
	/// A point always has exactly one part.
	fn part_count(&self) -> usize {
		1
	}

	fn verify(&self) -> Result<()> {
		verify_position(&self.coordinates)?;
		self.data.verify(self.part_count())
	}
}

crate::impl_attributes!(PointGeometry);
crate::impl_geometry_debug!(PointGeometry, "Point");
