use super::{verify_positions, GeometryTrait, Position};
use crate::{Crs, GeoAttributes, GeoData, GeoProperties};
use anyhow::Result;

/// An ordered position sequence bound to a CRS.
#[derive(Clone, PartialEq)]
pub struct LineGeometry {
	pub coordinates: Vec<Position>,
	pub properties: GeoProperties,
	pub data: GeoData,
	pub crs: Crs,
}

impl LineGeometry {
	pub fn new(coordinates: Vec<Position>, attributes: GeoAttributes, crs: Crs) -> Self {
		Self {
			coordinates,
			properties: attributes.properties,
			data: attributes.data,
			crs,
		}
	}
}

impl GeometryTrait for LineGeometry {
	/// A line counts as one part regardless of its vertex count.
	fn part_count(&self) -> usize {
		1
	}

	fn verify(&self) -> Result<()> {
		verify_positions(&self.coordinates)?;
		self.data.verify(self.part_count())
	}
}

crate::impl_attributes!(LineGeometry);
crate::impl_geometry_debug!(LineGeometry, "Line");
