use super::{verify_positions, GeometryTrait, Position};
use crate::{Crs, GeoAttributes, GeoData, GeoProperties};
use anyhow::Result;

/// An ordered sequence of positions, one part per vertex.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry {
	pub coordinates: Vec<Position>,
	pub properties: GeoProperties,
	pub data: GeoData,
	pub crs: Crs,
}

impl MultiPointGeometry {
	pub fn new(coordinates: Vec<Position>, attributes: GeoAttributes, crs: Crs) -> Self {
		Self {
			coordinates,
			properties: attributes.properties,
			data: attributes.data,
			crs,
		}
	}
}

impl GeometryTrait for MultiPointGeometry {
	/// Every vertex is one part.
	fn part_count(&self) -> usize {
		self.coordinates.len()
	}

	fn verify(&self) -> Result<()> {
		verify_positions(&self.coordinates)?;
		self.data.verify(self.part_count())
	}
}

crate::impl_attributes!(MultiPointGeometry);
crate::impl_geometry_debug!(MultiPointGeometry, "MultiPoint");
