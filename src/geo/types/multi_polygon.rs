use super::{verify_rings, GeometryTrait, Ring};
use crate::{Crs, GeoAttributes, GeoData, GeoProperties};
use anyhow::Result;

/// An ordered sequence of ring-groups, one part per polygon.
///
/// Within each group the first ring is the exterior and the rest are holes,
/// mirroring the GeoJSON layout.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry {
	pub coordinates: Vec<Vec<Ring>>,
	pub properties: GeoProperties,
	pub data: GeoData,
	pub crs: Crs,
}

impl MultiPolygonGeometry {
	pub fn new(coordinates: Vec<Vec<Ring>>, attributes: GeoAttributes, crs: Crs) -> Self {
		Self {
			coordinates,
			properties: attributes.properties,
			data: attributes.data,
			crs,
		}
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	fn part_count(&self) -> usize {
		self.coordinates.len()
	}

	fn verify(&self) -> Result<()> {
		for rings in &self.coordinates {
			verify_rings(rings)?;
		}
		self.data.verify(self.part_count())
	}
}

crate::impl_attributes!(MultiPolygonGeometry);
crate::impl_geometry_debug!(MultiPolygonGeometry, "MultiPolygon");

#[cfg(test)]
mod tests {
	use super::*;

	fn multi_polygon() -> MultiPolygonGeometry {
		MultiPolygonGeometry::new(
			vec![
				vec![vec![vec![0.0, 0.0], vec![5.0, 0.0], vec![2.5, 4.0], vec![0.0, 0.0]]],
				vec![
					vec![vec![6.0, 0.0], vec![9.0, 0.0], vec![9.0, 4.0], vec![6.0, 0.0]],
					vec![vec![7.0, 1.0], vec![8.0, 1.0], vec![8.0, 2.0], vec![7.0, 1.0]],
				],
			],
			GeoAttributes::new(),
			Crs::wgs84(),
		)
	}

	#[test]
	fn part_count_is_group_count() {
		assert_eq!(multi_polygon().part_count(), 2);
	}

	#[test]
	fn verify_checks_every_ring() {
		assert!(multi_polygon().verify().is_ok());
		let mut malformed = multi_polygon();
		malformed.coordinates[1][1][2] = vec![8.0];
		assert!(malformed.verify().is_err());
	}
}
