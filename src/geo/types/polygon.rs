use super::{verify_positions, AttributesTrait, GeometryTrait, Ring};
use crate::{Crs, GeoAttributes, GeoData, GeoProperties};
use anyhow::{bail, Result};
use std::fmt::Debug;

/// An exterior ring with zero or more interior-ring sub-polygons.
///
/// Holes are modeled as bare ring-only polygons exclusively owned by their
/// parent.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry {
	pub coordinates: Ring,
	pub subs: Vec<PolygonGeometry>,
	pub properties: GeoProperties,
	pub data: GeoData,
	pub crs: Crs,
}

impl PolygonGeometry {
	pub fn new(coordinates: Ring, subs: Vec<PolygonGeometry>, attributes: GeoAttributes, crs: Crs) -> Self {
		Self {
			coordinates,
			subs,
			properties: attributes.properties,
			data: attributes.data,
			crs,
		}
	}

	/// A ring-only polygon carrying no attributes of its own, used for holes.
	pub fn bare(coordinates: Ring, crs: &Crs) -> Self {
		Self {
			coordinates,
			subs: Vec::new(),
			properties: GeoProperties::new(),
			data: GeoData::new(),
			crs: crs.clone(),
		}
	}

	/// Builds a polygon from a ring sequence: the first ring is the exterior,
	/// every further ring becomes a bare sub-polygon.
	pub fn from_rings(rings: Vec<Ring>, attributes: GeoAttributes, crs: Crs) -> Result<Self> {
		let mut rings = rings.into_iter();
		let Some(exterior) = rings.next() else {
			bail!("a polygon needs at least an exterior ring");
		};
		let subs = rings.map(|ring| Self::bare(ring, &crs)).collect();
		Ok(Self::new(exterior, subs, attributes, crs))
	}
}

impl AttributesTrait for PolygonGeometry {
	fn properties(&self) -> &GeoProperties {
		&self.properties
	}
	fn properties_mut(&mut self) -> &mut GeoProperties {
		&mut self.properties
	}
	fn data(&self) -> &GeoData {
		&self.data
	}
	fn data_mut(&mut self) -> &mut GeoData {
		&mut self.data
	}
	fn crs(&self) -> &Crs {
		&self.crs
	}
	/// Also restamps every sub-polygon.
	fn set_crs(&mut self, crs: &Crs) {
		self.crs = crs.clone();
		for sub in &mut self.subs {
			sub.set_crs(crs);
		}
	}
}

impl GeometryTrait for PolygonGeometry {
	/// A polygon counts as one part; its holes are owned, not addressable parts.
	fn part_count(&self) -> usize {
		1
	}

	fn verify(&self) -> Result<()> {
		verify_positions(&self.coordinates)?;
		self.data.verify(self.part_count())?;
		for sub in &self.subs {
			sub.verify()?;
		}
		Ok(())
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut s = f.debug_struct("Polygon");
		s.field("coordinates", &self.coordinates);
		if !self.subs.is_empty() {
			s.field("subs", &self.subs);
		}
		if !self.properties.is_empty() {
			s.field("properties", &self.properties);
		}
		if !self.data.is_empty() {
			s.field("data", &self.data);
		}
		s.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rings() -> Vec<Ring> {
		vec![
			vec![vec![0.0, 0.0], vec![10.0, 0.0], vec![10.0, 10.0], vec![0.0, 0.0]],
			vec![vec![1.0, 1.0], vec![2.0, 1.0], vec![2.0, 2.0], vec![1.0, 1.0]],
			vec![vec![5.0, 5.0], vec![6.0, 5.0], vec![6.0, 6.0], vec![5.0, 5.0]],
		]
	}

	#[test]
	fn from_rings_builds_bare_subs() {
		let polygon = PolygonGeometry::from_rings(rings(), GeoAttributes::new(), Crs::wgs84()).unwrap();
		assert_eq!(polygon.subs.len(), 2);
		for sub in &polygon.subs {
			assert!(sub.properties.is_empty());
			assert!(sub.data.is_empty());
			assert!(sub.subs.is_empty());
			assert_eq!(sub.crs, Crs::wgs84());
		}
	}

	#[test]
	fn from_rings_requires_an_exterior() {
		let error = PolygonGeometry::from_rings(Vec::new(), GeoAttributes::new(), Crs::wgs84())
			.unwrap_err()
			.to_string();
		assert_eq!(error, "a polygon needs at least an exterior ring");
	}

	#[test]
	fn set_crs_propagates_into_subs() {
		let mut polygon = PolygonGeometry::from_rings(rings(), GeoAttributes::new(), Crs::wgs84()).unwrap();
		let crs = Crs::projected("+proj=merc".to_string(), Some("mercator".to_string()));
		polygon.set_crs(&crs);
		assert_eq!(polygon.crs, crs);
		for sub in &polygon.subs {
			assert_eq!(sub.crs, crs);
		}
	}

	#[test]
	fn verify_recurses_into_subs() {
		let mut polygon = PolygonGeometry::from_rings(rings(), GeoAttributes::new(), Crs::wgs84()).unwrap();
		assert!(polygon.verify().is_ok());
		polygon.subs[1].coordinates[0] = vec![5.0];
		assert!(polygon.verify().is_err());
	}
}
