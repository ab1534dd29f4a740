use crate::{Crs, GeoData, GeoProperties};
use anyhow::Result;
use std::fmt::Debug;

/// Access to the attribute planes and the CRS binding shared by all geometry
/// types.
pub trait AttributesTrait {
	/// Returns the scalar properties describing the whole geometry.
	fn properties(&self) -> &GeoProperties;

	/// Returns the scalar properties mutably.
	fn properties_mut(&mut self) -> &mut GeoProperties;

	/// Returns the per-part data arrays.
	fn data(&self) -> &GeoData;

	/// Returns the per-part data arrays mutably.
	fn data_mut(&mut self) -> &mut GeoData;

	/// Returns the coordinate system the positions are expressed in.
	fn crs(&self) -> &Crs;

	/// Rebinds the geometry to another coordinate system.
	fn set_crs(&mut self, crs: &Crs);
}

/// The common interface of the canonical geometry types.
pub trait GeometryTrait: AttributesTrait + Debug + Clone + Sized {
	/// Returns the number of addressable parts: 1 for simple geometries, the
	/// length of the outer coordinate sequence for multi geometries.
	fn part_count(&self) -> usize;

	/// Verifies the coordinate shape and that every data array matches the
	/// part count.
	fn verify(&self) -> Result<()>;
}
