//! Coordinate reference systems and their resolution from driver handles.

use anyhow::{bail, Result};
use std::fmt::{Display, Formatter};

/// The coordinate system a geometry's positions are expressed in.
#[derive(Clone, Debug, PartialEq)]
pub enum Crs {
	/// Longitude/latitude on an ellipsoid described by a proj4 fragment like
	/// `"+a=6378137.0 +f=0.0033528106647474805"`.
	Geographic { spheroid: String, name: Option<String> },
	/// Planar coordinates described by a full proj4 definition.
	Projected { proj4: String, name: Option<String> },
}

impl Crs {
	pub fn geographic(spheroid: String, name: Option<String>) -> Self {
		Self::Geographic { spheroid, name }
	}

	pub fn projected(proj4: String, name: Option<String>) -> Self {
		Self::Projected { proj4, name }
	}

	/// Geographic WGS84 longitude/latitude, the default for sources that do
	/// not declare a coordinate system.
	pub fn wgs84() -> Self {
		Self::Geographic {
			spheroid: String::from("+a=6378137.0 +f=0.0033528106647474805"),
			name: Some(String::from("WGS84 (geographic)")),
		}
	}

	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Geographic { name, .. } | Self::Projected { name, .. } => name.as_deref(),
		}
	}

	pub fn is_geographic(&self) -> bool {
		matches!(self, Self::Geographic { .. })
	}
}

impl Default for Crs {
	fn default() -> Self {
		Self::wgs84()
	}
}

impl Display for Crs {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = self.name().unwrap_or("unnamed");
		match self {
			Self::Geographic { spheroid, .. } => write!(f, "{name} (geographic, {spheroid})"),
			Self::Projected { proj4, .. } => write!(f, "{name} (projected, {proj4})"),
		}
	}
}

/// What the CRS resolver needs from a vector driver's spatial-reference
/// handle.
pub trait SpatialRef {
	/// Whether the reference is geographic (longitude/latitude) rather than
	/// projected.
	fn is_geographic(&self) -> bool;

	/// Semi-major axis of the spheroid in meters.
	fn semi_major(&self) -> Result<f64>;

	/// Inverse flattening of the spheroid.
	fn inv_flattening(&self) -> Result<f64>;

	/// Full proj4 definition, for projected references.
	fn to_proj4(&self) -> Result<String>;

	/// Name of the coordinate system, if the source carries one.
	fn name(&self) -> Option<String>;
}

/// Derives the collection [`Crs`] from an optional spatial-reference handle.
///
/// Sources without any reference default to WGS84. Geographic references are
/// reduced to their spheroid, projected ones keep their full parameter set.
pub fn resolve_crs<S: SpatialRef>(spatial_ref: Option<&S>) -> Result<Crs> {
	let Some(spatial_ref) = spatial_ref else {
		return Ok(Crs::wgs84());
	};
	if spatial_ref.is_geographic() {
		let a = spatial_ref.semi_major()?;
		let invf = spatial_ref.inv_flattening()?;
		if invf == 0.0 {
			bail!("cannot derive a flattening from an inverse flattening of zero");
		}
		let f = 1.0 / invf;
		Ok(Crs::geographic(format!("+a={a:?} +f={f:?}"), spatial_ref.name()))
	} else {
		Ok(Crs::projected(spatial_ref.to_proj4()?, spatial_ref.name()))
	}
}
