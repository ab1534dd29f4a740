use crate::SpatialRef;
use anyhow::{anyhow, bail, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
	static ref RE_PROJCS: Regex = Regex::new(r#"^\s*PROJCS\s*\[\s*"([^"]*)""#).unwrap();
	static ref RE_PROJECTION: Regex = Regex::new(r#"PROJECTION\s*\[\s*"([^"]*)""#).unwrap();
	static ref RE_SPHEROID: Regex =
		Regex::new(r#"SPHEROID\s*\[\s*"([^"]*)"\s*,\s*([0-9eE+.\-]+)\s*,\s*([0-9eE+.\-]+)"#).unwrap();
	static ref RE_PARAMETER: Regex =
		Regex::new(r#"PARAMETER\s*\[\s*"([^"]*)"\s*,\s*([0-9eE+.\-]+)"#).unwrap();
	static ref RE_UNIT: Regex =
		Regex::new(r#"UNIT\s*\[\s*"([^"]*)"\s*,\s*([0-9eE+.\-]+)"#).unwrap();
}

/// A projection description in ESRI "well-known text" form, as found in the
/// `.prj` sidecar of a shapefile.
///
/// Only the subset of WKT that shapefiles in the wild actually carry is
/// understood: a `GEOGCS` or a `PROJCS` wrapping one, with its `SPHEROID`,
/// `PROJECTION`, `PARAMETER` and `UNIT` nodes.
#[derive(Clone, Debug)]
pub struct PrjWkt {
	wkt: String,
}

impl PrjWkt {
	pub fn new(wkt: &str) -> PrjWkt {
		PrjWkt {
			wkt: wkt.trim().to_string(),
		}
	}

	/// Reads a `.prj` sidecar. A missing file is not an error; shapefiles
	/// without one are common and read as geographic WGS84.
	pub fn from_file(path: &Path) -> Result<Option<PrjWkt>> {
		if !path.is_file() {
			return Ok(None);
		}
		let text = std::fs::read_to_string(path)
			.with_context(|| format!("reading projection sidecar {path:?}"))?;
		Ok(Some(PrjWkt::new(&text)))
	}

	fn spheroid(&self) -> Result<(f64, f64)> {
		let captures = RE_SPHEROID
			.captures(&self.wkt)
			.ok_or_else(|| anyhow!("projection description has no SPHEROID"))?;
		Ok((captures[2].parse::<f64>()?, captures[3].parse::<f64>()?))
	}

	fn spheroid_proj4(&self) -> Result<String> {
		let (semi_major, inv_flattening) = self.spheroid()?;
		// Spheres store an inverse flattening of zero; proj4 wants them as a
		// pair of equal semi-axes instead.
		Ok(if inv_flattening == 0.0 {
			format!("+a={semi_major} +b={semi_major}")
		} else {
			format!("+a={semi_major} +f={}", 1.0 / inv_flattening)
		})
	}
}

impl SpatialRef for PrjWkt {
	fn is_geographic(&self) -> bool {
		self.wkt.starts_with("GEOGCS")
	}

	fn semi_major(&self) -> Result<f64> {
		Ok(self.spheroid()?.0)
	}

	fn inv_flattening(&self) -> Result<f64> {
		Ok(self.spheroid()?.1)
	}

	fn name(&self) -> Option<String> {
		RE_PROJCS
			.captures(&self.wkt)
			.map(|captures| captures[1].to_string())
	}

	fn to_proj4(&self) -> Result<String> {
		if self.is_geographic() {
			return Ok(format!("+proj=longlat {}", self.spheroid_proj4()?));
		}
		let projection = RE_PROJECTION
			.captures(&self.wkt)
			.ok_or_else(|| anyhow!("projection description has no PROJECTION"))?;
		let mut parts = vec![format!("+proj={}", proj4_projection(&projection[1])?)];
		for captures in RE_PARAMETER.captures_iter(&self.wkt) {
			let key = &captures[1];
			let value = captures[2].parse::<f64>()?;
			match proj4_parameter(key) {
				Some(parameter) => parts.push(format!("+{parameter}={value}")),
				None => log::warn!("ignoring unknown projection parameter {key:?}"),
			}
		}
		parts.push(self.spheroid_proj4()?);
		// A projected WKT carries two UNIT nodes, the angular one of the
		// inner GEOGCS and the linear one of the projection. The linear one
		// comes last.
		if let Some(captures) = RE_UNIT.captures_iter(&self.wkt).last() {
			let factor = captures[2].parse::<f64>()?;
			parts.push(if (factor - 1.0).abs() < 1e-12 {
				"+units=m".to_string()
			} else {
				format!("+to_meter={factor}")
			});
		}
		Ok(parts.join(" "))
	}
}

fn proj4_projection(name: &str) -> Result<&'static str> {
	Ok(match name.to_lowercase().as_str() {
		"transverse_mercator" => "tmerc",
		"mercator" | "mercator_1sp" | "mercator_auxiliary_sphere" => "merc",
		"lambert_conformal_conic" | "lambert_conformal_conic_2sp" => "lcc",
		"lambert_azimuthal_equal_area" => "laea",
		"albers" | "albers_conic_equal_area" => "aea",
		"azimuthal_equidistant" => "aeqd",
		"equidistant_conic" => "eqdc",
		"sinusoidal" => "sinu",
		"robinson" => "robin",
		"polar_stereographic" | "stereographic" => "stere",
		"oblique_stereographic" => "sterea",
		"cassini" => "cass",
		"miller_cylindrical" => "mill",
		"polyconic" => "poly",
		_ => bail!("projection {name:?} is not supported"),
	})
}

fn proj4_parameter(name: &str) -> Option<&'static str> {
	match name.to_lowercase().as_str() {
		"false_easting" => Some("x_0"),
		"false_northing" => Some("y_0"),
		"central_meridian" | "longitude_of_center" | "longitude_of_origin" => Some("lon_0"),
		"latitude_of_origin" | "latitude_of_center" => Some("lat_0"),
		"scale_factor" => Some("k_0"),
		"standard_parallel_1" => Some("lat_1"),
		"standard_parallel_2" => Some("lat_2"),
		_ => None,
	}
}
