/// Implements [`AttributesTrait`](crate::AttributesTrait) for a geometry
/// struct with `properties`, `data` and `crs` fields.
///
/// Geometries that own nested geometries (currently only the polygon, whose
/// holes must follow CRS changes) implement the trait by hand instead.
#[macro_export]
macro_rules! impl_attributes {
	($geometry:ty) => {
		impl $crate::AttributesTrait for $geometry {
			fn properties(&self) -> &$crate::GeoProperties {
				&self.properties
			}
			fn properties_mut(&mut self) -> &mut $crate::GeoProperties {
				&mut self.properties
			}
			fn data(&self) -> &$crate::GeoData {
				&self.data
			}
			fn data_mut(&mut self) -> &mut $crate::GeoData {
				&mut self.data
			}
			fn crs(&self) -> &$crate::Crs {
				&self.crs
			}
			fn set_crs(&mut self, crs: &$crate::Crs) {
				self.crs = crs.clone();
			}
		}
	};
}

/// Implements `Debug` for a geometry struct, hiding empty attribute planes.
#[macro_export]
macro_rules! impl_geometry_debug {
	($geometry:ty, $name:literal) => {
		impl std::fmt::Debug for $geometry {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				let mut s = f.debug_struct($name);
				s.field("coordinates", &self.coordinates);
				if !self.properties.is_empty() {
					s.field("properties", &self.properties);
				}
				if !self.data.is_empty() {
					s.field("data", &self.data);
				}
				s.finish()
			}
		}
	};
}
