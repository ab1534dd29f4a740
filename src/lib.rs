//! Normalizes heterogeneous vector-geometry sources into one canonical
//! geometry model bound to a coordinate reference system.
//!
//! Geo-interface mappings, GeoJSON documents, ESRI Shapefiles and GPX files
//! all convert into the same [`Geometry`] enum, carrying scalar properties,
//! per-part data arrays and the [`Crs`] they were read in.
//!
//! ```
//! use geonorm::{geojson::read_geojson, AttributesTrait, Crs};
//!
//! let text = r#"{"type": "Point", "coordinates": [13.4, 52.5]}"#;
//! let geometries = read_geojson(text, &Crs::wgs84()).unwrap();
//! assert_eq!(geometries[0].crs(), &Crs::wgs84());
//! ```

mod geo;

pub mod crs;
pub mod geo_interface;
pub mod geojson;
pub mod gpx;
pub mod shapefile;

pub use crs::*;
pub use geo::*;
pub use geo_interface::*;
