//! Reading GeoJSON documents into canonical geometries.

mod read;

pub use read::*;
