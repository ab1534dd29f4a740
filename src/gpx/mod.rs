//! Reading GPS tracks and waypoints from GPX files.

mod read;

pub use read::*;
