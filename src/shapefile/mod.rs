//! Reading ESRI Shapefiles, including their `.dbf` attribute tables and
//! `.prj` projection sidecars.

mod filenames;
mod prj;
mod read;

pub use filenames::*;
pub use prj::*;
pub use read::*;
