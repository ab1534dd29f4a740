mod coordinates;
mod line;
mod macros;
mod multi_line;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod traits;

pub use coordinates::*;
pub use line::*;
pub use multi_line::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use traits::*;
