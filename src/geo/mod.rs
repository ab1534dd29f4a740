mod attributes;
mod data;
mod geometry;
mod properties;
mod types;
mod value;

pub use attributes::*;
pub use data::*;
pub use geometry::*;
pub use properties::*;
pub use types::*;
pub use value::*;
