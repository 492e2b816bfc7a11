//! Geographic types: coordinates, points, point lists and areas.
//!
//! Areas are a closed sum of `Circle` and `Polygon`. The `areaType`
//! discriminant is derived from the variant and never stored.

mod area;
mod coordinates;
mod point;

pub use area::{Area, AreaType, Circle, Polygon};
pub use coordinates::{Latitude, Longitude};
pub use point::{Point, PointList};
