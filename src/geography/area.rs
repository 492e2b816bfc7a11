//! Circular and polygonal areas

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};

use super::point::{Point, PointList};
use crate::docs::{Documented, FieldDoc};
use crate::validation::{check_min, ValidationError, ValidationResult, ValidationRule};

/// Discriminant of an `Area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AreaType {
    /// The area is defined as a circle
    Circle,
    /// The area is defined as a polygon
    Polygon,
}

impl AreaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaType::Circle => "CIRCLE",
            AreaType::Polygon => "POLYGON",
        }
    }
}

impl FromStr for AreaType {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s {
            "CIRCLE" => Ok(AreaType::Circle),
            "POLYGON" => Ok(AreaType::Polygon),
            other => Err(ValidationError::unknown_value("areaType", other)),
        }
    }
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Circular area: a center point and a radius in meters.
///
/// On the wire it carries `areaType: "CIRCLE"`. The tag is derived from
/// the type; a document naming any other area type is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleFields", into = "CircleFields")]
pub struct Circle {
    center: Point,
    radius: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CircleFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    area_type: Option<AreaType>,
    center: Point,
    radius: f64,
}

impl TryFrom<CircleFields> for Circle {
    type Error = ValidationError;

    fn try_from(fields: CircleFields) -> ValidationResult<Self> {
        check_area_type(AreaType::Circle, fields.area_type)?;
        Self::new(fields.center, fields.radius)
    }
}

impl From<Circle> for CircleFields {
    fn from(circle: Circle) -> Self {
        Self {
            area_type: Some(AreaType::Circle),
            center: circle.center,
            radius: circle.radius,
        }
    }
}

impl Circle {
    /// Smallest radius, in meters
    pub const MIN_RADIUS: f64 = 1.0;

    pub fn new(center: Point, radius: f64) -> ValidationResult<Self> {
        check_min("radius", radius, Self::MIN_RADIUS)?;
        Ok(Self { center, radius })
    }

    pub fn area_type(&self) -> AreaType {
        AreaType::Circle
    }

    pub fn center(&self) -> &Point {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Polygonal area. The boundary should describe a simple polygon, one
/// that does not intersect itself; that is not checked.
///
/// On the wire it carries `areaType: "POLYGON"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonFields", into = "PolygonFields")]
pub struct Polygon {
    boundary: PointList,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolygonFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    area_type: Option<AreaType>,
    boundary: PointList,
}

impl TryFrom<PolygonFields> for Polygon {
    type Error = ValidationError;

    fn try_from(fields: PolygonFields) -> ValidationResult<Self> {
        check_area_type(AreaType::Polygon, fields.area_type)?;
        Ok(Self::new(fields.boundary))
    }
}

impl From<Polygon> for PolygonFields {
    fn from(polygon: Polygon) -> Self {
        Self {
            area_type: Some(AreaType::Polygon),
            boundary: polygon.boundary,
        }
    }
}

impl Polygon {
    pub fn new(boundary: PointList) -> Self {
        Self { boundary }
    }

    pub fn area_type(&self) -> AreaType {
        AreaType::Polygon
    }

    pub fn boundary(&self) -> &PointList {
        &self.boundary
    }
}

/// An absent tag takes the variant's own value.
fn check_area_type(expected: AreaType, given: Option<AreaType>) -> ValidationResult<()> {
    match given {
        Some(given) if given != expected => Err(ValidationError::new(
            "areaType",
            ValidationRule::UnknownValue,
            format!("expected {}, got {}", expected, given),
        )),
        _ => Ok(()),
    }
}

/// A geographic area, tagged on the wire by `areaType`.
///
/// Each variant writes its own tag, so serialization delegates to it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "areaType")]
pub enum Area {
    #[serde(rename = "CIRCLE")]
    Circle(Circle),
    #[serde(rename = "POLYGON")]
    Polygon(Polygon),
}

impl Area {
    pub fn area_type(&self) -> AreaType {
        match self {
            Area::Circle(circle) => circle.area_type(),
            Area::Polygon(polygon) => polygon.area_type(),
        }
    }
}

impl Serialize for Area {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Area::Circle(circle) => circle.serialize(serializer),
            Area::Polygon(polygon) => polygon.serialize(serializer),
        }
    }
}

impl From<Circle> for Area {
    fn from(circle: Circle) -> Self {
        Area::Circle(circle)
    }
}

impl From<Polygon> for Area {
    fn from(polygon: Polygon) -> Self {
        Area::Polygon(polygon)
    }
}

impl Documented for Circle {
    const NAME: &'static str = "Circle";

    fn description() -> &'static str {
        "Circular area defined by a center point and a radius in meters"
    }

    fn fields() -> &'static [FieldDoc] {
        const FIELDS: &[FieldDoc] = &[
            FieldDoc::required("areaType", "Type of this area: CIRCLE"),
            FieldDoc::required("center", "Center of the circle"),
            FieldDoc::required("radius", "Distance from the center in meters"),
        ];
        FIELDS
    }

    fn example() -> Value {
        json!({
            "areaType": "CIRCLE",
            "center": { "latitude": 50.735851, "longitude": 7.10066 },
            "radius": 1000.0
        })
    }
}

impl Documented for Polygon {
    const NAME: &'static str = "Polygon";

    fn description() -> &'static str {
        "Polygonal area; should be a simple polygon, i.e. should not intersect itself"
    }

    fn fields() -> &'static [FieldDoc] {
        const FIELDS: &[FieldDoc] = &[
            FieldDoc::required("areaType", "Type of this area: POLYGON"),
            FieldDoc::required("boundary", "List of 3 to 15 points defining the polygon"),
        ];
        FIELDS
    }

    fn example() -> Value {
        json!({
            "areaType": "POLYGON",
            "boundary": PointList::example()
        })
    }
}

impl Documented for Area {
    const NAME: &'static str = "Area";

    fn description() -> &'static str {
        "Base schema for all areas, discriminated by areaType"
    }

    fn fields() -> &'static [FieldDoc] {
        const FIELDS: &[FieldDoc] = &[FieldDoc::required(
            "areaType",
            "Type of this area: CIRCLE or POLYGON",
        )];
        FIELDS
    }

    fn example() -> Value {
        Circle::example()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> Point {
        Point::from_degrees(50.735851, 7.10066).unwrap()
    }

    #[test]
    fn test_circle_radius_minimum() {
        assert!(Circle::new(center(), 1.0).is_ok());
        let err = Circle::new(center(), 0.5).unwrap_err();
        assert_eq!(err.field(), "radius");
        assert!(Circle::new(center(), -10.0).is_err());
        assert!(Circle::new(center(), f64::NAN).is_err());
    }

    #[test]
    fn test_area_type_derived_from_variant() {
        let circle = Area::from(Circle::new(center(), 10.0).unwrap());
        assert_eq!(circle.area_type(), AreaType::Circle);

        let boundary = PointList::from_coordinates(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]).unwrap();
        let polygon = Area::from(Polygon::new(boundary));
        assert_eq!(polygon.area_type(), AreaType::Polygon);
    }

    #[test]
    fn test_area_type_parse() {
        assert_eq!("CIRCLE".parse::<AreaType>().unwrap(), AreaType::Circle);
        assert_eq!("POLYGON".parse::<AreaType>().unwrap(), AreaType::Polygon);
        assert!("circle".parse::<AreaType>().is_err());
    }

    #[test]
    fn test_area_wire_tag() {
        let area = Area::from(Circle::new(center(), 1000.0).unwrap());
        assert_eq!(serde_json::to_value(&area).unwrap(), Circle::example());
    }

    #[test]
    fn test_tag_must_match_fields() {
        let mismatched = json!({
            "areaType": "POLYGON",
            "center": { "latitude": 0.0, "longitude": 0.0 },
            "radius": 5.0
        });
        assert!(serde_json::from_value::<Area>(mismatched).is_err());

        let unknown = json!({ "areaType": "SQUARE", "side": 3.0 });
        assert!(serde_json::from_value::<Area>(unknown).is_err());
    }

    #[test]
    fn test_standalone_shapes_write_their_tag() {
        let circle = serde_json::to_value(Circle::new(center(), 1000.0).unwrap()).unwrap();
        assert_eq!(circle, Circle::example());

        let polygon: Polygon = serde_json::from_value(Polygon::example()).unwrap();
        assert_eq!(serde_json::to_value(&polygon).unwrap()["areaType"], "POLYGON");
    }

    #[test]
    fn test_standalone_tag_optional_but_checked() {
        let untagged = json!({ "center": { "latitude": 0.0, "longitude": 0.0 }, "radius": 5.0 });
        assert!(serde_json::from_value::<Circle>(untagged).is_ok());

        let wrong = json!({
            "areaType": "POLYGON",
            "center": { "latitude": 0.0, "longitude": 0.0 },
            "radius": 5.0
        });
        let err = serde_json::from_value::<Circle>(wrong).unwrap_err().to_string();
        assert!(err.contains("UNKNOWN_VALUE"));
        assert!(err.contains("expected CIRCLE, got POLYGON"));
    }

    #[test]
    fn test_area_serializes_tag_once() {
        let area = Area::from(Circle::new(center(), 1000.0).unwrap());
        let text = serde_json::to_string(&area).unwrap();
        assert_eq!(text.matches("areaType").count(), 1);
    }

    #[test]
    fn test_deserialized_circle_checks_radius() {
        let small = json!({
            "areaType": "CIRCLE",
            "center": { "latitude": 0.0, "longitude": 0.0 },
            "radius": 0.5
        });
        assert!(serde_json::from_value::<Area>(small).is_err());
    }
}
