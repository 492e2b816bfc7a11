//! Points and bounded point lists

use std::ops::Index;
use std::slice;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::coordinates::{Latitude, Longitude};
use crate::docs::{Documented, FieldDoc};
use crate::validation::{check_count, ValidationError, ValidationResult};

/// Coordinates (latitude, longitude) defining a location on a map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: Latitude,
    pub longitude: Longitude,
}

impl Point {
    pub fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a point from raw degrees, checking latitude first.
    pub fn from_degrees(latitude: f64, longitude: f64) -> ValidationResult<Self> {
        Ok(Self {
            latitude: Latitude::new(latitude)?,
            longitude: Longitude::new(longitude)?,
        })
    }
}

impl Documented for Point {
    const NAME: &'static str = "Point";

    fn description() -> &'static str {
        "Coordinates (latitude, longitude) defining a location in a map"
    }

    fn fields() -> &'static [FieldDoc] {
        const FIELDS: &[FieldDoc] = &[
            FieldDoc::required("latitude", "Latitude component of a location"),
            FieldDoc::required("longitude", "Longitude component of location"),
        ];
        FIELDS
    }

    fn example() -> Value {
        json!({ "latitude": 50.735851, "longitude": 7.10066 })
    }
}

/// Ordered list of 3 to 15 points, e.g. a polygon boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RawPoint>", into = "Vec<Point>")]
pub struct PointList(Vec<Point>);

/// Unchecked member, so deserialization reports `points[i]` like
/// `from_coordinates` does.
#[derive(Deserialize)]
struct RawPoint {
    latitude: f64,
    longitude: f64,
}

impl PointList {
    pub const MIN_POINTS: usize = 3;
    pub const MAX_POINTS: usize = 15;

    pub fn new(points: Vec<Point>) -> ValidationResult<Self> {
        check_count("points", "points", points.len(), Self::MIN_POINTS, Self::MAX_POINTS)?;
        Ok(Self(points))
    }

    /// Builds a list from raw `(latitude, longitude)` pairs.
    ///
    /// Every member is validated before the count, so a list that is both
    /// too short and holds a bad coordinate reports the coordinate.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> ValidationResult<Self> {
        let points = coordinates
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| {
                Point::from_degrees(lat, lon)
                    .map_err(|e| e.within(format!("[{}]", i)).within("points"))
            })
            .collect::<ValidationResult<Vec<_>>>()?;

        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.0.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }
}

impl TryFrom<Vec<Point>> for PointList {
    type Error = ValidationError;

    fn try_from(points: Vec<Point>) -> ValidationResult<Self> {
        Self::new(points)
    }
}

impl TryFrom<Vec<RawPoint>> for PointList {
    type Error = ValidationError;

    fn try_from(raw: Vec<RawPoint>) -> ValidationResult<Self> {
        let coordinates: Vec<_> = raw.iter().map(|p| (p.latitude, p.longitude)).collect();
        Self::from_coordinates(&coordinates)
    }
}

impl From<PointList> for Vec<Point> {
    fn from(list: PointList) -> Self {
        list.0
    }
}

impl Index<usize> for PointList {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Documented for PointList {
    const NAME: &'static str = "PointList";

    fn description() -> &'static str {
        "List of points defining a polygon"
    }

    fn example() -> Value {
        json!([
            { "latitude": 50.735851, "longitude": 7.10066 },
            { "latitude": 50.735851, "longitude": 7.10166 },
            { "latitude": 50.736851, "longitude": 7.10066 }
        ])
    }
}
