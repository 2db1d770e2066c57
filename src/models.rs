use serde::{Deserialize, Serialize};

/// A 2D coordinate on the campus map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A named campus location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub short_name: String,
    pub long_name: String,
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn point(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

/// One leg of a path between two adjacent points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub cost: f64,
}

/// Response type for successful path lookups
///
/// `path` is ordered from `start` to the destination; an empty list means the
/// source and destination are the same location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Path {
    pub start: Point,
    pub path: Vec<Segment>,
    pub cost: f64,
}

impl Path {
    /// The final point of the path
    pub fn end(&self) -> Point {
        self.path.last().map_or(self.start, |segment| segment.end)
    }
}

/// Query parameters for the find path endpoint
///
/// Both fields are optional so that a missing name is reported the same way
/// as an unknown one. A repeated parameter keeps its first value.
#[derive(Debug, Default, PartialEq, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindPathQuery {
    /// Short name of the starting location
    pub src: Option<String>,
    /// Short name of the destination location
    pub dest: Option<String>,
}

impl FindPathQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = FindPathQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "src" if query.src.is_none() => query.src = Some(value),
                "dest" if query.dest.is_none() => query.dest = Some(value),
                _ => {}
            }
        }
        query
    }
}
