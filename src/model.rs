use serde::Deserialize;

/// A geographic position: longitude, latitude and an optional elevation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub ele: Option<f64>,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            ele: None,
        }
    }

    pub fn with_elevation(lon: f64, lat: f64, ele: f64) -> Self {
        Self {
            lon,
            lat,
            ele: Some(ele),
        }
    }
}

/// One continuous path. Point order is path order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct LineSegment {
    pub coordinates: Vec<Coordinate>,
}

impl LineSegment {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }
}

/// A named collection of segments, encoded as one `MultiLineString` feature.
///
/// Neither empty tracks nor empty segments are rejected; they encode to
/// empty coordinate arrays.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub segments: Vec<LineSegment>,
}

impl Track {
    pub fn new(segments: Vec<LineSegment>) -> Self {
        Self {
            name: None,
            segments,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A single position with optional title and icon, encoded as a `Point` feature.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Waypoint {
    pub coordinate: Coordinate,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "type")]
    pub icon: Option<String>,
}

impl Waypoint {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            name: None,
            icon: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}
