use serde_json::{Map, Number, Value as JsonValue};

use crate::model::*;
use crate::options::{EncodeOptions, FeatureKind};

/// Largest magnitude below which an integral `f64` is still an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Anything that can encode itself as a GeoJSON `Feature` object.
pub trait Feature: std::fmt::Debug {
    fn kind(&self) -> FeatureKind;

    /// Build the `{"type": "Feature", ...}` object for this entity.
    fn to_json_value(&self, opts: &EncodeOptions) -> JsonValue;

    /// Compact JSON text of this feature with default options.
    fn get_json(&self) -> String {
        self.to_json_value(&EncodeOptions::default()).to_string()
    }
}

impl<F: Feature + ?Sized> Feature for Box<F> {
    fn kind(&self) -> FeatureKind {
        (**self).kind()
    }

    fn to_json_value(&self, opts: &EncodeOptions) -> JsonValue {
        (**self).to_json_value(opts)
    }
}

impl Feature for Waypoint {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Waypoint
    }

    fn to_json_value(&self, opts: &EncodeOptions) -> JsonValue {
        let mut geometry = Map::new();
        geometry.insert("type".to_string(), JsonValue::String("Point".to_string()));
        geometry.insert(
            "coordinates".to_string(),
            coordinate_json(&self.coordinate, opts.include_elevation),
        );

        let mut feature = Map::new();
        feature.insert("type".to_string(), JsonValue::String("Feature".to_string()));
        feature.insert("geometry".to_string(), JsonValue::Object(geometry));

        let mut props = Map::new();
        insert_optional(&mut props, "title", &self.name);
        insert_optional(&mut props, "icon", &self.icon);
        if !props.is_empty() {
            feature.insert("properties".to_string(), JsonValue::Object(props));
        }

        JsonValue::Object(feature)
    }
}

impl Feature for Track {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Track
    }

    fn to_json_value(&self, opts: &EncodeOptions) -> JsonValue {
        let line_strings: Vec<JsonValue> = self
            .segments
            .iter()
            .map(|seg| segment_json(seg, opts.include_elevation))
            .collect();

        let mut geometry = Map::new();
        geometry.insert(
            "type".to_string(),
            JsonValue::String("MultiLineString".to_string()),
        );
        geometry.insert("coordinates".to_string(), JsonValue::Array(line_strings));

        let mut feature = Map::new();
        feature.insert("type".to_string(), JsonValue::String("Feature".to_string()));

        let mut props = Map::new();
        insert_optional(&mut props, "title", &self.name);
        if !props.is_empty() {
            feature.insert("properties".to_string(), JsonValue::Object(props));
        }

        feature.insert("geometry".to_string(), JsonValue::Object(geometry));
        JsonValue::Object(feature)
    }
}

/// Build [lon, lat] or [lon, lat, ele] coordinate array.
pub fn coordinate_json(coord: &Coordinate, include_elevation: bool) -> JsonValue {
    let mut values = vec![number(coord.lon), number(coord.lat)];
    if let (true, Some(ele)) = (include_elevation, coord.ele) {
        values.push(number(ele));
    }
    JsonValue::Array(values)
}

fn segment_json(seg: &LineSegment, include_elevation: bool) -> JsonValue {
    JsonValue::Array(
        seg.coordinates
            .iter()
            .map(|c| coordinate_json(c, include_elevation))
            .collect(),
    )
}

/// Integral values print without a fractional part, everything else in
/// shortest round-trip form. Negative zero keeps its sign. Non-finite values
/// become `null`.
fn number(v: f64) -> JsonValue {
    let negative_zero = v == 0.0 && v.is_sign_negative();
    if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_EXACT_INTEGER && !negative_zero {
        JsonValue::Number(Number::from(v as i64))
    } else {
        Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number)
    }
}

fn insert_optional(props: &mut Map<String, JsonValue>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        props.insert(key.to_string(), JsonValue::String(v.clone()));
    }
}
