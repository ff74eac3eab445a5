use geojson::FeatureCollection;
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use crate::error::GisError;
use crate::feature::Feature;
use crate::model::{Track, Waypoint};
use crate::options::EncodeOptions;

/// An ordered collection of heterogeneous features, encoded as a GeoJSON
/// `FeatureCollection`.
///
/// Features can only be appended. The collection is single-writer; wrap it
/// in a lock if it has to be shared across threads.
#[derive(Debug, Default)]
pub struct World {
    /// Descriptive only, never written to the output document.
    name: String,
    features: Vec<Box<dyn Feature>>,
}

impl World {
    pub fn new(name: impl Into<String>, features: Vec<Box<dyn Feature>>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn features(&self) -> &[Box<dyn Feature>] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Append a feature. No deduplication.
    pub fn add_feature(&mut self, feature: impl Feature + 'static) {
        self.features.push(Box::new(feature));
    }

    pub fn to_json_value(&self, opts: &EncodeOptions) -> JsonValue {
        let features: Vec<JsonValue> = self
            .features
            .iter()
            .filter(|f| opts.should_include(f.kind()))
            .map(|f| {
                tracing::trace!(kind = ?f.kind(), "encoding feature");
                f.to_json_value(opts)
            })
            .collect();

        tracing::debug!(
            world = %self.name,
            total = self.features.len(),
            emitted = features.len(),
            "encoded feature collection"
        );

        let mut collection = Map::new();
        collection.insert(
            "type".to_string(),
            JsonValue::String("FeatureCollection".to_string()),
        );
        collection.insert("features".to_string(), JsonValue::Array(features));
        JsonValue::Object(collection)
    }

    /// Compact GeoJSON text with default options.
    pub fn to_geojson(&self) -> String {
        self.to_geojson_with(&EncodeOptions::default())
    }

    pub fn to_geojson_with(&self, opts: &EncodeOptions) -> String {
        self.to_json_value(opts).to_string()
    }

    /// Typed view of the encoded document for consumers of the `geojson` crate.
    pub fn to_feature_collection(&self) -> Result<FeatureCollection, GisError> {
        let value = self.to_json_value(&EncodeOptions::default());
        Ok(FeatureCollection::try_from(value)?)
    }
}

/// Serde-friendly description of a world, as accepted from JS callers.
#[derive(Debug, Default, Deserialize)]
pub struct WorldDescription {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub features: Vec<FeatureDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureDescription {
    Waypoint(Waypoint),
    Track(Track),
}

impl From<WorldDescription> for World {
    fn from(desc: WorldDescription) -> Self {
        let mut world = World::new(desc.name, Vec::new());
        for feature in desc.features {
            match feature {
                FeatureDescription::Waypoint(wpt) => world.add_feature(wpt),
                FeatureDescription::Track(trk) => world.add_feature(trk),
            }
        }
        world
    }
}
