use serde::Deserialize;

/// Options for encoding a world to GeoJSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeOptions {
    /// Include elevation as the 3rd coordinate value (default: true)
    #[serde(default = "default_true")]
    pub include_elevation: bool,

    /// Which feature kinds to emit (default: all)
    #[serde(default)]
    pub types: Option<Vec<FeatureKind>>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            include_elevation: true,
            types: None,
        }
    }
}

impl EncodeOptions {
    pub fn should_include(&self, kind: FeatureKind) -> bool {
        match &self.types {
            None => true,
            Some(types) => types.contains(&kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Waypoint,
    Track,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let opts: EncodeOptions = serde_json::from_str("{}").unwrap();
        assert!(opts.include_elevation);
        assert!(opts.should_include(FeatureKind::Waypoint));
        assert!(opts.should_include(FeatureKind::Track));
    }

    #[test]
    fn test_type_filter() {
        let opts: EncodeOptions =
            serde_json::from_str(r#"{"includeElevation":false,"types":["track"]}"#).unwrap();
        assert!(!opts.include_elevation);
        assert!(opts.should_include(FeatureKind::Track));
        assert!(!opts.should_include(FeatureKind::Waypoint));
    }
}
