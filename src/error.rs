use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum GisError {
    /// A world description or options object could not be deserialized.
    InvalidInput(String),
    /// The encoded document could not be handed back to JS.
    Serialize(String),
    GeoJson(geojson::Error),
}

impl std::fmt::Display for GisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            Self::GeoJson(e) => write!(f, "GeoJSON error: {e}"),
        }
    }
}

impl std::error::Error for GisError {}

impl From<geojson::Error> for GisError {
    fn from(e: geojson::Error) -> Self {
        Self::GeoJson(e)
    }
}

impl From<GisError> for JsValue {
    fn from(e: GisError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
