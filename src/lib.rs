pub mod error;
pub mod feature;
pub mod model;
pub mod options;
pub mod world;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::GisError;
use crate::options::EncodeOptions;
use crate::world::{World, WorldDescription};

/// Encode a world description to GeoJSON, returned as a JS object.
#[wasm_bindgen(js_name = worldToGeoJson)]
pub fn world_to_geojson(world: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let world = parse_world(world)?;
    let value = world.to_json_value(&opts);
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| GisError::Serialize(e.to_string()).into())
}

/// Encode a world description to GeoJSON, returned as a JSON string.
#[wasm_bindgen(js_name = worldToGeoJsonString)]
pub fn world_to_geojson_string(world: JsValue, options: JsValue) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let world = parse_world(world)?;
    Ok(world.to_geojson_with(&opts))
}

fn parse_world(world: JsValue) -> Result<World, GisError> {
    let desc: WorldDescription = serde_wasm_bindgen::from_value(world)
        .map_err(|e| GisError::InvalidInput(e.to_string()))?;
    Ok(World::from(desc))
}

fn parse_options(options: JsValue) -> Result<EncodeOptions, GisError> {
    if options.is_undefined() || options.is_null() {
        Ok(EncodeOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| GisError::InvalidInput(e.to_string()))
    }
}
