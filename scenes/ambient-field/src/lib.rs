use wasm_bindgen::prelude::*;
use ember_engine::*;

mod field;
use field::AmbientField;

ember_web::export_scene!(AmbientField, "ambient-field");
