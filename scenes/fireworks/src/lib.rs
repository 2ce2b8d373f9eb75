use wasm_bindgen::prelude::*;
use ember_engine::*;

mod rocket;
mod show;
use show::FireworkShow;

ember_web::export_scene!(FireworkShow, "fireworks");
