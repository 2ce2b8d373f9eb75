use wasm_bindgen::prelude::*;
use ember_engine::*;

mod board;
mod game;
use game::SnakeGame;

ember_web::export_scene!(SnakeGame, "snake-game");
