pub mod board;
pub mod config;
pub mod driver;
pub mod events;
pub mod pattern;
pub mod render;
pub mod simulation;
pub mod term;
