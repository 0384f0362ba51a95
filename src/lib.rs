//! Wrap-around grid Snake: a fixed 400×400 logical-pixel playfield with
//! 10×10 cells, a segment chain that follows its head by synchronized
//! shift, and seeded food placement for reproducible sessions.

pub mod config;
pub mod direction;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
