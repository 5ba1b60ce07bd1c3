//! Terminal front-end for the game.

pub mod raster;
pub mod terminal;
