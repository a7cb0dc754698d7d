//! Collision, tile world and camera for a small scrolling 2D game.
//!
//! Shapes live in [`geo`], moving bodies in [`entity`] and the static level
//! with its camera in [`tile_world`]. [`game`] ties them together behind the
//! [`render::Canvas`] and [`input::EventSource`] seams.

pub mod entity;
pub mod error;
pub mod game;
pub mod geo;
pub mod hud;
pub mod input;
pub mod logging;
pub mod particle;
pub mod render;
pub mod settings;
pub mod tile_world;
pub mod timer;
pub mod utils;

pub use error::{Error, MapLoadError, Result};

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
