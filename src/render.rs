//! The drawing side of the external graphics library.
//!
//! Nothing in this crate rasterizes. Bodies, tiles and the HUD describe what
//! to draw through [`Canvas`]; a window backend implements it.

use crate::geo::*;
use serde::*;

/// handle of a texture loaded by the backend
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Texture {
    Dot,
    Enemy,
    Tiles,
    RedParticle,
    GreenParticle,
    BlueParticle,
    Shimmer,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

pub trait Canvas {
    /// fills the frame buffer with the clear color
    fn clear(&mut self);

    /// draws `texture` with its top left corner at the screen position.
    /// `clip` selects a region of the texture, `None` draws all of it
    fn copy(&mut self, texture: Texture, clip: Option<Rect>, dst: P2);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// shows everything drawn since the last clear
    fn present(&mut self);
}

#[derive(Clone, PartialEq, Debug)]
pub enum DrawCall {
    Clear,
    Copy {
        texture: Texture,
        clip: Option<Rect>,
        dst: P2,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    Present,
}

/// remembers the draw calls of the current frame. used headless and in tests
#[derive(Default, Debug)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
    frames_presented: u64,
}

impl RecordingCanvas {
    pub fn new() -> RecordingCanvas {
        RecordingCanvas::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// how many times `texture` was drawn this frame
    pub fn count(&self, texture: Texture) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Copy { texture: t, .. } if *t == texture))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
    }

    fn copy(&mut self, texture: Texture, clip: Option<Rect>, dst: P2) {
        self.calls.push(DrawCall::Copy { texture, clip, dst });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
        self.frames_presented += 1;
    }
}
