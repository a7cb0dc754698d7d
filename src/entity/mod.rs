//! Things that move: the player dot and the wandering enemies.
//!
//! Both share [`Body`], which owns the position, the velocity and the
//! collider. Any write to the position goes through a method that reshifts
//! the collider before returning, so the collider never lags behind.

pub mod dot;
pub mod enemy;

pub use dot::*;
pub use enemy::*;

use crate::geo::*;
use crate::render::{Canvas, Texture};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Debug)]
pub struct Body {
    position: P2,
    pub velocity: V2,
    collider: Collider,
    /// sprite extent
    width: Int,
    height: Int,
}

impl Body {
    pub fn new(position: P2, width: Int, height: Int, collider: Collider) -> Body {
        let mut body = Body {
            position,
            velocity: V2::zeros(),
            collider,
            width,
            height,
        };
        body.shift_collider();
        body
    }

    pub fn position(&self) -> P2 {
        self.position
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    pub fn width(&self) -> Int {
        self.width
    }

    pub fn height(&self) -> Int {
        self.height
    }

    pub fn set_position(&mut self, position: P2) {
        self.position = position;
        self.shift_collider();
    }

    fn shift_collider(&mut self) {
        self.collider.shift(self.position, self.width);
    }

    /// top left corner of the sprite
    pub fn sprite_origin(&self) -> P2 {
        match self.collider {
            Collider::Circle(_) => P2::new(
                self.position.x - self.width / 2,
                self.position.y - self.height / 2,
            ),
            _ => self.position,
        }
    }

    /// the sprite's extent in world space
    pub fn bounding_box(&self) -> Rect {
        let origin = self.sprite_origin();
        Rect::new(origin.x, origin.y, self.width, self.height)
    }

    pub fn center(&self) -> P2 {
        self.bounding_box().center()
    }

    /// applies the velocity on one axis and takes it back if the body left
    /// `bounds` or hit an obstacle. returns wether the step was kept
    pub fn step_axis<O: Obstacle + ?Sized>(&mut self, axis: Axis, bounds: &Rect, obstacles: &O) -> bool {
        let delta = match axis {
            Axis::X => V2::new(self.velocity.x, 0),
            Axis::Y => V2::new(0, self.velocity.y),
        };
        if delta == V2::zeros() {
            return true;
        }
        self.position += delta;
        self.shift_collider();
        if !bounds.encloses(&self.bounding_box()) || obstacles.blocks(&self.collider) {
            self.position -= delta;
            self.shift_collider();
            return false;
        }
        true
    }

    /// x is resolved completely before y, so a body blocked on one axis still
    /// slides along the other
    pub fn move_within<O: Obstacle + ?Sized>(&mut self, bounds: &Rect, obstacles: &O) {
        self.step_axis(Axis::X, bounds, obstacles);
        self.step_axis(Axis::Y, bounds, obstacles);
    }

    pub fn render(&self, canvas: &mut impl Canvas, texture: Texture, camera: &Rect) {
        canvas.copy(texture, None, self.sprite_origin() - camera.origin.coords);
    }

    /// draws only when the sprite is inside the camera
    pub fn render_if_visible(&self, canvas: &mut impl Canvas, texture: Texture, camera: &Rect) -> bool {
        if rect_overlap(camera, &self.bounding_box()) {
            self.render(canvas, texture, camera);
            true
        } else {
            false
        }
    }
}
