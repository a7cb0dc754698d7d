use super::*;

pub trait HasOrigin {
    fn get_origin(&self) -> P2;
    fn set_origin(&mut self, origin: P2);
}

impl HasOrigin for P2 {
    fn get_origin(&self) -> P2 {
        *self
    }
    fn set_origin(&mut self, origin: P2) {
        self.x = origin.x;
        self.y = origin.y;
    }
}

/// wether a shape contains a point
pub trait Contains {
    fn contains(&self, p: &P2) -> bool;
}

/// trait to calculate the point of a shape which is closest to a given point
pub trait ClosestPoint {
    fn closest_point_to(&self, p: &P2) -> P2;
}

impl ClosestPoint for P2 {
    fn closest_point_to(&self, _p: &P2) -> P2 {
        *self
    }
}

/// smallest axis aligned rectangle enclosing a shape
pub trait HasBoundingBox {
    fn bounding_box(&self) -> Rect;
}

pub trait Intersect<T> {
    type Intersection;

    fn intersect(&self, other: &T) -> Option<Self::Intersection>;

    fn does_collide(&self, other: &T) -> bool {
        self.intersect(other).is_some()
    }
}

/// anything a moving body can bump into
pub trait Obstacle {
    fn blocks(&self, collider: &Collider) -> bool;
}

impl Obstacle for Rect {
    fn blocks(&self, collider: &Collider) -> bool {
        collider.does_collide(self)
    }
}

impl Obstacle for Circle {
    fn blocks(&self, collider: &Collider) -> bool {
        collider.does_collide(self)
    }
}

impl Obstacle for Collider {
    fn blocks(&self, collider: &Collider) -> bool {
        collider.does_collide(self)
    }
}

impl<T: Obstacle> Obstacle for [T] {
    fn blocks(&self, collider: &Collider) -> bool {
        self.iter().any(|o| o.blocks(collider))
    }
}

impl<T: Obstacle> Obstacle for Vec<T> {
    fn blocks(&self, collider: &Collider) -> bool {
        self.as_slice().blocks(collider)
    }
}

impl<T: Obstacle + ?Sized> Obstacle for &T {
    fn blocks(&self, collider: &Collider) -> bool {
        (**self).blocks(collider)
    }
}

impl<A: Obstacle, B: Obstacle> Obstacle for (A, B) {
    fn blocks(&self, collider: &Collider) -> bool {
        self.0.blocks(collider) || self.1.blocks(collider)
    }
}

/// open space
impl Obstacle for () {
    fn blocks(&self, _collider: &Collider) -> bool {
        false
    }
}
