use super::rect::Rect;
use super::traits::*;
use crate::utils::*;
use serde::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Circle {
    pub origin: P2,
    pub radius: Int,
}

impl Circle {
    pub fn new(x: Int, y: Int, radius: Int) -> Circle {
        Circle {
            origin: P2::new(x, y),
            radius: radius.max(0),
        }
    }
}

/// tangent circles do not collide
pub fn circle_overlap(a: &Circle, b: &Circle) -> bool {
    let total_radius = a.radius as i64 + b.radius as i64;
    squared_distance(&a.origin, &b.origin) < total_radius * total_radius
}

/// projects the center onto the rectangle and compares against the radius
pub fn circle_rect_overlap(circle: &Circle, rect: &Rect) -> bool {
    circle.intersect(rect).is_some()
}

impl Intersect<Circle> for Circle {
    /// squared distance of the centers
    type Intersection = i64;

    fn intersect(&self, other: &Circle) -> Option<i64> {
        if circle_overlap(self, other) {
            Some(squared_distance(&self.origin, &other.origin))
        } else {
            None
        }
    }
}

impl Intersect<Rect> for Circle {
    /// closest point of the rectangle to the center
    type Intersection = P2;

    fn intersect(&self, rect: &Rect) -> Option<P2> {
        let closest = rect.closest_point_to(&self.origin);
        let radius = self.radius as i64;
        if squared_distance(&self.origin, &closest) < radius * radius {
            Some(closest)
        } else {
            None
        }
    }
}

impl HasOrigin for Circle {
    fn get_origin(&self) -> P2 {
        self.origin
    }
    fn set_origin(&mut self, origin: P2) {
        self.origin = origin;
    }
}

impl HasBoundingBox for Circle {
    fn bounding_box(&self) -> Rect {
        Rect::new(
            self.origin.x - self.radius,
            self.origin.y - self.radius,
            self.radius * 2,
            self.radius * 2,
        )
    }
}

impl Contains for Circle {
    fn contains(&self, p: &P2) -> bool {
        let radius = self.radius as i64;
        squared_distance(&self.origin, p) < radius * radius
    }
}
