pub mod circle;
pub mod collider;
pub mod rect;
pub mod traits;

pub use crate::utils::*;
pub use circle::*;
pub use collider::*;
pub use rect::*;
use serde::*;
pub use traits::*;

/// a free standing shape. used for static obstacles that are not tiles
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Geo {
    GeoRect(Rect),
    GeoCircle(Circle),
    GeoPoint(P2),
}

impl Geo {
    pub fn does_collide(&self, other: &Geo) -> bool {
        match (self, other) {
            (Geo::GeoRect(r1), Geo::GeoRect(r2)) => rect_overlap(r1, r2),
            (Geo::GeoRect(r), Geo::GeoCircle(c)) => circle_rect_overlap(c, r),
            (Geo::GeoRect(r), Geo::GeoPoint(p)) => r.contains(p),
            (Geo::GeoCircle(c1), Geo::GeoCircle(c2)) => circle_overlap(c1, c2),
            (Geo::GeoCircle(c), Geo::GeoPoint(p)) => c.contains(p),
            (Geo::GeoPoint(p1), Geo::GeoPoint(p2)) => p1 == p2,
            (_, _) => other.does_collide(self),
        }
    }
}

impl Obstacle for Geo {
    fn blocks(&self, collider: &Collider) -> bool {
        match self {
            Geo::GeoRect(rect) => collider.does_collide(rect),
            Geo::GeoCircle(circle) => collider.does_collide(circle),
            // a point has no area
            Geo::GeoPoint(_) => false,
        }
    }
}

impl From<P2> for Geo {
    fn from(p: P2) -> Self {
        Geo::GeoPoint(p)
    }
}
impl From<Rect> for Geo {
    fn from(rect: Rect) -> Self {
        Geo::GeoRect(rect)
    }
}
impl From<Circle> for Geo {
    fn from(circle: Circle) -> Self {
        Geo::GeoCircle(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_dispatch_is_symmetric() {
        let shapes: Vec<Geo> = vec![
            Rect::new(0, 0, 10, 10).into(),
            Circle::new(12, 5, 3).into(),
            P2::new(5, 5).into(),
            Rect::new(10, 0, 5, 5).into(),
        ];
        for a in shapes.iter() {
            for b in shapes.iter() {
                assert_eq!(a.does_collide(b), b.does_collide(a), "{:?} {:?}", a, b);
            }
        }
    }

    #[test]
    fn points_are_inside_rects_and_circles() {
        let p: Geo = P2::new(5, 5).into();
        assert!(p.does_collide(&Rect::new(0, 0, 10, 10).into()));
        assert!(p.does_collide(&Circle::new(6, 6, 2).into()));
        assert!(!p.does_collide(&Rect::new(5, 0, 0, 10).into()));
    }
}
