use super::*;
use serde::*;

/// axis aligned rectangle. `origin` is the top left corner, y grows downward
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub origin: P2,
    pub width: Int,
    pub height: Int,
}

impl Rect {
    pub fn new(x: Int, y: Int, width: Int, height: Int) -> Rect {
        Rect {
            origin: P2::new(x, y),
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn from_size(width: Int, height: Int) -> Rect {
        Rect::new(0, 0, width, height)
    }

    pub fn x(&self) -> Int {
        self.origin.x
    }

    pub fn y(&self) -> Int {
        self.origin.y
    }

    pub fn left(&self) -> Int {
        self.origin.x
    }

    /// saturates instead of overflowing near `Int::MAX`
    pub fn right(&self) -> Int {
        self.origin.x.saturating_add(self.width)
    }

    pub fn top(&self) -> Int {
        self.origin.y
    }

    pub fn bottom(&self) -> Int {
        self.origin.y.saturating_add(self.height)
    }

    pub fn center(&self) -> P2 {
        P2::new(
            self.origin.x + self.width / 2,
            self.origin.y + self.height / 2,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// moved by `offset`, same extent
    pub fn translated(&self, offset: V2) -> Rect {
        Rect {
            origin: self.origin + offset,
            ..*self
        }
    }

    /// wether `other` lies completely inside `self`. shared edges count as inside
    pub fn encloses(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

/// true unless `a` is entirely above, below, left or right of `b`.
/// shared edges do not count as an overlap, and a rect without area
/// overlaps nothing
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a.bottom() <= b.top() {
        return false;
    }
    if a.top() >= b.bottom() {
        return false;
    }
    if a.right() <= b.left() {
        return false;
    }
    if a.left() >= b.right() {
        return false;
    }
    true
}

/// every box of `a` is tested against every box of `b`
pub fn multi_rect_overlap(a: &[Rect], b: &[Rect]) -> bool {
    a.iter()
        .any(|box_a| b.iter().any(|box_b| rect_overlap(box_a, box_b)))
}

impl Intersect<Rect> for Rect {
    /// the overlapping region
    type Intersection = Rect;

    fn intersect(&self, other: &Rect) -> Option<Rect> {
        if !rect_overlap(self, other) {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    fn does_collide(&self, other: &Rect) -> bool {
        rect_overlap(self, other)
    }
}

impl Intersect<Circle> for Rect {
    type Intersection = P2;

    fn intersect(&self, circle: &Circle) -> Option<P2> {
        circle.intersect(self)
    }
}

impl HasOrigin for Rect {
    fn get_origin(&self) -> P2 {
        self.origin
    }
    fn set_origin(&mut self, origin: P2) {
        self.origin = origin;
    }
}

impl HasBoundingBox for Rect {
    fn bounding_box(&self) -> Rect {
        *self
    }
}

impl Contains for Rect {
    /// half open like the overlap test: the right and bottom edges are outside
    fn contains(&self, p: &P2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

impl ClosestPoint for Rect {
    fn closest_point_to(&self, p: &P2) -> P2 {
        P2::new(
            p.x.max(self.left()).min(self.right()),
            p.y.max(self.top()).min(self.bottom()),
        )
    }
}
