use super::*;

/// the shape(s) a body is tested with. owned by exactly one body and moved
/// along with it by [`Collider::shift`]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Collider {
    /// top left corner sits on the body position
    Box(Rect),
    /// horizontally centered on the sprite, stacked downward in order
    Boxes(Vec<Rect>),
    /// center sits on the body position
    Circle(Circle),
}

/// rows of the round dot sprite, top to bottom
const DOT_SILHOUETTE: [(Int, Int); 11] = [
    (6, 1),
    (10, 1),
    (14, 1),
    (16, 2),
    (18, 2),
    (20, 6),
    (18, 2),
    (18, 2),
    (14, 1),
    (10, 1),
    (6, 1),
];

impl Collider {
    pub fn with_box(width: Int, height: Int) -> Collider {
        Collider::Box(Rect::from_size(width, height))
    }

    pub fn with_circle(radius: Int) -> Collider {
        Collider::Circle(Circle::new(0, 0, radius))
    }

    pub fn with_boxes(sizes: &[(Int, Int)]) -> Collider {
        Collider::Boxes(
            sizes
                .iter()
                .map(|&(w, h)| Rect::from_size(w, h))
                .collect(),
        )
    }

    /// per pixel row approximation of the 20x20 dot
    pub fn dot_silhouette() -> Collider {
        Collider::with_boxes(&DOT_SILHOUETTE)
    }

    /// places every sub shape relative to `position`. `sprite_width` is only
    /// needed to center stacked boxes
    pub fn shift(&mut self, position: P2, sprite_width: Int) {
        match self {
            Collider::Box(rect) => rect.origin = position,
            Collider::Circle(circle) => circle.origin = position,
            Collider::Boxes(boxes) => {
                let mut row = 0;
                for b in boxes.iter_mut() {
                    b.origin = P2::new(
                        position.x + (sprite_width - b.width) / 2,
                        position.y + row,
                    );
                    row += b.height;
                }
            }
        }
    }

    /// the boxes of a box based collider, empty for circles
    pub fn boxes(&self) -> &[Rect] {
        match self {
            Collider::Box(rect) => std::slice::from_ref(rect),
            Collider::Boxes(boxes) => boxes,
            Collider::Circle(_) => &[],
        }
    }
}

impl Intersect<Rect> for Collider {
    type Intersection = ();

    fn intersect(&self, rect: &Rect) -> Option<()> {
        let hit = match self {
            Collider::Circle(circle) => circle_rect_overlap(circle, rect),
            _ => multi_rect_overlap(self.boxes(), std::slice::from_ref(rect)),
        };
        if hit {
            Some(())
        } else {
            None
        }
    }
}

impl Intersect<Circle> for Collider {
    type Intersection = ();

    fn intersect(&self, circle: &Circle) -> Option<()> {
        let hit = match self {
            Collider::Circle(own) => circle_overlap(own, circle),
            _ => self.boxes().iter().any(|b| circle_rect_overlap(circle, b)),
        };
        if hit {
            Some(())
        } else {
            None
        }
    }
}

impl Intersect<Collider> for Collider {
    type Intersection = ();

    fn intersect(&self, other: &Collider) -> Option<()> {
        let hit = match (self, other) {
            (_, Collider::Circle(circle)) => self.does_collide(circle),
            (Collider::Circle(circle), _) => other.does_collide(circle),
            _ => multi_rect_overlap(self.boxes(), other.boxes()),
        };
        if hit {
            Some(())
        } else {
            None
        }
    }
}

impl HasOrigin for Collider {
    /// top left of the first box, or the circle center
    fn get_origin(&self) -> P2 {
        match self {
            Collider::Box(rect) => rect.origin,
            Collider::Circle(circle) => circle.origin,
            Collider::Boxes(boxes) => boxes.first().map(|b| b.origin).unwrap_or_else(P2::origin),
        }
    }

    /// moves all sub shapes by the same offset
    fn set_origin(&mut self, origin: P2) {
        let offset = origin - self.get_origin();
        match self {
            Collider::Box(rect) => rect.origin = origin,
            Collider::Circle(circle) => circle.origin = origin,
            Collider::Boxes(boxes) => {
                for b in boxes.iter_mut() {
                    b.origin += offset;
                }
            }
        }
    }
}

impl HasBoundingBox for Collider {
    fn bounding_box(&self) -> Rect {
        match self {
            Collider::Box(rect) => *rect,
            Collider::Circle(circle) => circle.bounding_box(),
            Collider::Boxes(boxes) => {
                let mut iter = boxes.iter();
                let first = match iter.next() {
                    Some(b) => *b,
                    None => return Rect::from_size(0, 0),
                };
                let (mut left, mut top) = (first.left(), first.top());
                let (mut right, mut bottom) = (first.right(), first.bottom());
                for b in iter {
                    left = left.min(b.left());
                    top = top.min(b.top());
                    right = right.max(b.right());
                    bottom = bottom.max(b.bottom());
                }
                Rect::new(left, top, right - left, bottom - top)
            }
        }
    }
}

impl From<Rect> for Collider {
    fn from(rect: Rect) -> Self {
        Collider::Box(rect)
    }
}
impl From<Circle> for Collider {
    fn from(circle: Circle) -> Self {
        Collider::Circle(circle)
    }
}
impl From<Vec<Rect>> for Collider {
    fn from(boxes: Vec<Rect>) -> Self {
        Collider::Boxes(boxes)
    }
}
