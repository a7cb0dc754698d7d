extern crate nalgebra as na;
use na::{Point2, Vector2};

/// screen and world coordinates are whole pixels
pub type Int = i32;
pub type P2 = Point2<Int>;
pub type V2 = Vector2<Int>;

/// `(x2 - x1)² + (y2 - y1)²`, widened to `i64` so level-sized coordinates never overflow
pub fn squared_distance(a: &P2, b: &P2) -> i64 {
    let dx = b.x as i64 - a.x as i64;
    let dy = b.y as i64 - a.y as i64;
    dx * dx + dy * dy
}

/// clamps `num` into `[lo, hi]`. an inverted range pins the result to `lo`
pub fn clamp_or_pin(num: Int, lo: Int, hi: Int) -> Int {
    if hi < lo {
        lo
    } else {
        num.max(lo).min(hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_distance_is_symmetric() {
        let a = P2::new(3, -4);
        let b = P2::new(0, 0);
        assert_eq!(squared_distance(&a, &b), 25);
        assert_eq!(squared_distance(&b, &a), 25);
    }

    #[test]
    fn squared_distance_does_not_overflow() {
        let a = P2::new(-1_000_000_000, -1_000_000_000);
        let b = P2::new(1_000_000_000, 1_000_000_000);
        assert_eq!(squared_distance(&a, &b), 8_000_000_000_000_000_000);
    }

    #[test]
    fn clamp_pins_inverted_range() {
        assert_eq!(clamp_or_pin(-20, 0, 640), 0);
        assert_eq!(clamp_or_pin(700, 0, 640), 640);
        assert_eq!(clamp_or_pin(320, 0, 640), 320);
        assert_eq!(clamp_or_pin(50, 0, -160), 0);
    }
}
