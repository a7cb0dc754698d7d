use crate::geo::*;

/// the visible part of the level. rebuilt from the tracked body every frame
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Camera {
    pub view: Rect,
}

impl Camera {
    pub fn new(width: Int, height: Int) -> Camera {
        Camera {
            view: Rect::from_size(width, height),
        }
    }

    /// centered on `level` before anything is tracked
    pub fn centered_in(width: Int, height: Int, level: &Rect) -> Camera {
        let mut camera = Camera::new(width, height);
        camera.track(level.center(), level);
        camera
    }

    /// centers the view on `target`, then clamps each axis into
    /// `[0, level - view]`. a level smaller than the view pins that axis to 0
    pub fn track(&mut self, target: P2, level: &Rect) {
        let x = target.x - self.view.width / 2;
        let y = target.y - self.view.height / 2;
        self.view.origin = P2::new(
            clamp_or_pin(x, level.left(), level.right() - self.view.width),
            clamp_or_pin(y, level.top(), level.bottom() - self.view.height),
        );
    }

    pub fn is_visible(&self, rect: &Rect) -> bool {
        rect_overlap(&self.view, rect)
    }

    /// world to screen
    pub fn to_screen(&self, p: P2) -> P2 {
        p - self.view.origin.coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level() -> Rect {
        Rect::from_size(1280, 960)
    }

    #[test]
    fn tracking_the_top_left_corner() {
        let mut camera = Camera::new(640, 480);
        camera.track(P2::new(10, 10), &level());
        assert_eq!(camera.view.origin, P2::new(0, 0));
    }

    #[test]
    fn tracking_the_bottom_right_corner() {
        let mut camera = Camera::new(640, 480);
        camera.track(P2::new(1270, 950), &level());
        assert_eq!(camera.view.origin, P2::new(640, 480));
    }

    #[test]
    fn centered_in_the_middle() {
        let mut camera = Camera::new(640, 480);
        camera.track(P2::new(700, 500), &level());
        assert_eq!(camera.view, Rect::new(380, 260, 640, 480));
        assert_eq!(camera.to_screen(P2::new(700, 500)), P2::new(320, 240));
    }

    #[test]
    fn small_levels_pin_to_zero() {
        let mut camera = Camera::new(640, 480);
        let small = Rect::from_size(320, 960);
        camera.track(P2::new(300, 900), &small);
        assert_eq!(camera.view.origin, P2::new(0, 480));
    }

    #[test]
    fn starts_in_the_level_center() {
        let camera = Camera::centered_in(640, 480, &level());
        assert_eq!(camera.view.origin, P2::new(320, 240));
    }

    #[quickcheck]
    fn never_leaves_the_level(x: i16, y: i16) -> bool {
        let mut camera = Camera::new(640, 480);
        camera.track(P2::new(x as Int, y as Int), &level());
        level().encloses(&camera.view)
    }
}
