use crate::geo::*;
use crate::render::{Canvas, Color};

/// a filled bar pinned to the screen, not the level
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Bar {
    pub rect: Rect,
    pub color: Color,
}

impl Bar {
    pub fn new(offset: P2, width: Int, height: Int, color: Color) -> Bar {
        Bar {
            rect: Rect::new(offset.x, offset.y, width, height),
            color,
        }
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        if !self.rect.is_empty() {
            canvas.fill_rect(self.rect, self.color);
        }
    }
}

/// health bar in the top left corner over a translucent panel
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct HealthBar {
    background: Bar,
    bar: Bar,
}

impl HealthBar {
    pub fn new(max_health: i32) -> HealthBar {
        HealthBar {
            background: Bar::new(
                P2::new(0, 0),
                max_health + 20,
                40,
                Color::rgba(0x00, 0x00, 0x00, 0x44),
            ),
            bar: Bar::new(
                P2::new(10, 10),
                max_health,
                20,
                Color::rgba(0x00, 0xff, 0x00, 0xbb),
            ),
        }
    }

    /// one pixel of bar per point of health
    pub fn shrink(&mut self, amount: i32) {
        self.bar.rect.width = (self.bar.rect.width - amount).max(0);
    }

    pub fn width(&self) -> Int {
        self.bar.rect.width
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        self.background.render(canvas);
        self.bar.render(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingCanvas};

    #[test]
    fn bar_shrinks_but_not_below_zero() {
        let mut hud = HealthBar::new(100);
        hud.shrink(30);
        assert_eq!(hud.width(), 70);
        hud.shrink(500);
        assert_eq!(hud.width(), 0);
    }

    #[test]
    fn empty_bar_draws_only_the_panel() {
        let mut hud = HealthBar::new(100);
        hud.shrink(100);
        let mut canvas = RecordingCanvas::new();
        hud.render(&mut canvas);
        assert_eq!(canvas.calls().len(), 1);
        assert!(matches!(
            canvas.calls()[0],
            DrawCall::FillRect { rect, .. } if rect == Rect::new(0, 0, 120, 40)
        ));
    }
}
