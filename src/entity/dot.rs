use super::*;
use crate::input::{Event, Key};
use tracing::debug;

pub const DOT_WIDTH: Int = 20;
pub const DOT_HEIGHT: Int = 20;
/// velocity added per held direction key
pub const DOT_VEL: Int = 10;
pub const DOT_HEALTH: i32 = 100;

/// the player
#[derive(Clone, Debug)]
pub struct Dot {
    pub body: Body,
    step: Int,
    health: i32,
}

impl Dot {
    /// a dot tested by its 20x20 box
    pub fn new(position: P2) -> Dot {
        Dot::with_collider(position, Collider::with_box(DOT_WIDTH, DOT_HEIGHT))
    }

    pub fn with_collider(position: P2, collider: Collider) -> Dot {
        Dot {
            body: Body::new(position, DOT_WIDTH, DOT_HEIGHT, collider),
            step: DOT_VEL,
            health: DOT_HEALTH,
        }
    }

    /// overrides the per key velocity step
    pub fn with_step(mut self, step: Int) -> Dot {
        self.step = step;
        self
    }

    /// presses add and releases subtract, so the velocity is always the sum
    /// of the keys currently held. auto repeat is ignored
    pub fn handle_input(&mut self, event: &Event) {
        let (key, sign) = match *event {
            Event::KeyDown { key, repeat: false } => (key, 1),
            Event::KeyUp { key, repeat: false } => (key, -1),
            _ => return,
        };
        let delta = match key {
            Key::Up => V2::new(0, -self.step),
            Key::Down => V2::new(0, self.step),
            Key::Left => V2::new(-self.step, 0),
            Key::Right => V2::new(self.step, 0),
            Key::Other => return,
        };
        self.body.velocity += delta * sign;
    }

    pub fn velocity(&self) -> V2 {
        self.body.velocity
    }

    pub fn position(&self) -> P2 {
        self.body.position()
    }

    pub fn move_within<O: Obstacle + ?Sized>(&mut self, bounds: &Rect, obstacles: &O) {
        self.body.move_within(bounds, obstacles);
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
        debug!(health = self.health, "dot took damage");
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// the player is always drawn, the camera follows it
    pub fn render(&self, canvas: &mut impl Canvas, camera: &Rect) {
        self.body.render(canvas, Texture::Dot, camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel() {
        let mut dot = Dot::new(P2::new(0, 0));
        dot.handle_input(&Event::press(Key::Left));
        dot.handle_input(&Event::press(Key::Right));
        assert_eq!(dot.velocity(), V2::new(0, 0));
        dot.handle_input(&Event::release(Key::Left));
        assert_eq!(dot.velocity(), V2::new(DOT_VEL, 0));
    }

    #[test]
    fn diagonal_keys_combine() {
        let mut dot = Dot::new(P2::new(0, 0));
        dot.handle_input(&Event::press(Key::Down));
        dot.handle_input(&Event::press(Key::Right));
        assert_eq!(dot.velocity(), V2::new(DOT_VEL, DOT_VEL));
    }

    #[test]
    fn repeats_and_other_keys_are_ignored() {
        let mut dot = Dot::new(P2::new(0, 0));
        dot.handle_input(&Event::press(Key::Up));
        dot.handle_input(&Event::KeyDown {
            key: Key::Up,
            repeat: true,
        });
        dot.handle_input(&Event::press(Key::Other));
        dot.handle_input(&Event::Quit);
        assert_eq!(dot.velocity(), V2::new(0, -DOT_VEL));
    }

    #[test]
    fn health_runs_out() {
        let mut dot = Dot::new(P2::new(0, 0));
        dot.take_damage(DOT_HEALTH - 1);
        assert!(!dot.is_dead());
        dot.take_damage(1);
        assert!(dot.is_dead());
    }

    #[test]
    fn moves_with_held_keys() {
        let mut dot = Dot::with_collider(P2::new(100, 100), Collider::dot_silhouette()).with_step(1);
        dot.handle_input(&Event::press(Key::Right));
        for _ in 0..5 {
            dot.move_within(&Rect::from_size(640, 480), &());
        }
        assert_eq!(dot.position(), P2::new(105, 100));
    }

    #[quickcheck]
    fn release_order_does_not_matter(order: Vec<u8>) -> bool {
        let mut dot = Dot::new(P2::new(0, 0));
        for key in Key::DIRECTIONS.iter() {
            dot.handle_input(&Event::press(*key));
        }
        let mut keys = Key::DIRECTIONS.to_vec();
        // permutes the keys by the arbitrary sort keys, padding with zeros
        let mut ranked: Vec<(u8, Key)> = keys
            .drain(..)
            .enumerate()
            .map(|(i, key)| (order.get(i).copied().unwrap_or(0), key))
            .collect();
        ranked.sort_by_key(|&(rank, _)| rank);
        for (_, key) in ranked {
            dot.handle_input(&Event::release(key));
        }
        dot.velocity() == V2::zeros()
    }
}
