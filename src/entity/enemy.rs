use super::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const ENEMY_WIDTH: Int = 20;
pub const ENEMY_HEIGHT: Int = 20;
pub const ENEMY_VEL: Int = 5;

/// how an enemy picks its velocity. every frame and for each axis a spread
/// value is drawn from `[-spread, spread]`; only when it lands inside
/// `window` is that axis' velocity redrawn from `[-max_speed, max_speed]`
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RandomWalk {
    pub spread: Int,
    pub window: RangeInclusive<Int>,
    pub max_speed: Int,
}

impl Default for RandomWalk {
    fn default() -> Self {
        RandomWalk {
            spread: 150,
            window: 0..=10,
            max_speed: ENEMY_VEL,
        }
    }
}

impl RandomWalk {
    fn next_speed<R: Rng + ?Sized>(&self, current: Int, rng: &mut R) -> Int {
        let spread = self.spread.abs();
        let sample = rng.gen_range(-spread..=spread);
        if self.window.contains(&sample) {
            let max_speed = self.max_speed.abs();
            rng.gen_range(-max_speed..=max_speed)
        } else {
            current
        }
    }
}

/// wanders the level on its own. blocked by walls exactly like the player
#[derive(Clone, Debug)]
pub struct Enemy {
    pub body: Body,
    walk: RandomWalk,
    rng: Pcg64Mcg,
}

impl Enemy {
    pub fn new(position: P2, walk: RandomWalk, seed: u64) -> Enemy {
        Enemy {
            body: Body::new(
                position,
                ENEMY_WIDTH,
                ENEMY_HEIGHT,
                Collider::with_box(ENEMY_WIDTH, ENEMY_HEIGHT),
            ),
            walk,
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn position(&self) -> P2 {
        self.body.position()
    }

    pub fn velocity(&self) -> V2 {
        self.body.velocity
    }

    /// redraws the x velocity and moves on x, then the same for y
    pub fn step<O: Obstacle + ?Sized>(&mut self, bounds: &Rect, obstacles: &O) {
        let velocity = self.body.velocity;
        self.body.velocity.x = self.walk.next_speed(velocity.x, &mut self.rng);
        self.body.step_axis(Axis::X, bounds, obstacles);
        self.body.velocity.y = self.walk.next_speed(velocity.y, &mut self.rng);
        self.body.step_axis(Axis::Y, bounds, obstacles);
    }

    pub fn touches(&self, collider: &Collider) -> bool {
        self.body.collider().does_collide(collider)
    }

    pub fn render_if_visible(&self, canvas: &mut impl Canvas, camera: &Rect) -> bool {
        self.body.render_if_visible(canvas, Texture::Enemy, camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory(seed: u64, frames: usize) -> Vec<P2> {
        let mut enemy = Enemy::new(P2::new(320, 240), RandomWalk::default(), seed);
        let bounds = Rect::from_size(640, 480);
        (0..frames)
            .map(|_| {
                enemy.step(&bounds, &());
                enemy.position()
            })
            .collect()
    }

    #[test]
    fn same_seed_same_path() {
        assert_eq!(trajectory(7, 500), trajectory(7, 500));
    }

    #[test]
    fn enemies_eventually_wander() {
        let path = trajectory(42, 2000);
        assert!(path.iter().any(|p| *p != P2::new(320, 240)));
    }

    #[test]
    fn speed_stays_bounded() {
        let mut enemy = Enemy::new(P2::new(320, 240), RandomWalk::default(), 3);
        let bounds = Rect::from_size(640, 480);
        for _ in 0..2000 {
            enemy.step(&bounds, &());
            assert!(enemy.velocity().x.abs() <= ENEMY_VEL);
            assert!(enemy.velocity().y.abs() <= ENEMY_VEL);
            assert!(bounds.encloses(&enemy.body.bounding_box()));
        }
    }

    #[test]
    fn always_redraw_inside_a_wide_window() {
        let walk = RandomWalk {
            spread: 10,
            window: -10..=10,
            max_speed: 0,
        };
        let mut enemy = Enemy::new(P2::new(0, 0), walk, 1);
        enemy.body.velocity = V2::new(4, 4);
        enemy.step(&Rect::from_size(100, 100), &());
        assert_eq!(enemy.velocity(), V2::zeros());
        assert_eq!(enemy.position(), P2::new(0, 0));
    }

    #[test]
    fn walls_stop_enemies() {
        // the sample is always 0, outside the window, so the velocity is kept
        let walk = RandomWalk {
            spread: 0,
            window: 1..=1,
            max_speed: 0,
        };
        let wall = Rect::new(20, 0, 20, 20);
        let mut enemy = Enemy::new(P2::new(0, 0), walk, 1);
        enemy.body.velocity = V2::new(3, 0);
        for _ in 0..10 {
            enemy.step(&Rect::from_size(100, 100), &wall);
        }
        assert_eq!(enemy.position(), P2::new(0, 0));
        assert!(enemy.touches(&Collider::Box(Rect::new(10, 10, 5, 5))));
    }
}
