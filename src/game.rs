//! The application context and its frame loop.

use crate::entity::{Dot, Enemy, DOT_HEALTH};
use crate::geo::*;
use crate::hud::HealthBar;
use crate::input::{Event, EventSource};
use crate::particle::ParticleTrail;
use crate::render::Canvas;
use crate::settings::Settings;
use crate::tile_world::{Camera, TileWorld};
use crate::timer::{frame_length, FrameTimer};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tracing::{debug, info, trace};

/// damage dealt by each touching enemy per frame
pub const CONTACT_DAMAGE: i32 = 1;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Quit,
    GameOver,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunSummary {
    /// frames that were updated and rendered
    pub frames: u64,
    pub outcome: Outcome,
}

pub struct Game {
    world: TileWorld,
    /// blocks movement in addition to the wall tiles
    obstacles: Vec<Geo>,
    dot: Dot,
    enemies: Vec<Enemy>,
    camera: Camera,
    health_bar: HealthBar,
    particles: ParticleTrail,
    rng: Pcg64Mcg,
    quit: bool,
}

impl Game {
    /// every enemy gets its own stream, drawn from `seed`
    pub fn new(settings: &Settings, world: TileWorld, seed: u64) -> Game {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let dot = Dot::new(settings.player_start).with_step(settings.player_step);
        let enemies: Vec<Enemy> = (0..settings.enemy_count)
            .map(|_| Enemy::new(settings.enemy_spawn, settings.enemy_walk.clone(), rng.gen()))
            .collect();
        let particles = ParticleTrail::new(settings.particle_count, dot.position(), &mut rng);
        let screen = settings.screen();
        let camera = Camera::centered_in(screen.width, screen.height, &world.bounds());
        info!(
            tiles = world.tiles().len(),
            enemies = enemies.len(),
            obstacles = settings.obstacles.len(),
            "game ready"
        );
        Game {
            world,
            obstacles: settings.obstacles.clone(),
            dot,
            enemies,
            camera,
            health_bar: HealthBar::new(DOT_HEALTH),
            particles,
            rng,
            quit: false,
        }
    }

    pub fn world(&self) -> &TileWorld {
        &self.world
    }

    pub fn dot(&self) -> &Dot {
        &self.dot
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn health_bar(&self) -> &HealthBar {
        &self.health_bar
    }

    /// `Some` once the loop should stop
    pub fn outcome(&self) -> Option<Outcome> {
        if self.quit {
            Some(Outcome::Quit)
        } else if self.dot.is_dead() {
            Some(Outcome::GameOver)
        } else {
            None
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Quit => {
                debug!("quit requested");
                self.quit = true;
            }
            _ => self.dot.handle_input(event),
        }
    }

    pub fn update(&mut self) {
        let bounds = self.world.bounds();
        let walls = (&self.world, &self.obstacles);

        self.dot.move_within(&bounds, &walls);
        for enemy in self.enemies.iter_mut() {
            enemy.step(&bounds, &walls);
        }

        let dot = self.dot.body.collider();
        let touching = self.enemies.iter().filter(|e| e.touches(dot)).count() as i32;
        if touching > 0 {
            let damage = touching * CONTACT_DAMAGE;
            self.dot.take_damage(damage);
            self.health_bar.shrink(damage);
            if self.dot.is_dead() {
                info!(touching, "dot died");
            }
        }

        self.camera.track(self.dot.body.center(), &bounds);
        self.particles.refresh(self.dot.position(), &mut self.rng);
    }

    pub fn render(&mut self, canvas: &mut impl Canvas) {
        canvas.clear();
        let view = self.camera.view;
        let tiles = self.world.render_visible(canvas, &self.camera);
        self.dot.render(canvas, &view);
        self.particles.render(canvas, &view);
        let enemies = self
            .enemies
            .iter()
            .filter(|e| e.render_if_visible(canvas, &view))
            .count();
        self.health_bar.render(canvas);
        canvas.present();
        trace!(tiles, enemies, "rendered frame");
    }
}

/// runs frames until the player quits or dies. with a `frame_cap` each frame
/// is padded out to `1 / frame_cap` seconds
pub fn run(
    game: &mut Game,
    events: &mut impl EventSource,
    canvas: &mut impl Canvas,
    timer: &mut FrameTimer,
    frame_cap: Option<u32>,
) -> RunSummary {
    let frame = frame_length(frame_cap);
    let mut frames = 0;
    loop {
        timer.start();
        while let Some(event) = events.poll_event() {
            game.handle_event(&event);
        }
        if game.outcome().is_none() {
            game.update();
            game.render(canvas);
            frames += 1;
        }
        if let Some(outcome) = game.outcome() {
            info!(frames, ?outcome, "loop finished");
            return RunSummary { frames, outcome };
        }
        if let Some(frame) = frame {
            timer.wait_for_frame(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::RandomWalk;
    use crate::input::{Key, ScriptedEvents};
    use crate::render::{RecordingCanvas, Texture};
    use crate::tile_world::MapLayout;

    /// an open floor of the default 16x12 tiles
    fn open_world() -> TileWorld {
        TileWorld::parse(&vec!["0"; 192].join(" "), MapLayout::default()).unwrap()
    }

    /// enemies that never pick a velocity
    fn frozen() -> RandomWalk {
        RandomWalk {
            spread: 0,
            window: 1..=1,
            max_speed: 5,
        }
    }

    fn settings(enemy_count: usize, enemy_spawn: P2) -> Settings {
        Settings {
            enemy_count,
            enemy_spawn,
            enemy_walk: frozen(),
            ..Settings::default()
        }
    }

    #[test]
    fn quit_before_the_first_frame() {
        let mut game = Game::new(&settings(0, P2::new(0, 0)), open_world(), 1);
        let mut events = ScriptedEvents::new().frame(vec![Event::Quit]);
        let summary = run(
            &mut game,
            &mut events,
            &mut RecordingCanvas::new(),
            &mut FrameTimer::new(),
            None,
        );
        assert_eq!(
            summary,
            RunSummary {
                frames: 0,
                outcome: Outcome::Quit
            }
        );
    }

    #[test]
    fn script_end_quits() {
        let mut game = Game::new(&settings(3, P2::new(600, 600)), open_world(), 1);
        let mut events = ScriptedEvents::new().idle(4);
        let mut canvas = RecordingCanvas::new();
        let summary = run(&mut game, &mut events, &mut canvas, &mut FrameTimer::new(), None);
        assert_eq!(summary.frames, 4);
        assert_eq!(summary.outcome, Outcome::Quit);
        assert_eq!(canvas.frames_presented(), 4);
    }

    #[test]
    fn enough_contact_kills_the_dot() {
        let start = Settings::default().player_start;
        let mut game = Game::new(&settings(40, start), open_world(), 1);
        let mut events = ScriptedEvents::new().idle(10);
        let summary = run(
            &mut game,
            &mut events,
            &mut RecordingCanvas::new(),
            &mut FrameTimer::new(),
            None,
        );
        // 40 per frame against 100 health
        assert_eq!(
            summary,
            RunSummary {
                frames: 3,
                outcome: Outcome::GameOver
            }
        );
        assert_eq!(game.dot().health(), -20);
        assert_eq!(game.health_bar().width(), 0);
    }

    #[test]
    fn enemies_out_of_view_are_culled() {
        let mut game = Game::new(&settings(5, P2::new(1000, 900)), open_world(), 1);
        game.update();
        let mut canvas = RecordingCanvas::new();
        game.render(&mut canvas);
        assert_eq!(game.camera().view, Rect::new(0, 0, 640, 480));
        assert_eq!(canvas.count(Texture::Enemy), 0);
        assert_eq!(canvas.count(Texture::Tiles), 8 * 6);
        assert_eq!(canvas.count(Texture::Dot), 1);

        let mut game = Game::new(&settings(5, P2::new(600, 400)), open_world(), 1);
        game.update();
        let mut canvas = RecordingCanvas::new();
        game.render(&mut canvas);
        assert_eq!(canvas.count(Texture::Enemy), 5);
    }

    #[test]
    fn extra_obstacles_stop_the_dot() {
        let settings = Settings {
            player_start: P2::new(50, 100),
            obstacles: vec![Geo::GeoRect(Rect::new(100, 0, 40, 960))],
            ..settings(0, P2::new(0, 0))
        };
        let mut game = Game::new(&settings, open_world(), 1);
        game.handle_event(&Event::press(Key::Right));
        for _ in 0..10 {
            game.update();
        }
        assert_eq!(game.dot().position(), P2::new(80, 100));
    }

    #[test]
    fn camera_takes_the_screen_size() {
        let settings = Settings {
            screen_width: 320,
            screen_height: 240,
            ..settings(0, P2::new(0, 0))
        };
        let game = Game::new(&settings, open_world(), 1);
        assert_eq!(game.camera().view, Rect::new(480, 360, 320, 240));
    }

    #[test]
    fn camera_follows_the_dot_to_the_far_corner() {
        let settings = Settings {
            player_start: P2::new(1000, 800),
            ..settings(0, P2::new(0, 0))
        };
        let mut game = Game::new(&settings, open_world(), 1);
        game.update();
        assert_eq!(game.camera().view, Rect::new(640, 480, 640, 480));
    }
}
