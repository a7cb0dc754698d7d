use crate::geo::*;
use crate::render::{Canvas, Texture};
use rand::Rng;

/// frames a particle lives for
const LIFETIME: u32 = 10;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Particle {
    position: P2,
    frame: u32,
    texture: Texture,
}

impl Particle {
    /// scattered in `[-5, 20)` around `around`, at a random point of its short life
    pub fn spawn<R: Rng + ?Sized>(around: P2, rng: &mut R) -> Particle {
        let texture = match rng.gen_range(0..3) {
            0 => Texture::RedParticle,
            1 => Texture::GreenParticle,
            _ => Texture::BlueParticle,
        };
        Particle {
            position: around + V2::new(rng.gen_range(-5..20), rng.gen_range(-5..20)),
            frame: rng.gen_range(0..5),
            texture,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.frame > LIFETIME
    }

    /// draws the particle and advances its animation. even frames shimmer
    pub fn render(&mut self, canvas: &mut impl Canvas, camera: &Rect) {
        let dst = self.position - camera.origin.coords;
        canvas.copy(self.texture, None, dst);
        if self.frame % 2 == 0 {
            canvas.copy(Texture::Shimmer, None, dst);
        }
        self.frame += 1;
    }
}

/// a fixed number of particles following a body around
#[derive(Clone, Debug)]
pub struct ParticleTrail {
    particles: Vec<Particle>,
}

impl ParticleTrail {
    pub fn new<R: Rng + ?Sized>(count: usize, around: P2, rng: &mut R) -> ParticleTrail {
        ParticleTrail {
            particles: (0..count).map(|_| Particle::spawn(around, rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// replaces the dead particles with fresh ones around `around`
    pub fn refresh<R: Rng + ?Sized>(&mut self, around: P2, rng: &mut R) {
        for particle in self.particles.iter_mut().filter(|p| p.is_dead()) {
            *particle = Particle::spawn(around, rng);
        }
    }

    pub fn render(&mut self, canvas: &mut impl Canvas, camera: &Rect) {
        for particle in self.particles.iter_mut() {
            particle.render(canvas, camera);
        }
    }
}
