//! 背景粒子

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::palette;
use crate::{Canvas, Color, Point, Rect};

const MAX_SPEED: f32 = 50.0;
const PARTICLE_ALPHA: u8 = 100;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub size: f32,
    pub color: Color,
    /// 剩余寿命（秒）
    pub life: f32,
    pub max_life: f32,
}

impl Particle {
    fn fade(&self) -> f32 {
        if self.max_life <= 0.0 {
            0.0
        } else {
            (self.life / self.max_life).clamp(0.0, 1.0)
        }
    }
}

/// 粒子系统 - 固定种子，结果可复现
pub struct ParticleSystem {
    bounds: Rect,
    capacity: usize,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleSystem {
    pub fn new(bounds: Rect, capacity: usize, seed: u64) -> Self {
        Self {
            bounds,
            capacity,
            particles: Vec::with_capacity(capacity),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn spawn(&mut self) -> Particle {
        const COLORS: [Color; 3] = [palette::PRIMARY, palette::SECONDARY, palette::ACCENT];

        let b = self.bounds;
        let life = self.rng.gen_range(3.0..8.0);
        Particle {
            position: Point::new(
                self.rng.gen_range(b.x..b.right().max(b.x + 1.0)),
                self.rng.gen_range(b.y..b.bottom().max(b.y + 1.0)),
            ),
            velocity: Point::new(
                self.rng.gen_range(-MAX_SPEED..MAX_SPEED),
                self.rng.gen_range(-MAX_SPEED..MAX_SPEED),
            ),
            size: self.rng.gen_range(1.0..4.0),
            color: COLORS[self.rng.gen_range(0..COLORS.len())].with_alpha(PARTICLE_ALPHA),
            life,
            max_life: life,
        }
    }

    /// 推进一帧：移动、淘汰出界/寿命耗尽的粒子，未满时补一个
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let bounds = self.bounds;

        self.particles.retain_mut(|p| {
            p.position.x += p.velocity.x * dt;
            p.position.y += p.velocity.y * dt;
            p.life -= dt;
            p.life > 0.0 && bounds.contains(&p.position)
        });

        if self.particles.len() < self.capacity {
            let particle = self.spawn();
            self.particles.push(particle);
        }
    }

    pub fn render(&self, canvas: &mut Canvas) {
        for p in &self.particles {
            let color = p.color.scale_alpha(p.fade());
            canvas.draw_circle(p.position.x, p.position.y, p.size, color);
        }
    }
}
