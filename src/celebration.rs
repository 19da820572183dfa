use rand::seq::SliceRandom;
use rand::Rng;
use std::f64::consts::TAU;
use std::time::Instant;

use crate::geometry::Point;

const SPARKS: [char; 5] = ['*', '+', '·', '°', '✦'];
const RING_PARTICLES: usize = 36;
/// Fixed timestep per tick, in seconds
const STEP: f64 = 0.1;

/// Spark flying outward from the dot, in logical canvas units
#[derive(Debug, Clone)]
pub struct Spark {
    pub position: Point,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
}

impl Spark {
    fn update(&mut self, dt: f64) -> bool {
        self.position.x += self.vel_x * dt;
        self.position.y += self.vel_y * dt;
        // drag keeps the ring readable as it grows
        self.vel_x *= 0.92;
        self.vel_y *= 0.92;
        self.age += dt;
        self.age < self.max_age
    }

    /// 1.0 when fresh, 0.0 when about to disappear
    pub fn life(&self) -> f64 {
        (1.0 - self.age / self.max_age).clamp(0.0, 1.0)
    }
}

/// Expanding ring of sparks shown after a perfect circle
#[derive(Debug)]
pub struct CelebrationAnimation {
    pub sparks: Vec<Spark>,
    pub started_at: Instant,
    pub duration: f64, // seconds
    pub is_active: bool,
    pub bounds: f64,
}

impl CelebrationAnimation {
    pub fn new() -> Self {
        Self {
            sparks: Vec::new(),
            started_at: Instant::now(),
            duration: 2.5,
            is_active: false,
            bounds: 400.0,
        }
    }

    /// Bursts a ring of sparks out of `center`. `canvas_size` bounds the sparks.
    pub fn start(&mut self, center: Point, canvas_size: f64) {
        let mut rng = rand::thread_rng();

        self.sparks.clear();
        self.started_at = Instant::now();
        self.is_active = true;
        self.bounds = canvas_size;

        let base_speed = canvas_size * 0.6;
        for i in 0..RING_PARTICLES {
            let angle = TAU * i as f64 / RING_PARTICLES as f64 + rng.gen_range(-0.05..0.05);
            let speed = base_speed * rng.gen_range(0.85..1.15);
            self.sparks.push(Spark {
                position: center,
                vel_x: speed * angle.cos(),
                vel_y: speed * angle.sin(),
                symbol: *SPARKS.choose(&mut rng).unwrap_or(&'*'),
                color_index: rng.gen_range(0..7),
                age: 0.0,
                max_age: rng.gen_range(1.5..2.5),
            });
        }
    }

    pub fn update(&mut self) {
        if !self.is_active {
            return;
        }

        if self.started_at.elapsed().as_secs_f64() >= self.duration {
            self.stop();
            return;
        }

        let bounds = self.bounds;
        self.sparks.retain_mut(|spark| {
            let alive = spark.update(STEP);
            let on_canvas = (0.0..=bounds).contains(&spark.position.x)
                && (0.0..=bounds).contains(&spark.position.y);
            alive && on_canvas
        });

        if self.sparks.is_empty() {
            self.stop();
        }
    }

    pub fn stop(&mut self) {
        self.is_active = false;
        self.sparks.clear();
    }
}

impl Default for CelebrationAnimation {
    fn default() -> Self {
        Self::new()
    }
}
