//! Act II: gravity. Scattered particles fall into a shrinking orbit around
//! a pulsing core. Position depends on progress (radius shrink) and on the
//! wall clock (orbital motion) at the same time; the two advance together.

use glam::Vec3;

use super::layout::{OrbitSpec, orbit_swarm};
use super::palette::{CYAN, VIOLET, with_alpha};
use super::{Act, Scene};

pub const PARTICLES: usize = 500;

pub struct GravityWell {
    specs: Vec<OrbitSpec>,
    scene: Scene,
}

impl GravityWell {
    pub fn new(seed: u64) -> Self {
        Self {
            specs: orbit_swarm(seed, PARTICLES),
            scene: Scene::default(),
        }
    }

    /// Current position of one particle; exposed for the stagger/continuity
    /// tests. Pure in (progress, time).
    pub fn particle_position(&self, index: usize, progress: f32, time: f32) -> Vec3 {
        let spec = &self.specs[index];
        let progress = progress.clamp(0.0, 1.0);
        let radius = spec.radius * (1.0 - progress * 0.7);
        let angle = spec.phase + time * spec.speed;
        let target = Vec3::new(
            angle.cos() * radius,
            (angle * 0.7).sin() * radius * 0.5,
            angle.sin() * radius,
        );
        spec.initial.lerp(target, (progress * 2.0).min(1.0))
    }
}

impl Act for GravityWell {
    fn tick(&mut self, active: bool, progress: f32, time: f32, dt: f32) {
        if !active && progress <= 0.0 {
            self.scene.clear();
            return;
        }
        let _ = dt;
        let progress = progress.clamp(0.0, 1.0);
        self.scene.clear();

        // Pulsing gravitational core and its wider glow.
        let pulse = 1.0 + (time * 2.0).sin() * 0.1;
        let core = Vec3::ZERO;
        self.scene
            .point(core, pulse * progress * 3.0, with_alpha(VIOLET, progress * 0.8));
        self.scene
            .point(core, progress * 5.0, with_alpha(VIOLET, progress * 0.2));

        for i in 0..self.specs.len() {
            let pos = self.particle_position(i, progress, time);
            self.scene.point(pos, 0.4, with_alpha(CYAN, 0.8));
            // Short trail segment toward the core.
            self.scene
                .line(pos, pos * 0.95, with_alpha(CYAN, progress * 0.3));
        }
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }
}
