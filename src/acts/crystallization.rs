//! Act V: crystallization. Modules converge on a quad-in-out curve while
//! their hue cycles with time; an energy swarm spirals inward cumulatively,
//! each tick contracting and shearing the previous tick's positions, with
//! particles respawned to the outer shell once they reach the center.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::layout::{CrystalSpec, crystal_modules, energy_shell, shell_point};
use super::palette::{WHITE, hsl_to_rgb, with_alpha};
use super::{Act, Scene};
use crate::ease::quad_in_out;

pub const MODULES: usize = 6;
pub const ENERGY_PARTICLES: usize = 400;

const RESPAWN_RADIUS: f32 = 3.0;

pub struct CrystallizationForm {
    modules: Vec<CrystalSpec>,
    energy: Vec<Vec3>,
    rng: StdRng,
    scene: Scene,
}

impl CrystallizationForm {
    pub fn new(seed: u64) -> Self {
        Self {
            modules: crystal_modules(),
            energy: energy_shell(seed, ENERGY_PARTICLES),
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            scene: Scene::default(),
        }
    }

    pub fn module_position(&self, index: usize, progress: f32) -> Vec3 {
        let spec = &self.modules[index];
        spec.start
            .lerp(spec.target, quad_in_out(progress.clamp(0.0, 1.0)))
    }

    pub fn energy_count(&self) -> usize {
        self.energy.len()
    }
}

impl Act for CrystallizationForm {
    fn tick(&mut self, active: bool, progress: f32, time: f32, dt: f32) {
        if !active && progress <= 0.0 {
            self.scene.clear();
            return;
        }
        let progress = progress.clamp(0.0, 1.0);
        self.scene.clear();

        for i in 0..self.modules.len() {
            let pos = self.module_position(i, progress);
            let hue = (i as f32 / MODULES as f32 + time * 0.1).rem_euclid(1.0);
            let color = hsl_to_rgb(hue, 1.0, 0.5);
            self.scene.point(pos, 3.0, with_alpha(color, 0.7));
        }

        // Cumulative inward spiral: contraction and shear compound across
        // ticks, with per-frame factors normalized to a 60 Hz reference.
        let frames = dt * 60.0;
        let contraction = (1.0 - progress * 0.5).powf(frames);
        let swarm_color = hsl_to_rgb(progress * 0.3, 1.0, 0.5);
        for (i, p) in self.energy.iter_mut().enumerate() {
            *p *= contraction;
            let shear = (time * 2.0 + i as f32 * 0.01) * 0.01 * frames;
            let (sin, cos) = shear.sin_cos();
            let (x, z) = (p.x, p.z);
            p.x = x * cos - z * sin;
            p.z = x * sin + z * cos;
            if p.length() < RESPAWN_RADIUS {
                *p = shell_point(&mut self.rng);
            }
            self.scene.point(*p, 0.4, with_alpha(swarm_color, 0.6));
        }

        // Convergence glow at the center.
        self.scene
            .point(Vec3::ZERO, progress * 8.0, with_alpha(WHITE, progress * 0.3));
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }
}
