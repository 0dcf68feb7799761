//! Act I: the void. Ambient drifting starfield with no target state; it
//! ends at progress 1 and keeps playing there while gravity takes over.

use glam::Vec3;

use super::layout::{DriftSpec, drift_field};
use super::palette::{CYAN, WHITE, with_alpha};
use super::{Act, Scene};

pub const PARTICLES: usize = 300;

const BOUND: Vec3 = Vec3::new(55.0, 45.0, 35.0);

pub struct VoidField {
    specs: Vec<DriftSpec>,
    positions: Vec<Vec3>,
    scene: Scene,
}

impl VoidField {
    pub fn new(seed: u64) -> Self {
        let specs = drift_field(seed, PARTICLES);
        let positions = specs.iter().map(|s| s.origin).collect();
        Self {
            specs,
            positions,
            scene: Scene::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}

impl Act for VoidField {
    fn tick(&mut self, active: bool, progress: f32, time: f32, dt: f32) {
        if !active && progress <= 0.0 {
            self.scene.clear();
            return;
        }

        self.scene.clear();
        let brightness = 0.5 + 0.5 * progress.clamp(0.0, 1.0);
        for (pos, spec) in self.positions.iter_mut().zip(&self.specs) {
            *pos += spec.velocity * dt;
            // Wrap so the field keeps its density while drifting.
            for axis in 0..3 {
                if pos[axis] > BOUND[axis] {
                    pos[axis] -= 2.0 * BOUND[axis];
                } else if pos[axis] < -BOUND[axis] {
                    pos[axis] += 2.0 * BOUND[axis];
                }
            }
            let twinkle = 0.5 + 0.5 * (time * 1.5 + spec.twinkle_phase).sin();
            let alpha = (0.25 + 0.45 * twinkle) * brightness;
            let tint = if twinkle > 0.8 { CYAN } else { WHITE };
            self.scene
                .point(*pos, 0.25 + 0.2 * twinkle, with_alpha(tint, alpha));
        }
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }
}
