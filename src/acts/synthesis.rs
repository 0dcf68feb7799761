//! Act III: synthesis. Artifacts scale in on a staggered cascade while a
//! spark cloud jitters with an envelope peaking at progress 0.5. Sparks that
//! wander past the recycle distance respawn near the center; the cloud's
//! count never changes.

use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::layout::{ArtifactSpec, forge_ring, spark_cloud};
use super::palette::{CYAN, MAGENTA, with_alpha};
use super::{Act, Scene};
use crate::ease::stagger_progress;

pub const ARTIFACTS: usize = 8;
pub const SPARKS: usize = 300;

/// Per-artifact stagger window.
const WINDOW: f32 = 0.3;
const RECYCLE_DIST: f32 = 50.0;

pub struct SynthesisForge {
    artifacts: Vec<ArtifactSpec>,
    sparks: Vec<Vec3>,
    rng: StdRng,
    // Cumulative artifact spin, advanced by elapsed time.
    spin: f32,
    scene: Scene,
}

impl SynthesisForge {
    pub fn new(seed: u64) -> Self {
        Self {
            artifacts: forge_ring(seed, ARTIFACTS),
            sparks: spark_cloud(seed.wrapping_add(1), SPARKS),
            rng: StdRng::seed_from_u64(seed.wrapping_add(2)),
            spin: 0.0,
            scene: Scene::default(),
        }
    }

    pub fn spark_count(&self) -> usize {
        self.sparks.len()
    }
}

impl Act for SynthesisForge {
    fn tick(&mut self, active: bool, progress: f32, time: f32, dt: f32) {
        if !active && progress <= 0.0 {
            self.scene.clear();
            return;
        }
        let _ = time;
        let progress = progress.clamp(0.0, 1.0);
        self.scene.clear();

        // Step sizes are defined per 60 Hz frame; scale by dt so any
        // refresh rate covers the same distance per second.
        let frames = dt * 60.0;
        let forge = (progress * PI).sin();

        for spark in &mut self.sparks {
            let jitter = Vec3::new(
                self.rng.random_range(-0.5..0.5),
                self.rng.random_range(-0.5..0.5),
                self.rng.random_range(-0.5..0.5),
            );
            *spark += jitter * forge * 0.5 * frames;
            if spark.length() > RECYCLE_DIST {
                *spark = Vec3::new(
                    self.rng.random_range(-5.0..5.0),
                    self.rng.random_range(-5.0..5.0),
                    self.rng.random_range(-5.0..5.0),
                );
            }
            self.scene
                .point(*spark, 0.5, with_alpha(MAGENTA, forge * 0.8));
        }

        self.spin += 0.6 * dt;
        for artifact in &self.artifacts {
            let local = stagger_progress(progress, artifact.stagger, WINDOW);
            if local <= 0.0 {
                continue;
            }
            self.scene
                .point(artifact.position, local * 2.0, with_alpha(CYAN, local * 0.9));
            // Rotating wire outline suggesting the forged solid.
            let r = local * 2.0;
            let mut prev = outline_point(artifact.position, r, self.spin, 3);
            for k in 0..4 {
                let next = outline_point(artifact.position, r, self.spin, k);
                self.scene
                    .line(prev, next, with_alpha(CYAN, local * 0.5));
                prev = next;
            }
        }

        // Central forge glow, brightest at mid-phase.
        self.scene
            .point(Vec3::ZERO, forge * 5.0, with_alpha(MAGENTA, 0.3));
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }
}

fn outline_point(center: Vec3, radius: f32, spin: f32, corner: usize) -> Vec3 {
    let angle = spin + corner as f32 * PI / 2.0;
    center + Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
}
