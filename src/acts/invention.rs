//! Act VI: the reveal. The glyph structure yaws from a side view to face
//! the camera on a quart-out curve, scales in with back-out overshoot, and
//! each point cascades in on its own small delay. A full-screen flash fires
//! only past progress 0.9 and fades as `(progress - 0.9)` grows.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use super::layout::{GlyphPoint, glyph_points};
use super::palette::{CYAN, VIOLET, with_alpha};
use super::{Act, Scene};
use crate::ease::{back_out, quart_out, stagger_progress};

/// Per-point stagger window.
pub const WINDOW: f32 = 0.5;
pub const POINT_STAGGER: f32 = 0.05;

const RING_SEGMENTS: usize = 48;
const FLASH_THRESHOLD: f32 = 0.9;

pub struct InventionReveal {
    glyph: Vec<GlyphPoint>,
    scene: Scene,
}

impl InventionReveal {
    pub fn new() -> Self {
        Self {
            glyph: glyph_points(),
            scene: Scene::default(),
        }
    }

    fn structure_yaw(progress: f32) -> f32 {
        FRAC_PI_2 * (1.0 - quart_out((progress * 1.5).min(1.0)))
    }

    fn structure_scale(progress: f32) -> f32 {
        back_out((progress * 1.2).min(1.0)) * 2.0
    }

    /// Flash level for a progress value; zero until the threshold.
    pub fn flash_level(progress: f32) -> f32 {
        if progress > FLASH_THRESHOLD {
            (1.0 - (progress - FLASH_THRESHOLD) * 10.0).max(0.0)
        } else {
            0.0
        }
    }
}

impl Default for InventionReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl Act for InventionReveal {
    fn tick(&mut self, active: bool, progress: f32, time: f32, dt: f32) {
        if !active && progress <= 0.0 {
            self.scene.clear();
            return;
        }
        let _ = dt;
        let progress = progress.clamp(0.0, 1.0);
        self.scene.clear();

        let yaw = Self::structure_yaw(progress);
        let scale = Self::structure_scale(progress);
        let (sin, cos) = yaw.sin_cos();
        let place = |p: Vec3| {
            Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos) * scale
        };

        let mut prev: Option<Vec3> = None;
        for (i, point) in self.glyph.iter().enumerate() {
            let local = stagger_progress(progress, i as f32 * POINT_STAGGER, WINDOW);
            let size = back_out(local) * point.scale * scale;
            let pos = place(point.position);
            let color = if i < 5 { CYAN } else { VIOLET };
            self.scene.point(pos, size.max(0.0), with_alpha(color, 0.9));
            // Polyline tracing the glyph outline.
            if let Some(prev) = prev {
                self.scene
                    .line(prev, pos, with_alpha(CYAN, progress * 0.5));
            }
            prev = Some(pos);
        }

        // Pulsing background glow.
        let pulse = 1.0 + (time * 2.0).sin() * 0.1;
        let glow_alpha = progress * 0.2 * (1.0 + (time * 3.0).sin() * 0.3);
        self.scene.point(
            Vec3::ZERO,
            (scale / 2.0) * 12.0 * pulse,
            with_alpha(VIOLET, glow_alpha.max(0.0)),
        );

        // Radiating rings, camera-facing.
        for ring in 1..=3u32 {
            let radius = progress * ring as f32 * 8.0;
            let alpha = ((1.0 - ring as f32 * 0.3) * progress * 0.3).max(0.0);
            if radius <= 0.0 || alpha <= 0.0 {
                continue;
            }
            let mut prev = ring_point(RING_SEGMENTS - 1, radius);
            for k in 0..RING_SEGMENTS {
                let next = ring_point(k, radius);
                self.scene.line(prev, next, with_alpha(CYAN, alpha));
                prev = next;
            }
        }

        self.scene.flash = Self::flash_level(progress);
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }
}

fn ring_point(k: usize, radius: f32) -> Vec3 {
    let angle = k as f32 / RING_SEGMENTS as f32 * TAU;
    Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
}
