//! Act IV: assembly. Components fly from a scattered outer ring to fixed
//! docking positions on a staggered cubic-out cascade; connection segments
//! between consecutive components are recomputed from current positions
//! every tick.

use std::f32::consts::TAU;

use glam::Vec3;

use super::layout::{DockSpec, dock_ring};
use super::palette::{CYAN, GOLD, VIOLET, with_alpha};
use super::{Act, Scene};
use crate::ease::{cubic_out, stagger_progress};

pub const COMPONENTS: usize = 6;

/// Per-component stagger window.
pub const WINDOW: f32 = 0.4;

const RING_SEGMENTS: usize = 32;
const RING_RADIUS: f32 = 7.5;

pub struct AssemblyDock {
    docks: Vec<DockSpec>,
    // Current positions, refreshed each tick for the connection pass.
    current: Vec<Vec3>,
    scene: Scene,
}

impl AssemblyDock {
    pub fn new(seed: u64) -> Self {
        let docks = dock_ring(seed, COMPONENTS);
        let current = docks.iter().map(|d| d.start).collect();
        Self {
            docks,
            current,
            scene: Scene::default(),
        }
    }

    /// Docking position for one component at the given progress. Pure in
    /// progress; exposed for the stagger tests.
    pub fn component_position(&self, index: usize, progress: f32) -> Vec3 {
        let dock = &self.docks[index];
        let local = stagger_progress(progress.clamp(0.0, 1.0), dock.stagger, WINDOW);
        dock.start.lerp(dock.end, cubic_out(local))
    }
}

impl Act for AssemblyDock {
    fn tick(&mut self, active: bool, progress: f32, time: f32, dt: f32) {
        if !active && progress <= 0.0 {
            self.scene.clear();
            return;
        }
        let _ = dt;
        let progress = progress.clamp(0.0, 1.0);
        self.scene.clear();

        for i in 0..self.docks.len() {
            let dock = self.docks[i];
            let local = stagger_progress(progress, dock.stagger, WINDOW);
            let pos = dock.start.lerp(dock.end, cubic_out(local));
            self.current[i] = pos;

            let scale = 0.5 + 0.5 * local;
            // Residual tumble while undocked; settles as local reaches 1.
            let wobble = (1.0 - local) * (time * 0.5).sin() * 0.4;
            self.scene
                .point(pos, 6.0 * scale + wobble, with_alpha(CYAN, 0.3));
            self.scene
                .point(pos, 3.0 * scale, with_alpha(VIOLET, 0.8));
        }

        // Connection lines between consecutive components.
        for i in 0..self.current.len().saturating_sub(1) {
            self.scene.line(
                self.current[i],
                self.current[i + 1],
                with_alpha(GOLD, progress * 0.6),
            );
        }

        // Dock point indicator ring.
        let ring_alpha = progress * 0.3;
        let mut prev = ring_point(RING_SEGMENTS - 1);
        for k in 0..RING_SEGMENTS {
            let next = ring_point(k);
            self.scene.line(prev, next, with_alpha(GOLD, ring_alpha));
            prev = next;
        }
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }
}

fn ring_point(k: usize) -> Vec3 {
    let angle = k as f32 / RING_SEGMENTS as f32 * TAU;
    Vec3::new(angle.cos() * RING_RADIUS, angle.sin() * RING_RADIUS, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_guard_emits_nothing() {
        let mut act = AssemblyDock::new(4);
        act.tick(false, 0.0, 2.0, 0.016);
        assert!(act.scene().is_empty());
    }

    #[test]
    fn endpoints_match_layout() {
        let act = AssemblyDock::new(4);
        for i in 0..COMPONENTS {
            let start = act.component_position(i, 0.0);
            assert!((start - act.docks[i].start).length() < 1e-5);
            let end = act.component_position(i, 1.0);
            assert!((end - act.docks[i].end).length() < 1e-5);
        }
    }

    #[test]
    fn stagger_delays_later_components() {
        let act = AssemblyDock::new(4);
        // At progress 0.15, component 0 has moved; component 5 (stagger 0.75)
        // has not.
        let moved = act.component_position(0, 0.15);
        assert!((moved - act.docks[0].start).length() > 1e-3);
        let waiting = act.component_position(5, 0.15);
        assert!((waiting - act.docks[5].start).length() < 1e-5);
    }

    #[test]
    fn midpoint_uses_cubic_out() {
        let act = AssemblyDock::new(4);
        // Component 0: stagger 0, window 0.4 -> local 0.5 at progress 0.2.
        let pos = act.component_position(0, 0.2);
        let expected = act.docks[0]
            .start
            .lerp(act.docks[0].end, cubic_out(0.5));
        assert!((pos - expected).length() < 1e-5);
    }

    #[test]
    fn connections_follow_current_positions() {
        let mut act = AssemblyDock::new(4);
        act.tick(true, 0.5, 1.0, 0.016);
        let lines = &act.scene().lines[..COMPONENTS - 1];
        for (i, seg) in lines.iter().enumerate() {
            assert!((seg.a - act.current[i]).length() < 1e-5);
            assert!((seg.b - act.current[i + 1]).length() < 1e-5);
        }
    }
}
