//! The six acts and their shared scene buffers.
//!
//! Every act owns its entity set and a reusable [`Scene`] it rewrites each
//! tick. The in-place buffers are a deliberate performance choice (no
//! per-tick allocation once warmed up), not an invariant anything outside
//! the owning act may rely on.

pub mod assembly;
pub mod crystallization;
pub mod gravity;
pub mod invention;
pub mod layout;
pub mod palette;
pub mod synthesis;
pub mod void_field;

use glam::Vec3;

use crate::seq::Phase;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSprite {
    pub position: Vec3,
    /// World-space diameter.
    pub size: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSeg {
    pub a: Vec3,
    pub b: Vec3,
    pub color: [f32; 4],
}

/// Per-act render output, rewritten every tick.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub points: Vec<PointSprite>,
    pub lines: Vec<LineSeg>,
    /// Full-screen flash level in [0, 1]; only the reveal act sets it.
    pub flash: f32,
}

impl Scene {
    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.flash = 0.0;
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.flash == 0.0
    }

    pub fn append(&mut self, other: &Scene) {
        self.points.extend_from_slice(&other.points);
        self.lines.extend_from_slice(&other.lines);
        self.flash = self.flash.max(other.flash);
    }

    pub fn point(&mut self, position: Vec3, size: f32, color: [f32; 4]) {
        if color[3] <= 0.0 || size <= 0.0 {
            return;
        }
        self.points.push(PointSprite {
            position,
            size,
            color,
        });
    }

    pub fn line(&mut self, a: Vec3, b: Vec3, color: [f32; 4]) {
        if color[3] <= 0.0 {
            return;
        }
        self.lines.push(LineSeg { a, b, color });
    }
}

/// One phase's self-contained animation behavior.
///
/// `tick` receives the phase-local progress in [0, 1] (out-of-range input is
/// clamped by the staggering helpers, never rejected), the sequence clock in
/// seconds, and the tick delta. When `!active && progress == 0` an act does
/// no entity work and contributes nothing visible.
pub trait Act {
    fn tick(&mut self, active: bool, progress: f32, time: f32, dt: f32);
    fn scene(&self) -> &Scene;
}

/// All six acts keyed by phase, constructed once per sequence.
pub struct ActSet {
    void: void_field::VoidField,
    gravity: gravity::GravityWell,
    synthesis: synthesis::SynthesisForge,
    assembly: assembly::AssemblyDock,
    crystallization: crystallization::CrystallizationForm,
    invention: invention::InventionReveal,
}

impl ActSet {
    pub fn new(seed: u64) -> Self {
        // Distinct sub-seeds so acts do not mirror each other's randomness.
        Self {
            void: void_field::VoidField::new(seed ^ 0x01),
            gravity: gravity::GravityWell::new(seed ^ 0x02),
            synthesis: synthesis::SynthesisForge::new(seed ^ 0x03),
            assembly: assembly::AssemblyDock::new(seed ^ 0x04),
            crystallization: crystallization::CrystallizationForm::new(seed ^ 0x05),
            invention: invention::InventionReveal::new(),
        }
    }

    /// Tick every act for the current sequencer state. The void field keeps
    /// progress 1 while gravity plays so the starfield persists under the
    /// collapse; every other act only sees its own phase's progress.
    pub fn tick(&mut self, phase: Phase, progress: f32, time: f32, dt: f32) {
        let void_progress = match phase {
            Phase::Void => progress,
            Phase::Gravity => 1.0,
            _ => 0.0,
        };
        self.void
            .tick(phase == Phase::Void, void_progress, time, dt);
        self.gravity.tick(
            phase == Phase::Gravity,
            if phase == Phase::Gravity { progress } else { 0.0 },
            time,
            dt,
        );
        self.synthesis.tick(
            phase == Phase::Synthesis,
            if phase == Phase::Synthesis { progress } else { 0.0 },
            time,
            dt,
        );
        self.assembly.tick(
            phase == Phase::Assembly,
            if phase == Phase::Assembly { progress } else { 0.0 },
            time,
            dt,
        );
        self.crystallization.tick(
            phase == Phase::Crystallization,
            if phase == Phase::Crystallization {
                progress
            } else {
                0.0
            },
            time,
            dt,
        );
        self.invention.tick(
            phase == Phase::Invention,
            if phase == Phase::Invention { progress } else { 0.0 },
            time,
            dt,
        );
    }

    /// Append every act's current output into one composed scene.
    pub fn compose(&self, out: &mut Scene) {
        out.clear();
        for scene in [
            self.void.scene(),
            self.gravity.scene(),
            self.synthesis.scene(),
            self.assembly.scene(),
            self.crystallization.scene(),
            self.invention.scene(),
        ] {
            out.append(scene);
        }
    }

    pub fn act(&self, phase: Phase) -> Option<&dyn Act> {
        match phase {
            Phase::Void => Some(&self.void),
            Phase::Gravity => Some(&self.gravity),
            Phase::Synthesis => Some(&self.synthesis),
            Phase::Assembly => Some(&self.assembly),
            Phase::Crystallization => Some(&self.crystallization),
            Phase::Invention => Some(&self.invention),
            Phase::Complete => None,
        }
    }
}
