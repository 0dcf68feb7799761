//! One-shot procedural entity layouts.
//!
//! Each generator is invoked exactly once when its act is constructed and is
//! deterministic for a given seed. Layouts are never regenerated mid-phase;
//! doing so would break interpolation continuity.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ambient drifting particle for the opening act.
#[derive(Clone, Copy, Debug)]
pub struct DriftSpec {
    pub origin: Vec3,
    pub velocity: Vec3,
    pub twinkle_phase: f32,
}

pub fn drift_field(seed: u64, count: usize) -> Vec<DriftSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| DriftSpec {
            origin: Vec3::new(
                rng.random_range(-50.0..50.0),
                rng.random_range(-40.0..40.0),
                rng.random_range(-30.0..30.0),
            ),
            velocity: Vec3::new(
                rng.random_range(-0.8..0.8),
                rng.random_range(-0.8..0.8),
                rng.random_range(-0.4..0.4),
            ),
            twinkle_phase: rng.random_range(0.0..TAU),
        })
        .collect()
}

/// Orbital particle attracted toward the gravitational core.
#[derive(Clone, Copy, Debug)]
pub struct OrbitSpec {
    pub initial: Vec3,
    pub radius: f32,
    pub speed: f32,
    pub phase: f32,
}

pub fn orbit_swarm(seed: u64, count: usize) -> Vec<OrbitSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| OrbitSpec {
            initial: Vec3::new(
                rng.random_range(-50.0..50.0),
                rng.random_range(-40.0..40.0),
                rng.random_range(-30.0..30.0),
            ),
            radius: 10.0 + rng.random_range(0.0..30.0),
            speed: 0.2 + rng.random_range(0.0..0.8),
            phase: rng.random_range(0.0..TAU),
        })
        .collect()
}

/// Artifact forged on the synthesis ring. Stagger delays its scale-in.
#[derive(Clone, Copy, Debug)]
pub struct ArtifactSpec {
    pub position: Vec3,
    pub stagger: f32,
}

pub fn forge_ring(seed: u64, count: usize) -> Vec<ArtifactSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let angle = i as f32 * PI / 4.0;
            ArtifactSpec {
                position: Vec3::new(
                    angle.cos() * 15.0,
                    angle.sin() * 10.0,
                    rng.random_range(-5.0..5.0),
                ),
                stagger: i as f32 * 0.1,
            }
        })
        .collect()
}

pub fn spark_cloud(seed: u64, count: usize) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-20.0..20.0),
                rng.random_range(-20.0..20.0),
                rng.random_range(-20.0..20.0),
            )
        })
        .collect()
}

/// Component of the assembly: scattered start, fixed docking target.
#[derive(Clone, Copy, Debug)]
pub struct DockSpec {
    pub start: Vec3,
    pub end: Vec3,
    pub stagger: f32,
}

pub fn dock_ring(seed: u64, count: usize) -> Vec<DockSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let angle = i as f32 * PI / 3.0;
            DockSpec {
                start: Vec3::new(
                    angle.cos() * 25.0,
                    angle.sin() * 20.0,
                    rng.random_range(-7.5..7.5),
                ),
                end: Vec3::new(angle.cos() * 8.0, angle.sin() * 6.0, 0.0),
                stagger: i as f32 * 0.15,
            }
        })
        .collect()
}

/// Crystallization module with its converged target. Fixed table.
#[derive(Clone, Copy, Debug)]
pub struct CrystalSpec {
    pub start: Vec3,
    pub target: Vec3,
}

pub fn crystal_modules() -> Vec<CrystalSpec> {
    [
        ((0.0, 8.0, 0.0), (0.0, 6.0, 0.0)),
        ((-10.0, 0.0, 0.0), (-4.0, 0.0, 0.0)),
        ((10.0, 0.0, 0.0), (4.0, 0.0, 0.0)),
        ((0.0, -8.0, 0.0), (0.0, -6.0, 0.0)),
        ((0.0, 0.0, 10.0), (0.0, 0.0, 4.0)),
        ((0.0, 0.0, -10.0), (0.0, 0.0, -4.0)),
    ]
    .into_iter()
    .map(|(s, t)| CrystalSpec {
        start: Vec3::new(s.0, s.1, s.2),
        target: Vec3::new(t.0, t.1, t.2),
    })
    .collect()
}

/// Random point on the 15..25 spherical shell the energy swarm respawns to.
pub fn shell_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.random_range(0.0..TAU);
    let phi = rng.random_range(0.0..PI);
    let r = 15.0 + rng.random_range(0.0..10.0);
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

pub fn energy_shell(seed: u64, count: usize) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| shell_point(&mut rng)).collect()
}

/// Point of the reveal glyph, with its resting scale.
#[derive(Clone, Copy, Debug)]
pub struct GlyphPoint {
    pub position: Vec3,
    pub scale: f32,
}

/// The symbolic "D": a five-point vertical bar and a five-point bow.
pub fn glyph_points() -> Vec<GlyphPoint> {
    let bar = [(0.0, 4.0), (0.0, 2.0), (0.0, 0.0), (0.0, -2.0), (0.0, -4.0)];
    let bow = [(2.0, 3.0), (3.5, 1.5), (4.0, 0.0), (3.5, -1.5), (2.0, -3.0)];
    bar.iter()
        .map(|&(x, y)| GlyphPoint {
            position: Vec3::new(x, y, 0.0),
            scale: 1.0,
        })
        .chain(bow.iter().map(|&(x, y)| GlyphPoint {
            position: Vec3::new(x, y, 0.0),
            scale: 0.8,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_deterministic_per_seed() {
        let a = orbit_swarm(7, 64);
        let b = orbit_swarm(7, 64);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.initial, y.initial);
            assert_eq!(x.radius, y.radius);
            assert_eq!(x.phase, y.phase);
        }
        let c = orbit_swarm(8, 64);
        assert!(a.iter().zip(&c).any(|(x, y)| x.initial != y.initial));
    }

    #[test]
    fn orbit_parameters_in_range() {
        for spec in orbit_swarm(1, 500) {
            assert!(spec.radius >= 10.0 && spec.radius < 40.0);
            assert!(spec.speed >= 0.2 && spec.speed < 1.0);
        }
    }

    #[test]
    fn dock_targets_sit_on_the_inner_ring() {
        let docks = dock_ring(3, 6);
        assert_eq!(docks.len(), 6);
        for (i, d) in docks.iter().enumerate() {
            let angle = i as f32 * std::f32::consts::PI / 3.0;
            assert!((d.end.x - angle.cos() * 8.0).abs() < 1e-5);
            assert!((d.end.y - angle.sin() * 6.0).abs() < 1e-5);
            assert_eq!(d.end.z, 0.0);
            assert!((d.stagger - i as f32 * 0.15).abs() < 1e-6);
        }
    }

    #[test]
    fn crystal_table_is_fixed() {
        let modules = crystal_modules();
        assert_eq!(modules.len(), 6);
        assert_eq!(modules[0].start, Vec3::new(0.0, 8.0, 0.0));
        assert_eq!(modules[5].target, Vec3::new(0.0, 0.0, -4.0));
    }

    #[test]
    fn energy_shell_radii() {
        for p in energy_shell(11, 400) {
            let r = p.length();
            assert!(r >= 14.9 && r <= 25.1, "radius {r} outside shell");
        }
    }

    #[test]
    fn glyph_has_bar_and_bow() {
        let glyph = glyph_points();
        assert_eq!(glyph.len(), 10);
        assert!(glyph[..5].iter().all(|p| p.scale == 1.0));
        assert!(glyph[5..].iter().all(|p| p.scale == 0.8));
    }
}
