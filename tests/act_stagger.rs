use genesis_sequence::acts::{Act, ActSet, Scene, assembly, invention};
use genesis_sequence::ease::{self, stagger_progress};
use genesis_sequence::seq::Phase;

#[test]
fn stagger_window_maps_progress_locally() {
    // stagger 0.3, window 0.4: local progress covers [0.3, 0.7].
    assert_eq!(stagger_progress(0.2, 0.3, 0.4), 0.0);
    assert!((stagger_progress(0.5, 0.3, 0.4) - 0.5).abs() < 1e-6);
    assert_eq!(stagger_progress(0.7, 0.3, 0.4), 1.0);
    assert_eq!(stagger_progress(0.9, 0.3, 0.4), 1.0);
}

#[test]
fn assembly_components_dock_in_stagger_order() {
    let dock = assembly::AssemblyDock::new(5);
    // At overall progress 0.5 component 0 (stagger 0) is done while
    // component 5 (stagger 0.75) has not started.
    let p0 = dock.component_position(0, 0.5);
    let p5 = dock.component_position(5, 0.5);
    assert_eq!(p0, dock.component_position(0, 1.0));
    assert_eq!(p5, dock.component_position(5, 0.0));
}

#[test]
fn assembly_midpoint_follows_cubic_out() {
    let dock = assembly::AssemblyDock::new(5);
    let start = dock.component_position(0, 0.0);
    let end = dock.component_position(0, 1.0);
    // Component 0 has stagger 0, so overall 0.2 is local 0.5.
    let mid = dock.component_position(0, 0.2);
    let expect = start.lerp(end, ease::cubic_out(0.5));
    assert!((mid - expect).length() < 1e-4);
}

#[test]
fn idle_acts_do_no_entity_work() {
    let mut dock = assembly::AssemblyDock::new(5);
    dock.tick(true, 0.5, 41.0, 0.016);
    assert!(!dock.scene().is_empty());
    dock.tick(false, 0.0, 56.0, 0.016);
    assert!(dock.scene().is_empty());
}

#[test]
fn reveal_flash_only_near_the_end() {
    assert_eq!(invention::InventionReveal::flash_level(0.85), 0.0);
    let near = invention::InventionReveal::flash_level(0.92);
    assert!(near > 0.0 && near < 1.0);
    assert_eq!(invention::InventionReveal::flash_level(1.0), 0.0);
}

#[test]
fn one_act_draws_per_phase_except_gravity_overlap() {
    let mut acts = ActSet::new(9);
    let mut scene = Scene::default();

    acts.tick(Phase::Synthesis, 0.5, 32.0, 0.016);
    acts.compose(&mut scene);
    let synthesis_only = scene.points.len();
    assert!(synthesis_only > 0);

    // Gravity keeps the starfield underneath, so the composed scene holds
    // both acts' points.
    acts.tick(Phase::Gravity, 0.5, 17.0, 0.016);
    acts.compose(&mut scene);
    let with_overlap = scene.points.len();
    assert!(with_overlap > genesis_sequence::acts::void_field::PARTICLES);
}
