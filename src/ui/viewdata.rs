use crate::acts::Scene;
use crate::seq::Phase;

/// One frame of presentation state, sent from the worker to the UI thread.
/// The UI holds the last frame it received and repaints from it; dropping
/// intermediate frames is harmless.
#[derive(Clone, Debug)]
pub struct UiFrame {
    pub phase: Phase,
    pub progress: f32,
    pub time_sec: f32,
    pub scene: Scene,
    /// Skip affordance visibility (grace period elapsed, not yet complete).
    pub show_skip: bool,
    /// Closing tagline opacity, 0 until late in the reveal.
    pub tagline_alpha: f32,
    pub completed: bool,
}

impl UiFrame {
    pub fn empty() -> Self {
        Self {
            phase: Phase::Void,
            progress: 0.0,
            time_sec: 0.0,
            scene: Scene::default(),
            show_skip: false,
            tagline_alpha: 0.0,
            completed: false,
        }
    }
}
