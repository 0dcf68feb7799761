pub mod phase;
pub mod sequencer;

pub use phase::Phase;
pub use sequencer::{SKIP_GRACE_SEC, SequenceState, Sequencer};
