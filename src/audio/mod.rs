pub mod output;
pub mod scheduler;
pub mod score;
pub mod tone;
pub mod writer;

pub use scheduler::{AudioScheduler, MASTER_GAIN};
pub use tone::{ToneSpec, Waveform};
