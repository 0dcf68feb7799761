//! A cinematic intro sequence: a phase-driven timing core animating six
//! particle acts, with a procedural audio score scheduled per phase.

pub mod acts;
pub mod app;
pub mod audio;
pub mod cli;
pub mod config;
pub mod ease;
pub mod runner;
pub mod seq;
pub mod ui;
