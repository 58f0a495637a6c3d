//! Motion Plots - exploratory charts for recorded motion-sensor samples
//!
//! Two tools share this library: `motion-overlay` draws the z-score normalized
//! features over each other, `motion-grid` draws each raw feature in its own
//! subplot.

pub mod charts;
pub mod cli;
pub mod data;
pub mod gui;
pub mod stats;

#[cfg(test)]
mod test_support;
