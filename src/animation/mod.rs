//! Keyframe synthesis for the grow-intro and the continuous wave.

pub mod keyframes;
pub mod sample;
