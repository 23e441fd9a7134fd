//! Validation tools for LFO generator output.
//!
//! `lfo-compare` reduces a candidate/reference pair to a single MSE and a
//! pass/fail exit code; `lfo-plot` overlays the two recordings channel by
//! channel.

pub mod data;
pub mod layout;
