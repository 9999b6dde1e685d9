//! Reusable UI components for FraudLens

mod skeleton;

pub use skeleton::{skeleton_bar, skeleton_card};
