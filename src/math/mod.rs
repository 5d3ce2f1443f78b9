//! Numeric primitives: the perceptual color model and both contrast metrics.

pub mod apca;
pub mod oklch;
pub mod wcag;
