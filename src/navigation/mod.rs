// SPDX-License-Identifier: MPL-2.0
//! Slide navigation: the cursor over `[Splash, Intro, Fabric...]` and the
//! input interpretation that drives it.
//!
//! - [`sequencer`] owns the clamped cursor and maps it to a [`Slide`].
//! - [`gesture`] turns pointer, touch and keyboard input into [`Intent`]s.

pub mod gesture;
pub mod sequencer;

pub use gesture::{GestureConfig, GestureTracker, PointerSource};
pub use sequencer::{FabricPosition, Sequencer, Slide};

/// A discrete navigation request derived from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
}
