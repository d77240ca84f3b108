//! Round-scoped dice bookkeeping for the draft and movement phases.

pub mod draft;
pub mod movement;

pub use draft::DraftState;
pub use movement::{MovementState, RemainingDie, SelectedDie};
