//! Screen state shared by the controllers.
//!
//! These are plain data: controllers own and mutate them, front ends read
//! them to decide what to draw.

mod form_state;
mod list_state;

pub use form_state::{FormState, SubmitPhase};
pub use list_state::ListViewState;
