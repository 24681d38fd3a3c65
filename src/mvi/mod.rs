//! Model-View-Intent primitives.
//!
//! State changes flow one way:
//!
//! ```text
//! API response ──→ Intent ──→ Reducer ──→ State ──→ subscribers
//! ```
//!
//! - **State**: immutable snapshot handed to the view
//! - **Intent**: the outcome of a request or a local event
//! - **Reducer**: pure function computing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
