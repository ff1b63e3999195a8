//! Navigation domain module: view identifiers and router state.

mod router;
mod view;

pub use router::RouterState;
pub use view::{ViewId, current_screen_for};
