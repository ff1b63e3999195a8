//! Role policy: the static role-to-view table and action gating.
//!
//! The navigation menu, the action controls on screens and the restricted
//! dashboard figures are all decided by [`RolePolicy`]; nothing else performs
//! role checks.

mod action;
mod insight;
mod model;

pub use action::Action;
pub use insight::{Insight, InsightRule};
pub use model::{MenuEntry, RolePolicy, STANDARD_INSIGHTS, STANDARD_TABLE, Visibility};
