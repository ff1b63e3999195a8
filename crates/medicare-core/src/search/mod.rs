//! Client-side search over record lists.
//!
//! Inclusion is the conjunction of the free-text match and every category
//! or date filter that is not set to `all`.

mod model;
mod query;

pub use model::{DateFilter, Filter, RecordFilter};
pub use query::{AppointmentQuery, PatientQuery};
