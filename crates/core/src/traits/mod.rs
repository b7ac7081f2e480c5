//! Collaborator traits
//!
//! The intake core consumes three external systems through narrow async
//! interfaces: the outbound messaging channel, complaint persistence and
//! the case-status provider. Concrete transports live outside this
//! workspace; tests use hand-rolled mocks.

mod messenger;
mod status;
mod store;

pub use messenger::OutboundMessenger;
pub use status::{CaseStatus, CaseStatusProvider, StatusSummary};
pub use store::ComplaintStore;
