//! # Command router
//!
//! [`CommandRouter`] maps an update's command to one registered handler and sends the handler's reply.
//! Unknown commands are ignored; handler and send failures are logged and never propagate.
//! [`UpdateDispatcher`] puts payload normalization in front of the router for the webhook and polling transports.

mod dispatcher;
mod router;

pub use dispatcher::UpdateDispatcher;
pub use router::{CommandRouter, DispatchOutcome};

// Integration tests live in tests/router_test.rs and tests/dispatcher_test.rs
