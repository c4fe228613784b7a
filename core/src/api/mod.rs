//! Resource facades.
//!
//! One facade per resource family, each composing `RestRequest` values and
//! delegating to a shared [`Transport`](crate::Transport). A facade method
//! encodes exactly one REST operation's URL shape and parameter layout and
//! returns the transport's envelope unchanged — errors propagate as-is.

mod contacts;
mod groups;
mod messaging;
mod scheduling;

pub use contacts::ContactsApi;
pub use groups::GroupsApi;
pub use messaging::MessagingApi;
pub use scheduling::SchedulingApi;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// Serialize a domain model into a body parameter value.
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value, Error> {
    serde_json::to_value(value)
        .map_err(|e| Error::Service(format!("failed to serialize request body: {e}")))
}
