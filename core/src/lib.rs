//! Synchronous client for the cloud messaging REST service.
//!
//! # Overview
//! Covers contact and group management, message submission, delivery
//! notifications and receipts, reply retrieval, and message scheduling.
//! A [`Client`] bound to one account's credentials exposes a facade per
//! resource family; every call returns an [`ApiResponse`] envelope (HTTP
//! status plus the typed payload) or a typed [`Error`].
//!
//! # Design
//! - One [`Transport`] per client owns the HTTP agent, the base URL, and
//!   the precomputed `Basic` auth header. Facades never touch the network
//!   directly; they compose [`RestRequest`] values and delegate.
//! - The service nests every payload under a JSON root element. Request
//!   wrapping and response unwrapping are explicit per call, driven by the
//!   `RestRequest`, so no serializer-global state is involved.
//! - "Not found" is part of the data model on retrieval endpoints (a 404
//!   parses into the typed response) and an [`Error::Client`] everywhere
//!   else.

pub mod api;
pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod responses;
pub mod transport;
pub mod types;

pub use api::{ContactsApi, GroupsApi, MessagingApi, SchedulingApi};
pub use client::{Client, PRODUCTION_BASE_URL, TRIAL_BASE_URL};
pub use error::Error;
pub use request::{join_ids, RestRequest, RESPONSE_ROOT};
pub use response::ApiResponse;
pub use responses::{
    ContactsResponse, DeliveryReceipt, DeliveryReceiptResponse, GroupResponse, MessageReplies,
    MessageRepliesResponse, MessageReply, MessageStatus, Notification, Notifications,
    NotificationsResponse, RestStatus, StatusListResponse,
};
pub use transport::Transport;
pub use types::{Contact, Group, GroupMember, Message, ProgramReply, Schedule, ScheduleMessage};
