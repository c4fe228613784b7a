//! Facade for sending messages and polling their outcomes.

use crate::api::to_json;
use crate::error::Error;
use crate::request::{ids_path, join_ids, RestRequest};
use crate::response::ApiResponse;
use crate::responses::{DeliveryReceiptResponse, MessageRepliesResponse, NotificationsResponse};
use crate::transport::Transport;
use crate::types::{Message, ProgramReply};

/// Message submission endpoint.
pub const MESSAGES_PATH: &str = "/messages";
/// Delivery-notification polling endpoint.
pub const NOTIFICATIONS_PATH: &str = "/notifications";
/// Delivery-receipt endpoint.
pub const RECEIPTS_PATH: &str = "/receipts";
/// Reply polling endpoint, keyed by message id.
pub const REPLIES_PATH: &str = "/replies";
/// Reply polling endpoint, keyed by program keyword.
pub const PROGRAM_REPLIES_PATH: &str = "/programreplies";

/// Messaging operations: submit a message and poll for its delivery
/// notifications, receipts, and inbound replies. All polling endpoints
/// answer "nothing yet" with a typed 404 response.
#[derive(Debug, Clone, Copy)]
pub struct MessagingApi<'a> {
    transport: &'a Transport,
}

impl<'a> MessagingApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        MessagingApi { transport }
    }

    /// Submit a message for immediate delivery. The response echoes the
    /// destinations with per-destination acceptance tracking.
    pub fn send_message(
        &self,
        message: &Message,
    ) -> Result<ApiResponse<NotificationsResponse>, Error> {
        let mut request = RestRequest::new(MESSAGES_PATH).wrap("sendmessage");
        if let Some(fields) = to_json(message)?.as_object() {
            for (key, value) in fields {
                request = request.body_param(key, value.clone());
            }
        }
        self.transport.post(&request)
    }

    /// Poll the delivery notifications recorded for a tracking id.
    pub fn delivery_notifications(
        &self,
        tracking_id: &str,
    ) -> Result<ApiResponse<NotificationsResponse>, Error> {
        let request =
            RestRequest::new(format!("{NOTIFICATIONS_PATH}/{tracking_id}")).allow_not_found();
        self.transport.get(&request)
    }

    /// Fetch delivery receipts for the given message ids.
    pub fn delivery_receipts<S: AsRef<str>>(
        &self,
        message_ids: &[S],
    ) -> Result<ApiResponse<DeliveryReceiptResponse>, Error> {
        let request = RestRequest::new(ids_path(RECEIPTS_PATH, message_ids)).allow_not_found();
        self.transport.get(&request)
    }

    /// Fetch the replies received for a sent message.
    pub fn replies(
        &self,
        message_id: &str,
    ) -> Result<ApiResponse<MessageRepliesResponse>, Error> {
        let request = RestRequest::new(format!("{REPLIES_PATH}/{message_id}")).allow_not_found();
        self.transport.get(&request)
    }

    /// Fetch the replies received on a program keyword, optionally narrowed
    /// to specific senders and a trailing time window.
    pub fn program_replies(
        &self,
        query: &ProgramReply,
    ) -> Result<ApiResponse<MessageRepliesResponse>, Error> {
        let mut request = RestRequest::new(program_replies_path(query)).allow_not_found();
        if let Some(minutes) = &query.minutes {
            request = request.query_param("minutes", minutes);
        }
        self.transport.get(&request)
    }
}

/// The keyword is always a path segment; a `/since` segment marks a
/// time-windowed lookup and the sender MDNs follow as a comma-separated
/// segment when given.
fn program_replies_path(query: &ProgramReply) -> String {
    let mut path = format!("{PROGRAM_REPLIES_PATH}/{}", query.keyword);
    if query.minutes.is_some() {
        path.push_str("/since");
    }
    if let Some(csv) = join_ids(&query.destinations) {
        path.push('/');
        path.push_str(&csv);
    }
    path
}
