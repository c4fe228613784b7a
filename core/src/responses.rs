//! Response-side payloads.
//!
//! # Design
//! Every payload arrives nested under a `"response"` root (the transport
//! unwraps it before these types see the JSON). The vendor's own
//! success/failure envelope — [`RestStatus`] — is flattened into the
//! payloads that can carry it alongside data, standing in for the
//! inheritance the service's schema implies: on a tolerated 404 the fields
//! of `RestStatus` are populated and the data fields are absent, on a 200
//! it is usually the other way around. Unknown incoming fields are ignored
//! everywhere.

use serde::{Deserialize, Serialize};

use crate::types::Contact;

/// The vendor's `{status, code, message}` envelope. `status` is always
/// present on failure paths; `code` and `message` only accompany failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestStatus {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Per-item outcomes of a batch contact write, one entry per submitted
/// contact in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusListResponse {
    #[serde(rename = "statusList", default)]
    pub statuses: Vec<RestStatus>,
}

/// Result of a contact retrieval. `contacts` is absent when the lookup
/// found nothing and the envelope explains why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsResponse {
    #[serde(flatten)]
    pub result: RestStatus,
    #[serde(rename = "contactList", default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
}

/// Result of a group retrieval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResponse {
    #[serde(flatten)]
    pub result: RestStatus,
}

/// Acceptance tracking for one submitted message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub destination: String,
    #[serde(rename = "messagestatus", default)]
    pub message_status: String,
    #[serde(rename = "messageID", default)]
    pub message_id: String,
    #[serde(rename = "messagetext", default)]
    pub message_text: String,
}

/// The tracking block a send or notification lookup returns: destinations,
/// originating keyword, and per-destination tracking entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifications {
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(rename = "from", default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(rename = "trackinginformation", default)]
    pub tracking_information: Vec<Notification>,
}

/// Response to a message send or a delivery-notification poll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsResponse {
    #[serde(flatten)]
    pub result: RestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Notifications>,
}

/// Delivery outcome of one message to one destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStatus {
    #[serde(rename = "to", default)]
    pub min: String,
    #[serde(rename = "deliverystatus", default)]
    pub delivery_status: String,
    #[serde(rename = "messageID", default)]
    pub message_id: String,
    #[serde(rename = "deliverydate", default)]
    pub delivery_date: String,
}

/// Delivery statuses for the requested message ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    #[serde(rename = "deliverystatuslist", default)]
    pub delivery_status_list: Vec<MessageStatus>,
}

/// Response to a delivery-receipt lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceiptResponse {
    #[serde(flatten)]
    pub result: RestStatus,
    #[serde(rename = "deliveryreceipt", default, skip_serializing_if = "Option::is_none")]
    pub delivery_receipt: Option<DeliveryReceipt>,
}

/// One inbound reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReply {
    #[serde(rename = "from", default)]
    pub min: String,
    #[serde(rename = "text", default)]
    pub text: String,
    #[serde(rename = "date", default)]
    pub date: String,
}

/// Reply count plus the replies themselves. `replies` stays empty when
/// `number_of_replies` is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReplies {
    #[serde(rename = "numberofreplies", default)]
    pub number_of_replies: u32,
    #[serde(rename = "replylist", default)]
    pub replies: Vec<MessageReply>,
}

/// Response to a reply or program-reply lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRepliesResponse {
    #[serde(flatten)]
    pub result: RestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<MessageReplies>,
}
