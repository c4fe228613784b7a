//! Request-side domain models.
//!
//! # Design
//! Flat data records, no behavior. In-memory field names are spelled out;
//! the vendor's terser wire names (`mdn`, `first`, `to`, `from`, ...) are
//! declared per field with `#[serde(rename)]`. Unset optional fields are
//! omitted from the emitted JSON — never serialized as `null` — and every
//! type tolerates unknown incoming fields, since these models also appear
//! inside response payloads. Field declaration order is the wire order the
//! vendor service expects.

use serde::{Deserialize, Serialize};

/// An address-book contact, identified by its cell number (MDN).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "mdn")]
    pub cell_number: String,
    #[serde(rename = "first")]
    pub first_name: String,
    #[serde(rename = "last")]
    pub last_name: String,
    #[serde(rename = "email", skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(rename = "org", skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "postalcode", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "country", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

impl Contact {
    pub fn new(
        cell_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Contact {
            cell_number: cell_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address: None,
            organization: None,
            title: None,
            city: None,
            state: None,
            postal_code: None,
            country_code: None,
        }
    }
}

/// A named distribution group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "groupname")]
    pub name: String,
    #[serde(rename = "groupdesc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group {
            name: name.into(),
            description: None,
        }
    }
}

/// A member of a group. `contact_name` uses the vendor's
/// `lastname-firstname` convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub mdn: String,
    #[serde(rename = "contact", skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
}

impl GroupMember {
    pub fn new(mdn: impl Into<String>) -> Self {
        GroupMember {
            mdn: mdn.into(),
            contact_name: None,
        }
    }
}

/// A message to one or more destinations (MDNs or group names), sent from
/// the keyword that identifies the REST connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "notifyURL", default, skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
    #[serde(rename = "to", default)]
    pub destinations: Vec<String>,
    #[serde(rename = "from", default)]
    pub keyword: String,
    /// Minutes the service keeps collecting replies for this message.
    #[serde(rename = "replyexpiry", default, skip_serializing_if = "Option::is_none")]
    pub reply_expiry: Option<u32>,
}

impl Message {
    pub fn new(
        destinations: Vec<String>,
        keyword: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Message {
            message: message.into(),
            subject: None,
            notify_url: None,
            destinations,
            keyword: keyword.into(),
            reply_expiry: None,
        }
    }
}

/// When and how often a scheduled message fires. Dates use the vendor's
/// `YYYY-MM-DDThh:mm±zz` format and travel as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(rename = "startdate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "enddate", skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<String>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
}

/// A message paired with its schedule. `message_id` is assigned by the
/// service on creation and only appears in responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMessage {
    #[serde(rename = "messageID", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}

impl ScheduleMessage {
    pub fn new(message: Message, schedule: Schedule) -> Self {
        ScheduleMessage {
            message_id: None,
            message: Some(message),
            schedule: Some(schedule),
        }
    }
}

/// Lookup filter for replies to a program keyword. Never serialized — the
/// keyword and destinations become path segments and `minutes` a query
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramReply {
    pub keyword: String,
    pub destinations: Vec<String>,
    pub minutes: Option<String>,
}

impl ProgramReply {
    pub fn new(keyword: impl Into<String>) -> Self {
        ProgramReply {
            keyword: keyword.into(),
            destinations: Vec::new(),
            minutes: None,
        }
    }
}
