//! Facade for scheduling messages for later delivery.

use crate::api::to_json;
use crate::error::Error;
use crate::request::{ids_path, RestRequest};
use crate::response::ApiResponse;
use crate::responses::RestStatus;
use crate::transport::Transport;
use crate::types::ScheduleMessage;

/// Scheduled-messages endpoint root.
pub const SCHEDULES_PATH: &str = "/schedules";

/// Scheduling operations. Creation is the one endpoint whose response
/// arrives under a `"schedulemessage"` root instead of `"response"`.
#[derive(Debug, Clone, Copy)]
pub struct SchedulingApi<'a> {
    transport: &'a Transport,
}

impl<'a> SchedulingApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        SchedulingApi { transport }
    }

    /// Schedule a message. The service answers 201 with the stored
    /// schedule, now carrying its assigned message id.
    pub fn schedule_message(
        &self,
        schedule: &ScheduleMessage,
    ) -> Result<ApiResponse<ScheduleMessage>, Error> {
        let mut request = RestRequest::new(SCHEDULES_PATH)
            .wrap("schedulemessage")
            .expect_root("schedulemessage");
        if let Some(message) = &schedule.message {
            request = request.body_param("message", to_json(message)?);
        }
        if let Some(plan) = &schedule.schedule {
            request = request.body_param("schedule", to_json(plan)?);
        }
        self.transport.post(&request)
    }

    /// Cancel the scheduled messages with the given ids. Unknown ids come
    /// back as a typed 404 response, not an error.
    pub fn delete_scheduled_messages<S: AsRef<str>>(
        &self,
        message_ids: &[S],
    ) -> Result<ApiResponse<RestStatus>, Error> {
        let request = RestRequest::new(ids_path(SCHEDULES_PATH, message_ids)).allow_not_found();
        self.transport.delete(&request)
    }

    /// Cancel every scheduled message on the account.
    pub fn delete_all_scheduled_messages(&self) -> Result<ApiResponse<RestStatus>, Error> {
        let request = RestRequest::new(SCHEDULES_PATH).query_param("all", "true");
        self.transport.delete(&request)
    }
}
