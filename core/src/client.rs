//! Entry point tying credentials, environment, and facades together.

use std::time::Duration;

use crate::api::{ContactsApi, GroupsApi, MessagingApi, SchedulingApi};
use crate::transport::Transport;

/// Base URL of the production environment.
pub const PRODUCTION_BASE_URL: &str = "https://www.cloudmessagingcenter.com/v1/rest/";
/// Base URL of the trial environment.
pub const TRIAL_BASE_URL: &str = "https://www.cloudmessagingtrial.com/v1/rest/";

/// A messaging service client bound to one account. Cheap to clone; the
/// underlying agent pools connections and is shared across clones.
///
/// ```no_run
/// use messaging_core::{Client, Message};
///
/// let client = Client::production("9876", "1234");
/// let message = Message::new(vec!["4102804827".into()], "scsrest", "hello");
/// let response = client.messaging().send_message(&message)?;
/// println!("accepted with status {}", response.status);
/// # Ok::<(), messaging_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Connect to an arbitrary base URL. Intended for test servers and
    /// staging deployments; use [`Client::production`] or [`Client::trial`]
    /// for the vendor-hosted environments.
    pub fn new(base_url: &str, account_id: &str, auth_token: &str) -> Self {
        Client {
            transport: Transport::new(base_url, account_id, auth_token),
        }
    }

    /// Connect to the production environment.
    pub fn production(account_id: &str, auth_token: &str) -> Self {
        Client::new(PRODUCTION_BASE_URL, account_id, auth_token)
    }

    /// Connect to the trial environment.
    pub fn trial(account_id: &str, auth_token: &str) -> Self {
        Client::new(TRIAL_BASE_URL, account_id, auth_token)
    }

    /// Apply a timeout to every call that does not set its own.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.transport.set_default_timeout(timeout);
        self
    }

    pub fn contacts(&self) -> ContactsApi<'_> {
        ContactsApi::new(&self.transport)
    }

    pub fn groups(&self) -> GroupsApi<'_> {
        GroupsApi::new(&self.transport)
    }

    pub fn messaging(&self) -> MessagingApi<'_> {
        MessagingApi::new(&self.transport)
    }

    pub fn scheduling(&self) -> SchedulingApi<'_> {
        SchedulingApi::new(&self.transport)
    }

    /// The underlying transport, for callers composing their own
    /// [`RestRequest`](crate::RestRequest) values.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}
