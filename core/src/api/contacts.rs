//! Facade for managing contacts.

use crate::api::to_json;
use crate::error::Error;
use crate::request::{ids_path, RestRequest};
use crate::response::ApiResponse;
use crate::responses::{ContactsResponse, RestStatus, StatusListResponse};
use crate::transport::Transport;
use crate::types::Contact;

/// Contacts endpoint root.
pub const CONTACTS_PATH: &str = "/contacts";

/// Contact management operations. Batch writes go to the collection root;
/// deletes and retrievals address contacts by their MDNs in a
/// comma-separated path segment.
#[derive(Debug, Clone, Copy)]
pub struct ContactsApi<'a> {
    transport: &'a Transport,
}

impl<'a> ContactsApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        ContactsApi { transport }
    }

    /// Add contacts. The response carries one status per submitted contact.
    pub fn add_contacts(
        &self,
        contacts: &[Contact],
    ) -> Result<ApiResponse<StatusListResponse>, Error> {
        self.transport.post(&contact_list_request(contacts)?)
    }

    /// Update existing contacts, matched by MDN.
    pub fn update_contacts(
        &self,
        contacts: &[Contact],
    ) -> Result<ApiResponse<StatusListResponse>, Error> {
        self.transport.put(&contact_list_request(contacts)?)
    }

    /// Delete the contacts with the given MDNs.
    pub fn delete_contacts<S: AsRef<str>>(
        &self,
        mdns: &[S],
    ) -> Result<ApiResponse<RestStatus>, Error> {
        let request = RestRequest::new(ids_path(CONTACTS_PATH, mdns));
        self.transport.delete(&request)
    }

    /// Delete every contact on the account.
    pub fn delete_all_contacts(&self) -> Result<ApiResponse<RestStatus>, Error> {
        let request = RestRequest::new(CONTACTS_PATH).query_param("all", "true");
        self.transport.delete(&request)
    }

    /// Retrieve the contacts with the given MDNs. "Not found" comes back
    /// as a typed 404 response, not an error.
    pub fn retrieve_contacts<S: AsRef<str>>(
        &self,
        mdns: &[S],
    ) -> Result<ApiResponse<ContactsResponse>, Error> {
        let request = RestRequest::new(ids_path(CONTACTS_PATH, mdns)).allow_not_found();
        self.transport.get(&request)
    }
}

/// Batch writes wrap the contact array under `contactList`.
fn contact_list_request(contacts: &[Contact]) -> Result<RestRequest, Error> {
    Ok(RestRequest::new(CONTACTS_PATH)
        .wrap("contactList")
        .body_param("contacts", to_json(&contacts)?))
}
