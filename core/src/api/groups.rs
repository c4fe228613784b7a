//! Facade for managing distribution groups and their membership.

use crate::api::to_json;
use crate::error::Error;
use crate::request::{ids_path, RestRequest};
use crate::response::ApiResponse;
use crate::responses::{GroupResponse, RestStatus};
use crate::transport::Transport;
use crate::types::{Group, GroupMember};

/// Groups endpoint root.
pub const GROUPS_PATH: &str = "/groups";

/// Group management operations. Groups are addressed by name; membership
/// lives under `/groups/<name>/members`.
#[derive(Debug, Clone, Copy)]
pub struct GroupsApi<'a> {
    transport: &'a Transport,
}

impl<'a> GroupsApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        GroupsApi { transport }
    }

    /// Create a group.
    pub fn add_group(&self, group: &Group) -> Result<ApiResponse<RestStatus>, Error> {
        let request = RestRequest::new(GROUPS_PATH).body_param("groups", to_json(group)?);
        self.transport.post(&request)
    }

    /// Delete the groups with the given names.
    pub fn delete_groups<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<ApiResponse<RestStatus>, Error> {
        let request = RestRequest::new(ids_path(GROUPS_PATH, names));
        self.transport.delete(&request)
    }

    /// Delete every group on the account.
    pub fn delete_all_groups(&self) -> Result<ApiResponse<RestStatus>, Error> {
        let request = RestRequest::new(GROUPS_PATH).query_param("all", "true");
        self.transport.delete(&request)
    }

    /// Retrieve a group by name. An unknown name comes back as a typed
    /// 404 response, not an error.
    pub fn retrieve_group(&self, name: &str) -> Result<ApiResponse<GroupResponse>, Error> {
        let request = RestRequest::new(format!("{GROUPS_PATH}/{name}")).allow_not_found();
        self.transport.get(&request)
    }

    /// Add members to an existing group.
    pub fn add_members(
        &self,
        group_name: &str,
        members: &[GroupMember],
    ) -> Result<ApiResponse<RestStatus>, Error> {
        let request = RestRequest::new(members_path(group_name))
            .wrap("groupmembers")
            .body_param("members", to_json(&members)?);
        self.transport.post(&request)
    }

    /// Remove the members with the given MDNs from a group.
    pub fn remove_members<S: AsRef<str>>(
        &self,
        group_name: &str,
        mdns: &[S],
    ) -> Result<ApiResponse<RestStatus>, Error> {
        let request = RestRequest::new(ids_path(&members_path(group_name), mdns));
        self.transport.delete(&request)
    }
}

fn members_path(group_name: &str) -> String {
    format!("{GROUPS_PATH}/{group_name}/members")
}
