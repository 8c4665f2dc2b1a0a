use crate::body::Payload;
use crate::error::FreshError;
use crate::models::freshservice::{
    AgentGroup, AgentGroupCreate, AgentGroupResult, AgentGroupUpdate, AgentGroupsResult,
    AgentRole, AgentRoleResult, AgentRolesResult,
};
use crate::pagination::{Page, PageOption};

use super::Freshservice;

impl Freshservice {
    /// Gets an agent role.
    pub async fn get_agent_role(&self, role_id: i64) -> Result<AgentRole, FreshError> {
        let url = self.endpoint(&format!("/roles/{}", role_id));
        let result: AgentRoleResult = self.client.get(&url).await?;
        Ok(result.role)
    }

    /// Lists one page of agent roles.
    pub async fn list_agent_roles(
        &self,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<AgentRole>>, FreshError> {
        let url = self.endpoint("/roles");
        let page: Page<AgentRolesResult> = self.client.list(&url, opts).await?;
        Ok(page.map(|r| r.roles))
    }

    /// Calls `each` for every agent role.
    pub async fn iter_agent_roles<E, F>(&self, opts: Option<PageOption>, each: F) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(AgentRole) -> Result<(), E>,
    {
        let url = self.endpoint("/roles");
        self.client
            .iterate_with(&url, opts, |r: AgentRolesResult| r.roles, each)
            .await
    }

    /// Creates an agent group.
    pub async fn create_agent_group(
        &self,
        group: &AgentGroupCreate,
    ) -> Result<AgentGroup, FreshError> {
        let url = self.endpoint("/groups");
        let result: AgentGroupResult = self.client.post(&url, &Payload::json(group)).await?;
        Ok(result.group)
    }

    /// Gets an agent group.
    pub async fn get_agent_group(&self, group_id: i64) -> Result<AgentGroup, FreshError> {
        let url = self.endpoint(&format!("/groups/{}", group_id));
        let result: AgentGroupResult = self.client.get(&url).await?;
        Ok(result.group)
    }

    /// Lists one page of agent groups.
    pub async fn list_agent_groups(
        &self,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<AgentGroup>>, FreshError> {
        let url = self.endpoint("/groups");
        let page: Page<AgentGroupsResult> = self.client.list(&url, opts).await?;
        Ok(page.map(|r| r.groups))
    }

    /// Calls `each` for every agent group.
    pub async fn iter_agent_groups<E, F>(&self, opts: Option<PageOption>, each: F) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(AgentGroup) -> Result<(), E>,
    {
        let url = self.endpoint("/groups");
        self.client
            .iterate_with(&url, opts, |r: AgentGroupsResult| r.groups, each)
            .await
    }

    /// Updates an agent group.
    pub async fn update_agent_group(
        &self,
        group_id: i64,
        group: &AgentGroupUpdate,
    ) -> Result<AgentGroup, FreshError> {
        let url = self.endpoint(&format!("/groups/{}", group_id));
        let result: AgentGroupResult = self.client.put(&url, &Payload::json(group)).await?;
        Ok(result.group)
    }

    /// Deletes an agent group.
    pub async fn delete_agent_group(&self, group_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/groups/{}", group_id));
        self.client.delete(&url).await
    }
}
