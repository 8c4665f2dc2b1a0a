use crate::error::FreshError;
use crate::models::freshservice::{Workspace, WorkspaceResult, WorkspacesResult};
use crate::pagination::{Page, PageOption};

use super::Freshservice;

impl Freshservice {
    /// Gets a workspace.
    pub async fn get_workspace(&self, workspace_id: i64) -> Result<Workspace, FreshError> {
        let url = self.endpoint(&format!("/workspaces/{}", workspace_id));
        let result: WorkspaceResult = self.client.get(&url).await?;
        Ok(result.workspace)
    }

    /// Lists one page of workspaces.
    pub async fn list_workspaces(
        &self,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Workspace>>, FreshError> {
        let url = self.endpoint("/workspaces");
        let page: Page<WorkspacesResult> = self.client.list(&url, opts).await?;
        Ok(page.map(|r| r.workspaces))
    }

    /// Calls `each` for every workspace.
    pub async fn iter_workspaces<E, F>(&self, opts: Option<PageOption>, each: F) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Workspace) -> Result<(), E>,
    {
        let url = self.endpoint("/workspaces");
        self.client
            .iterate_with(&url, opts, |r: WorkspacesResult| r.workspaces, each)
            .await
    }
}
