//! Freshservice resource models.
//!
//! Freshservice wraps every payload in a named envelope, e.g.
//! `{"role": {...}}` or `{"roles": [...]}`. The envelopes are crate-private;
//! the wrappers unwrap them before returning.

use serde::{Deserialize, Serialize};

use crate::body::{Files, Values, WithFiles};
use crate::datetime::{Date, Time};

use super::Attachment;

/// Declares a single-field response envelope.
macro_rules! envelope {
    ($name:ident, $field:ident: $ty:ty) => {
        #[derive(Debug, Default, Deserialize)]
        #[serde(default)]
        pub(crate) struct $name {
            pub $field: $ty,
        }
    };
}

envelope!(AgentRoleResult, role: AgentRole);
envelope!(AgentRolesResult, roles: Vec<AgentRole>);
envelope!(AgentGroupResult, group: AgentGroup);
envelope!(AgentGroupsResult, groups: Vec<AgentGroup>);
envelope!(WorkspaceResult, workspace: Workspace);
envelope!(WorkspacesResult, workspaces: Vec<Workspace>);
envelope!(CategoryResult, category: Category);
envelope!(CategoriesResult, categories: Vec<Category>);
envelope!(FolderResult, folder: Folder);
envelope!(FoldersResult, folders: Vec<Folder>);
envelope!(ArticleResult, article: Article);
envelope!(ArticlesResult, articles: Vec<Article>);

// ---------------------------------------------------------------------------
// Agents

/// An agent role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentRole {
    /// Unique role ID.
    pub id: i64,
    /// Role name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// True for built-in roles.
    pub default: bool,
    /// 1 for account admin roles, 2 for custom roles.
    pub role_type: i32,
    /// Permission scopes, kept as raw JSON.
    pub scopes: serde_json::Value,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// An agent group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentGroup {
    /// Unique group ID.
    pub id: i64,
    /// Group name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Agent notified when a ticket stays unassigned.
    pub escalate_to: Option<i64>,
    /// Unassigned time before escalation, e.g. "30m".
    pub unassigned_for: Option<String>,
    /// Business hours applied to the group.
    pub business_hours_id: Option<i64>,
    /// Member agents.
    pub members: Vec<i64>,
    /// Observer agents.
    pub observers: Vec<i64>,
    /// Group leaders.
    pub leaders: Vec<i64>,
    /// Restricted groups need approval to join.
    pub restricted: bool,
    /// Whether joining needs leader approval.
    pub approval_required: bool,
    /// Whether tickets are assigned automatically.
    pub auto_ticket_assign: bool,
    /// Owning workspace.
    pub workspace_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// Payload for creating or updating an agent group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentGroupCreate {
    /// Group name (required on create).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Agent notified when a ticket stays unassigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalate_to: Option<i64>,
    /// Unassigned time before escalation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unassigned_for: Option<String>,
    /// Business hours applied to the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_hours_id: Option<i64>,
    /// Member agents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<i64>,
    /// Observer agents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub observers: Vec<i64>,
    /// Group leaders.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leaders: Vec<i64>,
    /// Whether tickets are assigned automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_ticket_assign: Option<bool>,
    /// Owning workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
}

/// Payload for updating an agent group.
pub type AgentGroupUpdate = AgentGroupCreate;

// ---------------------------------------------------------------------------
// Workspaces

/// A workspace (an isolated service desk within the account).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workspace {
    /// Unique workspace ID.
    pub id: i64,
    /// Workspace name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// "active" or "inactive".
    pub state: String,
    /// Whether access is limited to members.
    pub restricted: bool,
    /// True for the primary (global) workspace.
    pub primary: bool,
    /// Template the workspace was created from.
    pub template_name: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

// ---------------------------------------------------------------------------
// Solutions

/// A solution category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Unique category ID.
    pub id: i64,
    /// Category name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Display order.
    pub position: i32,
    /// True for the built-in category.
    pub default_category: bool,
    /// Portals the category is shown in.
    pub visible_in_portals: Vec<i64>,
    /// Owning workspace.
    pub workspace_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// Payload for creating or updating a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryCreate {
    /// Category name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Portals the category is shown in.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub visible_in_portals: Vec<i64>,
    /// Owning workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
}

/// Payload for updating a category.
pub type CategoryUpdate = CategoryCreate;

/// A solution folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Folder {
    /// Unique folder ID.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Display order.
    pub position: i32,
    /// True for the built-in folder.
    pub default_folder: bool,
    /// Owning category.
    pub category_id: i64,
    /// 1 all users, 2 logged-in users, 3 agents, 4 departments, 5 groups.
    pub visibility: i32,
    /// Owning workspace.
    pub workspace_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// Payload for creating or updating a folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FolderCreate {
    /// Folder name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning category (required on create).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Visibility, see [`Folder::visibility`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<i32>,
    /// Display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Departments that can see the folder.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub department_ids: Vec<i64>,
    /// Groups that can see the folder.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<i64>,
}

/// Payload for updating a folder.
pub type FolderUpdate = FolderCreate;

/// A solution article. List and search endpoints return a subset of the
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    /// Unique article ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// HTML body.
    pub description: String,
    /// Plain-text body.
    pub description_text: Option<String>,
    /// Display order.
    pub position: i32,
    /// 1 permanent, 2 workaround.
    pub article_type: i32,
    /// Owning folder.
    pub folder_id: i64,
    /// Owning category.
    pub category_id: i64,
    /// 1 draft, 2 published.
    pub status: i32,
    /// Approval workflow state.
    pub approval_status: Option<i32>,
    /// Positive votes.
    pub thumbs_up: i64,
    /// Negative votes.
    pub thumbs_down: i64,
    /// Author.
    pub agent_id: Option<i64>,
    /// View count.
    pub views: i64,
    /// Tags.
    pub tags: Vec<String>,
    /// Search keywords.
    pub keywords: Vec<String>,
    /// Article URL for external articles.
    pub url: Option<String>,
    /// Next review date.
    pub review_date: Option<Date>,
    /// Attached files.
    pub attachments: Vec<Attachment>,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// Payload for creating or updating an article.
///
/// Files in `attachments` switch the request to multipart form data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleCreate {
    /// Title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// HTML body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// 1 permanent, 2 workaround.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_type: Option<i32>,
    /// Owning folder (required on create).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    /// 1 draft, 2 published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Search keywords.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Next review date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_date: Option<Date>,
    /// Files to attach, under the field `attachments[]`.
    #[serde(skip)]
    pub attachments: Files,
}

/// Payload for updating an article.
pub type ArticleUpdate = ArticleCreate;

impl WithFiles for ArticleCreate {
    fn files(&self) -> Files {
        self.attachments.clone()
    }

    fn values(&self) -> Values {
        let mut vs = Values::new();
        vs.set_string("title", &self.title);
        vs.set_string("description", &self.description);
        vs.set_int("article_type", self.article_type.unwrap_or(0).into());
        vs.set_int("folder_id", self.folder_id.unwrap_or(0));
        vs.set_int("status", self.status.unwrap_or(0).into());
        vs.set_strings("tags[]", &self.tags);
        vs.set_strings("keywords[]", &self.keywords);
        if let Some(date) = &self.review_date {
            vs.set("review_date", date.to_string());
        }
        vs
    }
}
