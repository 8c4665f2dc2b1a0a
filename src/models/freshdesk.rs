//! Freshdesk resource models.
//!
//! Read models use `#[serde(default)]` so a field the account does not send
//! never fails a decode. Create/update payloads skip unset fields, so a PUT
//! only touches what the caller filled in.

use serde::{Deserialize, Serialize};

use crate::body::{File, Files, Values, WithFiles};
use crate::datetime::Time;

use super::{Attachment, CustomFields};

fn is_false(b: &bool) -> bool {
    !*b
}

/// Renders custom fields as `custom_fields[name]` form values.
fn set_custom_fields(vs: &mut Values, fields: &CustomFields) {
    for (name, value) in fields {
        let key = format!("custom_fields[{}]", name);
        match value {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) => vs.set_string(&key, s),
            other => vs.set(key, other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Companies

/// A customer company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    /// Unique company ID.
    pub id: i64,
    /// Company name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Internal note.
    pub note: Option<String>,
    /// Email domains; contacts with these domains join the company.
    pub domains: Vec<String>,
    /// Health score, e.g. "Happy".
    pub health_score: Option<String>,
    /// Account tier, e.g. "Premium".
    pub account_tier: Option<String>,
    /// Contract renewal date.
    pub renewal_date: Option<Time>,
    /// Industry.
    pub industry: Option<String>,
    /// Custom field values.
    pub custom_fields: CustomFields,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// Payload for creating or updating a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyCreate {
    /// Company name (required on create).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Internal note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Email domains.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
    /// Health score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<String>,
    /// Account tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_tier: Option<String>,
    /// Contract renewal date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<Time>,
    /// Industry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Custom field values.
    #[serde(skip_serializing_if = "CustomFields::is_empty")]
    pub custom_fields: CustomFields,
}

/// Payload for updating a company.
pub type CompanyUpdate = CompanyCreate;

/// Envelope of the company autocomplete endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CompanySearchResult {
    pub companies: Vec<Company>,
}

// ---------------------------------------------------------------------------
// Contacts

/// Contact lifecycle state, used to filter contact lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactState {
    /// Blocked contacts.
    Blocked,
    /// Soft-deleted contacts.
    Deleted,
    /// Contacts that have not verified their email.
    Unverified,
    /// Verified contacts.
    Verified,
}

impl ContactState {
    /// The query-string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ContactState::Blocked => "blocked",
            ContactState::Deleted => "deleted",
            ContactState::Unverified => "unverified",
            ContactState::Verified => "verified",
        }
    }
}

/// A customer contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Unique contact ID.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Primary email.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Mobile number.
    pub mobile: Option<String>,
    /// Twitter handle.
    pub twitter_id: Option<String>,
    /// External identifier from another system.
    pub unique_external_id: Option<String>,
    /// Additional emails.
    pub other_emails: Vec<String>,
    /// Primary company.
    pub company_id: Option<i64>,
    /// Whether the contact can see all tickets of their company.
    pub view_all_tickets: bool,
    /// Postal address.
    pub address: Option<String>,
    /// Avatar image.
    pub avatar: Option<Attachment>,
    /// Free-text description.
    pub description: Option<String>,
    /// Job title.
    pub job_title: Option<String>,
    /// Language code, e.g. "en".
    pub language: Option<String>,
    /// Time zone name.
    pub time_zone: Option<String>,
    /// Tags.
    pub tags: Vec<String>,
    /// Whether the contact has verified their email.
    pub active: bool,
    /// Whether the contact is soft-deleted.
    pub deleted: bool,
    /// Custom field values.
    pub custom_fields: CustomFields,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// Payload for creating or updating a contact.
///
/// Setting `avatar` switches the request to multipart form data; the file
/// must use the field name `avatar`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactCreate {
    /// Full name (required on create).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Primary email.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    /// Phone number.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    /// Mobile number.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mobile: String,
    /// Twitter handle.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub twitter_id: String,
    /// External identifier.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_external_id: String,
    /// Additional emails.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other_emails: Vec<String>,
    /// Primary company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    /// Whether the contact can see all tickets of their company.
    #[serde(skip_serializing_if = "is_false")]
    pub view_all_tickets: bool,
    /// Postal address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Free-text description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Job title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub job_title: String,
    /// Language code.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,
    /// Time zone name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time_zone: String,
    /// Tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Custom field values.
    #[serde(skip_serializing_if = "CustomFields::is_empty")]
    pub custom_fields: CustomFields,
    /// Avatar image, sent as a multipart file.
    #[serde(skip)]
    pub avatar: Option<File>,
}

/// Payload for updating a contact.
pub type ContactUpdate = ContactCreate;

impl WithFiles for ContactCreate {
    fn files(&self) -> Files {
        self.avatar.iter().cloned().collect()
    }

    fn values(&self) -> Values {
        let mut vs = Values::new();
        vs.set_string("name", &self.name);
        vs.set_string("email", &self.email);
        vs.set_string("phone", &self.phone);
        vs.set_string("mobile", &self.mobile);
        vs.set_string("twitter_id", &self.twitter_id);
        vs.set_string("unique_external_id", &self.unique_external_id);
        vs.set_strings("other_emails[]", &self.other_emails);
        vs.set_int("company_id", self.company_id.unwrap_or(0));
        vs.set_bool("view_all_tickets", self.view_all_tickets);
        vs.set_string("address", &self.address);
        vs.set_string("description", &self.description);
        vs.set_string("job_title", &self.job_title);
        vs.set_string("language", &self.language);
        vs.set_string("time_zone", &self.time_zone);
        vs.set_strings("tags[]", &self.tags);
        set_custom_fields(&mut vs, &self.custom_fields);
        vs
    }
}

/// A contact as returned by the autocomplete endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Contact ID.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Result of a contact filter query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterContactsResult {
    /// Total matches across all pages.
    pub total: u32,
    /// Contacts on this page.
    pub results: Vec<Contact>,
}

/// Payload for merging secondary contacts into a primary one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactsMerge {
    /// The contact that survives the merge.
    pub primary_contact_id: i64,
    /// Contacts folded into the primary one.
    pub secondary_contact_ids: Vec<i64>,
    /// Field values to keep on the merged contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<serde_json::Value>,
}

/// Payload for converting a contact into an agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MakeAgent {
    /// Occasional (day pass) agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasional: Option<bool>,
    /// HTML signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// 1 global, 2 group, 3 restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_scope: Option<u8>,
    /// Group memberships.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<i64>,
    /// Role assignments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub role_ids: Vec<i64>,
    /// Skill assignments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skill_ids: Vec<i64>,
    /// Agent type, e.g. "support_agent".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Export jobs

/// A background job, such as a contact or company export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    /// Job ID.
    pub id: String,
    /// Job status, e.g. "in_progress" or "completed".
    pub status: String,
    /// Download URL of the result, once completed.
    pub download_url: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExportFields<'a> {
    pub default_fields: &'a [String],
    pub custom_fields: &'a [String],
}

#[derive(Debug, Serialize)]
pub(crate) struct ExportOption<'a> {
    pub fields: ExportFields<'a>,
}

// ---------------------------------------------------------------------------
// Groups, roles, products

/// An agent group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
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
    pub business_hour_id: Option<i64>,
    /// Group type, e.g. "support_agent_group".
    pub group_type: Option<String>,
    /// Member agents.
    pub agent_ids: Vec<i64>,
    /// Automatic assignment mode.
    pub auto_ticket_assign: Option<i64>,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// Payload for creating or updating a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupCreate {
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
    /// Member agents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub agent_ids: Vec<i64>,
    /// Automatic assignment mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_ticket_assign: Option<i64>,
}

/// Payload for updating a group.
pub type GroupUpdate = GroupCreate;

/// An agent role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    /// Unique role ID.
    pub id: i64,
    /// Role name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// True for built-in roles.
    pub default: bool,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// A product configured on the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Unique product ID.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Support email tied to the product.
    pub primary_email: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

// ---------------------------------------------------------------------------
// Admin fields

/// A ticket, contact or company form field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    /// Unique field ID.
    pub id: i64,
    /// API name, e.g. `cf_region`.
    pub name: String,
    /// Label shown to agents.
    pub label: String,
    /// Label shown in the customer portal.
    pub label_for_customers: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Field type, e.g. `default_status` or `custom_text`.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Position in the form.
    pub position: i32,
    /// True for built-in fields.
    pub default: bool,
    /// Mandatory for agents.
    pub required_for_agents: bool,
    /// Mandatory in the customer portal.
    pub required_for_customers: bool,
    /// Mandatory when closing a ticket.
    pub required_for_closure: bool,
    /// Editable by customers.
    pub customers_can_edit: bool,
    /// Visible in the customer portal.
    pub displayed_to_customers: bool,
    /// Editable by customers at signup.
    pub editable_in_signup: bool,
    /// Allowed values; the shape depends on the field type.
    pub choices: serde_json::Value,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// A ticket form field.
pub type TicketField = Field;
/// A contact form field.
pub type ContactField = Field;
/// A company form field.
pub type CompanyField = Field;

/// Payload for creating or updating an admin field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldCreate {
    /// Label shown to agents.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Label shown in the customer portal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_for_customers: Option<String>,
    /// Field type, e.g. `custom_dropdown`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub field_type: String,
    /// Position in the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Mandatory for agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_for_agents: Option<bool>,
    /// Mandatory in the customer portal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_for_customers: Option<bool>,
    /// Editable by customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customers_can_edit: Option<bool>,
    /// Visible in the customer portal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayed_to_customers: Option<bool>,
    /// Allowed values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<serde_json::Value>,
}

/// Payload for updating an admin field.
pub type FieldUpdate = FieldCreate;

// ---------------------------------------------------------------------------
// Automations

/// The automation rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutomationType {
    /// Rules run on ticket creation.
    TicketCreation,
    /// Time-triggered rules.
    TimeTriggers,
    /// Rules run on ticket updates.
    TicketUpdates,
}

impl AutomationType {
    /// The numeric ID used in automation URLs.
    pub fn id(self) -> u8 {
        match self {
            AutomationType::TicketCreation => 1,
            AutomationType::TimeTriggers => 3,
            AutomationType::TicketUpdates => 4,
        }
    }
}

/// An automation rule. Conditions and actions are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationRule {
    /// Unique rule ID.
    pub id: i64,
    /// Rule name.
    pub name: String,
    /// Execution order.
    pub position: i32,
    /// Whether the rule is enabled.
    pub active: bool,
    /// Who may trigger the rule.
    pub performer: serde_json::Value,
    /// Triggering events.
    pub events: serde_json::Value,
    /// Matching conditions.
    pub conditions: serde_json::Value,
    /// Actions performed on match.
    pub actions: serde_json::Value,
    /// Human-readable summary.
    pub summary: serde_json::Value,
    /// Creation timestamp.
    pub created_at: Option<Time>,
    /// Last update timestamp.
    pub updated_at: Option<Time>,
}

/// Payload for creating or updating an automation rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AutomationRuleCreate {
    /// Rule name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Execution order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Whether the rule is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Who may trigger the rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<serde_json::Value>,
    /// Triggering events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<serde_json::Value>,
    /// Matching conditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<serde_json::Value>,
    /// Actions performed on match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<serde_json::Value>,
}

/// Payload for updating an automation rule.
pub type AutomationRuleUpdate = AutomationRuleCreate;

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
    /// Portals the category is shown in.
    pub visible_in_portals: Vec<i64>,
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
    /// Portals the category is shown in.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub visible_in_portals: Vec<i64>,
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
    /// 1 all users, 2 logged-in users, 3 agents, 4 selected companies.
    pub visibility: i32,
    /// Owning category.
    pub category_id: Option<i64>,
    /// Parent folder, for subfolders.
    pub parent_folder_id: Option<i64>,
    /// Companies that can see the folder when visibility is 4.
    pub company_ids: Vec<i64>,
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
    /// Visibility, see [`Folder::visibility`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<i32>,
    /// Parent folder, for subfolders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<i64>,
    /// Companies that can see the folder.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub company_ids: Vec<i64>,
}

/// Payload for updating a folder.
pub type FolderUpdate = FolderCreate;

/// A solution article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    /// Unique article ID.
    pub id: i64,
    /// 1 permanent, 2 workaround.
    #[serde(rename = "type")]
    pub article_type: i32,
    /// Owning category.
    pub category_id: Option<i64>,
    /// Owning folder.
    pub folder_id: Option<i64>,
    /// Category name, filled by the search endpoint.
    pub category_name: Option<String>,
    /// Folder name, filled by the search endpoint.
    pub folder_name: Option<String>,
    /// Title.
    pub title: String,
    /// HTML body.
    pub description: String,
    /// Plain-text body.
    pub description_text: Option<String>,
    /// 1 draft, 2 published.
    pub status: i32,
    /// Author.
    pub agent_id: Option<i64>,
    /// Tags.
    pub tags: Vec<String>,
    /// SEO metadata.
    pub seo_data: serde_json::Value,
    /// Attached files.
    pub attachments: Vec<Attachment>,
    /// View count.
    pub hits: i64,
    /// Positive votes.
    pub thumbs_up: i64,
    /// Negative votes.
    pub thumbs_down: i64,
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
    /// 1 draft, 2 published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// 1 permanent, 2 workaround.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub article_type: Option<i32>,
    /// Tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
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
        vs.set_int("status", self.status.unwrap_or(0).into());
        vs.set_int("type", self.article_type.unwrap_or(0).into());
        vs.set_strings("tags[]", &self.tags);
        vs
    }
}
