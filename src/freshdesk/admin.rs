//! Admin form fields and automation rules.

use crate::body::Payload;
use crate::error::FreshError;
use crate::models::freshdesk::{
    AutomationRule, AutomationRuleCreate, AutomationRuleUpdate, AutomationType, CompanyField,
    ContactField, FieldCreate, FieldUpdate, TicketField,
};
use crate::pagination::{Page, PageOption};

use super::Freshdesk;

/// Value for the `include` parameter of [`Freshdesk::get_ticket_field`]
/// that adds dependent sections.
pub const TICKET_FIELD_INCLUDE_SECTION: &str = "section";

/// Appends `?{key}=a,b` when `items` is non-empty.
fn with_csv_param(mut url: String, key: &str, items: &[&str]) -> String {
    if !items.is_empty() {
        url.push('?');
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(&items.join(",")));
    }
    url
}

impl Freshdesk {
    /// Lists ticket fields, optionally restricted to the given field types.
    pub async fn list_ticket_fields(&self, types: &[&str]) -> Result<Vec<TicketField>, FreshError> {
        let url = with_csv_param(self.endpoint("/admin/ticket_fields"), "type", types);
        self.client.get(&url).await
    }

    /// Creates a ticket field.
    pub async fn create_ticket_field(&self, field: &FieldCreate) -> Result<TicketField, FreshError> {
        let url = self.endpoint("/admin/ticket_fields");
        self.client.post(&url, &Payload::json(field)).await
    }

    /// Gets a ticket field; `include` may name [`TICKET_FIELD_INCLUDE_SECTION`].
    pub async fn get_ticket_field(
        &self,
        field_id: i64,
        include: &[&str],
    ) -> Result<TicketField, FreshError> {
        let url = with_csv_param(
            self.endpoint(&format!("/admin/ticket_fields/{}", field_id)),
            "include",
            include,
        );
        self.client.get(&url).await
    }

    /// Updates a ticket field.
    pub async fn update_ticket_field(
        &self,
        field_id: i64,
        field: &FieldUpdate,
    ) -> Result<TicketField, FreshError> {
        let url = self.endpoint(&format!("/admin/ticket_fields/{}", field_id));
        self.client.put(&url, &Payload::json(field)).await
    }

    /// Deletes a ticket field.
    pub async fn delete_ticket_field(&self, field_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/admin/ticket_fields/{}", field_id));
        self.client.delete(&url).await
    }

    /// Lists contact fields.
    pub async fn list_contact_fields(&self) -> Result<Vec<ContactField>, FreshError> {
        let url = self.endpoint("/admin/contact_fields");
        self.client.get(&url).await
    }

    /// Creates a contact field.
    pub async fn create_contact_field(
        &self,
        field: &FieldCreate,
    ) -> Result<ContactField, FreshError> {
        let url = self.endpoint("/admin/contact_fields");
        self.client.post(&url, &Payload::json(field)).await
    }

    /// Gets a contact field.
    pub async fn get_contact_field(&self, field_id: i64) -> Result<ContactField, FreshError> {
        let url = self.endpoint(&format!("/admin/contact_fields/{}", field_id));
        self.client.get(&url).await
    }

    /// Updates a contact field.
    pub async fn update_contact_field(
        &self,
        field_id: i64,
        field: &FieldUpdate,
    ) -> Result<ContactField, FreshError> {
        let url = self.endpoint(&format!("/admin/contact_fields/{}", field_id));
        self.client.put(&url, &Payload::json(field)).await
    }

    /// Deletes a contact field.
    pub async fn delete_contact_field(&self, field_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/admin/contact_fields/{}", field_id));
        self.client.delete(&url).await
    }

    /// Lists company fields.
    pub async fn list_company_fields(&self) -> Result<Vec<CompanyField>, FreshError> {
        let url = self.endpoint("/admin/company_fields");
        self.client.get(&url).await
    }

    /// Creates a company field.
    pub async fn create_company_field(
        &self,
        field: &FieldCreate,
    ) -> Result<CompanyField, FreshError> {
        let url = self.endpoint("/admin/company_fields");
        self.client.post(&url, &Payload::json(field)).await
    }

    /// Gets a company field.
    pub async fn get_company_field(&self, field_id: i64) -> Result<CompanyField, FreshError> {
        let url = self.endpoint(&format!("/admin/company_fields/{}", field_id));
        self.client.get(&url).await
    }

    /// Updates a company field.
    pub async fn update_company_field(
        &self,
        field_id: i64,
        field: &FieldUpdate,
    ) -> Result<CompanyField, FreshError> {
        let url = self.endpoint(&format!("/admin/company_fields/{}", field_id));
        self.client.put(&url, &Payload::json(field)).await
    }

    /// Deletes a company field.
    pub async fn delete_company_field(&self, field_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/admin/company_fields/{}", field_id));
        self.client.delete(&url).await
    }

    fn automation_url(&self, kind: AutomationType, rule_id: Option<i64>) -> String {
        match rule_id {
            Some(id) => self.endpoint(&format!("/automations/{}/rules/{}", kind.id(), id)),
            None => self.endpoint(&format!("/automations/{}/rules", kind.id())),
        }
    }

    /// Lists one page of automation rules of one type.
    pub async fn list_automation_rules(
        &self,
        kind: AutomationType,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<AutomationRule>>, FreshError> {
        let url = self.automation_url(kind, None);
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every automation rule of one type.
    pub async fn iter_automation_rules<E, F>(
        &self,
        kind: AutomationType,
        opts: Option<PageOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(AutomationRule) -> Result<(), E>,
    {
        let url = self.automation_url(kind, None);
        self.client.iterate(&url, opts, each).await
    }

    /// Gets an automation rule.
    pub async fn get_automation_rule(
        &self,
        kind: AutomationType,
        rule_id: i64,
    ) -> Result<AutomationRule, FreshError> {
        let url = self.automation_url(kind, Some(rule_id));
        self.client.get(&url).await
    }

    /// Creates an automation rule.
    pub async fn create_automation_rule(
        &self,
        kind: AutomationType,
        rule: &AutomationRuleCreate,
    ) -> Result<AutomationRule, FreshError> {
        let url = self.automation_url(kind, None);
        self.client.post(&url, &Payload::json(rule)).await
    }

    /// Updates an automation rule.
    pub async fn update_automation_rule(
        &self,
        kind: AutomationType,
        rule_id: i64,
        rule: &AutomationRuleUpdate,
    ) -> Result<AutomationRule, FreshError> {
        let url = self.automation_url(kind, Some(rule_id));
        self.client.put(&url, &Payload::json(rule)).await
    }

    /// Deletes an automation rule.
    pub async fn delete_automation_rule(
        &self,
        kind: AutomationType,
        rule_id: i64,
    ) -> Result<(), FreshError> {
        let url = self.automation_url(kind, Some(rule_id));
        self.client.delete(&url).await
    }
}
