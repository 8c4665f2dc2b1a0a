use serde::de::IgnoredAny;

use crate::body::{Payload, Values};
use crate::datetime::Time;
use crate::error::FreshError;
use crate::models::freshdesk::{
    Contact, ContactCreate, ContactState, ContactUpdate, ContactsMerge, ExportFields,
    ExportOption, FilterContactsResult, Job, MakeAgent, User,
};
use crate::pagination::{FilterOption, ListOption, Page, Pageable};

use super::Freshdesk;

/// Filters and pagination for listing contacts.
///
/// Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListContactsOption {
    /// Exact email match.
    pub email: String,
    /// Exact mobile number match.
    pub mobile: String,
    /// Exact phone number match.
    pub phone: String,
    /// Exact external ID match.
    pub unique_external_id: String,
    /// Contacts of one company.
    pub company_id: i64,
    /// Lifecycle state.
    pub state: Option<ContactState>,
    /// Only contacts updated at or after this time.
    pub updated_since: Option<Time>,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
}

impl ListOption for ListContactsOption {
    fn values(&self) -> Values {
        let mut q = Values::new();
        q.set_string("email", &self.email);
        q.set_string("mobile", &self.mobile);
        q.set_string("phone", &self.phone);
        q.set_string("unique_external_id", &self.unique_external_id);
        q.set_int("company_id", self.company_id);
        if let Some(state) = self.state {
            q.set("state", state.as_str());
        }
        q.set_time("updated_since", self.updated_since.as_ref());
        q.set_int("page", self.page.into());
        q.set_int("per_page", self.per_page.into());
        q
    }
}

impl Pageable for ListContactsOption {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn per_page(&self) -> Option<u32> {
        Some(self.per_page)
    }

    fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page;
    }
}

impl Freshdesk {
    /// Creates a contact. An avatar file makes this a multipart upload.
    pub async fn create_contact(&self, contact: &ContactCreate) -> Result<Contact, FreshError> {
        let url = self.endpoint("/contacts");
        self.client.post(&url, &Payload::from_form(contact)).await
    }

    /// Updates a contact. An avatar file makes this a multipart upload.
    pub async fn update_contact(
        &self,
        contact_id: i64,
        contact: &ContactUpdate,
    ) -> Result<Contact, FreshError> {
        let url = self.endpoint(&format!("/contacts/{}", contact_id));
        self.client.put(&url, &Payload::from_form(contact)).await
    }

    /// Gets a contact by ID.
    pub async fn get_contact(&self, contact_id: i64) -> Result<Contact, FreshError> {
        let url = self.endpoint(&format!("/contacts/{}", contact_id));
        self.client.get(&url).await
    }

    /// Soft-deletes a contact.
    pub async fn delete_contact(&self, contact_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/contacts/{}", contact_id));
        self.client.delete(&url).await
    }

    /// Permanently deletes a contact.
    ///
    /// Without `force` only soft-deleted contacts can be removed.
    pub async fn hard_delete_contact(&self, contact_id: i64, force: bool) -> Result<(), FreshError> {
        let mut url = self.endpoint(&format!("/contacts/{}/hard_delete", contact_id));
        if force {
            url.push_str("?force=true");
        }
        self.client.delete(&url).await
    }

    /// Lists one page of contacts.
    pub async fn list_contacts(
        &self,
        opts: Option<&ListContactsOption>,
    ) -> Result<Page<Vec<Contact>>, FreshError> {
        let url = self.endpoint("/contacts");
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every contact across all pages.
    pub async fn iter_contacts<E, F>(
        &self,
        opts: Option<ListContactsOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Contact) -> Result<(), E>,
    {
        let url = self.endpoint("/contacts");
        self.client.iterate(&url, opts, each).await
    }

    /// Autocompletes contacts by name.
    pub async fn search_contacts(&self, term: &str) -> Result<Vec<User>, FreshError> {
        let url = self.endpoint(&format!(
            "/contacts/autocomplete?term={}",
            urlencoding::encode(term)
        ));
        self.client.get(&url).await
    }

    /// Filters contacts with a query over contact fields.
    ///
    /// Query format: `"(contact_field:integer OR contact_field:'string') AND
    /// contact_field:boolean"`, including the surrounding double quotes.
    pub async fn filter_contacts(
        &self,
        opts: &FilterOption,
    ) -> Result<FilterContactsResult, FreshError> {
        let url = self.endpoint("/search/contacts");
        let page: Page<FilterContactsResult> = self.client.list(&url, Some(opts)).await?;
        Ok(page.data)
    }

    /// Restores a soft-deleted contact.
    pub async fn restore_contact(&self, contact_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/contacts/{}/restore", contact_id));
        let _: IgnoredAny = self.client.put(&url, &Payload::empty()).await?;
        Ok(())
    }

    /// Sends an activation email to a contact.
    pub async fn invite_contact(&self, contact_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/contacts/{}/send_invite", contact_id));
        let _: IgnoredAny = self.client.put(&url, &Payload::empty()).await?;
        Ok(())
    }

    /// Merges secondary contacts into a primary contact.
    pub async fn merge_contacts(&self, merge: &ContactsMerge) -> Result<(), FreshError> {
        let url = self.endpoint("/contacts/merge");
        let _: IgnoredAny = self.client.post(&url, &Payload::json(merge)).await?;
        Ok(())
    }

    /// Starts a contact export and returns the job ID.
    pub async fn export_contacts(
        &self,
        default_fields: &[String],
        custom_fields: &[String],
    ) -> Result<String, FreshError> {
        let url = self.endpoint("/contacts/export");
        let opt = ExportOption {
            fields: ExportFields {
                default_fields,
                custom_fields,
            },
        };
        let job: Job = self.client.post(&url, &Payload::json(&opt)).await?;
        Ok(job.id)
    }

    /// Gets the status of a contact export job.
    pub async fn get_contact_export(&self, job_id: &str) -> Result<Job, FreshError> {
        let url = self.endpoint(&format!(
            "/contacts/export/{}",
            urlencoding::encode(job_id)
        ));
        self.client.get(&url).await
    }

    /// Converts a contact into an agent.
    pub async fn make_agent(&self, contact_id: i64, agent: &MakeAgent) -> Result<Contact, FreshError> {
        let url = self.endpoint(&format!("/contacts/{}/make_agent", contact_id));
        self.client.put(&url, &Payload::json(agent)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_contacts_option_values() {
        let lo = ListContactsOption {
            email: "ada@example.com".to_string(),
            company_id: 5,
            state: Some(ContactState::Verified),
            updated_since: Some(Time::parse("2024-01-01T00:00:00+09:00").unwrap()),
            ..Default::default()
        };
        let q = lo.values();
        assert_eq!(q.get("email"), Some("ada@example.com"));
        assert_eq!(q.get("company_id"), Some("5"));
        assert_eq!(q.get("state"), Some("verified"));
        assert_eq!(q.get("updated_since"), Some("2023-12-31T15:00:00Z"));
        assert_eq!(q.get("page"), None);
        assert_eq!(q.get("phone"), None);
    }

    #[test]
    fn test_empty_list_contacts_option() {
        assert!(ListContactsOption::default().is_empty());
    }
}
