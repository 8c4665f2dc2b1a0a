use crate::body::Payload;
use crate::error::FreshError;
use crate::models::freshdesk::{
    Company, CompanyCreate, CompanySearchResult, CompanyUpdate, ExportFields, ExportOption, Job,
};
use crate::pagination::{Page, PageOption};

use super::Freshdesk;

impl Freshdesk {
    /// Creates a company.
    pub async fn create_company(&self, company: &CompanyCreate) -> Result<Company, FreshError> {
        let url = self.endpoint("/companies");
        self.client.post(&url, &Payload::json(company)).await
    }

    /// Gets a company by ID.
    pub async fn get_company(&self, company_id: i64) -> Result<Company, FreshError> {
        let url = self.endpoint(&format!("/companies/{}", company_id));
        self.client.get(&url).await
    }

    /// Lists one page of companies.
    pub async fn list_companies(
        &self,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Company>>, FreshError> {
        let url = self.endpoint("/companies");
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every company across all pages.
    pub async fn iter_companies<E, F>(&self, opts: Option<PageOption>, each: F) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Company) -> Result<(), E>,
    {
        let url = self.endpoint("/companies");
        self.client.iterate(&url, opts, each).await
    }

    /// Searches companies by name prefix.
    ///
    /// The match is case-insensitive and works on word prefixes: "Acme
    /// Corporation" is found by "acme" or "Co" but not by "cme".
    pub async fn search_companies(&self, name: &str) -> Result<Vec<Company>, FreshError> {
        let url = self.endpoint(&format!(
            "/companies/autocomplete?name={}",
            urlencoding::encode(name)
        ));
        let result: CompanySearchResult = self.client.get(&url).await?;
        Ok(result.companies)
    }

    /// Updates a company.
    pub async fn update_company(
        &self,
        company_id: i64,
        company: &CompanyUpdate,
    ) -> Result<Company, FreshError> {
        let url = self.endpoint(&format!("/companies/{}", company_id));
        self.client.put(&url, &Payload::json(company)).await
    }

    /// Deletes a company.
    pub async fn delete_company(&self, company_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/companies/{}", company_id));
        self.client.delete(&url).await
    }

    /// Starts a company export and returns the job ID.
    ///
    /// Poll [`get_company_export`](Self::get_company_export) until the job
    /// completes.
    pub async fn export_companies(
        &self,
        default_fields: &[String],
        custom_fields: &[String],
    ) -> Result<String, FreshError> {
        let url = self.endpoint("/companies/export");
        let opt = ExportOption {
            fields: ExportFields {
                default_fields,
                custom_fields,
            },
        };
        let job: Job = self.client.post(&url, &Payload::json(&opt)).await?;
        Ok(job.id)
    }

    /// Gets the status of a company export job.
    pub async fn get_company_export(&self, job_id: &str) -> Result<Job, FreshError> {
        let url = self.endpoint(&format!(
            "/companies/export/{}",
            urlencoding::encode(job_id)
        ));
        self.client.get(&url).await
    }
}
