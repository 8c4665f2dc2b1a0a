//! Groups, roles and products.

use crate::body::Payload;
use crate::error::FreshError;
use crate::models::freshdesk::{Group, GroupCreate, GroupUpdate, Product, Role};
use crate::pagination::{Page, PageOption};

use super::Freshdesk;

impl Freshdesk {
    /// Creates a group.
    pub async fn create_group(&self, group: &GroupCreate) -> Result<Group, FreshError> {
        let url = self.endpoint("/groups");
        self.client.post(&url, &Payload::json(group)).await
    }

    /// Gets a group by ID.
    pub async fn get_group(&self, group_id: i64) -> Result<Group, FreshError> {
        let url = self.endpoint(&format!("/groups/{}", group_id));
        self.client.get(&url).await
    }

    /// Lists one page of groups.
    pub async fn list_groups(
        &self,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Group>>, FreshError> {
        let url = self.endpoint("/groups");
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every group across all pages.
    pub async fn iter_groups<E, F>(&self, opts: Option<PageOption>, each: F) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Group) -> Result<(), E>,
    {
        let url = self.endpoint("/groups");
        self.client.iterate(&url, opts, each).await
    }

    /// Updates a group.
    pub async fn update_group(&self, group_id: i64, group: &GroupUpdate) -> Result<Group, FreshError> {
        let url = self.endpoint(&format!("/groups/{}", group_id));
        self.client.put(&url, &Payload::json(group)).await
    }

    /// Deletes a group.
    pub async fn delete_group(&self, group_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/groups/{}", group_id));
        self.client.delete(&url).await
    }

    /// Gets a role by ID.
    pub async fn get_role(&self, role_id: i64) -> Result<Role, FreshError> {
        let url = self.endpoint(&format!("/roles/{}", role_id));
        self.client.get(&url).await
    }

    /// Lists one page of roles.
    pub async fn list_roles(&self, opts: Option<&PageOption>) -> Result<Page<Vec<Role>>, FreshError> {
        let url = self.endpoint("/roles");
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every role across all pages.
    pub async fn iter_roles<E, F>(&self, opts: Option<PageOption>, each: F) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Role) -> Result<(), E>,
    {
        let url = self.endpoint("/roles");
        self.client.iterate(&url, opts, each).await
    }

    /// Gets a product by ID.
    pub async fn get_product(&self, product_id: i64) -> Result<Product, FreshError> {
        let url = self.endpoint(&format!("/products/{}", product_id));
        self.client.get(&url).await
    }

    /// Lists one page of products.
    pub async fn list_products(
        &self,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Product>>, FreshError> {
        let url = self.endpoint("/products");
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every product across all pages.
    pub async fn iter_products<E, F>(&self, opts: Option<PageOption>, each: F) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Product) -> Result<(), E>,
    {
        let url = self.endpoint("/products");
        self.client.iterate(&url, opts, each).await
    }
}
