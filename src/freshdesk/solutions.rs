//! Knowledge base: categories, folders and articles.
//!
//! Folders are created and listed under their category, articles under their
//! folder. Single-item operations address the item directly.
//!
//! The `*_translated` variants address one language version of an item. They
//! append the language code (`fr`, `pt-BR`) to the item path.

use crate::body::Payload;
use crate::error::FreshError;
use crate::models::freshdesk::{
    Article, ArticleCreate, ArticleUpdate, Category, CategoryCreate, CategoryUpdate, Folder,
    FolderCreate, FolderUpdate,
};
use crate::pagination::{Page, PageOption};

use super::Freshdesk;

impl Freshdesk {
    /// Creates a solution category.
    pub async fn create_category(&self, category: &CategoryCreate) -> Result<Category, FreshError> {
        let url = self.endpoint("/solutions/categories");
        self.client.post(&url, &Payload::json(category)).await
    }

    /// Gets a solution category.
    pub async fn get_category(&self, category_id: i64) -> Result<Category, FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}", category_id));
        self.client.get(&url).await
    }

    /// Lists one page of solution categories.
    pub async fn list_categories(
        &self,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Category>>, FreshError> {
        let url = self.endpoint("/solutions/categories");
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every solution category.
    pub async fn iter_categories<E, F>(&self, opts: Option<PageOption>, each: F) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Category) -> Result<(), E>,
    {
        let url = self.endpoint("/solutions/categories");
        self.client.iterate(&url, opts, each).await
    }

    /// Updates a solution category.
    pub async fn update_category(
        &self,
        category_id: i64,
        category: &CategoryUpdate,
    ) -> Result<Category, FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}", category_id));
        self.client.put(&url, &Payload::json(category)).await
    }

    /// Deletes a solution category and everything in it.
    pub async fn delete_category(&self, category_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}", category_id));
        self.client.delete(&url).await
    }

    /// Creates a folder in a category.
    pub async fn create_folder(
        &self,
        category_id: i64,
        folder: &FolderCreate,
    ) -> Result<Folder, FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}/folders", category_id));
        self.client.post(&url, &Payload::json(folder)).await
    }

    /// Gets a folder.
    pub async fn get_folder(&self, folder_id: i64) -> Result<Folder, FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}", folder_id));
        self.client.get(&url).await
    }

    /// Lists one page of the folders in a category.
    pub async fn list_category_folders(
        &self,
        category_id: i64,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Folder>>, FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}/folders", category_id));
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every folder in a category.
    pub async fn iter_category_folders<E, F>(
        &self,
        category_id: i64,
        opts: Option<PageOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Folder) -> Result<(), E>,
    {
        let url = self.endpoint(&format!("/solutions/categories/{}/folders", category_id));
        self.client.iterate(&url, opts, each).await
    }

    /// Updates a folder.
    pub async fn update_folder(
        &self,
        folder_id: i64,
        folder: &FolderUpdate,
    ) -> Result<Folder, FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}", folder_id));
        self.client.put(&url, &Payload::json(folder)).await
    }

    /// Deletes a folder.
    pub async fn delete_folder(&self, folder_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}", folder_id));
        self.client.delete(&url).await
    }

    /// Creates an article in a folder. Attachments make this a multipart
    /// upload.
    pub async fn create_article(
        &self,
        folder_id: i64,
        article: &ArticleCreate,
    ) -> Result<Article, FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}/articles", folder_id));
        self.client.post(&url, &Payload::from_form(article)).await
    }

    /// Gets an article.
    pub async fn get_article(&self, article_id: i64) -> Result<Article, FreshError> {
        let url = self.endpoint(&format!("/solutions/articles/{}", article_id));
        self.client.get(&url).await
    }

    /// Lists one page of the articles in a folder.
    pub async fn list_folder_articles(
        &self,
        folder_id: i64,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Article>>, FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}/articles", folder_id));
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every article in a folder.
    pub async fn iter_folder_articles<E, F>(
        &self,
        folder_id: i64,
        opts: Option<PageOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Article) -> Result<(), E>,
    {
        let url = self.endpoint(&format!("/solutions/folders/{}/articles", folder_id));
        self.client.iterate(&url, opts, each).await
    }

    /// Updates an article.
    pub async fn update_article(
        &self,
        article_id: i64,
        article: &ArticleUpdate,
    ) -> Result<Article, FreshError> {
        let url = self.endpoint(&format!("/solutions/articles/{}", article_id));
        self.client.put(&url, &Payload::from_form(article)).await
    }

    /// Deletes an article.
    pub async fn delete_article(&self, article_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/solutions/articles/{}", article_id));
        self.client.delete(&url).await
    }

    /// Creates the `lang` version of an existing category.
    pub async fn create_category_translated(
        &self,
        category_id: i64,
        lang: &str,
        category: &CategoryCreate,
    ) -> Result<Category, FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}/{}", category_id, lang));
        self.client.post(&url, &Payload::json(category)).await
    }

    /// Updates the `lang` version of a category.
    pub async fn update_category_translated(
        &self,
        category_id: i64,
        lang: &str,
        category: &CategoryUpdate,
    ) -> Result<Category, FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}/{}", category_id, lang));
        self.client.put(&url, &Payload::json(category)).await
    }

    /// Gets the `lang` version of a category.
    pub async fn get_category_translated(
        &self,
        category_id: i64,
        lang: &str,
    ) -> Result<Category, FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}/{}", category_id, lang));
        self.client.get(&url).await
    }

    /// Lists one page of the `lang` versions of all categories.
    pub async fn list_categories_translated(
        &self,
        lang: &str,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Category>>, FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}", lang));
        self.client.list(&url, opts).await
    }

    /// Calls `each` for the `lang` version of every category.
    pub async fn iter_categories_translated<E, F>(
        &self,
        lang: &str,
        opts: Option<PageOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Category) -> Result<(), E>,
    {
        let url = self.endpoint(&format!("/solutions/categories/{}", lang));
        self.client.iterate(&url, opts, each).await
    }

    /// Creates the `lang` version of an existing folder.
    pub async fn create_folder_translated(
        &self,
        folder_id: i64,
        lang: &str,
        folder: &FolderCreate,
    ) -> Result<Folder, FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}/{}", folder_id, lang));
        self.client.post(&url, &Payload::json(folder)).await
    }

    /// Updates the `lang` version of a folder.
    pub async fn update_folder_translated(
        &self,
        folder_id: i64,
        lang: &str,
        folder: &FolderUpdate,
    ) -> Result<Folder, FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}/{}", folder_id, lang));
        self.client.put(&url, &Payload::json(folder)).await
    }

    /// Gets the `lang` version of a folder.
    pub async fn get_folder_translated(
        &self,
        folder_id: i64,
        lang: &str,
    ) -> Result<Folder, FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}/{}", folder_id, lang));
        self.client.get(&url).await
    }

    /// Lists one page of the `lang` folders in a category.
    pub async fn list_category_folders_translated(
        &self,
        category_id: i64,
        lang: &str,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Folder>>, FreshError> {
        let url = self.endpoint(&format!(
            "/solutions/categories/{}/folders/{}",
            category_id, lang
        ));
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every `lang` folder in a category.
    pub async fn iter_category_folders_translated<E, F>(
        &self,
        category_id: i64,
        lang: &str,
        opts: Option<PageOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Folder) -> Result<(), E>,
    {
        let url = self.endpoint(&format!(
            "/solutions/categories/{}/folders/{}",
            category_id, lang
        ));
        self.client.iterate(&url, opts, each).await
    }

    /// Lists one page of the folders nested directly under a folder.
    pub async fn list_sub_folders(
        &self,
        folder_id: i64,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Folder>>, FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}/subfolders", folder_id));
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every folder nested directly under a folder.
    pub async fn iter_sub_folders<E, F>(
        &self,
        folder_id: i64,
        opts: Option<PageOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Folder) -> Result<(), E>,
    {
        let url = self.endpoint(&format!("/solutions/folders/{}/subfolders", folder_id));
        self.client.iterate(&url, opts, each).await
    }

    /// Lists one page of the `lang` subfolders of a folder.
    pub async fn list_sub_folders_translated(
        &self,
        folder_id: i64,
        lang: &str,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Folder>>, FreshError> {
        let url = self.endpoint(&format!(
            "/solutions/folders/{}/subfolders/{}",
            folder_id, lang
        ));
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every `lang` subfolder of a folder.
    pub async fn iter_sub_folders_translated<E, F>(
        &self,
        folder_id: i64,
        lang: &str,
        opts: Option<PageOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Folder) -> Result<(), E>,
    {
        let url = self.endpoint(&format!(
            "/solutions/folders/{}/subfolders/{}",
            folder_id, lang
        ));
        self.client.iterate(&url, opts, each).await
    }

    /// Creates the `lang` version of an existing article.
    pub async fn create_article_translated(
        &self,
        article_id: i64,
        lang: &str,
        article: &ArticleCreate,
    ) -> Result<Article, FreshError> {
        let url = self.endpoint(&format!("/solutions/articles/{}/{}", article_id, lang));
        self.client.post(&url, &Payload::from_form(article)).await
    }

    /// Updates the `lang` version of an article.
    pub async fn update_article_translated(
        &self,
        article_id: i64,
        lang: &str,
        article: &ArticleUpdate,
    ) -> Result<Article, FreshError> {
        let url = self.endpoint(&format!("/solutions/articles/{}/{}", article_id, lang));
        self.client.put(&url, &Payload::from_form(article)).await
    }

    /// Gets the `lang` version of an article.
    pub async fn get_article_translated(
        &self,
        article_id: i64,
        lang: &str,
    ) -> Result<Article, FreshError> {
        let url = self.endpoint(&format!("/solutions/articles/{}/{}", article_id, lang));
        self.client.get(&url).await
    }

    /// Lists one page of the `lang` articles in a folder.
    pub async fn list_folder_articles_translated(
        &self,
        folder_id: i64,
        lang: &str,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Article>>, FreshError> {
        let url = self.endpoint(&format!(
            "/solutions/folders/{}/articles/{}",
            folder_id, lang
        ));
        self.client.list(&url, opts).await
    }

    /// Calls `each` for every `lang` article in a folder.
    pub async fn iter_folder_articles_translated<E, F>(
        &self,
        folder_id: i64,
        lang: &str,
        opts: Option<PageOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Article) -> Result<(), E>,
    {
        let url = self.endpoint(&format!(
            "/solutions/folders/{}/articles/{}",
            folder_id, lang
        ));
        self.client.iterate(&url, opts, each).await
    }

    /// Full-text search over articles.
    pub async fn search_articles(&self, term: &str) -> Result<Vec<Article>, FreshError> {
        let url = self.endpoint(&format!(
            "/search/solutions?term={}",
            urlencoding::encode(term)
        ));
        self.client.get(&url).await
    }
}
