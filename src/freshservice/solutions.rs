//! Knowledge base: categories, folders and articles.
//!
//! Unlike Freshdesk, folders and articles live at flat paths and are scoped
//! to their parent by a query parameter.

use crate::body::{Payload, Values};
use crate::error::FreshError;
use crate::models::freshservice::{
    Article, ArticleCreate, ArticleResult, ArticleUpdate, ArticlesResult, CategoriesResult, Category,
    CategoryCreate, CategoryResult, CategoryUpdate, Folder, FolderCreate, FolderResult,
    FolderUpdate, FoldersResult,
};
use crate::pagination::{ListOption, Page, PageOption, Pageable};

use super::Freshservice;

/// Pagination for the folders of one category.
///
/// `category_id` is filled in by the calling method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFoldersOption {
    /// Owning category.
    pub category_id: i64,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
}

/// Pagination for the articles of one folder.
///
/// `folder_id` is filled in by the calling method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListArticlesOption {
    /// Owning folder.
    pub folder_id: i64,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
}

/// Keyword search over articles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArticlesOption {
    /// Keywords to search for.
    pub search_term: String,
    /// Search as this user instead of the API key owner.
    pub user_email: String,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
}

/// Implements the page accessors for an option with `page`/`per_page` fields.
macro_rules! pageable {
    ($name:ident) => {
        impl Pageable for $name {
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
    };
}

impl ListOption for ListFoldersOption {
    fn values(&self) -> Values {
        let mut q = Values::new();
        q.set_int("category_id", self.category_id);
        q.set_int("page", self.page.into());
        q.set_int("per_page", self.per_page.into());
        q
    }
}

impl ListOption for ListArticlesOption {
    fn values(&self) -> Values {
        let mut q = Values::new();
        q.set_int("folder_id", self.folder_id);
        q.set_int("page", self.page.into());
        q.set_int("per_page", self.per_page.into());
        q
    }
}

impl ListOption for SearchArticlesOption {
    fn values(&self) -> Values {
        let mut q = Values::new();
        q.set_string("search_term", &self.search_term);
        q.set_string("user_email", &self.user_email);
        q.set_int("page", self.page.into());
        q.set_int("per_page", self.per_page.into());
        q
    }
}

pageable!(ListFoldersOption);
pageable!(ListArticlesOption);
pageable!(SearchArticlesOption);

impl Freshservice {
    /// Creates a solution category.
    pub async fn create_category(&self, category: &CategoryCreate) -> Result<Category, FreshError> {
        let url = self.endpoint("/solutions/categories");
        let result: CategoryResult = self.client.post(&url, &Payload::json(category)).await?;
        Ok(result.category)
    }

    /// Gets a solution category.
    pub async fn get_category(&self, category_id: i64) -> Result<Category, FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}", category_id));
        let result: CategoryResult = self.client.get(&url).await?;
        Ok(result.category)
    }

    /// Lists one page of solution categories.
    pub async fn list_categories(
        &self,
        opts: Option<&PageOption>,
    ) -> Result<Page<Vec<Category>>, FreshError> {
        let url = self.endpoint("/solutions/categories");
        let page: Page<CategoriesResult> = self.client.list(&url, opts).await?;
        Ok(page.map(|r| r.categories))
    }

    /// Calls `each` for every solution category.
    pub async fn iter_categories<E, F>(&self, opts: Option<PageOption>, each: F) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Category) -> Result<(), E>,
    {
        let url = self.endpoint("/solutions/categories");
        self.client
            .iterate_with(&url, opts, |r: CategoriesResult| r.categories, each)
            .await
    }

    /// Updates a solution category.
    pub async fn update_category(
        &self,
        category_id: i64,
        category: &CategoryUpdate,
    ) -> Result<Category, FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}", category_id));
        let result: CategoryResult = self.client.put(&url, &Payload::json(category)).await?;
        Ok(result.category)
    }

    /// Deletes a solution category.
    pub async fn delete_category(&self, category_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/solutions/categories/{}", category_id));
        self.client.delete(&url).await
    }

    /// Creates a folder. `folder.category_id` is required.
    pub async fn create_folder(&self, folder: &FolderCreate) -> Result<Folder, FreshError> {
        let url = self.endpoint("/solutions/folders");
        let result: FolderResult = self.client.post(&url, &Payload::json(folder)).await?;
        Ok(result.folder)
    }

    /// Gets a folder.
    pub async fn get_folder(&self, folder_id: i64) -> Result<Folder, FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}", folder_id));
        let result: FolderResult = self.client.get(&url).await?;
        Ok(result.folder)
    }

    /// Lists one page of the folders in a category.
    pub async fn list_category_folders(
        &self,
        category_id: i64,
        opts: Option<&ListFoldersOption>,
    ) -> Result<Page<Vec<Folder>>, FreshError> {
        let lo = ListFoldersOption {
            category_id,
            ..opts.copied().unwrap_or_default()
        };
        let url = self.endpoint("/solutions/folders");
        let page: Page<FoldersResult> = self.client.list(&url, Some(&lo)).await?;
        Ok(page.map(|r| r.folders))
    }

    /// Calls `each` for every folder in a category.
    pub async fn iter_category_folders<E, F>(
        &self,
        category_id: i64,
        opts: Option<ListFoldersOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Folder) -> Result<(), E>,
    {
        let lo = ListFoldersOption {
            category_id,
            ..opts.unwrap_or_default()
        };
        let url = self.endpoint("/solutions/folders");
        self.client
            .iterate_with(&url, Some(lo), |r: FoldersResult| r.folders, each)
            .await
    }

    /// Updates a folder.
    pub async fn update_folder(
        &self,
        folder_id: i64,
        folder: &FolderUpdate,
    ) -> Result<Folder, FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}", folder_id));
        let result: FolderResult = self.client.put(&url, &Payload::json(folder)).await?;
        Ok(result.folder)
    }

    /// Deletes a folder.
    pub async fn delete_folder(&self, folder_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/solutions/folders/{}", folder_id));
        self.client.delete(&url).await
    }

    /// Creates an article. `article.folder_id` is required; attachments make
    /// this a multipart upload.
    pub async fn create_article(&self, article: &ArticleCreate) -> Result<Article, FreshError> {
        let url = self.endpoint("/solutions/articles");
        let result: ArticleResult = self.client.post(&url, &Payload::from_form(article)).await?;
        Ok(result.article)
    }

    /// Submits a draft article to its approval workflow.
    pub async fn send_article_for_approval(&self, article_id: i64) -> Result<Article, FreshError> {
        let url = self.endpoint(&format!("/solutions/articles/{}/send_for_approval", article_id));
        let result: ArticleResult = self.client.put(&url, &Payload::empty()).await?;
        Ok(result.article)
    }

    /// Gets an article.
    pub async fn get_article(&self, article_id: i64) -> Result<Article, FreshError> {
        let url = self.endpoint(&format!("/solutions/articles/{}", article_id));
        let result: ArticleResult = self.client.get(&url).await?;
        Ok(result.article)
    }

    /// Lists one page of the articles in a folder.
    ///
    /// List responses omit the article body.
    pub async fn list_folder_articles(
        &self,
        folder_id: i64,
        opts: Option<&ListArticlesOption>,
    ) -> Result<Page<Vec<Article>>, FreshError> {
        let lo = ListArticlesOption {
            folder_id,
            ..opts.copied().unwrap_or_default()
        };
        let url = self.endpoint("/solutions/articles");
        let page: Page<ArticlesResult> = self.client.list(&url, Some(&lo)).await?;
        Ok(page.map(|r| r.articles))
    }

    /// Calls `each` for every article in a folder.
    pub async fn iter_folder_articles<E, F>(
        &self,
        folder_id: i64,
        opts: Option<ListArticlesOption>,
        each: F,
    ) -> Result<(), E>
    where
        E: From<FreshError>,
        F: FnMut(Article) -> Result<(), E>,
    {
        let lo = ListArticlesOption {
            folder_id,
            ..opts.unwrap_or_default()
        };
        let url = self.endpoint("/solutions/articles");
        self.client
            .iterate_with(&url, Some(lo), |r: ArticlesResult| r.articles, each)
            .await
    }

    /// Updates an article.
    pub async fn update_article(
        &self,
        article_id: i64,
        article: &ArticleUpdate,
    ) -> Result<Article, FreshError> {
        let url = self.endpoint(&format!("/solutions/articles/{}", article_id));
        let result: ArticleResult = self.client.put(&url, &Payload::from_form(article)).await?;
        Ok(result.article)
    }

    /// Deletes an article.
    pub async fn delete_article(&self, article_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/solutions/articles/{}", article_id));
        self.client.delete(&url).await
    }

    /// Searches articles by keyword; one page per call.
    pub async fn search_articles(
        &self,
        opts: &SearchArticlesOption,
    ) -> Result<Page<Vec<Article>>, FreshError> {
        let url = self.endpoint("/solutions/articles/search");
        let page: Page<ArticlesResult> = self.client.list(&url, Some(opts)).await?;
        Ok(page.map(|r| r.articles))
    }
}
