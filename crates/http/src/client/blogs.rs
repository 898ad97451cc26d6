//! Blog articles

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::blogs::{BlogArticle, CreateBlogArticleRequest, UpdateBlogArticleRequest};
use reqwest::{Method, header};

fn article_path(article_id: &str) -> String {
    format!("/blog-articles/{}", segment(article_id))
}

impl FancySpacesClient {
    /// Articles published by a space. `null` reads as no articles.
    pub async fn get_blog_articles_for_space(
        &self,
        space_id: &str,
    ) -> Result<Vec<BlogArticle>, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &format!("/spaces/{}/blog-articles", segment(space_id)),
            Auth::Session,
        );
        self.execute_list_or_empty(req, Expect::Success, "fetch blog articles")
            .await
    }

    pub async fn get_blog_articles_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<BlogArticle>, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &format!("/users/{}/blog-articles", segment(user_id)),
            Auth::Session,
        );
        self.execute(req, Expect::Success, "fetch blog articles")
            .await
    }

    pub async fn get_blog_article(&self, article_id: &str) -> Result<BlogArticle, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &article_path(article_id),
            Auth::Session,
        );
        self.execute(req, Expect::Success, "fetch blog article")
            .await
    }

    /// Markdown body of an article
    pub async fn get_blog_article_content(&self, article_id: &str) -> Result<String, ClientError> {
        let req = self
            .request(
                Service::Core,
                Method::GET,
                &format!("{}/content", article_path(article_id)),
                Auth::Session,
            )
            .header(header::ACCEPT, "text/plain");
        self.execute_text(req, Expect::Success, "fetch blog article content")
            .await
    }

    /// Publish an article. An empty `space_id` makes it user-owned.
    pub async fn create_blog_article(
        &self,
        space_id: &str,
        title: &str,
        summary: &str,
        content: &str,
    ) -> Result<BlogArticle, ClientError> {
        self.require_auth().await?;

        let req = self
            .request(Service::Core, Method::POST, "/blog-articles", Auth::Session)
            .json(&CreateBlogArticleRequest {
                space_id: space_id.to_string(),
                title: title.to_string(),
                summary: summary.to_string(),
                content: content.to_string(),
            });
        self.execute(req, Expect::Success, "create blog article")
            .await
    }

    pub async fn update_blog_article(
        &self,
        article_id: &str,
        title: &str,
        summary: &str,
        content: &str,
    ) -> Result<BlogArticle, ClientError> {
        self.require_auth().await?;

        let req = self
            .request(
                Service::Core,
                Method::PUT,
                &article_path(article_id),
                Auth::Session,
            )
            .json(&UpdateBlogArticleRequest {
                title: title.to_string(),
                summary: summary.to_string(),
                content: content.to_string(),
            });
        self.execute(req, Expect::Success, "update blog article")
            .await
    }

    pub async fn delete_blog_article(&self, article_id: &str) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self.request(
            Service::Core,
            Method::DELETE,
            &article_path(article_id),
            Auth::Session,
        );
        self.execute_empty(req, Expect::Success, "delete blog article")
            .await
    }
}
