//! Issue tracker of a space

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::issues::{Issue, IssueDraft};
use reqwest::Method;

fn issues_path(space_id: &str) -> String {
    format!("/spaces/{}/issues", segment(space_id))
}

fn issue_path(space_id: &str, issue_id: &str) -> String {
    format!("{}/{}", issues_path(space_id), segment(issue_id))
}

impl FancySpacesClient {
    pub async fn get_issue(&self, space_id: &str, issue_id: &str) -> Result<Issue, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &issue_path(space_id, issue_id),
            Auth::Session,
        );
        self.execute(req, Expect::Success, "fetch issue").await
    }

    pub async fn get_all_issues(&self, space_id: &str) -> Result<Vec<Issue>, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &issues_path(space_id),
            Auth::Session,
        );
        self.execute(req, Expect::Success, "fetch all issues").await
    }

    pub async fn create_issue(
        &self,
        space_id: &str,
        issue: &IssueDraft,
    ) -> Result<Issue, ClientError> {
        self.require_auth().await?;

        let req = self
            .request(
                Service::Core,
                Method::POST,
                &issues_path(space_id),
                Auth::Session,
            )
            .json(issue);
        self.execute(req, Expect::Success, "create issue").await
    }

    /// Apply the set fields of `changes` and return the updated issue
    pub async fn update_issue(
        &self,
        space_id: &str,
        issue_id: &str,
        changes: &IssueDraft,
    ) -> Result<Issue, ClientError> {
        self.require_auth().await?;

        let req = self
            .request(
                Service::Core,
                Method::PUT,
                &issue_path(space_id, issue_id),
                Auth::Session,
            )
            .json(changes);
        self.execute(req, Expect::Success, "update issue").await
    }

    pub async fn delete_issue(&self, space_id: &str, issue_id: &str) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self.request(
            Service::Core,
            Method::DELETE,
            &issue_path(space_id, issue_id),
            Auth::Session,
        );
        self.execute_empty(req, Expect::Success, "delete issue")
            .await
    }
}
