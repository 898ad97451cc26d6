//! Analytics templates

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::analytics::{ApplyTemplateRequest, Template};
use reqwest::Method;

impl FancySpacesClient {
    /// Public catalogue of templates
    pub async fn get_templates(&self) -> Result<Vec<Template>, ClientError> {
        let req = self.request(Service::Analytics, Method::GET, "/templates", Auth::None);
        self.execute(req, Expect::Success, "fetch templates").await
    }

    /// Create the metrics and dashboards of a template in a project
    pub async fn apply_template(&self, project_id: &str, template_id: &str) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self
            .request(
                Service::Analytics,
                Method::POST,
                &format!("/templates/{}/apply", segment(template_id)),
                Auth::Session,
            )
            .json(&ApplyTemplateRequest { project_id });
        self.execute_empty(req, Expect::Success, "apply template")
            .await
    }
}
