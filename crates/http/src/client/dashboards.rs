//! Analytics dashboards

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::analytics::{Dashboard, DashboardRequest};
use reqwest::Method;

fn dashboards_path(project_id: &str) -> String {
    format!("/projects/{}/dashboards", segment(project_id))
}

fn dashboard_path(project_id: &str, dashboard_id: &str) -> String {
    format!("{}/{}", dashboards_path(project_id), segment(dashboard_id))
}

impl FancySpacesClient {
    pub async fn get_dashboards(&self, project_id: &str) -> Result<Vec<Dashboard>, ClientError> {
        let req = self.request(
            Service::Analytics,
            Method::GET,
            &dashboards_path(project_id),
            Auth::Session,
        );
        self.execute(req, Expect::Success, "fetch dashboards").await
    }

    pub async fn get_dashboard(
        &self,
        project_id: &str,
        dashboard_id: &str,
    ) -> Result<Dashboard, ClientError> {
        let req = self.request(
            Service::Analytics,
            Method::GET,
            &dashboard_path(project_id, dashboard_id),
            Auth::Session,
        );
        self.execute(req, Expect::Success, "fetch dashboard").await
    }

    pub async fn create_dashboard(
        &self,
        project_id: &str,
        dashboard: &DashboardRequest,
    ) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self
            .request(
                Service::Analytics,
                Method::POST,
                &dashboards_path(project_id),
                Auth::Session,
            )
            .json(dashboard);
        self.execute_empty(req, Expect::Success, "create dashboard")
            .await
    }

    pub async fn update_dashboard(
        &self,
        project_id: &str,
        dashboard_id: &str,
        dashboard: &DashboardRequest,
    ) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self
            .request(
                Service::Analytics,
                Method::PUT,
                &dashboard_path(project_id, dashboard_id),
                Auth::Session,
            )
            .json(dashboard);
        self.execute_empty(req, Expect::Success, "update dashboard")
            .await
    }

    pub async fn delete_dashboard(
        &self,
        project_id: &str,
        dashboard_id: &str,
    ) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self.request(
            Service::Analytics,
            Method::DELETE,
            &dashboard_path(project_id, dashboard_id),
            Auth::Session,
        );
        self.execute_empty(req, Expect::Success, "delete dashboard")
            .await
    }
}
