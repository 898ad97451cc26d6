//! Analytics metrics and their recorded values

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::analytics::{Metric, RecordInterval, RecordQueryResult};
use reqwest::Method;

fn metrics_path(project_id: &str) -> String {
    format!("/projects/{}/metrics", segment(project_id))
}

fn metric_path(project_id: &str, metric_id: &str) -> String {
    format!("{}/{}", metrics_path(project_id), segment(metric_id))
}

impl FancySpacesClient {
    pub async fn get_metrics(&self, project_id: &str) -> Result<Vec<Metric>, ClientError> {
        let req = self.request(
            Service::Analytics,
            Method::GET,
            &metrics_path(project_id),
            Auth::Session,
        );
        self.execute(req, Expect::Success, "fetch metrics").await
    }

    /// Register a metric in `metric.project_id`. The server assigns the id.
    pub async fn create_metric(&self, metric: &Metric) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self
            .request(
                Service::Analytics,
                Method::POST,
                &metrics_path(&metric.project_id),
                Auth::Session,
            )
            .json(metric);
        self.execute_empty(req, Expect::CREATED, "create metric")
            .await
    }

    pub async fn update_metric(&self, metric: &Metric) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self
            .request(
                Service::Analytics,
                Method::PUT,
                &metric_path(&metric.project_id, &metric.metric_id),
                Auth::Session,
            )
            .json(metric);
        self.execute_empty(req, Expect::Success, "update metric")
            .await
    }

    pub async fn delete_metric(&self, project_id: &str, metric_id: &str) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self.request(
            Service::Analytics,
            Method::DELETE,
            &metric_path(project_id, metric_id),
            Auth::Session,
        );
        self.execute_empty(req, Expect::Success, "delete metric")
            .await
    }

    /// The newest `count` raw records of a metric
    pub async fn get_latest_records_by_count(
        &self,
        project_id: &str,
        metric_id: &str,
        count: u32,
    ) -> Result<RecordQueryResult, ClientError> {
        let req = self
            .request(
                Service::Analytics,
                Method::GET,
                &format!("{}/records", metric_path(project_id, metric_id)),
                Auth::Session,
            )
            .query(&[("amount", count)]);
        self.execute(req, Expect::OK, "fetch latest records by count")
            .await
    }

    pub async fn get_latest_records_per_minute(
        &self,
        project_id: &str,
        metric_id: &str,
    ) -> Result<RecordQueryResult, ClientError> {
        self.get_aggregated_records(project_id, metric_id, RecordInterval::Minute)
            .await
    }

    pub async fn get_latest_records_per_hour(
        &self,
        project_id: &str,
        metric_id: &str,
    ) -> Result<RecordQueryResult, ClientError> {
        self.get_aggregated_records(project_id, metric_id, RecordInterval::Hour)
            .await
    }

    pub async fn get_latest_records_per_day(
        &self,
        project_id: &str,
        metric_id: &str,
    ) -> Result<RecordQueryResult, ClientError> {
        self.get_aggregated_records(project_id, metric_id, RecordInterval::Day)
            .await
    }

    /// Records of a metric summed into buckets of `interval`
    pub async fn get_aggregated_records(
        &self,
        project_id: &str,
        metric_id: &str,
        interval: RecordInterval,
    ) -> Result<RecordQueryResult, ClientError> {
        let req = self.request(
            Service::Analytics,
            Method::GET,
            &format!(
                "{}/records/{}",
                metric_path(project_id, metric_id),
                interval.path()
            ),
            Auth::Session,
        );
        let context = format!("fetch latest records {}", interval.path().replace('-', " "));
        self.execute(req, Expect::OK, &context).await
    }
}
