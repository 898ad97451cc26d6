//! Analytics events and log records
//!
//! Records carry no identity of their own; each one gets its position in
//! the result as `id`.

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::analytics::{EventQueryResult, LogsQueryResult};
use reqwest::Method;

/// Which slice of recent data to query
enum Window {
    Hours(u32),
    Count(u32),
}

impl Window {
    fn query(&self) -> (&'static str, String) {
        match self {
            Self::Hours(hours) => ("time", hours.to_string()),
            Self::Count(count) => ("amount", count.to_string()),
        }
    }
}

impl FancySpacesClient {
    /// Events named `name` (all events if empty) from the last `hours` hours
    pub async fn get_latest_events_by_time(
        &self,
        project_id: &str,
        name: &str,
        hours: u32,
    ) -> Result<EventQueryResult, ClientError> {
        self.query_events(project_id, name, Window::Hours(hours), "fetch latest events by time")
            .await
    }

    /// The newest `count` events named `name` (all events if empty)
    pub async fn get_latest_events_by_count(
        &self,
        project_id: &str,
        name: &str,
        count: u32,
    ) -> Result<EventQueryResult, ClientError> {
        self.query_events(project_id, name, Window::Count(count), "fetch latest events by count")
            .await
    }

    /// Log records of `service` (all services if empty) from the last
    /// `hours` hours
    pub async fn get_latest_logs_by_time(
        &self,
        project_id: &str,
        service: &str,
        hours: u32,
    ) -> Result<LogsQueryResult, ClientError> {
        self.query_logs(project_id, service, Window::Hours(hours), "fetch latest logs by time")
            .await
    }

    pub async fn get_latest_logs_by_count(
        &self,
        project_id: &str,
        service: &str,
        count: u32,
    ) -> Result<LogsQueryResult, ClientError> {
        self.query_logs(project_id, service, Window::Count(count), "fetch latest logs by count")
            .await
    }

    async fn query_events(
        &self,
        project_id: &str,
        name: &str,
        window: Window,
        context: &str,
    ) -> Result<EventQueryResult, ClientError> {
        let (param, value) = window.query();
        let req = self
            .request(
                Service::Analytics,
                Method::GET,
                &format!("/projects/{}/events", segment(project_id)),
                Auth::Session,
            )
            .query(&[("name", name), (param, value.as_str())]);

        let mut result: EventQueryResult = self.execute(req, Expect::OK, context).await?;
        for (index, event) in result.events.iter_mut().enumerate() {
            event.id = index.to_string();
        }
        Ok(result)
    }

    async fn query_logs(
        &self,
        project_id: &str,
        service: &str,
        window: Window,
        context: &str,
    ) -> Result<LogsQueryResult, ClientError> {
        let (param, value) = window.query();
        let mut req = self
            .request(
                Service::Analytics,
                Method::GET,
                &format!("/projects/{}/logs", segment(project_id)),
                Auth::Session,
            )
            .query(&[(param, value.as_str())]);
        if !service.is_empty() {
            req = req.query(&[("service", service)]);
        }

        let mut result: LogsQueryResult = self.execute(req, Expect::OK, context).await?;
        for (index, record) in result.records.iter_mut().enumerate() {
            record.id = index.to_string();
        }
        Ok(result)
    }
}
