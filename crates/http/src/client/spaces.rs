//! Spaces

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::spaces::{DownloadCount, Space};
use reqwest::Method;
use std::collections::HashMap;

impl FancySpacesClient {
    pub async fn get_all_spaces(&self) -> Result<Vec<Space>, ClientError> {
        let req = self.request(Service::Core, Method::GET, "/spaces", Auth::Session);
        self.execute(req, Expect::Success, "fetch all spaces").await
    }

    pub async fn get_space(&self, space_id: &str) -> Result<Space, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &format!("/spaces/{}", segment(space_id)),
            Auth::Session,
        );
        self.execute(req, Expect::Success, "fetch space").await
    }

    /// Total downloads across all versions of a space
    pub async fn get_download_count_for_space(&self, space_id: &str) -> Result<u64, ClientError> {
        let counts = self
            .get_download_counts(space_id, "fetch download count for space")
            .await?;
        Ok(counts.downloads)
    }

    /// Downloads keyed by version id
    pub async fn get_download_count_per_version(
        &self,
        space_id: &str,
    ) -> Result<HashMap<String, u64>, ClientError> {
        let counts = self
            .get_download_counts(space_id, "fetch download count per version")
            .await?;
        Ok(counts.versions)
    }

    async fn get_download_counts(
        &self,
        space_id: &str,
        context: &str,
    ) -> Result<DownloadCount, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &format!("/spaces/{}/downloads", segment(space_id)),
            Auth::Session,
        );
        self.execute(req, Expect::Success, context).await
    }
}
