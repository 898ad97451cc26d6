//! Releases of a space, authorized by API key

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::spaces::DownloadCount;
use crate::types::versions::{LATEST_VERSION, SpaceVersion};
use reqwest::Method;

fn versions_path(space_id: &str) -> String {
    format!("/spaces/{}/versions", segment(space_id))
}

impl FancySpacesClient {
    pub async fn get_version(
        &self,
        space_id: &str,
        version_id: &str,
    ) -> Result<SpaceVersion, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &format!("{}/{}", versions_path(space_id), segment(version_id)),
            Auth::ApiKey,
        );
        self.execute(req, Expect::Success, "fetch version").await
    }

    pub async fn get_latest_version(&self, space_id: &str) -> Result<SpaceVersion, ClientError> {
        self.get_version(space_id, LATEST_VERSION).await
    }

    pub async fn get_all_versions(&self, space_id: &str) -> Result<Vec<SpaceVersion>, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &versions_path(space_id),
            Auth::ApiKey,
        );
        self.execute(req, Expect::Success, "fetch all versions").await
    }

    pub async fn get_download_count_for_version(
        &self,
        space_id: &str,
        version_id: &str,
    ) -> Result<u64, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &format!(
                "{}/{}/downloads",
                versions_path(space_id),
                segment(version_id)
            ),
            Auth::ApiKey,
        );
        let counts: DownloadCount = self
            .execute(req, Expect::Success, "fetch download count for version")
            .await?;
        Ok(counts.downloads)
    }
}
