//! Maven repositories, authorized by API key

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::maven::{MavenArtifact, MavenRepository};
use reqwest::Method;

fn repositories_path(space_id: &str) -> String {
    format!("/spaces/{}/maven-repositories", segment(space_id))
}

fn artifacts_path(space_id: &str, repository: &str) -> String {
    format!(
        "{}/{}/artifacts",
        repositories_path(space_id),
        segment(repository)
    )
}

impl FancySpacesClient {
    pub async fn get_all_maven_repositories(
        &self,
        space_id: &str,
    ) -> Result<Vec<MavenRepository>, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &repositories_path(space_id),
            Auth::ApiKey,
        );
        self.execute(req, Expect::Success, "fetch maven repositories")
            .await
    }

    pub async fn get_maven_repository(
        &self,
        space_id: &str,
        repository: &str,
    ) -> Result<MavenRepository, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &format!("{}/{}", repositories_path(space_id), segment(repository)),
            Auth::ApiKey,
        );
        self.execute(req, Expect::Success, "fetch maven repository")
            .await
    }

    /// Artifacts of a repository. A repository without artifacts may answer
    /// with `null`, which reads as an empty list.
    pub async fn get_all_maven_artifacts(
        &self,
        space_id: &str,
        repository: &str,
    ) -> Result<Vec<MavenArtifact>, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &artifacts_path(space_id, repository),
            Auth::ApiKey,
        );
        self.execute_list_or_empty(req, Expect::Success, "fetch maven artifacts")
            .await
    }

    /// Single artifact addressed by its `group:artifact` coordinate
    pub async fn get_maven_artifact(
        &self,
        space_id: &str,
        repository: &str,
        coordinate: &str,
    ) -> Result<MavenArtifact, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &format!(
                "{}/{}",
                artifacts_path(space_id, repository),
                segment(coordinate)
            ),
            Auth::ApiKey,
        );
        self.execute(req, Expect::Success, "fetch maven artifact")
            .await
    }
}
