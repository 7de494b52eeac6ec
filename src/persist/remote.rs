// src/persist/remote.rs
//! HTTP client for the remote project store.
//!
//! The remote speaks plain JSON envelopes: `{ "data": ... }` on success,
//! `{ "message": ... }` on failure with a non-2xx status. Every failure
//! maps to a recoverable persistence error; this client never retries.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::persist::ProjectStore;
use crate::types::{Project, ProjectMetadata};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteStore {
    /// `base_url` is the API root, e.g. `https://host/api`. A trailing
    /// slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(Error::persistence)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Creates a project on the remote (POST). [`ProjectStore::save_project`]
    /// updates an existing one.
    pub async fn create_project(&self, project: &Project) -> Result<Project> {
        let url = self.url("/projects");
        debug!("creating remote project at {url}");
        let response = self
            .client
            .post(&url)
            .json(project)
            .send()
            .await
            .map_err(Error::persistence)?;
        parse_data(response).await
    }
}

impl ProjectStore for RemoteStore {
    async fn load_project(&self, id: &str) -> Result<Project> {
        let response = self
            .client
            .get(self.url(&format!("/projects/{id}")))
            .send()
            .await
            .map_err(Error::persistence)?;
        parse_data(response).await
    }

    async fn save_project(&self, project: &Project) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/projects/{}", project.id)))
            .json(project)
            .send()
            .await
            .map_err(Error::persistence)?;
        let _updated: Project = parse_data(response).await?;
        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/projects/{id}")))
            .send()
            .await
            .map_err(Error::persistence)?;
        let _ack: serde_json::Value = parse_data(response).await?;
        Ok(())
    }

    async fn list_metadata(&self) -> Result<Vec<ProjectMetadata>> {
        let response = self
            .client
            .get(self.url("/projects/metadata"))
            .send()
            .await
            .map_err(Error::persistence)?;
        parse_data(response).await
    }
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
}

async fn parse_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(Error::persistence)?;
    decode_envelope(status.is_success(), status.as_u16(), &body)
}

/// Split out of [`parse_data`] so envelope handling is testable without a
/// live server.
fn decode_envelope<T: DeserializeOwned>(success: bool, status: u16, body: &str) -> Result<T> {
    if success {
        let envelope: DataEnvelope<T> = serde_json::from_str(body).map_err(Error::persistence)?;
        Ok(envelope.data)
    } else {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("remote returned status {status}"));
        Err(Error::Persistence(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TemplateKind;

    #[test]
    fn test_url_building_tolerates_trailing_slash() {
        let store = RemoteStore::new("https://example.test/api/").unwrap();
        assert_eq!(
            store.url("/projects/metadata"),
            "https://example.test/api/projects/metadata"
        );
    }

    #[test]
    fn test_success_envelope_unwraps_data() {
        let project = Project::new(TemplateKind::Classic, Some("Remote".to_string()));
        let body = format!("{{\"data\":{}}}", serde_json::to_string(&project).unwrap());
        let decoded: Project = decode_envelope(true, 200, &body).unwrap();
        assert_eq!(decoded, project);
    }

    #[test]
    fn test_failure_envelope_surfaces_message() {
        let err: Error =
            decode_envelope::<Project>(false, 404, "{\"message\":\"Project not found\"}")
                .unwrap_err();
        assert!(matches!(err, Error::Persistence(m) if m == "Project not found"));
    }

    #[test]
    fn test_unparseable_failure_falls_back_to_status() {
        let err: Error = decode_envelope::<Project>(false, 502, "<html>bad gateway</html>")
            .unwrap_err();
        assert!(matches!(err, Error::Persistence(m) if m.contains("502")));
    }

    #[test]
    fn test_metadata_envelope_decodes_listing() {
        let body = r#"{"data":[{"id":"project-1","name":"A","template":"modern","updatedAt":5}]}"#;
        let listing: Vec<ProjectMetadata> = decode_envelope(true, 200, body).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].template, TemplateKind::Modern);
        assert_eq!(listing[0].updated_at, 5);
    }
}
