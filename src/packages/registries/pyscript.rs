//! PyScript packages API client for the supported packages manifest

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::packages::error::RegistryError;
use crate::packages::registry::ManifestSource;
use crate::packages::types::Manifest;

/// Fetches `all.json` from the PyScript packages static API
pub struct PyscriptManifest {
    client: Client,
    url: String,
}

impl PyscriptManifest {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl ManifestSource for PyscriptManifest {
    async fn fetch_manifest(&self) -> Result<Manifest, RegistryError> {
        debug!("Fetching supported packages: {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("PyScript packages API returned status {}: {}", status, self.url);
            return Err(RegistryError::UnexpectedStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        let Value::Object(manifest) = body else {
            return Err(RegistryError::InvalidResponse(
                "supported packages manifest is not a JSON object".to_string(),
            ));
        };

        debug!("Fetched {} supported packages", manifest.len());

        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_manifest_returns_object_verbatim() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pyscript-packages/api/all.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "numpy": {"version": "1.26.4", "pyodide": true},
                    "Pillow": {"version": "10.2.0"}
                }"#,
            )
            .create_async()
            .await;

        let source = PyscriptManifest::new(
            Client::new(),
            format!("{}/pyscript-packages/api/all.json", server.url()),
        );
        let manifest = source.fetch_manifest().await.unwrap();

        mock.assert_async().await;

        assert_eq!(manifest.len(), 2);
        assert_eq!(
            manifest.get("numpy"),
            Some(&json!({"version": "1.26.4", "pyodide": true}))
        );
        assert!(manifest.contains_key("Pillow"));
        assert!(!manifest.contains_key("pillow"));
    }

    #[tokio::test]
    async fn fetch_manifest_fails_on_server_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/all.json")
            .with_status(503)
            .create_async()
            .await;

        let source = PyscriptManifest::new(Client::new(), format!("{}/all.json", server.url()));
        let result = source.fetch_manifest().await;

        mock.assert_async().await;

        assert!(matches!(
            result,
            Err(RegistryError::UnexpectedStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn fetch_manifest_treats_not_found_as_unexpected_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/all.json")
            .with_status(404)
            .create_async()
            .await;

        let source = PyscriptManifest::new(Client::new(), format!("{}/all.json", server.url()));
        let result = source.fetch_manifest().await;

        mock.assert_async().await;

        assert!(matches!(
            result,
            Err(RegistryError::UnexpectedStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn fetch_manifest_rejects_malformed_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/all.json")
            .with_status(200)
            .with_body("{not json")
            .create_async()
            .await;

        let source = PyscriptManifest::new(Client::new(), format!("{}/all.json", server.url()));
        let result = source.fetch_manifest().await;

        mock.assert_async().await;

        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_manifest_rejects_non_object_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/all.json")
            .with_status(200)
            .with_body(r#"["numpy", "pandas"]"#)
            .create_async()
            .await;

        let source = PyscriptManifest::new(Client::new(), format!("{}/all.json", server.url()));
        let result = source.fetch_manifest().await;

        mock.assert_async().await;

        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }
}
