//! HTTP transport for team submissions (`POST /api/teams/create-team`).

use crate::logic::{ApiFailure, TeamApi};
use crate::models::NewTeam;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Path of the team creation endpoint.
pub const CREATE_TEAM_PATH: &str = "/api/teams/create-team";

/// Sends teams to a running server as JSON.
#[derive(Debug, Clone)]
pub struct HttpTeamApi {
    client: Client,
    base_url: String,
}

/// Both success and error responses carry `message`.
#[derive(Debug, Default, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

impl HttpTeamApi {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent("esports-arena-web/0.1")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CREATE_TEAM_PATH)
    }
}

#[async_trait]
impl TeamApi for HttpTeamApi {
    async fn create_team(&self, team: &NewTeam) -> Result<String, ApiFailure> {
        let url = self.endpoint();
        let response = self
            .client
            .post(&url)
            .json(team)
            .send()
            .await
            .map_err(|e| {
                log::error!("Network error for {url}: {e}");
                ApiFailure::default()
            })?;
        let status = response.status();
        // A body that is not JSON just means there is no message to show.
        let body: MessageBody = response.json().await.unwrap_or_default();
        if status.is_success() {
            Ok(body.message.unwrap_or_default())
        } else {
            log::warn!("Team creation rejected by {url}: {status}");
            Err(ApiFailure {
                message: body.message,
            })
        }
    }
}
