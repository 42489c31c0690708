//! Typed HTTP client for the leaderboard service.

use anyhow::Result;
use snapgrid_server::{ErrorBody, LeaderboardPage, LeaderboardRow, SubmitRequest, SubmittedEntry};
use tracing::{debug, info, instrument, warn};

/// Typed client over the leaderboard REST API.
///
/// Shares the wire types with the service, so both sides agree on the JSON
/// shape by construction.
#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    base_url: String,
    client: reqwest::Client,
}

impl LeaderboardClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// A trailing slash on the URL is dropped so path joining stays uniform.
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the ranked top of the board, best run first.
    #[instrument(skip(self))]
    pub async fn fetch_top(&self, limit: i64) -> Result<Vec<LeaderboardRow>> {
        debug!("Fetching leaderboard");
        let url = format!("{}/api/leaderboard?limit={}", self.base_url, limit);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("leaderboard fetch failed: HTTP {}", status);
        }

        let page: LeaderboardPage = response.json().await?;
        debug!(rows = page.entries.len(), "Leaderboard fetched");
        Ok(page.entries)
    }

    /// Submits a completed run and returns the stored entry.
    ///
    /// A rejection surfaces the service's own error message.
    #[instrument(skip_all, fields(name = %request.name, level = request.level))]
    pub async fn submit(&self, request: &SubmitRequest) -> Result<SubmittedEntry> {
        info!("Submitting score");
        let url = format!("{}/api/leaderboard", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            anyhow::bail!("score rejected: {}", message);
        }

        let stored: SubmittedEntry = response.json().await?;
        info!(id = stored.id, "Score stored");
        Ok(stored)
    }

    /// Fires a submission without waiting for it.
    ///
    /// The outcome is logged and otherwise dropped, so an unreachable
    /// service never holds up gameplay.
    #[instrument(skip_all, fields(name = %request.name))]
    pub fn submit_in_background(&self, request: SubmitRequest) {
        let client = self.clone();
        tokio::spawn(async move {
            match client.submit(&request).await {
                Ok(stored) => info!(id = stored.id, "Background submission stored"),
                Err(e) => warn!(error = %e, "Background submission failed"),
            }
        });
    }
}
