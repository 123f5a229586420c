use anyhow::Result;
use reqwest::Response;
use reqwest::StatusCode;

use super::types::*;
use crate::SERVER_URL;
use crate::models::Video;

#[derive(Clone, Debug)]
pub struct ReelApi {
    pub url: String,
}

impl Default for ReelApi {
    fn default() -> Self {
        Self {
            url: SERVER_URL.to_string(),
        }
    }
}

impl ReelApi {
    pub fn new(url: String) -> Result<Self> {
        Ok(Self { url })
    }

    pub fn video_url(&self, id: u64) -> String {
        format!("{}/videos/{id}", self.url)
    }

    pub async fn list_videos(&self) -> Result<Vec<Video>> {
        let response = reqwest::Client::new()
            .get(format!("{}/videos", self.url))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(failure(response).await)
        }
    }

    /// Fetch a single video. A missing id is `Ok(None)`.
    pub async fn get_video(&self, id: u64) -> Result<Option<Video>> {
        let response = reqwest::Client::new()
            .get(self.video_url(id))
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            _ => Err(failure(response).await),
        }
    }

    /// Create a video. Validation failures come back as an
    /// [`ApiErrorResult`] that can be recovered with `downcast_ref`.
    pub async fn create_video(&self, request: &CreateVideoInput) -> Result<Video> {
        let response = reqwest::Client::new()
            .post(format!("{}/videos", self.url))
            .json(request)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(failure(response).await)
        }
    }

    pub async fn update_video(&self, id: u64, request: &UpdateVideoInput) -> Result<()> {
        let response = reqwest::Client::new()
            .put(self.video_url(id))
            .json(request)
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => anyhow::bail!("video {id} not found"),
            status if status.is_success() => Ok(()),
            _ => Err(failure(response).await),
        }
    }

    pub async fn delete_video(&self, id: u64) -> Result<()> {
        let response = reqwest::Client::new()
            .delete(self.video_url(id))
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => anyhow::bail!("video {id} not found"),
            status if status.is_success() => Ok(()),
            _ => Err(failure(response).await),
        }
    }

    /// Wipe every video on the server.
    pub async fn delete_all(&self) -> Result<()> {
        let response = reqwest::Client::new()
            .delete(format!("{}/testing/all-data", self.url))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(failure(response).await)
        }
    }
}

async fn failure(response: Response) -> anyhow::Error {
    let status = response.status();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return e.into(),
    };
    if status == StatusCode::BAD_REQUEST
        && let Ok(errors) = serde_json::from_str::<ApiErrorResult>(&text)
    {
        return errors.into();
    }
    log::debug!("request failed with status {status}");
    anyhow::anyhow!("{status}: {text}")
}
