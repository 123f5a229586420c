use anyhow::Result;
use axum::http::StatusCode;
use axum_test::TestServer;
use nanoid::nanoid;
use reel_api::prelude::*;
use serde_json::Value;
use serde_json::json;

use super::ReelState;
use super::VideoStore;
use super::build_server;

/// A server listening on an ephemeral port plus a client pointed at it.
pub struct ReelTestState {
    pub url: String,
    pub api: ReelApi,
    pub state: ReelState,
}

impl ReelTestState {
    pub async fn new() -> Result<Self> {
        let state = ReelState::new(VideoStore::seeded());
        let app = build_server(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?.to_string();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let url = format!("http://{}", addr);
        Ok(Self {
            api: ReelApi::new(url.clone())?,
            url,
            state,
        })
    }

    /// Create a video with a random title and author.
    pub async fn create(&self, resolutions: &[Resolution]) -> Result<Video> {
        let input = CreateVideoInput::new(&nanoid!(12), &nanoid!(8), resolutions);
        self.api.create_video(&input).await
    }
}

fn in_process() -> Result<TestServer> {
    TestServer::new(build_server(ReelState::new(VideoStore::seeded())))
}

fn error_fields(body: &Value) -> Vec<String> {
    body["errorsMessages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn lists_seed_record_on_start() -> Result<()> {
    let server = in_process()?;
    let response = server.get("/videos").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<Video>>(), vec![Video::seed()]);
    Ok(())
}

#[tokio::test]
async fn create_returns_created_record() -> Result<()> {
    let server = in_process()?;
    let response = server
        .post("/videos")
        .json(&json!({
            "title": "Intro to ownership",
            "author": "ferris",
            "availableResolutions": ["P720"],
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Intro to ownership");
    assert_eq!(body["canBeDownloaded"], false);
    assert_eq!(body["minAgeRestriction"], Value::Null);
    assert_eq!(body["availableResolutions"], json!(["P720"]));
    Ok(())
}

#[tokio::test]
async fn create_rejects_unknown_resolution() -> Result<()> {
    let server = in_process()?;
    let response = server
        .post("/videos")
        .json(&json!({
            "title": "t",
            "author": "a",
            "availableResolutions": ["P144", "BOGUS"],
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(error_fields(&body), vec!["availableResolutions"]);
    assert_eq!(
        body["errorsMessages"][0]["message"],
        "Invalid availableResolutions"
    );

    // nothing was stored
    let videos = server.get("/videos").await.json::<Vec<Video>>();
    assert_eq!(videos.len(), 1);
    Ok(())
}

#[tokio::test]
async fn create_accepts_empty_resolutions() -> Result<()> {
    let server = in_process()?;
    let response = server
        .post("/videos")
        .json(&json!({"title": "t", "author": "a", "availableResolutions": []}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert!(response.json::<Video>().available_resolutions.is_empty());
    Ok(())
}

#[tokio::test]
async fn create_lists_every_bad_field() -> Result<()> {
    let server = in_process()?;
    let response = server
        .post("/videos")
        .json(&json!({"title": 5, "availableResolutions": ["x", "y"]}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_fields(&response.json::<Value>()),
        vec!["title", "author", "availableResolutions", "availableResolutions"]
    );
    Ok(())
}

#[tokio::test]
async fn non_numeric_ids_are_not_found() -> Result<()> {
    let server = in_process()?;
    assert_eq!(
        server.get("/videos/abc").await.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        server.delete("/videos/-1").await.status_code(),
        StatusCode::NOT_FOUND
    );
    let response = server
        .put("/videos/abc")
        .json(&json!({"title": "t", "author": "a"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().is_empty());
    Ok(())
}

#[tokio::test]
async fn update_missing_id_is_not_found_even_when_invalid() -> Result<()> {
    let server = in_process()?;
    let response = server
        .put("/videos/999")
        .json(&json!({"title": "", "minAgeRestriction": 99}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_null_download_flag_stores_false() -> Result<()> {
    let server = in_process()?;
    let response = server
        .put("/videos/0")
        .json(&json!({
            "title": "t",
            "author": "a",
            "availableResolutions": ["P1080"],
            "canBeDownloaded": null,
            "minAgeRestriction": null,
            "publicationDate": "",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let video = server.get("/videos/0").await.json::<Video>();
    assert!(!video.can_be_downloaded);
    assert_eq!(video.min_age_restriction, None);
    assert_eq!(video.publication_date, Video::seed().publication_date);
    assert_eq!(video.available_resolutions, vec![Resolution::P1080]);
    Ok(())
}

#[tokio::test]
async fn update_rejects_bad_types() -> Result<()> {
    let server = in_process()?;
    let response = server
        .put("/videos/0")
        .json(&json!({
            "title": "t",
            "author": "a",
            "canBeDownloaded": "no",
            "minAgeRestriction": 19,
            "publicationDate": 1,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_fields(&response.json::<Value>()),
        vec!["canBeDownloaded", "minAgeRestriction", "publicationDate"]
    );

    // the stored record is untouched
    let video = server.get("/videos/0").await.json::<Video>();
    assert_eq!(video, Video::seed());
    Ok(())
}

#[tokio::test]
async fn both_delete_all_routes_clear_the_store() -> Result<()> {
    for path in ["/testing/all-data", "/videos"] {
        let server = in_process()?;
        let response = server.delete(path).await;
        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

        let response = server.get("/videos").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>(), json!([]));
    }
    Ok(())
}
