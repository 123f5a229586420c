use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::Resolution;
use crate::format_timestamp;
use crate::validation::NewVideo;
use crate::validation::VideoPatch;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    pub created_at: String,
    pub publication_date: String,
    pub available_resolutions: Vec<Resolution>,
}

impl Video {
    /// Build a freshly created video. Publication is scheduled one day
    /// after creation.
    pub fn create(id: u64, new_video: NewVideo, created_at: DateTime<Utc>) -> Self {
        let publication_date = created_at + Duration::days(1);
        Self {
            id,
            title: new_video.title,
            author: new_video.author,
            can_be_downloaded: false,
            min_age_restriction: None,
            created_at: format_timestamp(&created_at),
            publication_date: format_timestamp(&publication_date),
            available_resolutions: new_video.available_resolutions,
        }
    }

    /// The record every server starts with.
    pub fn seed() -> Self {
        Self {
            id: 0,
            title: "string".to_string(),
            author: "string".to_string(),
            can_be_downloaded: true,
            min_age_restriction: None,
            created_at: "2023-10-19T12:50:41.242Z".to_string(),
            publication_date: "2023-10-19T12:50:41.242Z".to_string(),
            available_resolutions: vec![Resolution::P144],
        }
    }

    /// Merge a validated update into this record. `id` and `created_at`
    /// are never touched.
    pub fn apply(&mut self, patch: VideoPatch) {
        self.title = patch.title;
        self.author = patch.author;
        self.available_resolutions = patch.available_resolutions;
        self.can_be_downloaded = patch.can_be_downloaded;
        if let Some(min_age_restriction) = patch.min_age_restriction {
            self.min_age_restriction = Some(min_age_restriction);
        }
        if let Some(publication_date) = patch.publication_date {
            self.publication_date = publication_date;
        }
    }
}
