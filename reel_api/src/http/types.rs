use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::models::Resolution;

/// A request field that may not hold the type we asked for. Validation
/// reports `Other` values as field errors instead of rejecting the whole
/// body at deserialization time.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum Loose<T> {
    Typed(T),
    Other(serde_json::Value),
}

impl<T> From<T> for Loose<T> {
    fn from(value: T) -> Self {
        Loose::Typed(value)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_resolutions: Option<Loose<Vec<Loose<Resolution>>>>,
}

impl CreateVideoInput {
    pub fn new(title: &str, author: &str, available_resolutions: &[Resolution]) -> Self {
        Self {
            title: Some(title.to_string().into()),
            author: Some(author.to_string().into()),
            available_resolutions: Some(resolution_list(available_resolutions)),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Loose<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_resolutions: Option<Loose<Vec<Loose<Resolution>>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_be_downloaded: Option<Loose<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age_restriction: Option<Loose<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<Loose<String>>,
}

impl UpdateVideoInput {
    pub fn new(title: &str, author: &str, available_resolutions: &[Resolution]) -> Self {
        Self {
            title: Some(title.to_string().into()),
            author: Some(author.to_string().into()),
            available_resolutions: Some(resolution_list(available_resolutions)),
            ..Default::default()
        }
    }

    pub fn can_be_downloaded(mut self, can_be_downloaded: bool) -> Self {
        self.can_be_downloaded = Some(can_be_downloaded.into());
        self
    }

    pub fn min_age_restriction(mut self, min_age_restriction: i64) -> Self {
        self.min_age_restriction = Some(min_age_restriction.into());
        self
    }

    pub fn publication_date(mut self, publication_date: &str) -> Self {
        self.publication_date = Some(publication_date.to_string().into());
        self
    }
}

fn resolution_list(resolutions: &[Resolution]) -> Loose<Vec<Loose<Resolution>>> {
    Loose::Typed(resolutions.iter().copied().map(Loose::Typed).collect())
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
    pub field: String,
}

impl FieldError {
    pub fn invalid(field: &str) -> Self {
        Self {
            message: format!("Invalid {field}"),
            field: field.to_string(),
        }
    }
}

/// Body of every 400 response.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResult {
    pub errors_messages: Vec<FieldError>,
}

impl ApiErrorResult {
    pub fn fields(&self) -> Vec<&str> {
        self.errors_messages
            .iter()
            .map(|e| e.field.as_str())
            .collect()
    }
}

impl From<Vec<FieldError>> for ApiErrorResult {
    fn from(errors_messages: Vec<FieldError>) -> Self {
        Self { errors_messages }
    }
}

impl fmt::Display for ApiErrorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .errors_messages
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join(", "))
    }
}

impl std::error::Error for ApiErrorResult {}
