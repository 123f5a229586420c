//! Field rules for create and update payloads.
//!
//! Every rule is checked independently so a single response lists all
//! problems with a payload. A successful check produces a typed value
//! the server can apply without looking at the raw input again.

use crate::http::CreateVideoInput;
use crate::http::FieldError;
use crate::http::Loose;
use crate::http::UpdateVideoInput;
use crate::models::Resolution;

pub const TITLE_MAX_LEN: usize = 40;
pub const AUTHOR_MAX_LEN: usize = 20;
pub const MIN_AGE_RESTRICTION_MAX: i64 = 18;

/// A checked create payload.
#[derive(Clone, Debug, PartialEq)]
pub struct NewVideo {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
}

/// A checked update payload, ready to merge into a stored video.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoPatch {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
    pub can_be_downloaded: bool,
    /// `None` keeps the stored value.
    pub min_age_restriction: Option<u8>,
    /// `None` keeps the stored value.
    pub publication_date: Option<String>,
}

pub fn validate_create(input: &CreateVideoInput) -> Result<NewVideo, Vec<FieldError>> {
    let mut errors = vec![];
    let title = check_text(&input.title, TITLE_MAX_LEN, "title", &mut errors);
    let author = check_text(&input.author, AUTHOR_MAX_LEN, "author", &mut errors);
    let available_resolutions = check_resolutions(&input.available_resolutions, &mut errors);

    match (title, author) {
        (Some(title), Some(author)) if errors.is_empty() => Ok(NewVideo {
            title,
            author,
            available_resolutions,
        }),
        _ => Err(errors),
    }
}

pub fn validate_update(input: &UpdateVideoInput) -> Result<VideoPatch, Vec<FieldError>> {
    let mut errors = vec![];
    let title = check_text(&input.title, TITLE_MAX_LEN, "title", &mut errors);
    let author = check_text(&input.author, AUTHOR_MAX_LEN, "author", &mut errors);
    let available_resolutions = check_resolutions(&input.available_resolutions, &mut errors);

    // null and absent both mean "not downloadable"
    let can_be_downloaded = match &input.can_be_downloaded {
        None => false,
        Some(Loose::Typed(value)) => *value,
        Some(Loose::Other(_)) => {
            errors.push(FieldError::invalid("canBeDownloaded"));
            false
        }
    };

    let min_age_restriction = match &input.min_age_restriction {
        None => None,
        Some(Loose::Typed(age)) if (0..=MIN_AGE_RESTRICTION_MAX).contains(age) => {
            u8::try_from(*age).ok()
        }
        Some(_) => {
            errors.push(FieldError::invalid("minAgeRestriction"));
            None
        }
    };

    let publication_date = match &input.publication_date {
        None => None,
        Some(Loose::Typed(date)) if date.is_empty() => None,
        Some(Loose::Typed(date)) => Some(date.clone()),
        Some(Loose::Other(_)) => {
            errors.push(FieldError::invalid("publicationDate"));
            None
        }
    };

    match (title, author) {
        (Some(title), Some(author)) if errors.is_empty() => Ok(VideoPatch {
            title,
            author,
            available_resolutions,
            can_be_downloaded,
            min_age_restriction,
            publication_date,
        }),
        _ => Err(errors),
    }
}

/// Returns the value as sent when its trimmed form is between 1 and
/// `max_len` characters.
fn check_text(
    value: &Option<Loose<String>>,
    max_len: usize,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if let Some(Loose::Typed(text)) = value {
        let len = text.trim().chars().count();
        if len > 0 && len <= max_len {
            return Some(text.clone());
        }
    }
    errors.push(FieldError::invalid(field));
    None
}

/// Anything other than a non-empty array counts as "no resolutions".
/// Each unknown element in an array adds its own error.
fn check_resolutions(
    value: &Option<Loose<Vec<Loose<Resolution>>>>,
    errors: &mut Vec<FieldError>,
) -> Vec<Resolution> {
    let Some(Loose::Typed(items)) = value else {
        return vec![];
    };
    let mut resolutions = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Loose::Typed(resolution) => resolutions.push(*resolution),
            Loose::Other(_) => errors.push(FieldError::invalid("availableResolutions")),
        }
    }
    resolutions
}
