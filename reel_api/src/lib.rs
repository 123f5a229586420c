pub mod http;
pub mod models;
pub mod prelude;
pub mod validation;

#[cfg(feature = "client")]
pub use http::ReelApi;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;

pub const SERVER_URL: &'static str = "http://127.0.0.1:3000";

/// Render a timestamp the way it appears on the wire, e.g.
/// `2023-10-19T12:50:41.242Z`.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
