pub use crate::format_timestamp;
pub use crate::http::*;
pub use crate::models::*;
pub use crate::validation::*;
