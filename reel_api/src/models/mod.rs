mod resolution;
mod video;

pub use resolution::*;
pub use video::*;
