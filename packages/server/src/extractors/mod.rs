pub mod json;
pub mod multipart;
pub mod path;
pub mod query;
mod rejection;
