pub mod json;
pub mod jwt;
mod object_id;

pub use json::*;
pub use object_id::parse_object_id;
