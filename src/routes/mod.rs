pub mod comment;
pub mod favorite;
mod fallback;
pub mod health_checks;
pub mod hotelsite;

pub use fallback::fallback;
pub use health_checks::*;
