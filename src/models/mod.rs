mod comment;
mod favorite;
mod hotelsite;
mod user;

pub use comment::*;
pub use favorite::*;
pub use hotelsite::*;
pub use user::*;

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the millisecond precision BSON dates keep.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
