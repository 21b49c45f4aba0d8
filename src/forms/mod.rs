pub mod comment;
pub mod favorite;
pub mod hotelsite;

pub use comment::CommentForm;
pub use favorite::FavoriteItem;
pub use hotelsite::{HotelsiteFilter, HotelsiteForm, HotelsitePatch};
