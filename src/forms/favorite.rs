use serde::Deserialize;

/// One entry of the `POST /favorites` body: `[{"_id": "<hotelsite id>"}]`.
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteItem {
    #[serde(rename = "_id")]
    pub id: String,
}
