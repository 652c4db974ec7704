use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize)]
pub struct LikesQuery {
    #[serde(deserialize_with = "cafe_id")]
    pub cafe_id: i32,
}

/// Body of `POST /api/like` and `POST /api/unlike`.
#[derive(Debug, Clone, Deserialize)]
pub struct LikeRequest {
    #[serde(deserialize_with = "cafe_id")]
    pub cafe_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LikesResponse {
    pub likes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LikedResponse {
    pub liked: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnlikedResponse {
    pub unliked: i32,
}

/// The browser reads the id out of a hidden input, so it may arrive as a
/// string; query strings always do.
fn cafe_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i32),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid cafe_id: {:?}", s))),
    }
}
