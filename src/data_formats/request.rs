use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct ArticleQueryParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}

/// Both fields are required; unknown extra fields are ignored.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct NewCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

/// `inc_votes` is kept as a raw JSON value so that a missing field and a
/// non-numeric one both fail validation in the handler, not in the
/// deserializer.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct UpdateVotesRequest {
    pub inc_votes: Option<serde_json::Value>,
}
