//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// The `post` fields of a create or update request.
///
/// Missing fields deserialize as empty strings so they fail presence
/// validation instead of being rejected as malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// JSON body: `{"post": {"title": "...", "description": "..."}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostParams {
    pub post: PostFields,
}

/// Urlencoded body: `post[title]=...&post[description]=...`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostFormParams {
    #[serde(rename = "post[title]", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "post[description]", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PostFormParams {
    /// The equivalent JSON params, or `None` when the body carries no
    /// `post[...]` key at all.
    pub fn into_params(self) -> Option<PostParams> {
        if self.title.is_none() && self.description.is_none() {
            return None;
        }
        Some(PostParams {
            post: PostFields {
                title: self.title.unwrap_or_default(),
                description: self.description.unwrap_or_default(),
            },
        })
    }
}

/// A persisted post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Data needed to render the new/edit form for a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostFormResponse {
    /// Where the form submits to.
    pub action: String,
    /// HTTP method the form submits with.
    pub method: String,
    pub post: PostFields,
}
