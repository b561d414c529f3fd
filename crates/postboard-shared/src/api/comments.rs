use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Body of `POST /api/comments`.
///
/// Missing and `null` fields both become an empty string so they are
/// reported as field errors instead of a deserialization failure.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Post is required"))]
    pub post: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListCommentsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
}
