/**
 * Post Data Structures
 *
 * Posts as the API returns them (with the author and commenters already
 * resolved into user summaries) and the request bodies used to create posts
 * and comments.
 *
 * Request bodies validate themselves before any database work happens, so the
 * handlers only have to deal with existence and ownership checks.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::user::UserSummary;

/// Longest accepted post text, in characters
pub const MAX_POST_LENGTH: usize = 5000;

/// Longest accepted comment text, in characters
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// A comment with its author resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentView {
    pub id: Uuid,
    pub text: String,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
}

/// A post with its author, comments and likes resolved
///
/// `likes` holds the ids of the liking users in the order the likes were
/// given. `comments` are in the order they were written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostView {
    pub id: Uuid,
    pub user: UserSummary,
    pub text: Option<String>,
    pub img: Option<String>,
    pub likes: Vec<Uuid>,
    pub comments: Vec<CommentView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/posts`
///
/// `img` is whatever the image store accepts for upload: a data URI or a
/// remote URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
}

impl CreatePostRequest {
    /// Drop empty strings and check that something is left to post
    ///
    /// Returns the text and image to store.
    pub fn into_parts(self) -> Result<(Option<String>, Option<String>), SharedError> {
        let text = non_empty(self.text);
        let img = non_empty(self.img);

        if text.is_none() && img.is_none() {
            return Err(SharedError::validation("text", "Post must have text or image"));
        }
        if let Some(text) = &text {
            if text.chars().count() > MAX_POST_LENGTH {
                return Err(SharedError::validation(
                    "text",
                    format!("Post text must be at most {} characters", MAX_POST_LENGTH),
                ));
            }
        }

        Ok((text, img))
    }
}

/// Body of `POST /api/posts/{id}/comment`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl CommentRequest {
    /// The comment text, if it is present, non-empty and short enough
    pub fn into_text(self) -> Result<String, SharedError> {
        let text = non_empty(self.text)
            .ok_or_else(|| SharedError::validation("text", "Text field is required"))?;

        if text.chars().count() > MAX_COMMENT_LENGTH {
            return Err(SharedError::validation(
                "text",
                format!("Comment must be at most {} characters", MAX_COMMENT_LENGTH),
            ));
        }

        Ok(text)
    }
}

/// Plain acknowledgement body, e.g. `{"message": "Post deleted successfully"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_requires_text_or_image() {
        let request = CreatePostRequest {
            text: Some(String::new()),
            img: None,
        };
        let err = request.into_parts().unwrap_err();
        assert_eq!(err.detail(), "Post must have text or image");
    }

    #[test]
    fn test_post_with_image_only() {
        let request = CreatePostRequest {
            text: None,
            img: Some("data:image/png;base64,AAAA".to_string()),
        };
        let (text, img) = request.into_parts().unwrap();
        assert!(text.is_none());
        assert!(img.is_some());
    }

    #[test]
    fn test_post_text_too_long() {
        let request = CreatePostRequest {
            text: Some("a".repeat(MAX_POST_LENGTH + 1)),
            img: None,
        };
        assert!(request.into_parts().is_err());
    }

    #[test]
    fn test_comment_requires_text() {
        assert!(CommentRequest { text: None }.into_text().is_err());
        assert!(CommentRequest { text: Some(String::new()) }.into_text().is_err());
        assert_eq!(
            CommentRequest { text: Some("nice".to_string()) }.into_text().unwrap(),
            "nice"
        );
    }

    #[test]
    fn test_comment_length_counts_characters() {
        let text = "é".repeat(MAX_COMMENT_LENGTH);
        assert!(CommentRequest { text: Some(text) }.into_text().is_ok());
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: CreatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());
        assert!(request.img.is_none());
    }
}
