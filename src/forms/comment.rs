use crate::models;
use bson::oid::ObjectId;
use serde::Deserialize;
use serde_valid::Validate;

/// Body of comment create/update. There is no author field: the author is
/// always the authenticated caller, whatever the client sends.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct CommentForm {
    #[validate(minimum = 1.0)]
    #[validate(maximum = 5.0)]
    pub rating: Option<f64>,
    #[validate(max_length = 1000)]
    pub text: Option<String>,
}

impl CommentForm {
    pub fn into_comment(self, author: ObjectId) -> models::Comment {
        models::Comment::new(author, self.rating, self.text)
    }

    /// Overwrites only the fields present in the form.
    pub fn update(self, comment: &mut models::Comment) {
        if let Some(rating) = self.rating {
            comment.rating = Some(rating);
        }

        if let Some(text) = self.text {
            comment.text = Some(text);
        }
        comment.updated_at = models::now();
    }
}
