use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::NotesServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNote {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl CreateNote {
    pub fn validate(&self) -> Result<(), NotesServiceError> {
        if self.title.trim().is_empty() {
            return Err(NotesServiceError::BadRequest(
                "Note title must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg_attr(feature = "test-support", mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Note>, NotesServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, NotesServiceError>;
    async fn create(&self, note: CreateNote) -> Result<Note, NotesServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), NotesServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_rejected() {
        let note = CreateNote {
            title: "   ".to_string(),
            body: "text".to_string(),
        };
        assert!(matches!(
            note.validate(),
            Err(NotesServiceError::BadRequest(_))
        ));
    }

    #[test]
    fn body_is_optional() {
        let note: CreateNote = serde_json::from_str(r#"{"title":"groceries"}"#).unwrap();
        assert!(note.validate().is_ok());
        assert!(note.body.is_empty());
    }
}
