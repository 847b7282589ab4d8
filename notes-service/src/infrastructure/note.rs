use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::note::{CreateNote, Note, NoteRepository};
use crate::error::NotesServiceError;

/// Process-local note store.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: RwLock<HashMap<Uuid, Note>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn find_all(&self) -> Result<Vec<Note>, NotesServiceError> {
        let mut notes: Vec<Note> = self.notes.read().await.values().cloned().collect();
        notes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(notes)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, NotesServiceError> {
        Ok(self.notes.read().await.get(&id).cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn create(&self, note: CreateNote) -> Result<Note, NotesServiceError> {
        let note = Note {
            id: Uuid::new_v4(),
            title: note.title.trim().to_string(),
            body: note.body,
            created_at: Utc::now(),
        };
        self.notes.write().await.insert(note.id, note.clone());
        tracing::info!(note_id = %note.id, "Note created");
        Ok(note)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), NotesServiceError> {
        match self.notes.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(NotesServiceError::NotFound("Note not found".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_note(title: &str) -> CreateNote {
        CreateNote {
            title: title.to_string(),
            body: String::new(),
        }
    }

    #[tokio::test]
    async fn create_then_find_by_id() {
        let repo = InMemoryNoteRepository::new();
        let created = repo.create(new_note("  groceries ")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created.clone()));
        assert_eq!(created.title, "groceries");
    }

    #[tokio::test]
    async fn find_all_returns_creation_order() {
        let repo = InMemoryNoteRepository::new();
        let first = repo.create(new_note("first")).await.unwrap();
        let second = repo.create(new_note("second")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&first) && all.contains(&second));
        assert!(all[0].created_at <= all[1].created_at);
    }

    #[tokio::test]
    async fn delete_removes_note() {
        let repo = InMemoryNoteRepository::new();
        let created = repo.create(new_note("temp")).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_missing_note_is_not_found() {
        let repo = InMemoryNoteRepository::new();
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(NotesServiceError::NotFound(_))));
    }
}
