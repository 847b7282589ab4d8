use std::sync::Arc;

use envelope::Responder;

use crate::domain::note::NoteRepository;

pub struct NotesAppState {
    pub note_repo: Arc<dyn NoteRepository>,
    pub responder: Arc<Responder>,
}
