pub mod note_session;
pub mod note_store;
pub mod search;
pub mod task_session;
pub mod task_store;

pub use note_session::NoteSession;
pub use note_store::NoteStore;
pub use task_session::{Phase, TaskSession};
pub use task_store::{StoreError, TaskStore};
