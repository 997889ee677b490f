//! Collaborator assignment dialog.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_collaborators_dialog;
pub use intent::CollaboratorsIntent;
pub use reducer::CollaboratorsReducer;
pub use state::{CollaboratorsDialogState, GitHubUser};
