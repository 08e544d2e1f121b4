mod assembly;
mod release_notes;

pub use assembly::{assemble_changelog, normalize_trailing_newline};
pub use release_notes::{ReleaseNotesInput, ReleaseNotesOperation, ReleaseNotesOutput};
