use std::path::PathBuf;

/// Paths chosen in a native file dialog, sent back from the dialog thread.
pub enum DialogResult {
    Open(PathBuf),
    Save(PathBuf),
}
