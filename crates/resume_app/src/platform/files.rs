use std::fs;
use std::io;
use std::path::Path;

use resume_core::SelectedFile;

/// Reads a resume from disk. The file is sent as-is; no type or size checks.
pub(crate) fn load_resume(path: &Path) -> io::Result<SelectedFile> {
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(SelectedFile::new(name, bytes))
}
