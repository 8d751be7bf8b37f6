//! Filesystem side of a generation run.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{CodegenError, Result};
use crate::GeneratedFile;

/// Read a file, treating a missing file as empty.
pub fn read_if_exists(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist, starting empty", path.display());
            Ok(String::new())
        }
        Err(e) => Err(CodegenError::io(path, e)),
    }
}

/// Write `file`, creating its parent directories first.
pub fn write_file(file: &GeneratedFile) -> Result<()> {
    if let Some(parent) = file.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CodegenError::io(parent, e))?;
        }
    }
    std::fs::write(&file.path, &file.content).map_err(|e| CodegenError::io(&file.path, e))?;
    debug!("wrote {}", file.path.display());
    Ok(())
}

/// Write files in order. Stops at the first failure; files already written stay.
pub fn write_all(files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        write_file(file)?;
    }
    Ok(())
}
