pub mod json;
pub mod text;

use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes `contents` to `path`, creating parent directories, or to stdout
/// when no path is given.
pub fn write_output(path: Option<&Path>, contents: &str) -> std::io::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, contents)?;
            tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                lock.write_all(b"\n")?;
            }
            lock.flush()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
