//! Newline-delimited domain list files.
//!
//! Writes go to a temporary file next to the target which is then renamed over
//! it, so readers only ever see the old or the new list.

use ferrous_route_application::ports::DomainListStore;
use ferrous_route_domain::DomainError;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

#[derive(Debug, Default, Clone, Copy)]
pub struct FileDomainListStore;

impl FileDomainListStore {
    pub fn new() -> Self {
        Self
    }
}

impl DomainListStore for FileDomainListStore {
    fn load_domain_list(&self, path: &Path) -> Result<Vec<String>, DomainError> {
        load_domain_list(path)
    }

    fn store_domain_list(&self, path: &Path, names: Vec<String>) -> Result<(), DomainError> {
        store_domain_list(path, names)
    }
}

pub fn load_domain_list(path: &Path) -> Result<Vec<String>, DomainError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Domain list not found, treating as empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to open domain list");
            return Err(DomainError::io(path.display().to_string(), e));
        }
    };

    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    let mut line_no = 0usize;
    let mut domains = Vec::new();
    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to read domain list");
            DomainError::io(path.display().to_string(), e)
        })?;
        if read == 0 {
            break;
        }
        line_no += 1;

        // A bad line only loses itself; the rest of the list is kept.
        let Ok(text) = std::str::from_utf8(&line) else {
            warn!(path = %path.display(), line = line_no, "Skipping non UTF-8 line in domain list");
            continue;
        };
        let domain = text.trim();
        if domain.is_empty() {
            continue;
        }
        domains.push(domain.to_string());
    }

    debug!(path = %path.display(), domains = domains.len(), "Domain list loaded");
    Ok(domains)
}

pub fn store_domain_list(path: &Path, mut names: Vec<String>) -> Result<(), DomainError> {
    names.sort_unstable();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            error!(dir = %parent.display(), error = %e, "Failed to create domain list directory");
            DomainError::io(parent.display().to_string(), e)
        })?;
    }

    let tmp_path = temp_path_for(path);
    if let Err(e) = write_lines(&tmp_path, &names) {
        error!(path = %tmp_path.display(), error = %e, "Failed to write temporary domain list");
        let _ = fs::remove_file(&tmp_path);
        return Err(DomainError::io(tmp_path.display().to_string(), e));
    }

    if let Err(e) = replace(&tmp_path, path) {
        error!(path = %path.display(), error = %e, "Failed to replace domain list");
        let _ = fs::remove_file(&tmp_path);
        return Err(DomainError::io(path.display().to_string(), e));
    }

    debug!(path = %path.display(), domains = names.len(), "Domain list stored");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "domains".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}

fn write_lines(path: &Path, names: &[String]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for name in names {
        writer.write_all(name.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

fn replace(from: &Path, to: &Path) -> std::io::Result<()> {
    // Windows refuses to rename onto an existing file.
    #[cfg(windows)]
    match fs::remove_file(to) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e),
        _ => {}
    }
    fs::rename(from, to)
}
