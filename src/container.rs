//! the `container.dwar` file handed back to DataWarrior. only the record line
//! and the creation stamp vary; the rest is the fixed skeleton of a minimal
//! .dwar file with one structure column and its 3D coordinates

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use askama::Template;
use chrono::{DateTime, Utc};
use log::{debug, trace, warn};

use crate::errors::ExportError;

/// where the container is written unless configured otherwise, relative to the
/// current directory
pub const DEFAULT_OUTPUT: &str = "container.dwar";

/// the view configuration following the data row. DataWarrior only needs this
/// to open the file, so it is copied verbatim
pub const FOOTER: &str = include_str!("../templates/footer.dwar");

/// file info and column properties preceding the data row
#[derive(Template)]
#[template(path = "header.dwar", escape = "none")]
pub struct Header {
    /// seconds since the Unix epoch
    pub created: i64,
}

#[derive(Template)]
#[template(path = "container.dwar", escape = "none")]
pub struct ContainerDocument {
    created: i64,
    record: String,
}

impl ContainerDocument {
    pub fn new(record: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            created: created.timestamp(),
            record: record.into(),
        }
    }

    pub fn render(&self) -> Result<String, ExportError> {
        Ok(Template::render(self)?)
    }

    /// render `self` and replace the file at `path` with the result. the text
    /// goes to a sibling temporary file first and is only renamed over `path`
    /// once it is completely on disk, so a failure leaves any previous file
    /// untouched
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let contents = self.render()?;
        let tmp = temp_path(path);

        trace!("writing {} bytes to {}", contents.len(), tmp.display());
        if let Err(e) = write_synced(&tmp, contents.as_bytes()) {
            discard(&tmp);
            return Err(ExportError::io(path, e));
        }

        debug!("replacing {} with {}", path.display(), tmp.display());
        if let Err(e) = fs::rename(&tmp, path) {
            discard(&tmp);
            return Err(ExportError::io(path, e));
        }

        Ok(())
    }
}

/// `container.dwar` -> `container.dwar.<pid>.tmp`. concurrent runs each get
/// their own file and the last rename wins
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}

fn discard(tmp: &Path) {
    if let Err(e) = fs::remove_file(tmp) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!("failed to remove {}: {e}", tmp.display());
        }
    }
}
