//! Like/dislike icons
//!
//! Icons are read once at startup. A failed icon is reported to the caller
//! and stays absent for the rest of the session.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a PNG image: {}", .0.display())]
    InvalidImage(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Like,
    Dislike,
}

impl IconKind {
    pub fn file_name(self) -> &'static str {
        match self {
            IconKind::Like => "like.png",
            IconKind::Dislike => "dislike.png",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconKind::Like => f.write_str("like"),
            IconKind::Dislike => f.write_str("dislike"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub kind: IconKind,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

pub fn load_icon(dir: &Path, kind: IconKind) -> Result<Icon, AssetError> {
    let path = dir.join(kind.file_name());
    if !path.is_file() {
        return Err(AssetError::NotFound(path));
    }

    let bytes = std::fs::read(&path).map_err(|source| AssetError::Io {
        path: path.clone(),
        source,
    })?;

    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(AssetError::InvalidImage(path));
    }

    Ok(Icon { kind, path, bytes })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    pub like: Option<Icon>,
    pub dislike: Option<Icon>,
}

impl IconSet {
    /// Load both icons. Never fails as a whole; every icon that could not
    /// be loaded is returned as an error and left empty.
    pub fn load(dir: &Path) -> (Self, Vec<AssetError>) {
        let mut errors = Vec::new();
        let mut slot = |kind: IconKind| match load_icon(dir, kind) {
            Ok(icon) => {
                tracing::debug!(target: "board::assets", icon = %kind, path = %icon.path.display(), "Icon loaded");
                Some(icon)
            }
            Err(err) => {
                tracing::error!(target: "board::assets", icon = %kind, error = %err, "Icon unavailable");
                errors.push(err);
                None
            }
        };

        let like = slot(IconKind::Like);
        let dislike = slot(IconKind::Dislike);
        (Self { like, dislike }, errors)
    }

    pub fn get(&self, kind: IconKind) -> Option<&Icon> {
        match kind {
            IconKind::Like => self.like.as_ref(),
            IconKind::Dislike => self.dislike.as_ref(),
        }
    }

    pub fn has(&self, kind: IconKind) -> bool {
        self.get(kind).is_some()
    }
}
