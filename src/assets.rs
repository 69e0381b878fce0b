//! Image inventory backing both scenes. Layouts address images by index and
//! the library wraps indices around, so any non-empty set of images fills any
//! layout size.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset library needs at least one image")]
    EmptyLibrary,
    #[error("failed to scan asset directory {}", .dir.display())]
    Scan {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub usize);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub id: AssetId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AssetLibrary {
    images: Vec<ImageAsset>,
}

impl AssetLibrary {
    /// Builds a library from image names. Rejects an empty list so layouts
    /// never have to special-case a missing image.
    pub fn from_names<I, S>(names: I) -> Result<Self, AssetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<ImageAsset> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| ImageAsset {
                id: AssetId(i),
                name: name.into(),
            })
            .collect();
        if images.is_empty() {
            return Err(AssetError::EmptyLibrary);
        }
        Ok(Self { images })
    }

    /// Collects `*.jpg` / `*.jpeg` / `*.png` file names from `dir`, sorted
    /// for a stable ordering across platforms.
    pub fn scan_dir(dir: &Path) -> Result<Self, AssetError> {
        let entries = std::fs::read_dir(dir).map_err(|source| AssetError::Scan {
            dir: dir.to_path_buf(),
            source,
        })?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| AssetError::Scan {
                dir: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let is_image = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| matches!(e.to_ascii_lowercase().as_str(), "jpg" | "jpeg" | "png"))
                .unwrap_or(false);
            if is_image {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Self::from_names(names)
    }

    /// Numbered stand-in images for running without any real files.
    pub fn placeholder(count: usize) -> Result<Self, AssetError> {
        Self::from_names((1..=count).map(|i| format!("img{i}.jpg")))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image for a layout index; wraps past the end of the library.
    pub fn cyclic(&self, index: usize) -> &ImageAsset {
        &self.images[index % self.images.len()]
    }

    pub fn get(&self, id: AssetId) -> Option<&ImageAsset> {
        self.images.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageAsset> {
        self.images.iter()
    }
}
