//! On-disk layout of the two artifacts and the MessagePack codec used for them.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rmp_serde::encode::write_named;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ArtifactError;

/// Directory the artifacts are resolved from, relative to the working directory.
pub const ASSET_DIR: &str = "assets";
/// Serialized regression model.
pub const MODEL_FILE: &str = "model.pkl";
/// Serialized gender encoder.
pub const ENCODER_FILE: &str = "label_encoder.pkl";

/// Where the loader looks for its artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    pub dir: PathBuf,
    pub model_file: String,
    pub encoder_file: String,
}

impl AssetLayout {
    /// Standard file names inside an arbitrary directory.
    pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            model_file: MODEL_FILE.to_string(),
            encoder_file: ENCODER_FILE.to_string(),
        }
    }

    /// Full path of the serialized regression model.
    pub fn model_path(&self) -> PathBuf {
        self.dir.join(&self.model_file)
    }

    /// Full path of the serialized gender encoder.
    pub fn encoder_path(&self) -> PathBuf {
        self.dir.join(&self.encoder_file)
    }
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::rooted_at(ASSET_DIR)
    }
}

/// Reads and decodes one artifact.
pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let bytes = fs::read(path)?;
    Ok(rmp_serde::from_slice(&bytes)?)
}

/// Encodes an artifact with named fields. Used by training tooling and fixtures.
///
/// The buffer is flushed before returning, so a failed write surfaces here
/// instead of leaving a truncated file behind.
pub fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<(), ArtifactError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_named(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
