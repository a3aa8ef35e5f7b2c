//! One-time loading of the model and encoder artifacts.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::artifact::{AssetLayout, read_artifact};
use crate::encoder::{CategoricalEncoder, GenderEncoder};
use crate::error::{ArtifactError, ConfigurationError};
use crate::model::ShoeSizeModel;

/// Shared, read-only regression model.
pub type ModelHandle = Arc<ShoeSizeModel>;
/// Shared, read-only gender encoder.
pub type EncoderHandle = Arc<GenderEncoder>;

/// Loads both artifacts on first use and hands out the cached handles after that.
///
/// The lock is held for the whole first load, so concurrent first callers wait
/// for a single read instead of racing. Failures are not cached.
#[derive(Debug)]
pub struct ModelLoader {
    layout: AssetLayout,
    cached: Mutex<Option<(ModelHandle, EncoderHandle)>>,
    reads: AtomicUsize,
}

impl ModelLoader {
    pub fn new(layout: AssetLayout) -> Self {
        Self {
            layout,
            cached: Mutex::new(None),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    /// Number of artifact files read from storage so far.
    pub fn artifact_reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn load(&self) -> Result<(ModelHandle, EncoderHandle), ConfigurationError> {
        // The cache only ever holds a fully built pair, so a poisoned lock is still usable.
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((model, encoder)) = cached.as_ref() {
            debug!("using cached artifacts");
            return Ok((Arc::clone(model), Arc::clone(encoder)));
        }

        let (model, encoder) = self.load_from_storage().inspect_err(|err| {
            warn!(error = %err, "artifact loading failed");
        })?;
        let handles = (Arc::new(model), Arc::new(encoder));
        *cached = Some((Arc::clone(&handles.0), Arc::clone(&handles.1)));
        Ok(handles)
    }

    fn load_from_storage(&self) -> Result<(ShoeSizeModel, GenderEncoder), ConfigurationError> {
        let layout = &self.layout;
        if !layout.dir.is_dir() {
            return Err(ConfigurationError::MissingAssetDirectory(layout.dir.clone()));
        }

        let model_path = layout.model_path();
        if !model_path.is_file() {
            return Err(ConfigurationError::MissingModelArtifact(model_path));
        }
        let model: ShoeSizeModel = self.read(&model_path)?;

        let encoder_path = layout.encoder_path();
        if !encoder_path.is_file() {
            return Err(ConfigurationError::MissingEncoderArtifact(encoder_path));
        }
        let encoder: GenderEncoder = self.read(&encoder_path)?;
        if !encoder.is_well_formed() {
            return Err(ConfigurationError::Deserialization {
                path: encoder_path,
                source: ArtifactError::Invalid("encoder classes must be non-empty and sorted"),
            });
        }

        info!(
            model = %model_path.display(),
            encoder = %encoder_path.display(),
            classes = ?encoder.classes(),
            intercept = model.intercept(),
            "loaded shoe size artifacts"
        );
        Ok((model, encoder))
    }

    fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<T, ConfigurationError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        read_artifact(path).map_err(|source| ConfigurationError::Deserialization {
            path: path.to_path_buf(),
            source,
        })
    }
}
