//! Persisted overlay geometry.
//!
//! Two screen coordinates, read once when the overlay opens and written on
//! every move event so the dialog reopens where the user last dragged it.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(String),
}

/// Last known dialog position, in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayGeometry {
    pub frame_x: i32,
    pub frame_y: i32,
}

/// Store the session writes through on move events. The configuration
/// collaborator is external; this trait is its narrow contract.
pub trait GeometryStore: Send + Sync {
    fn geometry(&self) -> OverlayGeometry;
    fn set_geometry(&self, geometry: OverlayGeometry);
}

/// TOML-file-backed store.
///
/// A missing file yields the default geometry. Writes persist immediately
/// but are best-effort: a failed save keeps the in-memory value and logs,
/// so a read-only config dir cannot break the overlay.
#[derive(Debug)]
pub struct FileGeometryStore {
    path: PathBuf,
    current: Mutex<OverlayGeometry>,
}

impl FileGeometryStore {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let current = match fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => OverlayGeometry::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            current: Mutex::new(current),
        })
    }

    fn save(&self, geometry: OverlayGeometry) {
        // OverlayGeometry always serializes; only the write can fail.
        let text = match toml::to_string(&geometry) {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "geometry serialize failed");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, text) {
            debug!(error = %e, path = %self.path.display(), "geometry save failed");
        }
    }
}

impl GeometryStore for FileGeometryStore {
    fn geometry(&self) -> OverlayGeometry {
        *self.current.lock().unwrap()
    }

    fn set_geometry(&self, geometry: OverlayGeometry) {
        *self.current.lock().unwrap() = geometry;
        self.save(geometry);
    }
}
