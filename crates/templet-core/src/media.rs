//! Intrinsic size discovery for media objects.
//!
//! Placement needs an object's natural size, which for images, videos and
//! website thumbnails is only known once the media has loaded. Loading is the
//! asynchronous half of insertion; once a loader resolves, placement runs
//! synchronously against the current surface.

use crate::geometry::IntrinsicSize;
use crate::layout::LayoutError;
use crate::storage::BoxFuture;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Media loading errors.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Media not found: {0}")]
    NotFound(String),
    #[error("Unsupported media source: {0}")]
    Unsupported(String),
    #[error("Failed to decode {source_name}: {message}")]
    Decode { source_name: String, message: String },
    #[error("Loader state unavailable: {0}")]
    Poisoned(String),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

fn lock_error(e: impl std::fmt::Display) -> LoadError {
    LoadError::Poisoned(format!("Lock error: {}", e))
}

/// Something that can report the intrinsic size of a media source.
pub trait MediaLoader: Send + Sync {
    fn load_intrinsic_size<'a>(&'a self, source: &'a str) -> BoxFuture<'a, Result<IntrinsicSize, LoadError>>;
}

/// Read the pixel dimensions from encoded image bytes without decoding pixels.
pub fn probe_image_size(name: &str, bytes: &[u8]) -> Result<IntrinsicSize, LoadError> {
    let decode_error = |message: String| LoadError::Decode {
        source_name: name.to_string(),
        message,
    };
    let (width, height) = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .into_dimensions()
        .map_err(|e| decode_error(e.to_string()))?;
    Ok(IntrinsicSize::new(f64::from(width), f64::from(height))?)
}

/// Payload of a base64 `data:` URL, if `source` is one.
fn decode_data_url(source: &str) -> Option<Result<Vec<u8>, LoadError>> {
    use base64::{Engine, engine::general_purpose::STANDARD};

    let rest = source.strip_prefix("data:")?;
    let Some((_, payload)) = rest.split_once(";base64,") else {
        return Some(Err(LoadError::Unsupported("data URL without base64 payload".to_string())));
    };
    Some(STANDARD.decode(payload).map_err(|e| LoadError::Decode {
        source_name: "data URL".to_string(),
        message: e.to_string(),
    }))
}

/// Probes images from the local filesystem or inline `data:` URLs.
///
/// Relative sources resolve against `root`. Video metadata is not probed
/// here; use [`StaticMediaLoader`] with sizes reported by the player.
pub struct FileMediaLoader {
    root: PathBuf,
}

impl FileMediaLoader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn load(&self, source: &str) -> Result<IntrinsicSize, LoadError> {
        if let Some(bytes) = decode_data_url(source) {
            return probe_image_size("data URL", &bytes?);
        }
        if source.contains("://") {
            return Err(LoadError::Unsupported(source.to_string()));
        }
        let path = self.root.join(source);
        let bytes = std::fs::read(&path).map_err(|_| LoadError::NotFound(path.display().to_string()))?;
        probe_image_size(source, &bytes)
    }
}

impl MediaLoader for FileMediaLoader {
    fn load_intrinsic_size<'a>(&'a self, source: &'a str) -> BoxFuture<'a, Result<IntrinsicSize, LoadError>> {
        Box::pin(async move {
            let size = self.load(source)?;
            log::debug!("Probed {}: {}x{}", source, size.width(), size.height());
            Ok(size)
        })
    }
}

/// Loader answering from sizes registered ahead of time.
#[derive(Default)]
pub struct StaticMediaLoader {
    sizes: RwLock<HashMap<String, IntrinsicSize>>,
}

impl StaticMediaLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the size reported for `source`.
    pub fn insert(&self, source: impl Into<String>, size: IntrinsicSize) -> Result<(), LoadError> {
        let mut sizes = self.sizes.write().map_err(lock_error)?;
        sizes.insert(source.into(), size);
        Ok(())
    }
}

impl MediaLoader for StaticMediaLoader {
    fn load_intrinsic_size<'a>(&'a self, source: &'a str) -> BoxFuture<'a, Result<IntrinsicSize, LoadError>> {
        Box::pin(async move {
            let sizes = self
                .sizes
                .read()
                .map_err(lock_error)?;
            sizes
                .get(source)
                .copied()
                .ok_or_else(|| LoadError::NotFound(source.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::STANDARD};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
        let mut cursor = Cursor::new(Vec::new());
        img.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_probe_png() {
        let size = probe_image_size("t.png", &png_bytes(12, 7)).unwrap();
        assert!((size.width() - 12.0).abs() < f64::EPSILON);
        assert!((size.height() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_probe_garbage() {
        let result = probe_image_size("junk", b"not an image at all");
        assert!(matches!(result, Err(LoadError::Decode { .. })));
    }

    #[test]
    fn test_file_loader_reads_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pic.png"), png_bytes(30, 20)).unwrap();
        let loader = FileMediaLoader::new(dir.path().to_path_buf());

        let size = pollster::block_on(loader.load_intrinsic_size("pic.png")).unwrap();
        assert!((size.width() - 30.0).abs() < f64::EPSILON);

        let missing = pollster::block_on(loader.load_intrinsic_size("nope.png"));
        assert!(matches!(missing, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_file_loader_data_url() {
        let loader = FileMediaLoader::new(PathBuf::from("."));
        let url = format!("data:image/png;base64,{}", STANDARD.encode(png_bytes(5, 9)));

        let size = pollster::block_on(loader.load_intrinsic_size(&url)).unwrap();
        assert!((size.height() - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_file_loader_refuses_remote() {
        let loader = FileMediaLoader::new(PathBuf::from("."));
        let result = pollster::block_on(loader.load_intrinsic_size("https://example.com/a.png"));
        assert!(matches!(result, Err(LoadError::Unsupported(_))));
    }

    #[test]
    fn test_static_loader() {
        let loader = StaticMediaLoader::new();
        loader
            .insert("clip.mp4", IntrinsicSize::new(1920.0, 1080.0).unwrap())
            .unwrap();

        let size = pollster::block_on(loader.load_intrinsic_size("clip.mp4")).unwrap();
        assert!((size.width() - 1920.0).abs() < f64::EPSILON);
        assert!(pollster::block_on(loader.load_intrinsic_size("other.mp4")).is_err());
    }

    #[test]
    fn test_static_loader_reports_poisoned_lock() {
        let loader = std::sync::Arc::new(StaticMediaLoader::new());
        let poisoner = std::sync::Arc::clone(&loader);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.sizes.write().unwrap();
            panic!("poison the registry");
        })
        .join();

        let size = IntrinsicSize::new(10.0, 10.0).unwrap();
        assert!(matches!(loader.insert("a.mp4", size), Err(LoadError::Poisoned(_))));
        let lookup = pollster::block_on(loader.load_intrinsic_size("a.mp4"));
        assert!(matches!(lookup, Err(LoadError::Poisoned(_))));
    }
}
