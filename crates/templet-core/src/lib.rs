//! Templet Core Library
//!
//! Platform-agnostic layout engine and data model for the Templet signage
//! template editor.

pub mod canvas;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod media;
pub mod objects;
pub mod preview;
pub mod storage;
pub mod surface;

pub use canvas::{Editor, EditorError, EditorResult, LayerMove, TemplateDocument};
pub use config::{ConfigError, EditorConfig};
pub use geometry::{Geometry, IntrinsicSize, OriginX, OriginY};
pub use layout::{Arrangement, LayoutError, LayoutResult, ScalingStyle, ZoomFactor, place};
pub use media::{FileMediaLoader, LoadError, MediaLoader, StaticMediaLoader};
pub use objects::{CanvasObject, ObjectId, ObjectKind, TextProps, TextUpdate};
pub use preview::{PreviewHandle, PreviewTicker, Tick};
pub use storage::{MemoryStore, PersistedTemplate, StorageError, TemplateRecord, TemplateStore};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
pub use surface::{CanvasSurface, Orientation};
