//! Template document and editor state.
//!
//! [`TemplateDocument`] is the ordered object collection. [`Editor`] wraps it
//! with the surface, orientation, preview flag and active object, and funnels
//! every UI action into the layout engine.

use crate::config::EditorConfig;
use crate::geometry::{Geometry, IntrinsicSize};
use crate::layout::{
    Arrangement, LayoutError, LayoutResult, ScalingStyle, ZoomFactor, apply_arrangement,
    apply_scaling_style, scale_geometry, zoom_all, zoom_in_place,
};
use crate::media::{LoadError, MediaLoader};
use crate::objects::{CanvasObject, ObjectId, ObjectKind, TextProps, TextUpdate};
use crate::preview::{PreviewHandle, PreviewTicker};
use crate::storage::{PersistedTemplate, StorageError, TemplateRecord, TemplateStore};
use crate::surface::{CanvasSurface, Orientation};
use std::time::Duration;
use thiserror::Error;

/// Ordered collection of canvas objects. Index is stacking order, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateDocument {
    objects: Vec<CanvasObject>,
}

impl TemplateDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Objects back to front.
    pub fn objects(&self) -> &[CanvasObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Add on top of the stack.
    pub fn add(&mut self, object: CanvasObject) -> ObjectId {
        let id = object.id();
        self.objects.push(object);
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<CanvasObject> {
        let index = self.index_of(id)?;
        Some(self.objects.remove(index))
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id() == id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&CanvasObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut CanvasObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Move to the top of the stack.
    pub fn bring_to_front(&mut self, id: ObjectId) {
        if let Some(object) = self.remove(id) {
            self.objects.push(object);
        }
    }

    /// Move to the bottom of the stack.
    pub fn send_to_back(&mut self, id: ObjectId) {
        if let Some(object) = self.remove(id) {
            self.objects.insert(0, object);
        }
    }

    /// Move one layer forward. Returns false if already on top.
    pub fn bring_forward(&mut self, id: ObjectId) -> bool {
        match self.index_of(id) {
            Some(pos) if pos + 1 < self.objects.len() => {
                self.objects.swap(pos, pos + 1);
                true
            }
            _ => false,
        }
    }

    /// Move one layer backward. Returns false if already at the bottom.
    pub fn send_backward(&mut self, id: ObjectId) -> bool {
        match self.index_of(id) {
            Some(pos) if pos > 0 => {
                self.objects.swap(pos, pos - 1);
                true
            }
            _ => false,
        }
    }

    /// Zoom every object; see [`zoom_in_place`].
    pub fn zoom(&mut self, factor: ZoomFactor) {
        zoom_in_place(&mut self.objects, factor);
    }
}

/// Stacking change for the active object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerMove {
    ToFront,
    ToBack,
    Forward,
    Backward,
}

/// Editor errors.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Object {0} is not selectable")]
    NotSelectable(ObjectId),
    #[error("Editing is disabled while previewing")]
    Previewing,
}

pub type EditorResult<T> = Result<T, EditorError>;

/// Runtime editing state (not persisted).
#[derive(Debug, Clone)]
pub struct Editor {
    pub document: TemplateDocument,
    surface: CanvasSurface,
    orientation: Orientation,
    /// Running flag of the preview loop; `Some` while previewing.
    preview: Option<PreviewHandle>,
    active: Option<ObjectId>,
    landscape: kurbo::Size,
    persisted_factor: ZoomFactor,
    preview_factor: ZoomFactor,
    preview_interval: Duration,
}

impl Editor {
    /// Empty landscape editor. Fails if the configured surface size or
    /// factors are invalid.
    pub fn new(config: &EditorConfig) -> LayoutResult<Self> {
        let landscape = IntrinsicSize::try_from(config.landscape_size)?.size();
        let orientation = Orientation::Landscape;
        Ok(Self {
            document: TemplateDocument::new(),
            surface: CanvasSurface::from_size(orientation.size(landscape)),
            orientation,
            preview: None,
            active: None,
            landscape,
            persisted_factor: config.persisted_factor()?,
            preview_factor: config.preview_factor()?,
            preview_interval: config.preview_interval(),
        })
    }

    pub fn surface(&self) -> CanvasSurface {
        self.surface
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    /// The selected object, if any.
    pub fn active(&self) -> Option<ObjectId> {
        self.active
    }

    fn ensure_editing(&self) -> EditorResult<()> {
        if self.is_previewing() {
            Err(EditorError::Previewing)
        } else {
            Ok(())
        }
    }

    fn object_mut(&mut self, id: ObjectId) -> EditorResult<&mut CanvasObject> {
        self.document
            .get_mut(id)
            .ok_or(EditorError::Layout(LayoutError::ObjectNotFound(id)))
    }

    /// Make `id` the active object.
    pub fn select(&mut self, id: ObjectId) -> EditorResult<()> {
        let object = self.object_mut(id)?;
        if !object.selectable {
            return Err(EditorError::NotSelectable(id));
        }
        self.active = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.active = None;
    }

    /// Insert an object whose intrinsic size is known.
    ///
    /// New objects are centered in the `CenterMiddle` zone at their natural
    /// size, and fitted into it if they would overflow the surface.
    pub fn insert_object(&mut self, kind: ObjectKind, size: IntrinsicSize) -> EditorResult<ObjectId> {
        self.ensure_editing()?;
        let style = kind.default_scaling_style();
        let mut object = CanvasObject::new(kind, size)
            .with_arrangement(Some(Arrangement::CenterMiddle))
            .with_scaling_style(style);

        let zone = Arrangement::CenterMiddle.zone(&self.surface);
        Arrangement::CenterMiddle.alignment().apply(&mut object.geometry, zone);
        if self.surface.exceeded_by(object.geometry.scaled_size()) {
            object.geometry = scale_geometry(
                &object.geometry,
                object.arrangement,
                ScalingStyle::Fit,
                &self.surface,
            );
        }

        log::info!(
            "Inserted {} {}x{} as {}",
            object.kind.name(),
            size.width(),
            size.height(),
            object.id()
        );
        Ok(self.document.add(object))
    }

    /// Load the media's intrinsic size, then insert it.
    pub async fn insert_media(&mut self, kind: ObjectKind, loader: &dyn MediaLoader) -> EditorResult<ObjectId> {
        self.ensure_editing()?;
        let source = kind
            .media_source()
            .ok_or_else(|| LoadError::Unsupported(format!("{} has no media source", kind.name())))?
            .to_string();
        let size = loader.load_intrinsic_size(&source).await?;
        self.insert_object(kind, size)
    }

    /// Insert a text object; `None` uses the placeholder content.
    pub fn add_text(&mut self, text: Option<&str>) -> EditorResult<ObjectId> {
        let props = TextProps::new(text.unwrap_or(TextProps::PLACEHOLDER));
        let size = props.measure()?;
        self.insert_object(ObjectKind::Text(props), size)
    }

    /// Change the scaling style of `id` and re-derive its geometry.
    ///
    /// Text objects keep their geometry: their scaling is locked.
    pub fn set_scaling_style(&mut self, id: ObjectId, style: ScalingStyle) -> EditorResult<Geometry> {
        self.ensure_editing()?;
        let surface = self.surface;
        let object = self.object_mut(id)?;
        if !object.kind.supports_scaling_style() {
            log::debug!("Ignoring {} scaling on text object {}", style, id);
            return Ok(object.geometry);
        }
        object.scaling_style = Some(style);
        object.geometry = apply_scaling_style(object, style, &surface);
        Ok(object.geometry)
    }

    /// Move `id` to `arrangement` and re-derive its geometry.
    pub fn set_arrangement(&mut self, id: ObjectId, arrangement: Arrangement) -> EditorResult<Geometry> {
        self.ensure_editing()?;
        let surface = self.surface;
        let object = self.object_mut(id)?;
        object.arrangement = Some(arrangement);
        object.geometry = apply_arrangement(object, arrangement, &surface);
        Ok(object.geometry)
    }

    /// Overwrite geometry after direct manipulation (drag, resize, rotate).
    pub fn set_geometry(&mut self, id: ObjectId, geometry: Geometry) -> EditorResult<()> {
        self.ensure_editing()?;
        geometry.validate()?;
        self.object_mut(id)?.geometry = geometry;
        Ok(())
    }

    /// Apply a text property change and re-measure the text box.
    ///
    /// The new box keeps the zoom the old one had relative to its measured
    /// size. Changes that cannot be measured are rejected and leave the
    /// object untouched. Non-text objects are left alone.
    pub fn update_text(&mut self, id: ObjectId, update: TextUpdate) -> EditorResult<()> {
        self.ensure_editing()?;
        let object = self.object_mut(id)?;
        let Some(props) = object.kind.as_text() else {
            return Ok(());
        };
        let mut next = props.clone();
        next.apply(update);
        let measured = next.measure()?;
        let zoom = props
            .measure()
            .map_or(1.0, |old| object.geometry.width / old.width());

        object.geometry.width = measured.width() * zoom;
        object.geometry.height = measured.height() * zoom;
        object.kind = ObjectKind::Text(next);
        Ok(())
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<CanvasObject> {
        if self.active == Some(id) {
            self.active = None;
        }
        self.document.remove(id)
    }

    /// Remove the selected object, if any.
    pub fn remove_active(&mut self) -> Option<CanvasObject> {
        let id = self.active.take()?;
        self.document.remove(id)
    }

    /// Restack the selected object. Returns whether the order changed.
    pub fn move_active(&mut self, layer: LayerMove) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        let before = self.document.index_of(id);
        match layer {
            LayerMove::ToFront => self.document.bring_to_front(id),
            LayerMove::ToBack => self.document.send_to_back(id),
            LayerMove::Forward => {
                self.document.bring_forward(id);
            }
            LayerMove::Backward => {
                self.document.send_backward(id);
            }
        }
        before != self.document.index_of(id)
    }

    /// Remove every object.
    pub fn clear(&mut self) {
        self.active = None;
        self.document.clear();
    }

    /// Switch orientation, rescaling all objects to the new surface.
    ///
    /// Going to portrait zooms objects by the uniform factor that keeps the
    /// landscape content inside the portrait surface; going back applies its
    /// exact inverse. The zoom completes before the new surface becomes
    /// visible to any policy.
    pub fn set_orientation(&mut self, orientation: Orientation) -> EditorResult<()> {
        self.ensure_editing()?;
        if orientation == self.orientation {
            return Ok(());
        }
        let to_portrait = CanvasSurface::from_size(self.landscape)
            .fit_zoom_to(Orientation::Portrait.size(self.landscape))?;
        let factor = match orientation {
            Orientation::Portrait => to_portrait,
            Orientation::Landscape => to_portrait.inverse(),
        };
        let target = CanvasSurface::from_size(orientation.size(self.landscape));
        self.document.zoom(factor);
        self.surface = target;
        self.orientation = orientation;
        log::info!(
            "Orientation {:?}: surface {}x{}",
            orientation,
            target.width,
            target.height
        );
        Ok(())
    }

    /// Enter or leave preview.
    ///
    /// Entering returns the redraw loop for the preview; leaving stops it
    /// and returns `None`.
    pub fn toggle_preview(&mut self) -> Option<PreviewTicker> {
        let (factor, ticker) = match self.preview.take() {
            Some(handle) => {
                handle.stop();
                (self.preview_factor.inverse(), None)
            }
            None => {
                let ticker = PreviewTicker::new(self.preview_interval);
                self.preview = Some(ticker.handle());
                (self.preview_factor, Some(ticker))
            }
        };
        self.document.zoom(factor);
        self.surface = self.surface.scaled(factor.value());

        let previewing = self.is_previewing();
        for object in &mut self.document.objects {
            object.selectable = !previewing;
        }
        if previewing {
            self.active = None;
        }
        log::info!("Preview {}", if previewing { "started" } else { "stopped" });
        ticker
    }

    /// Replace the canvas with a persisted template, scaled down for editing.
    ///
    /// All records are validated before anything changes.
    pub fn load_template(&mut self, template: &PersistedTemplate) -> EditorResult<()> {
        self.ensure_editing()?;
        let objects = template
            .objects
            .iter()
            .cloned()
            .map(TemplateRecord::into_object)
            .collect::<LayoutResult<Vec<_>>>()?;

        self.orientation = template.orientation;
        self.surface = CanvasSurface::from_size(template.orientation.size(self.landscape));
        self.active = None;
        self.document.objects = zoom_all(&objects, self.persisted_factor.inverse());
        log::info!(
            "Loaded template '{}' with {} objects",
            template.name,
            self.document.len()
        );
        Ok(())
    }

    /// Snapshot the canvas as a persisted template at full resolution.
    pub fn to_template(&self, name: &str) -> PersistedTemplate {
        let mut objects = self.document.objects.clone();
        if self.is_previewing() {
            zoom_in_place(&mut objects, self.preview_factor.inverse());
        }
        zoom_in_place(&mut objects, self.persisted_factor);

        let mut template = PersistedTemplate::new(name, self.orientation);
        template.objects = objects.iter().map(TemplateRecord::from_object).collect();
        template
    }

    /// Persist the canvas under `id`.
    pub async fn save(&self, store: &dyn TemplateStore, id: &str, name: &str) -> EditorResult<()> {
        store.save(id, &self.to_template(name)).await?;
        Ok(())
    }

    /// Load the template stored under `id`. Returns its name.
    pub async fn open(&mut self, store: &dyn TemplateStore, id: &str) -> EditorResult<String> {
        let template = store.load(id).await?;
        self.load_template(&template)?;
        Ok(template.name)
    }
}
