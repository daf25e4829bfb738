use serde::{Deserialize, Serialize};

use crate::render::{Color, LinePrimitive};

/// Index of an element inside an [`OverlayLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlayHandle(usize);

/// A full-plot-height band positioned in CSS pixels relative to the plot's
/// left edge.
///
/// Only translation and width change after creation, mirroring a positioned
/// element moved by transform instead of re-layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayElement {
    pub class_name: Option<String>,
    pub fill: Color,
    pub visible: bool,
    pub translate_x: f64,
    pub width: f64,
}

impl OverlayElement {
    #[must_use]
    pub fn new(fill: Color) -> Self {
        Self {
            class_name: None,
            fill,
            visible: false,
            translate_x: 0.0,
            width: 0.0,
        }
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: Option<String>) -> Self {
        self.class_name = class_name;
        self
    }
}

/// The `under` layer: elements painted before series ink.
#[derive(Debug, Clone, Default)]
pub struct OverlayLayer {
    elements: Vec<OverlayElement>,
    dirty: bool,
}

impl OverlayLayer {
    pub fn append(&mut self, element: OverlayElement) -> OverlayHandle {
        self.elements.push(element);
        self.dirty = true;
        OverlayHandle(self.elements.len() - 1)
    }

    #[must_use]
    pub fn element(&self, handle: OverlayHandle) -> Option<&OverlayElement> {
        self.elements.get(handle.0)
    }

    #[must_use]
    pub fn elements(&self) -> &[OverlayElement] {
        &self.elements
    }

    pub fn set_visible(&mut self, handle: OverlayHandle, visible: bool) {
        if let Some(element) = self.elements.get_mut(handle.0) {
            if element.visible != visible {
                element.visible = visible;
                self.dirty = true;
            }
        }
    }

    /// Applies a horizontal translation plus explicit width.
    pub fn set_geometry(&mut self, handle: OverlayHandle, translate_x: f64, width: f64) {
        if let Some(element) = self.elements.get_mut(handle.0) {
            if element.translate_x != translate_x || element.width != width {
                element.translate_x = translate_x;
                element.width = width;
                self.dirty = true;
            }
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

/// The `over` layer: pointer capture surface.
///
/// Holds hover bindings registered by plugins during `init` and the native
/// crosshair ink drawn by the engine.
#[derive(Debug, Clone, Default)]
pub struct InteractionSurface {
    hovered: bool,
    hover_bindings: Vec<OverlayHandle>,
    crosshair: Vec<LinePrimitive>,
    dirty: bool,
}

impl InteractionSurface {
    /// Shows `handle` while the pointer is over the plot, hides it otherwise.
    pub fn bind_hover_visibility(&mut self, handle: OverlayHandle) {
        if !self.hover_bindings.contains(&handle) {
            self.hover_bindings.push(handle);
        }
    }

    #[must_use]
    pub fn hover_bindings(&self) -> &[OverlayHandle] {
        &self.hover_bindings
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn crosshair(&self) -> &[LinePrimitive] {
        &self.crosshair
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Updates hover state and toggles bound `under` elements.
    ///
    /// Bound elements are shown only while a column is hovered; entering the
    /// plot without a cursor index keeps them hidden.
    pub(crate) fn set_hovered(
        &mut self,
        hovered: bool,
        cursor_index: Option<usize>,
        under: &mut OverlayLayer,
    ) {
        self.hovered = hovered;
        let visible = hovered && cursor_index.is_some();
        for &handle in &self.hover_bindings {
            under.set_visible(handle, visible);
        }
    }

    pub(crate) fn set_crosshair(&mut self, lines: Vec<LinePrimitive>) {
        if self.crosshair != lines {
            self.crosshair = lines;
            self.dirty = true;
        }
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionSurface, OverlayElement, OverlayLayer};
    use crate::render::Color;

    #[test]
    fn unchanged_geometry_keeps_layer_clean() {
        let mut layer = OverlayLayer::default();
        let handle = layer.append(OverlayElement::new(Color::rgb(0.0, 0.0, 1.0)));
        layer.set_geometry(handle, 10.0, 20.0);
        layer.mark_clean();

        layer.set_geometry(handle, 10.0, 20.0);
        assert!(!layer.is_dirty());
        layer.set_geometry(handle, 12.0, 20.0);
        assert!(layer.is_dirty());
    }

    #[test]
    fn hover_toggles_bound_elements() {
        let mut under = OverlayLayer::default();
        let handle = under.append(OverlayElement::new(Color::rgb(0.0, 0.0, 1.0)));
        let mut over = InteractionSurface::default();
        over.bind_hover_visibility(handle);
        over.bind_hover_visibility(handle);
        assert_eq!(over.hover_bindings().len(), 1);

        over.set_hovered(true, Some(0), &mut under);
        assert!(under.element(handle).expect("element").visible);
        over.set_hovered(false, Some(0), &mut under);
        assert!(!under.element(handle).expect("element").visible);
    }

    #[test]
    fn hover_without_cursor_index_keeps_elements_hidden() {
        let mut under = OverlayLayer::default();
        let handle = under.append(OverlayElement::new(Color::rgb(0.0, 0.0, 1.0)));
        let mut over = InteractionSurface::default();
        over.bind_hover_visibility(handle);

        over.set_hovered(true, None, &mut under);
        assert!(over.is_hovered());
        assert!(!under.element(handle).expect("element").visible);
    }
}
