//! # Overlay Panel Geometry
//!
//! Pure presentation state for the editing surface: the panel opens
//! horizontally centered at a fixed offset from the top, and its header is
//! drag-initiable. Dragging translates the panel by the cumulative pointer
//! delta while the horizontal-center anchor stays the origin, so the
//! transform composes as `translate(calc(-50% + x), y)`.
//!
//! Every open resets the translation: a panel dragged off-screen in one
//! session must come back reachable in the next.

/// Vertical offset of a freshly opened panel
pub const PANEL_TOP_OFFSET: &str = "20%";

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    offset: (f64, f64),
    drag: Option<Drag>,
}

#[derive(Debug, Clone, PartialEq)]
struct Drag {
    pointer_origin: (f64, f64),
    start_offset: (f64, f64),
}

impl Panel {
    /// Panel at the centered default position
    pub fn centered() -> Self {
        Self {
            offset: (0.0, 0.0),
            drag: None,
        }
    }

    /// Pointer-down on the header begins tracking
    pub fn begin_drag(&mut self, pointer: (f64, f64)) {
        self.drag = Some(Drag {
            pointer_origin: pointer,
            start_offset: self.offset,
        });
    }

    /// Pointer movement while tracking translates the panel
    pub fn drag_to(&mut self, pointer: (f64, f64)) {
        if let Some(drag) = &self.drag {
            self.offset = (
                drag.start_offset.0 + pointer.0 - drag.pointer_origin.0,
                drag.start_offset.1 + pointer.1 - drag.pointer_origin.1,
            );
        }
    }

    /// Pointer-release ends tracking; the offset is kept
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    /// CSS transform composing the drag offset with the center anchor
    pub fn transform(&self) -> String {
        format!(
            "translate(calc(-50% + {}px), {}px)",
            self.offset.0, self.offset.1
        )
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::centered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_centered() {
        let panel = Panel::centered();
        assert_eq!(panel.offset(), (0.0, 0.0));
        assert_eq!(panel.transform(), "translate(calc(-50% + 0px), 0px)");
    }

    #[test]
    fn test_drag_translates_by_pointer_delta() {
        let mut panel = Panel::centered();
        panel.begin_drag((100.0, 200.0));
        panel.drag_to((130.0, 180.0));
        assert_eq!(panel.offset(), (30.0, -20.0));

        panel.drag_to((90.0, 260.0));
        assert_eq!(panel.offset(), (-10.0, 60.0));

        panel.end_drag();
        assert!(!panel.is_dragging());
        assert_eq!(panel.offset(), (-10.0, 60.0));
    }

    #[test]
    fn test_movement_without_drag_is_ignored() {
        let mut panel = Panel::centered();
        panel.drag_to((500.0, 500.0));
        assert_eq!(panel.offset(), (0.0, 0.0));
    }

    #[test]
    fn test_second_drag_accumulates() {
        let mut panel = Panel::centered();
        panel.begin_drag((0.0, 0.0));
        panel.drag_to((10.0, 10.0));
        panel.end_drag();

        panel.begin_drag((50.0, 50.0));
        panel.drag_to((55.0, 45.0));
        assert_eq!(panel.offset(), (15.0, 5.0));
    }
}
