//! Drag-to-reorder gesture tracking
//!
//! A drag is a two-phase gesture: it starts on one row, may hover over any
//! number of rows, and commits once when it ends. Hover events only move the
//! target; nothing is reordered until [`DragGesture::finish`].

/// State of the drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        source: usize,
        target: Option<usize>,
    },
}

impl DragGesture {
    /// Begin dragging the row at `source`
    ///
    /// Starting while a drag is active replaces the old gesture.
    pub fn start(&mut self, source: usize) {
        *self = DragGesture::Dragging {
            source,
            target: None,
        };
    }

    /// Record the row currently hovered; ignored when idle
    pub fn hover(&mut self, index: usize) {
        if let DragGesture::Dragging { target, .. } = self {
            *target = Some(index);
        }
    }

    /// End the gesture and return the move to commit
    ///
    /// Yields `(source, target)` when a target was hovered, `None` otherwise.
    /// The gesture is always back to idle afterwards.
    pub fn finish(&mut self) -> Option<(usize, usize)> {
        match std::mem::take(self) {
            DragGesture::Dragging {
                source,
                target: Some(target),
            } => Some((source, target)),
            _ => None,
        }
    }

    /// Abandon the gesture without committing
    pub fn cancel(&mut self) {
        *self = DragGesture::Idle;
    }

    /// Index of the row being dragged
    pub fn source(&self) -> Option<usize> {
        match self {
            DragGesture::Dragging { source, .. } => Some(*source),
            DragGesture::Idle => None,
        }
    }

    /// Index of the row last hovered
    pub fn target(&self) -> Option<usize> {
        match self {
            DragGesture::Dragging { target, .. } => *target,
            DragGesture::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }
}
