//! The closed set of cursor tools.

use vigil_core::{Behavior, Sink};

/// A drawing tool a cursor can hold.
///
/// Each variant interprets mouse down (primary) and mouse up (secondary)
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Rectangular area selection.
    Selection,
    /// Freehand drawing.
    Pen,
    /// Erasing.
    Eraser,
}

impl Tool {
    /// All tools, in declaration order.
    pub const ALL: [Tool; 3] = [Tool::Selection, Tool::Pen, Tool::Eraser];

    fn title(self) -> &'static str {
        match self {
            Tool::Selection => "Selection Tool",
            Tool::Pen => "Pen Tool",
            Tool::Eraser => "Eraser Tool",
        }
    }
}

impl Behavior for Tool {
    fn name(&self) -> &str {
        match self {
            Tool::Selection => "SelectionTool",
            Tool::Pen => "PenTool",
            Tool::Eraser => "EraserTool",
        }
    }

    fn primary(&self, sink: &dyn Sink) {
        let action = match self {
            Tool::Selection => "Selecting area",
            Tool::Pen => "Start drawing",
            Tool::Eraser => "Start erasing",
        };
        sink.emit(&format!("{}: Mouse down - {action}.", self.title()));
    }

    fn secondary(&self, sink: &dyn Sink) {
        let action = match self {
            Tool::Selection => "Area selected",
            Tool::Pen => "Drawing stopped",
            Tool::Eraser => "Erasing stopped",
        };
        sink.emit(&format!("{}: Mouse up - {action}.", self.title()));
    }
}
