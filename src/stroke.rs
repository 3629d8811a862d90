use egui::Pos2;

use crate::raster::PaintOp;
use crate::style::Style;
use crate::surface::{Snapshot, Surface};
use crate::tools::ToolKind;

/// Transient state of one pointer-down to pointer-up interaction.
///
/// Continuous tools paint straight onto the surface. Shape tools keep their
/// current frame in a preview layer that is composited over the surface for
/// display and only flattened into it when the stroke ends.
#[derive(Debug, Clone)]
pub struct StrokeSession {
    tool: ToolKind,
    anchor: Pos2,
    last_point: Pos2,
    style: Style,
    snapshot: Snapshot,
    preview: Option<PaintOp>,
}

impl StrokeSession {
    /// Begin a stroke at `anchor`, capturing the surface as it was before it.
    ///
    /// Continuous tools put a dot down immediately so a click leaves a mark.
    pub fn begin(tool: ToolKind, anchor: Pos2, style: Style, surface: &mut Surface) -> Self {
        let snapshot = surface.snapshot();
        if tool.is_continuous() {
            if let Some(dot) = tool.frame(anchor, anchor, &style, surface.background()) {
                surface.paint(&dot);
            }
        }
        Self {
            tool,
            anchor,
            last_point: anchor,
            style,
            snapshot,
            preview: None,
        }
    }

    /// Advance the stroke to `point`
    pub fn update(&mut self, point: Pos2, surface: &mut Surface) {
        if self.tool.is_continuous() {
            if let Some(op) = self
                .tool
                .frame(self.last_point, point, &self.style, surface.background())
            {
                surface.paint(&op);
            }
        } else if self.tool.is_preview() {
            // replaces the previous frame, which never touched the surface
            self.preview = self
                .tool
                .frame(self.anchor, point, &self.style, surface.background());
        }
        self.last_point = point;
    }

    /// Flatten the preview frame (if any) into the surface
    pub fn finish(self, surface: &mut Surface) {
        if let Some(op) = self.preview {
            surface.paint(&op);
        }
    }

    /// Throw the stroke away, putting the surface back as it was at pointer-down
    pub fn cancel(self, surface: &mut Surface) {
        surface.restore(&self.snapshot);
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// The surface as it was when the stroke began
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn preview(&self) -> Option<&PaintOp> {
        self.preview.as_ref()
    }
}
