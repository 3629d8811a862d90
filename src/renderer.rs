// src/renderer.rs
use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions};

use crate::editor::Editor;

/// Uploads the editor's composite image to the GPU and paints it.
///
/// The texture is only refreshed when the editor's revision changes.
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            texture: None,
            uploaded_revision: None,
        }
    }

    /// True when the next `render` call will upload a new texture
    pub fn needs_upload(&self, editor: &Editor) -> bool {
        self.texture.is_none() || self.uploaded_revision != Some(editor.revision())
    }

    /// Convert the composite into an egui image
    pub fn color_image(editor: &Editor) -> ColorImage {
        let image = editor.composite();
        let size = [image.width() as usize, image.height() as usize];
        ColorImage::from_rgba_unmultiplied(size, image.as_raw())
    }

    /// Paint the surface with its top-left corner at `rect.min`, at one
    /// screen point per surface pixel
    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect, editor: &Editor) {
        if self.needs_upload(editor) {
            let image = Self::color_image(editor);
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("surface", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_revision = Some(editor.revision());
        }

        if let Some(texture) = &self.texture {
            let surface = editor.surface();
            let size = egui::vec2(surface.width() as f32, surface.height() as f32);
            let target = egui::Rect::from_min_size(rect.min, size);
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), target, uv, Color32::WHITE);
        }
    }
}
