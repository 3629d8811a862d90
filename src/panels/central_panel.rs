use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let surface = app.editor().surface();
            let size = egui::vec2(surface.width() as f32, surface.height() as f32);

            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let surface_rect = response.rect;

            app.handle_canvas_input(&response, surface_rect);
            app.render_surface(ctx, &painter, surface_rect);

            if let Some(request) = app.editor().pending_text().cloned() {
                text_entry_window(app, ctx, surface_rect.min + request.position.to_vec2());
            }
        });
    });
}

/// Inline text box shown while the editor waits for text.
///
/// Enter confirms and Shift+Enter starts a new line. Escape cancels.
pub(crate) fn text_entry_window(app: &mut SketchApp, ctx: &egui::Context, screen_pos: egui::Pos2) {
    // removed before the text box runs so a plain Enter never lands in the text
    let mut confirm = ctx.input_mut(|i| {
        let before = i.events.len();
        i.events.retain(|event| {
            !matches!(
                event,
                egui::Event::Key { key: egui::Key::Enter, pressed: true, modifiers, .. }
                    if !modifiers.shift
            )
        });
        i.events.len() != before
    });
    let mut cancel = ctx.input(|i| i.key_pressed(egui::Key::Escape));

    egui::Window::new("Text")
        .id(egui::Id::new("text_entry"))
        .title_bar(false)
        .resizable(false)
        .fixed_pos(screen_pos)
        .show(ctx, |ui| {
            let edit = ui.text_edit_multiline(&mut app.text_draft.content);
            edit.request_focus();
            ui.horizontal(|ui| {
                confirm |= ui.button("Add").clicked();
                cancel |= ui.button("Cancel").clicked();
            });
        });

    if confirm {
        let content = std::mem::take(&mut app.text_draft.content);
        app.editor_mut().commit_text(&content);
    } else if cancel {
        app.text_draft.content.clear();
        app.editor_mut().cancel_text();
    }
}
