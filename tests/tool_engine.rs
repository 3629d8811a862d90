use eframe_sketchpad::tools::{self, ToolKind};
use eframe_sketchpad::{Editor, FillMode, Style};
use egui::{Color32, Pos2, Rect, pos2};
use image::Rgba;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn editor_with(tool: ToolKind) -> Editor {
    let mut editor = Editor::new(100, 100, Color32::WHITE);
    editor.set_tool(tool);
    editor.set_color(Color32::RED);
    editor.set_stroke_width(2.0);
    editor
}

fn drag(editor: &mut Editor, from: Pos2, to: Pos2) {
    editor.pointer_down(from);
    editor.pointer_move(to);
    editor.pointer_up(to);
}

fn pixel(editor: &Editor, x: u32, y: u32) -> Rgba<u8> {
    editor.surface().pixel(x, y).unwrap()
}

#[test]
fn test_rectangle_is_normalized_whatever_the_drag_direction() {
    let rect = tools::normalized_rect(pos2(10.0, 10.0), pos2(5.0, 40.0));
    assert_eq!(rect, Rect::from_min_max(pos2(5.0, 10.0), pos2(10.0, 40.0)));
    assert_eq!(rect.width(), 5.0);
    assert_eq!(rect.height(), 30.0);

    let forward = tools::rectangle(pos2(5.0, 10.0), pos2(10.0, 40.0), &Style::default());
    let backward = tools::rectangle(pos2(10.0, 40.0), pos2(5.0, 10.0), &Style::default());
    assert_eq!(forward, backward);
}

#[test]
fn test_triangle_base_is_mirrored_across_apex() {
    let vertices = tools::triangle_vertices(pos2(50.0, 50.0), pos2(80.0, 100.0));
    assert_eq!(vertices, [pos2(50.0, 50.0), pos2(80.0, 100.0), pos2(20.0, 100.0)]);
}

#[test]
fn test_filled_rectangle_paints_interior() {
    let mut editor = editor_with(ToolKind::Rectangle);
    editor.set_fill_mode(FillMode::Filled);
    drag(&mut editor, pos2(40.0, 40.0), pos2(10.0, 10.0));

    assert_eq!(pixel(&editor, 25, 25), RED);
    assert_eq!(pixel(&editor, 10, 10), RED);
    assert_eq!(pixel(&editor, 50, 50), WHITE);
}

#[test]
fn test_outlined_rectangle_leaves_interior() {
    let mut editor = editor_with(ToolKind::Rectangle);
    drag(&mut editor, pos2(10.0, 10.0), pos2(40.0, 40.0));

    assert_eq!(pixel(&editor, 10, 25), RED);
    assert_eq!(pixel(&editor, 25, 25), WHITE);
}

#[test]
fn test_circle_radius_follows_pointer_distance() {
    let mut editor = editor_with(ToolKind::Circle);
    editor.set_fill_mode(FillMode::Filled);
    drag(&mut editor, pos2(50.0, 50.0), pos2(70.0, 50.0));

    assert_eq!(pixel(&editor, 50, 50), RED);
    assert_eq!(pixel(&editor, 50, 32), RED);
    assert_eq!(pixel(&editor, 50, 20), WHITE);
    assert_eq!(pixel(&editor, 75, 50), WHITE);
}

#[test]
fn test_line_ignores_fill_mode() {
    let mut editor = editor_with(ToolKind::Line);
    editor.set_fill_mode(FillMode::Filled);
    drag(&mut editor, pos2(10.0, 50.5), pos2(90.0, 50.5));

    assert_eq!(pixel(&editor, 50, 50), RED);
    assert_eq!(pixel(&editor, 50, 45), WHITE);
}

#[test]
fn test_preview_frames_do_not_persist() {
    let mut editor = editor_with(ToolKind::Rectangle);
    editor.set_fill_mode(FillMode::Filled);
    editor.pointer_down(pos2(10.0, 10.0));
    editor.pointer_move(pos2(90.0, 90.0));

    // shown on screen but not yet on the surface
    assert_eq!(editor.composite().get_pixel(80, 80), &RED);
    assert_eq!(pixel(&editor, 80, 80), WHITE);

    editor.pointer_move(pos2(20.0, 20.0));
    editor.pointer_up(pos2(20.0, 20.0));

    assert_eq!(pixel(&editor, 15, 15), RED);
    assert_eq!(pixel(&editor, 80, 80), WHITE);
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_brush_click_leaves_a_dot() {
    let mut editor = editor_with(ToolKind::Brush);
    editor.set_stroke_width(6.0);
    editor.pointer_down(pos2(30.5, 30.5));
    editor.pointer_up(pos2(30.5, 30.5));

    assert_eq!(pixel(&editor, 30, 30), RED);
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_brush_connects_sampled_points() {
    let mut editor = editor_with(ToolKind::Brush);
    editor.pointer_down(pos2(10.5, 20.5));
    editor.pointer_move(pos2(50.5, 20.5));
    editor.pointer_up(pos2(50.5, 60.5));

    for x in [10, 30, 50] {
        assert_eq!(pixel(&editor, x, 20), RED);
    }
    assert_eq!(pixel(&editor, 50, 40), RED);
    assert_eq!(pixel(&editor, 30, 40), WHITE);
}

#[test]
fn test_eraser_paints_background() {
    let mut editor = Editor::new(100, 100, Color32::from_rgb(200, 210, 220));
    editor.set_color(Color32::RED);
    editor.set_tool(ToolKind::Rectangle);
    editor.set_fill_mode(FillMode::Filled);
    drag(&mut editor, pos2(0.0, 0.0), pos2(100.0, 100.0));
    assert_eq!(pixel(&editor, 50, 50), RED);

    editor.set_tool(ToolKind::Eraser);
    editor.set_stroke_width(10.0);
    drag(&mut editor, pos2(20.5, 50.5), pos2(80.5, 50.5));

    assert_eq!(pixel(&editor, 50, 50), Rgba([200, 210, 220, 255]));
    assert_eq!(pixel(&editor, 50, 10), RED);
    // the eraser never changes the drawing color
    assert_eq!(editor.style().color, Color32::RED);
}

#[test]
fn test_escape_cancels_shape_without_history_entry() {
    let mut editor = editor_with(ToolKind::Triangle);
    let blank = editor.surface().snapshot();
    editor.pointer_down(pos2(50.0, 10.0));
    editor.pointer_move(pos2(80.0, 90.0));
    editor.cancel_stroke();

    assert!(!editor.is_drawing());
    assert!(editor.surface().matches(&blank));
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_pointer_leave_commits_stroke() {
    let mut editor = editor_with(ToolKind::Brush);
    editor.pointer_down(pos2(10.0, 10.0));
    editor.pointer_move(pos2(40.0, 10.0));
    editor.pointer_leave();

    assert!(!editor.is_drawing());
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_idle_move_and_release_are_ignored() {
    let mut editor = editor_with(ToolKind::Brush);
    editor.pointer_move(pos2(10.0, 10.0));
    editor.pointer_up(pos2(20.0, 20.0));
    editor.pointer_leave();

    assert_eq!(editor.history().len(), 1);
    assert_eq!(pixel(&editor, 10, 10), WHITE);
}

#[test]
fn test_shapes_are_clipped_to_surface() {
    let mut editor = editor_with(ToolKind::Circle);
    editor.set_fill_mode(FillMode::Filled);
    drag(&mut editor, pos2(95.0, 95.0), pos2(195.0, 95.0));

    assert_eq!(editor.surface().width(), 100);
    assert_eq!(pixel(&editor, 99, 99), RED);
    assert_eq!(pixel(&editor, 0, 99), RED);
    assert_eq!(pixel(&editor, 0, 0), WHITE);
}

#[test]
fn test_shape_click_without_drag_leaves_no_ink() {
    for tool in [ToolKind::Rectangle, ToolKind::Circle, ToolKind::Triangle, ToolKind::Line] {
        let mut editor = Editor::new(64, 64, Color32::WHITE);
        editor.set_tool(tool);
        editor.set_color(Color32::RED);
        let blank = editor.surface().snapshot();

        editor.pointer_down(pos2(30.0, 30.0));
        editor.pointer_up(pos2(30.0, 30.0));

        assert!(!editor.is_drawing(), "{tool:?}");
        assert!(editor.surface().matches(&blank), "{tool:?}");
        assert_eq!(editor.history().len(), 1, "{tool:?}");
    }
}

#[test]
fn test_shape_back_at_anchor_discards_preview() {
    let mut editor = editor_with(ToolKind::Rectangle);
    editor.set_fill_mode(FillMode::Filled);
    editor.pointer_down(pos2(10.0, 10.0));
    editor.pointer_move(pos2(50.0, 50.0));
    editor.pointer_up(pos2(10.0, 10.0));

    assert_eq!(pixel(&editor, 30, 30), WHITE);
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_zero_width_rectangle_still_draws_a_line() {
    let mut editor = editor_with(ToolKind::Rectangle);
    drag(&mut editor, pos2(20.5, 10.0), pos2(20.5, 50.0));

    assert_eq!(pixel(&editor, 20, 30), RED);
    assert_eq!(editor.history().len(), 2);
}
