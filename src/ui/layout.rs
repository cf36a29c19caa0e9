use crate::LessonApp;
use crate::model::Section;
use crate::ui::helpers::dock_button;
use crate::view_models::nav_items;
use egui::{
    Align, Color32, Context, CornerRadius, Frame, Layout, Margin, RichText, Sense, Stroke,
    TopBottomPanel, Ui, vec2,
};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

pub const INDIGO: Color32 = Color32::from_rgb(79, 70, 229);
pub const INDIGO_DARK: Color32 = Color32::from_rgb(49, 46, 129);
pub const SLATE_DARK: Color32 = Color32::from_rgb(15, 23, 42);
pub const SLATE_TEXT: Color32 = Color32::from_rgb(51, 65, 85);
pub const CARD_FILL: Color32 = Color32::WHITE;
pub const GREEN: Color32 = Color32::from_rgb(22, 163, 74);
pub const RED: Color32 = Color32::from_rgb(220, 38, 38);
pub const AMBER: Color32 = Color32::from_rgb(217, 119, 6);
pub const PURPLE: Color32 = Color32::from_rgb(126, 34, 206);
pub const PINK: Color32 = Color32::from_rgb(219, 39, 119);

/// Floating navigation dock, as a bottom panel.
pub fn nav_dock(app: &mut LessonApp, ctx: &Context) {
    TopBottomPanel::bottom("nav_dock").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let item_w = 150.0;
            let total_w = item_w * nav_items().len() as f32 + 24.0;
            ui.add_space(((ui.available_width() - total_w) / 2.0).max(0.0));

            let mut clicked = None;
            for item in nav_items() {
                let active = app.active_section == item.section;
                if dock_button(ui, &item, active, item_w) {
                    clicked = Some(item.section);
                }
            }
            if let Some(section) = clicked {
                app.go_to(section);
            }
        });
        ui.add_space(6.0);
    });
}

/// Wraps one page section, resolves a pending dock scroll, and reports the
/// section's vertical centre for the scroll-spy.
pub fn section_block(
    app: &mut LessonApp,
    ui: &mut Ui,
    section: Section,
    add_contents: impl FnOnce(&mut LessonApp, &mut Ui),
) -> f32 {
    let inner = ui.scope(|ui| {
        ui.add_space(24.0);
        add_contents(&mut *app, ui);
        ui.add_space(24.0);
    });

    let rect = inner.response.rect;
    if app.scroll_target == Some(section) {
        ui.scroll_to_rect(rect, Some(Align::Min));
    }
    rect.center().y
}

pub fn card_frame(fill: Color32) -> Frame {
    Frame::default()
        .fill(fill)
        .corner_radius(CornerRadius::same(18))
        .stroke(Stroke::new(1.0, Color32::from_gray(224)))
        .inner_margin(Margin::symmetric(24, 20))
        .outer_margin(Margin::symmetric(0, 12))
}

/// Card that fades/slides in the first time it becomes visible. Scrolling
/// it back below the fold re-arms the animation, so it plays again on the
/// next way down.
pub fn reveal_card(
    app: &mut LessonApp,
    ui: &mut Ui,
    id_salt: &str,
    fill: Color32,
    add_contents: impl FnOnce(&mut LessonApp, &mut Ui),
) {
    let id = ui.make_persistent_id(id_salt);
    let clip = ui.clip_rect();
    let seen = app.revealed.contains(&id);
    let t = ui.ctx().animate_bool_with_time(id, seen, 0.7);

    ui.add_space((1.0 - t) * 24.0);
    let inner = ui.scope(|ui| {
        ui.multiply_opacity(t);
        card_frame(fill).show(ui, |ui| add_contents(&mut *app, ui));
    });

    let rect = inner.response.rect;
    if rect.intersects(clip) {
        app.revealed.insert(id);
    } else if rect.top() > clip.bottom() {
        app.revealed.remove(&id);
    }
}

pub fn section_heading(ui: &mut Ui, icon: &str, text: &str, color: Color32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(30.0));
        ui.label(RichText::new(text).size(30.0).strong().color(color));
    });
    ui.add_space(10.0);
}

/// Tinted box with an accent border and a bold title line.
pub fn callout(
    ui: &mut Ui,
    accent: Color32,
    title: &str,
    add_contents: impl FnOnce(&mut Ui),
) {
    Frame::default()
        .fill(accent.gamma_multiply(0.08))
        .stroke(Stroke::new(2.0, accent))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, |ui| {
            if !title.is_empty() {
                ui.label(RichText::new(title).color(accent).strong().size(18.0));
                ui.add_space(4.0);
            }
            add_contents(ui);
        });
    ui.add_space(8.0);
}

/// Dark code box with a window-dots title bar, highlighted Python code and
/// an optional program-output footer.
pub fn code_terminal(ui: &mut Ui, title: &str, code: &str, output: Option<&str>) {
    Frame::default()
        .fill(SLATE_DARK)
        .corner_radius(CornerRadius::same(14))
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("🖳 {title}"))
                        .monospace()
                        .color(Color32::from_gray(176)),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    for color in [
                        Color32::from_rgb(34, 197, 94),
                        Color32::from_rgb(234, 179, 8),
                        Color32::from_rgb(239, 68, 68),
                    ] {
                        let (rect, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
                        ui.painter().circle_filled(rect.center(), 6.0, color);
                    }
                });
            });
            ui.add_space(8.0);

            // Read-only: the editor needs a &mut buffer, so feed it a copy.
            let mut buf = code.to_owned();
            CodeEditor::default()
                .id_source(title)
                .with_rows(code.lines().count().max(3))
                .with_fontsize(14.0)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(Syntax::python())
                .with_numlines(false)
                .vscroll(false)
                .show(ui, &mut buf);

            if let Some(output) = output {
                ui.add_space(6.0);
                ui.separator();
                for line in output.lines() {
                    ui.label(
                        RichText::new(format!("➜ {line}"))
                            .monospace()
                            .color(Color32::from_rgb(52, 211, 153)),
                    );
                }
            }
        });
    ui.add_space(8.0);
}
