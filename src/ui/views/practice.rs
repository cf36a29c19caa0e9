use crate::LessonApp;
use crate::model::Section;
use crate::ui::layout::{AMBER, CARD_FILL, INDIGO, PINK, SLATE_TEXT, reveal_card, section_block};
use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

pub fn ui_practice(app: &mut LessonApp, ui: &mut Ui) -> f32 {
    section_block(app, ui, Section::Practice, |app, ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("THỰC HÀNH").size(48.0).strong().color(PINK));
        });
        ui.add_space(12.0);

        let exercises = app.exercises.clone();
        for ex in &exercises {
            reveal_card(app, ui, &format!("exercise-{}", ex.id), CARD_FILL, |_, ui| {
                ui.horizontal(|ui| {
                    Frame::default()
                        .fill(INDIGO)
                        .corner_radius(CornerRadius::same(12))
                        .inner_margin(Margin::symmetric(14, 8))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(ex.id.to_string())
                                    .size(24.0)
                                    .strong()
                                    .color(Color32::WHITE),
                            );
                        });
                    ui.add_space(8.0);
                    ui.label(RichText::new(&ex.title).size(26.0).strong());
                });
                ui.add_space(8.0);

                Frame::default()
                    .fill(Color32::from_gray(249))
                    .stroke(Stroke::new(1.0, Color32::from_gray(226)))
                    .corner_radius(CornerRadius::same(12))
                    .inner_margin(Margin::symmetric(14, 10))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&ex.description)
                                .size(17.0)
                                .strong()
                                .color(SLATE_TEXT),
                        );
                    });
                ui.add_space(8.0);

                Frame::default()
                    .fill(AMBER.gamma_multiply(0.08))
                    .stroke(Stroke::new(2.0, Color32::from_rgb(250, 204, 21)))
                    .corner_radius(CornerRadius::same(12))
                    .inner_margin(Margin::symmetric(14, 10))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("💡").size(22.0));
                            ui.label(RichText::new(&ex.hint).size(15.0).italics().color(SLATE_TEXT));
                        });
                    });
            });
        }
    })
}
