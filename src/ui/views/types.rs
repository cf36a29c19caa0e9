use crate::LessonApp;
use crate::model::Section;
use crate::ui::layout::{
    CARD_FILL, INDIGO_DARK, PINK, PURPLE, SLATE_TEXT, reveal_card, section_block, section_heading,
};
use crate::view_models::type_cards;
use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

pub fn ui_types(app: &mut LessonApp, ui: &mut Ui) -> f32 {
    section_block(app, ui, Section::Types, |app, ui| {
        reveal_card(app, ui, "types-cards", CARD_FILL, |_, ui| {
            section_heading(ui, "#", "2. Kiểu Dữ Liệu", INDIGO_DARK);
            for card in type_cards() {
                type_card_row(ui, &card);
            }
        });

        reveal_card(app, ui, "types-cast", CARD_FILL, |_, ui| {
            section_heading(ui, "🔄", "Ép kiểu dữ liệu", PURPLE);
            ui.columns(2, |cols| {
                cast_box(&mut cols[0], PURPLE, "int( )", "Sang số nguyên");
                cast_box(&mut cols[1], PINK, "float( )", "Sang số thực");
            });
        });
    })
}

fn type_card_row(ui: &mut Ui, card: &crate::view_models::TypeCard) {
    Frame::default()
        .fill(card.color.gamma_multiply(0.05))
        .stroke(Stroke::new(2.0, card.color.gamma_multiply(0.4)))
        .corner_radius(CornerRadius::same(14))
        .inner_margin(Margin::symmetric(16, 12))
        .outer_margin(Margin::symmetric(0, 6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(card.label)
                            .monospace()
                            .strong()
                            .size(30.0)
                            .color(card.color),
                    );
                    ui.label(
                        RichText::new(card.title)
                            .size(13.0)
                            .strong()
                            .color(Color32::from_gray(140)),
                    );
                    ui.label(RichText::new(card.desc).size(16.0).color(SLATE_TEXT));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Frame::default()
                        .fill(card.color.gamma_multiply(0.12))
                        .corner_radius(CornerRadius::same(12))
                        .inner_margin(Margin::symmetric(14, 10))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(card.example)
                                    .monospace()
                                    .strong()
                                    .size(20.0)
                                    .color(card.color),
                            );
                        });
                });
            });
        });
}

fn cast_box(ui: &mut Ui, accent: Color32, code: &str, caption: &str) {
    Frame::default()
        .fill(accent.gamma_multiply(0.08))
        .stroke(Stroke::new(3.0, accent))
        .corner_radius(CornerRadius::same(16))
        .inner_margin(Margin::symmetric(16, 14))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(code)
                        .monospace()
                        .strong()
                        .size(30.0)
                        .color(accent),
                );
                ui.label(RichText::new(caption).monospace().size(15.0).color(SLATE_TEXT));
            });
        });
}
