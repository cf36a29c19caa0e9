use crate::LessonApp;
use crate::model::{QuizItem, Section};
use crate::ui::helpers::{OptionVisual, difficulty_badge, option_button};
use crate::ui::layout::{
    CARD_FILL, GREEN, INDIGO_DARK, RED, callout, reveal_card, section_block,
};
use egui::{Button, Color32, CornerRadius, Frame, Margin, RichText, Ui, vec2};

pub fn ui_quiz(app: &mut LessonApp, ui: &mut Ui) -> f32 {
    section_block(app, ui, Section::Quiz, |app, ui| {
        score_banner(app, ui);

        // The bank is immutable; clone it so the loop can call back into
        // the engine while drawing.
        let items = app.quiz.clone();
        for item in &items {
            question_card(app, ui, item);
        }
    })
}

fn score_banner(app: &mut LessonApp, ui: &mut Ui) {
    Frame::default()
        .fill(INDIGO_DARK)
        .corner_radius(CornerRadius::same(20))
        .inner_margin(Margin::symmetric(24, 20))
        .outer_margin(Margin::symmetric(0, 12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("🏆 BÀI TẬP")
                        .size(38.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(Button::new(RichText::new("🔄").size(20.0)).min_size(vec2(40.0, 40.0)))
                        .on_hover_text("Bắt đầu lại bài kiểm tra")
                        .clicked()
                    {
                        app.request_reset();
                    }
                    ui.add_space(16.0);
                    Frame::default()
                        .fill(Color32::from_white_alpha(16))
                        .corner_radius(CornerRadius::same(16))
                        .inner_margin(Margin::symmetric(20, 10))
                        .show(ui, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new("SCORE")
                                        .size(13.0)
                                        .strong()
                                        .color(Color32::from_white_alpha(140)),
                                );
                                ui.label(
                                    RichText::new(app.score().to_string())
                                        .monospace()
                                        .size(44.0)
                                        .strong()
                                        .color(Color32::from_rgb(253, 224, 71)),
                                );
                                ui.label(
                                    RichText::new(format!("/ {}", app.total_questions()))
                                        .size(15.0)
                                        .color(Color32::from_white_alpha(120)),
                                );
                            });
                        });
                });
            });
        });
}

fn question_card(app: &mut LessonApp, ui: &mut Ui, item: &QuizItem) {
    let fill = match app.question_status(item.id) {
        Some((_, true)) => Color32::from_rgb(240, 253, 244),
        Some((_, false)) => Color32::from_rgb(254, 242, 242),
        None => CARD_FILL,
    };

    reveal_card(app, ui, &format!("quiz-{}", item.id), fill, |app, ui| {
        ui.horizontal(|ui| {
            difficulty_badge(ui, item.difficulty);
            ui.add_space(6.0);
            ui.label(RichText::new(&item.prompt).size(20.0).strong());
        });
        ui.add_space(10.0);

        let status = app.question_status(item.id);
        let mut clicked = None;
        for (idx, option) in item.options.iter().enumerate() {
            let visual = match status {
                None => OptionVisual::Neutral,
                Some((selected, _)) => {
                    if idx == item.correct {
                        OptionVisual::Correct
                    } else if idx == selected {
                        OptionVisual::WrongPick
                    } else {
                        OptionVisual::Dimmed
                    }
                }
            };
            let letter = (b'A' + idx as u8) as char;
            if option_button(ui, letter, option, visual, status.is_none()) {
                clicked = Some(idx);
            }
            ui.add_space(6.0);
        }
        if let Some(idx) = clicked {
            app.submit_answer(item.id, idx);
        }

        if let Some((_, correct)) = app.question_status(item.id) {
            ui.add_space(4.0);
            let accent = if correct { GREEN } else { RED };
            callout(ui, accent, "", |ui| {
                ui.label(RichText::new(&item.explanation).size(16.0).strong());
            });
        }
    });
}
