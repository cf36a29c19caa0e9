use crate::LessonApp;
use crate::model::Section;
use crate::ui::helpers::pill;
use crate::ui::layout::{
    AMBER, CARD_FILL, GREEN, INDIGO_DARK, SLATE_TEXT, callout, code_terminal, reveal_card,
    section_block, section_heading,
};
use crate::view_models::{flow_stages, input_steps};
use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, TextEdit, TextStyle, Ui};

const DEMO_CODE: &str = "# Nhập tên và in lời chào\nten = input(\"Bạn tên là gì? \")\nprint(\"Chào bạn\", ten, \"!\")";
const DEMO_OUTPUT: &str = "Bạn tên là gì? Python\nChào bạn Python !";

pub fn ui_theory(app: &mut LessonApp, ui: &mut Ui) -> f32 {
    section_block(app, ui, Section::Theory, |app, ui| {
        reveal_card(app, ui, "theory-flow", CARD_FILL, |_, ui| {
            section_heading(ui, "💡", "1. Luồng hoạt động", INDIGO_DARK);
            ui.label(
                RichText::new("Dữ liệu đi như thế nào?")
                    .size(22.0)
                    .strong()
                    .color(SLATE_TEXT),
            );
            ui.add_space(12.0);
            flow_diagram(ui);
            ui.add_space(12.0);

            callout(ui, GREEN, "INPUT (Nhập)", |ui| {
                ui.label("Dữ liệu vào qua input().");
            });
            callout(ui, INDIGO_DARK, "PROCESS (Xử lý)", |ui| {
                ui.label("Máy tính tính toán và suy nghĩ.");
            });
            callout(ui, Color32::from_rgb(37, 99, 235), "OUTPUT (Xuất)", |ui| {
                ui.label("Kết quả hiện ra qua print().");
            });
        });

        reveal_card(app, ui, "theory-input", CARD_FILL, |app, ui| {
            section_heading(ui, "⌨", "Lệnh Nhập: input()", GREEN);
            ui.label(
                RichText::new("Nhận thông tin từ người dùng qua bàn phím.")
                    .size(17.0)
                    .color(SLATE_TEXT),
            );
            ui.add_space(12.0);

            ui.label(
                RichText::new("🖱 Minh hoạ luồng xử lý")
                    .size(20.0)
                    .strong()
                    .color(SLATE_TEXT),
            );
            ui.add_space(8.0);
            input_walkthrough(ui);
            ui.add_space(12.0);

            callout(ui, AMBER, "⚠ CẢNH BÁO!", |ui| {
                ui.label(
                    RichText::new("Mọi thứ nhập vào luôn là Xâu kí tự (String).")
                        .size(17.0)
                        .strong(),
                );
            });

            ui.add_space(4.0);
            ui.label(RichText::new("Dùng thử tương tác:").strong().size(16.0));
            ui.add_space(4.0);
            ui.add(
                TextEdit::singleline(&mut app.demo_input)
                    .hint_text("Nhập thử tại đây...")
                    .font(TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });

        code_terminal(ui, "Code minh hoạ", DEMO_CODE, Some(DEMO_OUTPUT));
    })
}

fn flow_diagram(ui: &mut Ui) {
    ui.columns(3, |cols| {
        for (col, stage) in cols.iter_mut().zip(flow_stages()) {
            col.vertical_centered(|ui| {
                ui.label(RichText::new(stage.icon).size(44.0).color(stage.color));
                ui.label(
                    RichText::new(stage.name)
                        .size(22.0)
                        .strong()
                        .color(stage.color),
                );
                ui.label(RichText::new(stage.device).size(15.0).color(SLATE_TEXT));
                Frame::default()
                    .fill(stage.color.gamma_multiply(0.12))
                    .corner_radius(CornerRadius::same(10))
                    .inner_margin(Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(stage.code)
                                .monospace()
                                .strong()
                                .size(17.0)
                                .color(stage.color),
                        );
                    });
            });
        }
    });
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("⌨  ➡  ⚙  ➡  🖥")
                .size(18.0)
                .color(Color32::from_gray(150)),
        );
    });
}

fn input_walkthrough(ui: &mut Ui) {
    ui.columns(3, |cols| {
        for (col, step) in cols.iter_mut().zip(input_steps()) {
            col.vertical_centered(|ui| {
                Frame::default()
                    .fill(Color32::from_gray(250))
                    .stroke(Stroke::new(1.0, Color32::from_gray(210)))
                    .corner_radius(CornerRadius::same(12))
                    .inner_margin(Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            pill(ui, step.color, Color32::WHITE, step.badge);
                            ui.add_space(6.0);
                            ui.label(
                                RichText::new(step.caption)
                                    .monospace()
                                    .size(13.0)
                                    .color(Color32::from_gray(120)),
                            );
                            ui.label(
                                RichText::new(step.display)
                                    .monospace()
                                    .strong()
                                    .size(18.0)
                                    .color(step.color),
                            );
                            ui.add_space(6.0);
                            ui.label(RichText::new(step.note).size(14.0).color(SLATE_TEXT));
                        });
                    });
            });
        }
    });
}
