use crate::ui::helpers::pill;
use crate::ui::layout::{INDIGO, INDIGO_DARK, SLATE_TEXT};
use egui::{RichText, Ui};

pub fn ui_header(ui: &mut Ui) {
    ui.add_space(28.0);
    ui.vertical_centered(|ui| {
        pill(ui, INDIGO, egui::Color32::WHITE, "Tin Học 10 - Bài 18");
        ui.add_space(14.0);
        ui.label(
            RichText::new("VÀO RA ĐƠN GIẢN")
                .size(58.0)
                .strong()
                .color(INDIGO_DARK),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new("Giao tiếp với máy tính bằng Python!")
                .size(24.0)
                .strong()
                .color(SLATE_TEXT),
        );
    });
    ui.add_space(28.0);
}
