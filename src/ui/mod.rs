pub mod helpers;
pub mod layout;
pub mod views;

use crate::app::LessonApp;
use crate::model::Section;
use egui::{CentralPanel, Context, ScrollArea};
use layout::nav_dock;

impl eframe::App for LessonApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        nav_dock(self, ctx);

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let max_width = 900.0;
                    let side = ((ui.available_width() - max_width) / 2.0).max(12.0);
                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
                        ui.add_space(side);
                        ui.vertical(|ui| {
                            ui.set_max_width(max_width);

                            views::header::ui_header(ui);
                            let centers = [
                                (Section::Theory, views::theory::ui_theory(self, ui)),
                                (Section::Types, views::types::ui_types(self, ui)),
                                (Section::Quiz, views::quiz::ui_quiz(self, ui)),
                                (Section::Practice, views::practice::ui_practice(self, ui)),
                            ];

                            let viewport_center = ui.clip_rect().center().y;
                            self.update_active_section(&centers, viewport_center);
                        });
                    });
                });
        });

        if self.confirm_reset {
            self.confirm_reset_window(ctx);
        }
    }
}
