// src/ui/helpers.rs
use crate::model::Difficulty;
use crate::ui::layout::INDIGO;
use crate::view_models::{NavItem, difficulty_color};
use egui::{Button, Color32, CornerRadius, Frame, Margin, RichText, Ui, vec2};

pub fn dock_button(ui: &mut Ui, item: &NavItem, active: bool, width: f32) -> bool {
    let mut text = RichText::new(format!("{} {}", item.icon, item.label)).size(15.0);
    if active {
        text = text.color(Color32::WHITE).strong();
    }
    let mut button = Button::new(text)
        .min_size(vec2(width, 34.0))
        .corner_radius(CornerRadius::same(17));
    if active {
        button = button.fill(INDIGO);
    }
    ui.add(button).clicked()
}

/// How one answer option is drawn, given the question's answer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionVisual {
    /// Unanswered question, pickable.
    Neutral,
    /// The correct option on an answered question.
    Correct,
    /// The wrong option the user picked.
    WrongPick,
    /// Everything else once answered.
    Dimmed,
}

pub fn option_button(
    ui: &mut Ui,
    letter: char,
    text: &str,
    visual: OptionVisual,
    enabled: bool,
) -> bool {
    let (fill, text_color) = match visual {
        OptionVisual::Neutral => (Color32::from_gray(247), Color32::from_rgb(30, 41, 59)),
        OptionVisual::Correct => (Color32::from_rgb(34, 197, 94), Color32::WHITE),
        OptionVisual::WrongPick => (Color32::from_rgb(239, 68, 68), Color32::WHITE),
        OptionVisual::Dimmed => (Color32::from_gray(240), Color32::from_gray(168)),
    };

    let label = RichText::new(format!("{letter}.  {text}"))
        .size(16.0)
        .color(text_color);
    let button = Button::new(label)
        .fill(fill)
        .wrap()
        .min_size(vec2(ui.available_width(), 44.0))
        .corner_radius(CornerRadius::same(12));
    ui.add_enabled(enabled, button).clicked()
}

pub fn difficulty_badge(ui: &mut Ui, difficulty: Difficulty) {
    let color = difficulty_color(difficulty);
    Frame::default()
        .fill(color.gamma_multiply(0.15))
        .corner_radius(CornerRadius::same(9))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(difficulty.label()).color(color).strong().size(13.0));
        });
}

/// Pill label, used for the header badge and the walkthrough step badges.
pub fn pill(ui: &mut Ui, fill: Color32, text_color: Color32, text: &str) {
    Frame::default()
        .fill(fill)
        .corner_radius(CornerRadius::same(14))
        .inner_margin(Margin::symmetric(12, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(text_color).strong().size(14.0));
        });
}
