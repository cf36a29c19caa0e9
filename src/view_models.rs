// src/view_models.rs
//
// Pure display data for the lesson page. Colors live next to the content
// they describe, the way the lesson material defines them.

use crate::model::{Difficulty, Section};
use egui::Color32;

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub section: Section,
    pub icon: &'static str,
    pub label: &'static str,
}

pub fn nav_items() -> [NavItem; 4] {
    [
        NavItem {
            section: Section::Theory,
            icon: "📖",
            label: "Lý thuyết",
        },
        NavItem {
            section: Section::Types,
            icon: "#",
            label: "Kiểu Dữ Liệu",
        },
        NavItem {
            section: Section::Quiz,
            icon: "❓",
            label: "Trắc nghiệm",
        },
        NavItem {
            section: Section::Practice,
            icon: "💻",
            label: "Bài tập",
        },
    ]
}

/// One stage of the INPUT → PROCESS → OUTPUT diagram.
#[derive(Clone, Copy, Debug)]
pub struct FlowStage {
    pub icon: &'static str,
    pub name: &'static str,
    pub device: &'static str,
    pub code: &'static str,
    pub color: Color32,
}

pub fn flow_stages() -> [FlowStage; 3] {
    [
        FlowStage {
            icon: "⌨",
            name: "INPUT",
            device: "Bàn phím",
            code: "input()",
            color: Color32::from_rgb(22, 163, 74),
        },
        FlowStage {
            icon: "⚙",
            name: "PROCESS",
            device: "CPU Xử lý",
            code: "Chương trình",
            color: Color32::from_rgb(79, 70, 229),
        },
        FlowStage {
            icon: "🖥",
            name: "OUTPUT",
            device: "Màn hình",
            code: "print()",
            color: Color32::from_rgb(37, 99, 235),
        },
    ]
}

/// The `input("Tên:")` three-step walkthrough.
#[derive(Clone, Copy, Debug)]
pub struct InputStep {
    pub badge: &'static str,
    pub caption: &'static str,
    pub display: &'static str,
    pub note: &'static str,
    pub color: Color32,
}

pub fn input_steps() -> [InputStep; 3] {
    [
        InputStep {
            badge: "Bước 1",
            caption: "Code chạy:",
            display: "input(\"Tên:\")",
            note: "Máy tính dừng lại chờ đợi.",
            color: Color32::from_rgb(126, 34, 206),
        },
        InputStep {
            badge: "Bước 2",
            caption: "Người dùng:",
            display: "⌨ \"An\" ↵",
            note: "Nhập \"An\" và nhấn Enter.",
            color: Color32::from_rgb(29, 78, 216),
        },
        InputStep {
            badge: "Bước 3",
            caption: "Bộ nhớ:",
            display: "\"An\"",
            note: "Xâu \"An\" được đưa vào biến.",
            color: Color32::from_rgb(21, 128, 61),
        },
    ]
}

/// One of the four data-type cards.
#[derive(Clone, Copy, Debug)]
pub struct TypeCard {
    pub label: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub example: &'static str,
    pub color: Color32,
}

pub fn type_cards() -> [TypeCard; 4] {
    [
        TypeCard {
            label: "int",
            title: "Số Nguyên",
            desc: "Dùng để đếm. Không có phần lẻ.",
            example: "1, 100, -5",
            color: Color32::from_rgb(37, 99, 235),
        },
        TypeCard {
            label: "float",
            title: "Số Thực",
            desc: "Dùng để đo lường. Có dấu chấm.",
            example: "3.14, 1.5",
            color: Color32::from_rgb(22, 163, 74),
        },
        TypeCard {
            label: "str",
            title: "Xâu Kí Tự",
            desc: "Văn bản. Để trong nháy kép.",
            example: "\"Hello\"",
            color: Color32::from_rgb(202, 138, 4),
        },
        TypeCard {
            label: "bool",
            title: "Logic",
            desc: "Chỉ có True hoặc False.",
            example: "True, False",
            color: Color32::from_rgb(220, 38, 38),
        },
    ]
}

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => Color32::from_rgb(22, 163, 74),
        Difficulty::Medium => Color32::from_rgb(217, 119, 6),
        Difficulty::Hard => Color32::from_rgb(220, 38, 38),
    }
}
