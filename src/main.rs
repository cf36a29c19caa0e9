#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Tin Học 10 - Bài 18: Vào Ra Đơn Giản",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(vao_ra_don_gian::LessonApp::new()))
        }),
    )
}

// The wasm build ships as a cdylib; this stub only keeps the bin target compiling.
#[cfg(target_arch = "wasm32")]
fn main() {}
