// main.rs - Desktop shell for Conway's Game of Life
// Window setup lives here, drawing and input in ui.rs

use eframe::egui;
use life_core::{COLS, ROWS, Simulation};
use log::info;

mod ui;

const WINDOW_MIN_SIZE: [f32; 2] = [700.0, 1000.0];

fn main() -> eframe::Result<()> {
    env_logger::init();
    info!("starting {}x{} grid", ROWS, COLS);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_MIN_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

/// UI wrapper around the simulation state.
#[derive(Default)]
pub struct LifeApp {
    pub simulation: Simulation,
}
