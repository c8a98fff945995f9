// ui.rs - Toolbar, canvas and controls

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use life_core::{COLS, MAX_SPEED, MIN_SPEED, ROWS, Speed};
use log::{debug, warn};

use crate::LifeApp;

pub const CELL_SIZE: f32 = 20.0;
pub const CANVAS_OFFSET: f32 = 16.0;

const LIVE_COLOR: Color32 = Color32::BLACK;
const LINE_COLOR: Color32 = Color32::GRAY;

/// Maps a pointer position to `(row, col)`, or `None` outside the grid.
/// `origin` is the top-left corner of cell (0, 0).
pub fn cell_at(pointer: Pos2, origin: Pos2) -> Option<(usize, usize)> {
    let col = ((pointer.x - origin.x) / CELL_SIZE).floor();
    let row = ((pointer.y - origin.y) / CELL_SIZE).floor();
    if row < 0.0 || col < 0.0 {
        return None;
    }
    let (row, col) = (row as usize, col as usize);
    (row < ROWS && col < COLS).then_some((row, col))
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.simulation.tick(Instant::now());

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button_text = if self.simulation.is_playing() { "⏸ Pause" } else { "▶ Play" };
                if ui.button(button_text).clicked() {
                    self.simulation.toggle_playing();
                }

                ui.separator();
                ui.label(format!("Generation = {}", self.simulation.generation()));
                ui.separator();
                ui.label(format!("Live cells: {}", self.simulation.grid().population()));
            });

            ui.horizontal(|ui| {
                let mut speed = self.simulation.speed().get();
                ui.add(egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED).show_value(false));
                self.simulation.set_speed(Speed::new(speed));
                ui.label(format!("Speed : {}", self.simulation.speed().get()));
            });

            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| self.draw_canvas(ui));
        });

        // Keep frames coming while playing so tick() gets polled
        if self.simulation.is_playing() {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let grid_size = Vec2::new(COLS as f32 * CELL_SIZE, ROWS as f32 * CELL_SIZE);
        let total_size = grid_size + Vec2::splat(CANVAS_OFFSET * 2.0);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min + Vec2::splat(CANVAS_OFFSET);
        let stroke = Stroke::new(1.0, LINE_COLOR);

        for i in 0..=ROWS {
            let y = origin.y + i as f32 * CELL_SIZE;
            painter.line_segment([egui::pos2(origin.x, y), egui::pos2(origin.x + grid_size.x, y)], stroke);
        }
        for j in 0..=COLS {
            let x = origin.x + j as f32 * CELL_SIZE;
            painter.line_segment([egui::pos2(x, origin.y), egui::pos2(x, origin.y + grid_size.y)], stroke);
        }

        for (row, col) in self.simulation.grid().live_cells() {
            let top_left = origin + Vec2::new(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE);
            painter.rect_filled(Rect::from_min_size(top_left, Vec2::splat(CELL_SIZE)), 0.0, LIVE_COLOR);
        }

        if response.clicked() {
            if let Some((row, col)) = response.interact_pointer_pos().and_then(|pos| cell_at(pos, origin)) {
                match self.simulation.edit_cell(row, col) {
                    Ok(true) => debug!("cell ({row}, {col}) set alive"),
                    Ok(false) => {}
                    Err(err) => warn!("{err}"),
                }
            }
        }
    }
}
