// ui.rs - egui front end driving a life::Session

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life::{Pan, ascii, patterns};

use crate::LifeApp;

const MAX_BOX_SIZE: f32 = 30.0;
const MIN_BOX_SIZE: f32 = 3.0;
const SPACING: f32 = 0.5;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.poll(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui);
            ui.separator();
            self.file_controls(ui);
            ui.separator();
            self.field(ui);
            ui.separator();

            let viewport = *self.session.viewport();
            ui.horizontal(|ui| {
                ui.label(format!("Ticks: {}", self.session.tick_count()));
                ui.label(format!("Live cells: {}", self.session.population()));
                ui.label(format!(
                    "Centre: ({}, {})",
                    viewport.center.x, viewport.center.y
                ));
            });
        });

        if self.session.is_running() {
            ctx.request_repaint_after(Duration::from_millis(10));
        }
    }
}

impl LifeApp {
    fn controls(&mut self, ui: &mut egui::Ui) {
        let running = self.session.is_running();

        ui.horizontal(|ui| {
            let button_text = if running { "⏸ Pause" } else { "▶ Play" };
            if ui.add_enabled(!self.session.is_drawing(), egui::Button::new(button_text)).clicked() {
                self.session.toggle_running();
            }

            if ui.add_enabled(!running, egui::Button::new("⏭ Step")).clicked() {
                self.session.step();
            }

            if ui.button("⏹ Clear").clicked() {
                self.session.clear();
            }

            if ui.button("🎲 Random").clicked() {
                self.randomize();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.apply_selected_pattern();
            }
        });

        ui.horizontal(|ui| {
            // Size is fixed while running.
            let viewport = *self.session.viewport();
            let mut width = viewport.width;
            let mut height = viewport.height;
            ui.add_enabled_ui(!running, |ui| {
                ui.label("Size:");
                let w = ui.add(egui::DragValue::new(&mut width).clamp_range(1..=200));
                ui.label("x");
                let h = ui.add(egui::DragValue::new(&mut height).clamp_range(1..=200));
                if (w.changed() || h.changed()) && self.session.resize(width, height).is_err() {
                    self.notice = Some(String::from("Pause before resizing"));
                }
            });

            ui.separator();

            let draw_text = if self.session.is_drawing() { "Exit Draw Mode" } else { "Enter Draw Mode" };
            if ui.add_enabled(!running, egui::Button::new(draw_text)).clicked() {
                self.session.toggle_drawing();
            }

            ui.separator();

            ui.add_enabled_ui(!running, |ui| {
                if ui.button("◀").clicked() {
                    self.session.pan(Pan::Left);
                }
                if ui.button("▲").clicked() {
                    self.session.pan(Pan::Up);
                }
                if ui.button("▼").clicked() {
                    self.session.pan(Pan::Down);
                }
                if ui.button("▶").clicked() {
                    self.session.pan(Pan::Right);
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.session.interval().as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                self.session.set_interval(Duration::from_millis((1000.0 / speed) as u64));
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn file_controls(&mut self, ui: &mut egui::Ui) {
        let running = self.session.is_running();

        ui.horizontal(|ui| {
            ui.label("File:");
            ui.text_edit_singleline(&mut self.file_path);

            if ui.add_enabled(!running, egui::Button::new("Load from file")).clicked() {
                let path = self.selected_path();
                self.load_from_path(&path);
            }
            if ui.add_enabled(!running, egui::Button::new("Save to file")).clicked() {
                let path = self.selected_path();
                self.save_to_path(&path);
            }
        });

        ui.label("Files ending in .json keep the whole field; anything else stores the visible window as text.");
        if let Some(notice) = &self.notice {
            ui.label(notice.as_str());
        }
    }

    fn field(&mut self, ui: &mut egui::Ui) {
        let viewport = *self.session.viewport();
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        let columns = viewport.width as f32;
        let rows = viewport.height as f32;
        let box_size = ((ui.available_width() + SPACING) / columns - SPACING)
            .clamp(MIN_BOX_SIZE, MAX_BOX_SIZE);
        let pitch = box_size + SPACING;

        let start_pos = ui.cursor().min;
        let total_size = Vec2::new(pitch * columns - SPACING, pitch * rows - SPACING);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        painter.rect_filled(
            Rect::from_min_size(start_pos, total_size),
            0.0,
            Color32::BLACK,
        );

        let text = self.session.render();
        for (row, line) in text.split('\n').enumerate() {
            for (column, ch) in line.chars().enumerate() {
                let x = start_pos.x + column as f32 * pitch;
                let y = start_pos.y + row as f32 * pitch;
                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                let cell_color = if ch == ascii::LIVE {
                    self.live_color
                } else {
                    self.dead_color
                };

                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // Clicks only edit in draw mode; Session::click ignores them otherwise.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - start_pos;
                if offset.x >= 0.0 && offset.y >= 0.0 {
                    let column = (offset.x / pitch) as u32;
                    let row = (offset.y / pitch) as u32;
                    self.session.click(column, row);
                }
            }
        }
    }
}
