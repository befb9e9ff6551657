use std::time::Duration;

use log::warn;

use crate::audio::KiraDriver;
use crate::input;
use crate::kit::{KitController, KitLayout};
use crate::traits::StyleProperty;
use crate::view::board::PadBoard;
use crate::view::theme::{self, Theme};

/// Pad geometry.
const PAD_SIZE: f32 = 104.0;
const PAD_GAP: f32 = 14.0;
const PAD_CORNER: u8 = 8;
/// Extra scale at full highlight; this is the transform whose completion
/// drops the highlight again.
const PRESSED_SCALE: f32 = 0.08;

/// The eframe shell: pumps host key events into the controller, advances
/// the style transitions, and paints the board.
pub struct DrumKitApp {
    controller: KitController,
    layout: KitLayout,
    driver: KiraDriver,
    board: PadBoard,
    theme: Theme,
}

impl DrumKitApp {
    pub fn new(
        controller: KitController,
        layout: KitLayout,
        driver: KiraDriver,
        board: PadBoard,
    ) -> Self {
        Self {
            controller,
            layout,
            driver,
            board,
            theme: Theme::default(),
        }
    }

    fn paint_board(&self, ui: &egui::Ui) {
        let painter = ui.painter();
        let panel = ui.max_rect();

        if self.board.is_empty() {
            painter.text(
                panel.center(),
                egui::Align2::CENTER_CENTER,
                "no pads configured",
                egui::FontId::proportional(16.0),
                self.theme.label,
            );
            return;
        }

        let count = self.board.len();
        let row_width = count as f32 * PAD_SIZE + (count - 1) as f32 * PAD_GAP;
        let origin = egui::pos2(
            panel.center().x - row_width / 2.0,
            panel.center().y - PAD_SIZE / 2.0,
        );

        for (id, pad) in self.board.iter() {
            let transform = pad.style_value(StyleProperty::Transform);
            let border = pad.style_value(StyleProperty::BorderColor);
            let glow = pad.style_value(StyleProperty::Glow);

            let center = egui::pos2(
                origin.x + id.0 as f32 * (PAD_SIZE + PAD_GAP) + PAD_SIZE / 2.0,
                origin.y + PAD_SIZE / 2.0,
            );
            let size = PAD_SIZE * (1.0 + PRESSED_SCALE * transform);
            let rect = egui::Rect::from_center_size(center, egui::vec2(size, size));

            if glow > 0.0 {
                let halo = rect.expand(5.0 + 6.0 * glow);
                painter.rect_filled(
                    halo,
                    egui::CornerRadius::same(PAD_CORNER + 4),
                    self.theme.accent.gamma_multiply(0.25 * glow),
                );
            }

            let fill = theme::blend(self.theme.pad_fill, self.theme.pad_fill_active, border);
            let stroke_color = theme::blend(self.theme.border, self.theme.accent, border);
            painter.rect_filled(rect, egui::CornerRadius::same(PAD_CORNER), fill);
            painter.rect_stroke(
                rect,
                egui::CornerRadius::same(PAD_CORNER),
                egui::Stroke::new(2.0, stroke_color),
                egui::StrokeKind::Inside,
            );

            painter.text(
                rect.center() - egui::vec2(0.0, 14.0),
                egui::Align2::CENTER_CENTER,
                pad.key().hint(),
                egui::FontId::proportional(24.0),
                self.theme.key_label,
            );
            painter.text(
                rect.center() + egui::vec2(0.0, 18.0),
                egui::Align2::CENTER_CENTER,
                pad.label(),
                egui::FontId::proportional(13.0),
                self.theme.label,
            );
        }
    }
}

impl eframe::App for DrumKitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Key events first, completion events second, each batch in
        // delivery order.
        let presses = ctx.input(|i| input::key_presses(i));
        for press in &presses {
            if let Err(e) = self.controller.handle_key_down(
                press,
                &self.layout,
                &mut self.driver,
                &mut self.board,
            ) {
                warn!("playback failed for {}: {e:#}", press.code);
            }
        }

        let dt = ctx.input(|i| Duration::from_secs_f32(i.stable_dt));
        for event in self.board.advance(dt) {
            self.controller.handle_transition_end(&event, &mut self.board);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.background))
            .show(ctx, |ui| self.paint_board(ui));

        // Keep ticking while transitions settle between input events.
        ctx.request_repaint();
    }
}
