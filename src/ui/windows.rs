//! egui painting for the sequence viewport.
//!
//! The scene is world-space; a fixed camera on the +z axis projects it with
//! a simple pinhole model. Depth only affects screen position and size, so
//! draw order within a frame is the act order already baked into the scene.

use egui::{
    Align2, Button, CentralPanel, Color32, FontId, Painter, Pos2, Rect, RichText, Stroke, Vec2,
};
use glam::Vec3;

use crate::seq::Phase;
use crate::ui::viewdata::UiFrame;

const CAMERA_Z: f32 = 50.0;
const FOV_DEG: f32 = 60.0;

struct Camera {
    center: Pos2,
    focal: f32,
}

impl Camera {
    fn new(rect: Rect) -> Self {
        let focal = 0.5 * rect.height() / (FOV_DEG * 0.5).to_radians().tan();
        Self {
            center: rect.center(),
            focal,
        }
    }

    /// Project a world point; `None` when it sits behind the camera.
    fn project(&self, p: Vec3) -> Option<(Pos2, f32)> {
        let depth = CAMERA_Z - p.z;
        if depth <= 0.1 {
            return None;
        }
        let scale = self.focal / depth;
        let pos = Pos2::new(
            self.center.x + p.x * scale,
            self.center.y - p.y * scale,
        );
        Some((pos, scale))
    }
}

fn color32(c: [f32; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (c[0].clamp(0.0, 1.0) * 255.0) as u8,
        (c[1].clamp(0.0, 1.0) * 255.0) as u8,
        (c[2].clamp(0.0, 1.0) * 255.0) as u8,
        (c[3].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

fn paint_scene(painter: &Painter, rect: Rect, frame: &UiFrame) {
    painter.rect_filled(rect, 0.0, Color32::BLACK);
    let cam = Camera::new(rect);

    for line in &frame.scene.lines {
        if let (Some((a, _)), Some((b, _))) = (cam.project(line.a), cam.project(line.b)) {
            painter.line_segment([a, b], Stroke::new(1.0, color32(line.color)));
        }
    }
    for point in &frame.scene.points {
        if let Some((pos, scale)) = cam.project(point.position) {
            let radius = (point.size * scale * 0.5).max(0.5);
            painter.circle_filled(pos, radius, color32(point.color));
        }
    }

    if frame.scene.flash > 0.0 {
        let alpha = (frame.scene.flash.clamp(0.0, 1.0) * 255.0) as u8;
        painter.rect_filled(rect, 0.0, Color32::from_rgba_unmultiplied(255, 255, 255, alpha));
    }
}

fn phase_indicator(ui: &mut egui::Ui, phase: Phase) {
    let current = phase.index();
    ui.horizontal(|ui| {
        for i in 0..Phase::ACTS {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(24.0, 4.0), egui::Sense::hover());
            let fill = if i <= current {
                Color32::from_rgb(0, 229, 255)
            } else {
                Color32::from_gray(60)
            };
            ui.painter().rect_filled(rect, 2.0, fill);
        }
    });
}

/// Closing tagline: the sentence plus the small brand line beneath it.
pub const TAGLINE: &str = "Let the invention be hidden in your vision.";
pub const TAGLINE_BRAND: &str = "METAVENTIONS AI";

fn tagline(painter: &Painter, rect: Rect, alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    painter.text(
        Pos2::new(rect.center().x, rect.bottom() - 120.0),
        Align2::CENTER_CENTER,
        TAGLINE,
        FontId::proportional(24.0),
        Color32::from_rgba_unmultiplied(255, 255, 255, a),
    );
    painter.text(
        Pos2::new(rect.center().x, rect.bottom() - 88.0),
        Align2::CENTER_CENTER,
        TAGLINE_BRAND,
        FontId::monospace(12.0),
        Color32::from_rgba_unmultiplied(102, 102, 102, a),
    );
}

/// Paint one frame. Returns true when the user pressed SKIP.
pub fn main_window(ctx: &egui::Context, frame: &UiFrame) -> bool {
    let mut skip_clicked = false;
    CentralPanel::default()
        .frame(egui::Frame::NONE.fill(Color32::BLACK))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            paint_scene(ui.painter(), rect, frame);
            tagline(ui.painter(), rect, frame.tagline_alpha);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(16.0);
                phase_indicator(ui, frame.phase);
            });

            if frame.show_skip {
                let button = Button::new(RichText::new("SKIP").size(14.0).color(Color32::WHITE))
                    .fill(Color32::from_black_alpha(160));
                let pos = Rect::from_min_size(
                    Pos2::new(rect.right() - 90.0, rect.bottom() - 48.0),
                    Vec2::new(74.0, 32.0),
                );
                if ui.put(pos, button).clicked() {
                    skip_clicked = true;
                }
            }
        });
    skip_clicked
}
