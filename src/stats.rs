const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame timing overlay state. Purely observational: accumulates frame
/// deltas and recomputes the displayed FPS once per interval.
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    pub fn tick(&mut self, delta: f32) {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.elapsed;
            self.frame_count = 0;
            self.elapsed = 0.0;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Corner overlay in the style of a stats widget
    pub fn ui(&self, ctx: &egui::Context) {
        egui::Window::new("FPS")
            .title_bar(false)
            .resizable(false)
            .fixed_pos(egui::pos2(10.0, 10.0))
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0}", self.fps))
                        .size(48.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );
                ui.label(
                    egui::RichText::new("FPS")
                        .size(12.0)
                        .color(egui::Color32::GRAY),
                );
            });
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_updates_once_per_interval() {
        let mut counter = FpsCounter::new();

        // 59 frames over 0.98s - still inside the interval
        for _ in 0..59 {
            counter.tick(1.0 / 60.0);
        }
        assert_eq!(counter.fps(), 0.0);

        // Crossing the interval recomputes
        counter.tick(1.0 / 60.0);
        assert!((counter.fps() - 60.0).abs() < 1.0);
    }

    #[test]
    fn counter_resets_after_reporting() {
        let mut counter = FpsCounter::new();
        for _ in 0..120 {
            counter.tick(1.0 / 120.0);
        }
        let first = counter.fps();
        assert!(first > 0.0);

        // A slower second interval must be reflected, not averaged away
        for _ in 0..30 {
            counter.tick(1.0 / 30.0);
        }
        assert!((counter.fps() - 30.0).abs() < 1.0);
    }
}
