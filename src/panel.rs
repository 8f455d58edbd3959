use crate::params::{
    Parameters, SharedParameters, AMOUNT_RANGE, AMOUNT_STEP, FREQUENCY_RANGE, SPEED_RANGE, SPEED_STEP,
};
use crate::traits::ParameterSource;

/// Read-only numbers shown under the sliders
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub time: f64,
    pub vertices: usize,
    pub resolution: (u32, u32),
}

/// egui window exposing the live deformation parameters
pub struct ParameterPanel {
    params: SharedParameters,
}

impl ParameterPanel {
    pub fn new(params: SharedParameters) -> Self {
        Self { params }
    }

    /// Draw the panel. Returns true if a slider changed a value.
    pub fn show(&mut self, ctx: &egui::Context, stats: &PanelStats) -> bool {
        let mut edited = self.params.snapshot();
        let mut touched = false;

        egui::Window::new("Deform")
            .title_bar(true)
            .resizable(false)
            .default_pos(egui::pos2(10.0, 10.0))
            .default_width(250.0)
            .show(ctx, |ui| {
                touched |= parameter_sliders(ui, &mut edited);

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);

                ui.heading(
                    egui::RichText::new(format!("{:.0} FPS", stats.fps))
                        .size(24.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );
                ui.label(
                    egui::RichText::new(format!("{:.2} ms", stats.frame_time_ms))
                        .size(14.0)
                        .color(egui::Color32::GRAY),
                );
                ui.monospace(format!("Vertices: {}", stats.vertices));
                ui.monospace(format!(
                    "Resolution: {}x{}",
                    stats.resolution.0, stats.resolution.1
                ));
                ui.monospace(format!("Time: {:.2}s", stats.time));
            });

        touched && self.params.set(edited)
    }
}

fn parameter_sliders(ui: &mut egui::Ui, params: &mut Parameters) -> bool {
    let frequency = ui.add(
        egui::Slider::new(&mut params.frequency, FREQUENCY_RANGE)
            .step_by(1.0)
            .text("frequency"),
    );
    let speed = ui.add(
        egui::Slider::new(&mut params.speed, SPEED_RANGE)
            .step_by(SPEED_STEP)
            .text("speed"),
    );
    let amount = ui.add(
        egui::Slider::new(&mut params.amount, AMOUNT_RANGE)
            .step_by(AMOUNT_STEP)
            .text("amount"),
    );
    frequency.changed() || speed.changed() || amount.changed()
}
