use crate::scene::Scene;

/// Change callback invoked with the clamped new value when a bound
/// control moves
pub type Binding = Box<dyn FnMut(&mut Scene, f32)>;

struct Control {
    label: String,
    min: f32,
    max: f32,
    value: f32,
    binding: Option<Binding>,
    dirty: bool,
}

impl Control {
    fn clamp(&self, requested: f32) -> f32 {
        requested.clamp(self.min, self.max)
    }
}

/// Debug control panel: named numeric sliders with a declared range.
/// Out-of-range input is clamped, never rejected. A control either stores
/// a plain numeric field its owner reads back, or carries a change
/// callback applied to the scene.
#[derive(Default)]
pub struct ControlPanel {
    controls: Vec<Control>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain numeric field control - the stored value is the binding
    pub fn with_field(mut self, label: &str, min: f32, max: f32, initial: f32) -> Self {
        self.controls.push(Control {
            label: label.to_string(),
            min,
            max,
            value: initial.clamp(min, max),
            binding: None,
            dirty: false,
        });
        self
    }

    /// Control bound to a change callback applied via `apply_pending`
    pub fn with_callback(
        mut self,
        label: &str,
        min: f32,
        max: f32,
        initial: f32,
        binding: impl FnMut(&mut Scene, f32) + 'static,
    ) -> Self {
        self.controls.push(Control {
            label: label.to_string(),
            min,
            max,
            value: initial.clamp(min, max),
            binding: Some(Box::new(binding)),
            dirty: false,
        });
        self
    }

    /// Set a control by label. The value is clamped to the declared range;
    /// returns the applied value, or `None` for an unknown label.
    pub fn set(&mut self, label: &str, requested: f32) -> Option<f32> {
        let control = self.controls.iter_mut().find(|c| c.label == label)?;
        let clamped = control.clamp(requested);
        if clamped != control.value {
            control.value = clamped;
            control.dirty = true;
        }
        Some(clamped)
    }

    pub fn value(&self, label: &str) -> Option<f32> {
        self.controls
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value)
    }

    /// Run change callbacks for every control touched since the last call.
    /// Invoked once per frame tick, before entity updates.
    pub fn apply_pending(&mut self, scene: &mut Scene) {
        for control in &mut self.controls {
            if !control.dirty {
                continue;
            }
            control.dirty = false;
            if let Some(binding) = &mut control.binding {
                binding(scene, control.value);
            }
        }
    }

    /// Draw the panel as egui sliders; slider motion marks controls dirty
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::Window::new("Controls")
            .resizable(false)
            .default_pos(egui::pos2(10.0, 80.0))
            .show(ctx, |ui| {
                for control in &mut self.controls {
                    let response = ui.add(
                        egui::Slider::new(&mut control.value, control.min..=control.max)
                            .text(&control.label),
                    );
                    if response.changed() {
                        control.dirty = true;
                    }
                }
            });
    }
}

/// The demo's two controls, matching the scene's adjustable parameters
pub fn debug_panel() -> ControlPanel {
    ControlPanel::new()
        .with_field("X Position", 0.0, 10.0, 1.0)
        .with_callback("Intensity", 0.0, 2.0, 1.0, |scene, value| {
            scene.ambient.intensity = value;
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_input_is_clamped() {
        let mut panel = debug_panel();

        assert_eq!(panel.set("Intensity", 5.0), Some(2.0));
        assert_eq!(panel.value("Intensity"), Some(2.0));

        assert_eq!(panel.set("Intensity", -3.0), Some(0.0));
        assert_eq!(panel.value("Intensity"), Some(0.0));
    }

    #[test]
    fn callback_binding_reaches_the_light() {
        let mut panel = debug_panel();
        let mut scene = Scene::compose();

        panel.set("Intensity", 5.0);
        panel.apply_pending(&mut scene);

        assert!((scene.ambient.intensity - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn pending_changes_fire_once() {
        let mut panel = debug_panel();
        let mut scene = Scene::compose();

        panel.set("Intensity", 0.5);
        panel.apply_pending(&mut scene);
        assert!((scene.ambient.intensity - 0.5).abs() < f32::EPSILON);

        // Nothing dirty: a later mutation elsewhere must survive
        scene.ambient.intensity = 1.7;
        panel.apply_pending(&mut scene);
        assert!((scene.ambient.intensity - 1.7).abs() < f32::EPSILON);
    }

    #[test]
    fn field_binding_stores_the_clamped_value() {
        let mut panel = debug_panel();

        assert_eq!(panel.set("X Position", 42.0), Some(10.0));
        assert_eq!(panel.value("X Position"), Some(10.0));

        assert_eq!(panel.set("X Position", 3.5), Some(3.5));
        assert_eq!(panel.value("X Position"), Some(3.5));
    }

    #[test]
    fn unknown_label_is_none() {
        let mut panel = debug_panel();
        assert_eq!(panel.set("Fog Density", 1.0), None);
        assert_eq!(panel.value("Fog Density"), None);
    }

    #[test]
    fn in_range_values_pass_through_unchanged() {
        let mut panel = debug_panel();
        assert_eq!(panel.set("Intensity", 1.25), Some(1.25));
    }
}
