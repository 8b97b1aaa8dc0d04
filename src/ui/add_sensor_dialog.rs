//! Modal dialog for adding a sensor.

use egui::{Align2, ComboBox, RichText, Window};

use crate::sensors::types::{FrequencyHint, SensorKind};

/// What the user asked for when pressing Add.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddSensorRequest {
    /// Selected kind, `None` if nothing was picked
    pub kind: Option<SensorKind>,
    /// Parsed frequency field
    pub frequency: FrequencyHint,
}

/// Dialog state. Selection and frequency persist between openings.
#[derive(Debug, Default)]
pub struct AddSensorDialog {
    open: bool,
    /// Selected kind
    pub selected: Option<SensorKind>,
    /// Raw frequency field
    pub frequency_text: String,
}

impl AddSensorDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The request the current field values describe.
    pub fn request(&self) -> AddSensorRequest {
        AddSensorRequest {
            kind: self.selected,
            frequency: FrequencyHint::parse(&self.frequency_text),
        }
    }

    /// Confirm the dialog: close it and return the request.
    pub fn confirm(&mut self) -> AddSensorRequest {
        self.open = false;
        self.request()
    }

    /// Draw the dialog if open. Returns a request when Add was pressed.
    ///
    /// Kinds missing from `available` are still listed, dimmed.
    pub fn show(&mut self, ctx: &egui::Context, available: &[SensorKind]) -> Option<AddSensorRequest> {
        if !self.open {
            return None;
        }

        let mut request = None;
        let mut cancelled = false;

        Window::new("Add sensor")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("add_sensor_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Sensor type");
                        let selected_text = self
                            .selected
                            .map(|kind| kind.label().to_string())
                            .unwrap_or_default();
                        ComboBox::from_id_salt("sensor_kind")
                            .selected_text(selected_text)
                            .show_ui(ui, |ui| {
                                for kind in SensorKind::ALL {
                                    let text = if available.contains(&kind) {
                                        RichText::new(kind.label())
                                    } else {
                                        RichText::new(kind.label()).weak()
                                    };
                                    ui.selectable_value(&mut self.selected, Some(kind), text);
                                }
                            });
                        ui.end_row();

                        ui.label("Frequency");
                        ui.text_edit_singleline(&mut self.frequency_text);
                        ui.end_row();
                    });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        request = Some(self.request());
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if request.is_some() || cancelled {
            self.open = false;
        }

        request
    }
}
