//! Main application state and egui integration.
//!
//! Platform polling threads feed a crossbeam channel; each frame drains it on
//! the UI thread before drawing.

use eframe::egui;

use sensorinfo::recording::DirectorySink;
use sensorinfo::sensors::{IioPlatform, SensorPlatform};
use sensorinfo::storage::config::{AppConfig, Theme};
use sensorinfo::ui::recording_panel::{RecordingAction, RecordingPanel};
use sensorinfo::ui::sensor_list::{self, SensorAction};
use sensorinfo::ui::theme::{self, Palette};
use sensorinfo::ui::{AddSensorDialog, AddSensorRequest, Toasts};
use sensorinfo::SensorInfoState;

/// Main application state.
pub struct SensorInfoApp {
    /// Registry, session and export history
    state: SensorInfoState<IioPlatform>,
    /// Where exports are written
    sink: DirectorySink,
    /// Add-sensor dialog
    add_dialog: AddSensorDialog,
    /// Recording controls
    recording_panel: RecordingPanel,
    /// Notices
    toasts: Toasts,
    /// UI theme
    theme: Theme,
    /// The recording panel appears after the first add attempt
    add_attempted: bool,
}

impl SensorInfoApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let theme = config.ui.theme;
        cc.egui_ctx.set_visuals(theme::visuals(theme));

        let platform = IioPlatform::new(
            config.sensors.iio_root.clone(),
            config.sensors.default_poll_hz,
        );

        let export_dir = config.export_directory();
        tracing::info!("Exports go to {}", export_dir.display());

        Self {
            state: SensorInfoState::new(platform),
            sink: DirectorySink::new(export_dir),
            add_dialog: AddSensorDialog::new(),
            recording_panel: RecordingPanel::new(),
            toasts: Toasts::new(config.ui.toast_seconds),
            theme,
            add_attempted: false,
        }
    }

    fn add_sensor(&mut self, request: AddSensorRequest) {
        self.add_attempted = true;

        if let Err(e) = self.state.registry.add(request.kind, request.frequency) {
            self.toasts.error(e.notice());
        }
    }

    fn apply_sensor_action(&mut self, action: SensorAction) {
        match action {
            SensorAction::SetActive(id, active) => self.state.registry.set_active(id, active),
            SensorAction::Remove(id) => self.state.registry.remove(id),
        }
    }

    fn apply_recording_action(&mut self, action: RecordingAction) {
        match action {
            RecordingAction::Start => self.state.session.start(),
            RecordingAction::ToggleSuspend => self.state.session.toggle_suspend(),
            RecordingAction::Stop => self.state.session.stop(),
            RecordingAction::Export(name) => {
                let result = self
                    .state
                    .exports
                    .export(&name, &self.state.session, &self.sink)
                    .map(|record| format!("Saved {}", record.path.display()));

                match result {
                    Ok(message) => self.toasts.info(message),
                    Err(e) => self.toasts.error(e.to_string()),
                }
            }
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = theme::toggled(self.theme);
        ctx.set_visuals(theme::visuals(self.theme));
    }
}

impl eframe::App for SensorInfoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.process_events();

        let palette = Palette::for_theme(self.theme);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Sensor info");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("➕").on_hover_text("Add sensor").clicked() {
                        self.add_dialog.open();
                    }

                    let theme_icon = match self.theme {
                        Theme::Dark => "🌙",
                        Theme::Light => "☀",
                    };
                    if ui.button(theme_icon).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        let mut sensor_actions = Vec::new();
        let mut recording_action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                sensor_actions = sensor_list::show(ui, self.state.registry.handles(), &palette);

                if self.add_attempted {
                    ui.separator();
                    recording_action = self.recording_panel.show(ui, &self.state, &palette);
                }
            });
        });

        for action in sensor_actions {
            self.apply_sensor_action(action);
        }
        if let Some(action) = recording_action {
            self.apply_recording_action(action);
        }

        let available = self.state.registry.platform().available_kinds();
        if let Some(request) = self.add_dialog.show(ctx, &available) {
            self.add_sensor(request);
        }

        self.toasts.show(ctx, palette.error);

        // Readings arrive from polling threads without any input event.
        ctx.request_repaint();
    }
}
