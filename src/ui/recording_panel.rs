//! Recording controls, export name field and export history table.

use egui::{Button, RichText, Ui};

use crate::recording::RecordingState;
use crate::sensors::platform::SensorPlatform;
use crate::state::SensorInfoState;
use crate::ui::theme::Palette;

/// Button pressed in the recording panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingAction {
    Start,
    ToggleSuspend,
    Stop,
    /// Download with the name currently in the field
    Export(String),
}

/// Panel state: the file-name field.
#[derive(Debug, Default)]
pub struct RecordingPanel {
    /// Contents of the name field
    pub file_name: String,
    last_proposal: Option<String>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refill the name field when the proposed default name changes.
    ///
    /// User edits are kept until the next proposal.
    pub fn sync_proposal(&mut self, proposal: Option<String>) {
        if proposal != self.last_proposal {
            self.file_name = proposal.clone().unwrap_or_default();
            self.last_proposal = proposal;
        }
    }

    /// Draw the panel. Returns the button pressed this frame, if any.
    pub fn show<P: SensorPlatform>(
        &mut self,
        ui: &mut Ui,
        state: &SensorInfoState<P>,
        palette: &Palette,
    ) -> Option<RecordingAction> {
        self.sync_proposal(state.exports.proposed_name(&state.session));

        let mut action = None;

        ui.horizontal(|ui| {
            if ui.button("Start Record").clicked() {
                action = Some(RecordingAction::Start);
            }
            if ui
                .add_enabled(state.can_suspend(), Button::new(state.suspend_label()))
                .clicked()
            {
                action = Some(RecordingAction::ToggleSuspend);
            }
            if ui.add_enabled(state.can_stop(), Button::new("Stop")).clicked() {
                action = Some(RecordingAction::Stop);
            }

            ui.separator();
            ui.label(state_badge(state.session.state(), palette));
        });

        ui.horizontal(|ui| {
            ui.add_enabled(
                state.can_export(),
                egui::TextEdit::singleline(&mut self.file_name).hint_text("file name"),
            );
            if ui
                .add_enabled(state.can_export(), Button::new("Download"))
                .clicked()
            {
                action = Some(RecordingAction::Export(self.file_name.clone()));
            }
        });

        ui.label(format!(
            "The number of current records is {}",
            state.session.row_count()
        ));

        ui.add_space(8.0);

        let records = state.exports.records();
        if !records.is_empty() {
            egui::Grid::new("export_table")
                .num_columns(2)
                .striped(true)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("CSV Name").strong());
                    ui.label(RichText::new("Record Number").strong());
                    ui.end_row();

                    for record in records {
                        ui.label(&record.file_name)
                            .on_hover_text(record.path.display().to_string());
                        ui.label(record.row_count.to_string());
                        ui.end_row();
                    }
                });
        }

        action
    }
}

fn state_badge(state: RecordingState, palette: &Palette) -> RichText {
    let color = match state {
        RecordingState::Recording => palette.success,
        RecordingState::Suspended => palette.warning,
        RecordingState::Idle | RecordingState::Stopped => palette.text_weak,
    };
    RichText::new(state.to_string()).color(color)
}
