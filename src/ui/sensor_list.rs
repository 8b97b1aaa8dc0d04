//! Sensor cards: one per handle, with a toggle and a remove button.

use egui::{Align, Frame, Layout, RichText, Ui};

use crate::sensors::registry::SensorHandle;
use crate::ui::theme::Palette;

/// User action on a sensor card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorAction {
    /// Toggle flipped to the given value
    SetActive(usize, bool),
    /// Remove button pressed
    Remove(usize),
}

/// Text lines shown on a card, in display order.
pub fn card_lines(handle: &SensorHandle) -> Vec<String> {
    let mut lines = vec![
        format!("Sensor type: {}", handle.kind.label()),
        format!("Frequency hint: {}", handle.frequency),
        format!("Sensor activated: {}", handle.activated),
    ];

    if let Some(fault) = &handle.last_error {
        lines.push(fault.type_line());
        lines.push(fault.message_line());
    }

    if let Some(display) = &handle.display {
        lines.extend(display.lines().map(str::to_string));
    }

    lines
}

/// Draw every card. Returns the actions taken this frame.
pub fn show<'a>(
    ui: &mut Ui,
    handles: impl Iterator<Item = &'a SensorHandle>,
    palette: &Palette,
) -> Vec<SensorAction> {
    let mut actions = Vec::new();

    for handle in handles {
        Frame::new()
            .fill(palette.card)
            .stroke(egui::Stroke::new(1.0, palette.border))
            .inner_margin(12.0)
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    // The toggle mirrors registry state; flipping it only emits an action.
                    let mut active = handle.active;
                    if ui.checkbox(&mut active, "").changed() {
                        actions.push(SensorAction::SetActive(handle.id, active));
                    }

                    ui.vertical(|ui| {
                        for (i, line) in card_lines(handle).iter().enumerate() {
                            let text = RichText::new(line);
                            let text = if i == 0 {
                                text.strong()
                            } else if is_error_line(handle, i) {
                                text.color(palette.error)
                            } else {
                                text.color(palette.text_weak)
                            };
                            ui.label(text);
                        }
                    });

                    ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                        if ui.button("✖").on_hover_text("Remove sensor").clicked() {
                            actions.push(SensorAction::Remove(handle.id));
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    actions
}

fn is_error_line(handle: &SensorHandle, index: usize) -> bool {
    handle.last_error.is_some() && (index == 3 || index == 4)
}
