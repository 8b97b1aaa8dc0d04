//! Short-lived notices shown in the corner of the window.

use egui::{Color32, RichText};
use std::time::{Duration, Instant};

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

/// One notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

/// Queue of visible toasts.
#[derive(Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    lifetime: Duration,
}

impl Toasts {
    /// Toasts that stay visible for `seconds`.
    pub fn new(seconds: f32) -> Self {
        let seconds = if seconds.is_finite() && seconds > 0.0 {
            seconds
        } else {
            4.0
        };
        Self {
            items: Vec::new(),
            lifetime: Duration::from_secs_f32(seconds),
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push_at(message.into(), ToastLevel::Info, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push_at(message.into(), ToastLevel::Error, Instant::now());
    }

    /// Queue a toast created at `now`.
    pub fn push_at(&mut self, message: String, level: ToastLevel, now: Instant) {
        self.items.push(Toast {
            message,
            level,
            expires_at: now + self.lifetime,
        });
    }

    /// Drop toasts that expired by `now`.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|t| t.expires_at > now);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw the queue in the bottom-right corner.
    pub fn show(&mut self, ctx: &egui::Context, error_color: Color32) {
        self.prune(Instant::now());
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.items {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        let text = RichText::new(&toast.message);
                        let text = match toast.level {
                            ToastLevel::Info => text,
                            ToastLevel::Error => text.color(error_color),
                        };
                        ui.label(text);
                    });
                    ui.add_space(4.0);
                }
            });

        // Keep repainting so expired toasts disappear without input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
