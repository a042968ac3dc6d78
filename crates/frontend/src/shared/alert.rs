//! Blocking user-facing alerts.

/// Shows a modal message to the user.
pub trait AlertPresenter {
    fn alert(&self, title: &str, message: &str);
}

/// `window.alert` backed presenter.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowAlert;

impl AlertPresenter for WindowAlert {
    fn alert(&self, title: &str, message: &str) {
        if let Some(window) = crate::shared::browser::window() {
            let _ = window.alert_with_message(&format!("{}\n\n{}", title, message));
        }
    }
}
