//! Colors of the login screen, derived from theme and role.

use contracts::system::auth::UserRole;

use crate::shared::theme::Palette;
use crate::system::auth::{profile, profiles};

const ON_ACCENT: &str = "#FFFFFF";
const REGISTER_LIGHT_BACKGROUND: &str = "#F1F5F9";

/// One role button in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleButtonStyle {
    pub role: UserRole,
    pub label: &'static str,
    pub active: bool,
    pub background: &'static str,
    /// `None` when the button is borderless.
    pub border: Option<&'static str>,
    pub text: &'static str,
}

impl RoleButtonStyle {
    pub fn css(&self) -> String {
        let border = match self.border {
            Some(color) => format!("border: 1px solid {};", color),
            None => "border: none;".to_string(),
        };
        format!(
            "background-color: {}; color: {}; {}",
            self.background, self.text, border
        )
    }
}

/// Every color the login view paints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginStyles {
    pub palette: Palette,
    pub accent: &'static str,
    /// Icon shown on the theme toggle: the mode it switches to.
    pub toggle_icon: &'static str,
    pub role_buttons: Vec<RoleButtonStyle>,
    pub register_background: &'static str,
}

impl LoginStyles {
    pub fn derive(palette: Palette, is_dark: bool, role: UserRole) -> Self {
        let role_buttons = profiles()
            .iter()
            .map(|p| {
                let active = p.role == role;
                RoleButtonStyle {
                    role: p.role,
                    label: p.display_name,
                    active,
                    background: match (active, is_dark) {
                        (true, _) => p.accent,
                        (false, true) => palette.card,
                        (false, false) => p.soft_tint,
                    },
                    border: (!active).then_some(palette.border),
                    text: if active { ON_ACCENT } else { p.accent },
                }
            })
            .collect();

        Self {
            palette,
            accent: profile(role).accent,
            toggle_icon: if is_dark { "sun" } else { "moon" },
            role_buttons,
            register_background: if is_dark {
                palette.card
            } else {
                REGISTER_LIGHT_BACKGROUND
            },
        }
    }

    pub fn role_button(&self, role: UserRole) -> Option<&RoleButtonStyle> {
        self.role_buttons.iter().find(|b| b.role == role)
    }

    pub fn container_css(&self) -> String {
        format!(
            "min-height: 100vh; display: flex; flex-direction: column; justify-content: center; padding: 28px; box-sizing: border-box; background-color: {};",
            self.palette.background
        )
    }

    pub fn toggle_css(&self) -> String {
        format!(
            "align-self: flex-end; width: 40px; height: 40px; border-radius: 20px; display: flex; align-items: center; justify-content: center; margin-bottom: 12px; cursor: pointer; border: 1px solid {}; background-color: {}; color: {};",
            self.palette.border, self.palette.card, self.palette.text
        )
    }

    pub fn input_css(&self) -> String {
        format!(
            "background-color: {}; color: {}; border-color: {};",
            self.palette.card, self.palette.text, self.palette.border
        )
    }

    pub fn sign_in_css(&self) -> String {
        format!("margin-top: 12px; background-color: {};", self.accent)
    }

    pub fn register_css(&self) -> String {
        format!(
            "margin-top: 12px; border-color: {}; color: {}; background-color: {};",
            self.accent, self.accent, self.register_background
        )
    }
}
