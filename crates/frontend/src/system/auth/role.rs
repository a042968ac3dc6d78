//! Presentation profile for each sign-in role.

use contracts::system::auth::UserRole;

/// Fixed accent colors and copy for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub role: UserRole,
    pub display_name: &'static str,
    /// Accent color, independent of the theme.
    pub accent: &'static str,
    /// Light-mode background of the role button while not selected.
    pub soft_tint: &'static str,
    pub id_label: &'static str,
    pub id_placeholder: &'static str,
    /// Whether "Create Student Account" is offered.
    pub shows_register: bool,
}

const ROLE_PROFILES: [RoleProfile; 3] = [
    RoleProfile {
        role: UserRole::Student,
        display_name: "Student",
        accent: "#2563EB",
        soft_tint: "#E0F2FE",
        id_label: "Student ID",
        id_placeholder: "Enter your student ID",
        shows_register: true,
    },
    RoleProfile {
        role: UserRole::Admin,
        display_name: "Admin",
        accent: "#DC2626",
        soft_tint: "#FEE2E2",
        id_label: "Staff ID",
        id_placeholder: "Enter your staff ID",
        shows_register: false,
    },
    RoleProfile {
        role: UserRole::Staff,
        display_name: "Staff",
        accent: "#10B981",
        soft_tint: "#D1FAE5",
        id_label: "Staff ID",
        id_placeholder: "Enter your staff ID",
        shows_register: false,
    },
];

/// Looks up the profile for `role`.
pub fn profile(role: UserRole) -> &'static RoleProfile {
    match role {
        UserRole::Student => &ROLE_PROFILES[0],
        UserRole::Admin => &ROLE_PROFILES[1],
        UserRole::Staff => &ROLE_PROFILES[2],
    }
}

/// All profiles in the order the role buttons are shown.
pub fn profiles() -> &'static [RoleProfile] {
    &ROLE_PROFILES
}
