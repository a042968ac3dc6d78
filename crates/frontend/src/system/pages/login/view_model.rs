use std::rc::Rc;

use contracts::system::auth::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::{LoginError, LoginForm};
use super::styles::LoginStyles;
use crate::routes::{HOME_PATH, REGISTER_PATH};
use crate::shared::alert::AlertPresenter;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::AuthService;
use crate::system::navigation::Navigator;

/// Collaborators of the login screen, handed in by the route that mounts it.
#[derive(Clone)]
pub struct LoginServices {
    pub auth: Rc<dyn AuthService>,
    pub navigator: Rc<dyn Navigator>,
    pub alerts: Rc<dyn AlertPresenter>,
    pub theme: Rc<dyn ThemeProvider>,
}

/// ViewModel for the login screen
///
/// - Form data lives in one `LoginForm` signal
/// - Services sit in a local `StoredValue` (browser handles are not `Send`)
/// - Commands for submit, role selection, theme toggle and registration
#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: RwSignal<LoginForm>,
    services: StoredValue<LoginServices, LocalStorage>,
}

impl LoginViewModel {
    pub fn new(services: LoginServices) -> Self {
        Self {
            form: RwSignal::new(LoginForm::default()),
            services: StoredValue::new_local(services),
        }
    }

    pub fn set_identifier(&self, value: String) {
        self.form.update(|f| f.identifier = value);
    }

    pub fn set_password(&self, value: String) {
        self.form.update(|f| f.password = value);
    }

    pub fn select_role(&self, role: UserRole) {
        self.form.update(|f| f.select_role(role));
    }

    pub fn is_loading(&self) -> bool {
        self.form.with(|f| f.loading)
    }

    pub fn is_dark(&self) -> bool {
        self.services.with_value(|s| s.theme.is_dark())
    }

    /// Colors for the current theme and role. Reactive.
    pub fn styles(&self) -> LoginStyles {
        let (palette, is_dark) = self
            .services
            .with_value(|s| (s.theme.colors(), s.theme.is_dark()));
        LoginStyles::derive(palette, is_dark, self.form.with(|f| f.role))
    }

    pub fn toggle_theme_command(&self) {
        self.services.with_value(|s| s.theme.toggle_theme());
    }

    /// Opens registration. Only students can register.
    pub fn register_command(&self) {
        if !self.form.with_untracked(|f| f.profile().shows_register) {
            return;
        }
        self.services.with_value(|s| s.navigator.push(REGISTER_PATH));
    }

    /// Starts `submit` on the local executor.
    pub fn submit_command(&self) {
        let vm = *self;
        spawn_local(async move { vm.submit().await });
    }

    /// Runs one login attempt to completion.
    pub async fn submit(&self) {
        let Some(services) = self.services.try_get_value() else {
            return;
        };
        if self.form.with_untracked(|f| f.loading) {
            return;
        }

        let credentials = match self.form.try_update(|f| f.begin_submit()) {
            Some(Ok(credentials)) => credentials,
            Some(Err(err)) => {
                log::debug!("login not submitted: {}", err);
                show_alert(&services, &err);
                return;
            }
            None => return,
        };

        log::info!("signing in as {}", credentials.role);
        let outcome = services.auth.login(&credentials).await;

        match self.form.try_update(|f| f.finish_submit(outcome)) {
            Some(Ok(())) => {
                log::info!("signed in as {}", credentials.role);
                services.navigator.replace(HOME_PATH);
            }
            Some(Err(err)) => {
                match &err {
                    LoginError::Failed(cause) => log::error!("login failed: {}", cause),
                    _ => log::warn!("login rejected for role {}", credentials.role),
                }
                show_alert(&services, &err);
            }
            // Screen went away while the call was in flight.
            None => {}
        }
    }
}

fn show_alert(services: &LoginServices, err: &LoginError) {
    let (title, message) = err.alert();
    services.alerts.alert(title, message);
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use super::*;
    use crate::shared::theme::Palette;
    use crate::system::auth::{AuthError, Credentials, LoginOutcome};

    struct FakeAuth {
        outcome: LoginOutcome,
        calls: RefCell<Vec<Credentials>>,
    }

    #[async_trait(?Send)]
    impl AuthService for FakeAuth {
        async fn login(&self, credentials: &Credentials) -> LoginOutcome {
            self.calls.borrow_mut().push(credentials.clone());
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct FakeNavigator {
        replaced: RefCell<Vec<String>>,
        pushed: RefCell<Vec<String>>,
    }

    impl Navigator for FakeNavigator {
        fn replace(&self, path: &str) {
            self.replaced.borrow_mut().push(path.to_string());
        }

        fn push(&self, path: &str) {
            self.pushed.borrow_mut().push(path.to_string());
        }
    }

    #[derive(Default)]
    struct FakeAlerts {
        shown: RefCell<Vec<(String, String)>>,
    }

    impl AlertPresenter for FakeAlerts {
        fn alert(&self, title: &str, message: &str) {
            self.shown
                .borrow_mut()
                .push((title.to_string(), message.to_string()));
        }
    }

    #[derive(Default)]
    struct FakeTheme {
        dark: Cell<bool>,
    }

    impl ThemeProvider for FakeTheme {
        fn is_dark(&self) -> bool {
            self.dark.get()
        }

        fn toggle_theme(&self) {
            self.dark.set(!self.dark.get());
        }

        fn colors(&self) -> Palette {
            if self.dark.get() {
                Palette::DARK
            } else {
                Palette::LIGHT
            }
        }
    }

    struct Harness {
        vm: LoginViewModel,
        auth: Rc<FakeAuth>,
        navigator: Rc<FakeNavigator>,
        alerts: Rc<FakeAlerts>,
    }

    fn harness(outcome: LoginOutcome) -> Harness {
        let auth = Rc::new(FakeAuth {
            outcome,
            calls: RefCell::new(Vec::new()),
        });
        let navigator = Rc::new(FakeNavigator::default());
        let alerts = Rc::new(FakeAlerts::default());
        let vm = LoginViewModel::new(LoginServices {
            auth: auth.clone(),
            navigator: navigator.clone(),
            alerts: alerts.clone(),
            theme: Rc::new(FakeTheme::default()),
        });
        Harness {
            vm,
            auth,
            navigator,
            alerts,
        }
    }

    fn fill(vm: &LoginViewModel) {
        vm.set_identifier("20231234".to_string());
        vm.set_password("hunter2".to_string());
    }

    fn alerts(h: &Harness) -> Vec<(String, String)> {
        h.alerts.shown.borrow().clone()
    }

    #[tokio::test]
    async fn test_empty_fields_never_reach_service() {
        let cases = [("", ""), ("20231234", ""), ("", "hunter2")];
        for (identifier, password) in cases {
            let h = harness(LoginOutcome::Authenticated);
            h.vm.set_identifier(identifier.to_string());
            h.vm.set_password(password.to_string());

            h.vm.submit().await;

            assert!(h.auth.calls.borrow().is_empty());
            assert_eq!(
                alerts(&h),
                vec![("Error".to_string(), "Please fill in all fields".to_string())]
            );
            assert!(h.navigator.replaced.borrow().is_empty());
            assert!(!h.vm.form.get_untracked().loading);
        }
    }

    #[tokio::test]
    async fn test_success_navigates_home_once() {
        let h = harness(LoginOutcome::Authenticated);
        fill(&h.vm);
        h.vm.select_role(UserRole::Admin);

        h.vm.submit().await;

        assert_eq!(
            *h.auth.calls.borrow(),
            vec![Credentials {
                identifier: "20231234".to_string(),
                password: "hunter2".to_string(),
                role: UserRole::Admin,
            }]
        );
        assert_eq!(*h.navigator.replaced.borrow(), vec![HOME_PATH.to_string()]);
        assert!(h.navigator.pushed.borrow().is_empty());
        assert!(alerts(&h).is_empty());
        assert!(!h.vm.form.get_untracked().loading);
    }

    #[tokio::test]
    async fn test_rejection_alerts_without_navigation() {
        let h = harness(LoginOutcome::InvalidCredentials);
        fill(&h.vm);

        h.vm.submit().await;

        assert_eq!(
            alerts(&h),
            vec![("Error".to_string(), "Invalid credentials".to_string())]
        );
        assert!(h.navigator.replaced.borrow().is_empty());
        assert!(!h.vm.form.get_untracked().loading);
    }

    #[tokio::test]
    async fn test_service_failure_alerts_generically() {
        let h = harness(LoginOutcome::Failed(AuthError::Request("offline".into())));
        fill(&h.vm);

        h.vm.submit().await;

        assert_eq!(
            alerts(&h),
            vec![(
                "Error".to_string(),
                "Login failed. Please try again.".to_string()
            )]
        );
        assert!(h.navigator.replaced.borrow().is_empty());
        assert!(!h.vm.form.get_untracked().loading);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_calls_service_again() {
        let h = harness(LoginOutcome::InvalidCredentials);
        fill(&h.vm);

        h.vm.submit().await;
        h.vm.submit().await;

        assert_eq!(h.auth.calls.borrow().len(), 2);
        assert_eq!(alerts(&h).len(), 2);
    }

    #[tokio::test]
    async fn test_submit_is_ignored_while_loading() {
        let h = harness(LoginOutcome::Authenticated);
        fill(&h.vm);
        h.vm.form.update(|f| f.loading = true);

        h.vm.submit().await;

        assert!(h.auth.calls.borrow().is_empty());
        assert!(alerts(&h).is_empty());
    }

    #[test]
    fn test_register_only_for_students() {
        let h = harness(LoginOutcome::Authenticated);

        h.vm.select_role(UserRole::Staff);
        h.vm.register_command();
        h.vm.select_role(UserRole::Admin);
        h.vm.register_command();
        assert!(h.navigator.pushed.borrow().is_empty());

        h.vm.select_role(UserRole::Student);
        h.vm.register_command();
        assert_eq!(*h.navigator.pushed.borrow(), vec![REGISTER_PATH.to_string()]);
    }

    #[test]
    fn test_selected_role_drives_label() {
        let h = harness(LoginOutcome::Authenticated);
        for (role, label) in [
            (UserRole::Admin, "Staff ID"),
            (UserRole::Student, "Student ID"),
            (UserRole::Staff, "Staff ID"),
        ] {
            h.vm.select_role(role);
            let form = h.vm.form.get_untracked();
            assert_eq!(form.role, role);
            assert_eq!(form.profile().id_label, label);
        }
    }

    #[test]
    fn test_theme_toggle_keeps_form_state() {
        let h = harness(LoginOutcome::Authenticated);
        fill(&h.vm);
        h.vm.select_role(UserRole::Staff);
        let before = h.vm.form.get_untracked();
        let light = h.vm.styles();

        h.vm.toggle_theme_command();

        assert!(h.vm.is_dark());
        let dark = h.vm.styles();
        assert_eq!(dark.palette, Palette::DARK);
        assert_ne!(light.container_css(), dark.container_css());
        assert_eq!(h.vm.form.get_untracked(), before);
    }
}
