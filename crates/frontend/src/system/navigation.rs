//! Navigation boundary used by screens that leave themselves.

use std::rc::Rc;

use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Moves the app to another route.
pub trait Navigator {
    /// Navigate and drop the current entry from history.
    fn replace(&self, path: &str);
    /// Navigate and keep the current entry.
    fn push(&self, path: &str);
}

/// `Navigator` over the `leptos_router` history.
///
/// Must be created inside the router, like any router hook.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str, options: NavigateOptions| navigate(path, options)),
        }
    }
}

impl Navigator for RouterNavigator {
    fn replace(&self, path: &str) {
        log::debug!("navigate (replace) to {}", path);
        (self.navigate)(
            path,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    }

    fn push(&self, path: &str) {
        log::debug!("navigate to {}", path);
        (self.navigate)(path, NavigateOptions::default());
    }
}
