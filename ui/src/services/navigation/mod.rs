use dioxus::router::prelude::{use_navigator, Navigator as RouterHistory};

use crate::console_error;
use crate::features::sign_up::Navigator;

/// `Navigator` backed by the Dioxus router history
#[derive(Clone)]
pub struct RouterNavigator {
    history: RouterHistory,
}

/// Must be called from a component rendered inside a `Router`
pub fn use_router_navigator() -> RouterNavigator {
    RouterNavigator {
        history: use_navigator(),
    }
}

impl Navigator for RouterNavigator {
    fn go_to(&self, path: &str) {
        if self.history.push(path.to_string()).is_some() {
            console_error!("[Navigation] Could not navigate to {}", path);
        }
    }
}
