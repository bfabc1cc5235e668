use dioxus::prelude::*;

use super::toast_list::{Toast, ToastKind, ToastList};
use crate::features::sign_up::{Notifier, ToastAction};

/// Reactive toast queue shared by the page and the `Toaster` component
#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    list: Signal<ToastList>,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    duration_ms: u32,
}

/// Create a toast queue owned by the calling component
pub fn use_toast_queue(duration_ms: u32) -> ToastQueue {
    let list = use_signal(ToastList::default);
    ToastQueue { list, duration_ms }
}

impl ToastQueue {
    pub fn toasts(&self) -> Vec<Toast> {
        self.list.read().toasts().to_vec()
    }

    pub fn dismiss(&self, id: u64) {
        let mut list = self.list;
        list.write().dismiss(id);
    }

    /// Dismisses the toast and runs its action, if it had one
    pub fn activate(&self, id: u64) {
        let mut list = self.list;
        let toast = list.write().dismiss(id);
        if let Some(action) = toast.and_then(|toast| toast.action) {
            action.invoke();
        }
    }

    fn show(&self, kind: ToastKind, message: &str, action: Option<ToastAction>) {
        let mut list = self.list;
        let id = list.write().push(kind, message, action);
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        if self.duration_ms == 0 {
            return;
        }
        let queue = *self;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(queue.duration_ms).await;
            queue.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Notifier for ToastQueue {
    fn success(&self, message: &str, action: Option<ToastAction>) {
        self.show(ToastKind::Success, message, action);
    }

    fn error(&self, message: &str) {
        self.show(ToastKind::Error, message, None);
    }
}
