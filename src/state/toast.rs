use leptos::*;

/// Toast styles
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    /// Bootstrap color suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// Anything that can surface a message to the user
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Toasts currently on screen, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: &str, severity: Severity) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            message: message.to_string(),
            severity,
        });
        self.next_id
    }

    /// Remove one toast; dismissing twice is a no-op
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast context shared by every page
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub queue: RwSignal<ToastQueue>,
    pub timeout_ms: u32,
}

impl ToastContext {
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Notifier for ToastContext {
    fn notify(&self, message: &str, severity: Severity) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, severity));

        // Auto-dismiss after the configured time
        #[cfg(target_arch = "wasm32")]
        {
            let ctx = *self;
            let _ = gloo_timers::callback::Timeout::new(self.timeout_ms, move || ctx.dismiss(id)).forget();
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

/// Provide the toast context at the app root
pub fn provide_toast_context(timeout_ms: u32) {
    provide_context(ToastContext {
        queue: create_rw_signal(ToastQueue::default()),
        timeout_ms,
    });
}

/// Hook to access the toast context
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext must be provided by a parent component")
}
