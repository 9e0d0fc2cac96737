pub mod session;
pub mod toast;

pub use session::{
    provide_session_context, use_session, DashboardSession, RefreshGate, ReportStore, SessionHandle,
};
pub use toast::{provide_toast_context, use_toasts, Notifier, Severity, Toast, ToastContext, ToastQueue};
