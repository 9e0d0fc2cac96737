use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::{Dashboard, Reports};
use crate::config::AppConfig;
use crate::state::{provide_session_context, provide_toast_context};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    provide_toast_context(config.toast_timeout_ms);
    provide_session_context();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path="dashboard" view=Dashboard />
                    <Route path="reports" view=Reports />
                </Route>
            </Routes>
        </Router>
    }
}
