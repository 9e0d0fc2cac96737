use leptos::*;
use leptos_router::*;

use super::toast::ToastContainer;

/// Layout component with navbar, content outlet and toasts
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
            <ToastContainer />
        </div>
    }
}

/// Navbar with page tabs and clock
#[component]
fn Navbar() -> impl IntoView {
    let location = use_location();

    let is_active = move |path: &str| location.pathname.get().starts_with(path);

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Energy Monitor"</h1>
                <div class="navbar-tabs">
                    <A
                        href="/dashboard"
                        class=move || if is_active("/dashboard") { "tab active" } else { "tab" }
                    >
                        "Dashboard"
                    </A>
                    <A
                        href="/reports"
                        class=move || if is_active("/reports") { "tab active" } else { "tab" }
                    >
                        "Reports"
                    </A>
                </div>
                <div class="navbar-actions">
                    <CurrentTime />
                </div>
            </div>
        </nav>
    }
}

/// Wall clock, ticking every second
#[component]
fn CurrentTime() -> impl IntoView {
    let (time, set_time) = create_signal(clock_text());

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(1000, move || set_time.set(clock_text()));
        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_time;

    view! {
        <span class="current-time">{move || time.get()}</span>
    }
}

fn clock_text() -> String {
    chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string()
}
