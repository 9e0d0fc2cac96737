use leptos::*;

use crate::state::use_toasts;

/// Stacked toasts, newest last; each closes itself or on click
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div id="toast-container" class="toast-container position-fixed top-0 end-0 p-3">
            <For
                each=move || toasts.queue.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!(
                        "toast show align-items-center text-white bg-{} border-0",
                        toast.severity.as_str()
                    );
                    view! {
                        <div class=class role="alert" aria-live="assertive" aria-atomic="true">
                            <div class="d-flex">
                                <div class="toast-body">{toast.message}</div>
                                <button
                                    type="button"
                                    class="btn-close btn-close-white me-2 m-auto"
                                    aria-label="Close"
                                    on:click=move |_| toasts.dismiss(id)
                                ></button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
