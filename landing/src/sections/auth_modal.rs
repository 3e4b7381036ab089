use leptos::prelude::*;
use poststride_ui::ModalKind;
use tracing::debug;

use crate::session::ModalSignal;

/// Placeholder login/signup dialog. The forms belong to the product app;
/// the landing page only presents and dismisses them.
#[component]
pub fn AuthModal() -> impl IntoView {
    let modals = expect_context::<ModalSignal>();

    let close = move |_| {
        debug!("auth modal dismissed");
        modals.close();
    };

    view! {
        <Show when=move || modals.active().is_some()>
            <div class="modal-backdrop" on:click=close>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    <h2 class="modal-title">
                        {move || modals.active().map(|kind| kind.title()).unwrap_or_default()}
                    </h2>
                    <p class="modal-body">
                        {move || match modals.active() {
                            Some(ModalKind::SignUp) => "Create your account to start your free trial.",
                            _ => "Welcome back. Sign in to manage your posts.",
                        }}
                    </p>
                    <button class="btn btn-secondary modal-close" on:click=close>
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
