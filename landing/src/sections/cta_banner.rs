use leptos::prelude::*;
use poststride_ui::{ModalHost, ModalKind, SiteConfig, content};

use crate::session::ModalSignal;

#[component]
pub fn CtaBanner() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let modals = expect_context::<ModalSignal>();

    view! {
        <section class="cta-banner">
            <h2 class="cta-headline">{content::CTA_HEADLINE}</h2>
            <button class="btn btn-primary" on:click=move |_| modals.open_modal(ModalKind::SignUp)>
                {config.trial_cta()}
            </button>
        </section>
    }
}
