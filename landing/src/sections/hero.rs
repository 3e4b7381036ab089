use leptos::prelude::*;
use poststride_ui::{ModalHost, ModalKind, SiteConfig, content};

use crate::session::ModalSignal;

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let modals = expect_context::<ModalSignal>();

    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-headline">{content::HERO_HEADLINE}</h1>
                <p class="hero-subheadline">{content::HERO_SUBHEADLINE}</p>
                <button class="btn btn-primary hero-cta" on:click=move |_| modals.open_modal(ModalKind::SignUp)>
                    {config.trial_cta()}
                </button>
            </div>
        </section>
    }
}
