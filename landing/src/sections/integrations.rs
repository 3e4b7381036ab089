use leptos::prelude::*;
use poststride_ui::content;

fn logos(class: &'static str) -> Vec<impl IntoView> {
    content::INTEGRATIONS
        .iter()
        .map(|i| view! { <img src=i.logo alt=i.name class=class /> })
        .collect()
}

/// Row of platform logos under the hero.
#[component]
pub fn LogosBar() -> impl IntoView {
    view! { <div class="logos-bar">{logos("logos-bar-logo")}</div> }
}

#[component]
pub fn Integrations() -> impl IntoView {
    view! {
        <section class="integrations">
            <h2 class="section-title">"Seamless Integrations"</h2>
            <div class="logos-row">{logos("integration-logo")}</div>
        </section>
    }
}
