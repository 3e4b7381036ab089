use leptos::prelude::*;
use poststride_ui::content::{self, Blurb};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <h2 class="section-title">"Core Features"</h2>
                <div class="features-grid">
                    {content::FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Blurb) -> impl IntoView {
    view! {
        <article class="feature-card">
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.body}</p>
        </article>
    }
}
