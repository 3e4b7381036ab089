use leptos::prelude::*;
use poststride_ui::{FaqAccordion, SiteConfig, content};
use tracing::warn;

#[component]
pub fn Faq() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let faq = RwSignal::new(FaqAccordion::new(content::FAQ.len()));
    let support_href = format!("mailto:{}", config.support_email);

    let items = content::FAQ
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let is_open = move || faq.with(|f| f.is_open(index));
            let toggle = move |_| {
                faq.update(|f| {
                    if let Err(e) = f.toggle(index) {
                        warn!(error = %e, "FAQ toggle rejected");
                    }
                })
            };
            view! {
                <div class="faq-item">
                    <button
                        class=move || if is_open() { "faq-question open" } else { "faq-question" }
                        aria-expanded=move || is_open().to_string()
                        on:click=toggle
                    >
                        <span>{entry.question}</span>
                        <svg
                            class=move || if is_open() { "faq-arrow rotated" } else { "faq-arrow" }
                            width="20"
                            height="20"
                            viewBox="0 0 20 20"
                            fill="currentColor"
                        >
                            <path d="M5 7l5 5 5-5z" />
                        </svg>
                    </button>
                    <div class=move || if is_open() { "faq-answer show" } else { "faq-answer" }>
                        <p>{entry.answer}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="faq-section">
            <div class="container">
                <h2 class="section-title">"FAQ"</h2>
                <h3 class="section-subtitle">"Frequently Asked Questions"</h3>
                <div class="faq-list">{items}</div>
                <p class="faq-contact">
                    "Still stuck? Write to "
                    <a href=support_href>{config.support_email.clone()}</a>
                </p>
            </div>
        </section>
    }
}
