use leptos::prelude::*;
use poststride_ui::{SiteConfig, content};

#[component]
pub fn Comparison() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let solution_heading = format!(
        "What {} {} can do for you:",
        config.brand, config.brand_accent
    );

    view! {
        <section class="comparison">
            <div class="container">
                <div class="problem-section">
                    <h2 class="comparison-heading">"Posting content shouldn't be this hard"</h2>
                    <h3 class="comparison-subheading">"What's out there now…"</h3>
                    <div class="pain-points-grid">
                        {content::PAIN_POINTS
                            .iter()
                            .map(|point| {
                                view! {
                                    <div class="pain-point-card">
                                        <div class="card-header">
                                            <CrossIcon />
                                            <h4>{point.title}</h4>
                                        </div>
                                        <p>{point.body}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p class="problem-summary">
                        "Lose hours of your day or drain your wallet? Neither should be the answer."
                    </p>
                </div>

                <div class="solution-section">
                    <h2 class="comparison-heading">
                        "Reach more people without the extra work or big spend"
                    </h2>
                    <h3 class="comparison-subheading">{solution_heading}</h3>
                    <div class="solutions-grid">
                        {content::SOLUTIONS
                            .iter()
                            .map(|solution| {
                                view! {
                                    <div class="solution-card">
                                        <div class="card-header">
                                            <CheckIcon />
                                            <h4>{solution.title}</h4>
                                        </div>
                                        <p>{solution.body}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CrossIcon() -> impl IntoView {
    view! {
        <svg class="icon-cross" width="32" height="32" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path d="M18 6L6 18M6 6L18 18" stroke="#DC2626" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

#[component]
fn CheckIcon() -> impl IntoView {
    view! {
        <svg class="icon-check" width="32" height="32" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path d="M20 6L9 17L4 12" stroke="#059669" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}
