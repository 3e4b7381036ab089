use leptos::prelude::*;
use poststride_ui::content;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <div class="container">
                <h2 class="section-title">"How It Works"</h2>
                <div class="steps">
                    {content::STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <div class="step">
                                    <div class="step-number">{i + 1}</div>
                                    <h3>{step.title}</h3>
                                    <p>{step.body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
