use leptos::prelude::*;
use poststride_ui::content;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h2 class="section-title">"What Our Users Say"</h2>
            <div class="testimonial-cards">
                {content::TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="testimonial">
                                <blockquote>"“"{t.text}"”"</blockquote>
                                <figcaption>"- "{t.author}</figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
