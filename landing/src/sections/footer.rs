use leptos::prelude::*;
use poststride_ui::{SiteConfig, content};

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let support_href = format!("mailto:{}", config.support_email);

    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-left">
                    <div class="footer-logo">
                        {config.brand.clone()}
                        " "
                        <span class="footer-logo-accent">{config.brand_accent.clone()}</span>
                    </div>
                    <p class="footer-description">{content::FOOTER_DESCRIPTION}</p>
                    <a class="footer-support" href=support_href>{config.support_email.clone()}</a>
                    <p class="footer-copyright">"Copyright © 2025 – All rights reserved"</p>
                </div>
                <div class="footer-columns">
                    {content::FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div class="footer-column">
                                    <h3>{column.heading}</h3>
                                    <ul>
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
