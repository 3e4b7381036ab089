use leptos::prelude::*;
use poststride_ui::content::{self, PricingTier};
use poststride_ui::{BillingInterval, ModalHost, ModalKind, SiteConfig, TierToggle};
use tracing::warn;

use crate::session::ModalSignal;
use crate::{HubHandle, dom};

type Tiers = StoredValue<TierToggle, LocalStorage>;

#[component]
pub fn Pricing() -> impl IntoView {
    let hub = expect_context::<HubHandle>();
    let config = expect_context::<SiteConfig>();

    let tiers = hub.with_value(|hub| {
        TierToggle::new(hub, content::tier_count(), config.default_interval)
    });
    let state = RwSignal::new(tiers.state());
    tiers.on_change(move |s| state.set(s));
    let tiers: Tiers = StoredValue::new_local(tiers);
    on_cleanup(move || tiers.with_value(|t| t.teardown()));

    let cta = config.trial_cta();

    view! {
        <section class="pricing">
            <h2 class="section-title">"Pricing Plans"</h2>
            <div class="segmented-toggle" role="tablist">
                {BillingInterval::ALL
                    .into_iter()
                    .map(|interval| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || (state.get().interval == interval).to_string()
                                class=move || {
                                    if state.get().interval == interval {
                                        "segmented-btn active"
                                    } else {
                                        "segmented-btn"
                                    }
                                }
                                on:click=move |_| tiers.with_value(|t| t.select_interval(interval))
                            >
                                {interval.display_name()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="pricing-cards">
                {move || {
                    let current = state.get();
                    content::pricing(current.interval)
                        .iter()
                        .enumerate()
                        .map(|(index, tier)| {
                            let selected = current.selected == Some(index);
                            view! {
                                <PricingCard
                                    tiers=tiers
                                    tier=*tier
                                    index=index
                                    selected=selected
                                    cta=cta.clone()
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

#[component]
fn PricingCard(
    tiers: Tiers,
    tier: PricingTier,
    index: usize,
    selected: bool,
    cta: String,
) -> impl IntoView {
    let modals = expect_context::<ModalSignal>();

    // Selecting claims the click so the card's own observer does not clear
    // the selection while the same click reaches `document`.
    let select = move |ev: leptos::ev::MouseEvent| {
        tiers.with_value(|t| {
            if let Err(e) = t.select_card(index, dom::gesture_of(&ev)) {
                warn!(error = %e, "pricing card selection rejected");
            }
        })
    };

    view! {
        <div class=if selected { "pricing-card selected" } else { "pricing-card" } on:click=select>
            <h3>{tier.name}</h3>
            <div class="price">{tier.price}</div>
            <ul>
                {tier.features.iter().map(|f| view! { <li>{*f}</li> }).collect::<Vec<_>>()}
            </ul>
            <button class="choose-btn" on:click=move |_| modals.open_modal(ModalKind::SignUp)>
                {cta}
            </button>
        </div>
    }
}
