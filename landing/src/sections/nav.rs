use leptos::html::Div;
use leptos::prelude::*;
use poststride_ui::{DismissibleOverlay, SiteConfig, content};

use super::profile_button::ProfileButton;
use crate::{HubHandle, dom};

#[component]
pub fn Nav() -> impl IntoView {
    let hub = expect_context::<HubHandle>();
    let config = expect_context::<SiteConfig>();

    let links_ref: NodeRef<Div> = NodeRef::new();
    let (drawer_open, set_drawer_open) = signal(false);

    // Mobile drawer: the hamburger toggles it, any click outside the links
    // panel or on a link closes it.
    let drawer = hub.with_value(|hub| {
        DismissibleOverlay::new("nav-drawer", hub).with_policy(config.overlays.unset_region)
    });
    drawer.set_region_source(move || links_ref.get_untracked().map(|el| dom::element_rect(&el)));
    drawer.on_change(move |v| set_drawer_open.set(v.is_open()));
    let drawer = StoredValue::new_local(drawer);
    on_cleanup(move || drawer.with_value(|d| d.teardown()));

    let toggle_drawer = move |ev: leptos::ev::MouseEvent| {
        drawer.with_value(|d| {
            d.claim(dom::gesture_of(&ev));
            d.toggle();
        });
    };

    let links = content::NAV_LINKS
        .iter()
        .map(|link| {
            let class = if config.is_highlighted(link.href) {
                "nav-link active"
            } else {
                "nav-link"
            };
            view! {
                <li>
                    <a
                        href=link.href
                        class=class
                        on:click=move |_| drawer.with_value(|d| {
                            d.close();
                        })
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="navbar">
            <div class="navbar-left">
                <a href="#" class="navbar-logo">
                    {config.brand.clone()}
                    " "
                    <span class="navbar-logo-accent">{config.brand_accent.clone()}</span>
                </a>
            </div>
            <button
                class="hamburger"
                aria-label="Toggle menu"
                aria-expanded=move || drawer_open.get().to_string()
                on:click=toggle_drawer
            >
                <span class="bar"></span>
                <span class="bar"></span>
                <span class="bar"></span>
            </button>
            <div
                node_ref=links_ref
                class=move || if drawer_open.get() { "links-wrapper menu-open" } else { "links-wrapper" }
            >
                <ul class="nav-links">{links}</ul>
                <ProfileButton />
            </div>
        </nav>
    }
}
