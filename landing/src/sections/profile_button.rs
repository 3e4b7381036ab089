use leptos::html::Ul;
use leptos::prelude::*;
use poststride_ui::{DismissibleOverlay, MenuItem, ProfileMenu, SiteConfig, Visibility};

use crate::session::{LocalSession, ModalSignal};
use crate::{HubHandle, dom};

type Menu = StoredValue<ProfileMenu<LocalSession, ModalSignal>, LocalStorage>;

/// "Get Started" account dropdown. Opens on hover or click, closes when the
/// pointer leaves, on any click outside the list, and after every action.
#[component]
pub fn ProfileButton() -> impl IntoView {
    let hub = expect_context::<HubHandle>();
    let config = expect_context::<SiteConfig>();
    let session = expect_context::<LocalSession>();
    let modals = expect_context::<ModalSignal>();

    let dropdown: NodeRef<Ul> = NodeRef::new();
    let (visibility, set_visibility) = signal(Visibility::Closed);

    let overlay = hub.with_value(|hub| {
        DismissibleOverlay::new("profile", hub).with_policy(config.overlays.unset_region)
    });
    overlay.set_region_source(move || dropdown.get_untracked().map(|el| dom::element_rect(&el)));
    overlay.on_change(move |v| set_visibility.set(v));

    let menu: Menu = StoredValue::new_local(ProfileMenu::new(overlay, session, modals));
    on_cleanup(move || menu.with_value(|m| m.overlay().teardown()));

    view! {
        <div
            class="profile-menu-wrapper"
            on:mouseenter=move |_| menu.with_value(|m| m.pointer_enter())
            on:mouseleave=move |_| menu.with_value(|m| m.pointer_leave())
        >
            <button
                class="profile-trigger"
                aria-haspopup="true"
                aria-expanded=move || visibility.get().is_open().to_string()
                on:click=move |ev| menu.with_value(|m| m.trigger(dom::gesture_of(&ev)))
            >
                <span class="profile-trigger-label">"Get Started"</span>
                <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg">
                    <circle cx="8" cy="8" r="2.5" />
                    <circle cx="16" cy="8" r="2.5" />
                    <circle cx="8" cy="16" r="2.5" />
                    <circle cx="16" cy="16" r="2.5" />
                </svg>
            </button>
            <ul
                node_ref=dropdown
                class=move || {
                    if visibility.get().is_open() { "profile-dropdown" } else { "profile-dropdown hidden" }
                }
                data-state=move || visibility.get().as_label()
            >
                {move || {
                    menu.with_value(|m| m.items())
                        .into_iter()
                        .map(|item| menu_entry(menu, item))
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

fn menu_entry(menu: Menu, item: MenuItem) -> AnyView {
    let class = item.class();
    let label = item.label().to_string();
    if item.is_action() {
        view! {
            <li>
                <button class=class on:click=move |_| menu.with_value(|m| m.activate(&item))>
                    {label}
                </button>
            </li>
        }
        .into_any()
    } else {
        view! { <li class=class>{label}</li> }.into_any()
    }
}
