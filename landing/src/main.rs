// Post Stride Landing Page (Leptos 0.8)

mod dom;
mod logging;
mod sections;
mod session;

use leptos::prelude::*;
use poststride_ui::{PointerHub, SiteConfig};
use sections::*;
use session::{LocalSession, ModalSignal};
use tracing::{info, warn};

const SITE_TOML: &str = include_str!("../site.toml");

/// Page-wide pointer hub, shared through context. The hub is `!Send`, so it
/// lives in local storage.
pub type HubHandle = StoredValue<PointerHub, LocalStorage>;

fn main() {
    console_error_panic_hook::set_once();

    let parsed = SiteConfig::from_toml_str(SITE_TOML);
    let directive = match &parsed {
        Ok(config) => config.log_level.clone(),
        Err(_) => SiteConfig::default().log_level,
    };
    logging::init(&directive);

    let config = parsed.unwrap_or_else(|e| {
        warn!(error = %e, "site.toml rejected, using defaults");
        SiteConfig::default()
    });
    info!(brand = %config.brand, trial_days = config.trial_days, "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let hub: HubHandle = StoredValue::new_local(PointerHub::with_source(dom::DocumentSource));
    provide_context(hub);
    provide_context(config);
    provide_context(LocalSession::new());
    provide_context(ModalSignal::new());

    view! {
        <Nav />
        <main>
            <Hero />
            <LogosBar />
            <div id="features">
                <Features />
            </div>
            <Comparison />
            <HowItWorks />
            <div id="platforms">
                <Integrations />
            </div>
            <div id="reviews">
                <Testimonials />
            </div>
            <div id="pricing">
                <Pricing />
            </div>
            <div id="faq">
                <Faq />
            </div>
            <CtaBanner />
        </main>
        <Footer />
        <AuthModal />
    }
}
