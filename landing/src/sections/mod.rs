// Landing page sections

mod auth_modal;
mod comparison;
mod cta_banner;
mod faq;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod integrations;
mod nav;
mod pricing;
mod profile_button;
mod testimonials;

pub use auth_modal::AuthModal;
pub use comparison::Comparison;
pub use cta_banner::CtaBanner;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use integrations::{Integrations, LogosBar};
pub use nav::Nav;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
