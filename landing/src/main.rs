// AllyConnect landing page - Leptos 0.8 Edition

mod carousel;
mod icons;
mod sections;
mod styles;

use allyconnect_core::{LandingContent, SiteConfig};
use leptos::prelude::*;
use sections::*;
use wasm_bindgen::JsValue;

/// Site settings compiled into the bundle.
const SITE_CONFIG: &str = include_str!("../allyconnect.toml");

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

fn site_config() -> SiteConfig {
    SiteConfig::from_toml_str(SITE_CONFIG).unwrap_or_else(|err| {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "allyconnect.toml rejected, using defaults: {err}"
        )));
        SiteConfig::default()
    })
}

#[component]
fn App() -> impl IntoView {
    let config = site_config();
    let content = LandingContent::default();
    let out_of_range = config.navigation.out_of_range;
    let brand = config.site.brand;
    let podium = content.podium().to_vec();
    let runners_up = content.runners_up().to_vec();

    view! {
        <style>{styles::LANDING_CSS}</style>
        <ConsoleBanner brand=brand.clone() />
        <Header
            brand=brand.clone()
            search_placeholder=config.site.search_placeholder
            nav_links=content.nav_links
            unread=content.unread
            viewer=content.viewer
        />
        <main>
            <Hero slides=content.slides stats=content.stats deck=config.hero out_of_range=out_of_range />
            <EventsSection events=content.events />
            <OpportunitiesSection opportunities=content.opportunities />
            <AlumniSpotlight alumni=content.spotlight deck=config.spotlight out_of_range=out_of_range />
            <LeaderboardSection podium=podium runners_up=runners_up monthly=content.monthly />
        </main>
        <Footer
            brand=brand
            about=content.about
            contact=content.contact
            sections=content.footer_sections
            socials=content.social_links
            legal=content.legal_links
        />
    }
}
