use allyconnect_core::content::{ContactInfo, FooterSection, NavLink, SocialLink, copyright_line};
use leptos::prelude::*;

use crate::icons::*;

fn current_year() -> i32 {
    i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
}

#[component]
pub fn Footer(
    brand: String,
    about: String,
    contact: ContactInfo,
    sections: Vec<FooterSection>,
    socials: Vec<SocialLink>,
    legal: Vec<NavLink>,
) -> impl IntoView {
    let (subscribed, set_subscribed) = signal(false);
    let copyright = copyright_line(current_year(), &brand);

    let link_columns = sections
        .into_iter()
        .map(|section| {
            let links = section
                .links
                .into_iter()
                .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                .collect_view();
            view! {
                <div class="footer-section">
                    <h4>{section.title}</h4>
                    <ul>{links}</ul>
                </div>
            }
        })
        .collect_view();

    let social_links = socials
        .into_iter()
        .map(|social| {
            view! {
                <a href=social.href class="social" aria-label=social.label>
                    <Icon path=glyph_path(social.glyph) size="16" />
                </a>
            }
        })
        .collect_view();

    let legal_links = legal
        .into_iter()
        .map(|link| view! { <a href=link.href>{link.label}</a> })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{brand}</h3>
                        <p class="footer-about">{about}</p>
                        <div class="contact-row">
                            <Icon path=ICON_MAIL size="16" />
                            <span>{contact.email}</span>
                        </div>
                        <div class="contact-row">
                            <Icon path=ICON_PHONE size="16" />
                            <span>{contact.phone}</span>
                        </div>
                        <div class="contact-row">
                            <Icon path=ICON_MAP_PIN size="16" />
                            <span>{contact.address}</span>
                        </div>
                        <div class="newsletter">
                            <h4>"Stay Connected"</h4>
                            <p>"Get the latest updates on events, opportunities, and community news."</p>
                            <form
                                class="newsletter-form"
                                on:submit=move |ev| {
                                    ev.prevent_default();
                                    set_subscribed.set(true);
                                }
                            >
                                <input type="email" required placeholder="Enter your email" />
                                <button type="submit" class="btn btn-secondary" aria-label="Subscribe">
                                    <Icon path=ICON_ARROW_RIGHT size="16" />
                                </button>
                            </form>
                            <Show when=move || subscribed.get()>
                                <p class="newsletter-note">"Thanks! You're on the list."</p>
                            </Show>
                        </div>
                    </div>
                    {link_columns}
                </div>
                <div class="footer-bottom">
                    <span>{copyright}</span>
                    <div class="socials">
                        <span>"Follow us:"</span>
                        {social_links}
                    </div>
                </div>
                <nav class="legal">{legal_links}</nav>
            </div>
        </footer>
    }
}
