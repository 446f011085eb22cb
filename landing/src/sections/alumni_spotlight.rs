use allyconnect_core::OutOfRange;
use allyconnect_core::config::DeckConfig;
use allyconnect_core::content::{AlumniProfile, initials};
use leptos::prelude::*;

use super::Avatar;
use crate::carousel::use_carousel;
use crate::icons::*;

#[component]
pub fn AlumniSpotlight(
    alumni: Vec<AlumniProfile>,
    deck: DeckConfig,
    out_of_range: OutOfRange,
) -> impl IntoView {
    let count = alumni.len();
    let Ok(carousel) = use_carousel(count, deck, out_of_range) else {
        return view! {}.into_any();
    };

    let profiles = alumni
        .into_iter()
        .enumerate()
        .map(|(index, profile)| {
            view! {
                <div class=move || {
                    if carousel.is_current(index) { "card spotlight-card" } else { "card spotlight-card is-hidden" }
                }>
                    <ProfileCard profile=profile />
                </div>
            }
        })
        .collect_view();

    let dots = (0..count)
        .map(|index| {
            view! {
                <button
                    class=move || if carousel.is_current(index) { "dot active" } else { "dot" }
                    aria-label=format!("Show alumnus {}", index + 1)
                    on:click=move |_| carousel.go_to(index)
                ></button>
            }
        })
        .collect_view();

    view! {
        <section id="alumni" class="section section-muted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Alumni " <span class="accent">"Spotlight"</span></h2>
                    <p class="section-lead">
                        "Meet our successful alumni who are making a difference in their fields and giving back to the community."
                    </p>
                </div>
                <div class="spotlight">
                    {profiles}
                    <button class="carousel-arrow left" aria-label="Previous alumnus" on:click=move |_| carousel.previous()>
                        <Icon path=ICON_CHEVRON_LEFT />
                    </button>
                    <button class="carousel-arrow right" aria-label="Next alumnus" on:click=move |_| carousel.next()>
                        <Icon path=ICON_CHEVRON_RIGHT />
                    </button>
                </div>
                <div class="carousel-dots">{dots}</div>
                <div class="section-footer">
                    <a href="/alumni" class="btn btn-outline">
                        "Explore All Alumni"
                        <Icon path=ICON_ARROW_RIGHT size="16" />
                    </a>
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn ProfileCard(profile: AlumniProfile) -> impl IntoView {
    let fallback = initials(&profile.name);
    let points = format!("{} points", profile.points);
    let achievements = profile
        .achievements
        .into_iter()
        .map(|achievement| {
            view! {
                <div class="achievement">
                    <Icon path=ICON_STAR size="16" />
                    <span>{achievement}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="spotlight-side">
            <div class="spotlight-avatar">
                <Avatar name=profile.name.clone() src=profile.avatar fallback=fallback size="avatar-xl" />
                {profile.verified.then(|| view! {
                    <span class="verified" title="Verified alumnus">
                        <Icon path=ICON_STAR size="14" />
                    </span>
                })}
            </div>
            <h3 class="spotlight-name">{profile.name}</h3>
            <p class="spotlight-role">{profile.title}</p>
            <div class="meta">
                <Icon path=ICON_BUILDING size="16" />
                <span>{profile.company}</span>
            </div>
            <div class="meta">
                <Icon path=ICON_MAP_PIN size="16" />
                <span>{profile.location}</span>
            </div>
            <span class="badge">{points}</span>
        </div>
        <div class="spotlight-main">
            <span class="meta">{format!("Class of {}", profile.graduation_year)}</span>
            <p class="spotlight-department">{profile.department}</p>
            <p class="card-text">{profile.bio}</p>
            <h4>"Key Achievements"</h4>
            <div class="achievements">{achievements}</div>
            <div class="hero-actions">
                <a href="/alumni" class="btn btn-primary">
                    "View Profile"
                    <Icon path=ICON_ARROW_RIGHT size="16" />
                </a>
                <a href="/messages" class="btn btn-outline">"Send Message"</a>
            </div>
        </div>
    }
}
