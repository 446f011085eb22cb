use allyconnect_core::OutOfRange;
use allyconnect_core::config::DeckConfig;
use allyconnect_core::content::{HeroStat, Slide};
use leptos::prelude::*;

use crate::carousel::use_carousel;
use crate::icons::*;

#[component]
pub fn Hero(
    slides: Vec<Slide>,
    stats: Vec<HeroStat>,
    deck: DeckConfig,
    out_of_range: OutOfRange,
) -> impl IntoView {
    let count = slides.len();
    let Ok(carousel) = use_carousel(count, deck, out_of_range) else {
        return view! {}.into_any();
    };

    let slide_views = slides
        .into_iter()
        .enumerate()
        .map(|(index, slide)| {
            view! {
                <div
                    class=move || if carousel.is_current(index) { "hero-slide active" } else { "hero-slide" }
                    style=format!("background-image: url({})", slide.image)
                    aria-hidden=move || (!carousel.is_current(index)).to_string()
                >
                    <div class="container hero-content">
                        <h1 class="hero-title">{slide.title}</h1>
                        <p class="hero-description">{slide.description}</p>
                        <div class="hero-actions">
                            <a href=slide.cta_link class="btn btn-secondary">
                                <Icon path=ICON_PLAY size="18" />
                                {slide.cta}
                            </a>
                            <a href="#events" class="btn btn-outline">"Learn More"</a>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = (0..count)
        .map(|index| {
            view! {
                <button
                    class=move || if carousel.is_current(index) { "dot active" } else { "dot" }
                    aria-label=format!("Go to slide {}", index + 1)
                    on:click=move |_| carousel.go_to(index)
                ></button>
            }
        })
        .collect_view();

    let stat_cards = stats
        .into_iter()
        .map(|stat| {
            view! {
                <div class="stat-card">
                    <div class="stat-icon">
                        <Icon path=glyph_path(stat.glyph) size="24" />
                    </div>
                    <div>
                        <p class="stat-value">{stat.value}</p>
                        <p class="stat-label">{stat.label}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="hero">
            {slide_views}
            <button class="carousel-arrow left" aria-label="Previous slide" on:click=move |_| carousel.previous()>
                <Icon path=ICON_CHEVRON_LEFT size="24" />
            </button>
            <button class="carousel-arrow right" aria-label="Next slide" on:click=move |_| carousel.next()>
                <Icon path=ICON_CHEVRON_RIGHT size="24" />
            </button>
            <div class="carousel-dots">
                {dots}
                <button
                    class="icon-btn autoplay-toggle"
                    aria-label=move || if carousel.is_advancing() { "Pause slideshow" } else { "Play slideshow" }
                    on:click=move |_| carousel.toggle_auto_advance()
                >
                    {move || {
                        if carousel.is_advancing() {
                            view! { <Icon path=ICON_PAUSE size="16" /> }.into_any()
                        } else {
                            view! { <Icon path=ICON_PLAY size="16" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <div class="hero-stats">
                <div class="container stat-grid">{stat_cards}</div>
            </div>
        </section>
    }
    .into_any()
}
