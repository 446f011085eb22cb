use allyconnect_core::content::EventCard;
use leptos::prelude::*;

use crate::icons::*;

#[component]
pub fn EventsSection(events: Vec<EventCard>) -> impl IntoView {
    let cards = events
        .into_iter()
        .map(|event| view! { <EventItem event=event /> })
        .collect_view();

    view! {
        <section id="events" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Upcoming " <span class="accent">"Events"</span></h2>
                    <p class="section-lead">
                        "Join our vibrant community events designed to foster connections, share knowledge, and celebrate achievements."
                    </p>
                </div>
                <div class="grid-3">{cards}</div>
                <div class="section-footer">
                    <a href="/events" class="btn btn-outline">
                        "View All Events"
                        <Icon path=ICON_ARROW_RIGHT size="16" />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn EventItem(event: EventCard) -> impl IntoView {
    let percentage = event.attendance_percentage();
    let full = event.is_full();
    let register_label = event.register_label();
    let status_label = event.status_label();
    let capacity = format!("{}/{} attendees", event.attendees, event.max_attendees);

    view! {
        <article class="card">
            <div class="event-image" style=format!("background-image: url({})", event.image)>
                {event.featured.then(|| view! {
                    <span class="badge featured">
                        <Icon path=ICON_STAR size="12" />
                        "Featured"
                    </span>
                })}
                <span class="badge status">{status_label}</span>
            </div>
            <div class="card-body">
                <h3 class="card-title">{event.title}</h3>
                <p class="card-text">{event.description}</p>
                <div class="meta-list">
                    <div class="meta">
                        <Icon path=ICON_CALENDAR size="16" />
                        <span>{event.date}</span>
                        <Icon path=ICON_CLOCK size="16" />
                        <span>{event.time}</span>
                    </div>
                    <div class="meta">
                        <Icon path=ICON_MAP_PIN size="16" />
                        <span>{event.location}</span>
                    </div>
                    <div class="meta">
                        <Icon path=ICON_USERS size="16" />
                        <span>{capacity}</span>
                        <span>{format!("({percentage}% full)")}</span>
                    </div>
                </div>
                <div class="progress">
                    <div class="progress-bar" style=format!("width: {}%", percentage.min(100))></div>
                </div>
            </div>
            <div class="card-footer">
                <button class="btn btn-primary btn-block" disabled=full>{register_label}</button>
            </div>
        </article>
    }
}
