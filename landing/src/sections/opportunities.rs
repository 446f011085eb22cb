use allyconnect_core::content::{OpportunityCard, initials};
use allyconnect_core::schema::OpportunityType;
use leptos::prelude::*;

use super::Avatar;
use crate::icons::*;

fn kind_icon(kind: OpportunityType) -> &'static str {
    match kind {
        OpportunityType::Internship => ICON_CLOCK,
        OpportunityType::Job => ICON_BRIEFCASE,
        OpportunityType::Volunteer => ICON_STAR,
        OpportunityType::Project => ICON_BUILDING,
    }
}

#[component]
pub fn OpportunitiesSection(opportunities: Vec<OpportunityCard>) -> impl IntoView {
    let cards = opportunities
        .into_iter()
        .map(|opportunity| view! { <OpportunityItem opportunity=opportunity /> })
        .collect_view();

    view! {
        <section id="opportunities" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Latest " <span class="accent">"Opportunities"</span></h2>
                    <p class="section-lead">
                        "Discover internships, jobs, and projects posted by our alumni network. Your next career step starts here."
                    </p>
                </div>
                <div class="grid-3">{cards}</div>
                <div class="section-footer">
                    <a href="/opportunities" class="btn btn-outline">
                        "View All Opportunities"
                        <Icon path=ICON_ARROW_RIGHT size="16" />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn OpportunityItem(opportunity: OpportunityCard) -> impl IntoView {
    let chips = opportunity
        .visible_requirements()
        .iter()
        .map(|requirement| view! { <span class="chip">{requirement.clone()}</span> })
        .collect_view();
    let hidden = opportunity.hidden_requirement_count();
    let more = (hidden > 0).then(|| view! { <span class="chip">{format!("+{hidden} more")}</span> });
    let kind_class = format!("badge kind-{}", opportunity.kind.as_str());
    let kind_label = opportunity.kind_label();
    let poster = opportunity.posted_by;
    let poster_initials = initials(&poster.name);

    view! {
        <article class="card">
            <div class="card-body">
                <div class="opportunity-top">
                    <div>
                        <span class=kind_class>
                            <Icon path=kind_icon(opportunity.kind) size="14" />
                            {kind_label}
                        </span>
                        {opportunity.featured.then(|| view! { <span class="badge featured">"Featured"</span> })}
                    </div>
                    <div class="opportunity-stats">
                        <div>{opportunity.posted_date}</div>
                        <div>{format!("{} applicants", opportunity.applicants)}</div>
                    </div>
                </div>
                <h3 class="card-title">{opportunity.title}</h3>
                <div class="meta-list">
                    <div class="meta">
                        <Icon path=ICON_BUILDING size="16" />
                        <span>{opportunity.company}</span>
                    </div>
                    <div class="meta">
                        <Icon path=ICON_MAP_PIN size="16" />
                        <span>{opportunity.location}</span>
                    </div>
                </div>
                <p class="card-text">{opportunity.description}</p>
                <div>{chips}{more}</div>
                <div class="poster">
                    <Avatar name=poster.name.clone() src=poster.avatar fallback=poster_initials size="avatar-sm" />
                    <div>
                        <div class="poster-name">{poster.name}</div>
                        <div class="poster-title">{poster.title}</div>
                    </div>
                </div>
                <p class="deadline">"Deadline: " <strong>{opportunity.deadline}</strong></p>
            </div>
            <div class="card-footer">
                <button class="btn btn-secondary btn-block">
                    "Apply Now"
                    <Icon path=ICON_ARROW_RIGHT size="16" />
                </button>
            </div>
        </article>
    }
}
