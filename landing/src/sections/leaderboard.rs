use allyconnect_core::content::{
    LeaderboardEntry, Medal, MonthlyTotals, RankChange, format_points, initials,
};
use leptos::prelude::*;

use super::Avatar;
use crate::icons::*;

#[component]
pub fn LeaderboardSection(
    /// Ranks one to three
    podium: Vec<LeaderboardEntry>,
    /// Ranks four and five
    runners_up: Vec<LeaderboardEntry>,
    monthly: MonthlyTotals,
) -> impl IntoView {
    let podium = podium
        .into_iter()
        .map(|entry| view! { <PodiumEntry entry=entry /> })
        .collect_view();
    let side = runners_up
        .into_iter()
        .map(|entry| view! { <SideEntry entry=entry /> })
        .collect_view();

    view! {
        <section id="leaderboard" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Community " <span class="accent">"Leaderboard"</span></h2>
                    <p class="section-lead">
                        "Celebrating our most active alumni who contribute to the community through mentorship, events, and opportunities."
                    </p>
                </div>
                <div class="board">
                    <div class="card">
                        <h3 class="board-title">
                            <Icon path=ICON_TROPHY />
                            "Top Contributors This Month"
                        </h3>
                        {podium}
                    </div>
                    <div>
                        <div class="card">
                            <h3 class="board-title">"This Month"</h3>
                            <div class="totals">
                                <div class="total-row">
                                    "Total Points Earned"
                                    <strong>{format_points(monthly.total_points)}</strong>
                                </div>
                                <div class="total-row">
                                    "Active Contributors"
                                    <strong>{format_points(monthly.active_contributors)}</strong>
                                </div>
                                <div class="total-row">
                                    "Doubts Resolved"
                                    <strong>{format_points(monthly.doubts_resolved)}</strong>
                                </div>
                            </div>
                        </div>
                        <div class="card" style="margin-top: 24px;">
                            <h3 class="board-title">"Rankings 4-5"</h3>
                            {side}
                            <div class="card-footer">
                                <a href="/leaderboard" class="btn btn-outline btn-block">"View Full Leaderboard"</a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn medal_class(medal: Medal) -> &'static str {
    match medal {
        Medal::Gold => "gold",
        Medal::Silver => "silver",
        Medal::Bronze => "bronze",
        Medal::Ranked(_) => "",
    }
}

#[component]
fn RankBadge(medal: Medal, change: RankChange) -> impl IntoView {
    let icon = match medal {
        Medal::Gold => view! { <span class="gold"><Icon path=ICON_TROPHY size="24" /></span> }.into_any(),
        Medal::Silver => view! { <span class="silver"><Icon path=ICON_MEDAL size="24" /></span> }.into_any(),
        Medal::Bronze => view! { <span class="bronze"><Icon path=ICON_AWARD size="24" /></span> }.into_any(),
        Medal::Ranked(rank) => view! { <span class="rank-number">{format!("#{rank}")}</span> }.into_any(),
    };
    let (class, path, steps) = match change {
        RankChange::Up(n) => ("rank-change up", ICON_ARROW_UP, n.to_string()),
        RankChange::Down(n) => ("rank-change down", ICON_ARROW_DOWN, n.to_string()),
        RankChange::Same => ("rank-change same", ICON_MINUS, String::new()),
    };

    view! {
        <div class="rank">
            {icon}
            <span class=class>
                <Icon path=path size="12" />
                {steps}
            </span>
        </div>
    }
}

#[component]
fn PodiumEntry(entry: LeaderboardEntry) -> impl IntoView {
    let medal = entry.medal();
    let change = entry.rank_change();
    let fallback = initials(&entry.name);
    let contributions = entry.contributions;

    view! {
        <div class=format!("podium-entry {}", medal_class(medal))>
            <RankBadge medal=medal change=change />
            <Avatar name=entry.name.clone() src=entry.avatar fallback=fallback />
            <div class="entry-main">
                <div class="entry-head">
                    <div>
                        <div class="entry-name">{entry.name}</div>
                        <div class="entry-sub">
                            {format!("{} • Class of {}", entry.department, entry.graduation_year)}
                        </div>
                    </div>
                    <div>
                        <div class="entry-points">{format_points(entry.points)}</div>
                        <div class="entry-sub">"points"</div>
                    </div>
                </div>
                <div class="entry-stats">
                    <span>{format!("{} doubts", contributions.doubts_resolved)}</span>
                    <span>{format!("{} events", contributions.events_hosted)}</span>
                    <span>{format!("{} jobs", contributions.opportunities_posted)}</span>
                    <span class="badge">{format!("{} badges", entry.badges)}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SideEntry(entry: LeaderboardEntry) -> impl IntoView {
    let medal = entry.medal();
    let change = entry.rank_change();
    let fallback = initials(&entry.name);

    view! {
        <div class="side-entry">
            <RankBadge medal=medal change=change />
            <Avatar name=entry.name.clone() src=entry.avatar fallback=fallback size="avatar-sm" />
            <div class="entry-main">
                <div class="entry-name">{entry.name}</div>
                <div class="entry-sub">{entry.department}</div>
            </div>
            <div class="entry-points">{format_points(entry.points)}</div>
        </div>
    }
}
