//! Stylesheet for the landing page, injected once by `App`.
//!
//! Plain CSS with custom properties for the palette; no build step.

/// Complete CSS for the landing page.
pub const LANDING_CSS: &str = r#"
:root {
    --primary: #1e40af;
    --primary-soft: rgba(30, 64, 175, 0.1);
    --secondary: #f59e0b;
    --secondary-soft: rgba(245, 158, 11, 0.12);
    --success: #16a34a;
    --destructive: #dc2626;
    --foreground: #0f172a;
    --muted: #64748b;
    --muted-bg: #f1f5f9;
    --border: #e2e8f0;
    --background: #ffffff;
    --radius: 12px;
    --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
    --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: var(--font); color: var(--foreground); background: var(--background); line-height: 1.5; }
a { color: inherit; text-decoration: none; }
button { font: inherit; cursor: pointer; border: none; background: none; color: inherit; }
button:disabled { cursor: not-allowed; opacity: 0.55; }
.is-hidden { display: none !important; }

.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.section { padding: 64px 0; }
.section-muted { background: linear-gradient(135deg, var(--muted-bg), var(--background)); }
.section-header { text-align: center; margin-bottom: 48px; }
.section-title { font-size: 2.25rem; font-weight: 800; margin-bottom: 12px; }
.section-title .accent { color: var(--primary); }
.section-lead { color: var(--muted); font-size: 1.1rem; max-width: 640px; margin: 0 auto; }
.section-footer { text-align: center; margin-top: 32px; }

.btn { display: inline-flex; align-items: center; gap: 8px; padding: 10px 20px; border-radius: 8px; font-weight: 600; transition: all 0.2s; }
.btn-primary { background: var(--primary); color: #fff; }
.btn-primary:hover { box-shadow: 0 8px 20px rgba(30, 64, 175, 0.35); }
.btn-secondary { background: var(--secondary); color: #111827; }
.btn-outline { border: 1px solid var(--border); }
.btn-outline:hover { background: var(--muted-bg); }
.btn-ghost:hover { background: var(--muted-bg); }
.btn-block { width: 100%; justify-content: center; }
.icon-btn { position: relative; display: inline-flex; align-items: center; justify-content: center; width: 40px; height: 40px; border-radius: 999px; }
.counter { position: absolute; top: -2px; right: -2px; min-width: 20px; height: 20px; border-radius: 999px; font-size: 0.7rem; display: flex; align-items: center; justify-content: center; color: #fff; background: var(--destructive); }
.counter.secondary { background: var(--secondary); color: #111827; }

.badge { display: inline-flex; align-items: center; gap: 4px; padding: 2px 10px; border-radius: 999px; font-size: 0.75rem; font-weight: 600; background: var(--primary-soft); color: var(--primary); }
.badge.featured { background: var(--secondary); color: #111827; }
.badge.kind-internship { background: var(--primary); color: #fff; }
.badge.kind-job { background: var(--secondary); color: #111827; }
.badge.kind-volunteer { background: var(--success); color: #fff; }
.badge.kind-project { background: #eab308; color: #111827; }
.chip { display: inline-block; padding: 2px 8px; border-radius: 6px; font-size: 0.75rem; background: var(--muted-bg); color: var(--muted); margin: 0 6px 6px 0; }

.avatar { display: inline-flex; align-items: center; justify-content: center; border-radius: 999px; background: linear-gradient(135deg, var(--primary), #3b82f6); color: #fff; font-weight: 700; overflow: hidden; flex-shrink: 0; }
.avatar img { width: 100%; height: 100%; object-fit: cover; }
.avatar-sm { width: 32px; height: 32px; font-size: 0.8rem; }
.avatar-md { width: 48px; height: 48px; }
.avatar-xl { width: 128px; height: 128px; font-size: 2rem; box-shadow: 0 0 0 4px #fff, var(--shadow); }

.card { background: #fff; border: 1px solid var(--border); border-radius: var(--radius); box-shadow: var(--shadow); overflow: hidden; }
.card-body { padding: 24px; }
.card-footer { padding: 0 24px 24px; }
.grid-3 { display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); }
.meta { display: flex; align-items: center; gap: 6px; color: var(--muted); font-size: 0.875rem; }

/* Header */
.header { position: sticky; top: 0; z-index: 50; background: rgba(255, 255, 255, 0.92); backdrop-filter: blur(8px); border-bottom: 1px solid var(--border); }
.header-inner { display: flex; align-items: center; justify-content: space-between; height: 64px; gap: 24px; }
.brand { font-size: 1.4rem; font-weight: 800; color: var(--primary); }
.nav-links { display: flex; gap: 24px; }
.nav-link { color: var(--muted); font-weight: 500; }
.nav-link:hover { color: var(--primary); }
.search { position: relative; flex: 1; max-width: 360px; }
.search input { width: 100%; padding: 8px 12px 8px 36px; border-radius: 8px; border: 1px solid var(--border); background: var(--muted-bg); }
.search svg { position: absolute; left: 10px; top: 50%; transform: translateY(-50%); color: var(--muted); }
.header-actions { display: flex; align-items: center; gap: 12px; }
.menu-toggle { display: none; }
.user-menu { position: absolute; right: 0; top: 48px; width: 224px; padding: 8px; }
.user-menu a, .user-menu button { display: block; width: 100%; text-align: left; padding: 8px 12px; border-radius: 6px; }
.user-menu .danger { color: var(--destructive); }
.mobile-menu { display: flex; flex-direction: column; gap: 12px; padding: 16px 0; border-top: 1px solid var(--border); }

/* Hero */
.hero { position: relative; height: 640px; overflow: hidden; color: #fff; }
.hero-slide { position: absolute; inset: 0; opacity: 0; transition: opacity 1s; background-size: cover; background-position: center; }
.hero-slide.active { opacity: 1; }
.hero-slide::before { content: ""; position: absolute; inset: 0; background: linear-gradient(90deg, rgba(30, 64, 175, 0.9), rgba(30, 64, 175, 0.7), transparent); }
.hero-content { position: relative; z-index: 1; height: 100%; display: flex; flex-direction: column; justify-content: center; max-width: 640px; gap: 24px; }
.hero-title { font-size: 3.25rem; font-weight: 800; line-height: 1.1; }
.hero-description { font-size: 1.2rem; opacity: 0.9; }
.hero-actions { display: flex; gap: 16px; flex-wrap: wrap; }
.hero .btn-outline { border-color: rgba(255, 255, 255, 0.6); }
.carousel-arrow { position: absolute; top: 50%; transform: translateY(-50%); z-index: 2; width: 44px; height: 44px; border-radius: 999px; display: flex; align-items: center; justify-content: center; background: rgba(255, 255, 255, 0.15); backdrop-filter: blur(4px); }
.carousel-arrow.left { left: 16px; }
.carousel-arrow.right { right: 16px; }
.carousel-dots { display: flex; justify-content: center; gap: 8px; }
.hero .carousel-dots { position: absolute; left: 50%; bottom: 150px; transform: translateX(-50%); z-index: 2; align-items: center; }
.dot { width: 12px; height: 12px; border-radius: 999px; background: rgba(255, 255, 255, 0.5); transition: all 0.3s; }
.dot.active { background: #fff; transform: scale(1.15); }
.section .dot { background: var(--border); }
.section .dot.active { background: var(--primary); }
.autoplay-toggle { margin-left: 8px; color: #fff; }
.hero-stats { position: absolute; left: 0; right: 0; bottom: 0; z-index: 2; padding: 24px 0; background: linear-gradient(0deg, rgba(255, 255, 255, 0.95), transparent); }
.stat-grid { display: grid; gap: 24px; grid-template-columns: repeat(3, 1fr); }
.stat-card { display: flex; align-items: center; gap: 16px; padding: 16px; border-radius: var(--radius); background: rgba(255, 255, 255, 0.2); backdrop-filter: blur(8px); color: var(--foreground); }
.stat-icon { padding: 12px; border-radius: 10px; background: var(--primary); color: #fff; display: flex; }
.stat-value { font-size: 1.5rem; font-weight: 800; }
.stat-label { font-size: 0.875rem; color: var(--muted); }

/* Events & opportunities */
.event-image { position: relative; height: 180px; background: linear-gradient(135deg, var(--primary-soft), var(--secondary-soft)); }
.event-image .badge { position: absolute; top: 12px; }
.event-image .badge.featured { left: 12px; }
.event-image .badge.status { right: 12px; background: #fff; }
.card-title { font-size: 1.2rem; font-weight: 700; margin-bottom: 8px; }
.card-text { color: var(--muted); font-size: 0.9rem; margin-bottom: 16px; }
.meta-list { display: grid; gap: 8px; margin-bottom: 16px; }
.progress { height: 8px; border-radius: 999px; background: var(--muted-bg); overflow: hidden; }
.progress-bar { height: 100%; background: linear-gradient(90deg, var(--primary), var(--secondary)); }
.opportunity-top { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 12px; }
.opportunity-stats { text-align: right; color: var(--muted); font-size: 0.8rem; }
.poster { display: flex; align-items: center; gap: 10px; padding: 12px; border-radius: 8px; background: var(--muted-bg); margin-bottom: 12px; }
.poster-name { font-weight: 600; font-size: 0.875rem; }
.poster-title { color: var(--muted); font-size: 0.75rem; }
.deadline { font-size: 0.85rem; color: var(--muted); }
.deadline strong { color: var(--destructive); }

/* Spotlight */
.spotlight { position: relative; max-width: 900px; margin: 0 auto 32px; }
.spotlight .carousel-arrow { background: rgba(255, 255, 255, 0.85); color: var(--foreground); box-shadow: var(--shadow); }
.spotlight-card { display: grid; grid-template-columns: 1fr 2fr; }
.spotlight-side { display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 8px; padding: 32px; text-align: center; background: linear-gradient(135deg, var(--primary-soft), var(--secondary-soft)); }
.spotlight-avatar { position: relative; margin-bottom: 16px; }
.verified { position: absolute; top: -6px; right: -6px; padding: 6px; border-radius: 999px; background: var(--secondary); color: #111827; display: flex; }
.spotlight-name { font-size: 1.5rem; font-weight: 800; }
.spotlight-role { color: var(--primary); font-weight: 600; }
.spotlight-main { padding: 32px; }
.spotlight-department { font-size: 1.1rem; font-weight: 600; color: var(--secondary); margin-bottom: 16px; }
.achievements { display: grid; gap: 8px; margin: 12px 0 24px; }
.achievement { display: flex; align-items: center; gap: 8px; color: var(--muted); font-size: 0.9rem; }
.achievement svg { color: var(--secondary); }

/* Leaderboard */
.board { display: grid; gap: 24px; grid-template-columns: 2fr 1fr; }
.board-title { display: flex; align-items: center; gap: 8px; font-size: 1.2rem; font-weight: 700; padding: 24px 24px 0; }
.podium-entry { display: flex; align-items: center; gap: 16px; padding: 16px; margin: 16px 24px; border-radius: var(--radius); background: var(--muted-bg); }
.podium-entry.gold { box-shadow: 0 0 0 2px #fde68a; background: linear-gradient(90deg, #fefce8, #fffbeb); }
.podium-entry.silver { box-shadow: 0 0 0 2px #e5e7eb; background: linear-gradient(90deg, #f9fafb, #f8fafc); }
.podium-entry.bronze { box-shadow: 0 0 0 2px #fcd34d; background: linear-gradient(90deg, #fffbeb, #fff7ed); }
.rank { display: flex; flex-direction: column; align-items: center; width: 40px; }
.rank .gold { color: #eab308; }
.rank .silver { color: #9ca3af; }
.rank .bronze { color: #d97706; }
.rank-number { font-weight: 800; color: var(--muted); }
.rank-change { display: flex; align-items: center; font-size: 0.75rem; }
.rank-change.up { color: var(--success); }
.rank-change.down { color: var(--destructive); }
.rank-change.same { color: var(--muted); }
.entry-main { flex: 1; min-width: 0; }
.entry-head { display: flex; justify-content: space-between; gap: 12px; }
.entry-name { font-weight: 700; }
.entry-sub { color: var(--muted); font-size: 0.8rem; }
.entry-points { font-size: 1.25rem; font-weight: 800; color: var(--primary); text-align: right; }
.entry-stats { display: flex; gap: 12px; color: var(--muted); font-size: 0.75rem; margin-top: 6px; align-items: center; }
.totals { display: grid; gap: 12px; padding: 16px 24px 24px; }
.total-row { display: flex; justify-content: space-between; font-size: 0.9rem; color: var(--muted); }
.total-row strong { color: var(--foreground); }
.side-entry { display: flex; align-items: center; gap: 12px; padding: 12px 24px; }

/* Footer */
.footer { background: var(--primary); color: rgba(255, 255, 255, 0.85); }
.footer-grid { display: grid; gap: 32px; grid-template-columns: 2fr 1fr 1fr 1fr; padding: 48px 0; }
.footer-brand { font-size: 1.5rem; font-weight: 800; color: #fff; margin-bottom: 12px; }
.footer-about { max-width: 420px; margin-bottom: 24px; }
.contact-row { display: flex; align-items: center; gap: 12px; font-size: 0.875rem; margin-bottom: 10px; }
.newsletter h4, .footer-section h4 { color: #fff; font-size: 1.05rem; margin-bottom: 12px; }
.newsletter p { font-size: 0.875rem; margin-bottom: 12px; }
.newsletter-form { display: flex; gap: 8px; }
.newsletter-form input { flex: 1; padding: 8px 12px; border-radius: 8px; border: 1px solid rgba(255, 255, 255, 0.2); background: rgba(255, 255, 255, 0.1); color: #fff; }
.newsletter-note { font-size: 0.8rem; margin-top: 8px; }
.footer-section ul { list-style: none; display: grid; gap: 8px; font-size: 0.9rem; }
.footer-section a:hover, .legal a:hover { color: #fff; }
.footer-bottom { display: flex; justify-content: space-between; align-items: center; gap: 16px; padding: 24px 0; border-top: 1px solid rgba(255, 255, 255, 0.2); font-size: 0.875rem; flex-wrap: wrap; }
.socials { display: flex; align-items: center; gap: 12px; }
.social { padding: 8px; border-radius: 999px; display: flex; background: rgba(255, 255, 255, 0.1); }
.legal { display: flex; justify-content: center; flex-wrap: wrap; gap: 24px; padding: 16px 0 24px; font-size: 0.85rem; color: rgba(255, 255, 255, 0.6); }

@media (min-width: 961px) {
    .mobile-menu { display: none; }
}

@media (max-width: 960px) {
    .nav-links, .search, .header-actions .quick-actions { display: none; }
    .menu-toggle { display: inline-flex; }
    .board, .spotlight-card, .stat-grid { grid-template-columns: 1fr; }
    .footer-grid { grid-template-columns: 1fr 1fr; }
    .hero-title { font-size: 2.4rem; }
    .hero-stats { display: none; }
    .hero .carousel-dots { bottom: 24px; }
}
"#;
