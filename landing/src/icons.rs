//! Inline SVG icons for the landing page.
//!
//! Outline icons on a 24x24 grid, drawn with `stroke="currentColor"` so they
//! pick up the surrounding text colour.

use allyconnect_core::content::Glyph;
use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CALENDAR size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

pub const ICON_CHEVRON_LEFT: &str = "M15 18l-6-6 6-6";
pub const ICON_CHEVRON_RIGHT: &str = "M9 18l6-6-6-6";
pub const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";
pub const ICON_ARROW_UP: &str = "M12 19V5M5 12l7-7 7 7";
pub const ICON_ARROW_DOWN: &str = "M12 5v14M19 12l-7 7-7-7";
pub const ICON_MINUS: &str = "M5 12h14";
pub const ICON_PLAY: &str = "M6 4l14 8-14 8z";
pub const ICON_PAUSE: &str = "M7 4v16M17 4v16";
pub const ICON_SEARCH: &str = "M11 4a7 7 0 1 0 0 14a7 7 0 1 0 0-14zM21 21l-5-5";
pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";
pub const ICON_CLOSE: &str = "M18 6L6 18M6 6l12 12";
pub const ICON_BELL: &str = "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9M10 21h4";
pub const ICON_MESSAGE: &str = "M21 12a8 8 0 0 1-11.6 7.1L3 21l1.9-6.4A8 8 0 1 1 21 12z";
pub const ICON_USERS: &str =
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8zM22 21v-2a4 4 0 0 0-3-3.9M16 3.1a4 4 0 0 1 0 7.8";
pub const ICON_CALENDAR: &str = "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM16 2v4M8 2v4M3 10h18";
pub const ICON_CLOCK: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM12 6v6l4 2";
pub const ICON_MAP_PIN: &str = "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0zM12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z";
pub const ICON_BRIEFCASE: &str = "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2zM16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16";
pub const ICON_BUILDING: &str = "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18zM6 12H4a2 2 0 0 0-2 2v8h4M18 9h2a2 2 0 0 1 2 2v11h-4M10 6h4M10 10h4M10 14h4M10 18h4";
pub const ICON_STAR: &str = "M12 2l3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1z";
pub const ICON_TROPHY: &str = "M6 9H4.5a2.5 2.5 0 0 1 0-5H6M18 9h1.5a2.5 2.5 0 0 0 0-5H18M4 22h16M10 14.7V17c0 .6-.5 1-1 1.2C7.9 18.8 7 20.2 7 22M14 14.7V17c0 .6.5 1 1 1.2 1.1.5 2 1.9 2 3.8M18 2H6v7a6 6 0 0 0 12 0V2z";
pub const ICON_MEDAL: &str = "M7.2 15L2.7 7.2A2 2 0 0 1 2.5 6V4a2 2 0 0 1 2-2h15a2 2 0 0 1 2 2v2a2 2 0 0 1-.2 1.2L16.8 15M11 12L5.1 2.2M13 12l5.9-9.8M8 7h8M12 15a4 4 0 1 0 0 8a4 4 0 1 0 0-8z";
pub const ICON_AWARD: &str = "M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12zM8.2 13.9L7 23l5-3 5 3-1.2-9.1";
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6";
pub const ICON_PHONE: &str = "M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1 1 .4 1.9.7 2.8a2 2 0 0 1-.5 2.1L8.1 9.9a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.8.7a2 2 0 0 1 1.7 2z";
pub const ICON_FACEBOOK: &str = "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z";
pub const ICON_TWITTER: &str = "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z";
pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4z";
pub const ICON_INSTAGRAM: &str = "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zM16 11.4a4 4 0 1 1-7.9 1.2 4 4 0 0 1 7.9-1.2zM17.5 6.5h.01";

/// Path for a content glyph.
pub fn glyph_path(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Users => ICON_USERS,
        Glyph::Calendar => ICON_CALENDAR,
        Glyph::Briefcase => ICON_BRIEFCASE,
        Glyph::Facebook => ICON_FACEBOOK,
        Glyph::Twitter => ICON_TWITTER,
        Glyph::Linkedin => ICON_LINKEDIN,
        Glyph::Instagram => ICON_INSTAGRAM,
    }
}
