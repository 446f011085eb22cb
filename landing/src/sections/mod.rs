// Landing page sections

mod alumni_spotlight;
mod avatar;
mod console_banner;
mod events;
mod footer;
mod header;
mod hero;
mod leaderboard;
mod opportunities;

pub use alumni_spotlight::AlumniSpotlight;
pub use avatar::Avatar;
pub use console_banner::ConsoleBanner;
pub use events::EventsSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use leaderboard::LeaderboardSection;
pub use opportunities::OpportunitiesSection;
