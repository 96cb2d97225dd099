//! One module per page of the app.

mod communities;
mod community_detail;
mod dashboard;
mod event_detail;
mod events;
mod home;
mod login;
mod messages;
mod profile;
mod project_detail;
mod projects;
mod register;
mod tutorial_detail;
mod tutorials;

pub use communities::Communities;
pub use community_detail::CommunityDetail;
pub use dashboard::Dashboard;
pub use event_detail::EventDetail;
pub use events::Events;
pub use home::Home;
pub use login::Login;
pub use messages::Messages;
pub use profile::Profile;
pub use project_detail::ProjectDetail;
pub use projects::Projects;
pub use register::Register;
pub use tutorial_detail::TutorialDetail;
pub use tutorials::Tutorials;

use chrono::{DateTime, Utc};

/// "Sep 1, 2026" or empty when the backend omitted the timestamp.
pub(crate) fn format_date(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|t| t.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// "Sep 1, 2026 18:00" for event schedules and message timestamps.
pub(crate) fn format_datetime(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|t| t.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_formats() {
        let ts = Utc.with_ymd_and_hms(2026, 9, 1, 18, 30, 0).unwrap();
        assert_eq!(format_date(Some(ts)), "Sep 1, 2026");
        assert_eq!(format_date(None), "");
        assert_eq!(format_datetime(Some(ts)), "Sep 1, 2026 18:30");
        assert_eq!(format_datetime(None), "");
    }
}
