use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Short relative label for a past instant: "Just now", "5 min ago",
/// "2 hours ago", "3 days ago". Future timestamps read as "Just now".
pub fn relative_time_label(now: DateTime<Utc>, at: DateTime<Utc>) -> String {
    let seconds = (now - at).num_seconds();
    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3_600 {
        format!("{} min ago", seconds / 60)
    } else if seconds < 86_400 {
        let hours = seconds / 3_600;
        format!("{} {} ago", hours, if hours == 1 { "hour" } else { "hours" })
    } else {
        let days = seconds / 86_400;
        format!("{} {} ago", days, if days == 1 { "day" } else { "days" })
    }
}
