use crate::{
    api::{Activity, ActivityAction},
    pages::dashboard::repository::DashboardStats,
    utils::time::relative_time_label,
};
use chrono::{DateTime, Utc};

const UNKNOWN_OFFICE: &str = "an unknown office";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityDisplay {
    pub id: String,
    pub text: String,
    pub time: String,
    pub icon: &'static str,
    pub color: &'static str,
}

fn office_or_unknown(name: Option<&str>) -> &str {
    name.filter(|n| !n.trim().is_empty()).unwrap_or(UNKNOWN_OFFICE)
}

pub fn activity_sentence(activity: &Activity) -> String {
    let from = office_or_unknown(activity.from_office.as_deref());
    let to = office_or_unknown(activity.to_office.as_deref());
    match activity.action {
        ActivityAction::Create => format!("Asset '{}' added to {}.", activity.asset_name, to),
        ActivityAction::Update => format!("Asset '{}' was updated.", activity.asset_name),
        ActivityAction::Delete => {
            format!("Asset '{}' was deleted from {}.", activity.asset_name, from)
        }
        ActivityAction::Move => format!(
            "Asset '{}' moved from {} to {}.",
            activity.asset_name, from, to
        ),
    }
}

pub fn activity_style(action: ActivityAction) -> (&'static str, &'static str) {
    match action {
        ActivityAction::Create => ("fa-check-circle", "text-green-400"),
        ActivityAction::Update => ("fa-sync-alt", "text-blue-400"),
        ActivityAction::Delete => ("fa-times-circle", "text-red-400"),
        ActivityAction::Move => ("fa-building", "text-yellow-400"),
    }
}

pub fn activity_display(activity: &Activity, now: DateTime<Utc>) -> ActivityDisplay {
    let (icon, color) = activity_style(activity.action);
    ActivityDisplay {
        id: activity.id.clone(),
        text: activity_sentence(activity),
        time: relative_time_label(now, activity.timestamp),
        icon,
        color,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: usize,
    pub icon: &'static str,
    pub color: &'static str,
}

pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Assets",
            value: stats.total_assets,
            icon: "fa-hdd",
            color: "text-blue-400",
        },
        StatCard {
            label: "Active Offices",
            value: stats.active_offices,
            icon: "fa-building",
            color: "text-green-400",
        },
        StatCard {
            label: "Assets in Repair",
            value: stats.in_repair,
            icon: "fa-wrench",
            color: "text-yellow-400",
        },
        StatCard {
            label: "New Assets (Last 30 Days)",
            value: stats.new_assets,
            icon: "fa-chart-line",
            color: "text-purple-400",
        },
    ]
}
