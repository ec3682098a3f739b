pub mod activities;
pub mod offices;
pub mod stats;

pub use activities::RecentActivity;
pub use offices::OfficeSummary;
pub use stats::StatsGrid;
