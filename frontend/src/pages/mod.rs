pub mod dashboard;
pub mod login;
pub mod office;
pub mod register;
pub mod search;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use office::OfficePage;
pub use register::RegisterPage;
pub use search::GlobalSearchPage;
