pub mod dashboard;
pub mod habit_detail;
pub mod home;
pub mod login;
pub mod register;

pub use dashboard::DashboardPage;
pub use habit_detail::HabitDetailPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
