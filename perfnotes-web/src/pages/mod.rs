mod add_note;
mod admin_users;
mod dashboard;
mod error;
pub mod login;
mod notes;
mod reset_password;
mod unauthorized;

pub use add_note::AddNotePage;
pub use admin_users::AdminUsersPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use login::LoginPage;
pub use notes::NotesPage;
pub use reset_password::ResetPasswordPage;
pub use unauthorized::UnauthorizedPage;
