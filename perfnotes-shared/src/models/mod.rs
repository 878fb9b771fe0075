//! Wire contracts and view-side model logic.

pub mod auth;
pub mod errors;
pub mod note;
pub mod user;

pub use auth::{ForceResetRequest, LoginRequest, LoginResponse, QuickLoginUser};
pub use errors::{ErrorResponse, ModelError};
pub use note::{CreateNoteRequest, Employee, Note, NoteFilter, NoteType};
pub use user::{AdminUser, AssignRoleRequest, Role, User};
