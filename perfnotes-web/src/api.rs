use once_cell::unsync::OnceCell;
use reqwest::{Client, Error, StatusCode};
use shared::models::{
    AdminUser, AssignRoleRequest, CreateNoteRequest, Employee, ForceResetRequest, LoginRequest,
    LoginResponse, Note, QuickLoginUser,
};

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = const { OnceCell::new() };
}

/// Lightweight REST client for the perfnotes backend.
///
/// The client holds no credentials of its own: the bearer token is owned by
/// the session store and passed into each authenticated call.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The process-wide client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Authenticate with email/password credentials. Non-2xx statuses are
    /// surfaced as errors so the caller can collapse them into one failure
    /// outcome.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, Error> {
        let response = self
            .client
            .post(self.api_url("auth/login"))
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Accounts offered on the login screen for one-click sign-in.
    pub async fn quick_login_users(&self) -> Result<Vec<QuickLoginUser>, Error> {
        let response = self
            .client
            .get(self.api_url("auth/quick-login-users"))
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Complete a forced password reset using the token issued at login.
    pub async fn force_reset_password(
        &self,
        token: &str,
        payload: &ForceResetRequest,
    ) -> Result<(), Error> {
        let response = self
            .client
            .post(self.api_url("auth/forceResetPassword"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Performance notes visible to the caller's role.
    pub async fn list_notes(&self, token: &str) -> Result<Vec<Note>, Error> {
        let response = self
            .client
            .get(self.api_url("notes"))
            .bearer_auth(token)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Record a new performance note about an employee.
    pub async fn create_note(
        &self,
        token: &str,
        payload: &CreateNoteRequest,
    ) -> Result<(), Error> {
        let response = self
            .client
            .post(self.api_url("notes"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Employees visible to the caller, for the notes filter dropdown.
    pub async fn list_employees(&self, token: &str) -> Result<Vec<Employee>, Error> {
        let response = self
            .client
            .get(self.api_url("employees"))
            .bearer_auth(token)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Distinct calendar years with recorded notes, for the year filter.
    pub async fn note_years(&self, token: &str) -> Result<Vec<i32>, Error> {
        let response = self
            .client
            .get(self.api_url("noteYears"))
            .bearer_auth(token)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// User accounts visible to administrators.
    pub async fn list_users(&self, token: &str) -> Result<Vec<AdminUser>, Error> {
        let response = self
            .client
            .get(self.api_url("admin/users"))
            .bearer_auth(token)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Reassign a user's role.
    pub async fn assign_role(
        &self,
        token: &str,
        user_id: i64,
        payload: &AssignRoleRequest,
    ) -> Result<(), Error> {
        let response = self
            .client
            .put(self.api_url(&format!("admin/users/{user_id}/role")))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }
}

/// Whether an API failure was a 401, meaning the persisted token went stale
/// and the consumer should force re-authentication.
pub fn is_unauthorized(error: &Error) -> bool {
    error.status() == Some(StatusCode::UNAUTHORIZED)
}
