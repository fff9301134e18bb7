//! Authentication service: sign-up, sign-in, sign-out and caller
//! resolution over the user and session repositories.

use chrono::{Duration, Utc};
use uuid::Uuid;

use menagerie_core::error::{ParkError, ParkResult};
use menagerie_core::models::session::CreateSession;
use menagerie_core::models::user::{CreateUser, User};
use menagerie_core::repository::{SessionRepository, UserRepository};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password::verify_password;
use crate::token::{generate_session_token, hash_session_token};

/// Sign-up request.
#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub last_name: String,
    pub first_name: String,
    pub age: u32,
}

/// Sign-in request.
#[derive(Debug, Clone)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Successful sign-in: the raw token is returned exactly once.
#[derive(Debug, Clone)]
pub struct SignInOutput {
    pub session_token: String,
    pub session_id: Uuid,
    pub user_id: Uuid,
    /// Seconds until the session expires.
    pub expires_in: u64,
}

pub struct AuthService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: U,
    session_repo: S,
    config: AuthConfig,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: U, session_repo: S, config: AuthConfig) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Register a new account. Fails with `Validation` on a too-short
    /// password and `AlreadyExists` on a duplicate email.
    pub async fn sign_up(&self, input: SignUpInput) -> ParkResult<User> {
        if input.password.len() < self.config.min_password_length {
            return Err(ParkError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    self.config.min_password_length
                ),
            });
        }

        self.user_repo
            .create(CreateUser {
                email: input.email,
                password: input.password,
                last_name: input.last_name,
                first_name: input.first_name,
                age: input.age,
            })
            .await
    }

    /// Verify credentials and open a session. Unknown email and wrong
    /// password are indistinguishable to the caller.
    pub async fn sign_in(&self, input: SignInInput) -> ParkResult<SignInOutput> {
        let user = match self.user_repo.get_by_email(&input.email).await {
            Ok(user) => user,
            Err(ParkError::NotFound { .. }) => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        let matched = verify_password(
            &input.password,
            &user.password_hash,
            self.config.pepper.as_deref(),
        )
        .map_err(ParkError::from)?;
        if !matched {
            return Err(AuthError::InvalidCredentials.into());
        }

        let raw_token = generate_session_token();
        let session = self
            .session_repo
            .create(CreateSession {
                user_id: user.id,
                token_hash: hash_session_token(&raw_token),
                expires_at: Utc::now()
                    + Duration::seconds(self.config.session_lifetime_secs as i64),
            })
            .await?;

        Ok(SignInOutput {
            session_token: raw_token,
            session_id: session.id,
            user_id: user.id,
            expires_in: self.config.session_lifetime_secs,
        })
    }

    /// Invalidate one session.
    pub async fn sign_out(&self, session_id: Uuid) -> ParkResult<()> {
        self.session_repo.invalidate(session_id).await
    }

    /// Resolve a raw session token to its user profile.
    ///
    /// An expired session is invalidated on sight, then rejected.
    pub async fn current_user(&self, raw_token: &str) -> ParkResult<User> {
        let session = match self
            .session_repo
            .get_by_token_hash(&hash_session_token(raw_token))
            .await
        {
            Ok(session) => session,
            Err(ParkError::NotFound { .. }) => {
                return Err(AuthError::SessionInvalid.into());
            }
            Err(e) => return Err(e),
        };

        if session.expires_at <= Utc::now() {
            self.session_repo.invalidate(session.id).await?;
            return Err(AuthError::SessionExpired.into());
        }

        self.user_repo.get_by_id(session.user_id).await
    }

    /// Resolve a raw session token to a caller id, the shape the
    /// rating operations take their identity in.
    pub async fn current_user_id(&self, raw_token: &str) -> ParkResult<Uuid> {
        Ok(self.current_user(raw_token).await?.id)
    }
}
