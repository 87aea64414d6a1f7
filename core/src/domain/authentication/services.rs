use chrono::Duration;
use sha2::{Digest, Sha256};
use tracing::instrument;

use crate::domain::{
    authentication::{
        entities::AuthSession,
        ports::{AuthSessionRepository, AuthenticationService},
        value_objects::{AuthenticatedSession, Identity, LoginInput, RegisterUserInput},
    },
    common::{entities::app_errors::CoreError, generate_random_string, services::Service},
    credential::{entities::Credential, ports::CredentialRepository},
    crypto::ports::HasherRepository,
    food::ports::{BarcodeRepository, FoodRepository},
    health::ports::HealthCheckRepository,
    pantry::ports::PantryRepository,
    recipe::ports::{RatingRepository, RecipeRepository, RecipeUsageRepository},
    shopping::ports::ShoppingRepository,
    user::{
        entities::{User, UserConfig},
        ports::UserRepository,
    },
    waste::ports::WasteRepository,
};

const SESSION_TOKEN_LENGTH: usize = 48;
const SESSION_TTL_DAYS: i64 = 30;

pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let trimmed = email.trim();
    let valid = trimmed.contains('@')
        && !trimmed.starts_with('@')
        && !trimmed.ends_with('@')
        && !trimmed.contains(char::is_whitespace);

    if valid {
        Ok(())
    } else {
        Err(CoreError::Invalid("invalid email address".to_string()))
    }
}

pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    let long_enough = password.len() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_upper && has_lower && has_digit {
        Ok(())
    } else {
        Err(CoreError::Invalid(
            "password must be at least 8 characters with upper case, lower case and a digit"
                .to_string(),
        ))
    }
}

pub fn validate_date_of_birth(date_of_birth: &str) -> Result<(), CoreError> {
    chrono::NaiveDate::parse_from_str(date_of_birth, "%d/%m/%Y")
        .map(|_| ())
        .map_err(|_| CoreError::Invalid("date of birth must be DD/MM/YYYY".to_string()))
}

impl<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC> AuthenticationService
    for Service<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC>
where
    U: UserRepository,
    C: CredentialRepository,
    H: HasherRepository,
    AS: AuthSessionRepository,
    F: FoodRepository,
    P: PantryRepository,
    R: RecipeRepository,
    RU: RecipeUsageRepository,
    RA: RatingRepository,
    SL: ShoppingRepository,
    W: WasteRepository,
    B: BarcodeRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn register(&self, input: RegisterUserInput) -> Result<AuthenticatedSession, CoreError> {
        let email = input.email.trim().to_ascii_lowercase();

        validate_email(&email)?;
        validate_password_strength(&input.password)?;
        validate_date_of_birth(&input.date_of_birth)?;

        if self
            .user_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::EmailAlreadyExists);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let user = self
            .user_repository
            .create_user(User::new(UserConfig {
                email,
                first_name: input.first_name.trim().to_string(),
                last_name: input.last_name.trim().to_string(),
                date_of_birth: input.date_of_birth,
                role: "user".to_string(),
            }))
            .await?;

        self.credential_repository
            .create_credential(Credential::new(user.id, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "registered new user");

        let token = generate_random_string(SESSION_TOKEN_LENGTH);
        let session = self
            .auth_session_repository
            .create_session(AuthSession::new(
                user.id,
                hash_session_token(&token),
                Duration::days(SESSION_TTL_DAYS),
            ))
            .await?;

        Ok(AuthenticatedSession {
            user,
            token,
            expires_at: session.expires_at,
        })
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn login(&self, input: LoginInput) -> Result<AuthenticatedSession, CoreError> {
        let email = input.email.trim().to_ascii_lowercase();

        let mut user = self
            .user_repository
            .get_by_email(email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let credential = self
            .credential_repository
            .get_by_user_id(user.id)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let verified = self
            .hasher_repository
            .verify_password(input.password, credential.password_hash)
            .await?;

        if !verified {
            return Err(CoreError::InvalidCredentials);
        }

        user.record_login(input.ip);
        let user = self.user_repository.update_user(user).await?;

        let token = generate_random_string(SESSION_TOKEN_LENGTH);
        let session = self
            .auth_session_repository
            .create_session(AuthSession::new(
                user.id,
                hash_session_token(&token),
                Duration::days(SESSION_TTL_DAYS),
            ))
            .await?;

        tracing::info!(user_id = %user.id, total_logins = user.total_logins, "user logged in");

        Ok(AuthenticatedSession {
            user,
            token,
            expires_at: session.expires_at,
        })
    }

    async fn authenticate(&self, token: String) -> Result<Identity, CoreError> {
        let session = self
            .auth_session_repository
            .get_by_token_hash(hash_session_token(&token))
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let (now, _) = crate::domain::common::generate_timestamp();
        if session.is_expired(now) {
            self.auth_session_repository
                .delete_session(session.id)
                .await?;
            return Err(CoreError::SessionExpired);
        }

        let user = self
            .user_repository
            .get_by_id(session.user_id)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        Ok(Identity::User(user))
    }

    async fn logout(&self, token: String) -> Result<(), CoreError> {
        if let Some(session) = self
            .auth_session_repository
            .get_by_token_hash(hash_session_token(&token))
            .await?
        {
            self.auth_session_repository
                .delete_session(session.id)
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::ports::MockAuthSessionRepository,
        credential::ports::MockCredentialRepository,
        crypto::ports::MockHasherRepository,
        food::ports::{MockBarcodeRepository, MockFoodRepository},
        health::ports::MockHealthCheckRepository,
        pantry::ports::MockPantryRepository,
        recipe::ports::{MockRatingRepository, MockRecipeRepository, MockRecipeUsageRepository},
        shopping::ports::MockShoppingRepository,
        user::ports::MockUserRepository,
        waste::ports::MockWasteRepository,
    };
    use uuid::Uuid;

    type MockService = Service<
        MockUserRepository,
        MockCredentialRepository,
        MockHasherRepository,
        MockAuthSessionRepository,
        MockFoodRepository,
        MockPantryRepository,
        MockRecipeRepository,
        MockRecipeUsageRepository,
        MockRatingRepository,
        MockShoppingRepository,
        MockWasteRepository,
        MockBarcodeRepository,
        MockHealthCheckRepository,
    >;

    fn mock_service() -> MockService {
        Service::new(
            MockUserRepository::new(),
            MockCredentialRepository::new(),
            MockHasherRepository::new(),
            MockAuthSessionRepository::new(),
            MockFoodRepository::new(),
            MockPantryRepository::new(),
            MockRecipeRepository::new(),
            MockRecipeUsageRepository::new(),
            MockRatingRepository::new(),
            MockShoppingRepository::new(),
            MockWasteRepository::new(),
            MockBarcodeRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn login_shifts_current_login_into_last_and_counts() {
        let mut user = User::new(UserConfig {
            email: "cook@example.com".to_string(),
            first_name: "Avery".to_string(),
            last_name: "Cook".to_string(),
            date_of_birth: "01/01/1990".to_string(),
            role: "user".to_string(),
        });
        user.record_login(Some("10.0.0.8".to_string()));
        let first_login = user.current_login;
        let user_id = user.id;

        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(move |_| {
                let user = user.clone();
                Box::pin(async move { Ok(Some(user)) })
            });
        service
            .credential_repository
            .expect_get_by_user_id()
            .returning(move |_| {
                let credential = Credential::new(user_id, "argon2-hash".to_string());
                Box::pin(async move { Ok(Some(credential)) })
            });
        service
            .hasher_repository
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(true) }));
        service
            .user_repository
            .expect_update_user()
            .withf(move |updated| {
                updated.last_login == first_login
                    && updated.last_login_ip.as_deref() == Some("10.0.0.8")
                    && updated.current_login_ip.as_deref() == Some("198.51.100.7")
                    && updated.total_logins == 2
            })
            .returning(|user| Box::pin(async move { Ok(user) }));
        service
            .auth_session_repository
            .expect_create_session()
            .returning(|session| Box::pin(async move { Ok(session) }));

        let authenticated = service
            .login(LoginInput {
                email: "cook@example.com".to_string(),
                password: "Passw0rd".to_string(),
                ip: Some("198.51.100.7".to_string()),
            })
            .await
            .expect("login succeeds");

        assert_eq!(authenticated.user.total_logins, 2);
        assert_eq!(authenticated.token.len(), SESSION_TOKEN_LENGTH);
    }

    #[tokio::test]
    async fn expired_sessions_are_deleted_and_rejected() {
        let session = AuthSession::new(
            Uuid::new_v4(),
            hash_session_token("stale-token"),
            Duration::days(-1),
        );
        let session_id = session.id;

        let mut service = mock_service();
        service
            .auth_session_repository
            .expect_get_by_token_hash()
            .returning(move |_| {
                let session = session.clone();
                Box::pin(async move { Ok(Some(session)) })
            });
        service
            .auth_session_repository
            .expect_delete_session()
            .withf(move |id| *id == session_id)
            .returning(|_| Box::pin(async { Ok(()) }));
        service.user_repository.expect_get_by_id().times(0);

        let err = service
            .authenticate("stale-token".to_string())
            .await
            .expect_err("session is stale");

        assert_eq!(err, CoreError::SessionExpired);
    }

    #[test]
    fn hashed_tokens_are_hex_sha256() {
        let hash = hash_session_token("abc");
        assert_eq!(hash.len(), 64);
        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn password_strength_requires_all_classes() {
        assert!(validate_password_strength("Passw0rd").is_ok());
        assert!(validate_password_strength("password1").is_err());
        assert!(validate_password_strength("PASSWORD1").is_err());
        assert!(validate_password_strength("Password").is_err());
        assert!(validate_password_strength("Pw0rd").is_err());
    }

    #[test]
    fn date_of_birth_must_be_day_month_year() {
        assert!(validate_date_of_birth("29/02/2000").is_ok());
        assert!(validate_date_of_birth("31/04/1990").is_err());
        assert!(validate_date_of_birth("1990-04-12").is_err());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(validate_email("cook@example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("spaced @example.com").is_err());
        assert!(validate_email("@example.com").is_err());
    }
}
