use std::sync::Arc;

use axum::{Extension, async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::{axum_http::error_responses::AppError, config::config_model::Supabase};

const ADMIN_ROLE: &str = "admin";
const STAFF_ROLE: &str = "staff";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SupabaseClaims {
    pub sub: String,
    pub aud: String,
    pub role: String,
    pub email: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    /// Back-office role from `app_metadata.role`; `None` for customers.
    pub app_role: Option<String>,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.app_role.as_deref() == Some(ADMIN_ROLE)
    }

    pub fn is_staff(&self) -> bool {
        self.is_admin() || self.app_role.as_deref() == Some(STAFF_ROLE)
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            warn!(user_id = %self.user_id, "auth: admin role required");
            Err(AppError::Forbidden)
        }
    }

    pub fn require_staff(&self) -> Result<(), AppError> {
        if self.is_staff() {
            Ok(())
        } else {
            warn!(user_id = %self.user_id, "auth: staff role required");
            Err(AppError::Forbidden)
        }
    }
}

pub fn validate_supabase_jwt(token: &str, secret: &str) -> anyhow::Result<SupabaseClaims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&["authenticated", "service_role"]);

    let token_data = decode::<SupabaseClaims>(token, &decoding_key, &validation)
        .map_err(|e| anyhow::anyhow!("JWT validation failed: {}", e))?;

    Ok(token_data.claims)
}

impl TryFrom<SupabaseClaims> for AuthUser {
    type Error = AppError;

    fn try_from(claims: SupabaseClaims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)?;

        Ok(AuthUser {
            user_id,
            app_role: claims.app_metadata.role,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Unauthorized)?;

        let Extension(supabase) = Extension::<Arc<Supabase>>::from_request_parts(parts, state)
            .await
            .map_err(|err| anyhow::anyhow!("supabase config is not installed: {}", err))?;

        let claims = validate_supabase_jwt(bearer.token(), &supabase.jwt_secret).map_err(|err| {
            warn!(error = %err, "auth: rejected bearer token");
            AppError::Unauthorized
        })?;

        AuthUser::try_from(claims)
    }
}

#[cfg(test)]
mod tests;
