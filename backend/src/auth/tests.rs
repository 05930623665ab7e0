use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};

const SECRET: &str = "supersecretjwtsecretforunittesting123";

fn claims(exp: usize, app_role: Option<&str>) -> SupabaseClaims {
    SupabaseClaims {
        sub: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        aud: "authenticated".to_string(),
        role: "authenticated".to_string(),
        email: Some("biuro@example.com".to_string()),
        app_metadata: AppMetadata {
            role: app_role.map(str::to_string),
        },
        exp,
    }
}

fn sign(claims: &SupabaseClaims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_validate_supabase_jwt_success() {
    let my_claims = claims(9999999999, Some("admin"));
    let token = sign(&my_claims, SECRET);

    let decoded = validate_supabase_jwt(&token, SECRET).expect("Valid token should pass");
    assert_eq!(decoded.sub, my_claims.sub);
    assert_eq!(decoded.email, my_claims.email);
    assert_eq!(decoded.app_metadata.role.as_deref(), Some("admin"));
}

#[test]
fn test_validate_supabase_jwt_expired() {
    let token = sign(&claims(1, None), SECRET);

    assert!(validate_supabase_jwt(&token, SECRET).is_err());
}

#[test]
fn test_validate_supabase_jwt_invalid_signature() {
    let token = sign(&claims(9999999999, None), "wrongsecret");

    assert!(validate_supabase_jwt(&token, SECRET).is_err());
}

#[test]
fn test_validate_supabase_jwt_wrong_audience() {
    let mut my_claims = claims(9999999999, None);
    my_claims.aud = "anon".to_string();
    let token = sign(&my_claims, SECRET);

    assert!(validate_supabase_jwt(&token, SECRET).is_err());
}

#[test]
fn auth_user_roles_follow_app_metadata() {
    let admin = AuthUser::try_from(claims(9999999999, Some("admin"))).unwrap();
    let staff = AuthUser::try_from(claims(9999999999, Some("staff"))).unwrap();
    let customer = AuthUser::try_from(claims(9999999999, None)).unwrap();

    assert!(admin.require_admin().is_ok());
    assert!(admin.require_staff().is_ok());
    assert!(staff.require_admin().is_err());
    assert!(staff.require_staff().is_ok());
    assert!(customer.require_staff().is_err());
}

#[test]
fn non_uuid_subject_is_unauthorized() {
    let mut my_claims = claims(9999999999, Some("admin"));
    my_claims.sub = "not-a-uuid".to_string();

    assert!(matches!(
        AuthUser::try_from(my_claims),
        Err(AppError::Unauthorized)
    ));
}
