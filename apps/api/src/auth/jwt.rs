// JWT bearer tokens identifying the calling user
// Issued by the login collaborator, verified on every protected route

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifetime of an issued token
pub const TOKEN_TTL_HOURS: i64 = 8;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user_id)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
}

impl Claims {
    /// Claims for `user_id` expiring `TOKEN_TTL_HOURS` from now
    pub fn for_user(user_id: Uuid) -> Self {
        let expiry = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);
        Self {
            sub: user_id,
            exp: expiry.timestamp() as usize,
        }
    }
}

/// Creates an HS256-signed token for a user
///
/// # Example
/// ```
/// use smart_task_api::auth::jwt::{create_token, verify_token};
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let token = create_token(user_id, "secret").expect("valid token");
/// assert_eq!(verify_token(&token, "secret").unwrap().sub, user_id);
/// ```
pub fn create_token(user_id: Uuid, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        &Claims::for_user(user_id),
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies signature and expiry, returning the decoded claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}
