use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JwtClaims {
    /// User id (hex object id)
    pub sub: String,
    pub exp: i64,
}

impl JwtClaims {
    pub fn new(sub: impl Into<String>, ttl_secs: i64) -> Self {
        Self {
            sub: sub.into(),
            exp: chrono::Utc::now().timestamp() + ttl_secs,
        }
    }
}

#[derive(Deserialize)]
struct JwtHeader {
    alg: String,
}

fn mac(secret: &[u8]) -> Result<HmacSha256, String> {
    HmacSha256::new_from_slice(secret).map_err(|err| {
        tracing::error!("error generating hmac {err:?}");
        "Invalid signing key".to_string()
    })
}

/// Signs `claims` as an HS256 token.
pub fn issue_token(claims: &JwtClaims, secret: &[u8]) -> Result<String, String> {
    let payload =
        serde_json::to_vec(claims).map_err(|e| format!("Failed to encode JWT claims: {}", e))?;
    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(HEADER),
        URL_SAFE_NO_PAD.encode(payload)
    );

    let mut mac = mac(secret)?;
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{}.{}", signing_input, signature))
}

/// Checks structure, algorithm, signature and expiration, in that order.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<JwtClaims, String> {
    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err("Invalid JWT format: expected 3 parts (header.payload.signature)".to_string());
    }

    let header = URL_SAFE_NO_PAD
        .decode(parts[0])
        .map_err(|e| format!("Failed to decode JWT header: {}", e))?;
    let header: JwtHeader = serde_json::from_slice(&header)
        .map_err(|e| format!("Failed to parse JWT header: {}", e))?;
    if header.alg != "HS256" {
        return Err(format!("Unsupported JWT algorithm {}", header.alg));
    }

    let signature = URL_SAFE_NO_PAD
        .decode(parts[2])
        .map_err(|e| format!("Failed to decode JWT signature: {}", e))?;
    let mut mac = mac(secret)?;
    mac.update(parts[0].as_bytes());
    mac.update(b".");
    mac.update(parts[1].as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| "JWT signature mismatch".to_string())?;

    let payload = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| format!("Failed to decode JWT payload: {}", e))?;
    let claims: JwtClaims = serde_json::from_slice(&payload)
        .map_err(|e| format!("Failed to parse JWT claims: {}", e))?;

    validate_jwt_expiration(&claims)?;
    Ok(claims)
}

pub fn validate_jwt_expiration(claims: &JwtClaims) -> Result<(), String> {
    let now = chrono::Utc::now().timestamp();
    if claims.exp < now {
        return Err(format!(
            "JWT token expired (exp: {}, now: {})",
            claims.exp, now
        ));
    }
    Ok(())
}

/// Extract Bearer token from Authorization header
pub fn extract_bearer_token(authorization: &str) -> Result<&str, String> {
    let parts: Vec<&str> = authorization.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Invalid Authorization header format".to_string());
    }
    if parts[0] != "Bearer" {
        return Err("Expected Bearer scheme in Authorization header".to_string());
    }
    Ok(parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn issued_token_verifies() {
        let claims = JwtClaims::new("65f0c0ffee0000000000abcd", 3600);
        let token = issue_token(&claims, SECRET).unwrap();

        assert_eq!(verify_token(&token, SECRET).unwrap(), claims);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(&JwtClaims::new("u", 3600), SECRET).unwrap();
        assert!(verify_token(&token, b"other").is_err());
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let token = issue_token(&JwtClaims::new("u", 3600), SECRET).unwrap();
        let forged = URL_SAFE_NO_PAD.encode(r#"{"sub":"admin","exp":99999999999}"#);
        let parts: Vec<&str> = token.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], forged, parts[2]);

        assert!(verify_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token(&JwtClaims::new("u", -60), SECRET).unwrap();
        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(err.contains("expired"));
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(verify_token("abc.def", SECRET).is_err());
        assert!(verify_token("a.b.c", SECRET).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let token = extract_bearer_token("Bearer abc.def.ghi").expect("Failed to extract token");
        assert_eq!(token, "abc.def.ghi");
        assert!(extract_bearer_token("Basic abc").is_err());
        assert!(extract_bearer_token("Bearer").is_err());
    }
}
