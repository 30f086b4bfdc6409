//! Property-based tests for the token codec

use chrono::{Duration, Utc};
use jsonwebtoken::Algorithm;
use proptest::prelude::*;
use reportdesk::backend::auth::sessions::{TokenCodec, TokenError};

fn codec(secret: &str) -> TokenCodec {
    TokenCodec::new(secret.as_bytes(), Algorithm::HS256, Duration::minutes(30)).unwrap()
}

proptest! {
    #[test]
    fn test_verify_returns_issued_subject(subject in "\\PC{0,64}", ttl_secs in 1i64..86_400) {
        let codec = codec("property-secret");
        let token = codec.issue(&subject, Duration::seconds(ttl_secs)).unwrap();

        let claims = codec.verify(&token).unwrap();
        prop_assert_eq!(claims.sub, subject);
    }

    #[test]
    fn test_expiry_is_exclusive(subject in "[a-z]{1,16}", ttl_secs in 1i64..86_400) {
        let codec = codec("property-secret");
        let issued = Utc::now();
        let token = codec.issue_at(&subject, Duration::seconds(ttl_secs), issued).unwrap();

        prop_assert!(codec.verify_at(&token, issued + Duration::seconds(ttl_secs - 1)).is_ok());
        prop_assert_eq!(
            codec.verify_at(&token, issued + Duration::seconds(ttl_secs)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_past_expiry_always_rejected(subject in "[a-z]{1,16}", ttl_secs in -86_400i64..=0) {
        let codec = codec("property-secret");
        let token = codec.issue(&subject, Duration::seconds(ttl_secs)).unwrap();

        prop_assert_eq!(codec.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_other_secret_never_verifies(
        secret in "[a-zA-Z0-9]{8,32}",
        other in "[a-zA-Z0-9]{8,32}",
        subject in "[a-z]{1,16}",
    ) {
        prop_assume!(secret != other);
        let token = codec(&secret).issue(&subject, Duration::minutes(30)).unwrap();

        prop_assert_eq!(codec(&other).verify(&token), Err(TokenError::InvalidSignature));
    }
}
