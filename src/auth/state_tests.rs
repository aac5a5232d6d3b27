//! Tests for `Credentials`.

use super::{AuthError, Credentials, TokenKind};
use crate::schema::TokenResponse;
use std::time::{Duration, SystemTime};

fn token_response(token_type: &str) -> TokenResponse {
    TokenResponse {
        token_type: token_type.to_string(),
        access_token: "acc_tok".to_string(),
        expires_in: 3600.0,
        refresh_token: "ref_tok".to_string(),
        refresh_expires_in: 86_400.0,
        scope: "merchant".to_string(),
        not_before_policy: "0".to_string(),
        session_state: "sess123".to_string(),
    }
}

fn epoch(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

const LEEWAY: Duration = Duration::from_secs(60);

mod access_token_presence {
    use super::*;

    #[test]
    fn fresh_credentials_have_no_token() {
        let creds = Credentials::new();

        assert!(!creds.has_access_token());
        assert_eq!(creds.access_token(), Err(AuthError::NotAuthenticated));
    }

    #[test]
    fn apply_sets_access_token() {
        let mut creds = Credentials::new();
        creds.apply(&token_response("bearer"), epoch(1_000_000));

        assert!(creds.has_access_token());
        assert_eq!(creds.access_token(), Ok("acc_tok"));
    }

    #[test]
    fn authorization_header_without_tokens_fails() {
        let creds = Credentials::new();

        assert_eq!(
            creds.authorization_header(TokenKind::Access),
            Err(AuthError::NotAuthenticated)
        );
        assert_eq!(
            creds.authorization_header(TokenKind::Refresh),
            Err(AuthError::MissingRefreshToken)
        );
    }
}

mod token_type_normalization {
    use super::*;

    #[test]
    fn lowercase_is_capitalized() {
        let mut creds = Credentials::new();
        creds.apply(&token_response("bearer"), epoch(0));

        assert_eq!(
            creds.authorization_header(TokenKind::Access).unwrap(),
            "Bearer acc_tok"
        );
    }

    #[test]
    fn uppercase_is_capitalized() {
        let mut creds = Credentials::new();
        creds.apply(&token_response("BEARER"), epoch(0));

        assert_eq!(
            creds.authorization_header(TokenKind::Access).unwrap(),
            "Bearer acc_tok"
        );
    }

    #[test]
    fn canonical_form_is_unchanged() {
        let mut creds = Credentials::new();
        creds.apply(&token_response("Bearer"), epoch(0));

        assert_eq!(
            creds.authorization_header(TokenKind::Access).unwrap(),
            "Bearer acc_tok"
        );
    }

    #[test]
    fn mixed_case_is_normalized() {
        let mut creds = Credentials::new();
        creds.apply(&token_response("BeArEr"), epoch(0));

        assert_eq!(
            creds.authorization_header(TokenKind::Refresh).unwrap(),
            "Bearer ref_tok"
        );
    }
}

mod expiry {
    use super::*;

    #[test]
    fn fresh_credentials_are_expired() {
        let creds = Credentials::new();

        assert!(creds.is_access_expired(epoch(0), LEEWAY));
        assert!(creds.is_refresh_expired(epoch(0), LEEWAY));
    }

    #[test]
    fn token_is_live_before_leeway_window() {
        let mut creds = Credentials::new();
        // access expires at 1_000_000 + 3600
        creds.apply(&token_response("bearer"), epoch(1_000_000));

        assert!(!creds.is_access_expired(epoch(1_000_000), LEEWAY));
        assert!(!creds.is_access_expired(epoch(1_003_539), LEEWAY));
    }

    #[test]
    fn token_expires_leeway_before_real_expiry() {
        let mut creds = Credentials::new();
        creds.apply(&token_response("bearer"), epoch(1_000_000));

        // Real expiry is 1_003_600; with 60s leeway the token is treated as
        // expired from 1_003_540 on.
        assert!(creds.is_access_expired(epoch(1_003_540), LEEWAY));
        assert!(creds.is_access_expired(epoch(1_003_600), LEEWAY));
        assert!(creds.is_access_expired(epoch(2_000_000), LEEWAY));
    }

    #[test]
    fn larger_leeway_is_never_less_eager() {
        let mut creds = Credentials::new();
        creds.apply(&token_response("bearer"), epoch(1_000_000));

        for offset in [0u64, 1_000, 3_000, 3_500, 3_599, 3_600, 10_000] {
            let now = epoch(1_000_000 + offset);
            for (small, large) in [(0u64, 60), (60, 120), (120, 3_600)] {
                let eager_small = creds.is_access_expired(now, Duration::from_secs(small));
                let eager_large = creds.is_access_expired(now, Duration::from_secs(large));
                // Raising leeway can only make expiry "more true".
                assert!(!eager_small || eager_large);
            }
        }
    }

    #[test]
    fn refresh_expiry_tracks_refresh_lifetime() {
        let mut creds = Credentials::new();
        // refresh expires at 1_000_000 + 86_400
        creds.apply(&token_response("bearer"), epoch(1_000_000));

        assert!(!creds.is_refresh_expired(epoch(1_086_339), LEEWAY));
        assert!(creds.is_refresh_expired(epoch(1_086_340), LEEWAY));
    }

    #[test]
    fn negative_lifetime_is_treated_as_immediately_expired() {
        let mut creds = Credentials::new();
        let mut token = token_response("bearer");
        token.expires_in = -5.0;
        creds.apply(&token, epoch(1_000_000));

        assert!(creds.is_access_expired(epoch(1_000_000), Duration::ZERO));
    }
}

mod apply {
    use super::*;

    #[test]
    fn apply_populates_all_fields() {
        let mut creds = Credentials::new();
        creds.apply(&token_response("bearer"), epoch(1_000_000));

        assert_eq!(creds.access_token(), Ok("acc_tok"));
        assert_eq!(
            creds.authorization_header(TokenKind::Refresh).unwrap(),
            "Bearer ref_tok"
        );
        assert_eq!(creds.scope(), "merchant");
        assert_eq!(creds.session_state(), "sess123");
    }

    #[test]
    fn apply_replaces_previous_exchange_entirely() {
        let mut creds = Credentials::new();
        creds.apply(&token_response("bearer"), epoch(1_000_000));

        let second = TokenResponse {
            token_type: "token".to_string(),
            access_token: "acc2".to_string(),
            expires_in: 60.0,
            refresh_token: "ref2".to_string(),
            refresh_expires_in: 120.0,
            scope: "merchant:ro".to_string(),
            not_before_policy: "1".to_string(),
            session_state: "sess456".to_string(),
        };
        creds.apply(&second, epoch(2_000_000));

        assert_eq!(creds.access_token(), Ok("acc2"));
        assert_eq!(
            creds.authorization_header(TokenKind::Access).unwrap(),
            "Token acc2"
        );
        assert_eq!(creds.scope(), "merchant:ro");
        assert_eq!(creds.session_state(), "sess456");
        // Old expiries are gone: the new 60s lifetime governs.
        assert!(!creds.is_access_expired(epoch(2_000_000), Duration::ZERO));
        assert!(creds.is_access_expired(epoch(2_000_060), Duration::ZERO));
    }
}
