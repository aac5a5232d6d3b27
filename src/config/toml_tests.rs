//! Tests for `TomlConfig` parsing.

use std::io::Write;

use super::ConfigError;
use super::toml::TomlConfig;

mod parsing {
    use super::*;

    #[test]
    fn parses_full_config() {
        let content = r#"
            username = "MERCHANT_ID"
            password = "MERCHANT_SECRET"
            sandbox = false
            base_url = "https://gateway.example/v2"
            timeout_secs = 30
            token_leeway_secs = 120

            [retry]
            max_retries = 3
            base_delay_ms = 250
            jitter_ms = 100

            [check]
            max_retries = 10
            base_delay_ms = 1000
        "#;

        let config = TomlConfig::parse(content).unwrap();

        assert_eq!(config.username.as_deref(), Some("MERCHANT_ID"));
        assert_eq!(config.password.as_deref(), Some("MERCHANT_SECRET"));
        assert_eq!(config.sandbox, Some(false));
        assert_eq!(config.base_url.as_deref(), Some("https://gateway.example/v2"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.token_leeway_secs, Some(120));

        let retry = config.retry.unwrap();
        assert_eq!(retry.max_retries, Some(3));
        assert_eq!(retry.base_delay_ms, Some(250));
        assert_eq!(retry.jitter_ms, Some(100));

        let check = config.check.unwrap();
        assert_eq!(check.max_retries, Some(10));
        assert_eq!(check.base_delay_ms, Some(1000));
        assert_eq!(check.jitter_ms, None);
    }

    #[test]
    fn empty_config_parses_to_all_none() {
        let config = TomlConfig::parse("").unwrap();

        assert_eq!(config, TomlConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = TomlConfig::parse("usrename = \"typo\"");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = TomlConfig::parse("username = ");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod file_loading {
    use super::*;

    #[test]
    fn reads_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "username = \"FILE_MERCHANT\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();

        assert_eq!(config.username.as_deref(), Some("FILE_MERCHANT"));
    }

    #[test]
    fn missing_file_reports_path() {
        let result = TomlConfig::from_file("/nonexistent/paygate.toml");

        match result {
            Err(ConfigError::FileRead { path, .. }) => {
                assert!(path.to_string_lossy().contains("paygate.toml"));
            }
            other => panic!("expected FileRead error, got {other:?}"),
        }
    }
}
