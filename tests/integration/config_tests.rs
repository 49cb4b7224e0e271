//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use chat_gateway::config::{Config, LogFormat};
    use chat_gateway::{AzureClient, GatewayError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_CONFIG: &str = r#"
server:
  host: "127.0.0.1"
  port: 9100
  workers: 2
provider:
  endpoint: "https://example.openai.azure.com/"
  api_key: "file-key"
  deployment: "gpt-4o-mini"
rate_limit:
  max_requests: 10
  window_secs: 600
  sweep_interval_secs: 0
guardrail:
  max_prompt_chars: 2000
logging:
  level: "debug"
  format: "json"
"#;

    #[test]
    fn test_yaml_sections_deserialize() {
        let config = Config::from_yaml_str(FULL_CONFIG).unwrap();

        assert_eq!(config.server.address(), "127.0.0.1:9100");
        assert_eq!(config.server.worker_count(), 2);
        assert_eq!(config.rate_limit.max_requests, 10);
        assert_eq!(config.rate_limit.sweep_interval(), None);
        assert_eq!(config.guardrail.max_prompt_chars, 2000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.provider.api_version, "2024-06-01");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_config_builds_azure_client() {
        let config = Config::from_yaml_str(FULL_CONFIG).unwrap();
        let client = AzureClient::new(&config.provider).unwrap();
        assert_eq!(client.deployment(), "gpt-4o-mini");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml_str("rate_limit:\n  max_requests: 5\n").unwrap();

        assert_eq!(config.rate_limit.max_requests, 5);
        assert_eq!(config.rate_limit.window_secs, 3600);
        assert_eq!(config.guardrail.max_prompt_chars, 6000);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_zero_limits_fail_validation() {
        let config = Config::from_yaml_str("rate_limit:\n  max_requests: 0\n").unwrap();
        let error = config.validate().unwrap_err();
        assert!(matches!(error, GatewayError::Config(_)));

        let config = Config::from_yaml_str("guardrail:\n  max_prompt_chars: 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let error = Config::from_yaml_str("server: [not, a, map").unwrap_err();
        assert!(matches!(error, GatewayError::Config(_)));
    }

    #[test]
    fn test_provider_debug_redacts_key() {
        let config = Config::from_yaml_str(FULL_CONFIG).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("file-key"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_from_file_reads_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"guardrail:\n  max_prompt_chars: 1234\n").unwrap();

        let config = Config::from_file_with(file.path(), |_| None).await.unwrap();
        assert_eq!(config.guardrail.max_prompt_chars, 1234);
    }

    #[tokio::test]
    async fn test_from_file_missing_path() {
        let error = Config::from_file("/nonexistent/gateway.yaml").await.unwrap_err();
        assert!(error.to_string().contains("Failed to read config file"));
    }
}
