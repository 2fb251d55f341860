use super::*;

#[test]
fn from_vars_defaults() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind, DEFAULT_BIND);
    assert!(cfg.bind.is_unspecified());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_accepts_ipv6() {
    let cfg = ServerConfig::from_vars(Some("::1"), Some("9000")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:9000");
}

#[test]
fn from_vars_blank_values_use_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::from_vars(None, None).unwrap());
}

#[test]
fn from_vars_trims_whitespace() {
    let cfg = ServerConfig::from_vars(None, Some(" 4000 ")).unwrap();
    assert_eq!(cfg.port, 4000);
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = ServerConfig::from_vars(None, Some("70000")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "70000"));
    assert!(err.to_string().starts_with("invalid PORT \"70000\""));
}

#[test]
fn from_vars_rejects_bad_bind() {
    let err = ServerConfig::from_vars(Some("localhost"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBind { ref value, .. } if value == "localhost"));
}

#[test]
fn from_env_reads_port() {
    // The only test in this crate that touches process env.
    unsafe {
        std::env::remove_var("TRUTHLENS_BIND");
        std::env::set_var("PORT", "5151");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 5151);
    unsafe { std::env::remove_var("PORT") };
}
