use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_padded_number() {
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn from_env_reads_port_and_site_root() {
    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::set_var("SITE_ROOT", "/srv/site");
    }

    let config = HostConfig::from_env().unwrap();
    assert_eq!(config.port, 4100);
    assert_eq!(config.site_root, PathBuf::from("/srv/site"));
    assert_eq!(config.addr().port(), 4100);

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_ROOT");
    }
}
