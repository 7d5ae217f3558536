use super::*;

#[test]
fn default_lands_anonymous_users_on_land() {
    let config = ShellConfig::default();
    assert_eq!(config.landing_path, "/land");
    assert_eq!(config.root_path, "/");
    assert_eq!(config.landing_intent, LandingIntent::Discard);
}

#[test]
fn guard_uses_configured_paths() {
    let config = ShellConfig {
        landing_path: "/welcome".to_owned(),
        root_path: "/rides".to_owned(),
        landing_intent: LandingIntent::Carry,
    };
    let guard = config.guard();
    assert_eq!(guard.landing_path(), "/welcome");
    assert_eq!(guard.root_path(), "/rides");
}
