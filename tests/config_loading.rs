// tests/config_loading.rs
use post_coin_watcher::config::{load_default, load_from, BotConfig, Secrets};
use std::{env, fs};

#[test]
fn toml_and_json_files_parse() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("bot.toml");
    fs::write(
        &p_toml,
        r#"
metrics_listen = "127.0.0.1:9000"

[feed]
account_handle = "someone"
max_results = 25

[watcher]
poll_interval_secs = 30
"#,
    )
    .unwrap();
    let cfg = load_from(&p_toml).unwrap();
    assert_eq!(cfg.feed.account_handle, "someone");
    assert_eq!(cfg.feed.max_results, 25);
    assert_eq!(cfg.feed.account_id, "44196397");
    assert_eq!(cfg.watcher.poll_interval_secs, 30);
    assert_eq!(cfg.metrics_listen.unwrap().port(), 9000);

    let p_json = dir.path().join("bot.json");
    fs::write(&p_json, r#"{"asset":{"request_timeout_secs":15}}"#).unwrap();
    let cj = load_from(&p_json).unwrap();
    assert_eq!(cj.asset.request_timeout_secs, Some(15));
    assert_eq!(cj.asset.base_url, "https://pumpportal.fun/api");
}

#[test]
fn broken_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("bot.toml");
    fs::write(&p, "[watcher\npoll_interval_secs = ").unwrap();
    assert!(load_from(&p).is_err());
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Run from a temp CWD so the repo's config/ is not picked up
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    env::remove_var("BOT_CONFIG_PATH");

    // 1) Nothing on disk: built-in defaults
    assert_eq!(load_default().unwrap(), BotConfig::default());

    // 2) Fallback TOML in ./config/
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("bot.toml"), "[watcher]\npoll_interval_secs = 90\n").unwrap();
    assert_eq!(load_default().unwrap().watcher.poll_interval_secs, 90);

    // 3) Env var wins
    let p_env = tmp.path().join("other.json");
    fs::write(&p_env, r#"{"watcher":{"poll_interval_secs":7}}"#).unwrap();
    env::set_var("BOT_CONFIG_PATH", p_env.display().to_string());
    assert_eq!(load_default().unwrap().watcher.poll_interval_secs, 7);

    // 4) Env var pointing nowhere is an error
    env::set_var("BOT_CONFIG_PATH", tmp.path().join("missing.toml").display().to_string());
    assert!(load_default().is_err());
    env::remove_var("BOT_CONFIG_PATH");

    env::set_current_dir(&old).unwrap();
}

#[serial_test::serial]
#[test]
fn secrets_require_feed_and_asset_keys() {
    env::remove_var("TWITTER_BEARER_TOKEN");
    env::remove_var("PUMPFUN_API_KEY");
    env::remove_var("WALLET_PRIVATE_KEY");
    let err = Secrets::from_env().unwrap_err();
    assert!(err.to_string().contains("TWITTER_BEARER_TOKEN"));

    env::set_var("TWITTER_BEARER_TOKEN", "t");
    env::set_var("PUMPFUN_API_KEY", "  k  ");
    let s = Secrets::from_env().unwrap();
    assert_eq!(s.asset_api_key, "k");
    assert!(s.wallet_private_key.is_none());

    env::set_var("WALLET_PRIVATE_KEY", "w");
    assert!(Secrets::from_env().unwrap().wallet_private_key.is_some());

    env::remove_var("TWITTER_BEARER_TOKEN");
    env::remove_var("PUMPFUN_API_KEY");
    env::remove_var("WALLET_PRIVATE_KEY");
}
