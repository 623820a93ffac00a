use figment::Jail;
use pretty_assertions::assert_eq;
use sg_config::{ConfigError, GuideConfig};

fn isolate_user_config(jail: &mut Jail) {
    jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
}

#[test]
fn env_overrides_nested_session_keys() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("STATGUIDE_SESSION__SHOW_BANNER", "false");
        jail.set_env("STATGUIDE_SESSION__PROMPT", "choice>");

        let config = GuideConfig::load().expect("config loads");
        assert!(!config.session.show_banner);
        assert!(config.session.pause_on_exit);
        assert_eq!(config.session.prompt, "choice>");
        Ok(())
    });
}

#[test]
fn env_values_are_trimmed() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("STATGUIDE_SESSION__PROMPT", "> ");

        let config = GuideConfig::load().expect("config loads");
        assert_eq!(config.session.prompt, ">");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            ".statguide.toml",
            r#"
[output]
default_format = "raw"
"#,
        )?;
        jail.set_env("STATGUIDE_OUTPUT__DEFAULT_FORMAT", "json");

        let config = GuideConfig::load().expect("config loads");
        assert_eq!(config.output.default_format, "json");
        Ok(())
    });
}

#[test]
fn single_underscore_keys_are_ignored() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("STATGUIDE_SESSION_SHOW_BANNER", "false");

        let config = GuideConfig::load().expect("config loads");
        assert!(config.session.show_banner);
        Ok(())
    });
}

#[test]
fn log_filter_variable_is_not_config() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("STATGUIDE_LOG", "sg_core=debug");

        let config = GuideConfig::load().expect("config loads");
        assert_eq!(config, GuideConfig::default());
        Ok(())
    });
}

#[test]
fn invalid_format_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("STATGUIDE_OUTPUT__DEFAULT_FORMAT", "yaml");

        let error = GuideConfig::load().expect_err("yaml is not a format");
        assert!(matches!(error, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn mistyped_bool_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("STATGUIDE_SESSION__PAUSE_ON_EXIT", "sometimes");

        let error = GuideConfig::load().expect_err("not a bool");
        assert!(matches!(error, ConfigError::Figment(_)));
        Ok(())
    });
}
