use sg_config::{ENV_PREFIX, GuideConfig, OutputConfig, SessionConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_mistyped_env(config: &GuideConfig) {
    for warning in collect_mistyped_env_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_mistyped_env_warnings<I>(config: &GuideConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        (
            "SESSION",
            config.session == SessionConfig::default(),
            "SHOW_BANNER",
        ),
        (
            "OUTPUT",
            config.output == OutputConfig::default(),
            "DEFAULT_FORMAT",
        ),
    ];

    sections
        .into_iter()
        .filter(|(section, is_default, _)| {
            *is_default && has_single_underscore_key(&env_keys, section)
        })
        .map(|(section, _, example)| {
            format!(
                "{section} config appears default while {ENV_PREFIX}{section}_* env vars exist. Use double underscores (example: {ENV_PREFIX}{section}__{example})."
            )
        })
        .collect()
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("{ENV_PREFIX}{section}_");
    let double = format!("{ENV_PREFIX}{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}

#[cfg(test)]
mod tests {
    use sg_config::{GuideConfig, SessionConfig};

    use super::collect_mistyped_env_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_mistyped_env_warnings(
            &GuideConfig::default(),
            env(&[
                ("STATGUIDE_SESSION_SHOW_BANNER", "false"),
                ("STATGUIDE_OUTPUT_DEFAULT_FORMAT", "json"),
            ]),
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("STATGUIDE_SESSION__SHOW_BANNER"));
    }

    #[test]
    fn does_not_warn_for_double_underscore_keys() {
        let warnings = collect_mistyped_env_warnings(
            &GuideConfig::default(),
            env(&[
                ("STATGUIDE_SESSION__SHOW_BANNER", "true"),
                ("STATGUIDE_LOG", "debug"),
            ]),
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_section_is_configured() {
        let config = GuideConfig {
            session: SessionConfig {
                show_banner: false,
                ..SessionConfig::default()
            },
            ..GuideConfig::default()
        };

        let warnings = collect_mistyped_env_warnings(
            &config,
            env(&[("STATGUIDE_SESSION_PROMPT", "> ")]),
        );

        assert!(warnings.is_empty());
    }
}
