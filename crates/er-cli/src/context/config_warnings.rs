use er_config::{ENV_PREFIX, ExitReadyConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ExitReadyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ExitReadyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        ("GENERAL", "ANCHOR_YEAR", config.general.anchor_year.is_some()),
        (
            "QUESTIONNAIRE",
            "PATH",
            config.questionnaire.custom_path().is_some(),
        ),
        (
            "STORAGE",
            "STATE_DIR",
            !config.storage.state_dir.trim().is_empty(),
        ),
    ];

    sections
        .into_iter()
        .filter(|(section, _, configured)| !configured && has_single_underscore_key(&env_keys, section))
        .map(|(section, example, _)| {
            format!(
                "{} config appears default while {ENV_PREFIX}{section}_* env vars exist. Use double underscores (example: {ENV_PREFIX}{section}__{example}).",
                section.to_ascii_lowercase()
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
