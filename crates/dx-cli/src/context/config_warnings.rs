use dx_config::DxConfig;

const KNOWN_SECTIONS: [&str; 2] = ["DXWIZ_API__", "DXWIZ_GENERAL__"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &DxConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DxConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let defaults = DxConfig::default();
    let mut warnings = Vec::new();

    for (key, _) in env {
        if !key.starts_with("DXWIZ_") || key == "DXWIZ_LOG" {
            continue;
        }
        if KNOWN_SECTIONS.iter().any(|section| key.starts_with(section)) {
            continue;
        }

        let hint = if key.starts_with("DXWIZ_API") {
            (config.api.base_url == defaults.api.base_url)
                .then_some("Use double underscores (example: DXWIZ_API__BASE_URL).")
        } else if key.starts_with("DXWIZ_GENERAL") {
            (config.general.state_dir == defaults.general.state_dir)
                .then_some("Use double underscores (example: DXWIZ_GENERAL__STATE_DIR).")
        } else {
            Some("Settings live under the API or GENERAL sections (example: DXWIZ_API__TIMEOUT_SECS).")
        };

        if let Some(hint) = hint {
            warnings.push(format!("{key} is not a recognized setting. {hint}"));
        }
    }

    warnings.sort();
    warnings
}

#[cfg(test)]
mod tests {
    use dx_config::{ApiConfig, DxConfig};

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &DxConfig::default(),
            env(&["DXWIZ_API_BASE_URL", "DXWIZ_GENERAL_STATE_DIR", "DXWIZ_BASEURL"]),
        );
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.contains("DXWIZ_API__BASE_URL")));
    }

    #[test]
    fn ignores_valid_and_unrelated_keys() {
        let warnings = collect_unconfigured_warnings(
            &DxConfig::default(),
            env(&["DXWIZ_API__BASE_URL", "DXWIZ_LOG", "HOME", "RUST_LOG"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_section_is_configured() {
        let config = DxConfig {
            api: ApiConfig {
                base_url: "http://10.0.0.2/api".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings = collect_unconfigured_warnings(&config, env(&["DXWIZ_API_TIMEOUT"]));
        assert!(warnings.is_empty());
    }
}
