//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Values without `${` are returned unchanged, so a literal `$` in a path
/// is kept as written.
///
/// # Errors
///
/// Returns `ConfigError::EnvVar` naming `field` if a referenced variable is
/// unset and has no default.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(expand_env("site", "site_dir").unwrap(), "site");
    }

    #[test]
    fn test_bare_dollar_kept_literally() {
        let value = expand_env("out$TONGUES_TEST_SURELY_UNSET", "site_dir").unwrap();

        assert_eq!(value, "out$TONGUES_TEST_SURELY_UNSET");
    }

    #[test]
    fn test_default_used_when_unset() {
        let value = expand_env("${TONGUES_TEST_SURELY_UNSET:-public}/out", "site_dir").unwrap();

        assert_eq!(value, "public/out");
    }

    #[test]
    fn test_unset_without_default_names_field() {
        let err = expand_env("${TONGUES_TEST_SURELY_UNSET}", "landing.template").unwrap_err();

        let ConfigError::EnvVar { field, message } = err else {
            panic!("expected EnvVar error");
        };
        assert_eq!(field, "landing.template");
        assert_eq!(message, "${TONGUES_TEST_SURELY_UNSET} not set");
    }
}
