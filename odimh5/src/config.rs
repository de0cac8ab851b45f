/// Environment-derived configuration
///
/// Centralizes the library's one external knob the way `nexrad-data`'s `aws`
/// feature centralizes its S3-endpoint environment overrides.

const SKIP_CHECK_VERSION_VAR: &str = "RADARLIB_SKIP_CHECK_VERSION";

/// Whether the mandatory-version check on open should be skipped.
///
/// Only the literal value `yes` overrides the check; unset or any other
/// value enforces it.
pub fn skip_version_check() -> bool {
    std::env::var(SKIP_CHECK_VERSION_VAR)
        .map(|v| v == "yes")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that mutate process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn unset_does_not_skip() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(SKIP_CHECK_VERSION_VAR);
        assert!(!skip_version_check());
    }

    #[test]
    fn literal_yes_skips() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(SKIP_CHECK_VERSION_VAR, "yes");
        assert!(skip_version_check());
        std::env::remove_var(SKIP_CHECK_VERSION_VAR);
    }

    #[test]
    fn other_values_do_not_skip() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(SKIP_CHECK_VERSION_VAR, "Yes");
        assert!(!skip_version_check());
        std::env::set_var(SKIP_CHECK_VERSION_VAR, "");
        assert!(!skip_version_check());
        std::env::remove_var(SKIP_CHECK_VERSION_VAR);
    }
}
