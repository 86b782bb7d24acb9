use super::Config;

impl Config {
    /// Apply `DIGIKTAV_*` environment variables on top of the file config.
    ///
    /// Empty or unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DIGIKTAV_API_URL")
            && !url.trim().is_empty()
        {
            self.backend.api_url = url.trim().to_string();
        }

        if let Ok(secs) = std::env::var("DIGIKTAV_TIMEOUT_SECS")
            && let Ok(secs) = secs.trim().parse::<u64>()
            && secs > 0
        {
            self.backend.timeout_secs = secs;
        }

        if let Ok(level) = std::env::var("DIGIKTAV_LOG_LEVEL")
            && !level.trim().is_empty()
        {
            self.log_level = level.trim().to_string();
        }
    }
}
