use std::collections::BTreeMap;

use super::Config;

impl Config {
    /// Get effective configuration as key -> (value, source) pairs
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, (String, String)> {
        let mut config = BTreeMap::new();

        let mut add_config = |key: &str, value: String| {
            let source = self.source_of(key).as_str().to_string();
            config.insert(key.to_string(), (value, source));
        };

        add_config("redirect_target", self.redirect_target.to_string());
        add_config(
            "cutoff",
            self.eligibility_window
                .cutoff
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        );
        add_config(
            "founding_member_cap",
            self.eligibility_window.founding_member_cap.to_string(),
        );
        add_config("verbose", self.verbose.to_string());

        config
    }
}
