//! Application-wide constants
//!
//! This module contains all string literals that make up the on-disk contracts
//! with the window manager and with template authors.

/// Template placeholder tokens (literal text, replaced everywhere they occur)
pub mod placeholders {
    /// Replaced with the derived scheme name (`titlebar-<name>`)
    pub const NAME: &str = "{:name}";

    /// Replaced with the comma-joined decimal RGB triple
    pub const COLOR: &str = "{:color}";

    /// Replaced with the active titlebar text color
    pub const ACTIVE_TEXT_COLOR: &str = "{:active_text_color}";

    /// Replaced with the inactive titlebar text color
    pub const INACTIVE_TEXT_COLOR: &str = "{:inactive_text_color}";
}

/// Titlebar text colors (comma-joined decimal RGB)
pub mod text_colors {
    pub const DARK_ACTIVE: &str = "222,222,222";
    pub const DARK_INACTIVE: &str = "120,120,120";
    pub const LIGHT_ACTIVE: &str = "40,40,40";
    pub const LIGHT_INACTIVE: &str = "100,100,100";
}

/// Naming convention shared by rule sections and color-scheme files
pub mod naming {
    /// Prefix marking a rule section (and scheme) as generated by this tool
    pub const MANAGED_PREFIX: &str = "titlebar-";

    /// Extension of generated color-scheme files
    pub const SCHEME_EXTENSION: &str = "colors";
}

/// kwinrulesrc keys and values
pub mod kwinrules {
    /// Section holding the rule count
    pub const GENERAL_SECTION: &str = "General";

    /// Key under [General] holding the number of rule sections
    pub const COUNT_KEY: &str = "count";

    /// Section recording applied kconf_update scripts
    pub const VERSION_SECTION: &str = "$Version";

    pub const UPDATE_INFO_KEY: &str = "update_info";
    pub const UPDATE_INFO_VALUE: &str = "kwinrules.upd:replace-placement-string-to-enum";

    pub const DESCRIPTION_KEY: &str = "Description";
    pub const DECOCOLOR_KEY: &str = "decocolor";
    pub const DECOCOLOR_RULE_KEY: &str = "decocolorrule";
    pub const WMCLASS_KEY: &str = "wmclass";
    pub const WMCLASS_MATCH_KEY: &str = "wmclassmatch";

    /// Rule policy "Force"
    pub const DECOCOLOR_RULE_FORCE: &str = "2";

    /// Window class match type "Exact Match"
    pub const WMCLASS_MATCH_EXACT: &str = "1";
}

/// Logging
pub mod logging {
    /// Environment variable selecting the log level
    pub const LEVEL_ENV: &str = "LOG_LEVEL";
}
