//! Titlebar rule table
//!
//! Each rule maps a short application name to a titlebar color and the window
//! class it applies to. The name is the identity of the rule: it ends up in the
//! kwinrulesrc `Description` and in the generated color-scheme filename.

use crate::constants::naming;

/// Desired titlebar decoration for one application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRule {
    /// 6-digit hex RGB, with or without a leading '#'
    pub color: String,
    /// Selects the light-on-dark text palette
    pub dark: bool,
    /// Matched exactly against the window's WM_CLASS
    pub window_class: String,
}

impl WindowRule {
    pub fn new(color: impl Into<String>, dark: bool, window_class: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            dark,
            window_class: window_class.into(),
        }
    }
}

/// Insertion-ordered mapping from rule name to rule
///
/// Order decides the section numbers rules get in kwinrulesrc, so it is kept
/// exactly as declared.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<(String, WindowRule)>,
}

// (name, color, dark, window_class)
const BUILTIN_RULES: &[(&str, &str, bool, &str)] = &[
    ("vscode", "#21252b", true, "code"),
    ("gimp", "#454545", true, "gimp"),
    ("chrome", "#242424", true, "google-chrome"),
    ("spotify", "#000000", true, "spotify"),
    ("settings", "#242424", true, "systemsettings"),
    ("dolphin", "#2c2f2f", true, "dolphin"),
    ("inkscape", "#242424", true, "inkscape"),
    ("discord", "#36393f", true, "discord"),
    ("konsole", "#1F2229", true, "konsole"),
];

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed set of titlebar rules this tool manages
    pub fn builtin() -> Self {
        BUILTIN_RULES
            .iter()
            .map(|&(name, color, dark, window_class)| {
                (name, WindowRule::new(color, dark, window_class))
            })
            .collect()
    }

    /// Add a rule, replacing (in place) any rule with the same name
    pub fn insert(&mut self, name: impl Into<String>, rule: WindowRule) {
        let name = name.into();
        match self.rules.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = rule,
            None => self.rules.push((name, rule)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|(existing, _)| existing == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WindowRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, WindowRule)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (N, WindowRule)>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for (name, rule) in iter {
            set.insert(name, rule);
        }
        set
    }
}

/// Scheme name for a rule: also used as the kwinrulesrc Description and decocolor
pub fn scheme_name(rule_name: &str) -> String {
    format!("{}{}", naming::MANAGED_PREFIX, rule_name)
}

/// Recover the rule name from a managed Description, if it is one
pub fn managed_rule_name(description: &str) -> Option<&str> {
    description.strip_prefix(naming::MANAGED_PREFIX)
}

/// Filename of the generated color scheme for a rule
pub fn scheme_filename(rule_name: &str) -> String {
    format!("{}.{}", scheme_name(rule_name), naming::SCHEME_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keeps_declared_order() {
        let rules = RuleSet::builtin();
        let names: Vec<&str> = rules.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["vscode", "gimp", "chrome", "spotify", "settings", "dolphin", "inkscape", "discord", "konsole"]
        );
        let (_, chrome) = rules.iter().find(|(name, _)| *name == "chrome").unwrap();
        assert_eq!(chrome.window_class, "google-chrome");
    }

    #[test]
    fn test_insert_existing_name_replaces_in_place() {
        let mut rules = RuleSet::new();
        rules.insert("a", WindowRule::new("#000000", true, "a"));
        rules.insert("b", WindowRule::new("#111111", false, "b"));
        rules.insert("a", WindowRule::new("#222222", false, "a2"));

        assert_eq!(rules.len(), 2);
        let (first_name, first_rule) = rules.iter().next().unwrap();
        assert_eq!(first_name, "a");
        assert_eq!(first_rule.window_class, "a2");
    }

    #[test]
    fn test_contains() {
        let rules = RuleSet::builtin();
        assert!(rules.contains("konsole"));
        assert!(!rules.contains("obsolete"));
        assert!(!RuleSet::new().contains("konsole"));
    }

    #[test]
    fn test_naming_convention() {
        assert_eq!(scheme_name("gimp"), "titlebar-gimp");
        assert_eq!(scheme_filename("gimp"), "titlebar-gimp.colors");
        assert_eq!(managed_rule_name("titlebar-gimp"), Some("gimp"));
        assert_eq!(managed_rule_name("titlebar-"), Some(""));
        assert_eq!(managed_rule_name("Firefox PiP"), None);
    }
}
