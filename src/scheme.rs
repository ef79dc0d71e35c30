//! Color-scheme rendering
//!
//! A template is plain text with four placeholder tokens; every occurrence of
//! each token is substituted, no other syntax is recognized.

use anyhow::{Context, Result};
use std::collections::BTreeMap;

use crate::color::{Rgb, TextPalette};
use crate::constants::placeholders;
use crate::rules::{self, RuleSet, WindowRule};

/// Render one color scheme per rule, keyed by output filename
pub fn render_color_schemes(rule_set: &RuleSet, template: &str) -> Result<BTreeMap<String, String>> {
    let mut rendered = BTreeMap::new();
    for (name, rule) in rule_set.iter() {
        let contents = render_color_scheme(name, rule, template)
            .with_context(|| format!("Failed to render color scheme for rule '{name}'"))?;
        rendered.insert(rules::scheme_filename(name), contents);
    }
    Ok(rendered)
}

/// Substitute the placeholders for a single rule
pub fn render_color_scheme(name: &str, rule: &WindowRule, template: &str) -> Result<String> {
    let rgb = Rgb::parse(&rule.color)?;
    let palette = TextPalette::for_background(rule.dark);

    Ok(template
        .replace(placeholders::NAME, &rules::scheme_name(name))
        .replace(placeholders::COLOR, &rgb.to_string())
        .replace(placeholders::ACTIVE_TEXT_COLOR, palette.active)
        .replace(placeholders::INACTIVE_TEXT_COLOR, palette.inactive))
}
