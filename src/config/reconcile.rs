//! Merge the desired titlebar rules into an existing kwinrulesrc document
//!
//! Rule sections written by this tool carry `Description=titlebar-<name>`.
//! Those whose name is still in the rule set are regenerated; every other
//! numbered section (user rules, rules for names that were removed) is kept
//! verbatim and renumbered after the generated ones.

use tracing::debug;

use crate::config::{RulesDocument, Section};
use crate::constants::kwinrules;
use crate::rules::{self, RuleSet, WindowRule};

/// What a reconcile pass did to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Rule sections generated from the rule set
    pub rules_written: usize,
    /// Previously generated sections that were regenerated
    pub rules_replaced: usize,
    /// Numbered sections carried over under a new number
    pub sections_preserved: usize,
}

impl ReconcileSummary {
    /// Value written to `[General] count`
    pub fn total(&self) -> usize {
        self.rules_written + self.sections_preserved
    }
}

/// Rewrite the numbered rule sections of `doc` so they match `rules`
///
/// Afterwards sections `1..=count` exist with no gaps: first one per rule in
/// rule-set order, then every unmatched section in its original file order.
pub fn reconcile(doc: &mut RulesDocument, rules: &RuleSet) -> ReconcileSummary {
    let (matched, unmatched): (Vec<Section>, Vec<Section>) = doc
        .take_sections(Section::is_numeric)
        .into_iter()
        .partition(|section| is_current_rule(section, rules));

    for section in &matched {
        debug!(section = section.name(), "Regenerating managed rule section");
    }

    let sections_preserved = unmatched.len();
    let mut numbered = Vec::with_capacity(rules.len() + sections_preserved);

    for (name, rule) in rules.iter() {
        numbered.push(rule_section(numbered.len() + 1, name, rule));
    }

    for section in unmatched {
        let number = numbered.len() + 1;
        debug!(from = section.name(), to = number, "Preserving unmanaged rule section");
        numbered.push(Section::with_entries(number.to_string(), section.into_entries()));
    }

    let total = numbered.len();
    doc.prepend_sections(numbered);

    doc.ensure_section(kwinrules::GENERAL_SECTION)
        .set(kwinrules::COUNT_KEY, total.to_string());

    doc.ensure_section(kwinrules::VERSION_SECTION)
        .set(kwinrules::UPDATE_INFO_KEY, kwinrules::UPDATE_INFO_VALUE);

    ReconcileSummary {
        rules_written: rules.len(),
        rules_replaced: matched.len(),
        sections_preserved,
    }
}

/// A managed section whose rule name is still in the rule set
fn is_current_rule(section: &Section, rule_set: &RuleSet) -> bool {
    section
        .get(kwinrules::DESCRIPTION_KEY)
        .and_then(rules::managed_rule_name)
        .is_some_and(|name| rule_set.contains(name))
}

fn rule_section(number: usize, name: &str, rule: &WindowRule) -> Section {
    let scheme = rules::scheme_name(name);
    let mut section = Section::new(number.to_string());
    section.set(kwinrules::DESCRIPTION_KEY, scheme.as_str());
    section.set(kwinrules::DECOCOLOR_KEY, scheme);
    section.set(kwinrules::DECOCOLOR_RULE_KEY, kwinrules::DECOCOLOR_RULE_FORCE);
    section.set(kwinrules::WMCLASS_KEY, rule.window_class.as_str());
    section.set(kwinrules::WMCLASS_MATCH_KEY, kwinrules::WMCLASS_MATCH_EXACT);
    section
}
