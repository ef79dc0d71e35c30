//! kwinrulesrc document model
//!
//! Minimal INI reader/writer for the window rules file: ordered sections of
//! ordered `key=value` entries. Layout details of the source file (comments,
//! spacing) are not preserved across a rewrite.

use anyhow::{bail, Result};

/// One `[name]` section with its entries in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entries(name: impl Into<String>, entries: Vec<(String, String)>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(String, String)> {
        self.entries
    }

    /// Numbered sections are rules; `General` and `$Version` are not
    pub fn is_numeric(&self) -> bool {
        !self.name.is_empty() && self.name.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a value, keeping the key's position if it already exists
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

/// Parsed kwinrulesrc contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesDocument {
    sections: Vec<Section>,
}

impl RulesDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text
    ///
    /// Follows strict INI conventions: entries outside a section, lines without
    /// a `=`/`:` delimiter, duplicate sections and duplicate keys are errors.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut doc = Self::new();

        for (index, raw_line) in contents.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
                if doc.contains_section(name) {
                    bail!("line {line_no}: duplicate section [{name}]");
                }
                doc.sections.push(Section::new(name));
                continue;
            }

            let Some((key, value)) = split_entry(line) else {
                bail!("line {line_no}: expected `key=value` or `[section]`, found {raw_line:?}");
            };
            if key.is_empty() {
                bail!("line {line_no}: entry has an empty key");
            }

            let Some(section) = doc.sections.last_mut() else {
                bail!("line {line_no}: entry {key:?} appears before any section header");
            };
            if section.contains_key(key) {
                bail!("line {line_no}: duplicate key {key:?} in section [{}]", section.name);
            }
            section.entries.push((key.to_string(), value.to_string()));
        }

        Ok(doc)
    }

    /// Serialize in KConfig style (`key=value`, blank line between sections)
    pub fn to_ini_string(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in &section.entries {
                out.push_str(key);
                out.push('=');
                out.push_str(value);
                out.push('\n');
            }
        }
        out
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Get a section, appending an empty one if it does not exist yet
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    /// Place sections at the top of the document, in the given order
    ///
    /// Any existing section with one of the same names is dropped first, so no
    /// stale keys survive.
    pub fn prepend_sections(&mut self, sections: Vec<Section>) {
        self.sections
            .retain(|existing| !sections.iter().any(|s| s.name == existing.name));
        self.sections.splice(0..0, sections);
    }

    /// Remove and return every section matching the predicate, in document order
    pub fn take_sections<F>(&mut self, mut predicate: F) -> Vec<Section>
    where
        F: FnMut(&Section) -> bool,
    {
        let (taken, kept): (Vec<Section>, Vec<Section>) = std::mem::take(&mut self.sections)
            .into_iter()
            .partition(|s| predicate(s));
        self.sections = kept;
        taken
    }

    pub fn numeric_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_numeric())
    }
}

/// Split on whichever of `=` / `:` comes first
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let pos = line.find(['=', ':'])?;
    Some((line[..pos].trim(), line[pos + 1..].trim()))
}
