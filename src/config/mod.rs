//! kwinrulesrc handling
//!
//! - **document**: INI model of the rules file (parse / serialize)
//! - **reconcile**: merge of the titlebar rule set into that document

pub mod document;
pub mod reconcile;

pub use document::{RulesDocument, Section};
pub use reconcile::{reconcile, ReconcileSummary};
