use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{known, SymbolLocation};

/// File suffixes marking code-generation inputs/outputs. A location carrying
/// one of these loses to any location without one.
pub const CODEGEN_SUFFIXES: &[&str] = &[".proto"];

/// Absolute, normalized location prefix identifying project-owned sources.
///
/// Compared against `SymbolLocation::file_uri` as a string prefix that must
/// end on a `/` boundary, so `file:///proj` owns `file:///proj/a.cc` but not
/// `file:///project2/a.cc`. An empty root owns nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ProjectRoot(String);

impl ProjectRoot {
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        Self(root.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix match that must end on a `/` (or the end of the URI), for any scheme.
    pub fn contains(&self, location: &SymbolLocation) -> bool {
        if self.0.is_empty() {
            return false;
        }
        match location.file_uri.strip_prefix(self.0.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

impl From<String> for ProjectRoot {
    fn from(root: String) -> Self {
        Self::new(root)
    }
}

impl From<ProjectRoot> for String {
    fn from(root: ProjectRoot) -> Self {
        root.0
    }
}

impl fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_generated(location: &SymbolLocation) -> bool {
    CODEGEN_SUFFIXES.iter().any(|suffix| location.has_suffix(suffix))
}

/// One step of the location preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceRule {
    /// A known location beats an absent one; an absent candidate never wins.
    /// A location with an empty URI is absent.
    Presence,
    /// Hand-written code beats generated code, regardless of project membership.
    GeneratedCode,
    /// Project-owned code beats code outside the project root.
    ProjectMembership,
}

/// Rules in evaluation order. The first decisive rule settles the comparison;
/// if none is decisive the current location is kept.
pub const PREFERENCE_RULES: [PreferenceRule; 3] =
    [PreferenceRule::Presence, PreferenceRule::GeneratedCode, PreferenceRule::ProjectMembership];

impl PreferenceRule {
    /// `Some(replace)` when this rule distinguishes the pair, `None` on a tie.
    pub fn decide(
        self,
        candidate: Option<&SymbolLocation>,
        current: Option<&SymbolLocation>,
        root: &ProjectRoot,
    ) -> Option<bool> {
        let (candidate, current) = (known(candidate), known(current));
        match self {
            PreferenceRule::Presence => match (candidate, current) {
                (None, _) => Some(false),
                (Some(_), None) => Some(true),
                (Some(_), Some(_)) => None,
            },
            PreferenceRule::GeneratedCode => {
                let (candidate, current) = candidate.zip(current)?;
                let (cand_generated, cur_generated) = (is_generated(candidate), is_generated(current));
                (cand_generated != cur_generated).then_some(!cand_generated)
            }
            PreferenceRule::ProjectMembership => {
                let (candidate, current) = candidate.zip(current)?;
                let (cand_owned, cur_owned) = (root.contains(candidate), root.contains(current));
                (cand_owned != cur_owned).then_some(cand_owned)
            }
        }
    }
}

/// The first rule that is decisive for the pair, with its verdict.
pub fn deciding_rule(
    candidate: Option<&SymbolLocation>,
    current: Option<&SymbolLocation>,
    root: &ProjectRoot,
) -> Option<(PreferenceRule, bool)> {
    PREFERENCE_RULES
        .iter()
        .find_map(|rule| rule.decide(candidate, current, root).map(|verdict| (*rule, verdict)))
}

/// Whether `candidate` should replace `current` as the authoritative location.
pub fn prefer(
    candidate: Option<&SymbolLocation>,
    current: Option<&SymbolLocation>,
    root: &ProjectRoot,
) -> bool {
    deciding_rule(candidate, current, root).is_some_and(|(_, verdict)| verdict)
}
