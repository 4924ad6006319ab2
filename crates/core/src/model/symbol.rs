use serde::{Deserialize, Serialize};

use super::location::{deserialize_known, known};
use super::{SymbolId, SymbolLocation};

/// Kind of declaration a symbol stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    #[default]
    Unknown,
    Module,
    Namespace,
    Macro,
    Enum,
    Struct,
    Class,
    Union,
    TypeAlias,
    Function,
    Variable,
    Field,
    EnumConstant,
    InstanceMethod,
    ClassMethod,
    StaticMethod,
    Constructor,
    Destructor,
    Parameter,
    Using,
    Concept,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Unknown => "unknown",
            SymbolKind::Module => "module",
            SymbolKind::Namespace => "namespace",
            SymbolKind::Macro => "macro",
            SymbolKind::Enum => "enum",
            SymbolKind::Struct => "struct",
            SymbolKind::Class => "class",
            SymbolKind::Union => "union",
            SymbolKind::TypeAlias => "type_alias",
            SymbolKind::Function => "function",
            SymbolKind::Variable => "variable",
            SymbolKind::Field => "field",
            SymbolKind::EnumConstant => "enum_constant",
            SymbolKind::InstanceMethod => "instance_method",
            SymbolKind::ClassMethod => "class_method",
            SymbolKind::StaticMethod => "static_method",
            SymbolKind::Constructor => "constructor",
            SymbolKind::Destructor => "destructor",
            SymbolKind::Parameter => "parameter",
            SymbolKind::Using => "using",
            SymbolKind::Concept => "concept",
        }
    }

    /// Class, struct, or union: kinds whose definition is the declaration body itself.
    pub fn is_record(&self) -> bool {
        matches!(self, SymbolKind::Class | SymbolKind::Struct | SymbolKind::Union)
    }
}

bitflags::bitflags! {
    /// Which analysis passes contributed to a symbol's current data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct SymbolOrigin: u8 {
        const AST = 1 << 0;
        const DYNAMIC = 1 << 1;
        const STATIC = 1 << 2;
        const BACKGROUND = 1 << 3;
        /// Produced by combining two partial records.
        const MERGE = 1 << 4;
    }
}

bitflags::bitflags! {
    /// Per-symbol attributes reported by the analyzer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct SymbolFlags: u8 {
        const INDEXED_FOR_CODE_COMPLETION = 1 << 0;
        const DEPRECATED = 1 << 1;
        const IMPLEMENTATION_DETAIL = 1 << 2;
        const VISIBLE_OUTSIDE_FILE = 1 << 3;
        const IMPLICIT = 1 << 4;
    }
}

/// A header through which a symbol was reached, with the number of uses seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncludeHeader {
    pub header: String,
    pub references: u32,
}

impl IncludeHeader {
    pub fn new(header: impl Into<String>, references: u32) -> Self {
        Self { header: header.into(), references }
    }
}

/// One (possibly partial) record of a logical declaration.
///
/// Each translation unit reports its own view; records sharing an `id` are
/// combined by [`crate::merge::merge_symbol`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbol {
    pub id: SymbolId,
    pub kind: SymbolKind,
    pub name: String,
    /// Enclosing scope, e.g. `ns::Outer::`.
    pub scope: String,
    #[serde(deserialize_with = "deserialize_known", skip_serializing_if = "Option::is_none")]
    pub canonical_declaration: Option<SymbolLocation>,
    #[serde(deserialize_with = "deserialize_known", skip_serializing_if = "Option::is_none")]
    pub definition: Option<SymbolLocation>,
    /// Number of references seen across all contributing units.
    pub references: u32,
    pub signature: String,
    pub completion_snippet_suffix: String,
    pub documentation: String,
    pub return_type: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_headers: Vec<IncludeHeader>,
    pub origin: SymbolOrigin,
    pub flags: SymbolFlags,
}

impl Symbol {
    pub fn new(id: SymbolId, kind: SymbolKind, name: impl Into<String>) -> Self {
        Self { id, kind, name: name.into(), ..Self::default() }
    }

    pub fn has_definition(&self) -> bool {
        known(self.definition.as_ref()).is_some()
    }

    /// Fully-qualified name (`scope` + `name`).
    pub fn qualified_name(&self) -> String {
        format!("{}{}", self.scope, self.name)
    }
}
