use serde::{Deserialize, Deserializer, Serialize};

/// Half-open byte range `[start, end)` within a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ByteRange {
    pub start: u32,
    pub end: u32,
}

/// Where a fact was observed: a source URI plus an optional byte range.
///
/// "No location known" is expressed by the owning field being `None`, never by
/// an empty URI.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolLocation {
    pub file_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ByteRange>,
}

impl SymbolLocation {
    pub fn new(file_uri: impl Into<String>) -> Self {
        Self { file_uri: file_uri.into(), range: None }
    }

    pub fn with_range(mut self, start: u32, end: u32) -> Self {
        self.range = Some(ByteRange { start, end });
        self
    }

    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.file_uri.ends_with(suffix)
    }

    /// A location without a URI carries no information and counts as absent.
    pub fn is_empty(&self) -> bool {
        self.file_uri.is_empty()
    }
}

/// `None` for a missing or empty location.
pub fn known(location: Option<&SymbolLocation>) -> Option<&SymbolLocation> {
    location.filter(|l| !l.is_empty())
}

/// Deserialize an optional location, reading `{"file_uri": ""}` as `None`.
pub(crate) fn deserialize_known<'de, D>(deserializer: D) -> Result<Option<SymbolLocation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SymbolLocation>::deserialize(deserializer)?.filter(|l| !l.is_empty()))
}
