//! Core data model for cheat tables and their flattened export rows.
//!
//! - `CheatEntry`: one node of the decoded table tree.
//! - `ChildEntries`: the wrapper a nested `<CheatEntries>` element decodes to.
//! - `CheatTable`: the top-level entry list of a decoded table.
//! - `FlatEntry`: one output row after flattening.

use serde::{Deserialize, Serialize};

/// Placeholder written for absent variable types, addresses, and sums.
pub const NOT_AVAILABLE: &str = "N/A";

/// Variable type tag marking a script pseudo-entry that is never exported as a child.
pub const AUTO_ASSEMBLER_SCRIPT: &str = "Auto Assembler Script";

/// One record of the source table.
///
/// Optional fields mirror elements that may be missing from the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatEntry {
    pub id: String,
    /// Raw label; may be wrapped in literal quotes and contain `->` markers.
    pub description: String,
    pub variable_type: Option<String>,
    /// Signed hexadecimal expression such as `1A2B+10-4`.
    pub address: Option<String>,
    /// Pointer-chain hops, grouped by the `<Offsets>` element they came from.
    pub offsets: Option<Vec<Vec<String>>>,
    pub children: Option<ChildEntries>,
}

impl CheatEntry {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: id.into(), description: description.into(), ..Self::default() }
    }

    pub fn with_variable_type(mut self, variable_type: impl Into<String>) -> Self {
        self.variable_type = Some(variable_type.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Appends one offset group.
    pub fn with_offsets<I, S>(mut self, offsets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let group = offsets.into_iter().map(Into::into).collect();
        self.offsets.get_or_insert_with(Vec::new).push(group);
        self
    }

    pub fn with_children(mut self, children: Vec<CheatEntry>) -> Self {
        self.children = Some(ChildEntries { entries: Some(children) });
        self
    }

    /// Returns true for script pseudo-entries that flattening skips.
    pub fn is_auto_assembler_script(&self) -> bool {
        self.variable_type.as_deref() == Some(AUTO_ASSEMBLER_SCRIPT)
    }

    /// Number of records in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .and_then(|c| c.entries.as_ref())
            .map(|entries| entries.iter().map(CheatEntry::subtree_len).sum())
            .unwrap_or(0)
    }
}

/// Wrapper around a nested child list.
///
/// `entries` is `None` when the wrapper element exists but holds no entries,
/// which is a malformed tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildEntries {
    pub entries: Option<Vec<CheatEntry>>,
}

/// A decoded cheat table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatTable {
    pub entries: Vec<CheatEntry>,
}

impl CheatTable {
    pub fn new(entries: Vec<CheatEntry>) -> Self {
        Self { entries }
    }

    /// Total number of records in the tree.
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(CheatEntry::subtree_len).sum()
    }
}

/// One row of the flat export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEntry {
    pub id: String,
    pub description: String,
    pub variable_type: String,
    pub address: String,
    pub sum_address: String,
    pub offsets: String,
}
