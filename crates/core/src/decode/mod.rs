//! Decoding of Cheat Engine table markup into the `CheatTable` tree.
//!
//! Expected shape:
//!
//! ```text
//! <CheatTable>
//!   <CheatEntries>
//!     <CheatEntry>
//!       <ID>1</ID>
//!       <Description>"Player"</Description>
//!       <VariableType>4 Bytes</VariableType>
//!       <Address>1A2B+10</Address>
//!       <Offsets><Offset>10</Offset></Offsets>
//!       <CheatEntries>
//!         <CheatEntry>...</CheatEntry>
//!       </CheatEntries>
//!     </CheatEntry>
//!   </CheatEntries>
//! </CheatTable>
//! ```

use roxmltree::{Document, Node};
use thiserror::Error;

use crate::model::{CheatEntry, CheatTable, ChildEntries};

/// Error type for markup decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not well-formed XML.
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Expected root element <CheatTable>, found <{0}>")]
    UnexpectedRoot(String),

    #[error("<CheatTable> has no <CheatEntries> element")]
    MissingEntries,

    /// A `<CheatEntry>` lacks its `<ID>`; `index` is its position among siblings.
    #[error("CheatEntry #{index} has no <ID>")]
    MissingId { index: usize },
}

/// Decode table markup into a `CheatTable`.
pub fn decode_cheat_table(xml: &str) -> Result<CheatTable, DecodeError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    if root.tag_name().name() != "CheatTable" {
        return Err(DecodeError::UnexpectedRoot(root.tag_name().name().to_string()));
    }

    let wrapper = child_element(root, "CheatEntries").ok_or(DecodeError::MissingEntries)?;
    let entries = decode_entry_list(wrapper)?;
    Ok(CheatTable::new(entries))
}

fn decode_entry_list(wrapper: Node<'_, '_>) -> Result<Vec<CheatEntry>, DecodeError> {
    child_elements(wrapper, "CheatEntry")
        .enumerate()
        .map(|(index, node)| decode_entry(node, index))
        .collect()
}

fn decode_entry(node: Node<'_, '_>, index: usize) -> Result<CheatEntry, DecodeError> {
    let id = child_text(node, "ID").ok_or(DecodeError::MissingId { index })?;

    let offset_groups: Vec<Vec<String>> = child_elements(node, "Offsets")
        .map(|group| {
            child_elements(group, "Offset")
                .map(element_text)
                .collect()
        })
        .collect();

    let children = match child_element(node, "CheatEntries") {
        Some(wrapper) => {
            let nested = decode_entry_list(wrapper)?;
            let entries = if nested.is_empty() { None } else { Some(nested) };
            Some(ChildEntries { entries })
        }
        None => None,
    };

    Ok(CheatEntry {
        id,
        description: child_text(node, "Description").unwrap_or_default(),
        variable_type: child_text(node, "VariableType"),
        address: child_text(node, "Address"),
        offsets: if offset_groups.is_empty() { None } else { Some(offset_groups) },
        children,
    })
}

fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |c| c.is_element() && c.tag_name().name() == name)
}

fn child_element<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> Option<Node<'a, 'input>> {
    child_elements(node, name).next()
}

/// Text of the first `name` child; empty or missing elements yield `None`.
fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    let text = element_text(child_element(node, name)?);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// All text under `node`, concatenated in document order and trimmed.
///
/// Comments and processing instructions split an element's text into several
/// nodes; none of the pieces may be dropped.
fn element_text(node: Node<'_, '_>) -> String {
    let text: String =
        node.descendants().filter(|n| n.is_text()).filter_map(|n| n.text()).collect();
    text.trim().to_string()
}
