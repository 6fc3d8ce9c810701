//! Clustering of shortcut entries by their leading label tokens.
//!
//! Labels in the shortcut section follow a `DEVICE-CHANNEL action…`
//! convention. The first two tokens (split on hyphens and whitespace)
//! identify the device the entry drives; the remaining tokens caption the
//! individual button. Entries sharing a derived key render together under
//! one sub-heading.

use hexdeck_core::ByteCommand;

use crate::model::Section;

/// A cluster of shortcut commands sharing a derived group key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutGroup {
    /// Key shared by every entry in the cluster.
    pub key: String,
    /// `(display label, command)` pairs in file order.
    pub entries: Vec<(String, ByteCommand)>,
}

/// Split a shortcut label into its group key and display caption.
///
/// Tokens are the non-empty runs left after splitting on hyphens and
/// whitespace:
/// - two or more tokens: key is `TOKEN0-TOKEN1`, caption is the rest
///   joined with single spaces (empty when nothing remains)
/// - exactly one: the token serves as both key and caption
/// - none (a label of bare separators): the label serves as both
pub fn derive_group_key(label: &str) -> (String, String) {
    let tokens: Vec<&str> = label
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => (label.to_string(), label.to_string()),
        [only] => ((*only).to_string(), (*only).to_string()),
        [first, second, rest @ ..] => (format!("{first}-{second}"), rest.join(" ")),
    }
}

/// Cluster a section's entries by derived group key.
///
/// Groups appear in order of first appearance of their keys; within a
/// group, entries keep file order.
pub fn group_shortcuts(section: &Section) -> Vec<ShortcutGroup> {
    let mut groups: Vec<ShortcutGroup> = Vec::new();

    for (label, command) in section.entries() {
        let (key, caption) = derive_group_key(label);
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.entries.push((caption, command.clone())),
            None => groups.push(ShortcutGroup {
                key,
                entries: vec![(caption, command.clone())],
            }),
        }
    }

    groups
}
