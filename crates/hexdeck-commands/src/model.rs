//! Parsed command sets and the presentation model built from them.
//!
//! [`CommandSet`] is the raw parse result: sections in file order, each
//! holding labelled byte commands in first-seen order. [`CommandModel`] is
//! the renderable view derived from a set: flat sections keep their entries
//! as-is, the shortcut section is clustered into [`CommandGroup`]s, and
//! every entry receives a stable 1-based id the console uses to fire it.

use hexdeck_core::ByteCommand;
use serde::Serialize;

use crate::parser::SectionGrammar;
use crate::shortcuts::group_shortcuts;
use crate::SHORTCUT_SECTION;

/// One named section of a command file.
///
/// Entries keep the order in which their labels first appeared. Re-assigning
/// an existing label replaces the stored bytes without moving the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    grammar: SectionGrammar,
    entries: Vec<(String, ByteCommand)>,
}

impl Section {
    /// Create an empty section.
    pub fn new(name: impl Into<String>, grammar: SectionGrammar) -> Self {
        Self {
            name: name.into(),
            grammar,
            entries: Vec::new(),
        }
    }

    /// Section name as written between the brackets of its header line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line grammar commands in this section are parsed with.
    pub fn grammar(&self) -> SectionGrammar {
        self.grammar
    }

    /// Insert a labelled command.
    ///
    /// A repeated label keeps its original position but takes the new bytes.
    pub fn insert(&mut self, label: impl Into<String>, command: ByteCommand) {
        let label = label.into();
        match self.entries.iter_mut().find(|(name, _)| *name == label) {
            Some((_, existing)) => *existing = command,
            None => self.entries.push((label, command)),
        }
    }

    /// Labelled commands in first-seen order.
    pub fn entries(&self) -> &[(String, ByteCommand)] {
        &self.entries
    }

    /// Bytes stored under `label`, if present.
    pub fn get(&self, label: &str) -> Option<&ByteCommand> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, command)| command)
    }

    /// Number of commands in the section.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the section holds no commands.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An ordered collection of sections parsed from one command file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSet {
    sections: Vec<Section>,
}

impl CommandSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from already-assembled sections.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Sections in file order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section with the given name, if present.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of commands across all sections.
    pub fn command_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// True when the set holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// One fireable command in the presentation model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    /// 1-based id, unique across the whole model, assigned in render order.
    pub id: usize,
    /// Label shown on the button.
    pub label: String,
    /// Bytes written to the device when the entry fires.
    pub command: ByteCommand,
}

/// A section rendered as a plain run of buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatSection {
    /// Section name used as the panel title.
    pub title: String,
    /// Entries in file order.
    pub entries: Vec<CommandEntry>,
}

/// A cluster of shortcut entries sharing a derived group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandGroup {
    /// Key derived from the first two label tokens, shown as a sub-heading.
    pub key: String,
    /// Entries in the order their labels appeared in the file.
    pub entries: Vec<CommandEntry>,
}

/// The shortcut section rendered as keyed clusters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedSection {
    /// Section name used as the panel title.
    pub title: String,
    /// Clusters in order of first appearance of their keys.
    pub groups: Vec<CommandGroup>,
}

/// How one section is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum SectionView {
    /// A plain run of buttons.
    Flat(FlatSection),
    /// Shortcut clusters with sub-headings.
    Grouped(GroupedSection),
}

impl SectionView {
    /// Panel title of the underlying section.
    pub fn title(&self) -> &str {
        match self {
            SectionView::Flat(flat) => &flat.title,
            SectionView::Grouped(grouped) => &grouped.title,
        }
    }
}

/// The full renderable model for one loaded command file.
///
/// Ids number every entry from 1 in the order a reader scans the rendered
/// panels: section by section, group by group. Loading a new file builds a
/// fresh model, so ids are only meaningful against the model that issued
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandModel {
    sections: Vec<SectionView>,
}

impl CommandModel {
    /// Derive the presentation model from a parsed set.
    ///
    /// The section named [`SHORTCUT_SECTION`](crate::SHORTCUT_SECTION) is
    /// clustered via [`group_shortcuts`]; every other section renders flat.
    pub fn build(set: &CommandSet) -> Self {
        let mut next_id = 1usize;
        let mut sections = Vec::with_capacity(set.section_count());

        for section in set.sections() {
            if section.name() == SHORTCUT_SECTION {
                let mut groups = Vec::new();
                for group in group_shortcuts(section) {
                    let mut entries = Vec::with_capacity(group.entries.len());
                    for (label, command) in group.entries {
                        entries.push(CommandEntry {
                            id: next_id,
                            label,
                            command,
                        });
                        next_id += 1;
                    }
                    groups.push(CommandGroup {
                        key: group.key,
                        entries,
                    });
                }
                sections.push(SectionView::Grouped(GroupedSection {
                    title: section.name().to_string(),
                    groups,
                }));
            } else {
                let mut entries = Vec::with_capacity(section.len());
                for (label, command) in section.entries() {
                    entries.push(CommandEntry {
                        id: next_id,
                        label: label.clone(),
                        command: command.clone(),
                    });
                    next_id += 1;
                }
                sections.push(SectionView::Flat(FlatSection {
                    title: section.name().to_string(),
                    entries,
                }));
            }
        }

        Self { sections }
    }

    /// Section views in render order.
    pub fn sections(&self) -> &[SectionView] {
        &self.sections
    }

    /// All entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.sections.iter().flat_map(|view| match view {
            SectionView::Flat(flat) => {
                Box::new(flat.entries.iter()) as Box<dyn Iterator<Item = &CommandEntry> + '_>
            }
            SectionView::Grouped(grouped) => {
                Box::new(grouped.groups.iter().flat_map(|group| group.entries.iter()))
            }
        })
    }

    /// Entry with the given button id.
    pub fn lookup(&self, id: usize) -> Option<&CommandEntry> {
        self.entries().find(|entry| entry.id == id)
    }

    /// First entry whose label matches, ignoring ASCII case.
    pub fn lookup_label(&self, label: &str) -> Option<&CommandEntry> {
        self.entries()
            .find(|entry| entry.label.eq_ignore_ascii_case(label))
    }

    /// Number of section views.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of fireable entries.
    pub fn command_count(&self) -> usize {
        self.entries().count()
    }

    /// True when the model renders nothing.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
