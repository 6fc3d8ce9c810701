//! # Hexdeck Commands
//!
//! Command-file handling for Hexdeck:
//! - Parsing command files into ordered sections of named byte commands
//! - Grouping shortcut entries into clusters by their leading label tokens
//! - Building the presentation model the console renders and sends from
//!
//! A command file is plain text. `[NAME]` lines open sections, and every
//! other non-blank line names one byte command. Most sections use a
//! `LABEL = HEXBYTES` grammar; the `BATCHSEND` section uses pipe-delimited
//! lines instead. See [`parser::parse`] for the full grammar.

pub mod model;
pub mod parser;
pub mod shortcuts;

pub use model::{
    CommandEntry, CommandGroup, CommandModel, CommandSet, FlatSection, GroupedSection, Section,
    SectionView,
};
pub use parser::{load_from_path, parse, SectionGrammar};
pub use shortcuts::{derive_group_key, group_shortcuts, ShortcutGroup};

/// Name of the section whose entries are clustered into shortcut groups.
pub const SHORTCUT_SECTION: &str = "SHORTCUT";

/// Name of the section parsed with the pipe-delimited line grammar.
pub const BATCHSEND_SECTION: &str = "BATCHSEND";
