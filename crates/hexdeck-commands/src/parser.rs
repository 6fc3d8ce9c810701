//! Line-oriented parser for command files.
//!
//! The format is plain text:
//! - `[NAME]` opens a section; the enclosed text is the section name.
//! - Blank lines are ignored anywhere.
//! - Every other line names one byte command and must follow a section
//!   header. Most sections use `LABEL = HEXBYTES`, where the value may carry
//!   pipe-separated display text before the hex string. The `BATCHSEND`
//!   section uses pipe-delimited lines whose last two segments are the label
//!   and the hex string.
//!
//! Errors carry 1-based line numbers. Parsing is all-or-nothing: a malformed
//! line fails the whole file and no partial set is returned.

use std::fmt;
use std::path::Path;

use hexdeck_core::error::{ConfigError, HexError};
use hexdeck_core::hex;
use tracing::debug;

use crate::model::{CommandSet, Section};
use crate::BATCHSEND_SECTION;

/// Line grammar used for command lines within a section.
///
/// Resolved once when the section header is read, from the section name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionGrammar {
    /// `LABEL = [display text |] HEXBYTES`
    #[default]
    KeyValue,
    /// `… | LABEL | HEXBYTES`
    PipeDelimited,
}

impl SectionGrammar {
    /// Grammar for a section with the given name.
    pub fn for_section(name: &str) -> Self {
        if name == BATCHSEND_SECTION {
            SectionGrammar::PipeDelimited
        } else {
            SectionGrammar::KeyValue
        }
    }
}

impl fmt::Display for SectionGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionGrammar::KeyValue => write!(f, "key-value"),
            SectionGrammar::PipeDelimited => write!(f, "pipe-delimited"),
        }
    }
}

/// Parse command-file text into an ordered [`CommandSet`].
pub fn parse(input: &str) -> Result<CommandSet, ConfigError> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<usize> = None;

    for (index, raw_line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = section_header(line) {
            if sections.iter().any(|section| section.name() == name) {
                return Err(ConfigError::DuplicateSection {
                    name: name.to_string(),
                    line: line_no,
                });
            }
            let grammar = SectionGrammar::for_section(name);
            debug!(section = name, %grammar, line = line_no, "opened section");
            sections.push(Section::new(name, grammar));
            current = Some(sections.len() - 1);
            continue;
        }

        let Some(section_index) = current else {
            return Err(ConfigError::CommandOutsideSection { line: line_no });
        };
        let section = &mut sections[section_index];

        let (label, hex_str) = match section.grammar() {
            SectionGrammar::KeyValue => key_value_line(line, line_no)?,
            SectionGrammar::PipeDelimited => pipe_line(line, line_no)?,
        };

        let command = hex::decode(hex_str).map_err(|err| match err {
            HexError::Empty => ConfigError::EmptyHex { line: line_no },
            HexError::InvalidToken { token } => ConfigError::InvalidHex {
                line: line_no,
                token,
            },
        })?;

        section.insert(label, command);
    }

    let set = CommandSet::from_sections(sections);
    debug!(
        sections = set.section_count(),
        commands = set.command_count(),
        "parsed command file"
    );
    Ok(set)
}

/// Read and parse a command file from disk.
pub fn load_from_path(path: &Path) -> Result<CommandSet, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|err| ConfigError::FileRead {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    parse(&text)
}

/// Section name if the trimmed line is a `[NAME]` header.
fn section_header(line: &str) -> Option<&str> {
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        Some(&line[1..line.len() - 1])
    } else {
        None
    }
}

/// Split a `LABEL = [display text |] HEXBYTES` line.
fn key_value_line(line: &str, line_no: usize) -> Result<(&str, &str), ConfigError> {
    let Some((left, right)) = line.split_once('=') else {
        return Err(ConfigError::MalformedLine {
            line: line_no,
            reason: "missing '=' separator".to_string(),
        });
    };

    let label = left.trim();
    if label.is_empty() {
        return Err(ConfigError::MalformedLine {
            line: line_no,
            reason: "empty label before '='".to_string(),
        });
    }

    // Display-text segments may precede the payload; the hex string is
    // always the last pipe segment of the value.
    let hex_str = right.rsplit('|').next().unwrap_or(right).trim();
    Ok((label, hex_str))
}

/// Split a `… | LABEL | HEXBYTES` line.
fn pipe_line(line: &str, line_no: usize) -> Result<(&str, &str), ConfigError> {
    let mut segments = line.rsplit('|');
    let hex_str = segments.next().unwrap_or(line).trim();
    let Some(label_segment) = segments.next() else {
        return Err(ConfigError::MalformedLine {
            line: line_no,
            reason: "expected at least two '|' segments".to_string(),
        });
    };

    let label = label_segment.trim();
    if label.is_empty() {
        return Err(ConfigError::MalformedLine {
            line: line_no,
            reason: "empty label segment".to_string(),
        });
    }

    Ok((label, hex_str))
}
