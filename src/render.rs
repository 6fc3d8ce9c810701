//! Console rendering of the command deck.
//!
//! Pure formatting: a `CommandModel` (or a port listing) in, a `String`
//! out. No I/O happens here, which keeps the output testable.

use hexdeck_commands::{CommandEntry, CommandModel, SectionView};
use hexdeck_communication::SerialPortInfo;

/// Render the full deck as titled panels of numbered buttons.
pub fn render_model(model: &CommandModel) -> String {
    if model.is_empty() {
        return "(no commands loaded)\n".to_string();
    }

    let mut out = String::new();
    for (index, view) in model.sections().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        match view {
            SectionView::Flat(flat) => {
                out.push_str(&format!("[{}]\n", flat.title));
                for entry in &flat.entries {
                    push_entry(&mut out, entry);
                }
            }
            SectionView::Grouped(grouped) => {
                out.push_str(&format!("[{}]\n", grouped.title));
                for group in &grouped.groups {
                    out.push_str(&format!("  {}\n", group.key));
                    for entry in &group.entries {
                        push_entry(&mut out, entry);
                    }
                }
            }
        }
    }
    out
}

fn push_entry(out: &mut String, entry: &CommandEntry) {
    out.push_str(&format!(
        "{:>4}. {:<24} {}\n",
        entry.id, entry.label, entry.command
    ));
}

/// Render the candidate serial port table.
pub fn render_ports(ports: &[SerialPortInfo]) -> String {
    if ports.is_empty() {
        return "(no candidate serial ports found)\n".to_string();
    }

    let mut out = String::from("Available serial ports:\n");
    for port in ports {
        out.push_str(&format!("  {:<16} {}", port.port_name, port.description));
        if let (Some(vid), Some(pid)) = (port.vid, port.pid) {
            out.push_str(&format!(" [{:04x}:{:04x}]", vid, pid));
        }
        out.push('\n');
    }
    out
}
