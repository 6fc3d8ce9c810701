//! Interactive console for driving the command deck.
//!
//! Reads one line at a time from stdin. A bare number fires the
//! matching button; named commands manage the deck, the serial
//! connection, and the settings file. Session events that were not
//! already reported inline are appended to the response as `* ` lines.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tokio::sync::broadcast;
use tracing::warn;

use hexdeck_commands::{load_from_path, CommandEntry, CommandModel};
use hexdeck_communication::{list_ports, ConnectionParams, DeviceSession};
use hexdeck_core::SessionEvent;
use hexdeck_settings::SettingsManager;

use crate::render::{render_model, render_ports};

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Wrap `text` in an ANSI style when color output is enabled.
fn paint(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Outcome of one console line.
#[derive(Debug)]
pub struct Response {
    /// Text to print, possibly empty.
    pub output: String,
    /// Whether the console loop should stop.
    pub quit: bool,
}

impl Response {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }

    fn exit(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: true,
        }
    }
}

/// Line-oriented front end over a device session and a command model.
pub struct Console {
    model: CommandModel,
    model_source: Option<PathBuf>,
    session: DeviceSession,
    settings: SettingsManager,
    events: broadcast::Receiver<SessionEvent>,
}

impl Console {
    /// Create a console around an existing session, subscribing to its
    /// event stream. The deck starts empty until a file is loaded.
    pub fn new(session: DeviceSession, settings: SettingsManager) -> Self {
        let events = session.events().subscribe();
        Self {
            model: CommandModel::default(),
            model_source: None,
            session,
            settings,
            events,
        }
    }

    /// The currently loaded command model.
    pub fn model(&self) -> &CommandModel {
        &self.model
    }

    /// Load a command file and replace the deck with its contents.
    ///
    /// On a parse failure the current deck is kept untouched and the
    /// error is reported instead.
    pub fn load_file(&mut self, path: &Path) -> String {
        match load_from_path(path) {
            Ok(set) => {
                let model = CommandModel::build(&set);
                let source = path.display().to_string();
                let _ = self.session.events().publish(SessionEvent::ModelLoaded {
                    source: source.clone(),
                    sections: model.section_count(),
                    commands: model.command_count(),
                });
                self.model = model;
                self.model_source = Some(path.to_path_buf());
                self.settings.settings_mut().add_recent_file(path.to_path_buf());
                if let Err(err) = self.settings.save() {
                    warn!(error = %err, "failed to persist recent file list");
                }
                let mut out = format!(
                    "Loaded {} ({} sections, {} commands)\n",
                    source,
                    self.model.section_count(),
                    self.model.command_count()
                );
                out.push_str(&render_model(&self.model));
                out
            }
            Err(err) => self.paint_error(&format!("Load failed, keeping the current deck: {err}")),
        }
    }

    /// Interpret a single input line and produce the response to print.
    pub fn handle_line(&mut self, line: &str) -> Response {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Response::text(String::new());
        }

        let mut response = if let Ok(id) = trimmed.parse::<usize>() {
            Response::text(self.dispatch_by_id(id))
        } else {
            let mut parts = trimmed.split_whitespace();
            let head = parts.next().unwrap_or(trimmed).to_ascii_lowercase();
            let args: Vec<&str> = parts.collect();
            match head.as_str() {
                "send" => Response::text(self.cmd_send(&args)),
                "show" => Response::text(self.cmd_show()),
                "load" => Response::text(self.cmd_load(&args)),
                "ports" => Response::text(self.cmd_ports()),
                "connect" => Response::text(self.cmd_connect(&args)),
                "disconnect" => Response::text(self.cmd_disconnect()),
                "dump" => Response::text(self.cmd_dump()),
                "help" => Response::text(help_text()),
                "quit" | "exit" => Response::exit("Bye."),
                other => Response::text(format!(
                    "Unknown command '{other}'. Type 'help' for the command list."
                )),
            }
        };

        let events = self.drain_events();
        if !events.is_empty() {
            if !response.output.is_empty() && !response.output.ends_with('\n') {
                response.output.push('\n');
            }
            response.output.push_str(&events);
        }
        response
    }

    /// Run the read-eval-print loop until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let prompt = paint("hexdeck> ", BOLD, self.settings.settings().console.color);

        loop {
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                writeln!(stdout)?;
                break;
            }

            let response = self.handle_line(&line);
            let output = response.output.trim_end();
            if !output.is_empty() {
                writeln!(stdout, "{output}")?;
            }
            if response.quit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch_by_id(&mut self, id: usize) -> String {
        let Some(entry) = self.model.lookup(id).cloned() else {
            if self.model.is_empty() {
                return "No commands loaded. Use 'load <path>' first.".to_string();
            }
            return format!("No button {id}. Type 'show' to list the deck.");
        };
        self.dispatch(&entry)
    }

    fn dispatch(&mut self, entry: &CommandEntry) -> String {
        match self.session.send_command(&entry.label, &entry.command) {
            Ok(_) => {
                if self.settings.settings().console.echo_bytes {
                    format!("Command sent: {} ({})", entry.command, entry.label)
                } else {
                    format!("Command sent: {}", entry.label)
                }
            }
            Err(err) => self.paint_error(&format!("Failed to send '{}': {err}", entry.label)),
        }
    }

    fn cmd_send(&mut self, args: &[&str]) -> String {
        if args.is_empty() {
            return "Usage: send <number|label>".to_string();
        }
        if args.len() == 1 {
            if let Ok(id) = args[0].parse::<usize>() {
                return self.dispatch_by_id(id);
            }
        }
        let label = args.join(" ");
        let Some(entry) = self.model.lookup_label(&label).cloned() else {
            return format!("No command labelled '{label}'. Type 'show' to list the deck.");
        };
        self.dispatch(&entry)
    }

    fn cmd_show(&self) -> String {
        let mut out = String::new();
        if let Some(source) = &self.model_source {
            out.push_str(&format!("Deck: {}\n", source.display()));
        }
        out.push_str(&render_model(&self.model));
        out
    }

    fn cmd_load(&mut self, args: &[&str]) -> String {
        if args.is_empty() {
            return "Usage: load <path>".to_string();
        }
        let path = PathBuf::from(args.join(" "));
        self.load_file(&path)
    }

    fn cmd_ports(&self) -> String {
        match list_ports() {
            Ok(ports) => render_ports(&ports),
            Err(err) => self.paint_error(&format!("Port discovery failed: {err}")),
        }
    }

    fn cmd_connect(&mut self, args: &[&str]) -> String {
        if args.is_empty() || args.len() > 2 {
            return "Usage: connect <port> [baud]".to_string();
        }
        let port = args[0].to_string();
        let baud = if args.len() == 2 {
            match args[1].parse::<u32>() {
                Ok(baud) => Some(baud),
                Err(_) => return format!("Invalid baud rate '{}'.", args[1]),
            }
        } else {
            None
        };

        let connection = &self.settings.settings().connection;
        let mut params = ConnectionParams::new(port.clone())
            .with_baud_rate(baud.unwrap_or(connection.baud_rate))
            .with_timeout_ms(connection.timeout_ms);
        params.data_bits = connection.data_bits;
        params.stop_bits = connection.stop_bits;

        match self.session.connect(&params) {
            Ok(()) => {
                let settings = self.settings.settings_mut();
                settings.connection.port = Some(port);
                settings.connection.baud_rate = params.baud_rate;
                if let Err(err) = self.settings.save() {
                    warn!(error = %err, "failed to persist connection settings");
                }
                String::new()
            }
            Err(err) => self.paint_error(&format!("Connection failed: {err}")),
        }
    }

    fn cmd_disconnect(&mut self) -> String {
        if !self.session.is_connected() {
            return "Not connected.".to_string();
        }
        match self.session.disconnect() {
            Ok(()) => String::new(),
            Err(err) => self.paint_error(&format!("Disconnect failed: {err}")),
        }
    }

    fn cmd_dump(&self) -> String {
        match serde_json::to_string_pretty(&self.model) {
            Ok(json) => json,
            Err(err) => format!("Dump failed: {err}"),
        }
    }

    fn drain_events(&mut self) -> String {
        let mut out = String::new();
        while let Ok(event) = self.events.try_recv() {
            match &event {
                // Already echoed inline by the command that caused them.
                SessionEvent::CommandSent { .. }
                | SessionEvent::CommandFailed { .. }
                | SessionEvent::ModelLoaded { .. } => {}
                other => out.push_str(&format!("* {other}\n")),
            }
        }
        out
    }

    fn paint_error(&self, text: &str) -> String {
        paint(text, RED, self.settings.settings().console.color)
    }
}

fn help_text() -> String {
    "\
Commands:
  <number>               send the numbered button
  send <number|label>    send by button number or label
  show                   print the loaded deck
  load <path>            load a command file (replaces the deck)
  ports                  list candidate serial ports
  connect <port> [baud]  open a serial connection
  disconnect             close the serial connection
  dump                   print the deck as JSON
  help                   this text
  quit                   leave the console"
        .to_string()
}
