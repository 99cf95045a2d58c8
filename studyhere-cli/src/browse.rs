//! Interactive browse shell
//!
//! Reads one command per line and applies it to a `Session`. Every command
//! that changes the filters or sort key re-renders the view.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use studyhere_core::{Session, SortKey, SpaceId};

use crate::input::{coerce_capacity, parse_switch};
use crate::render::{render_card, render_status, render_view};

const HELP: &str = "\
Commands:
  search [TEXT]     Filter by name, building or noise (empty clears)
  capacity VALUE    Minimum capacity (non-numeric means 0)
  open [on|off]     Only show spaces open now (toggles without argument)
  sort KEY          default | name-asc | capacity-desc | capacity-asc
  reserve ID        Reserve a space, or cancel its reservation
  reserved          List reserved spaces
  show ID           Show details for a space
  list              Show the current results
  reset             Restore the starting filters and sort order
  help              Show this help
  quit              Leave";

/// One parsed line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Capacity(String),
    Open(Option<String>),
    Sort(String),
    Reserve(String),
    Reserved,
    Show(String),
    List,
    Reset,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = rest.trim();

        match word.to_ascii_lowercase().as_str() {
            "" => ShellCommand::Empty,
            // Search text is matched literally, so only the separator is dropped
            "search" | "find" => ShellCommand::Search(rest.to_string()),
            "capacity" | "cap" => ShellCommand::Capacity(arg.to_string()),
            "open" => ShellCommand::Open((!arg.is_empty()).then(|| arg.to_string())),
            "sort" => ShellCommand::Sort(arg.to_string()),
            "reserve" | "toggle" => ShellCommand::Reserve(arg.to_string()),
            "reserved" => ShellCommand::Reserved,
            "show" => ShellCommand::Show(arg.to_string()),
            "list" | "ls" => ShellCommand::List,
            "reset" => ShellCommand::Reset,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Line-oriented shell over a session
pub struct BrowseShell<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> BrowseShell<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Run until `quit` or end of input, returning the final session
    pub fn run(mut self) -> Result<Session> {
        writeln!(self.output, "StudyHere - find a great place to focus. Type 'help' for commands.\n")?;
        self.print_view()?;

        let mut line = String::new();
        loop {
            write!(self.output, "\n> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let command = ShellCommand::parse(&line);
            debug!("Browse command: {:?}", command);

            if let Flow::Exit = self.execute(command)? {
                break;
            }
        }

        Ok(self.session)
    }

    fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Search(text) => {
                self.session.set_search_term(text);
                self.print_view()?;
            }
            ShellCommand::Capacity(raw) => {
                self.session.set_min_capacity(coerce_capacity(&raw));
                self.print_view()?;
            }
            ShellCommand::Open(arg) => {
                let only_open = match arg.as_deref() {
                    None => !self.session.criteria().only_open,
                    Some(raw) => match parse_switch(raw) {
                        Some(value) => value,
                        None => {
                            writeln!(self.output, "Expected 'on' or 'off', got '{raw}'")?;
                            return Ok(Flow::Continue);
                        }
                    },
                };
                self.session.set_only_open(only_open);
                self.print_view()?;
            }
            ShellCommand::Sort(raw) => {
                self.session.set_sort_key(SortKey::parse_lenient(&raw));
                self.print_view()?;
            }
            ShellCommand::Reserve(raw) => self.toggle_reservation(&raw)?,
            ShellCommand::Reserved => self.print_reserved()?,
            ShellCommand::Show(raw) => self.show(&raw)?,
            ShellCommand::List => self.print_view()?,
            ShellCommand::Reset => {
                self.session.reset_filters();
                self.print_view()?;
            }
            ShellCommand::Help => writeln!(self.output, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Exit),
            ShellCommand::Empty => {}
            ShellCommand::Unknown(word) => {
                writeln!(self.output, "Unknown command '{word}'. Type 'help' for commands.")?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Parse an id typed by the user and check it names a catalog space
    fn lookup_id(&mut self, raw: &str) -> Result<Option<SpaceId>> {
        let id = match raw.parse::<SpaceId>() {
            Ok(id) => id,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(None);
            }
        };

        if !self.session.catalog().contains(id) {
            writeln!(self.output, "No space with id {id}")?;
            return Ok(None);
        }

        Ok(Some(id))
    }

    fn toggle_reservation(&mut self, raw: &str) -> Result<()> {
        let Some(id) = self.lookup_id(raw)? else {
            return Ok(());
        };

        let reserved = self.session.toggle_reservation(id);
        let name = self
            .session
            .catalog()
            .get(id)
            .map(|s| s.name.as_str())
            .unwrap_or_default();

        if reserved {
            writeln!(self.output, "Reserved {name}")?;
        } else {
            writeln!(self.output, "Cancelled reservation for {name}")?;
        }
        Ok(())
    }

    fn show(&mut self, raw: &str) -> Result<()> {
        let Some(id) = self.lookup_id(raw)? else {
            return Ok(());
        };

        if let Some(space) = self.session.catalog().get(id) {
            let card = render_card(space, self.session.is_reserved(id));
            writeln!(self.output, "{card}")?;
        }
        Ok(())
    }

    fn print_reserved(&mut self) -> Result<()> {
        let ids = self.session.reservations().sorted_ids();
        if ids.is_empty() {
            writeln!(self.output, "No reservations yet.")?;
            return Ok(());
        }

        writeln!(self.output, "Reserved spaces:")?;
        for id in ids {
            let name = self
                .session
                .catalog()
                .get(id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| format!("unknown space #{id}"));
            writeln!(self.output, "  {id}  {name}")?;
        }
        Ok(())
    }

    fn print_view(&mut self) -> Result<()> {
        let status = render_status(&self.session);
        let view = render_view(&self.session.view_entries());
        writeln!(self.output, "{status}\n\n{view}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use studyhere_core::Catalog;

    fn run_script(script: &str) -> (Session, String) {
        let mut output = Vec::new();
        let shell = BrowseShell::new(
            Session::new(Catalog::sample()),
            Cursor::new(script.as_bytes()),
            &mut output,
        );
        let session = shell.run().unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("list\n"), ShellCommand::List);
        assert_eq!(ShellCommand::parse("  sort name-asc\r\n"), ShellCommand::Sort("name-asc".into()));
        assert_eq!(ShellCommand::parse("open"), ShellCommand::Open(None));
        assert_eq!(ShellCommand::parse("open off"), ShellCommand::Open(Some("off".into())));
        assert_eq!(ShellCommand::parse("CAP 20"), ShellCommand::Capacity("20".into()));
        assert_eq!(ShellCommand::parse(""), ShellCommand::Empty);
        assert_eq!(ShellCommand::parse("dance"), ShellCommand::Unknown("dance".into()));
    }

    #[test]
    fn test_search_text_is_kept_literally() {
        assert_eq!(
            ShellCommand::parse("search  library \n"),
            ShellCommand::Search(" library ".into())
        );
        assert_eq!(ShellCommand::parse("search"), ShellCommand::Search(String::new()));
    }

    #[test]
    fn test_any_whitespace_separates_the_command() {
        assert_eq!(
            ShellCommand::parse("search\tlibrary\n"),
            ShellCommand::Search("library".into())
        );
        assert_eq!(ShellCommand::parse("reserve\t3"), ShellCommand::Reserve("3".into()));
    }

    #[test]
    fn test_filters_and_sort_apply_to_session() {
        let (session, output) = run_script("capacity 25\nopen on\nsort capacity-desc\nquit\n");

        let names: Vec<&str> = session.view().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["University Crossings", "O'Leary Library"]);
        assert!(output.contains("2 spaces found"));
    }

    #[test]
    fn test_capacity_garbage_becomes_zero() {
        let (session, _) = run_script("capacity 40\ncapacity lots\n");
        assert_eq!(session.criteria().min_capacity, 0);
    }

    #[test]
    fn test_unknown_sort_uses_default_order() {
        let (session, _) = run_script("sort name-asc\nsort shoe-size\n");
        assert_eq!(session.sort_key(), SortKey::CatalogOrder);
    }

    #[test]
    fn test_open_toggles_without_argument() {
        let (session, _) = run_script("open\n");
        assert!(session.criteria().only_open);

        let (session, output) = run_script("open\nopen\nopen maybe\n");
        assert!(!session.criteria().only_open);
        assert!(output.contains("Expected 'on' or 'off', got 'maybe'"));
    }

    #[test]
    fn test_reserve_twice_restores() {
        let (session, output) = run_script("reserve 3\nreserve 3\n");

        assert!(session.reservations().is_empty());
        assert!(output.contains("Reserved Bourgeois Hall"));
        assert!(output.contains("Cancelled reservation for Bourgeois Hall"));
    }

    #[test]
    fn test_reserve_rejects_bad_ids() {
        let (session, output) = run_script("reserve abc\nreserve 42\n");

        assert!(session.reservations().is_empty());
        assert!(output.contains("Invalid space id 'abc'"));
        assert!(output.contains("No space with id 42"));
    }

    #[test]
    fn test_reserved_listing_and_show() {
        let (_, output) = run_script("reserve 5\nreserve 1\nreserved\nshow 5\n");

        assert!(output.contains("Reserved spaces:\n  1  O'Leary Library\n  5  Lydon Library\n"));
        assert!(output.contains("📚 Lydon Library (#5)"));
        assert!(output.contains("  Reserved\n"));
    }

    #[test]
    fn test_empty_results_message() {
        let (_, output) = run_script("search planetarium\n");
        assert!(output.contains("0 spaces found\n\nNo spaces match your filters."));
    }

    #[test]
    fn test_reset_keeps_reservations() {
        let (session, _) = run_script("search hall\nreserve 2\nreset\n");

        assert!(session.criteria().is_identity());
        assert!(session.is_reserved(SpaceId(2)));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run_script("quit\nsearch library\n");
        assert_eq!(session.criteria().search_term, "");
    }
}
