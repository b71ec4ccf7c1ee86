//! Reader for agenda input files.
//!
//! Layout: free-form header lines, a capacity marker line followed by the
//! capacity, a task table header with its dash separator, then one command per
//! line until an end verb or end of input.

use std::io::Read;

use tracing::{debug, warn};

use crate::error::{AgendaError, QueueError, Result};
use crate::types::{MAX_DESCRIPTION_CHARS, Priority, Task};

const CAPACITY_MARKERS: [&str; 2] = ["numero maximo", "maximum number"];
const TABLE_MARKERS: [&str; 2] = ["tarefa", "task"];

/// A command from the input stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Queue a new task.
    New(Task),
    /// Serve the highest-priority task.
    Next,
}

/// Everything extracted from an input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgendaInput {
    pub capacity: usize,
    pub commands: Vec<Command>,
}

/// Read and parse a whole input stream.
pub fn read_from(mut reader: impl Read) -> Result<AgendaInput> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

/// Parse the text of an input file.
pub fn parse(text: &str) -> Result<AgendaInput> {
    let mut lines = text.lines().enumerate().map(|(index, line)| (index + 1, line));

    lines
        .by_ref()
        .find(|(_, line)| contains_any(line, &CAPACITY_MARKERS))
        .ok_or(AgendaError::MissingCapacity)?;
    let (_, capacity_line) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or(AgendaError::MissingCapacity)?;
    let capacity = parse_capacity(capacity_line)?;

    lines
        .by_ref()
        .find(|(_, line)| contains_any(line, &TABLE_MARKERS))
        .ok_or(AgendaError::MissingTaskTable)?;

    let mut lines = lines.peekable();
    if lines
        .peek()
        .is_some_and(|(_, line)| line.trim_start().starts_with('-'))
    {
        lines.next();
    }

    let mut commands = Vec::new();
    for (number, line) in lines {
        let line = line.trim_start();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match verb {
            "" => continue,
            "NOVA" | "NEW" => commands.push(Command::New(parse_task(number, rest)?)),
            "PROXIMA" | "NEXT" => commands.push(Command::Next),
            "FIM" | "END" => {
                debug!(line = number, "end of commands");
                break;
            }
            other => warn!(line = number, verb = other, "skipping unknown command"),
        }
    }

    debug!(capacity, commands = commands.len(), "parsed agenda input");
    Ok(AgendaInput { capacity, commands })
}

fn contains_any(line: &str, markers: &[&str]) -> bool {
    let line = line.to_lowercase();
    markers.iter().any(|marker| line.contains(marker))
}

fn parse_capacity(line: &str) -> Result<usize> {
    let token = line.split_whitespace().next().unwrap_or_default();
    let value: i64 = token
        .parse()
        .map_err(|_| AgendaError::InvalidCapacityValue(token.to_string()))?;
    usize::try_from(value)
        .ok()
        .filter(|capacity| *capacity > 0)
        .ok_or(AgendaError::Queue(QueueError::InvalidCapacity(value)))
}

/// `rest` is what follows the verb: `<priority> <description>`.
fn parse_task(line: usize, rest: &str) -> Result<Task> {
    let rest = rest.trim_start();
    let (token, description) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let priority: Priority = token.parse().map_err(|_| AgendaError::InvalidPriority {
        line,
        value: token.to_string(),
    })?;

    let description = description.trim_end();
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        warn!(
            line,
            limit = MAX_DESCRIPTION_CHARS,
            "description too long, truncating"
        );
    }
    Ok(Task::new(priority, description))
}
