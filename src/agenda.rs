//! Command dispatch: runs parsed commands against the queue.

use tracing::{debug, info};

use crate::error::{QueueError, Result};
use crate::input::{AgendaInput, Command};
use crate::priority_queue::{BoundedPriorityQueue, TieBreak};
use crate::types::Task;

/// One line of the consultation responses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// A `NEW` command hit a full queue.
    QueueFull,
    /// A `NEXT` command found nothing queued.
    NoTasks,
    /// A `NEXT` command served this task.
    Next(Task),
}

/// Results of a full run, ready for the report writer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgendaOutcome {
    pub responses: Vec<Response>,
    /// Tasks still queued at the end, highest priority first.
    pub leftovers: Vec<Task>,
}

/// Build the queue, run every command, then drain what is left.
pub fn run(input: AgendaInput, tie_break: TieBreak) -> Result<AgendaOutcome> {
    let mut queue = BoundedPriorityQueue::with_tie_break(input.capacity, tie_break)?;
    let responses = execute(&mut queue, input.commands);
    let leftovers: Vec<Task> = queue.drain().collect();
    queue.teardown();

    info!(
        ?tie_break,
        responses = responses.len(),
        leftovers = leftovers.len(),
        "agenda run finished"
    );
    Ok(AgendaOutcome {
        responses,
        leftovers,
    })
}

/// Apply commands in order, collecting one response per `NEXT` and per rejected `NEW`.
pub fn execute(
    queue: &mut BoundedPriorityQueue,
    commands: impl IntoIterator<Item = Command>,
) -> Vec<Response> {
    let mut responses = Vec::new();
    for command in commands {
        match command {
            Command::New(task) => {
                debug!(priority = task.priority, description = %task.description, "NEW");
                if let Err(QueueError::QueueFull) = queue.insert(task) {
                    info!(capacity = queue.capacity(), "queue full, task rejected");
                    responses.push(Response::QueueFull);
                }
            }
            Command::Next => {
                let Some(task) = queue.peek_maximum().cloned() else {
                    debug!("NEXT on empty queue");
                    responses.push(Response::NoTasks);
                    continue;
                };
                debug!(priority = task.priority, description = %task.description, "NEXT");
                let _ = queue.remove_maximum();
                responses.push(Response::Next(task));
            }
        }
    }
    responses
}
