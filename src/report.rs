//! Output report: header, consultation responses and leftovers.

use std::fmt;
use std::io::Write;

use crate::agenda::{AgendaOutcome, Response};
use crate::types::Task;

const RULE: &str = "--------------------------------------------------";

/// Language of the fixed report texts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Portuguese,
}

struct Messages {
    header: [&'static str; 5],
    responses_title: &'static str,
    leftovers_title: &'static str,
    queue_full: &'static str,
    no_tasks: &'static str,
    no_leftovers: &'static str,
}

static ENGLISH: Messages = Messages {
    header: [
        "Electronic Agenda - output file.",
        "Tasks served during the day are listed first,",
        "followed by the tasks left for the next day.",
        "The header always has five lines; this one ends blank.",
        "",
    ],
    responses_title: "QUERY RESPONSES",
    leftovers_title: "LEFT FOR THE NEXT DAY",
    queue_full: "ERROR    Queue full, cannot insert.",
    no_tasks: "WARNING  No tasks pending  :-)",
    no_leftovers: "Empty agenda! No tasks left for the next day.",
};

static PORTUGUESE: Messages = Messages {
    header: [
        "Agenda Eletronica - Exemplo de arquivo de saida.",
        "Pode colocar qualquer texto no cabecalho.",
        "O cabecalho deve ter exatamente 5 linhas.",
        "Neste caso, a quinta linha estah em branco  :-)",
        "",
    ],
    responses_title: "RESPOSTAS DAS CONSULTAS",
    leftovers_title: "FICA PARA O DIA SEGUINTE",
    queue_full: "ERRO     Agenda cheia. Impossivel inserir.",
    no_tasks: "AVISO    Nao ha tarefas na agenda  :-)",
    no_leftovers: "Agenda vazia! Nao restam tarefas para o dia seguinte.",
};

impl Language {
    fn messages(self) -> &'static Messages {
        match self {
            Language::English => &ENGLISH,
            Language::Portuguese => &PORTUGUESE,
        }
    }
}

/// A printable report over a finished run.
pub struct Report<'a> {
    outcome: &'a AgendaOutcome,
    language: Language,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a AgendaOutcome, language: Language) -> Self {
        Self { outcome, language }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.language.messages();
        for line in messages.header {
            writeln!(f, "{line}")?;
        }

        write_title(f, messages.responses_title)?;
        for response in &self.outcome.responses {
            match response {
                Response::QueueFull => writeln!(f, "{}", messages.queue_full)?,
                Response::NoTasks => writeln!(f, "{}", messages.no_tasks)?,
                Response::Next(task) => write_task(f, task)?,
            }
        }

        writeln!(f)?;
        write_title(f, messages.leftovers_title)?;
        if self.outcome.leftovers.is_empty() {
            writeln!(f, "{}", messages.no_leftovers)?;
        }
        for task in &self.outcome.leftovers {
            write_task(f, task)?;
        }
        Ok(())
    }
}

fn write_title(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{RULE}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{RULE}")
}

// Priority left-aligned in three columns, then six spaces.
fn write_task(f: &mut fmt::Formatter<'_>, task: &Task) -> fmt::Result {
    writeln!(f, "{:<3}      {}", task.priority, task.description)
}

/// Write the full report and flush the writer.
pub fn write_report(
    mut writer: impl Write,
    outcome: &AgendaOutcome,
    language: Language,
) -> std::io::Result<()> {
    write!(writer, "{}", Report::new(outcome, language))?;
    writer.flush()
}
