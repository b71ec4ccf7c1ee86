//! CLI integration tests for the agenda binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

const FULL_QUEUE_INPUT: &str = "\
Agenda Eletronica - arquivo de entrada
Numero maximo de tarefas na agenda:
2

TAREFA    DESCRICAO
--------------------------------------------------
NOVA 2 Buy milk
NOVA 5 Call bank
NOVA 9 Meeting
PROXIMA
FIM
";

fn agenda() -> Command {
    Command::new(env!("CARGO_BIN_EXE_agenda"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = agenda()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start agenda binary");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for agenda binary")
}

fn section<'a>(stdout: &'a str, title: &str) -> Vec<&'a str> {
    stdout
        .lines()
        .skip_while(|line| *line != title)
        // Title, then its closing rule.
        .skip(2)
        .take_while(|line| !line.is_empty())
        .collect()
}

#[test]
fn full_queue_is_reported_and_leftovers_drained() {
    let output = run_with_stdin(&[], FULL_QUEUE_INPUT);
    assert!(
        output.status.success(),
        "agenda exited with non-zero status: {:?}",
        output.status
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        section(&stdout, "QUERY RESPONSES"),
        ["ERROR    Queue full, cannot insert.", "5        Call bank"]
    );
    assert_eq!(
        section(&stdout, "LEFT FOR THE NEXT DAY"),
        ["2        Buy milk"]
    );
}

#[test]
fn file_input_and_output_in_portuguese() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input_path = dir.path().join("entrada1.txt");
    let output_path = dir.path().join("saida.txt");
    fs::write(
        &input_path,
        "Numero maximo\n3\nTAREFA\n---\nPROXIMA\nNOVA 4 Estudar\nPROXIMA\nFIM\n",
    )
    .expect("write input");

    let output = agenda()
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .args(["--lang", "pt"])
        .output()
        .expect("failed to run agenda binary");
    assert!(output.status.success(), "status: {:?}", output.status);
    assert!(output.stdout.is_empty(), "report should go to the file");

    let report = fs::read_to_string(&output_path).expect("read report");
    assert_eq!(report.lines().count(), 15);
    assert_eq!(
        section(&report, "RESPOSTAS DAS CONSULTAS"),
        ["AVISO    Nao ha tarefas na agenda  :-)", "4        Estudar"]
    );
    assert_eq!(
        section(&report, "FICA PARA O DIA SEGUINTE"),
        ["Agenda vazia! Nao restam tarefas para o dia seguinte."]
    );
}

#[test]
fn tie_policy_flag_changes_order() {
    let input = "Numero maximo\n3\nTAREFA\n---\nNOVA 5 A\nNOVA 5 B\nPROXIMA\nFIM\n";

    let newest = run_with_stdin(&[], input);
    let stdout = String::from_utf8_lossy(&newest.stdout);
    assert_eq!(section(&stdout, "QUERY RESPONSES"), ["5        B"]);

    let oldest = run_with_stdin(&["--ties", "oldest-first"], input);
    let stdout = String::from_utf8_lossy(&oldest.stdout);
    assert_eq!(section(&stdout, "QUERY RESPONSES"), ["5        A"]);
    assert_eq!(section(&stdout, "LEFT FOR THE NEXT DAY"), ["5        B"]);
}

#[test]
fn non_positive_capacity_fails() {
    let output = run_with_stdin(&[], "Numero maximo\n0\nTAREFA\n---\nFIM\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid capacity 0"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = agenda()
        .arg(dir.path().join("missing.txt"))
        .output()
        .expect("failed to run agenda binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open"), "stderr: {stderr}");
}
