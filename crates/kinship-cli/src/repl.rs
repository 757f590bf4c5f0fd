//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_domain::FamilyGraph;
use kinship_graph::RelationshipGraph;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL over a built graph.
pub fn run_repl(graph: &mut RelationshipGraph, formatter: &Formatter, history_size: usize) -> Result<()> {
    println!("{}", formatter.info("Kinship REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("kinship> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => match execute_repl_command(cmd, graph, formatter) {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// Leave the REPL
    Exit,
    /// Print the command list
    Help,
    /// Graph statistics
    Summary,
    /// List persons
    Persons,
    /// List families
    Families,
    /// Show one person
    Person(String),
    /// Show one family
    Family(String),
    /// Remove a family from the graph
    Remove(String),
}

/// Parse a REPL command line.
pub fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some(&command) = parts.first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };
    let argument = |usage: &str| {
        parts
            .get(1)
            .map(|s| s.to_string())
            .ok_or_else(|| CliError::InvalidInput(format!("Usage: {}", usage)))
    };

    match command {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "summary" | "stats" => Ok(ReplCommand::Summary),
        "persons" => Ok(ReplCommand::Persons),
        "families" => Ok(ReplCommand::Families),
        "person" => Ok(ReplCommand::Person(argument("person <id>")?)),
        "family" => Ok(ReplCommand::Family(argument("family <family-id>")?)),
        "remove" => Ok(ReplCommand::Remove(argument("remove <family-id>")?)),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            command
        ))),
    }
}

/// Execute a parsed REPL command, returning the text to print.
pub fn execute_repl_command(
    cmd: ReplCommand,
    graph: &mut RelationshipGraph,
    formatter: &Formatter,
) -> Result<String> {
    match cmd {
        ReplCommand::Summary => commands::execute_summary(graph, formatter),
        ReplCommand::Persons => commands::execute_persons(graph, formatter),
        ReplCommand::Families => commands::execute_families(graph, formatter),
        ReplCommand::Person(id) => {
            let handle = graph
                .person_handle(&id)
                .ok_or_else(|| CliError::NotFound(format!("person '{}'", id)))?;
            formatter.format_person(graph, handle)
        }
        ReplCommand::Family(id) => commands::execute_family(graph, &id, formatter),
        ReplCommand::Remove(id) => {
            let removed = graph
                .remove_family(&id)
                .ok_or_else(|| CliError::NotFound(format!("family '{}'", id)))?;
            Ok(formatter.success(&format!(
                "Removed family {} ({} children)",
                removed.family_id(),
                removed.children().len()
            )))
        }
        ReplCommand::Exit | ReplCommand::Help => Ok(String::new()),
    }
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  summary                  - Show graph statistics");
    println!("  persons                  - List persons");
    println!("  families                 - List families");
    println!("  person <id>              - Show a person");
    println!("  family <family-id>       - Show a family");
    println!("  remove <family-id>       - Remove a family from the graph");
    println!("  help, ?                  - Show this help");
    println!("  exit, quit, q            - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use kinship_domain::relationship::{COUPLE_TYPE, PARENT_CHILD_TYPE};
    use kinship_domain::Gender;
    use kinship_graph::{Document, GraphConfig, PersonRecord, RelationshipRecord};

    fn graph() -> RelationshipGraph {
        let doc = Document::new()
            .with_person(PersonRecord::new("a", Gender::Male))
            .with_person(PersonRecord::new("b", Gender::Female))
            .with_person(PersonRecord::new("c", Gender::Female))
            .with_relationship(RelationshipRecord::new(COUPLE_TYPE, "a", "b"))
            .with_relationship(RelationshipRecord::new(PARENT_CHILD_TYPE, "a", "c"))
            .with_relationship(RelationshipRecord::new(PARENT_CHILD_TYPE, "b", "c"));
        RelationshipGraph::build(doc, &GraphConfig::default().with_chart_id("r")).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
        assert_eq!(parse_repl_command("  persons ").unwrap(), ReplCommand::Persons);
        assert_eq!(
            parse_repl_command("person p1").unwrap(),
            ReplCommand::Person("p1".to_string())
        );
        assert_eq!(
            parse_repl_command("remove r:a+b").unwrap(),
            ReplCommand::Remove("r:a+b".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_repl_command(""), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_repl_command("family"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_repl_command("dance"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_remove_family() {
        let mut graph = graph();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let output = execute_repl_command(ReplCommand::Remove("r:a+b".to_string()), &mut graph, &formatter).unwrap();
        assert!(output.contains("Removed family r:a+b (1 children)"));
        assert_eq!(graph.family_count(), 0);
        assert!(graph.person("c").unwrap().parent_families().is_empty());

        let again = execute_repl_command(ReplCommand::Remove("r:a+b".to_string()), &mut graph, &formatter);
        assert!(matches!(again, Err(CliError::NotFound(_))));
    }

    #[test]
    fn test_listing_commands() {
        let mut graph = graph();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let persons = execute_repl_command(ReplCommand::Persons, &mut graph, &formatter).unwrap();
        assert_eq!(persons, "a\nb\nc");
        let families = execute_repl_command(ReplCommand::Families, &mut graph, &formatter).unwrap();
        assert_eq!(families, "r:a+b");
        let summary = execute_repl_command(ReplCommand::Summary, &mut graph, &formatter).unwrap();
        assert_eq!(summary, "3 1");
    }
}
