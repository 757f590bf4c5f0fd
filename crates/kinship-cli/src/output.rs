//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::{FamilyGraph, FamilyNode, PersonHandle, PersonNode, RelationshipHandle};
use kinship_graph::{GraphStats, RelationshipGraph};
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format graph statistics.
    pub fn format_summary(&self, stats: &GraphStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Count"]);
                for (metric, count) in [
                    ("Persons", stats.persons),
                    ("Principals", stats.principals),
                    ("Families", stats.families),
                    ("Couple families", stats.couple_families),
                    ("Single-parent families", stats.single_parent_families),
                    ("Child links", stats.child_links),
                    ("Relatives", stats.relatives),
                ] {
                    builder.push_record([metric.to_string(), count.to_string()]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(format!("{} {}", stats.persons, stats.families)),
        }
    }

    /// Format all persons of a graph.
    pub fn format_persons(&self, graph: &RelationshipGraph) -> Result<String> {
        let handles = (0..graph.person_count()).map(PersonHandle::from_index);
        match self.format {
            OutputFormat::Json => {
                let persons: Vec<Value> = handles.map(|h| person_json(graph, h)).collect();
                Ok(serde_json::to_string_pretty(&persons)?)
            }
            OutputFormat::Table => {
                if graph.person_count() == 0 {
                    return Ok(self.colorize("No persons found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Gender", "Principal", "Spouse families", "Parent families", "Relatives"]);
                for (handle, person) in handles.zip(graph.persons()) {
                    builder.push_record([
                        person.person_id().to_string(),
                        display_name(graph, handle).unwrap_or_default(),
                        person.gender().to_string(),
                        (if person.is_principal() { "yes" } else { "" }).to_string(),
                        person.spouse_families().len().to_string(),
                        person.parent_families().len().to_string(),
                        person.relatives().len().to_string(),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(graph
                .persons()
                .iter()
                .map(|p| p.person_id())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format all families of a graph.
    pub fn format_families(&self, graph: &RelationshipGraph) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let families: Vec<Value> = graph.families().map(|f| family_json(graph, f)).collect();
                Ok(serde_json::to_string_pretty(&families)?)
            }
            OutputFormat::Table => {
                if graph.family_count() == 0 {
                    return Ok(self.colorize("No families found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Father", "Mother", "Children"]);
                for family in graph.families() {
                    let children: Vec<&str> = family
                        .children()
                        .iter()
                        .map(|c| person_id(graph, Some(c.child)))
                        .collect();
                    builder.push_record([
                        family.family_id().to_string(),
                        person_id(graph, family.father()).to_string(),
                        person_id(graph, family.mother()).to_string(),
                        children.join(", "),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(graph
                .families()
                .map(|f| f.family_id().as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format one person with their families and relatives.
    pub fn format_person(&self, graph: &RelationshipGraph, handle: PersonHandle) -> Result<String> {
        let Some(person) = graph.person_at(handle) else {
            return Ok(String::new());
        };
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&person_json(graph, handle))?),
            OutputFormat::Quiet => Ok(person.person_id().to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["ID".to_string(), person.person_id().to_string()]);
                if let Some(name) = display_name(graph, handle) {
                    builder.push_record(["Name".to_string(), name]);
                }
                builder.push_record(["Gender".to_string(), person.gender().to_string()]);
                builder.push_record(["Principal".to_string(), person.is_principal().to_string()]);
                builder.push_record(["Spouse families".to_string(), join_ids(person.spouse_families())]);
                builder.push_record(["Parent families".to_string(), join_ids(person.parent_families())]);
                for relative in person.relatives() {
                    builder.push_record([relative.label.clone(), person_id(graph, Some(relative.person)).to_string()]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format one family with its parents and children.
    pub fn format_family(&self, graph: &RelationshipGraph, family: &FamilyNode) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&family_json(graph, family))?),
            OutputFormat::Quiet => Ok(family.family_id().to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Role", "Person", "Relationship"]);
                for (role, parent) in [("Father", family.father()), ("Mother", family.mother())] {
                    builder.push_record([
                        role.to_string(),
                        person_id(graph, parent).to_string(),
                        relationship_id(graph, family.couple_relationship().filter(|_| parent.is_some())),
                    ]);
                }
                for entry in family.children() {
                    let records = [entry.father_relationship, entry.mother_relationship]
                        .into_iter()
                        .flatten()
                        .map(|r| relationship_id(graph, Some(r)))
                        .collect::<Vec<_>>();
                    builder.push_record([
                        "Child".to_string(),
                        person_id(graph, Some(entry.child)).to_string(),
                        records.join(", "),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// First full-text name form of a person, if the record has one.
pub fn display_name(graph: &RelationshipGraph, handle: PersonHandle) -> Option<String> {
    let record = graph.person_record(handle)?;
    record
        .extra
        .get("names")?
        .as_array()?
        .first()?
        .get("nameForms")?
        .as_array()?
        .first()?
        .get("fullText")?
        .as_str()
        .map(str::to_string)
}

fn person_id(graph: &RelationshipGraph, handle: Option<PersonHandle>) -> &str {
    handle
        .and_then(|h| graph.person_at(h))
        .map(PersonNode::person_id)
        .unwrap_or("-")
}

fn relationship_id(graph: &RelationshipGraph, handle: Option<RelationshipHandle>) -> String {
    match handle.and_then(|h| graph.relationship(h)) {
        Some(rel) => rel.id().unwrap_or("(unnamed)").to_string(),
        None => String::new(),
    }
}

fn join_ids<T: ToString>(ids: &[T]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn person_json(graph: &RelationshipGraph, handle: PersonHandle) -> Value {
    let Some(person) = graph.person_at(handle) else {
        return Value::Null;
    };
    let relatives: Vec<Value> = person
        .relatives()
        .iter()
        .map(|r| json!({ "label": r.label, "person": person_id(graph, Some(r.person)) }))
        .collect();
    json!({
        "id": person.person_id(),
        "name": display_name(graph, handle),
        "gender": person.gender().as_str(),
        "principal": person.is_principal(),
        "spouse_families": person.spouse_families().iter().map(|f| f.as_str()).collect::<Vec<_>>(),
        "parent_families": person.parent_families().iter().map(|f| f.as_str()).collect::<Vec<_>>(),
        "relatives": relatives,
    })
}

fn family_json(graph: &RelationshipGraph, family: &FamilyNode) -> Value {
    let optional_id = |h: Option<PersonHandle>| h.map(|h| person_id(graph, Some(h)).to_string());
    let optional_rel = |h: Option<RelationshipHandle>| {
        h.and_then(|h| graph.relationship(h))
            .and_then(|r| r.id())
            .map(str::to_string)
    };
    let children: Vec<Value> = family
        .children()
        .iter()
        .map(|c| {
            json!({
                "child": person_id(graph, Some(c.child)),
                "father_relationship": optional_rel(c.father_relationship),
                "mother_relationship": optional_rel(c.mother_relationship),
            })
        })
        .collect();
    json!({
        "id": family.family_id().as_str(),
        "father": optional_id(family.father()),
        "mother": optional_id(family.mother()),
        "couple_relationship": optional_rel(family.couple_relationship()),
        "children": children,
    })
}
