//! Discovery summary table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, ContentArrangement, Table};

use crate::discovery::SnapshotSummary;

/// Build the human-readable discovery summary
pub fn summary_table(summary: &SnapshotSummary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("RESOURCE"),
        Cell::new("COUNT"),
        Cell::new("DETAILS"),
    ]);

    let org_label = if summary.organization_name.is_empty() {
        summary.organization_slug.clone()
    } else {
        format!(
            "{} ({})",
            summary.organization_name, summary.organization_slug
        )
    };
    table.add_row(vec![
        Cell::new("Organization"),
        Cell::new(1).set_alignment(CellAlignment::Right),
        Cell::new(org_label),
    ]);

    table.add_row(vec![
        Cell::new("Teams"),
        Cell::new(summary.teams).set_alignment(CellAlignment::Right),
        Cell::new(format!("{} members total", summary.members)),
    ]);

    let platforms = summary
        .platforms
        .iter()
        .map(|(platform, count)| format!("{}: {}", platform, count))
        .collect::<Vec<_>>()
        .join(", ");
    table.add_row(vec![
        Cell::new("Projects"),
        Cell::new(summary.projects).set_alignment(CellAlignment::Right),
        Cell::new(platforms),
    ]);

    table
}

/// Print the summary to stderr so stdout carries only the snapshot
pub fn print_summary(summary: &SnapshotSummary) {
    eprintln!();
    eprintln!("Discovery Summary");
    eprintln!("{}", summary_table(summary));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SnapshotSummary {
        SnapshotSummary {
            organization_name: "Acme Corp".to_string(),
            organization_slug: "acme".to_string(),
            teams: 2,
            members: 5,
            projects: 3,
            platforms: vec![("python".to_string(), 2), ("javascript".to_string(), 1)],
        }
    }

    #[test]
    fn test_summary_table_contents() {
        let rendered = summary_table(&summary()).to_string();
        assert!(rendered.contains("Acme Corp (acme)"));
        assert!(rendered.contains("5 members total"));
        assert!(rendered.contains("python: 2"));
        assert!(rendered.contains("javascript: 1"));
    }

    #[test]
    fn test_summary_table_without_projects() {
        let summary = SnapshotSummary {
            organization_name: String::new(),
            projects: 0,
            platforms: vec![],
            ..summary()
        };
        let rendered = summary_table(&summary).to_string();
        assert!(rendered.contains("acme"));
        assert!(rendered.contains("Projects"));
    }
}
