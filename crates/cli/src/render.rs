//! Terminal rendering of the visible table and the project detail

use console::{measure_text_width, pad_str, style, Alignment};
use devdir_domain::model::employee::EMPTY_CELL;
use devdir_domain::{Employee, Project};

/// Row shown when no employee matches
pub const NO_DEVELOPERS: &str = "No developers found";

const HEADERS: [&str; 5] = ["#", "Name", "Designation", "Skills", "Projects"];

/// Projects cell: numbered names, `--` when there are none
pub fn projects_cell(employee: &Employee) -> String {
    if employee.projects().is_empty() {
        return EMPTY_CELL.to_string();
    }
    employee
        .projects()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("[{}] {}", i + 1, p.name()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn row_cells(row: usize, employee: &Employee) -> [String; 5] {
    [
        (row + 1).to_string(),
        employee.name_cell().to_string(),
        employee.designation_cell().to_string(),
        employee.skills_cell(),
        projects_cell(employee),
    ]
}

/// Render the visible employees as an aligned table
///
/// Rows are numbered from 1 in visible order; those numbers are what
/// `/project <row> <n>` expects.
pub fn render_table(employees: &[&Employee]) -> String {
    let rows: Vec<[String; 5]> = employees
        .iter()
        .enumerate()
        .map(|(i, e)| row_cells(i, e))
        .collect();

    let mut widths = HEADERS.map(measure_text_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| style(pad_str(h, *w, Alignment::Left, None)).bold().to_string())
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    if rows.is_empty() {
        out.push_str(&style(NO_DEVELOPERS).dim().to_string());
        out.push('\n');
        return out;
    }

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| pad_str(cell, *w, Alignment::Left, None).into_owned())
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Render the detail view for one project
pub fn render_project(owner: &Employee, project: &Project) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({})\n",
        style(project.name()).bold(),
        owner.name_cell()
    ));
    if !project.description().is_empty() {
        out.push_str(project.description());
        out.push('\n');
    }

    out.push_str("\nTeam:\n");
    for member in project.team() {
        out.push_str(&format!("  - {}\n", member.display_line()));
    }

    out.push_str("\nTasks:\n");
    for task in project.tasks() {
        out.push_str(&format!("  - {}\n", task.display_line()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use devdir_domain::{Task, TeamMember};

    #[test]
    fn test_empty_table_shows_placeholder() {
        let table = render_table(&[]);
        assert!(table.contains("Name"));
        assert!(table.contains(NO_DEVELOPERS));
    }

    #[test]
    fn test_table_rows() {
        let alice = Employee::new("Alice")
            .with_designation("Developer")
            .with_skills(["Python", "SQL"])
            .with_project(Project::new("Atlas"));
        let nobody = Employee::default();

        let table = render_table(&[&alice, &nobody]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1"));
        assert!(lines[1].contains("Python, SQL"));
        assert!(lines[1].contains("[1] Atlas"));
        assert!(lines[2].starts_with("2"));
        assert!(lines[2].contains("--"));
        assert!(!table.contains(NO_DEVELOPERS));
    }

    #[test]
    fn test_projects_cell() {
        let employee = Employee::new("Bob")
            .with_project(Project::new("Beacon"))
            .with_project(Project::new("Compass"));
        assert_eq!(projects_cell(&employee), "[1] Beacon [2] Compass");
        assert_eq!(projects_cell(&Employee::default()), "--");
    }

    #[test]
    fn test_render_project() {
        let owner = Employee::new("Alice");
        let project = Project::new("Atlas")
            .with_description("Maps")
            .with_member(TeamMember::new(Some("Alice".to_string()), "Lead"))
            .with_member(TeamMember::new(None, "QA"))
            .with_task(Task::new("Tiles", "Done"));

        let detail = render_project(&owner, &project);
        assert!(detail.contains("Atlas"));
        assert!(detail.contains("Maps"));
        assert!(detail.contains("  - Alice - Lead\n"));
        assert!(detail.contains("  - QA\n"));
        assert!(detail.contains("  - Tiles - Done\n"));
    }
}
