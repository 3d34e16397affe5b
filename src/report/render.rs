use super::row::ReportRow;
use super::{ReportKind, SortKey};
use std::io::{self, Write};

pub const SEPARATOR_WIDTH: usize = 120;
pub const SORT_MARKER: &str = "[*]";

const TITLE_WORKFLOW: &str = "Workflow";
const TITLE_PROJECT: &str = "Project";
const TITLE_ACTIVE: &str = "Active";
const TITLE_SCHEDULE: &str = "Schedule (Config)";

const PROJECT_WIDTH: usize = 25;
const ACTIVE_WIDTH: usize = 10;
const SCHEDULE_WIDTH: usize = 15;
const CLOCK_INDENT: &str = "    ";

/// The rows of one project, already sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSection {
    pub project: String,
    pub rows: Vec<ReportRow>,
}

/// A fully computed report, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ReportKind,
    pub sort: Option<SortKey>,
    pub sections: Vec<ProjectSection>,
}

impl Report {
    /// Number of flow groups listed.
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|section| section.rows.len()).sum()
    }

    fn workflow_width(&self) -> usize {
        match self.kind {
            ReportKind::ActiveSchedules => 55,
            _ => 54,
        }
    }

    fn title(&self, title: &str, key: SortKey) -> String {
        if self.sort == Some(key) {
            format!("{} {}", title, SORT_MARKER)
        } else {
            title.to_string()
        }
    }

    fn header(&self) -> String {
        let workflow = self.title(TITLE_WORKFLOW, SortKey::Name);
        let schedule = self.title(TITLE_SCHEDULE, SortKey::Schedule);
        match self.kind {
            ReportKind::ActiveSchedules => format!(
                "{:<w$} {:<PROJECT_WIDTH$} {:<SCHEDULE_WIDTH$}",
                workflow,
                TITLE_PROJECT,
                schedule,
                w = self.workflow_width()
            ),
            ReportKind::ScheduleConfigurations | ReportKind::General => format!(
                "{:<w$} {:<PROJECT_WIDTH$} {:<ACTIVE_WIDTH$} {:<SCHEDULE_WIDTH$}",
                workflow,
                TITLE_PROJECT,
                self.title(TITLE_ACTIVE, SortKey::Active),
                schedule,
                w = self.workflow_width()
            ),
        }
    }

    fn row_line(&self, row: &ReportRow) -> String {
        let workflow = format!("|- {}", row.workflow);
        match self.kind {
            ReportKind::ActiveSchedules => format!(
                "{:<w$} {:<PROJECT_WIDTH$} {}",
                workflow,
                row.project,
                row.description,
                w = self.workflow_width()
            ),
            ReportKind::ScheduleConfigurations | ReportKind::General => format!(
                "{:<w$} {:<PROJECT_WIDTH$} {:<ACTIVE_WIDTH$} {}",
                workflow,
                row.project,
                row.active_badge(),
                row.description,
                w = self.workflow_width()
            ),
        }
    }

    /// Writes the report as fixed-width text. Column widths never adapt to content.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let separator = "-".repeat(SEPARATOR_WIDTH);

        writeln!(out, "{}", separator)?;
        writeln!(out, "{}", self.header().trim_end())?;
        writeln!(out, "{}", separator)?;

        for section in &self.sections {
            writeln!(out)?;
            writeln!(out, "> {}", section.project)?;
            for row in &section.rows {
                writeln!(out, "{}", self.row_line(row).trim_end())?;
                for clock in &row.clock_lines {
                    writeln!(
                        out,
                        "{}|-> {} - {}",
                        CLOCK_INDENT, clock.parameters, clock.description
                    )?;
                }
                if !row.clock_lines.is_empty() {
                    writeln!(
                        out,
                        "{}{}",
                        CLOCK_INDENT,
                        "-".repeat(SEPARATOR_WIDTH - CLOCK_INDENT.len())
                    )?;
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", separator)?;
        Ok(())
    }

    /// The rendered report as a string.
    pub fn to_text(&self) -> String {
        let mut buffer = Vec::new();
        // Vec<u8> writes are infallible
        let _ = self.render(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
