use clap::{Parser, ValueEnum};
use flowsched::client::{CloudApiClient, HttpApiClient, ReplayApiClient};
use flowsched::config::{ReportTimezone, Settings};
use flowsched::error::ReportError;
use flowsched::report::{ReportKind, Reporter, SortKey};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CLI-specific sort keys for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortCli {
    Name,
    Active,
    Schedule,
}

impl From<SortCli> for SortKey {
    fn from(sort: SortCli) -> Self {
        match sort {
            SortCli::Name => SortKey::Name,
            SortCli::Active => SortKey::Active,
            SortCli::Schedule => SortKey::Schedule,
        }
    }
}

/// Schedule reports for Prefect Cloud flow groups
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print flow groups whose primary clock is a cron schedule
    #[arg(long)]
    active: bool,

    /// Print schedule configurations with the active flag of each workflow
    #[arg(long)]
    configurations: bool,

    /// Print every flow group, scheduled or not
    #[arg(long)]
    general: bool,

    /// Project name filter (substring); repeat to query several projects
    #[arg(short, long = "project", value_name = "PROJECT")]
    projects: Vec<String>,

    /// Sort rows within each project
    #[arg(short, long, value_enum)]
    sort_by: Option<SortCli>,

    /// Timezone for next-run times (IANA name or "localtime")
    #[arg(long, env = "REPORT_TIMEZONE")]
    timezone: Option<String>,

    /// Render from a recorded API response instead of calling the API
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Activate the schedules of every flow in a project (exact name)
    #[arg(long, value_name = "PROJECT")]
    activate: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn selected_reports(&self) -> Vec<ReportKind> {
        [
            (self.active, ReportKind::ActiveSchedules),
            (self.configurations, ReportKind::ScheduleConfigurations),
            (self.general, ReportKind::General),
        ]
        .into_iter()
        .filter_map(|(selected, kind)| selected.then_some(kind))
        .collect()
    }
}

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_str())),
        )
        .init();

    if let Err(e) = run(cli) {
        exit_with_error(&e.to_string());
    }
}

fn run(cli: Cli) -> Result<(), ReportError> {
    let reports = cli.selected_reports();
    if reports.is_empty() && cli.activate.is_none() {
        return Err(ReportError::NoReportSelected);
    }

    let mut settings = Settings::from_env()?;
    if let Some(timezone) = &cli.timezone {
        settings.timezone = timezone.parse::<ReportTimezone>()?;
    }
    info!(timezone = %settings.timezone, "Loaded settings");

    let client: Box<dyn CloudApiClient> = match &cli.replay {
        Some(path) => {
            if !cli.projects.is_empty() {
                warn!(
                    filters = cli.projects.len(),
                    "Project filters are not applied to a replayed response"
                );
            }
            Box::new(ReplayApiClient::from_file(path)?)
        }
        None => Box::new(HttpApiClient::from_settings(&settings)?),
    };
    let reporter = Reporter::new(client, &settings);

    if let Some(project) = &cli.activate {
        let summary = reporter.activate_project_schedules(project)?;
        println!(
            "Activated {} schedule(s) in '{}', {} already active, {} rejected",
            summary.activated.len(),
            project,
            summary.already_active,
            summary.rejected.len()
        );
        for name in &summary.rejected {
            println!("  -> rejected: {}", name);
        }
    }

    let sort = cli.sort_by.map(SortKey::from);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, kind) in reports.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
            writeln!(out)?;
        }
        reporter.write_report(kind, &cli.projects, sort, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
