use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use roster_engine::{
    Catalog, CatalogOptions, Region, School, Session, TeacherReport, TeachingDay,
    DEFAULT_REFERENCE_YEAR,
};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// School roster tool: list the catalog and check teacher assignment plans.
#[derive(Parser)]
#[command(name = "roster", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog schools by region, followed by their notes
    Schools {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Only list one region (e.g. jung-gu)
        #[arg(long, value_parser = parse_region)]
        region: Option<Region>,

        /// Year the MM.DD date tokens belong to
        #[arg(long, default_value_t = DEFAULT_REFERENCE_YEAR)]
        year: i32,
    },

    /// Assign schools to teachers from a plan file and report conflicts
    Check {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Plan JSON file: [{"teacher": "...", "schools": ["..."]}]
        #[arg(long)]
        plan: PathBuf,

        /// Year the MM.DD date tokens belong to
        #[arg(long, default_value_t = DEFAULT_REFERENCE_YEAR)]
        year: i32,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Exit with status 2 if any teacher has a conflict
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Deserialize)]
struct PlanEntry {
    teacher: String,
    #[serde(default)]
    schools: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput {
    teachers: Vec<TeacherReport>,
    unassigned_count: usize,
}

fn parse_region(key: &str) -> Result<Region, String> {
    Region::from_key(key).ok_or_else(|| {
        let known: Vec<_> = Region::ALL.iter().map(|r| r.key()).collect();
        format!("unknown region '{key}' (expected one of: {})", known.join(", "))
    })
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Schools {
            catalog,
            region,
            year,
        } => {
            let catalog = load_catalog(&catalog, year)?;
            print!("{}", render_catalog(&catalog, region));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            catalog,
            plan,
            year,
            format,
            strict,
        } => {
            let catalog = load_catalog(&catalog, year)?;
            let plan = load_plan(&plan)?;
            let session = apply_plan(catalog, &plan)?;

            let output = CheckOutput {
                teachers: session.reports(),
                unassigned_count: session.unassigned_count(),
            };
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&output)?),
                Format::Text => print!("{}", render_check(&output)),
            }

            let conflicted = output.teachers.iter().any(|t| !t.conflicts.is_empty());
            if strict && conflicted {
                return Ok(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_catalog(path: &Path, year: i32) -> Result<Catalog> {
    let options = CatalogOptions {
        reference_year: year,
    };
    Catalog::load(path, &options).context("failed to load school catalog")
}

fn load_plan(path: &Path) -> Result<Vec<PlanEntry>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read plan '{}'", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid plan '{}'", path.display()))
}

/// Build a session where each plan entry becomes one teacher, in order.
/// The session's default teacher takes the first entry.
fn apply_plan(catalog: Catalog, plan: &[PlanEntry]) -> Result<Session> {
    let mut session = Session::new(catalog);
    for (i, entry) in plan.iter().enumerate() {
        let id = if i == 0 {
            session.registry().teachers()[0].id()
        } else {
            session.registry_mut().add_teacher()
        };
        session.registry_mut().rename_teacher(id, entry.teacher.clone());
        for name in &entry.schools {
            session
                .assign(id, name)
                .with_context(|| format!("cannot assign '{name}' to '{}'", entry.teacher))?;
        }
    }
    Ok(session)
}

// ── Rendering ───────────────────────────────────────────────────────────────

fn render_catalog(catalog: &Catalog, only: Option<Region>) -> String {
    let mut out = String::new();
    for region in Region::ALL {
        if only.is_some_and(|r| r != region) {
            continue;
        }
        out.push_str(&format!("== {} ({}) ==\n", region.label(), region.key()));
        let schools: Vec<_> = catalog.region(region).collect();
        if schools.is_empty() {
            out.push_str("  (학교 목록이 곧 업데이트 될 예정입니다.)\n");
            continue;
        }
        for school in schools {
            out.push_str(&format!("  {}\n", school_line(school)));
        }
    }

    out.push_str("== 참고사항 ==\n");
    let noted: Vec<_> = catalog
        .noted_schools()
        .filter(|s| only.is_none() || s.region == only)
        .collect();
    if noted.is_empty() {
        out.push_str("  별도 참고사항이 없습니다.\n");
    }
    for school in noted {
        if let Some(note) = &school.note {
            out.push_str(&format!("  {} : {}\n", school.name, note));
        }
    }
    out
}

fn school_line(school: &School) -> String {
    let days: Vec<_> = TeachingDay::ALL
        .into_iter()
        .filter_map(|d| {
            school
                .schedule
                .periods(d)
                .map(|p| format!("{}({})", d.korean_label(), p))
        })
        .collect();
    let mut line = format!(
        "{} | {}차시 | {} | {}",
        school.name,
        school.total_sessions,
        school.date_windows_label(),
        if days.is_empty() {
            "-".to_string()
        } else {
            days.join(" ")
        }
    );
    if school.support {
        line.push_str(" | 보조");
    }
    if school.caution {
        line.push_str(" | 주의");
    }
    line
}

fn render_check(output: &CheckOutput) -> String {
    let mut out = String::new();
    for report in &output.teachers {
        out.push_str(&format!("{} ({})\n", report.name, report.id));
        let schools: Vec<_> = report.schools.iter().map(|s| s.as_str()).collect();
        out.push_str(&format!(
            "  학교: {}\n",
            if schools.is_empty() {
                "-".to_string()
            } else {
                schools.join(", ")
            }
        ));
        out.push_str(&format!("  총 차시: {}\n", report.stats.total_sessions));
        out.push_str(&format!("  출강 요일: {}\n", report.stats.busy_days_label()));
        for conflict in &report.conflicts {
            out.push_str(&format!("  {conflict}\n"));
        }
    }
    out.push_str(&format!("미배정 학교: {}\n", output.unassigned_count));
    out
}
