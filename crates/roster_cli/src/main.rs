//! Command-line probe for `roster_core`.
//!
//! # Responsibility
//! - Verify core crate linkage (`ping`, `version`).
//! - Run a deterministic enrollment walkthrough (`demo`).

use clap::{Parser, Subcommand};
use log::info;
use roster_core::{
    init_logging, Course, Instructor, LoggingConfig, RegistryService, Student,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Roster registry probe
#[derive(Parser)]
#[command(name = "roster")]
#[command(version)]
struct Cli {
    /// Log level: trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files. Logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the core health-check reply
    Ping,
    /// Print the core crate version
    Version,
    /// Register sample records, enroll, grade and print every description
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let config = match &cli.log_level {
            Some(level) => LoggingConfig::new(level, log_dir),
            None => LoggingConfig::with_default_level(log_dir),
        };
        match config.and_then(|config| init_logging(&config).map(|()| config)) {
            Ok(config) => eprintln!(
                "roster: logging at {} to {}",
                config.level(),
                config.log_dir().display()
            ),
            Err(err) => {
                eprintln!("roster: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    match cli.command.unwrap_or(Command::Demo) {
        Command::Ping => println!("roster_core ping={}", roster_core::ping()),
        Command::Version => println!("roster_core version={}", roster_core::core_version()),
        Command::Demo => {
            if let Err(err) = run_demo() {
                eprintln!("roster: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn run_demo() -> Result<(), roster_core::RegistryError> {
    let mut registry = RegistryService::new();

    let ana = Student::new("Ana", "S1", "CS");
    let ben = Student::new("Ben", "S2", "Physics");
    registry.add_person(ana.clone().into())?;
    registry.add_person(ben.clone().into())?;
    registry.add_person(Instructor::new("Dr. Kim", "I1", "Computer Science").into())?;

    let algorithms = Course::new("Algorithms", "C1");
    let databases = Course::new("Databases", "C2");
    registry.add_course(algorithms.clone());
    registry.add_course(databases.clone());

    let first = registry.try_enroll_student(&ana, &algorithms)?;
    registry.try_enroll_student(&ben, &algorithms)?;
    registry.try_enroll_student(&ana, &databases)?;
    registry.try_assign_grade("S1", "C1", "A")?;
    info!("event=demo module=cli status=ok enrollment_id={}", first.id);

    for student in registry.students() {
        println!("{student}");
    }
    for instructor in registry.instructors() {
        println!("{instructor}");
    }
    for course in registry.courses() {
        println!("{course}");
    }
    for enrollment in registry.enrollments() {
        println!("{enrollment}");
    }

    let courses = registry
        .courses_for_student("S1")
        .into_iter()
        .map(|course| course.id)
        .collect::<Vec<_>>();
    println!("courses for S1: {}", courses.join(", "));

    let summary = registry.summary();
    println!(
        "students={} instructors={} courses={} enrollments={}",
        summary.students, summary.instructors, summary.courses, summary.enrollments
    );
    Ok(())
}
