//! ClassScope CLI
//!
//! Command-line interface for ClassScope operations:
//! - Search the course catalog
//! - Show a course's statistics and reviews
//! - Submit a review
//! - Generate a config file

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::cell::RefCell;
use std::path::PathBuf;

use classscope::api::ReviewClient;
use classscope::catalog::{subject_name, SUBJECT_DIRECTORY};
use classscope::config::{generate_default_config, Config};
use classscope::controller::{
    DetailController, DetailView, Feedback, FetchOutcome, ReviewFormView, SubmitOutcome,
};
use classscope::detail::{CourseDetailState, DetailStatus};
use classscope::display::{format_rating, format_review_date, star_fill};
use classscope::filter::{filter_courses, popular_courses};
use classscope::logging::init_logging;
use classscope::models::{CourseIdentifier, OptionalField, RatingMetric, ReviewForm, SearchTerm};
use classscope::notification::{Notification, NotificationKind};

#[derive(Parser)]
#[command(name = "classscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search courses, read aggregate ratings and post student reviews")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Review API URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the course catalog (no arguments lists popular courses)
    Search {
        /// Subject code or prefix, e.g. COMP
        #[arg(short, long, default_value = "")]
        subject: String,
        /// Catalog number or title fragment
        #[arg(short = 'n', long, default_value = "")]
        catalog: String,
        /// Catalog key (default: derived from the configured school)
        #[arg(short, long)]
        institution: Option<String>,
    },

    /// Show statistics and reviews of a course
    Course {
        /// Subject code, e.g. COMP
        subject: String,
        /// Catalog number, e.g. 110
        number: String,
    },

    /// Submit a review
    Review {
        subject: String,
        number: String,
        /// Overall rating (1-5)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=5))]
        difficulty: u8,
        #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=5))]
        workload: u8,
        #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=5))]
        usefulness: u8,
        #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=5))]
        fun: u8,
        /// Review text
        #[arg(short, long)]
        text: Option<String>,
        /// Grade received (A+ .. F, P, NC)
        #[arg(long)]
        grade: Option<String>,
        /// Passed? (yes/no)
        #[arg(long)]
        passed: Option<String>,
        /// Would take again? (yes/no)
        #[arg(long)]
        take_again: Option<String>,
        /// Extra cost? (yes/no)
        #[arg(long)]
        extra_cost: Option<String>,
        /// Required attendance? (yes/no)
        #[arg(long)]
        attendance: Option<String>,
        /// Required participation? (yes/no)
        #[arg(long)]
        participation: Option<String>,
    },

    /// List known subject codes
    Subjects,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Detail view printing to the terminal
struct TerminalView {
    course: CourseIdentifier,
    state: RefCell<CourseDetailState>,
    errors: RefCell<Vec<String>>,
}

impl TerminalView {
    fn new(course: CourseIdentifier) -> Self {
        let state = CourseDetailState::loading(course.code());
        Self {
            course,
            state: RefCell::new(state),
            errors: RefCell::new(Vec::new()),
        }
    }
}

impl Feedback for TerminalView {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => eprintln!("{}", notification.message),
            NotificationKind::Error => {
                eprintln!("Error: {}", notification.message);
                self.errors.borrow_mut().push(notification.message);
            }
        }
    }
}

impl ReviewFormView for TerminalView {
    fn reset_form(&self) {}
}

impl DetailView for TerminalView {
    fn current_course(&self) -> Option<CourseIdentifier> {
        Some(self.course.clone())
    }

    fn state_status(&self) -> DetailStatus {
        self.state.borrow().status
    }

    fn show_state(&self, state: CourseDetailState) {
        *self.state.borrow_mut() = state;
    }

    fn hide_form(&self) {}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    init_logging(&config.logging);

    match cli.command {
        Commands::Search {
            subject,
            catalog,
            institution,
        } => {
            let courses = config.catalog.load_catalog()?;
            let key = institution.unwrap_or_else(|| config.catalog.institution_key());
            let term = SearchTerm::new(subject, catalog);

            let results = if term.is_empty() {
                popular_courses(&courses, &key)
            } else {
                filter_courses(&courses, &key, &term)
            };

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
                OutputFormat::Table => {
                    if results.is_empty() {
                        println!("No courses found.");
                    } else {
                        println!("{:<10} {:<40} {:>6} {:>8}", "Course", "Name", "Rating", "Reviews");
                        println!("{}", "-".repeat(67));
                        for course in results {
                            println!(
                                "{:<10} {:<40} {:>6} {:>8}",
                                course.title,
                                truncate(&course.code, 40),
                                format_rating(course.rating),
                                course.review_count
                            );
                        }
                    }
                }
            }
        }

        Commands::Course { subject, number } => {
            let course = CourseIdentifier::new(config.catalog.school.as_str(), &subject, &number);
            let controller = DetailController::new(ReviewClient::new(&config.api)?, TerminalView::new(course));

            let outcome = controller.load(&controller.view().course).await;
            let state = controller.view().state.borrow().clone();

            match outcome {
                FetchOutcome::Loaded => print_state(&state, cli.format)?,
                FetchOutcome::NotFound(message) | FetchOutcome::Failed(message) => bail!(message),
                FetchOutcome::Stale => bail!("course changed while loading"),
            }
        }

        Commands::Review {
            subject,
            number,
            rating,
            difficulty,
            workload,
            usefulness,
            fun,
            text,
            grade,
            passed,
            take_again,
            extra_cost,
            attendance,
            participation,
        } => {
            let mut form = ReviewForm::new();
            form.set_rating(rating);
            for (metric, value) in RatingMetric::ALL.into_iter().zip([difficulty, workload, usefulness, fun]) {
                form.ratings.set(metric, value);
            }
            form.review_text = text.unwrap_or_default();

            let optional = [
                (OptionalField::Grade, grade),
                (OptionalField::Passed, passed),
                (OptionalField::WouldTakeAgain, take_again),
                (OptionalField::ExtraCost, extra_cost),
                (OptionalField::RequireAttendance, attendance),
                (OptionalField::RequireParticipation, participation),
            ];
            for (field, value) in optional {
                if let Some(value) = value {
                    let Some((choice, _)) = field
                        .choices()
                        .iter()
                        .find(|(choice, _)| choice.eq_ignore_ascii_case(value.trim()))
                    else {
                        bail!("invalid value {:?} for {}", value, field.key());
                    };
                    form.set_optional(field, *choice);
                }
            }

            let course = CourseIdentifier::new(config.catalog.school.as_str(), &subject, &number);
            let controller = DetailController::new(ReviewClient::new(&config.api)?, TerminalView::new(course));

            match controller.submit(&form, Utc::now()).await {
                SubmitOutcome::Submitted => {
                    let state = controller.view().state.borrow().clone();
                    if state.is_loaded() {
                        print_state(&state, cli.format)?;
                    }
                }
                SubmitOutcome::Invalid(e) => bail!(e),
                SubmitOutcome::Failed(message) => bail!(message),
            }
        }

        Commands::Subjects => {
            let courses = config.catalog.load_catalog()?;
            let key = config.catalog.institution_key();
            let known: Vec<&str> = courses
                .institution(&key)
                .map(|inst| inst.subject_codes().collect())
                .unwrap_or_default();

            match cli.format {
                OutputFormat::Json => {
                    let entries: Vec<_> = SUBJECT_DIRECTORY
                        .iter()
                        .map(|(code, name)| {
                            serde_json::json!({
                                "code": code,
                                "name": name,
                                "inCatalog": known.contains(code),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                OutputFormat::Table => {
                    for (code, name) in SUBJECT_DIRECTORY {
                        let marker = if known.contains(code) { "*" } else { " " };
                        println!("{} {:<6} {}", marker, code, name);
                    }
                    println!();
                    println!("* = courses in the local catalog");
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", content);
            }
        }
    }

    Ok(())
}

fn print_state(state: &CourseDetailState, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(state)?);
        return Ok(());
    }

    let subject = state.code.split_whitespace().next().unwrap_or_default();
    println!("{} - {}", state.code, state.title);
    if let Some(name) = subject_name(subject) {
        println!("{}", name);
    }
    println!();
    println!(
        "{} {} ({} reviews)",
        stars(state.overall_rating),
        format_rating(state.overall_rating),
        state.total_reviews
    );
    println!();
    println!("{}", state.description);
    println!();

    println!("Quick stats:");
    println!("  Average grade:      {}", state.avg_grade);
    println!("  Pass rate:          {}", state.pass_rate);
    println!("  Would take again:   {}", state.would_take_again_rate);
    println!("  Attendance:         {}", state.attendance_rate);
    println!("  Participation:      {}", state.participation_rate);
    println!();

    println!("Detailed ratings:");
    for (label, value) in [
        ("Difficulty", state.difficulty),
        ("Workload", state.workload),
        ("Usefulness", state.usefulness),
        ("Engagement", state.fun),
    ] {
        println!("  {:<12} {}/5", label, format_rating(value));
    }
    println!();

    println!("Rating distribution:");
    for bar in state.distribution.bars() {
        let width = (bar.percentage / 5.0).round() as usize;
        println!("  {:<8} {:<20} {}", bar.stars_label(), "#".repeat(width), bar.count_label());
    }

    if !state.reviews.is_empty() {
        println!();
        println!("Reviews:");
        for review in &state.reviews {
            println!();
            println!(
                "  {} - {}  {}",
                review.author,
                format_review_date(&review.date),
                stars(review.rating as f64)
            );
            if !review.text.is_empty() {
                println!("  {}", review.text);
            }
            let mut details = vec![
                format!("Difficulty: {}/5", review.difficulty),
                format!("Workload: {}/5", review.workload),
                format!("Usefulness: {}/5", review.usefulness),
                format!("Fun: {}/5", review.fun),
                format!("Grade: {}", review.grade),
            ];
            details.extend(review.extras().into_iter().map(|(label, value)| format!("{}: {}", label, value)));
            println!("  {}", details.join(" | "));
        }
    }

    Ok(())
}

fn stars(rating: f64) -> String {
    let fill = star_fill(rating);
    format!(
        "{}{}{}",
        "★".repeat(fill.full as usize),
        "⯪".repeat(fill.half as usize),
        "☆".repeat(fill.empty as usize)
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
