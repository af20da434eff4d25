//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use timetable_core::domain::time;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "timetable",
    bin_name = "timetable",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "School timetable validation and consistency engine",
    long_about = "Timetable stores classes, teachers, rooms, subjects, slots and \
                  plannings, and refuses any change that breaks the school's \
                  scheduling rules.",
    after_help = "EXAMPLES:\n\
        \x20 timetable class insert --file class.json\n\
        \x20 timetable timeslot insert --start 08:00 --end 09:00\n\
        \x20 timetable options set --split 30\n\
        \x20 timetable --output-format json planning warnings 12",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage classes.
    #[command(subcommand, about = "Manage classes")]
    Class(NamedAction),

    /// Manage teachers.
    #[command(subcommand, about = "Manage teachers")]
    Teacher(NamedAction),

    /// Manage rooms.
    #[command(subcommand, about = "Manage rooms")]
    Room(NamedAction),

    /// Manage subjects.
    #[command(subcommand, about = "Manage subjects")]
    Subject(NamedAction),

    /// Manage slots.
    #[command(subcommand, about = "Manage slots")]
    Slot(SlotAction),

    /// Manage plannings.
    #[command(
        subcommand,
        about = "Manage plannings",
        after_help = "EXAMPLES:\n\
            \x20 timetable planning insert --file planning.json\n\
            \x20 timetable planning list --class 3\n\
            \x20 timetable planning warnings 12"
    )]
    Planning(PlanningAction),

    /// Manage time slots.
    #[command(
        subcommand,
        visible_alias = "ts",
        about = "Manage time slots",
        after_help = "EXAMPLES:\n\
            \x20 timetable timeslot insert --start 08:00 --end 09:00\n\
            \x20 timetable timeslot list --page 1 --per-page 10"
    )]
    Timeslot(TimeSlotAction),

    /// Read or change the global planning options.
    #[command(
        subcommand,
        about = "Planning options",
        after_help = "EXAMPLES:\n\
            \x20 timetable options show\n\
            \x20 timetable options set --start 08:00 --end 17:00\n\
            \x20 timetable options values"
    )]
    Options(OptionsAction),

    /// List the days of the week.
    #[command(about = "List the school days")]
    Days,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 timetable completions bash > ~/.local/share/bash-completion/completions/timetable\n\
            \x20 timetable completions zsh  > ~/.zfunc/_timetable\n\
            \x20 timetable completions fish > ~/.config/fish/completions/timetable.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Timetable configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 timetable config get storage.data_file\n\
            \x20 timetable config list"
    )]
    Config(ConfigCommands),
}

// ── entity actions ────────────────────────────────────────────────────────────

/// Actions shared by every stored entity.
#[derive(Debug, Subcommand)]
pub enum CrudAction {
    /// Validate and store a new entity read from JSON.
    Insert(PayloadArgs),
    /// Validate and replace an existing entity read from JSON.
    Update(PayloadArgs),
    /// Delete by id.
    Delete(IdArgs),
    /// Show one entity by id.
    Get(IdArgs),
}

/// Actions for classes, teachers, rooms and subjects.
#[derive(Debug, Subcommand)]
pub enum NamedAction {
    #[command(flatten)]
    Crud(CrudAction),
    /// List, optionally filtered by name.
    #[command(visible_alias = "ls")]
    List(NameListArgs),
}

/// Actions for slots.
#[derive(Debug, Subcommand)]
pub enum SlotAction {
    #[command(flatten)]
    Crud(CrudAction),
    /// List slots matching the given filters.
    #[command(visible_alias = "ls")]
    List(SlotListArgs),
}

/// Actions for plannings.
#[derive(Debug, Subcommand)]
pub enum PlanningAction {
    #[command(flatten)]
    Crud(CrudAction),
    /// List plannings matching the given filters.
    #[command(visible_alias = "ls")]
    List(PlanningListArgs),
    /// Subjects whose scheduled time misses their weekly hours.
    Warnings(IdArgs),
}

/// Actions for time slots.
#[derive(Debug, Subcommand)]
pub enum TimeSlotAction {
    /// Validate and store a new time slot.
    Insert(TimeSlotArgs),
    /// Delete by id.
    Delete(IdArgs),
    /// List time slots ordered by start time.
    #[command(visible_alias = "ls")]
    List(PageArgs),
}

/// Actions on the global options.
#[derive(Debug, Subcommand)]
pub enum OptionsAction {
    /// Print the stored options.
    Show,
    /// Change some of the options; absent flags keep their stored value.
    Set(OptionsArgs),
    /// Print the accepted split values, in minutes.
    Values,
}

// ── arguments ─────────────────────────────────────────────────────────────────

/// Where to read an entity payload from.
#[derive(Debug, Args)]
pub struct PayloadArgs {
    /// JSON document, or `-` for standard input. `null` stands for a missing body.
    #[arg(short = 'f', long = "file", value_name = "FILE", help = "JSON payload file (- for stdin)")]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    #[arg(value_name = "ID", help = "Entity identifier")]
    pub id: i64,
}

/// 1-based pagination, applied only when both values are given.
#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    #[arg(long = "page", value_name = "N", help = "Page number (1-based)")]
    pub page: Option<u32>,

    #[arg(long = "per-page", value_name = "N", help = "Items per page")]
    pub per_page: Option<u32>,
}

#[derive(Debug, Args)]
pub struct NameListArgs {
    /// Case-insensitive part of the name.
    #[arg(short = 'n', long = "name", help = "Filter by name")]
    pub name: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Args)]
pub struct SlotListArgs {
    #[arg(long = "background", help = "Exact background colour")]
    pub background_color: Option<String>,

    #[arg(long = "font", help = "Exact font colour")]
    pub font_color: Option<String>,

    #[arg(long = "teacher-last-name", help = "Filter by teacher last name")]
    pub teacher_last_name: Option<String>,

    #[arg(long = "teacher-first-name", help = "Filter by teacher first name")]
    pub teacher_first_name: Option<String>,

    #[arg(long = "subject", help = "Filter by subject name")]
    pub subject_name: Option<String>,

    #[arg(long = "room", help = "Filter by room name")]
    pub room_name: Option<String>,

    #[arg(long = "start", value_parser = parse_time, help = "Time slot start (HH:MM)")]
    pub start_hour: Option<NaiveTime>,

    #[arg(long = "end", value_parser = parse_time, help = "Time slot end (HH:MM)")]
    pub end_hour: Option<NaiveTime>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Args)]
pub struct PlanningListArgs {
    #[arg(short = 'n', long = "name", help = "Filter by name")]
    pub name: Option<String>,

    #[arg(long = "class", value_name = "ID", help = "Only plannings of this class")]
    pub class_id: Option<i64>,

    #[command(flatten)]
    pub page: PageArgs,
}

/// Bounds of a new time slot. Both are checked by the business rules, so
/// neither is required here.
#[derive(Debug, Args)]
pub struct TimeSlotArgs {
    #[arg(long = "start", value_parser = parse_time, help = "Start time (HH:MM)")]
    pub start: Option<NaiveTime>,

    #[arg(long = "end", value_parser = parse_time, help = "End time (HH:MM)")]
    pub end: Option<NaiveTime>,
}

#[derive(Debug, Args)]
pub struct OptionsArgs {
    #[arg(long = "split", value_name = "MINUTES", help = "Planning split in minutes")]
    pub split: Option<u32>,

    #[arg(long = "start", value_parser = parse_time, help = "Start of the planning day (HH:MM)")]
    pub start: Option<NaiveTime>,

    #[arg(long = "end", value_parser = parse_time, help = "End of the planning day (HH:MM)")]
    pub end: Option<NaiveTime>,
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    time::parse_time_of_day(value).map_err(|e| e.to_string())
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `timetable completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `timetable config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.data_file`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
