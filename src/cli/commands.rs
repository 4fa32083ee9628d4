use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wk", about = concat!("[>] weekplan v", env!("CARGO_PKG_VERSION"), " - your week at a glance"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task snapshot file to read
    #[arg(short = 'f', long, global = true, default_value = "tasks.json")]
    pub file: String,

    /// Treat this date as today (YYYY-MM-DD; default: the system date)
    #[arg(long, global = true)]
    pub today: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a week's deadline / finish-by / todo columns
    Week(WeekArgs),
    /// Show what's open as of a week
    Open(OpenArgs),
    /// Show the global work-order ranking
    Order,
    /// List week events around a week
    Events(EventsArgs),
}

// ---------------------------------------------------------------------------
// Command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct WeekArgs {
    /// Any date inside the week to show (YYYY-MM-DD; default: today's week)
    pub date: Option<String>,

    /// Limit output to one column
    #[arg(long, value_enum)]
    pub column: Option<ColumnArg>,

    /// For past weeks, also show promoted tasks as ghosts in their
    /// original column
    #[arg(long)]
    pub ghosts: bool,
}

#[derive(Args)]
pub struct OpenArgs {
    /// Any date inside the week to show (YYYY-MM-DD; default: today's week)
    pub date: Option<String>,
}

#[derive(Args)]
pub struct EventsArgs {
    /// Any date inside the week to show (YYYY-MM-DD; default: today's week)
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColumnArg {
    Deadline,
    FinishBy,
    Todo,
}

impl From<ColumnArg> for crate::engine::Column {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::Deadline => crate::engine::Column::Deadline,
            ColumnArg::FinishBy => crate::engine::Column::FinishBy,
            ColumnArg::Todo => crate::engine::Column::Todo,
        }
    }
}
