use clap::{Parser, Subcommand, ValueEnum};
use rtlkit::bidi::BaseDirection;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Take the direction from the first strong character
    Auto,
    Ltr,
    Rtl,
}

impl From<DirectionArg> for BaseDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Auto => BaseDirection::Auto,
            DirectionArg::Ltr => BaseDirection::Ltr,
            DirectionArg::Rtl => BaseDirection::Rtl,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rtlkit", bin_name = "rtlkit", version)]
#[command(
    about = "Right-to-left console output and email template spacing tools",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Directory holding config.json (defaults to ./.rtlkit)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a right-aligned Hebrew line and a titled panel
    Demo {
        /// Line printed above the panel
        #[arg(long)]
        message: Option<String>,

        /// Panel title
        #[arg(long)]
        title: Option<String>,

        /// Panel body, lines separated by \n
        #[arg(long)]
        body: Option<String>,

        /// Paragraph direction used when reordering
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,
    },

    /// Normalize spacing values in HTML body templates
    #[command(alias = "update-body-spacing")]
    Spacing {
        /// Templates directory (defaults to templates/bodies)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// File name glob inside the directory (defaults to *.html)
        #[arg(long)]
        pattern: Option<String>,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Reorder text to visual order (reads stdin when no text is given)
    Reorder {
        /// Text to reorder, words joined with spaces
        text: Vec<String>,

        /// Paragraph direction used when reordering
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,
    },

    /// Show the effective configuration
    Config {
        /// Write the default config file if none exists
        #[arg(long)]
        init: bool,
    },
}
