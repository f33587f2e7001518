//! CLI command implementations

use clap::Subcommand;

pub mod inspect;
pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split files or stdin into segments at boundary positions
    Segment(segment::SegmentArgs),

    /// Show the break class of every scalar in a string
    Inspect(inspect::InspectArgs),
}
