use super::ZonepackOperation;
use clap::Parser;

/// command line tool building the downloadable per-zone statistics packages
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ZonepackApp {
    #[command(subcommand)]
    pub op: ZonepackOperation,
}
