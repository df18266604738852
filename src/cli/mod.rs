//! CLI module for the rollcall check-in service

pub mod serve;

use clap::{Parser, Subcommand};

/// Rollcall - event check-in service
#[derive(Parser)]
#[command(name = "rollcall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the check-in server (JSON API + event page)
    Serve,
}
