// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Mandatory inputs (cluster, task, ports) are declared optional here so a
//! config file can supply them; [`crate::config`] enforces them afterwards.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `ecs-exec-pf`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "ecs-exec-pf",
    version,
    about = "Port forwarding using the ECS task container. (aws-cli wrapper)",
    long_about = None
)]
pub struct CliArgs {
    /// ECS cluster name.
    #[arg(short = 'c', long, value_name = "CLUSTER")]
    pub cluster: Option<String>,

    /// ECS task ID.
    #[arg(short = 't', long, value_name = "TASK")]
    pub task: Option<String>,

    /// Container name in ECS task.
    ///
    /// Required when the task runs more than one container.
    #[arg(short = 'n', long, value_name = "NAME")]
    pub container: Option<String>,

    /// Target remote port.
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Client local port.
    #[arg(short = 'l', long, value_name = "PORT")]
    pub local_port: Option<u16>,

    /// AWS named profile, passed through to the aws CLI.
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// AWS region, passed through to the aws CLI.
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Optional defaults file (TOML).
    ///
    /// Falls back to `ECS_EXEC_PF_CONFIG` when omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ECS_EXEC_PF_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Shorthand for `--log-level debug`.
    #[arg(long)]
    pub debug: bool,

    /// Resolve the container and print the session command without running it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
