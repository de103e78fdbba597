// src/config/validate.rs

use crate::cli::CliArgs;
use crate::config::model::{ConfigFile, DEFAULT_AWS_CLI, SessionOptions};
use crate::errors::{EcsExecPfError, Result};

/// Merge CLI flags over file defaults and check that every mandatory input
/// is present. Runs before any backend call.
pub fn build_session_options(args: &CliArgs, file: &ConfigFile) -> Result<SessionOptions> {
    let defaults = &file.defaults;

    let cluster = non_empty(args.cluster.as_ref().or(defaults.cluster.as_ref()))
        .ok_or_else(|| required("cluster"))?;
    let task = non_empty(args.task.as_ref()).ok_or_else(|| required("task"))?;
    let port = non_zero(args.port).ok_or_else(|| required("port"))?;
    let local_port = non_zero(args.local_port).ok_or_else(|| required("local-port"))?;

    Ok(SessionOptions {
        cluster,
        task,
        container: container_name(args.container.as_ref().or(defaults.container.as_ref())),
        port,
        local_port,
        profile: non_empty(args.profile.as_ref().or(defaults.profile.as_ref())),
        region: non_empty(args.region.as_ref().or(defaults.region.as_ref())),
        aws_cli: non_empty(defaults.aws_cli.as_ref())
            .unwrap_or_else(|| DEFAULT_AWS_CLI.to_string()),
    })
}

fn required(flag: &str) -> EcsExecPfError {
    EcsExecPfError::Config(format!("'--{flag}' is required"))
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Container names are matched exactly, so only the empty string is
/// normalised (to "no name"); whitespace is part of the name.
fn container_name(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.is_empty()).cloned()
}

fn non_zero(port: Option<u16>) -> Option<u16> {
    port.filter(|p| *p != 0)
}
