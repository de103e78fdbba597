// src/session.rs

//! Command line for the `aws ssm start-session` port-forwarding process.

use std::fmt;

use serde::Serialize;

use crate::config::SessionOptions;

pub const PORT_FORWARDING_DOCUMENT: &str = "AWS-StartPortForwardingSession";

/// SSM target for an ECS container: `ecs:<cluster>_<task>_<runtimeId>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTarget<'a> {
    pub cluster: &'a str,
    pub task: &'a str,
    pub runtime_id: &'a str,
}

impl fmt::Display for SessionTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ecs:{}_{}_{}", self.cluster, self.task, self.runtime_id)
    }
}

/// `--parameters` payload of the port-forwarding document.
///
/// SSM wants every parameter as a list of strings, ports included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortForwardParameters {
    port_number: [String; 1],
    local_port_number: [String; 1],
}

impl PortForwardParameters {
    pub fn new(port: u16, local_port: u16) -> Self {
        Self {
            port_number: [port.to_string()],
            local_port_number: [local_port.to_string()],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Build the full argv (program first) of the session process.
pub fn start_session_command(opts: &SessionOptions, runtime_id: &str) -> serde_json::Result<Vec<String>> {
    let target = SessionTarget {
        cluster: &opts.cluster,
        task: &opts.task,
        runtime_id,
    };
    let params = PortForwardParameters::new(opts.port, opts.local_port).to_json()?;

    let mut argv = vec![
        opts.aws_cli.clone(),
        "ssm".to_string(),
        "start-session".to_string(),
        "--target".to_string(),
        target.to_string(),
        "--document-name".to_string(),
        PORT_FORWARDING_DOCUMENT.to_string(),
        "--parameters".to_string(),
        params,
    ];

    if let Some(profile) = &opts.profile {
        argv.push("--profile".to_string());
        argv.push(profile.clone());
    }
    if let Some(region) = &opts.region {
        argv.push("--region".to_string());
        argv.push(region.clone());
    }

    Ok(argv)
}

/// Render argv so it can be pasted into a POSIX shell (used by `--dry-run`).
pub fn shell_join(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| shell_quote(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
