// src/config/model.rs

use serde::Deserialize;

/// Program used for both `ecs describe-tasks` and `ssm start-session`.
pub const DEFAULT_AWS_CLI: &str = "aws";

/// Optional defaults file as read from TOML.
///
/// ```toml
/// [defaults]
/// cluster = "production"
/// container = "app"
/// profile = "ops"
/// region = "eu-west-1"
/// aws_cli = "/usr/local/bin/aws"
/// ```
///
/// Every key is optional; flags given on the command line win.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    pub cluster: Option<String>,
    pub container: Option<String>,
    pub profile: Option<String>,
    pub region: Option<String>,
    pub aws_cli: Option<String>,
}

/// Fully validated inputs for one port-forwarding invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub cluster: String,
    pub task: String,
    /// `None` means "pick the only container of the task".
    pub container: Option<String>,
    pub port: u16,
    pub local_port: u16,
    pub profile: Option<String>,
    pub region: Option<String>,
    pub aws_cli: String,
}
