// src/ecs/aws_cli.rs

use std::process::Stdio;

use anyhow::{Context, anyhow};
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::SessionOptions;
use crate::ecs::describer::{DescribeFuture, TaskDescriber};
use crate::ecs::model::TaskDescription;

/// Production describer: shells out to `aws ecs describe-tasks` and decodes
/// its JSON output.
///
/// Credentials, profiles and regions are whatever the aws CLI resolves; the
/// optional `--profile`/`--region` are simply passed through.
#[derive(Debug, Clone)]
pub struct AwsCliTaskDescriber {
    program: String,
    profile: Option<String>,
    region: Option<String>,
}

impl AwsCliTaskDescriber {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            profile: None,
            region: None,
        }
    }

    pub fn from_options(opts: &SessionOptions) -> Self {
        Self {
            program: opts.aws_cli.clone(),
            profile: opts.profile.clone(),
            region: opts.region.clone(),
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    fn args(&self, cluster: &str, task_id: &str) -> Vec<String> {
        let mut args: Vec<String> = [
            "ecs",
            "describe-tasks",
            "--cluster",
            cluster,
            "--tasks",
            task_id,
            "--output",
            "json",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        if let Some(region) = &self.region {
            args.push("--region".to_string());
            args.push(region.clone());
        }
        args
    }

    async fn run(&self, cluster: &str, task_id: &str) -> anyhow::Result<Vec<TaskDescription>> {
        let args = self.args(cluster, task_id);
        debug!(program = %self.program, ?args, "running describe-tasks");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("spawning '{}'", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "'{} ecs describe-tasks' {}: {}",
                self.program,
                output.status,
                stderr.trim()
            ));
        }

        parse_describe_output(&output.stdout)
    }
}

impl TaskDescriber for AwsCliTaskDescriber {
    fn describe_tasks<'a>(&'a self, cluster: &'a str, task_id: &'a str) -> DescribeFuture<'a> {
        Box::pin(self.run(cluster, task_id))
    }
}

#[derive(Debug, Deserialize)]
struct DescribeTasksOutput {
    #[serde(default)]
    tasks: Vec<TaskDescription>,
    #[serde(default)]
    failures: Vec<DescribeFailure>,
}

#[derive(Debug, Deserialize)]
struct DescribeFailure {
    arn: Option<String>,
    reason: Option<String>,
    detail: Option<String>,
}

/// Decode the `--output json` body of `aws ecs describe-tasks`.
///
/// `failures` entries (e.g. `MISSING` for an unknown task id) are logged and
/// dropped, so an unknown task comes back as an empty list.
pub fn parse_describe_output(stdout: &[u8]) -> anyhow::Result<Vec<TaskDescription>> {
    let out: DescribeTasksOutput =
        serde_json::from_slice(stdout).context("decoding describe-tasks output")?;

    for failure in &out.failures {
        warn!(
            arn = failure.arn.as_deref().unwrap_or(""),
            reason = failure.reason.as_deref().unwrap_or(""),
            detail = failure.detail.as_deref().unwrap_or(""),
            "describe-tasks reported a failure"
        );
    }

    Ok(out.tasks)
}
