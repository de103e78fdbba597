// src/lib.rs

pub mod cli;
pub mod config;
pub mod ecs;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod resolve;
pub mod session;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::SessionOptions;
use crate::ecs::{AwsCliTaskDescriber, TaskDescriber};
use crate::errors::Result;
use crate::resolve::{ResolutionQuery, resolve_runtime_id};
use crate::session::{shell_join, start_session_command};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and validation
/// - the aws-CLI backed task describer
/// - container resolution
/// - the supervised `ssm start-session` process
pub async fn run(args: CliArgs) -> Result<()> {
    let file = config::load_optional(args.config.as_deref())?;
    let opts = config::build_session_options(&args, &file)?;
    debug!(?opts, "validated options");

    let describer = AwsCliTaskDescriber::from_options(&opts);
    run_session(&opts, &describer, args.dry_run).await
}

/// Resolve the target container through `describer`, then either print the
/// session command (`dry_run`) or run it under supervision.
pub async fn run_session<D>(opts: &SessionOptions, describer: &D, dry_run: bool) -> Result<()>
where
    D: TaskDescriber + ?Sized,
{
    let query = ResolutionQuery::new(
        opts.cluster.as_str(),
        opts.task.as_str(),
        opts.container.as_deref(),
    );
    let runtime_id = resolve_runtime_id(describer, &query).await?;

    let argv = start_session_command(opts, &runtime_id)?;

    if dry_run {
        println!("{}", shell_join(&argv));
        debug!("dry-run complete (no session started)");
        return Ok(());
    }

    info!(
        port = opts.port,
        local_port = opts.local_port,
        "starting port forwarding session"
    );
    exec::supervise(&argv).await
}
