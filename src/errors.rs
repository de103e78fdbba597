// src/errors.rs

//! Crate-wide error type.
//!
//! Every failure the tool can hit is terminal for the invocation, so the
//! variants carry enough context (cluster, task, container, program) to be
//! read on their own without re-running with `--debug`.

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcsExecPfError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("failed to call DescribeTasks: {cluster}/{task}: {source}")]
    DescribeTasks {
        cluster: String,
        task: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("task not found: {cluster}/{task}")]
    TaskNotFound { cluster: String, task: String },

    #[error(
        "DescribeTasks returned {count} tasks for {cluster}/{task}, this should never happen when passing a task id"
    )]
    InvariantViolation {
        cluster: String,
        task: String,
        count: usize,
    },

    #[error("task contains no running containers: {cluster}/{task}")]
    NoRunningContainers { cluster: String, task: String },

    #[error(
        "for tasks containing multiple containers, you must specify a container name: {cluster}/{task} ({count} containers)"
    )]
    AmbiguousContainer {
        cluster: String,
        task: String,
        count: usize,
    },

    #[error("container not found: {cluster}/{task}/{container}")]
    ContainerNotFound {
        cluster: String,
        task: String,
        container: String,
    },

    #[error("container has no runtime id (not running yet?): {cluster}/{task}/{container}")]
    NoRuntimeId {
        cluster: String,
        task: String,
        container: String,
    },

    #[error("failed to launch '{program}': {source}")]
    ProcessLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for '{program}': {source}")]
    ProcessWait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited unsuccessfully: {status}")]
    ProcessExit { program: String, status: ExitStatus },

    #[error("interrupted by signal {signal} while relaying output of '{program}'")]
    Interrupted { program: String, signal: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EcsExecPfError {
    /// Exit status the top-level binary should terminate with.
    ///
    /// A failed child propagates its own status; a child killed by signal
    /// `n` maps to `128 + n` like a shell would, as does an interrupted
    /// output relay. Everything else is `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            EcsExecPfError::ProcessExit { status, .. } => exit_status_code(status),
            EcsExecPfError::Interrupted { signal, .. } => 128 + signal,
            _ => 1,
        }
    }
}

#[cfg(unix)]
fn exit_status_code(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) if code != 0 => code,
        (_, Some(sig)) => 128 + sig,
        _ => 1,
    }
}

#[cfg(not(unix))]
fn exit_status_code(status: &ExitStatus) -> i32 {
    match status.code() {
        Some(code) if code != 0 => code,
        _ => 1,
    }
}

pub type Result<T> = std::result::Result<T, EcsExecPfError>;

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn exit_code_propagates_child_status() {
        let err = EcsExecPfError::ProcessExit {
            program: "aws".into(),
            status: ExitStatus::from_raw(3 << 8),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_maps_signal_like_a_shell() {
        let err = EcsExecPfError::ProcessExit {
            program: "aws".into(),
            status: ExitStatus::from_raw(libc::SIGTERM),
        };
        assert_eq!(err.exit_code(), 128 + libc::SIGTERM);
    }

    #[test]
    fn interrupted_relay_exits_like_a_signalled_shell() {
        let err = EcsExecPfError::Interrupted {
            program: "aws".into(),
            signal: libc::SIGINT,
        };
        assert_eq!(err.exit_code(), 130);
    }

    #[test]
    fn resolution_errors_exit_with_one() {
        let err = EcsExecPfError::TaskNotFound {
            cluster: "c".into(),
            task: "t".into(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "task not found: c/t");
    }
}
