// src/exec/supervisor.rs

use std::io;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, Stderr, Stdout};
use tokio::process::Command;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, trace, warn};

use crate::errors::{EcsExecPfError, Result};
use crate::exec::signals::SignalRelay;

/// How long the output relays may keep flushing after a failed exit before
/// the error is returned anyway.
pub const DEFAULT_FAILURE_DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Run `argv` with the parent's stdout/stderr relay and signal forwarding.
pub async fn supervise(argv: &[String]) -> Result<()> {
    Supervisor::new(argv.to_vec()).run().await
}

/// Runs one child process to completion.
///
/// - stdout and stderr are piped and copied byte-for-byte into the two
///   sinks, each by its own task, so a child blocked on a full pipe can
///   never deadlock the other stream.
/// - stdin is inherited.
/// - signals received by the parent are forwarded to the child (see
///   [`SignalRelay`]).
///
/// `run` returns `Ok` only once the child exited successfully and both
/// streams are fully drained. A failed exit wins over pending output: the
/// relays get [`DEFAULT_FAILURE_DRAIN_GRACE`] to finish, then are aborted.
/// After a clean exit, HUP/INT/TERM abandon the remaining output with
/// [`EcsExecPfError::Interrupted`].
pub struct Supervisor<O = Stdout, E = Stderr> {
    argv: Vec<String>,
    stdout: O,
    stderr: E,
    forward_signals: bool,
    failure_drain_grace: Duration,
}

impl Supervisor {
    pub fn new(argv: Vec<String>) -> Self {
        Self {
            argv,
            stdout: tokio::io::stdout(),
            stderr: tokio::io::stderr(),
            forward_signals: true,
            failure_drain_grace: DEFAULT_FAILURE_DRAIN_GRACE,
        }
    }
}

impl<O, E> Supervisor<O, E> {
    /// Relay the child's streams into custom sinks instead of the parent's.
    pub fn with_outputs<O2, E2>(self, stdout: O2, stderr: E2) -> Supervisor<O2, E2> {
        Supervisor {
            argv: self.argv,
            stdout,
            stderr,
            forward_signals: self.forward_signals,
            failure_drain_grace: self.failure_drain_grace,
        }
    }

    pub fn forward_signals(mut self, enabled: bool) -> Self {
        self.forward_signals = enabled;
        self
    }

    pub fn failure_drain_grace(mut self, grace: Duration) -> Self {
        self.failure_drain_grace = grace;
        self
    }
}

impl<O, E> Supervisor<O, E>
where
    O: AsyncWrite + Unpin + Send + 'static,
    E: AsyncWrite + Unpin + Send + 'static,
{
    pub async fn run(self) -> Result<()> {
        let Some((program, args)) = self.argv.split_first() else {
            return Err(launch_error(
                "",
                io::Error::new(io::ErrorKind::InvalidInput, "empty command line"),
            ));
        };

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // Subscribe before spawning so an early Ctrl-C reaches the child
        // instead of killing the supervisor.
        let mut relay = if self.forward_signals {
            Some(SignalRelay::install().map_err(|e| launch_error(program, e))?)
        } else {
            None
        };

        debug!(program = %program, ?args, "spawning session process");
        let mut child = cmd.spawn().map_err(|e| launch_error(program, e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| launch_error(program, missing_pipe("stdout")))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| launch_error(program, missing_pipe("stderr")))?;

        let pid = child.id();
        if let (Some(relay), Some(pid)) = (relay.as_mut(), pid) {
            relay.forward_to(pid);
        }
        info!(program = %program, pid = ?pid, "session process started");

        let mut drains = JoinSet::new();
        drains.spawn(relay_stream("stdout", stdout, self.stdout));
        drains.spawn(relay_stream("stderr", stderr, self.stderr));

        let status = child
            .wait()
            .await
            .map_err(|source| EcsExecPfError::ProcessWait {
                program: program.clone(),
                source,
            })?;

        // The pid is reaped from here on; never signal it again.
        if let Some(relay) = relay.as_ref() {
            relay.child_exited();
        }

        if !status.success() {
            warn!(program = %program, %status, "session process exited unsuccessfully");
            if timeout(self.failure_drain_grace, join_all(&mut drains))
                .await
                .is_err()
            {
                debug!("output relay still busy after grace period; abandoning it");
            }
            return Err(EcsExecPfError::ProcessExit {
                program: program.clone(),
                status,
            });
        }

        // A grandchild can keep the pipes open indefinitely; a stop signal
        // ends the wait for it.
        match relay.as_mut() {
            Some(relay) => {
                tokio::select! {
                    _ = join_all(&mut drains) => {}
                    signal = relay.stop_requested() => {
                        warn!(program = %program, signal, "stop requested while relaying output");
                        return Err(EcsExecPfError::Interrupted {
                            program: program.clone(),
                            signal,
                        });
                    }
                }
            }
            None => join_all(&mut drains).await,
        }

        info!(program = %program, "session process exited");
        Ok(())
    }
}

/// Copy one child stream into its sink until EOF.
///
/// Copy errors end the relay quietly: a broken pipe at shutdown must not
/// mask the child's real exit status.
async fn relay_stream<R, W>(stream: &'static str, mut reader: R, mut writer: W) -> u64
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let copied = match tokio::io::copy(&mut reader, &mut writer).await {
        Ok(n) => n,
        Err(e) => {
            debug!(stream, error = %e, "output relay stopped");
            0
        }
    };
    let _ = writer.flush().await;
    trace!(stream, bytes = copied, "output relay finished");
    copied
}

async fn join_all(drains: &mut JoinSet<u64>) {
    while let Some(res) = drains.join_next().await {
        if let Err(e) = res {
            debug!(error = %e, "output relay task failed");
        }
    }
}

fn launch_error(program: &str, source: io::Error) -> EcsExecPfError {
    EcsExecPfError::ProcessLaunch {
        program: program.to_string(),
        source,
    }
}

fn missing_pipe(stream: &str) -> io::Error {
    io::Error::other(format!("child {stream} was not captured"))
}
