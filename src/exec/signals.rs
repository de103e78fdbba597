// src/exec/signals.rs

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::debug;

/// Signals relayed to the child.
///
/// SIGKILL/SIGSTOP cannot be caught. SIGCHLD is left alone because the
/// runtime relies on it to reap children.
#[cfg(unix)]
pub const FORWARDED_SIGNALS: &[libc::c_int] = &[
    libc::SIGHUP,
    libc::SIGINT,
    libc::SIGQUIT,
    libc::SIGTERM,
    libc::SIGUSR1,
    libc::SIGUSR2,
    libc::SIGWINCH,
    libc::SIGALRM,
    libc::SIGCONT,
];

#[cfg(not(unix))]
pub const FORWARDED_SIGNALS: &[i32] = &[];

/// Signals that, once the child is gone, mean "stop waiting and exit".
#[cfg(unix)]
pub const STOP_SIGNALS: &[libc::c_int] = &[libc::SIGHUP, libc::SIGINT, libc::SIGTERM];

#[cfg(not(unix))]
pub const STOP_SIGNALS: &[i32] = &[];

/// Signal subscription scoped to one supervised process.
///
/// [`SignalRelay::install`] subscribes before the child exists so nothing
/// slips through between spawn and forwarding; [`SignalRelay::forward_to`]
/// then starts one forwarding loop per signal.
///
/// After [`SignalRelay::child_exited`] nothing is sent to the old pid any
/// more (it may already belong to another process). Stop signals received
/// from then on are handed to [`SignalRelay::stop_requested`] instead, since
/// the runtime's handler has replaced their default action. Dropping the
/// relay aborts the loops.
pub struct SignalRelay {
    #[cfg(unix)]
    pending: Vec<(libc::c_int, tokio::signal::unix::Signal)>,
    tasks: JoinSet<()>,
    child_running: Arc<AtomicBool>,
    stop_tx: mpsc::UnboundedSender<i32>,
    stop_rx: mpsc::UnboundedReceiver<i32>,
}

impl SignalRelay {
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        let mut pending = Vec::with_capacity(FORWARDED_SIGNALS.len());
        for &signo in FORWARDED_SIGNALS {
            pending.push((signo, signal(SignalKind::from_raw(signo))?));
        }

        let (stop_tx, stop_rx) = mpsc::unbounded_channel();
        Ok(Self {
            pending,
            tasks: JoinSet::new(),
            child_running: Arc::new(AtomicBool::new(true)),
            stop_tx,
            stop_rx,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::unbounded_channel();
        Ok(Self {
            tasks: JoinSet::new(),
            child_running: Arc::new(AtomicBool::new(true)),
            stop_tx,
            stop_rx,
        })
    }

    /// Start forwarding to `pid`. Calling it twice is a no-op.
    #[cfg(unix)]
    pub fn forward_to(&mut self, pid: u32) {
        for (signo, mut stream) in self.pending.drain(..) {
            let child_running = Arc::clone(&self.child_running);
            let stop_tx = self.stop_tx.clone();
            self.tasks.spawn(async move {
                while stream.recv().await.is_some() {
                    if child_running.load(Ordering::SeqCst) {
                        forward(pid, signo);
                    } else if STOP_SIGNALS.contains(&signo) {
                        let _ = stop_tx.send(signo);
                    } else {
                        debug!(pid, signal = signo, "child already exited; signal dropped");
                    }
                }
            });
        }
        debug!(pid, signals = self.tasks.len(), "signal relay active");
    }

    #[cfg(not(unix))]
    pub fn forward_to(&mut self, pid: u32) {
        debug!(pid, "signal forwarding not supported on this platform");
    }

    /// Call once `wait` has reaped the child.
    pub fn child_exited(&self) {
        self.child_running.store(false, Ordering::SeqCst);
    }

    /// Resolves with the first stop signal received after
    /// [`SignalRelay::child_exited`].
    pub async fn stop_requested(&mut self) -> i32 {
        match self.stop_rx.recv().await {
            Some(signo) => signo,
            // The relay holds a sender itself, so the channel never closes.
            None => std::future::pending().await,
        }
    }
}

/// Delivery failures (e.g. ESRCH for a child that is exiting) are expected
/// and only logged.
#[cfg(unix)]
fn forward(pid: u32, signo: libc::c_int) {
    // SAFETY: kill(2) takes plain integers and touches no memory of ours.
    let rc = unsafe { libc::kill(pid as libc::pid_t, signo) };
    if rc == 0 {
        debug!(pid, signal = signo, "forwarded signal to child");
    } else {
        debug!(
            pid,
            signal = signo,
            error = %io::Error::last_os_error(),
            "could not forward signal to child"
        );
    }
}
