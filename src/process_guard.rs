//! Child process lifecycle management
//!
//! The packaging tool runs as a child process; if seqinstall is killed while
//! a tool is mid-install, the child must not be left orphaned and the
//! original working directory must still be restored. Children are spawned
//! into their own process groups and tracked in a global registry so the
//! signal path can terminate the whole tree before exiting.

use crate::workdir;
use nix::libc;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

static CHILD_REGISTRY: OnceLock<Arc<Mutex<ChildRegistry>>> = OnceLock::new();

/// Registry of running packaging-tool child PIDs.
#[derive(Debug, Default)]
pub struct ChildRegistry {
    pids: HashSet<u32>,
    /// Guards against double-cleanup when Drop and a signal race.
    cleanup_initiated: bool,
}

impl ChildRegistry {
    /// Get or create the global child registry
    pub fn global() -> Arc<Mutex<ChildRegistry>> {
        CHILD_REGISTRY
            .get_or_init(|| Arc::new(Mutex::new(ChildRegistry::default())))
            .clone()
    }

    /// Register a spawned tool process
    pub fn register(&mut self, pid: u32) {
        self.pids.insert(pid);
        log::debug!("Registered tool process PID {}", pid);
    }

    /// Unregister a tool process after it exits normally
    pub fn unregister(&mut self, pid: u32) {
        self.pids.remove(&pid);
        log::debug!("Unregistered tool process PID {}", pid);
    }

    /// Number of tracked children
    pub fn count(&self) -> usize {
        self.pids.len()
    }

    /// Terminate all tracked children: SIGTERM to each process group, wait up
    /// to `grace_period`, then SIGKILL whatever survived.
    pub fn terminate_all(&mut self, grace_period: Duration) {
        if self.cleanup_initiated {
            log::debug!("Cleanup already initiated, skipping");
            return;
        }
        self.cleanup_initiated = true;

        if self.pids.is_empty() {
            return;
        }

        log::info!("Terminating {} tool process(es)...", self.pids.len());

        let pids: Vec<u32> = self.pids.iter().copied().collect();
        for &pid in &pids {
            // Group signal first so the tool's own children get it too
            if let Err(e) = send_signal_to_group(pid, Signal::SIGTERM) {
                log::warn!("Failed to SIGTERM process group {}: {}", pid, e);
                if let Err(e2) = send_signal(pid, Signal::SIGTERM) {
                    log::warn!("Failed to SIGTERM PID {}: {}", pid, e2);
                }
            }
        }

        let start = Instant::now();
        while start.elapsed() < grace_period {
            if pids.iter().all(|&pid| !is_process_alive(pid)) {
                log::info!("All tool processes terminated gracefully");
                self.pids.clear();
                return;
            }
            std::thread::sleep(Duration::from_millis(100));
        }

        for &pid in &pids {
            if is_process_alive(pid) {
                log::warn!("Process group {} did not terminate, sending SIGKILL", pid);
                if send_signal_to_group(pid, Signal::SIGKILL).is_err() {
                    let _ = send_signal(pid, Signal::SIGKILL);
                }
            }
        }

        self.pids.clear();
    }
}

fn send_signal(pid: u32, signal: Signal) -> Result<(), nix::Error> {
    signal::kill(Pid::from_raw(pid as i32), signal)
}

/// Negative PID addresses the whole process group.
fn send_signal_to_group(pgid: u32, signal: Signal) -> Result<(), nix::Error> {
    signal::kill(Pid::from_raw(-(pgid as i32)), signal)
}

/// Alive means signalable and not a zombie.
fn is_process_alive(pid: u32) -> bool {
    if signal::kill(Pid::from_raw(pid as i32), None).is_err() {
        return false;
    }

    // Field 3 of /proc/pid/stat is the state; Z and X are not "alive"
    if let Ok(stat) = std::fs::read_to_string(format!("/proc/{}/stat", pid)) {
        let fields: Vec<&str> = stat.split_whitespace().collect();
        if fields.len() > 2 {
            return !matches!(fields[2], "Z" | "X");
        }
    }

    true
}

/// RAII guard held by `main` so tool processes are reaped on any exit path.
pub struct ProcessGuard {
    registry: Arc<Mutex<ChildRegistry>>,
}

impl ProcessGuard {
    pub fn new() -> Self {
        Self {
            registry: ChildRegistry::global(),
        }
    }
}

impl Default for ProcessGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProcessGuard {
    fn drop(&mut self) {
        if let Ok(mut registry) = self.registry.lock() {
            registry.terminate_all(Duration::from_secs(5));
        }
    }
}

/// Install handlers for SIGINT, SIGTERM and SIGHUP. On any of them:
/// terminate tracked children, restore the starting working directory, exit
/// with `128 + signal`. Call once at program start.
pub fn init_signal_handlers() -> Result<(), std::io::Error> {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::thread;

    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;

    thread::spawn(move || {
        for sig in signals.forever() {
            let name = match sig {
                SIGINT => "SIGINT",
                SIGTERM => "SIGTERM",
                SIGHUP => "SIGHUP",
                _ => "UNKNOWN",
            };
            log::info!("Received {}, cleaning up...", name);

            if let Ok(mut registry) = ChildRegistry::global().lock() {
                registry.terminate_all(Duration::from_secs(3));
            }

            // Same guarantee as the normal exit path
            workdir::restore_original_dir();

            std::process::exit(128 + sig);
        }
    });

    Ok(())
}

/// Extension trait putting a child in its own process group so the whole
/// tool process tree can be signalled at once.
pub trait CommandProcessGroup {
    fn in_new_process_group(&mut self) -> &mut Self;
}

impl CommandProcessGroup for std::process::Command {
    fn in_new_process_group(&mut self) -> &mut Self {
        use std::os::unix::process::CommandExt;
        unsafe {
            self.pre_exec(|| {
                // New group with PGID = child PID
                nix::unistd::setpgid(Pid::from_raw(0), Pid::from_raw(0))
                    .map_err(std::io::Error::other)?;

                // Child dies with the parent, so a crash cannot leave an
                // install running unattended
                if libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM) == -1 {
                    return Err(std::io::Error::last_os_error());
                }

                Ok(())
            });
        }
        self
    }
}
