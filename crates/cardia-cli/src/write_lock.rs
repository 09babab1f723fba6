use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use cardia_config::PROJECT_DIR;
use cardia_db::Scenario;

const LOCK_RETRY_DELAY: Duration = Duration::from_millis(250);

/// One lock file per store, so registry writes never wait on clinical ones.
fn lock_path(project_root: &Path, scenario: Scenario) -> PathBuf {
    project_root
        .join(PROJECT_DIR)
        .join(format!("{}.lock", scenario.as_str()))
}

/// Process recorded in a lock file: pid on the first line, command on the second.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Holder {
    pid: u32,
    command: String,
}

impl Holder {
    fn current(command: &str) -> Self {
        Self {
            pid: std::process::id(),
            command: command.to_owned(),
        }
    }

    fn parse(contents: &str) -> Option<Self> {
        let mut lines = contents.lines();
        let pid = lines.next()?.trim().parse().ok()?;
        let command = lines.next().unwrap_or_default().trim().to_owned();
        Some(Self { pid, command })
    }

    fn render(&self) -> String {
        format!("{}\n{}\n", self.pid, self.command)
    }

    fn is_alive(&self) -> bool {
        if self.pid == std::process::id() {
            return true;
        }
        std::process::Command::new("kill")
            .arg("-0")
            .arg(self.pid.to_string())
            .stderr(std::process::Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }
}

/// Locks held for one command. Every lock file is removed on drop.
#[derive(Debug)]
pub struct StoreLocks {
    paths: Vec<PathBuf>,
}

impl Drop for StoreLocks {
    fn drop(&mut self) {
        for path in &self.paths {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[derive(Debug)]
enum Attempt {
    Acquired,
    Busy(Holder),
    Stale(Holder),
    Unreadable,
}

fn try_lock(path: &Path, me: &Holder) -> Attempt {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match OpenOptions::new().create_new(true).write(true).open(path) {
        Ok(mut file) => {
            let _ = file.write_all(me.render().as_bytes());
            Attempt::Acquired
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            match std::fs::read_to_string(path).ok().as_deref().and_then(Holder::parse) {
                Some(holder) if holder.is_alive() => Attempt::Busy(holder),
                Some(holder) => Attempt::Stale(holder),
                None => Attempt::Unreadable,
            }
        }
        Err(_) => Attempt::Unreadable,
    }
}

async fn wait_for(
    path: &Path,
    scenario: Scenario,
    me: &Holder,
    timeout: Duration,
) -> anyhow::Result<()> {
    let started = Instant::now();
    loop {
        match try_lock(path, me) {
            Attempt::Acquired => return Ok(()),
            Attempt::Stale(holder) => {
                tracing::warn!(
                    store = %scenario,
                    pid = holder.pid,
                    command = %holder.command,
                    "removing lock left by a dead process"
                );
                let _ = std::fs::remove_file(path);
                continue;
            }
            Attempt::Busy(holder) => {
                if started.elapsed() >= timeout {
                    anyhow::bail!(
                        "the {scenario} store is locked by `cardia {}` (pid {}); try again after it finishes",
                        holder.command,
                        holder.pid
                    );
                }
                tracing::debug!(store = %scenario, pid = holder.pid, "waiting for store lock");
            }
            Attempt::Unreadable => {
                if started.elapsed() >= timeout {
                    anyhow::bail!(
                        "could not lock the {scenario} store at {}; remove the file if no cardia process is running",
                        path.display()
                    );
                }
            }
        }
        tokio::time::sleep(LOCK_RETRY_DELAY).await;
    }
}

/// Lock the stores a write command touches, in a fixed order.
///
/// # Errors
///
/// Fails when another live `cardia` process keeps a store locked past `timeout`.
pub async fn acquire(
    project_root: &Path,
    scopes: &[Scenario],
    command: &str,
    timeout: Duration,
) -> anyhow::Result<StoreLocks> {
    let mut ordered = scopes.to_vec();
    ordered.sort_by_key(|scenario| scenario.as_str());
    ordered.dedup();

    let me = Holder::current(command);
    let mut locks = StoreLocks { paths: Vec::new() };
    for scenario in ordered {
        let path = lock_path(project_root, scenario);
        wait_for(&path, scenario, &me, timeout).await?;
        locks.paths.push(path);
    }
    Ok(locks)
}
