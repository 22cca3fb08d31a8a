use std::ffi::OsString;
use std::io;
use std::process::{Command, Stdio};
use std::sync::Arc;

/// Result of the single liveness poll taken right after spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Running,
    Exited(Option<i32>),
}

/// Starts external opener processes.
pub trait Spawner: Send + Sync {
    fn spawn(&self, program: &str, args: &[OsString]) -> io::Result<ProcessState>;
}

pub type SharedSpawner = Arc<dyn Spawner>;

/// Fire-and-forget spawner: stdio is discarded and the child is never waited on.
#[derive(Debug, Default)]
pub struct ProcessSpawner;

impl ProcessSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl Spawner for ProcessSpawner {
    fn spawn(&self, program: &str, args: &[OsString]) -> io::Result<ProcessState> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        match child.try_wait()? {
            Some(status) => Ok(ProcessState::Exited(status.code())),
            None => Ok(ProcessState::Running),
        }
    }
}
