//! Dump producers.
//!
//! The UI tree is read out of the game client by an external executable that
//! writes a JSON dump to a file. Locating the UI root takes minutes on the
//! first run; once a snapshot is parsed its root address is passed back so
//! later runs start from it.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use crate::parser::parse_file;
use crate::raw::NodeAddress;
use crate::types::UiTree;

use super::MonitorError;

/// Directory for dump files.
pub const DUMP_DIR: &str = "tmp";

/// Stable dump file name for a configuration.
///
/// Distinct configurations can run side by side without sharing a file.
pub fn dump_file_name(config_name: &str) -> PathBuf {
    let id = Uuid::new_v5(&Uuid::NAMESPACE_URL, config_name.as_bytes());
    Path::new(DUMP_DIR).join(format!("mem-read-{}.json", id))
}

/// Something that yields one fresh snapshot per call.
pub trait DumpSource {
    /// Produce and parse a fresh dump.
    fn read(&mut self) -> Result<UiTree, MonitorError>;

    /// File the latest dump was written to.
    fn output_file(&self) -> &Path;
}

/// Runs the dump producer executable.
#[derive(Debug, Clone)]
pub struct ProcessDump {
    executable: PathBuf,
    pid: u32,
    output_file: PathBuf,
    root_address: Option<NodeAddress>,
    max_attempts: u32,
    retry_delay: Duration,
}

impl ProcessDump {
    /// Create a producer for the given game client process.
    pub fn new(executable: impl Into<PathBuf>, pid: u32, output_file: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            pid,
            output_file: output_file.into(),
            root_address: None,
            max_attempts: 2,
            retry_delay: Duration::from_secs(1),
        }
    }

    /// Override the retry policy.
    pub fn with_retries(mut self, max_attempts: u32, retry_delay: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.retry_delay = retry_delay;
        self
    }

    /// Root address pinned from an earlier snapshot, if any.
    pub fn root_address(&self) -> Option<NodeAddress> {
        self.root_address
    }

    /// Arguments passed to the executable.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "read-memory-eve-online".to_string(),
            "--remove-other-dict-entries".to_string(),
            "--pid".to_string(),
            self.pid.to_string(),
            "--output-file".to_string(),
            self.output_file.display().to_string(),
        ];
        if let Some(root) = self.root_address {
            args.push("--root-address".to_string());
            args.push(root.to_string());
        }
        args
    }

    fn run_once(&self) -> Result<(), MonitorError> {
        let output = Command::new(&self.executable)
            .args(self.args())
            .output()
            .map_err(MonitorError::Spawn)?;

        if output.status.success() {
            Ok(())
        } else {
            Err(MonitorError::DumpFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl DumpSource for ProcessDump {
    fn read(&mut self) -> Result<UiTree, MonitorError> {
        if let Some(dir) = self.output_file.parent() {
            std::fs::create_dir_all(dir).map_err(|e| MonitorError::io(dir, e))?;
        }
        if self.root_address.is_none() {
            info!("Detecting UI tree root might take a few minutes...");
        }

        let mut attempt = 1;
        loop {
            match self.run_once() {
                Ok(()) => break,
                Err(e) if attempt < self.max_attempts => {
                    warn!(attempt = attempt, error = %e, "failed to read UI tree, retrying");
                    std::thread::sleep(self.retry_delay);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let tree = parse_file(&self.output_file)?;
        if self.root_address.is_none() {
            info!(root = %tree.root_address, "found UI tree root");
            self.root_address = Some(tree.root_address);
        }
        Ok(tree)
    }

    fn output_file(&self) -> &Path {
        &self.output_file
    }
}

/// Re-reads an existing dump file on every call.
///
/// For replaying a saved dump without a game client.
#[derive(Debug, Clone)]
pub struct FileDump {
    path: PathBuf,
}

impl FileDump {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DumpSource for FileDump {
    fn read(&mut self) -> Result<UiTree, MonitorError> {
        Ok(parse_file(&self.path)?)
    }

    fn output_file(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_file_name_is_stable() {
        let a = dump_file_name("ratting");
        assert_eq!(a, dump_file_name("ratting"));
        assert_ne!(a, dump_file_name("local"));
        assert!(a.starts_with(DUMP_DIR));
        assert!(a.to_string_lossy().ends_with(".json"));
    }

    #[test]
    fn test_args_pin_root_after_first_read() {
        let mut dump = ProcessDump::new("reader.exe", 4242, "tmp/out.json");
        let args = dump.args();
        assert!(args.contains(&"4242".to_string()));
        assert!(!args.contains(&"--root-address".to_string()));

        dump.root_address = Some(NodeAddress::new(99));
        let args = dump.args();
        assert_eq!(&args[args.len() - 2..], &["--root-address".to_string(), "99".to_string()]);
    }

    #[test]
    fn test_missing_executable() {
        let dir = std::env::temp_dir().join("eve-ui-parser-dump-test");
        let mut dump = ProcessDump::new("/nonexistent/reader.exe", 1, dir.join("out.json"))
            .with_retries(1, Duration::from_millis(0));
        assert!(matches!(dump.read(), Err(MonitorError::Spawn(_))));
        assert_eq!(dump.root_address(), None);
    }

    #[test]
    fn test_file_dump_missing_file() {
        let mut dump = FileDump::new("/nonexistent/dump.json");
        assert!(matches!(dump.read(), Err(MonitorError::Parse(_))));
    }
}
