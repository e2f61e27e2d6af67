use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper struct to run deskhub commands against an isolated root directory
pub struct DeskTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

#[allow(dead_code)]
impl DeskTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        DeskTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_deskhub").to_string(),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("DESKHUB_ROOT", self.temp_dir.path().join(".deskhub"))
            .output()
            .expect("Failed to execute deskhub command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Run a command expecting JSON on stdout and parse it.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout).unwrap_or_else(|e| {
            panic!("Command {args:?} did not print valid JSON: {e}\nstdout: {stdout}")
        })
    }

    pub fn login(&self, email: &str) {
        self.run_success(&["login", email]);
    }
}
