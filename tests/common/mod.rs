//! Shared harness for `karmactl` integration tests.
//!
//! Provides an isolated working directory with a `karma.conf.js` and a
//! private `bin/` directory of fake `karma`/`node` scripts that log
//! their arguments, so full spawns can be exercised without a real
//! karma install.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    log_file: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("invocations.log");

        fs::write(work_dir.join("karma.conf.js"), "// test config\n")
            .expect("Failed to write karma.conf.js");

        Self { root, work_dir, bin_dir, log_file }
    }

    /// Install a fake executable that appends its arguments to the log
    /// and exits with the given code.
    pub fn install_fake(&self, name: &str, exit_code: i32) {
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"{}\"\nexit {}\n",
            self.log_file.to_string_lossy(),
            exit_code
        );
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write fake executable");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path).expect("metadata").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).expect("Failed to set permissions");
        }
    }

    /// Place the default local karma CLI entry script in the work dir.
    pub fn install_local_cli(&self) {
        let cli = self.work_dir.join("node_modules/karma-cli/bin/karma");
        fs::create_dir_all(cli.parent().expect("cli parent")).expect("Failed to create cli dirs");
        fs::write(&cli, "// karma cli\n").expect("Failed to write cli entry");
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Arguments the fake executables were invoked with, one line per call.
    pub fn invocation_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    /// A `karmactl` command rooted in the work dir, with PATH restricted
    /// to the fake bin dir.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("karmactl").expect("karmactl binary");
        cmd.current_dir(&self.work_dir);
        cmd.env("PATH", &self.bin_dir);
        cmd
    }
}
