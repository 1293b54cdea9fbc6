//! External command invocation
//!
//! This module runs the `-exec` target once per matched file: one child
//! process, exactly one file-path argument, awaited synchronously.

use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::errors::{FindError, FindResult};

/// Command executed for every matched file
#[derive(Debug, Clone)]
pub struct ExecCommand {
    program: PathBuf,
}

impl ExecCommand {
    /// Create a new ExecCommand, checking that the program exists
    pub fn new<P: AsRef<Path>>(program: P) -> FindResult<Self> {
        let program = program.as_ref();
        if !program.exists() {
            return Err(FindError::ExecutableNotFound(program.to_path_buf()));
        }
        Ok(Self {
            program: program.to_path_buf(),
        })
    }

    /// Path of the program to run
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run the program with the matched file path as its only argument
    ///
    /// Blocks until the child terminates. The child inherits the parent's
    /// environment and standard streams. A nonzero exit code of the child
    /// is not an invocation error; a failed spawn or a child killed by a
    /// signal is.
    pub fn invoke(&self, file: &Path) -> FindResult<()> {
        debug!("Invoking {} {}", self.program.display(), file.display());

        let status = Command::new(&self.program)
            .arg(file)
            .status()
            .map_err(|source| FindError::SpawnFailure {
                program: self.program.clone(),
                source,
            })?;

        if let Some(signal) = status.signal() {
            return Err(FindError::ChildSignaled(signal));
        }

        debug!("Child exited with status {:?}", status.code());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh").unwrap();
        writeln!(file, "{}", body).unwrap();
        drop(file);

        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn test_missing_program_rejected() {
        let result = ExecCommand::new("/no/such/program");
        assert!(matches!(result, Err(FindError::ExecutableNotFound(_))));
    }

    #[test]
    #[cfg(unix)]
    fn test_invoke_success() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(&temp_dir, "ok.sh", "exit 0");

        let command = ExecCommand::new(&script).unwrap();
        assert!(command.invoke(Path::new("/tmp/some-file")).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_is_not_an_error() {
        // 子进程正常退出即视为调用成功，退出码不影响遍历
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(&temp_dir, "fail.sh", "exit 3");

        let command = ExecCommand::new(&script).unwrap();
        assert!(command.invoke(Path::new("/tmp/some-file")).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_signaled_child_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(&temp_dir, "killed.sh", "kill -KILL $$");

        let command = ExecCommand::new(&script).unwrap();
        let result = command.invoke(Path::new("/tmp/some-file"));
        assert!(matches!(result, Err(FindError::ChildSignaled(9))));
    }

    #[test]
    #[cfg(unix)]
    fn test_spawn_failure_on_non_executable() {
        // 目标存在但不可执行时报告启动失败
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plain.txt");
        File::create(&path).unwrap().write_all(b"not a program").unwrap();

        let command = ExecCommand::new(&path).unwrap();
        let result = command.invoke(Path::new("/tmp/some-file"));
        assert!(matches!(result, Err(FindError::SpawnFailure { .. })));
    }

    #[test]
    #[cfg(unix)]
    fn test_invoke_passes_single_argument() {
        // 子进程收到且仅收到一个参数：匹配文件的完整路径
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("args.log");
        let script = write_script(
            &temp_dir,
            "log.sh",
            &format!("echo \"$#:$1\" >> {}", log_path.display()),
        );

        let command = ExecCommand::new(&script).unwrap();
        command.invoke(Path::new("/tmp/matched-file")).unwrap();

        let logged = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(logged.trim(), "1:/tmp/matched-file");
    }
}
