use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Host capabilities the detector and launcher depend on
pub trait ProcessEnv {
    /// Whether `name` resolves through the executable search path
    fn on_search_path(&self, name: &str) -> bool;

    /// Whether `path` exists and carries an execute permission
    fn is_executable_file(&self, path: &Path) -> bool;

    /// Start `program` without waiting for it, stdio routed to the null device
    fn spawn_detached(&self, program: &str, args: &[String]) -> io::Result<()>;
}

/// The real operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl ProcessEnv for SystemEnv {
    fn on_search_path(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }

    fn is_executable_file(&self, path: &Path) -> bool {
        let Ok(metadata) = std::fs::metadata(path) else {
            return false;
        };

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
        }

        #[cfg(not(unix))]
        {
            metadata.is_file()
        }
    }

    fn spawn_detached(&self, program: &str, args: &[String]) -> io::Result<()> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Own process group, so a Ctrl-C in the launching terminal leaves the browser alone
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let child = command.spawn()?;
        tracing::debug!("Spawned {} with pid {}", program, child.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, mode: u32) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn test_executable_file_detected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_script(temp_dir.path(), "browser", 0o755);

        assert!(SystemEnv.is_executable_file(&path));
    }

    #[test]
    #[cfg(unix)]
    fn test_non_executable_file_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_script(temp_dir.path(), "browser", 0o644);

        assert!(!SystemEnv.is_executable_file(&path));
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(!SystemEnv.is_executable_file(Path::new("/nonexistent/browser")));
    }

    #[test]
    fn test_directory_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();

        assert!(!SystemEnv.is_executable_file(temp_dir.path()));
    }

    #[test]
    fn test_spawn_missing_program_fails() {
        let result = SystemEnv.spawn_detached("/nonexistent/browser-binary", &[]);

        assert!(result.is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_spawn_script_succeeds() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_script(temp_dir.path(), "browser", 0o755);

        let result = SystemEnv.spawn_detached(path.to_str().unwrap(), &["https://example.com".into()]);

        assert!(result.is_ok());
    }
}
