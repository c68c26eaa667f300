use crate::ProcessEnv;
use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Scripted host: a fixed set of commands on PATH and executable files on disk
#[derive(Default)]
pub struct FakeEnv {
    on_path: HashSet<String>,
    files: HashSet<String>,
    fail_spawn: bool,
    pub spawned: RefCell<Vec<Vec<String>>>,
}

impl FakeEnv {
    pub fn with_commands(commands: &[&str]) -> Self {
        Self {
            on_path: commands.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, path: &str) -> Self {
        self.files.insert(path.to_string());
        self
    }

    pub fn failing_spawn(mut self) -> Self {
        self.fail_spawn = true;
        self
    }
}

impl ProcessEnv for FakeEnv {
    fn on_search_path(&self, name: &str) -> bool {
        self.on_path.contains(name)
    }

    fn is_executable_file(&self, path: &Path) -> bool {
        path.to_str().is_some_and(|p| self.files.contains(p))
    }

    fn spawn_detached(&self, program: &str, args: &[String]) -> io::Result<()> {
        if self.fail_spawn {
            return Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"));
        }
        let mut argv = vec![program.to_string()];
        argv.extend(args.iter().cloned());
        self.spawned.borrow_mut().push(argv);
        Ok(())
    }
}
