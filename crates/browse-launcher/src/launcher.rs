use crate::{Error, ProcessEnv, Result};

/// Fire-and-forget process starter
pub struct Launcher<'e, E: ProcessEnv> {
    env: &'e E,
}

impl<'e, E: ProcessEnv> Launcher<'e, E> {
    pub fn new(env: &'e E) -> Self {
        Self { env }
    }

    /// Spawn `argv` detached. The child is never waited on.
    pub fn launch(&self, argv: &[String]) -> Result<()> {
        let Some((program, args)) = argv.split_first() else {
            return Err(Error::Launch {
                program: String::new(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line"),
            });
        };

        tracing::debug!("Launching {} {:?}", program, args);
        self.env
            .spawn_detached(program, args)
            .map_err(|source| Error::Launch {
                program: program.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeEnv;

    #[test]
    fn test_launch_spawns_full_argv() {
        let env = FakeEnv::default();
        let launcher = Launcher::new(&env);

        launcher
            .launch(&["firefox".to_string(), "https://example.com".to_string()])
            .unwrap();

        assert_eq!(
            *env.spawned.borrow(),
            vec![vec!["firefox".to_string(), "https://example.com".to_string()]]
        );
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        let env = FakeEnv::default().failing_spawn();
        let launcher = Launcher::new(&env);

        let err = launcher.launch(&["vivaldi".to_string()]).unwrap_err();

        assert!(matches!(err, Error::Launch { ref program, .. } if program == "vivaldi"));
        assert!(err.to_string().contains("No such file or directory"));
    }

    #[test]
    fn test_empty_argv_is_rejected() {
        let env = FakeEnv::default();
        let launcher = Launcher::new(&env);

        assert!(launcher.launch(&[]).is_err());
        assert!(env.spawned.borrow().is_empty());
    }
}
