use tracing::debug;
use tracing::warn;

use crate::config::Config;
use crate::error::Result;
use crate::ops::git::GitOps;

pub struct App<G: GitOps> {
    pub config: Config,
    pub git: G,
}

impl<G: GitOps> App<G> {
    pub fn new(config: Config, git: G) -> Self {
        Self { config, git }
    }
}

/// Shared helper methods for App
impl<G: GitOps> App<G> {
    /// Check that git can be found, reporting the lookup on the way.
    ///
    /// A failed lookup is printed to `stderr` and yields `false` rather than an error.
    pub(crate) fn is_available(
        &self,
        stdout: &mut impl std::io::Write,
        stderr: &mut impl std::io::Write,
    ) -> Result<bool> {
        match self.git.locate() {
            Ok(path) => {
                debug!(program = %self.config.program, path = %path.display(), "located");
                if self.config.verbose {
                    writeln!(
                        stdout,
                        "[{}] is located at [{}]",
                        self.config.program,
                        path.display()
                    )?;
                }
                Ok(true)
            }
            Err(err) => {
                warn!(program = %self.config.program, "executable lookup failed");
                writeln!(stderr, "{}", err)?;
                Ok(false)
            }
        }
    }

    /// Run git, echoing the command first in verbose mode.
    pub(crate) async fn execute(
        &self,
        args: &[&str],
        stdout: &mut impl std::io::Write,
    ) -> Result<String> {
        if self.config.verbose {
            writeln!(stdout, " >> {} [{}]", self.config.program, args.join(" "))?;
        }
        self.git
            .run(args.iter().map(|arg| arg.to_string()).collect())
            .await
    }
}
