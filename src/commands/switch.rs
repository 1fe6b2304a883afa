use tracing::instrument;

use crate::App;
use crate::error::Result;
use crate::ops::git::GitOps;

impl<G: GitOps> App<G> {
    /// Check out `branch`, then print `git status`.
    ///
    /// The branch name is passed to git as-is. If checkout succeeds but status
    /// fails, the new branch stays checked out.
    #[instrument(skip(self, stdout))]
    pub async fn cmd_switch(&self, branch: &str, stdout: &mut impl std::io::Write) -> Result<()> {
        let output = self.execute(&["checkout", branch], stdout).await?;
        writeln!(stdout, "{}", output)?;

        let output = self.execute(&["status"], stdout).await?;
        writeln!(stdout, "{}", output)?;

        Ok(())
    }
}
