use tracing::info;
use tracing::instrument;

use crate::App;
use crate::branch::select;
use crate::branch::write_branch_list;
use crate::error::Result;
use crate::ops::git::GitOps;
use crate::prompt::read_index;

impl<G: GitOps> App<G> {
    /// Interactively pick a branch and check it out.
    ///
    /// 1. List branches (filtered if configured) and print them with indices.
    /// 2. Read the target index from `stdin`.
    /// 3. Check out the chosen branch and print `git status`.
    #[instrument(skip_all)]
    pub async fn cmd_select(
        &self,
        stdin: &mut impl std::io::BufRead,
        stdout: &mut impl std::io::Write,
        stderr: &mut impl std::io::Write,
    ) -> Result<()> {
        if let Some(filter) = &self.config.filter {
            writeln!(stdout, " w/ filter [{}]", filter.as_str())?;
        }

        let branches = self.cmd_list(stdout, stderr).await?;
        write_branch_list(&branches, stdout)?;

        let index = read_index(stdin, stdout)?;
        writeln!(stdout, "index is {}", index)?;

        let branch = select(&branches, index)?;
        info!(index, branch, "selected branch");
        self.cmd_switch(branch, stdout).await
    }
}
