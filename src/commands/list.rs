use tracing::info;
use tracing::instrument;

use crate::App;
use crate::branch::parse_branch_list;
use crate::error::Result;
use crate::ops::git::GitOps;

impl<G: GitOps> App<G> {
    /// List branch names in the order git prints them, narrowed by the configured filter.
    ///
    /// If git cannot be found the list is empty and nothing is run.
    #[instrument(skip_all, fields(all = self.config.all))]
    pub async fn cmd_list(
        &self,
        stdout: &mut impl std::io::Write,
        stderr: &mut impl std::io::Write,
    ) -> Result<Vec<String>> {
        if !self.is_available(stdout, stderr)? {
            return Ok(vec![]);
        }

        let args: &[&str] = if self.config.all {
            &["branch", "--all"]
        } else {
            &["branch"]
        };
        let output = self.execute(args, stdout).await?;
        let branches = parse_branch_list(&output);

        let branches = match &self.config.filter {
            Some(filter) => filter.apply(branches),
            None => branches,
        };
        info!(count = branches.len(), "listed branches");
        Ok(branches)
    }
}
