use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Check {
    /// Usernames whose session layout should be validated
    #[arg(short, long = "user", required = true)]
    pub users: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{failed} of {total} users failed:\n{report}")]
    Failed {
        failed: usize,
        total: usize,
        report: String,
    },
}

impl crate::cli::op::Op for Check {
    type Error = CheckError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut lines = Vec::with_capacity(self.users.len());
        let mut failed = 0;

        for user in &self.users {
            let session = ctx.session(user);
            let layout = session.context().and_then(|context| {
                let physical = session.resolve_file("/")?;
                let shown = session.display_path("/")?;
                Ok((context, physical, shown))
            });
            match layout {
                Ok((context, physical, shown)) => {
                    lines.push(format!(
                        "{}: OK (root {} shown as {}, filesystem {})",
                        user,
                        physical,
                        shown,
                        context.filesystem().describe()
                    ));
                }
                Err(e) => {
                    tracing::warn!("session layout for {} is invalid: {}", user, e);
                    failed += 1;
                    lines.push(format!("{}: {}", user, e));
                }
            }
        }

        let report = lines.join("\n");
        if failed > 0 {
            return Err(CheckError::Failed {
                failed,
                total: self.users.len(),
                report,
            });
        }
        Ok(report)
    }
}
