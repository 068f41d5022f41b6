use clap::Args;

use common::error::JailError;

#[derive(Args, Debug, Clone)]
pub struct Resolve {
    /// Authenticated username to resolve for
    #[arg(short, long)]
    pub user: String,

    /// Client paths, as they would arrive over SFTP
    #[arg(required = true)]
    pub paths: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("{user}: {source}")]
    Session { user: String, source: JailError },
}

impl crate::cli::op::Op for Resolve {
    type Error = ResolveError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = ctx.session(&self.user);
        let session_error = |source| ResolveError::Session {
            user: self.user.clone(),
            source,
        };

        let mut lines = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            let physical = session.resolve_file(path).map_err(session_error)?;
            let display = session.display_path(path).map_err(session_error)?;
            lines.push(format!("{:?} -> {} (shown as {})", path, physical, display));
        }

        Ok(lines.join("\n"))
    }
}
