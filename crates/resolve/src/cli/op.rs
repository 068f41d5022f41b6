use std::error::Error;
use std::path::Path;

use common::config::JailConfig;
use common::resolver::Resolvers;
use common::session::SessionHandle;
use common::subsystem::JailedSubsystem;

use crate::start_error::StartError;

#[derive(Debug, Clone)]
pub struct OpContext {
    /// Resolvers built from the loaded configuration
    pub resolvers: Resolvers,
}

impl OpContext {
    /// Load the configuration file and build resolvers from it
    pub fn load(config_path: &Path) -> Result<Self, StartError> {
        let config = JailConfig::load(config_path).map_err(|e| {
            StartError::new(
                format!("Failed to load configuration from {}", config_path.display()),
                e,
            )
        })?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &JailConfig) -> Self {
        Self {
            resolvers: Resolvers::from_config(config),
        }
    }

    /// Open a session for `username`, as the SFTP server would after login
    pub fn session(&self, username: &str) -> JailedSubsystem {
        JailedSubsystem::new(SessionHandle::new(username), self.resolvers.clone())
    }
}

pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::cli::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        impl $crate::cli::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            fn execute(&self, ctx: &$crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx)
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
