//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use commitclock_config::Config;
use commitclock_core::{CoreContext, CoreModule};
use commitclock_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{publish::PublishCommand, show::ShowCommand};
use crate::Result;

mod publish;
mod show;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Publish(PublishCommand),
    Show(ShowCommand),
}

impl SubCommand {
    pub fn requires_gist(&self) -> bool {
        matches!(self, Self::Publish(_))
    }
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Publish(sub) => sub.execute(ctx).await,
            Self::Show(sub) => sub.execute(ctx).await,
        }
    }
}
