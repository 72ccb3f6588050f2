use std::sync::Arc;

use clap::Parser;
use commitclock_config::Config;
use commitclock_core::CoreModule;
use commitclock_ghapi_github::GithubApiService;
use tokio::sync::RwLock;

use crate::commands::{Command, CommandContext, SubCommand};

/// Publish the time of day you commit at to a GitHub gist
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

impl Args {
    pub fn requires_gist(&self) -> bool {
        self.cmd.requires_gist()
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> anyhow::Result<()> {
        let ctx = CommandContext {
            config: config.clone(),
            core_module: CoreModule::builder().build(),
            api_service: Box::new(GithubApiService::new(config)),
            writer: Arc::new(RwLock::new(std::io::stdout())),
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(Self::parse_args_async(args, ctx))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> anyhow::Result<()> {
        args.cmd.execute(ctx).await
    }
}
