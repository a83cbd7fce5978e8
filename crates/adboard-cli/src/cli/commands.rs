//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about stdout and stderr
//! - Installs a logger
//! - Handles argument parsing
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory, load config, build the API
//! 3. **Dispatch**: Map each subcommand onto one API call
//! 4. **Output**: Print the result as pretty JSON

use super::setup::{authorization, raw_flag, Cli, Commands};
use adboard::api::{
    AdboardApi, BrowseQuery, ByStateQuery, CreateForm, DetailQuery, ListQuery,
};
use adboard::error::Result;
use adboard::init::initialize;
use adboard::store::DataStore;
use clap::Parser;
use log::debug;
use serde::Serialize;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = initialize(cli.data)?;
    debug!("data directory: {}", ctx.data_dir.display());

    let output = dispatch(&ctx.api, cli.command)?;
    println!("{}", output);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn dispatch<S: DataStore>(api: &AdboardApi<S>, command: Commands) -> Result<String> {
    match command {
        Commands::List {
            q,
            state,
            cat,
            sort,
            limit,
            page,
        } => {
            let query = ListQuery {
                q,
                state,
                cat,
                sort,
                limit,
                page,
            };
            render(&api.list_ads(&query)?)
        }
        Commands::Item { id, other } => {
            let query = DetailQuery {
                id: Some(id),
                other: raw_flag(other),
            };
            render(&api.get_ad(&query)?)
        }
        Commands::ByState { state } => render(&api.ads_by_state(&ByStateQuery { state })?),
        Commands::Browse { q, state, cat } => {
            render(&api.browse_ads(&BrowseQuery { q, state, cat })?)
        }
        Commands::Add {
            title,
            price,
            negotiable,
            desc,
            cat,
            images,
            token,
        } => {
            let form = CreateForm {
                title,
                price,
                priceng: raw_flag(negotiable),
                desc,
                cat,
            };
            let header = authorization(token.as_deref());
            render(&api.create_ad(form, images, header.as_deref())?)
        }
        Commands::Me { token } => {
            let header = authorization(token.as_deref());
            render(&api.account(header.as_deref())?)
        }
        Commands::Signin { email, password } => render(&api.sign_in(&email, &password)?),
    }
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
