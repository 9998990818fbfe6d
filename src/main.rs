use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::Path;

use scenario_deck::cli::{self, Command, GenerateArgs};
use scenario_deck::config::Config;
use scenario_deck::credential::{ChainedCredentials, CredentialProvider, EnvCredentials, SessionStore};
use scenario_deck::{log, provider, ux, CancelToken, Engine, GenerationRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    log::init(args.verbose);

    let mut cfg = Config::load(args.config.as_deref().map(Path::new)).context("failed to load config")?;
    if let Some(model) = &args.model {
        cfg.model = model.clone();
    }
    if let Some(secs) = args.timeout_secs {
        cfg.timeout_secs = secs;
    }

    let opts = match args.command {
        Some(Command::Themes(t)) => {
            println!("{}", ux::render_themes(t.format)?);
            return Ok(());
        }
        Some(Command::Generate(g)) => g,
        None => GenerateArgs::default(),
    };

    let env = EnvCredentials::default();
    let session = SessionStore::new();
    if ChainedCredentials::new().then(&env).then(&session).credential().is_none() && !opts.no_prompt {
        if let Some(key) = ux::prompt_credential() {
            session.store(&key);
        }
    }
    let credential = ChainedCredentials::new().then(&env).then(&session).credential();

    let mut req = GenerationRequest::new(opts.theme.key(), opts.count.get());
    req.custom_text = opts.custom.clone();
    req.credential = credential;

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let engine = Engine::new(provider::make_provider(&cfg), &cfg);
    let pb = ux::spinner("Dealing your cards...");
    let outcome = engine.generate(&req, &cancel).await;
    pb.finish_and_clear();

    match outcome {
        Ok(result) => {
            println!("{}", ux::render(&result, opts.format)?);
            Ok(())
        }
        Err(e) if e.is_missing_credential() => Err(anyhow!(
            "{} Set GEMINI_API_KEY or run without --no-prompt to enter one.",
            e.user_message()
        )),
        // Detail was already logged by the engine.
        Err(e) => Err(anyhow!(e.user_message())),
    }
}
