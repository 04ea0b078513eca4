use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use gacha_reveal::api::{HttpShopClient, Profile};
use gacha_reveal::config::Config;
use gacha_reveal::logging::init_tracing;
use gacha_reveal::profile::ProfileCache;
use gacha_reveal::ui::acquisition::{AcquisitionPhase, AcquisitionStore};
use gacha_reveal::ui::flow::{FlowController, FlowView, GachaMarker, Navigator};
use gacha_reveal::ui::lifetime::ScreenLifetime;

/// Spend currency on one random reward and reveal it.
#[derive(Debug, Parser)]
#[command(name = "gacha-reveal", version)]
struct Args {
    /// Path to config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the service base URL.
    #[arg(long)]
    base_url: Option<String>,
}

/// Navigator for a one-shot terminal session: there is no shop screen to
/// return to, so transitions are only logged.
struct LogNavigator;

impl Navigator for LogNavigator {
    fn mark_transition(&self, marker: GachaMarker) {
        tracing::info!(marker = ?marker, "Transition marker recorded");
    }

    fn leave_reveal_screen(&self) {
        tracing::info!("Returning to shop");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let path = args.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path).context("loading configuration")?;
    if let Some(base_url) = args.base_url {
        config.service.base_url = base_url;
        config.validate().context("validating --base-url")?;
    }

    let client = Arc::new(HttpShopClient::new(config.service.clone())?);
    tracing::info!(base_url = %client.base_url(), "Entering gacha screen");

    let profiles = ProfileCache::new();
    let lifetime = ScreenLifetime::new();
    let store = AcquisitionStore::new(client.clone(), lifetime.clone())
        .with_reveal_delay(config.flow.reveal_delay());
    let controller = FlowController::new(
        store,
        client,
        Arc::new(profiles.clone()),
        Arc::new(LogNavigator),
    )
    .with_profile_retries(config.flow.profile_max_retries);

    tokio::select! {
        _ = controller.mount() => {}
        _ = tokio::signal::ctrl_c() => {
            controller.unmount();
            tracing::info!("Interrupted, leaving screen");
            return Ok(());
        }
    }

    print_view(&controller.view(), profiles.get());
    controller.back();
    controller.unmount();
    Ok(())
}

fn print_view(view: &FlowView, profile: Option<Profile>) {
    let Some(card) = view.card() else {
        if view.phase == AcquisitionPhase::Failed {
            println!("The draw failed. No reward was granted.");
        }
        return;
    };

    println!("{} ({})", card.heading.label, card.heading.color.hex());
    println!("  {}", card.name);
    if !card.image.is_empty() {
        println!("  image: {}", card.image);
    }
    if card.already_owned {
        println!("  already in your collection");
    }
    if let Some(profile) = profile {
        let owner = profile.username.or(profile.name).unwrap_or_default();
        println!("{} balance: {}", owner, profile.balance);
    }
}
