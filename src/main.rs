// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Comunidade Local Ativa bootstrap.
//!
//! Restores the local session, resolves the device position and logs the
//! user's standing and the businesses nearby.

use anyhow::Context;
use comunidade_ativa::{
    config::Config,
    db::FileStore,
    services::{
        geolocation::locate_or_default, BusinessCatalog, Registration, Session, StaticGeolocation,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(store = %config.store_path.display(), "Starting Comunidade Local Ativa");

    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading business catalog");
            BusinessCatalog::load_from_file(path).context("Failed to load business catalog")?
        }
        None => BusinessCatalog::demo(),
    };

    // One-shot position lookup; falls back to the default location.
    let provider = StaticGeolocation::new(config.home_location);
    let location = locate_or_default(&provider, config.geolocation_timeout).await;

    let mut session = Session::new(FileStore::new(&config.store_path));

    let user = match session.bootstrap()? {
        Some(snapshot) => snapshot.user,
        None => match &config.demo_user {
            Some(demo) => {
                let registration = Registration::new(&demo.name, &demo.email, "demo")
                    .with_location(location);
                session.register(registration)?
            }
            None => {
                tracing::info!("No session stored; registration required");
                return Ok(());
            }
        },
    };

    let progress = session.progress()?;
    tracing::info!(
        user = %user.name,
        points = progress.points,
        level = %progress.level.name,
        points_to_next = progress.points_to_next,
        progress_percent = progress.percent(),
        badges = user.badges.len(),
        "Current standing"
    );

    for nearby in catalog.nearby(location) {
        tracing::info!(
            business = %nearby.business.name,
            category = %nearby.business.category,
            distance = %nearby.distance_label(),
            offer = ?nearby.business.featured_offer().map(|o| &o.title),
            "Nearby business"
        );
    }

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("comunidade_ativa=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
