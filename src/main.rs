use anyhow::{Context, Result};
use gethome_store::storage::FileStorage;
use gethome_store::{Config, ListingStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 GetHome listing store");

    let config = Config::from_env().context("Failed to load configuration")?;

    let storage = FileStorage::open(&config.data_dir).await?;
    info!("💾 Data directory: {}", storage.dir().display());

    let store = ListingStore::initialize(Arc::new(storage)).await;
    let profile = store.profile();
    info!(
        "Signed in as {} ({}): {}",
        profile.name,
        profile.email,
        if store.is_authenticated() { "yes" } else { "no" }
    );

    let results = store.search(&config.query);
    info!(
        "\n✅ {} of {} listings match {:?}\n",
        results.len(),
        store.properties().len(),
        config.query
    );

    for (i, property) in results.iter().enumerate() {
        println!("{}. {} ({} {})", i + 1, property.title, property.price, property.currency);
        println!("   {} in {}, {}", property.kind, property.location, property.country);
        println!(
            "   {} bed, {} bath, gas: {}, electricity: {}",
            property.bedrooms, property.bathrooms, property.has_gas, property.has_electricity
        );
        println!("   Host: {} ★ {}", property.host_name, property.rating);
        println!("   ID: {}", property.id);
        println!();
    }

    let mine = store.my_properties();
    info!("📋 {} listings hosted by {}", mine.len(), profile.name);
    for property in mine {
        println!("   - {} [{}]", property.title, property.id);
    }

    Ok(())
}
