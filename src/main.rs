use anyhow::Context;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;
    bookshelf_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        upstream = %settings.third_party.url,
        "bookshelf-app bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    bookshelf_app::register_all(&mut registry, &settings);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!("bookshelf-app bootstrap complete");

    bookshelf_http::start_server(&registry, &settings, bookshelf_http::shutdown_signal()).await?;

    registry.stop_all().await
}
