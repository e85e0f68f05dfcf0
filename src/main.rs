use coachdeck::{Settings, app_core::Coachdeck, telemetry};
use tracing::warn;

fn main() -> anyhow::Result<()> {
    let loaded = Settings::load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    let _log_guard = telemetry::init_logging(&settings.logging)?;
    if let Err(e) = &loaded {
        warn!("falling back to default settings: {e:#}");
    }

    Coachdeck::new(settings)?.run()
}
