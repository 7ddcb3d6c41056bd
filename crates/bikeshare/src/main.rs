mod bootstrap;

use anyhow::{Context, Result};
use bikeshare_core::settings::Settings;
use bikeshare_runtime::data::reader::DatasetLoader;
use bikeshare_runtime::session::Session;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Bikeshare Explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = bootstrap::resolve_data_dir(settings.data_dir.as_deref());
    tracing::info!("Reading datasets from {}", data_dir.display());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(DatasetLoader::new(data_dir), stdin.lock(), stdout.lock());

    session.run().context("analysis session aborted")?;

    tracing::info!("Goodbye");
    Ok(())
}
