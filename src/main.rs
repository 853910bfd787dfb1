use anyhow::Result;
use log::info;

use launcher_icons::{config, generate_icons};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut written = 0;
    for &(kind, base) in &config::TARGETS {
        let set = generate_icons(kind, base)?;
        written += set.files.len();
    }

    info!("all icons generated ({} files)", written);
    info!("next steps:");
    for (i, step) in config::NEXT_STEPS.iter().enumerate() {
        info!("  {}. {}", i + 1, step);
    }
    Ok(())
}
