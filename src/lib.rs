use crate::config::RunConfig;

pub mod classifier;
pub mod config;
pub mod driver;
pub mod error;
pub mod masker;

/// Runs one masking pass over the configured image directory and
/// returns the total number of pixels made transparent.
pub fn run(config: &RunConfig) -> error::Result<u64> {
    driver::run_directory(&config.image_dir, config.policy, config.sort_files)
}
