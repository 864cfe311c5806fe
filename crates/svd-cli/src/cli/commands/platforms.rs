//! `svd platforms` – list supported platforms.

use svd_core::config::SvdConfig;
use svd_core::link::SupportedPlatform;

pub fn run_platforms(cfg: &SvdConfig) {
    println!("{:<12} {}", "PLATFORM", "DOMAINS");
    for platform in SupportedPlatform::PRIORITY {
        println!("{:<12} {}", platform.display_name(), platform.domains().join(", "));
    }
    println!("\nHost matching: {:?}", cfg.host_match);
}
