//! Info command implementation.

use tts_prep::PipelineConfig;

/// Print version and default configuration.
pub fn run() {
    println!("tts-prep {}", env!("CARGO_PKG_VERSION"));
    println!();

    let defaults = PipelineConfig::default();
    println!("Defaults:");
    println!("  code_block_mode:  {:?}", defaults.code_block_mode);
    println!("  url_detail_level: {:?}", defaults.url_detail_level);
    println!("  ip_read_mode:     {:?}", defaults.ip_read_mode);
    println!("  read_operators:   {}", defaults.read_operators);
    println!("  diagram_sentinel: {}", defaults.diagram_sentinel);
}
