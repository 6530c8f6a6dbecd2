//! CLI command implementations.

pub mod info;
pub mod map;
pub mod normalize;

use anyhow::{Context, Result};
use tts_prep::{Pipeline, PipelineConfig};

use crate::ConfigArgs;

/// Resolve the input argument: literal text, or `@path` for file contents.
pub fn read_input(input: &str) -> Result<String> {
    match input.strip_prefix('@') {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))
        }
        None => Ok(input.to_string()),
    }
}

/// Build a pipeline from the shared CLI flags.
pub fn build_pipeline(args: &ConfigArgs) -> Result<Pipeline> {
    let config = PipelineConfig {
        code_block_mode: args.code_blocks.parse()?,
        url_detail_level: args.url_detail.parse()?,
        ip_read_mode: args.ip_mode.parse()?,
        read_operators: !args.no_operators,
        collect_unknown_words: true,
        ..PipelineConfig::default()
    };
    Ok(Pipeline::new(config))
}
