//! Map command implementation.

use anyhow::Result;

use crate::ConfigArgs;

/// Run the map command: print output-to-original correspondences.
pub fn run(input: &str, config: &ConfigArgs, json: bool) -> Result<()> {
    let text = super::read_input(input)?;
    let pipeline = super::build_pipeline(config)?;

    let (spoken, map) = pipeline.process_with_map(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    println!("{spoken}");
    println!();

    let out_chars: Vec<char> = spoken.chars().collect();
    let orig_chars: Vec<char> = text.chars().collect();

    // Group runs of untouched text and runs produced by one substitution.
    let entries = map.entries();
    let mut start = 0;
    while start < entries.len() {
        let (a0, b0) = entries[start];
        let mut end = start + 1;
        if b0 - a0 == 1 {
            while end < entries.len() {
                let (a, b) = entries[end];
                if b - a == 1 && a == a0 + (end - start) {
                    end += 1;
                } else {
                    break;
                }
            }
        } else {
            while end < entries.len() && entries[end] == (a0, b0) {
                end += 1;
            }
        }

        let out_fragment: String = out_chars[start..end].iter().collect();
        let (a, b) = map.original_range_for(start, end);
        let orig_fragment: String = orig_chars[a.min(orig_chars.len())..b.min(orig_chars.len())]
            .iter()
            .collect();
        println!(
            "[{start:4}..{end:4}) {:30} <- [{a:4}..{b:4}) {}",
            display_fragment(&out_fragment),
            display_fragment(&orig_fragment)
        );
        start = end;
    }

    Ok(())
}

fn display_fragment(fragment: &str) -> String {
    let escaped: String = fragment
        .chars()
        .map(|c| if c == '\n' { '␤' } else { c })
        .collect();
    format!("{escaped:?}")
}
