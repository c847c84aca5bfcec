use anyhow::{Result, anyhow};
use tracing::debug;

use crate::helpers::find_similar_name;
use crate::models::Output;

/// Find the first output recorded under `name`.
pub fn run(name: &str, outputs: &[Output]) -> Result<Output> {
    if let Some(output) = outputs.iter().find(|o| o.name() == Some(name)) {
        debug!(name, "found output");
        return Ok(output.clone());
    }

    // Unknown name, suggest a near miss if there is one
    let names: Vec<&str> = outputs.iter().filter_map(Output::name).collect();

    if let Some(suggestion) = find_similar_name(name, &names) {
        Err(anyhow!("Output not found: {name}\nDid you mean: {suggestion}"))
    } else {
        Err(anyhow!("Output not found: {name}"))
    }
}
