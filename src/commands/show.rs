use std::path::Path;

use anyhow::Result;

use crate::codec::{self, Format};
use crate::models::Output;

pub fn run(file: Option<&Path>, from: Format) -> Result<Vec<Output>> {
    let input = codec::read_source(file)?;
    codec::decode(&input, from)
}
