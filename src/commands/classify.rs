//! Classify command handler

use anyhow::Result;

use athenaeum::domain::value_objects::BookCount;
use athenaeum::presentation::Renderer;
use athenaeum::{classify, is_prolific};

pub fn cmd_classify(count: i64, renderer: &Renderer) -> Result<String> {
    let count = BookCount::new(count)?;
    Ok(renderer.classification(count.value(), classify(count), is_prolific(count)))
}
