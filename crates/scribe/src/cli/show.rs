//! `scribe show`

use scribe::{ScribeResult, read_script};
use std::path::Path;

/// Print a saved script to stdout.
pub async fn show_script(path: &Path) -> ScribeResult<()> {
    let text = read_script(path).await?;
    print!("{}", text);
    Ok(())
}
