use std::path::PathBuf;

use tabled::Table;

use crate::{error, refunds, success};

/// Generates the synthetic refund dataset and writes it as CSV.
///
/// With `--preview` the rows are also printed as a table. The generator is
/// deterministic for a given count and seed, so re-running with the same
/// flags rewrites an identical file.
pub async fn generate_refunds(count: usize, seed: u64, output: PathBuf, preview: bool) {
    let records = refunds::generate(count, seed);

    let csv = match refunds::to_csv(&records) {
        Ok(csv) => csv,
        Err(e) => error!("Failed to encode refund dataset: {}", e),
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = async_fs::create_dir_all(parent).await {
                error!("Failed to create output directory: {}", e);
            }
        }
    }

    if let Err(e) = async_fs::write(&output, csv).await {
        error!("Failed to write {}: {}", output.display(), e);
    }

    if preview {
        println!("{}", Table::new(&records));
    }

    success!(
        "Wrote {} refund rows to {} (seed {})",
        records.len(),
        output.display(),
        seed
    );
}
