//! CSV export of the current page
//!
//! Only the rendered page is exported, never the whole filtered list.

use std::path::{Path, PathBuf};

use shared::Product;
use thiserror::Error;

pub const EXPORT_FILE_NAME: &str = "products_view.csv";
pub const CSV_HEADER: &str = "id,title,price,category,image";

/// Byte-order mark so spreadsheet apps detect UTF-8
pub const BOM: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render `items` as CSV text, BOM included
pub fn export_current_page(items: &[Product]) -> String {
    let mut csv = String::with_capacity(64 * (items.len() + 1));
    csv.push(BOM);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for p in items {
        let row = [
            p.id.to_string(),
            quote(&p.title),
            p.price.map(format_number).unwrap_or_default(),
            quote(p.category_name().unwrap_or_default()),
            quote(p.first_image().unwrap_or_default()),
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

/// Write the export into `dir` and return the file path
pub async fn write_export(dir: &Path, items: &[Product]) -> Result<PathBuf, ExportError> {
    let path = dir.join(EXPORT_FILE_NAME);
    let csv = export_current_page(items);

    let io_err = |source| ExportError::Io {
        path: path.clone(),
        source,
    };
    tokio::fs::create_dir_all(dir).await.map_err(io_err)?;
    tokio::fs::write(&path, csv).await.map_err(io_err)?;

    tracing::info!(path = %path.display(), rows = items.len(), "Exported current page");
    Ok(path)
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Integral values print without a fractional part (`3`, not `3.0`)
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
