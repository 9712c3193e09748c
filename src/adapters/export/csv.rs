//! CMS-import CSV rendering.

use crate::domain::seo::SuggestionBundle;
use crate::ports::{ExportError, ExportFormat};

/// Renders the one-row CMS import CSV with header.
pub fn render_csv_row(bundle: &SuggestionBundle) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["ArticleID", "Reporter", "Title", "Meta", "Slug", "Section"])
        .map_err(|e| ExportError::render_failed(ExportFormat::Csv, e.to_string()))?;
    writer
        .write_record([
            bundle.id.as_str(),
            &bundle.author,
            &bundle.title,
            &bundle.meta_description,
            &bundle.slug,
            bundle.section.display_name(),
        ])
        .map_err(|e| ExportError::render_failed(ExportFormat::Csv, e.to_string()))?;

    writer
        .into_inner()
        .map_err(|e| ExportError::render_failed(ExportFormat::Csv, e.to_string()))
}
