//! ExportBundleHandler - Renders a bundle to a downloadable format.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::seo::SuggestionBundle;
use crate::ports::{BundleExporter, ExportFormat, ExportedBundle};

/// Handles export requests.
pub struct ExportBundleHandler {
    exporter: Arc<dyn BundleExporter>,
}

impl ExportBundleHandler {
    /// Creates a new handler.
    pub fn new(exporter: Arc<dyn BundleExporter>) -> Self {
        Self { exporter }
    }

    /// Renders the bundle in the requested format.
    pub fn handle(
        &self,
        bundle: &SuggestionBundle,
        format: ExportFormat,
    ) -> Result<ExportedBundle, DomainError> {
        let exported = self
            .exporter
            .export(bundle, format)
            .map_err(|e| DomainError::new(ErrorCode::ExportFailed, e.to_string()))?;

        info!(
            id = bundle.id.as_str(),
            %format,
            bytes = exported.content.len(),
            "bundle exported"
        );

        Ok(exported)
    }
}
