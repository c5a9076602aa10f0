//! PDF text extraction: read per-page text via pdfium.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async
//! contexts. `tokio::task::spawn_blocking` moves the work onto a dedicated
//! thread pool thread designed for blocking operations, keeping the Tokio
//! worker threads responsive while pdfium walks the document.
//!
//! ## Binding
//!
//! pdfium is loaded at runtime, not linked: the `PDFIUM_LIB_PATH`
//! environment variable wins, then a library in the current working
//! directory, then the system library search path.

use crate::error::Pdf2TxtError;
use crate::output::DocumentMetadata;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Extract the text of every page, in page order.
///
/// Runs inside `spawn_blocking` since pdfium operations are CPU-bound.
/// A zero-page document yields an empty vector.
pub async fn extract_pages(
    pdf_path: &Path,
    password: Option<&str>,
) -> Result<Vec<String>, Pdf2TxtError> {
    let path = pdf_path.to_path_buf();
    let pwd = password.map(|s| s.to_string());

    tokio::task::spawn_blocking(move || extract_pages_blocking(&path, pwd.as_deref()))
        .await
        .map_err(|e| Pdf2TxtError::Internal(format!("Extraction task panicked: {}", e)))?
}

/// Blocking implementation of per-page text extraction.
fn extract_pages_blocking(
    pdf_path: &Path,
    password: Option<&str>,
) -> Result<Vec<String>, Pdf2TxtError> {
    let pdfium = bind_pdfium()?;
    let document = load_document(&pdfium, pdf_path, password)?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    let mut texts = Vec::with_capacity(total_pages);
    for (idx, page) in pages.iter().enumerate() {
        let text = page
            .text()
            .map_err(|e| Pdf2TxtError::ExtractionFailed {
                page: idx + 1,
                detail: format!("{:?}", e),
            })?
            .all();
        debug!("Extracted page {} → {} chars", idx + 1, text.chars().count());
        texts.push(text);
    }

    Ok(texts)
}

/// Extract document metadata from a PDF without touching page content.
pub async fn extract_metadata(
    pdf_path: &Path,
    password: Option<&str>,
) -> Result<DocumentMetadata, Pdf2TxtError> {
    let path = pdf_path.to_path_buf();
    let pwd = password.map(|s| s.to_string());

    tokio::task::spawn_blocking(move || extract_metadata_blocking(&path, pwd.as_deref()))
        .await
        .map_err(|e| Pdf2TxtError::Internal(format!("Metadata task panicked: {}", e)))?
}

/// Blocking implementation of metadata extraction.
fn extract_metadata_blocking(
    pdf_path: &Path,
    password: Option<&str>,
) -> Result<DocumentMetadata, Pdf2TxtError> {
    let pdfium = bind_pdfium()?;
    let document = load_document(&pdfium, pdf_path, password)?;

    let metadata = document.metadata();
    let pages = document.pages();

    let get_meta = |tag: PdfDocumentMetadataTagType| -> Option<String> {
        metadata.get(tag).and_then(|t| {
            let v = t.value().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        })
    };

    Ok(DocumentMetadata {
        title: get_meta(PdfDocumentMetadataTagType::Title),
        author: get_meta(PdfDocumentMetadataTagType::Author),
        subject: get_meta(PdfDocumentMetadataTagType::Subject),
        creator: get_meta(PdfDocumentMetadataTagType::Creator),
        producer: get_meta(PdfDocumentMetadataTagType::Producer),
        creation_date: get_meta(PdfDocumentMetadataTagType::CreationDate),
        modification_date: get_meta(PdfDocumentMetadataTagType::ModificationDate),
        page_count: pages.len() as usize,
        pdf_version: format!("{:?}", document.version()),
        is_encrypted: password.is_some(),
    })
}

/// Bind to a pdfium library: env override, working directory, then system.
fn bind_pdfium() -> Result<Pdfium, Pdf2TxtError> {
    let bindings = match std::env::var("PDFIUM_LIB_PATH") {
        Ok(lib_path) if !lib_path.is_empty() => Pdfium::bind_to_library(&lib_path),
        _ => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library()),
    }
    .map_err(|e| Pdf2TxtError::PdfiumBindingFailed(format!("{:?}", e)))?;

    Ok(Pdfium::new(bindings))
}

/// Open a document, mapping pdfium load failures to the error taxonomy.
fn load_document<'a>(
    pdfium: &'a Pdfium,
    pdf_path: &Path,
    password: Option<&'a str>,
) -> Result<PdfDocument<'a>, Pdf2TxtError> {
    pdfium.load_pdf_from_file(pdf_path, password).map_err(|e| {
        let err_str = format!("{:?}", e);
        if err_str.contains("Password") || err_str.contains("password") {
            if password.is_some() {
                Pdf2TxtError::WrongPassword {
                    path: pdf_path.to_path_buf(),
                }
            } else {
                Pdf2TxtError::PasswordRequired {
                    path: pdf_path.to_path_buf(),
                }
            }
        } else {
            Pdf2TxtError::CorruptPdf {
                path: pdf_path.to_path_buf(),
                detail: err_str,
            }
        }
    })
}
