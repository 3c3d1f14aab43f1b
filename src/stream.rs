//! Streaming structuring for long page sequences.
//!
//! Pages are structured on a worker thread and delivered over a channel
//! as each one completes, so callers can serialize or forward pages
//! without holding the whole document in memory.
//!
//! # Example
//!
//! ```
//! use docstruct::stream::{structure_stream, PageEvent};
//! use docstruct::StructureOptions;
//!
//! let pages = vec!["SUMMARY\n\nKey findings.".to_string()];
//! let receiver = structure_stream(pages, StructureOptions::default());
//!
//! for event in receiver {
//!     match event {
//!         PageEvent::Page(page) => println!("page {}", page.page_number),
//!         PageEvent::DocumentStart { page_count } => println!("{} pages", page_count),
//!         PageEvent::DocumentEnd => {}
//!     }
//! }
//! ```

use std::thread;

use crossbeam_channel::{bounded, Receiver};

use crate::model::Page;
use crate::structure::StructureOptions;
use crate::Docstruct;

/// Events emitted during streaming structuring.
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// Structuring has started.
    DocumentStart {
        /// Total number of pages that will be structured
        page_count: u32,
    },

    /// A page has been structured.
    Page(Page),

    /// All pages have been structured.
    DocumentEnd,
}

impl PageEvent {
    /// Get the page if this is a page event.
    pub fn page(&self) -> Option<&Page> {
        match self {
            PageEvent::Page(page) => Some(page),
            _ => None,
        }
    }

    /// Check if this is a document boundary event.
    pub fn is_document_boundary(&self) -> bool {
        matches!(
            self,
            PageEvent::DocumentStart { .. } | PageEvent::DocumentEnd
        )
    }
}

/// Structure pages on a worker thread with the given options.
///
/// Pages are numbered 1-indexed in input order and delivered in order.
/// Dropping the receiver stops the worker.
pub fn structure_stream(pages: Vec<String>, options: StructureOptions) -> Receiver<PageEvent> {
    structure_stream_with(Docstruct::new().with_options(options), pages)
}

/// Structure pages on a worker thread with a configured engine.
///
/// Collaborator sources registered on the engine run per page as usual.
pub fn structure_stream_with(engine: Docstruct, pages: Vec<String>) -> Receiver<PageEvent> {
    // Small buffer: producers stay a few pages ahead without unbounded
    // memory growth on slow consumers.
    let (sender, receiver) = bounded(4);

    thread::spawn(move || {
        let page_count = pages.len() as u32;
        if sender
            .send(PageEvent::DocumentStart { page_count })
            .is_err()
        {
            return;
        }

        for (i, text) in pages.iter().enumerate() {
            let page = engine.structure_page(i as u32 + 1, text);
            if sender.send(PageEvent::Page(page)).is_err() {
                return;
            }
        }

        let _ = sender.send(PageEvent::DocumentEnd);
    });

    receiver
}
