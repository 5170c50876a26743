//! Output generation.
//!
//! # Submodules
//!
//! - [`record`]: Maps a parsed article and its summary to the output record
//! - [`json`]: Writes records as a JSON array to a file or stdout
//!
//! # Output Structure
//!
//! ```text
//! [
//!   {
//!     "url": ...,
//!     "crawl": { "loadedUrl", "loadedTime", "httpStatusCode" },
//!     "aiSummary": { "title", "summary", "score" },
//!     "metadata": { "canonicalUrl", "title", ..., "languageCode" },
//!     "title": ...,
//!     "text": ...
//!   }
//! ]
//! ```

pub mod json;
pub mod record;
