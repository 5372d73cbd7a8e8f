//! Search result extraction
//!
//! This module turns the DuckDuckGo HTML results page into an ordered
//! [`ResultSet`]:
//! - Walking `.result` candidates in document order
//! - Skipping ads and entries without a usable link
//! - Unwrapping `//duckduckgo.com/l/?uddg=` redirect links
//! - Stopping once the requested number of records is accepted

mod extractor;
mod record;
mod redirect;

pub use extractor::{
    extract_results, AD_MARKER, RESULT_SELECTOR, SNIPPET_SELECTOR, TITLE_LINK_SELECTOR,
};
pub use record::{ResultRecord, ResultSet};
pub use redirect::{unwrap_redirect, REDIRECT_PREFIX};
