//! SQL highlighting and presenter-note classification for the database
//! fundamentals slide deck.
//!
//! The crate exposes three pure text scanners:
//! - [`tokenize_sql`] splits a SQL snippet into categorized, lossless tokens.
//! - [`classify_content_blocks`] partitions presenter notes into prose and SQL runs.
//! - [`highlight_inline_keywords`] marks SQL phrases embedded in prose.
//!
//! [`annotate_notes`] chains them, and the `render` layer turns the results
//! into HTML, JSON or a plain listing.
//!
//! ```rust
//! use sqldeck::{TokenCategory, tokenize_sql};
//!
//! let tokens = tokenize_sql("select * FROM t");
//! assert_eq!(tokens[0].category, TokenCategory::Keyword);
//! assert_eq!(tokens[0].text, "select");
//! ```

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(logging);
reexport!(sql);
reexport!(notes);
reexport!(render);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};
