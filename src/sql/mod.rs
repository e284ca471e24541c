//! Lossless, lenient SQL tokenization for syntax highlighting.
//!
//! Modules:
//! - `category`   : Presentation categories (keyword, data type, literal, ...).
//! - `vocabulary` : Keyword / data type / function tables, case-insensitive.
//! - `token`      : Token struct pairing a category with the text it covers.
//! - `tokenizer`  : Single pass O(n) tokenizer producing a `Vec<Token>` from raw SQL.
//!
//! Design Principles:
//! 1. Accept any string; malformed snippets still produce tokens.
//! 2. Every input character belongs to exactly one token, in order.
//! 3. Preserve original casing; only table lookups are case-insensitive.
//! 4. Tokens borrow from the input, no per-token allocation.
//!
//! Example:
//! ```rust
//! use sqldeck::{TokenCategory, tokenize_sql};
//!
//! let tokens = tokenize_sql("SELECT name FROM users -- all");
//! assert!(tokens.iter().any(|t| t.category == TokenCategory::Comment));
//! assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), "SELECT name FROM users -- all");
//! ```
//!
//! NOTE: This is **not** a SQL parser. It only decides how each character is
//! painted.

pub mod category;
pub mod token;
pub mod tokenizer;
pub mod vocabulary;
mod tokenizer_tests;

pub use category::TokenCategory;
pub use token::Token;
pub use tokenizer::{tokenize_sql, tokenize_sql_with};
pub use vocabulary::Vocabulary;
