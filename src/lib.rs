//! poker-showdown: hand classification and showdown comparison
//!
//! Goals:
//! - Classify any 5, 6 or 7 distinct cards into their best poker hand
//! - Keep the cards that justify the category so ties are broken by kickers
//! - Total, deterministic ordering between hands, including chops
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: settle a showdown
//! ```
//! use poker_showdown::cards::parse_cards;
//! use poker_showdown::evaluator::{classify, compare, HandCategory};
//! use std::cmp::Ordering;
//!
//! let quads = classify(&parse_cards("2H 2C 2S 2D AH AS 5H").unwrap()).unwrap();
//! assert_eq!(quads.category(), HandCategory::FourOfAKind);
//!
//! let flush = classify(&parse_cards("AS 2S 4S 8S TS 3S 9S").unwrap()).unwrap();
//! assert_eq!(flush.category(), HandCategory::Flush);
//!
//! assert_eq!(compare(&quads, &flush), Ordering::Greater);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin showdown -- eval "AS KS QS JS TS" "2C 2D 2H 2S 3C"
//! cargo run --bin showdown -- deal --players 4 --seed 7
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod showdown;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
