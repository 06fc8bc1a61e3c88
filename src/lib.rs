//! solitaire-rs: Klondike solitaire rules engine
//!
//! Goals:
//! - One engine owning the full game state (stock, waste, foundations,
//!   tableau) behind legality-checked transition operations
//! - Small, well-documented public API usable from any front end
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: deal a game and play a move
//! ```
//! use solitaire_rs::game::{DrawMode, Game, StockPolicy};
//!
//! let mut game = Game::new_seeded(DrawMode::One, StockPolicy::Recycle, 42);
//! assert_eq!(game.stock_len(), 24);
//! assert_eq!(game.columns().len(), 7);
//!
//! // Flip a card and try to play it somewhere; an illegal move leaves
//! // the state untouched and reports why.
//! game.draw_from_stock();
//! let card = game.waste_top().unwrap();
//! for column in 0..game.columns().len() {
//!     if game.can_move_to_tableau(card, column) {
//!         game.move_to_tableau(card, column).unwrap();
//!         break;
//!     }
//! }
//! assert!(!game.is_won());
//! ```
//!
//! Front ends drive a game through the [`engine::SolitaireEngine`]
//! trait and read piles back through the query surface; this crate
//! contains no rendering or I/O of its own.

pub mod cards;
pub mod deck;
pub mod engine;
pub mod game;
pub mod piles;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
