// Minimal game engine API boundary. This trait exposes the Klondike
// lifecycle, actions and queries so front ends (terminal, widget-tree,
// frame-loop renderers) can drive a game without depending on its
// internals. It is implemented for the core `Game` type.

use crate::cards::{Card, Suit};
use crate::game::{GameStatus, IllegalMove};
use crate::piles::{Column, Foundation};

pub trait SolitaireEngine {
    // Lifecycle
    fn new_game(&mut self);

    // Actions
    fn draw_from_stock(&mut self) -> usize;
    fn move_to_tableau(&mut self, card: Card, column: usize) -> Result<(), IllegalMove>;
    fn move_to_foundation(&mut self, card: Card, suit: Suit) -> Result<(), IllegalMove>;

    // Queries: everything a renderer needs to draw any view.
    fn status(&self) -> GameStatus;
    fn is_won(&self) -> bool;
    fn stock_len(&self) -> usize;
    fn waste(&self) -> &[Card];
    fn waste_top(&self) -> Option<Card>;
    fn foundation(&self, suit: Suit) -> &Foundation;
    fn columns(&self) -> &[Column];
    fn can_move_to_tableau(&self, card: Card, column: usize) -> bool;
    fn can_move_to_foundation(&self, card: Card, suit: Suit) -> bool;
}

impl SolitaireEngine for crate::game::Game {
    fn new_game(&mut self) {
        self.new_game();
    }

    fn draw_from_stock(&mut self) -> usize {
        self.draw_from_stock()
    }
    fn move_to_tableau(&mut self, card: Card, column: usize) -> Result<(), IllegalMove> {
        self.move_to_tableau(card, column)
    }
    fn move_to_foundation(&mut self, card: Card, suit: Suit) -> Result<(), IllegalMove> {
        self.move_to_foundation(card, suit)
    }

    fn status(&self) -> GameStatus {
        self.status()
    }
    fn is_won(&self) -> bool {
        self.is_won()
    }
    fn stock_len(&self) -> usize {
        self.stock_len()
    }
    fn waste(&self) -> &[Card] {
        self.waste()
    }
    fn waste_top(&self) -> Option<Card> {
        self.waste_top()
    }
    fn foundation(&self, suit: Suit) -> &Foundation {
        self.foundation(suit)
    }
    fn columns(&self) -> &[Column] {
        self.columns()
    }
    fn can_move_to_tableau(&self, card: Card, column: usize) -> bool {
        self.can_move_to_tableau(card, column)
    }
    fn can_move_to_foundation(&self, card: Card, suit: Suit) -> bool {
        self.can_move_to_foundation(card, suit)
    }
}
