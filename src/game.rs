use crate::cards::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::piles::{Column, Foundation};
use rand::Rng;

/// Number of tableau columns in a Klondike deal.
pub const NUM_COLUMNS: usize = 7;

/// How many cards a single draw flips from the stock to the waste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrawMode {
    One,
    Three,
}

impl DrawMode {
    pub const fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }
}

/// What a draw does once the stock is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StockPolicy {
    /// Turn the waste back into the stock face-down, restoring the
    /// original draw order, so play can continue through it again.
    Recycle,
    /// Leave the empty stock alone; further draws are no-ops.
    Exhaust,
}

/// Macro game state. `Won` is terminal: every card is then on a
/// foundation, so no move source or drawable card remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameStatus {
    Playing,
    Won,
}

/// The single recoverable error of the engine: a requested move that
/// violates a placement rule or names a card that is not an eligible
/// source. The game state is never changed by a rejected move.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IllegalMove {
    #[error("no tableau column {0}")]
    NoSuchColumn(usize),
    #[error("{0} is not an eligible move source")]
    SourceNotAvailable(Card),
    #[error("the cards stacked on {0} do not form a movable run")]
    BrokenRun(Card),
    #[error("cannot place {0} on an empty column: only a king may start one")]
    EmptyColumnNeedsKing(Card),
    #[error("cannot place {card} on {onto}: columns descend by one in alternating colors")]
    TableauMismatch { card: Card, onto: Card },
    #[error("{card} does not belong on the {suit} foundation")]
    SuitMismatch { card: Card, suit: Suit },
    #[error("cannot place {0} on an empty foundation: it must start with the ace")]
    EmptyFoundationNeedsAce(Card),
    #[error("cannot place {card} on {onto}: foundations ascend by one")]
    FoundationMismatch { card: Card, onto: Card },
}

/// Where a requested card was found; computed during validation and
/// consumed by the mutating half of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Waste,
    Tableau { column: usize, start: usize },
}

/// A complete Klondike game: stock, waste, four foundations and seven
/// tableau columns, advanced only through legality-checked operations.
///
/// Every operation either fully applies or fully rejects; a failed move
/// leaves the state untouched. The 52-card set is conserved across the
/// piles at all times. `Game` is `Clone`, so callers that want
/// value-style snapshots can simply copy the state.
///
/// ```
/// use solitaire_rs::game::{DrawMode, Game, StockPolicy};
///
/// let mut game = Game::new_seeded(DrawMode::One, StockPolicy::Recycle, 7);
/// assert_eq!(game.stock_len(), 24);
/// assert_eq!(game.draw_from_stock(), 1);
/// assert!(game.waste_top().is_some());
/// assert!(!game.is_won());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: [Foundation; 4],
    tableau: [Column; NUM_COLUMNS],
    draw_mode: DrawMode,
    stock_policy: StockPolicy,
    status: GameStatus,
}

impl Game {
    /// Deal a fresh game from a random shuffle.
    pub fn new(draw_mode: DrawMode, stock_policy: StockPolicy) -> Self {
        let seed: u64 = rand::rng().random();
        Self::new_seeded(draw_mode, stock_policy, seed)
    }

    /// Deal a fresh game from a reproducible seed.
    pub fn new_seeded(draw_mode: DrawMode, stock_policy: StockPolicy, seed: u64) -> Self {
        Self::from_deck(Deck::shuffled(seed), draw_mode, stock_policy)
    }

    /// Deal from an explicit deck permutation.
    ///
    /// Column `i` receives `i + 1` cards drawn from the top of the deck
    /// in order, the last of them face-up; the remaining 24 cards form
    /// the face-down stock. Waste and foundations start empty.
    pub fn from_deck(mut deck: Deck, draw_mode: DrawMode, stock_policy: StockPolicy) -> Self {
        let tableau = std::array::from_fn(|i| Column::deal(deck.draw_n(i + 1)));
        Self {
            stock: deck.into_cards(),
            waste: Vec::new(),
            foundations: Suit::ALL.map(Foundation::new),
            tableau,
            draw_mode,
            stock_policy,
            status: GameStatus::Playing,
        }
    }

    /// Replace the whole state with a fresh random deal under the same
    /// rule options.
    pub fn new_game(&mut self) {
        *self = Game::new(self.draw_mode, self.stock_policy);
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn stock_policy(&self) -> StockPolicy {
        self.stock_policy
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of face-down cards left in the stock.
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// The face-down stock, bottom first; the last card is drawn next.
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// The waste pile, oldest first; the last card is the top.
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn waste_top(&self) -> Option<Card> {
        self.waste.last().copied()
    }

    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit.foundation_index()]
    }

    pub fn foundations(&self) -> &[Foundation; 4] {
        &self.foundations
    }

    /// The seven tableau columns; each exposes per-card face state.
    pub fn columns(&self) -> &[Column] {
        &self.tableau
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.tableau.get(index)
    }

    /// The game is won once every foundation holds ace through king.
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }

    /// Flip up to `draw_mode.count()` cards from the stock onto the
    /// waste, returning how many actually moved.
    ///
    /// On an empty stock the configured [`StockPolicy`] applies instead
    /// and 0 is returned: `Recycle` turns the waste back into the stock
    /// (reversing the pile restores the original draw order), `Exhaust`
    /// does nothing. Only the stock and waste are ever touched.
    pub fn draw_from_stock(&mut self) -> usize {
        if self.stock.is_empty() {
            if self.stock_policy == StockPolicy::Recycle {
                while let Some(card) = self.waste.pop() {
                    self.stock.push(card);
                }
            }
            return 0;
        }
        let mut drawn = 0;
        while drawn < self.draw_mode.count() {
            match self.stock.pop() {
                Some(card) => {
                    self.waste.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Move `card` (and any valid run stacked on it) onto the given
    /// tableau column.
    ///
    /// `card` may be the waste top, a column top, or any face-up card
    /// in a column; in the last case the whole run from `card` to the
    /// column top moves atomically, validated pairwise first. The
    /// destination must be empty and receive a king, or have a top of
    /// the opposite color exactly one rank above `card`. A source
    /// column whose removal exposes a face-down card reveals it.
    pub fn move_to_tableau(&mut self, card: Card, column: usize) -> Result<(), IllegalMove> {
        let source = self.check_move_to_tableau(card, column)?;
        match source {
            Source::Waste => {
                if let Some(card) = self.waste.pop() {
                    self.tableau[column].push(card);
                }
            }
            Source::Tableau { column: src, start } => {
                let run = self.tableau[src].take_from(start);
                self.tableau[column].extend(run);
            }
        }
        self.update_status();
        Ok(())
    }

    /// Move `card` from the waste top or a column top onto the `suit`
    /// foundation. The foundation must be empty and receive the ace,
    /// or have a top exactly one rank below `card`.
    pub fn move_to_foundation(&mut self, card: Card, suit: Suit) -> Result<(), IllegalMove> {
        let source = self.check_move_to_foundation(card, suit)?;
        match source {
            Source::Waste => {
                self.waste.pop();
            }
            Source::Tableau { column: src, .. } => {
                self.tableau[src].pop_top();
            }
        }
        self.foundations[suit.foundation_index()].push(card);
        self.update_status();
        Ok(())
    }

    /// Non-mutating legality check for [`Game::move_to_tableau`].
    pub fn can_move_to_tableau(&self, card: Card, column: usize) -> bool {
        self.check_move_to_tableau(card, column).is_ok()
    }

    /// Non-mutating legality check for [`Game::move_to_foundation`].
    pub fn can_move_to_foundation(&self, card: Card, suit: Suit) -> bool {
        self.check_move_to_foundation(card, suit).is_ok()
    }

    fn check_move_to_tableau(&self, card: Card, column: usize) -> Result<Source, IllegalMove> {
        let dst = self.tableau.get(column).ok_or(IllegalMove::NoSuchColumn(column))?;
        let source = self.locate_run_source(card)?;
        match dst.top() {
            None if card.rank() != Rank::King => Err(IllegalMove::EmptyColumnNeedsKing(card)),
            Some(onto) if !dst.can_accept(card) => {
                Err(IllegalMove::TableauMismatch { card, onto })
            }
            _ => Ok(source),
        }
    }

    fn check_move_to_foundation(&self, card: Card, suit: Suit) -> Result<Source, IllegalMove> {
        if card.suit() != suit {
            return Err(IllegalMove::SuitMismatch { card, suit });
        }
        let source = self.locate_top_source(card)?;
        let foundation = &self.foundations[suit.foundation_index()];
        match foundation.top() {
            None if card.rank() != Rank::Ace => Err(IllegalMove::EmptyFoundationNeedsAce(card)),
            Some(onto) if !foundation.can_accept(card) => {
                Err(IllegalMove::FoundationMismatch { card, onto })
            }
            _ => Ok(source),
        }
    }

    /// Find `card` as a tableau-move source: the waste top, or a
    /// face-up column card carrying a valid run above it.
    fn locate_run_source(&self, card: Card) -> Result<Source, IllegalMove> {
        if self.waste_top() == Some(card) {
            return Ok(Source::Waste);
        }
        for (column, col) in self.tableau.iter().enumerate() {
            if let Some(start) = col.face_up_position(card) {
                if !col.is_run_from(start) {
                    return Err(IllegalMove::BrokenRun(card));
                }
                return Ok(Source::Tableau { column, start });
            }
        }
        Err(IllegalMove::SourceNotAvailable(card))
    }

    /// Find `card` as a foundation-move source: the waste top or the
    /// top card of a column. Buried and face-down cards are not
    /// eligible.
    fn locate_top_source(&self, card: Card) -> Result<Source, IllegalMove> {
        if self.waste_top() == Some(card) {
            return Ok(Source::Waste);
        }
        for (column, col) in self.tableau.iter().enumerate() {
            if col.top() == Some(card) {
                let start = col.len() - 1;
                return Ok(Source::Tableau { column, start });
            }
        }
        Err(IllegalMove::SourceNotAvailable(card))
    }

    fn update_status(&mut self) {
        if self.is_won() {
            self.status = GameStatus::Won;
        }
    }
}

impl Default for Game {
    /// A random deal with the classic rules: draw one, recycle the
    /// waste when the stock runs out.
    fn default() -> Self {
        Game::new(DrawMode::One, StockPolicy::Recycle)
    }
}
