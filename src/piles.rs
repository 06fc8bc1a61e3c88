use crate::cards::{Card, Rank, Suit};

/// A per-suit foundation pile, built from the ace upward.
///
/// The pile is suit-homogeneous and rank-contiguous by construction:
/// cards only enter through [`Foundation::can_accept`]-guarded pushes,
/// and nothing ever leaves.
///
/// ```
/// use solitaire_rs::cards::{Card, Rank, Suit};
/// use solitaire_rs::piles::Foundation;
///
/// let f = Foundation::new(Suit::Hearts);
/// assert!(f.can_accept(Card::new(Rank::Ace, Suit::Hearts)));
/// assert!(!f.can_accept(Card::new(Rank::Two, Suit::Hearts)));
/// assert!(!f.can_accept(Card::new(Rank::Ace, Suit::Spades)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foundation {
    suit: Suit,
    cards: Vec<Card>,
}

impl Foundation {
    pub fn new(suit: Suit) -> Self {
        Self { suit, cards: Vec::with_capacity(13) }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// A foundation is complete once it holds ace through king.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == 13
    }

    /// True if `card` may be placed on this foundation: matching suit,
    /// and the ace on an empty pile or the rank directly above the top.
    pub fn can_accept(&self, card: Card) -> bool {
        if card.suit() != self.suit {
            return false;
        }
        match self.top() {
            None => card.rank() == Rank::Ace,
            Some(top) => top.rank().is_directly_below(card.rank()),
        }
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(self.can_accept(card));
        self.cards.push(card);
    }
}

/// One tableau column. Cards are stored bottom first; the first
/// `face_down` of them are hidden, everything above is face-up.
///
/// Only the card exposed at the top ever transitions face-down to
/// face-up (the reveal after a move empties the face-up part).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    cards: Vec<Card>,
    face_down: usize,
}

impl Column {
    /// Build a freshly dealt column: every card face-down except the
    /// last one dealt, which sits on top face-up.
    pub(crate) fn deal(cards: Vec<Card>) -> Self {
        let face_down = cards.len().saturating_sub(1);
        Self { cards, face_down }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Number of face-down cards at the bottom of the column.
    pub fn face_down_count(&self) -> usize {
        self.face_down
    }

    /// Face state of the card at `index` (0 = bottom of the column).
    pub fn is_face_up(&self, index: usize) -> bool {
        index < self.cards.len() && index >= self.face_down
    }

    /// Position of `card` within the face-up part, if it is there.
    pub fn face_up_position(&self, card: Card) -> Option<usize> {
        self.cards[self.face_down..]
            .iter()
            .position(|&c| c == card)
            .map(|i| self.face_down + i)
    }

    /// True if the cards from `start` to the top form a movable run:
    /// descending by exactly one per step, alternating colors.
    ///
    /// A single top card is trivially a run. Face state is not checked
    /// here; callers select `start` from the face-up part.
    pub fn is_run_from(&self, start: usize) -> bool {
        if start >= self.cards.len() {
            return false;
        }
        self.cards[start..].windows(2).all(|pair| {
            let (lower, upper) = (pair[0], pair[1]);
            upper.rank().is_directly_below(lower.rank()) && upper.color() != lower.color()
        })
    }

    /// True if `card` may be placed on this column: a king onto an
    /// empty column, otherwise alternating color and rank directly
    /// below the column top.
    ///
    /// ```
    /// use solitaire_rs::cards::{Card, Rank, Suit};
    /// use solitaire_rs::piles::Column;
    ///
    /// let empty = Column::default();
    /// assert!(empty.can_accept(Card::new(Rank::King, Suit::Clubs)));
    /// assert!(!empty.can_accept(Card::new(Rank::Queen, Suit::Clubs)));
    /// ```
    pub fn can_accept(&self, card: Card) -> bool {
        match self.top() {
            None => card.rank() == Rank::King,
            Some(top) => {
                card.color() != top.color() && card.rank().is_directly_below(top.rank())
            }
        }
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Remove and return the cards from `start` to the top, then flip
    /// the newly exposed card if the removal left the top face-down.
    pub(crate) fn take_from(&mut self, start: usize) -> Vec<Card> {
        let run = self.cards.split_off(start);
        self.reveal_exposed_top();
        run
    }

    /// Remove and return the top card, revealing the one beneath it if
    /// that card was face-down.
    pub(crate) fn pop_top(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        self.reveal_exposed_top();
        card
    }

    /// Flip the top card face-up if every remaining card is face-down.
    /// This is the only face-down to face-up transition in the game.
    fn reveal_exposed_top(&mut self) {
        if !self.cards.is_empty() && self.face_down == self.cards.len() {
            self.face_down -= 1;
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self { cards: Vec::new(), face_down: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn card(s: &str) -> Card {
        s.parse().expect("valid card literal")
    }

    fn column(s: &str) -> Column {
        Column::deal(parse_cards(s).expect("valid card literals"))
    }

    #[test]
    fn foundation_accepts_only_ascending_same_suit() {
        let mut f = Foundation::new(Suit::Hearts);
        assert!(f.can_accept(card("Ah")));
        assert!(!f.can_accept(card("2h")));
        assert!(!f.can_accept(card("As")));

        f.push(card("Ah"));
        assert!(f.can_accept(card("2h")));
        assert!(!f.can_accept(card("Ah")));
        assert!(!f.can_accept(card("3h")));
        assert!(!f.can_accept(card("2d")));
        assert_eq!(f.top(), Some(card("Ah")));
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn foundation_completes_at_thirteen() {
        let mut f = Foundation::new(Suit::Clubs);
        for rank in Rank::ALL {
            assert!(!f.is_complete());
            f.push(Card::new(rank, Suit::Clubs));
        }
        assert!(f.is_complete());
        assert_eq!(f.top(), Some(card("Kc")));
    }

    #[test]
    fn dealt_column_hides_all_but_the_top() {
        let col = column("3h 9c Ks");
        assert_eq!(col.len(), 3);
        assert_eq!(col.face_down_count(), 2);
        assert!(!col.is_face_up(0));
        assert!(!col.is_face_up(1));
        assert!(col.is_face_up(2));
        assert_eq!(col.top(), Some(card("Ks")));
    }

    #[test]
    fn empty_column_accepts_only_kings() {
        let col = Column::default();
        assert!(col.can_accept(card("Kd")));
        assert!(!col.can_accept(card("Qd")));
        assert!(!col.can_accept(card("Ad")));
    }

    #[test]
    fn stacking_alternates_colors_descending() {
        let col = column("8h");
        assert!(col.can_accept(card("7s")));
        assert!(col.can_accept(card("7c")));
        assert!(!col.can_accept(card("7d"))); // same color
        assert!(!col.can_accept(card("6s"))); // rank gap
        assert!(!col.can_accept(card("9s"))); // ascending
    }

    #[test]
    fn removal_reveals_the_next_card() {
        let mut col = column("3h 9c Ks");
        assert_eq!(col.pop_top(), Some(card("Ks")));
        // 9c was face-down; it must now be face-up.
        assert_eq!(col.face_down_count(), 1);
        assert!(col.is_face_up(1));
        assert_eq!(col.pop_top(), Some(card("9c")));
        assert_eq!(col.face_down_count(), 0);
        assert_eq!(col.pop_top(), Some(card("3h")));
        assert_eq!(col.pop_top(), None);
        assert_eq!(col.face_down_count(), 0);
    }

    #[test]
    fn run_detection_is_pairwise() {
        let mut col = column("2c 9h");
        col.extend(parse_cards("8s 7d").unwrap());
        // 9h 8s 7d is a valid face-up run; 2c is face-down beneath it.
        assert!(col.is_run_from(1));
        assert!(col.is_run_from(2));
        assert!(col.is_run_from(3));
        assert!(!col.is_run_from(0)); // 9h is not directly below 2c
        assert!(!col.is_run_from(4)); // out of range

        let mut broken = column("9h");
        broken.extend(parse_cards("8s 7s").unwrap()); // same-color pair
        assert!(!broken.is_run_from(0));
    }

    #[test]
    fn face_up_position_ignores_hidden_cards() {
        let col = column("3h 9c Ks");
        assert_eq!(col.face_up_position(card("Ks")), Some(2));
        assert_eq!(col.face_up_position(card("9c")), None); // face-down
        assert_eq!(col.face_up_position(card("2d")), None); // absent
    }

    #[test]
    fn taking_a_run_flips_the_exposed_card() {
        let mut col = column("2c 9h");
        col.extend(parse_cards("8s 7d").unwrap());
        let run = col.take_from(1);
        assert_eq!(run, parse_cards("9h 8s 7d").unwrap());
        assert_eq!(col.len(), 1);
        assert_eq!(col.face_down_count(), 0);
        assert!(col.is_face_up(0));
    }
}
