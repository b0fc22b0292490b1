use crate::{Card, Rank, RngState, Suit};

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
}

impl Deck {
    /// 52 standard cards plus two jokers.
    pub fn standard54() -> Self {
        let mut draw = Vec::with_capacity(54);
        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                draw.push(Card::new(rank, suit));
            }
        }
        draw.push(Card::new(Rank::Joker, Suit::Spades));
        draw.push(Card::new(Rank::Joker, Suit::Hearts));
        Self { draw }
    }

    pub fn shuffled(rng: &mut RngState) -> Self {
        let mut deck = Self::standard54();
        rng.shuffle(&mut deck.draw);
        deck
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let keep = self.draw.len().saturating_sub(count);
        let mut cards = self.draw.split_off(keep);
        cards.reverse();
        cards
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }
}
