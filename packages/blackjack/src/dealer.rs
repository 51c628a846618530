use crate::{Card, Deck, GameError, Hand};

/// Dealer auto-play: draw below 17, stand on any 17 or more. No peek, no soft-17 hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealerPolicy;

impl DealerPolicy {
    pub const STANDS_ON: u8 = 17;

    pub fn should_hit(hand: &Hand) -> bool {
        hand.value() < Self::STANDS_ON
    }

    /// Draws at most one card. Returns `None` once the dealer stands.
    pub fn step(hand: &mut Hand, deck: &mut Deck) -> Result<Option<Card>, GameError> {
        if !Self::should_hit(hand) {
            return Ok(None);
        }
        let card = deck.draw()?;
        hand.add_card(card);
        log::debug!("dealer draws {card}, total {}", hand.value());
        Ok(Some(card))
    }

    /// Runs the dealer to completion and returns the cards drawn.
    #[cfg(test)]
    pub(crate) fn play(hand: &mut Hand, deck: &mut Deck) -> Result<Vec<Card>, GameError> {
        let mut drawn = Vec::new();
        while let Some(card) = Self::step(hand, deck)? {
            drawn.push(card);
        }
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Clubs)
    }

    #[test]
    fn test_dealer_hits_below_17() {
        let hand = Hand::from_cards(vec![card(Rank::Ten), card(Rank::Six)]);
        assert!(DealerPolicy::should_hit(&hand));
    }

    #[test]
    fn test_dealer_stands_on_soft_17() {
        let hand = Hand::from_cards(vec![card(Rank::Ace), card(Rank::Six)]);
        assert!(!DealerPolicy::should_hit(&hand));
    }

    #[test]
    fn test_dealer_play_stops_at_17_or_more() {
        let mut hand = Hand::from_cards(vec![card(Rank::Two), card(Rank::Three)]);
        let mut deck = Deck::stacked(vec![
            card(Rank::Four),
            card(Rank::Five),
            card(Rank::Three),
            card(Rank::King),
        ]);
        let drawn = DealerPolicy::play(&mut hand, &mut deck).unwrap();
        // 5 -> 9 -> 14 -> 17
        assert_eq!(drawn.len(), 3);
        assert_eq!(hand.value(), 17);
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn test_dealer_does_not_draw_when_standing() {
        let mut hand = Hand::from_cards(vec![card(Rank::King), card(Rank::Queen)]);
        let mut deck = Deck::stacked(vec![card(Rank::Two)]);
        assert_eq!(DealerPolicy::step(&mut hand, &mut deck), Ok(None));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn test_dealer_play_reports_exhaustion() {
        let mut hand = Hand::from_cards(vec![card(Rank::Two), card(Rank::Three)]);
        let mut deck = Deck::stacked(vec![card(Rank::Two)]);
        assert_eq!(
            DealerPolicy::play(&mut hand, &mut deck),
            Err(GameError::DeckExhausted)
        );
    }
}
