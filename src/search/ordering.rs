//! Move-ordering policies.
//!
//! The search visits candidate moves in whatever order its `MoveOrdering`
//! leaves them. Ordering never changes the score a search reports, only
//! which of several equally good moves comes back:
//! - `GameRng`: uniform shuffle, so ties are broken unpredictably
//! - `NaturalOrder`: the board's baseline order, for reproducible tests

use crate::core::GameRng;

/// Policy for ordering candidate moves before they are searched.
pub trait MoveOrdering {
    /// Reorder `moves` in place.
    fn order<M>(&mut self, moves: &mut [M]);
}

impl MoveOrdering for GameRng {
    fn order<M>(&mut self, moves: &mut [M]) {
        self.shuffle(moves);
    }
}

/// Keep the board's baseline move order.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl MoveOrdering for NaturalOrder {
    fn order<M>(&mut self, _moves: &mut [M]) {}
}

impl<O: MoveOrdering + ?Sized> MoveOrdering for &mut O {
    fn order<M>(&mut self, moves: &mut [M]) {
        (**self).order(moves);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order_keeps_moves() {
        let mut moves = [3, 1, 2];
        NaturalOrder.order(&mut moves);
        assert_eq!(moves, [3, 1, 2]);
    }

    #[test]
    fn test_rng_order_is_permutation() {
        let mut rng = GameRng::new(9);
        let mut moves: Vec<u8> = (0..7).collect();
        rng.order(&mut moves);
        moves.sort_unstable();
        assert_eq!(moves, (0..7).collect::<Vec<u8>>());
    }

    fn apply<O: MoveOrdering>(mut ordering: O, moves: &mut [u8]) {
        ordering.order(moves);
    }

    #[test]
    fn test_borrowed_ordering_forwards() {
        let mut a = GameRng::new(5);
        let b = GameRng::new(5);

        let mut via_ref: Vec<u8> = (0..9).collect();
        let mut direct = via_ref.clone();
        apply(&mut a, &mut via_ref);
        apply(b, &mut direct);

        assert_eq!(via_ref, direct);
    }
}
