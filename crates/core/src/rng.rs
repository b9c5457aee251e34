//! RNG module - where the engine gets its next piece kind
//!
//! The engine never touches a global RNG. It holds a [`KindSource`] and asks
//! it for one kind per spawn:
//!
//! - [`UniformKinds`]: independent uniform draws (default)
//! - [`SevenBag`]: shuffled bags of all seven kinds
//! - [`ScriptedKinds`]: a fixed sequence, repeated; for deterministic tests

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::pieces::random_kind;
use crate::types::PieceKind;

/// Supplier of upcoming piece kinds
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: KindSource + ?Sized> KindSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random draw over the seven kinds
#[derive(Debug, Clone)]
pub struct UniformKinds<R: Rng = StdRng> {
    rng: R,
}

impl UniformKinds<StdRng> {
    /// Seeded source; the same seed yields the same sequence
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformKinds<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> KindSource for UniformKinds<R> {
    fn next_kind(&mut self) -> PieceKind {
        random_kind(&mut self.rng)
    }
}

/// 7-bag piece generator
///
/// Each bag contains one of each kind, shuffled; draws empty the bag, then a
/// new bag is shuffled.
#[derive(Debug, Clone)]
pub struct SevenBag {
    bag: [PieceKind; 7],
    bag_index: usize,
    rng: StdRng,
}

impl SevenBag {
    pub fn new(seed: u64) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        queue.refill_bag();
        queue
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Kinds left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl KindSource for SevenBag {
    fn next_kind(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }
}

/// Repeats a fixed list of kinds forever
#[derive(Debug, Clone)]
pub struct ScriptedKinds {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl ScriptedKinds {
    /// An empty script yields `PieceKind::O` forever.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        Self { kinds, cursor: 0 }
    }

    /// Always the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl KindSource for ScriptedKinds {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.cursor];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(source: &mut impl KindSource, n: usize) -> Vec<PieceKind> {
        (0..n).map(|_| source.next_kind()).collect()
    }

    #[test]
    fn test_uniform_deterministic() {
        let mut a = UniformKinds::new(12345);
        let mut b = UniformKinds::new(12345);
        assert_eq!(draw(&mut a, 100), draw(&mut b, 100));
    }

    #[test]
    fn test_uniform_is_roughly_even() {
        let mut source = UniformKinds::new(99);
        let mut counts = [0u32; 7];
        for kind in draw(&mut source, 7000) {
            counts[kind.index()] += 1;
        }
        // Expected 1000 each; a fair draw stays well inside this band.
        assert!(counts.iter().all(|&c| (800..1200).contains(&c)), "{:?}", counts);
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut bag = SevenBag::new(1);
        assert_eq!(bag.remaining().len(), 7);

        let mut drawn = draw(&mut bag, 7);
        drawn.sort_by_key(|k| k.index());
        assert_eq!(drawn, PieceKind::ALL.to_vec());
        assert!(bag.remaining().is_empty());

        // Next draw starts a fresh bag.
        bag.next_kind();
        assert_eq!(bag.remaining().len(), 6);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut script = ScriptedKinds::new([PieceKind::I, PieceKind::T]);
        assert_eq!(
            draw(&mut script, 5),
            vec![PieceKind::I, PieceKind::T, PieceKind::I, PieceKind::T, PieceKind::I]
        );
        let mut empty = ScriptedKinds::new(Vec::<PieceKind>::new());
        assert_eq!(empty.next_kind(), PieceKind::O);
    }

    #[test]
    fn test_boxed_source_forwards() {
        let mut boxed: Box<dyn KindSource> = Box::new(ScriptedKinds::repeat(PieceKind::L));
        assert_eq!(boxed.next_kind(), PieceKind::L);
    }
}
