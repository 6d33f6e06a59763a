//! Proptest generators for property-based testing.

use proptest::prelude::*;

use revchain_core::{ChainHash, Index, START_INDEX};

/// Generate any valid index.
pub fn index() -> impl Strategy<Value = Index> {
    (0u64..=START_INDEX).prop_filter_map("index out of range", |v| Index::new(v).ok())
}

/// Generate a random seed.
pub fn seed() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

/// Generate a random ChainHash.
pub fn chain_hash() -> impl Strategy<Value = ChainHash> {
    any::<[u8; 32]>().prop_map(ChainHash::from_bytes)
}

/// Generate `(base, target)` where `base` can derive `target`.
pub fn descendant(base: Index) -> impl Strategy<Value = (Index, Index)> {
    let span = (1u64 << base.bucket()) - 1;
    any::<u64>().prop_filter_map("descendant out of range", move |low| {
        let target = Index::new(base.value() | (low & span)).ok()?;
        Some((base, target))
    })
}

/// A decreasing run of reveals, with random gaps, starting near the top of
/// the chain.
#[derive(Debug, Clone)]
pub struct RevealScript {
    /// Indices in the order they are offered to a store.
    pub indices: Vec<Index>,
}

impl RevealScript {
    /// Build a script from a start offset and gap sizes. Each step moves
    /// `1 + gap` positions down; the script stops at the root.
    pub fn from_gaps(start_offset: u64, gaps: &[u64]) -> Self {
        let mut values = Vec::with_capacity(gaps.len() + 1);
        let mut current = START_INDEX.saturating_sub(start_offset);
        values.push(current);

        for &gap in gaps {
            let Some(next) = current.checked_sub(1 + gap) else {
                break;
            };
            current = next;
            values.push(current);
        }

        Self {
            indices: values.into_iter().filter_map(|v| Index::new(v).ok()).collect(),
        }
    }

    /// A gap-free script of `len` reveals from the start of the chain.
    pub fn sequential(len: usize) -> Self {
        Self::from_gaps(0, &vec![0; len.saturating_sub(1)])
    }
}

impl Arbitrary for RevealScript {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            0u64..64,
            // Mostly gap-free steps, with the occasional skip.
            prop::collection::vec(prop_oneof![6 => Just(0u64), 1 => 1u64..8, 1 => 8u64..64], 1..200),
        )
            .prop_map(|(start, gaps)| RevealScript::from_gaps(start, &gaps))
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revchain_store::Store;

    #[test]
    fn test_sequential_script() {
        let script = RevealScript::sequential(4);
        let values: Vec<u64> = script.indices.iter().map(|i| i.value()).collect();
        assert_eq!(
            values,
            vec![START_INDEX, START_INDEX - 1, START_INDEX - 2, START_INDEX - 3]
        );
    }

    #[test]
    fn test_script_stops_at_root() {
        let script = RevealScript::from_gaps(START_INDEX - 2, &[0, 0, 0, 0]);
        let values: Vec<u64> = script.indices.iter().map(|i| i.value()).collect();
        assert_eq!(values, vec![2, 1, 0]);
    }

    proptest! {
        #[test]
        fn test_scripts_strictly_decrease(script: RevealScript) {
            for pair in script.indices.windows(2) {
                prop_assert!(pair[1] < pair[0]);
            }
        }

        #[test]
        fn test_unknown_chain_can_start_anywhere(start in index(), hash in chain_hash()) {
            // With nothing to check against, any first element is accepted
            // and answers for itself.
            let mut store = Store::new();
            prop_assert!(store.add(start, hash).is_ok());
            prop_assert_eq!(store.lookup(start), Some(hash));
        }

        #[test]
        fn test_descendants_are_derivable((base, target) in index().prop_flat_map(descendant)) {
            prop_assert!(base.can_derive(target));
            prop_assert!(target >= base);
        }
    }
}
