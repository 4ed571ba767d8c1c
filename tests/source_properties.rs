//! Property-based tests: the source combinators agree with their
//! iterator counterparts on arbitrary inputs.

use futures::executor::block_on;
use proptest::prelude::*;

use millrace::prelude::*;
use millrace::source;

proptest! {
    #[test]
    fn from_iter_preserves_order(xs in prop::collection::vec(any::<i32>(), 0..100)) {
        let collected = block_on(source::from_iter(xs.clone()).to_vec());
        prop_assert_eq!(collected, Ok::<_, String>(xs));
    }

    #[test]
    fn map_agrees_with_iterator_map(xs in prop::collection::vec(any::<i32>(), 0..100)) {
        let collected = block_on(
            source::from_iter(xs.clone())
                .map(|n| n as i64 * 2)
                .to_vec(),
        );
        let expected: Vec<i64> = xs.iter().map(|&n| n as i64 * 2).collect();
        prop_assert_eq!(collected, Ok::<_, String>(expected));
    }

    #[test]
    fn filter_agrees_with_iterator_filter(xs in prop::collection::vec(any::<i32>(), 0..100)) {
        let collected = block_on(
            source::from_iter(xs.clone())
                .filter(|n| n % 2 == 0)
                .to_vec(),
        );
        let expected: Vec<i32> = xs.into_iter().filter(|n| n % 2 == 0).collect();
        prop_assert_eq!(collected, Ok::<_, String>(expected));
    }

    #[test]
    fn concat_agrees_with_concatenation(
        xs in prop::collection::vec(any::<i32>(), 0..50),
        ys in prop::collection::vec(any::<i32>(), 0..50),
    ) {
        let collected = block_on(
            source::from_iter(xs.clone())
                .concat(source::from_iter(ys.clone()))
                .to_vec(),
        );
        let expected: Vec<i32> = xs.into_iter().chain(ys).collect();
        prop_assert_eq!(collected, Ok::<_, String>(expected));
    }

    #[test]
    fn fold_agrees_with_iterator_fold(
        xs in prop::collection::vec(any::<i32>(), 0..100),
        seed in any::<i64>(),
    ) {
        let folded = block_on(
            source::from_iter(xs.clone())
                .fold(seed, |acc, n| acc.wrapping_add(n as i64)),
        );
        let expected = xs.into_iter().fold(seed, |acc, n| acc.wrapping_add(n as i64));
        prop_assert_eq!(folded, Ok::<_, String>(expected));
    }

    #[test]
    fn map_with_state_indexes_like_enumerate(
        xs in prop::collection::vec(any::<i32>(), 0..100),
    ) {
        let indexed = block_on(
            source::from_iter(xs.clone())
                .map_with_state(0usize, |i, item| (i + 1, (i, item)))
                .to_vec(),
        );
        let expected: Vec<(usize, i32)> = xs.into_iter().enumerate().collect();
        prop_assert_eq!(indexed, Ok::<_, String>(expected));
    }

    #[test]
    fn flat_map_agrees_with_iterator_flat_map(
        xs in prop::collection::vec(any::<i32>(), 0..50),
    ) {
        let collected = block_on(
            source::from_iter(xs.clone())
                .flat_map(|n| source::from_iter(vec![n, n]))
                .to_vec(),
        );
        let expected: Vec<i32> = xs.into_iter().flat_map(|n| [n, n]).collect();
        prop_assert_eq!(collected, Ok::<_, String>(expected));
    }
}
