//! Property tests for the tracer's consumption protocols.

#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;

use causetrace::{Detail, Ordering, TraceOption, Tracer};
use common::{chain_of, read_all_chunked};

fn brief(ordering: Ordering) -> [TraceOption; 2] {
    [
        TraceOption::Ordering(ordering),
        TraceOption::Detail(Detail::Brief),
    ]
}

proptest! {
    #[test]
    fn read_next_yields_one_segment_per_error(depth in 1usize..12, newest in any::<bool>()) {
        let err = chain_of(depth);
        let ordering = if newest { Ordering::NewestFirst } else { Ordering::OldestFirst };
        let mut tracer = Tracer::with_options(Some(&*err), brief(ordering)).unwrap();

        let mut count = 0;
        while tracer.read_next().is_some() {
            count += 1;
        }
        prop_assert_eq!(count, depth);
        prop_assert!(tracer.read_next().is_none());
    }

    #[test]
    fn orderings_are_reverses(depth in 1usize..12) {
        let err = chain_of(depth);
        let mut oldest_tracer = Tracer::with_options(Some(&*err), brief(Ordering::OldestFirst)).unwrap();
        let mut newest_tracer = Tracer::with_options(Some(&*err), brief(Ordering::NewestFirst)).unwrap();
        let oldest: Vec<String> = oldest_tracer.segments().collect();
        let mut newest: Vec<String> = newest_tracer.segments().collect();
        newest.reverse();
        prop_assert_eq!(oldest, newest);
    }

    #[test]
    fn chunked_read_matches_read_next(
        depth in 1usize..8,
        chunk in 1usize..32,
        detailed in any::<bool>(),
    ) {
        let err = chain_of(depth);
        let options = [TraceOption::Detail(Detail::from_enabled(detailed))];

        let mut chunked = Tracer::with_options(Some(&*err), options.clone()).unwrap();
        let streamed = read_all_chunked(&mut chunked, chunk);

        let mut whole_tracer = Tracer::with_options(Some(&*err), options).unwrap();
        let whole: String = whole_tracer.segments().collect();
        prop_assert_eq!(streamed, whole.into_bytes());
    }

    #[test]
    fn display_never_moves_the_original(depth in 1usize..8, consumed in 0usize..8) {
        let err = chain_of(depth);
        let mut tracer = Tracer::new(Some(&*err));
        for _ in 0..consumed {
            let _ = tracer.read_next();
        }
        let remaining = tracer.remaining();
        let history = tracer.history().to_vec();

        let rendered = tracer.to_string();
        prop_assert_eq!(rendered.lines().count(), depth);
        prop_assert_eq!(tracer.remaining(), remaining);
        prop_assert_eq!(tracer.history(), history.as_slice());
    }
}
