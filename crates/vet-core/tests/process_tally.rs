//! Exercises the process-wide tally in its own test binary, so no other test
//! can have touched the counter before this one observes its initial state.

use vet_core::{has_errors, tally};

#[test]
fn process_tally_is_monotonic() {
    assert!(!has_errors());
    assert_eq!(tally::process().count(), 0);

    tally::process().record_failure();
    assert!(has_errors());
    assert_eq!(tally::process().count(), 1);

    tally::process().record_failure();
    assert!(has_errors());
    assert_eq!(tally::process().count(), 2);
}
