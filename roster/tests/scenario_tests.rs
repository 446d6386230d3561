use roster_lib::rank::Rank;
use roster_lib::record::{is_topper, Record};
use roster_lib::tracer::sink::MemorySink;
use roster_lib::tracer::Traced;
use roster_lib::validation::ValidationError;

#[test]
fn test_end_to_end_scenario() {
    let rahul = Record::new("Rahul", 92).unwrap();
    assert_eq!(rahul.rank(), Rank::A);

    let mut anita = Record::new("Anita", 67).unwrap();
    assert_eq!(anita.rank(), Rank::C);

    anita.set_score(88).unwrap();
    assert_eq!(anita.rank(), Rank::B);

    let sink = MemorySink::new();
    let check = Traced::with_sink("is_topper", is_topper, &sink);
    assert!(check.call((&rahul,)));
    assert!(!check.call((&anita,)));
    assert_eq!(sink.lines().len(), 4);
}

#[test]
fn test_rejected_update_leaves_record_intact() {
    let mut anita = Record::new("Anita", 67).unwrap();
    let before = anita.clone();

    assert_eq!(anita.set_score(-3), Err(ValidationError::new(-3)));
    assert_eq!(anita.set_score(101), Err(ValidationError::new(101)));
    assert_eq!(anita, before);
}

#[test]
fn test_traced_fallible_update_propagates_error() {
    let sink = MemorySink::new();
    let create = Traced::with_sink("create", |score: i32| Record::new("Ghost", score), &sink);

    let err = create.try_call((250,)).unwrap_err();
    assert_eq!(err.to_string(), "Marks must be between 0 and 100");
    assert_eq!(sink.lines(), vec!["[LOG] Calling: create()"]);

    let record = create.try_call((75,)).unwrap();
    assert_eq!(record.rank(), Rank::B);
    assert_eq!(
        sink.lines().last().unwrap(),
        "[LOG] create() returned: Record(identifier='Ghost', score=75, rank='B')"
    );
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_score_tracks_last_accepted_update(
            start in 0i32..=100,
            updates in prop::collection::vec(-50i32..=150, 0..20),
        ) {
            let mut record = Record::new("r", start).unwrap();
            let mut expected = start;
            for value in updates {
                let accepted = record.set_score(value).is_ok();
                prop_assert_eq!(accepted, (0..=100).contains(&value));
                if accepted {
                    expected = value;
                }
                prop_assert_eq!(record.score(), expected);
                prop_assert_eq!(record.rank(), Rank::from_score(expected));
                prop_assert_eq!(is_topper(&record), expected >= 90);
            }
        }
    }
}
