use chrono::NaiveDateTime;
use drivescope::core::grouping::group_episodes;
use drivescope::models::{EventKind, EventRecord};

fn at(secs: i64) -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2025-03-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
        + chrono::Duration::seconds(secs)
}

fn drowsy(secs: i64) -> EventRecord {
    EventRecord::new(at(secs), EventKind::Drowsy)
}

#[test]
fn test_gap_over_threshold_splits() {
    let records = vec![drowsy(0), drowsy(5), drowsy(9), drowsy(25)];

    let episodes = group_episodes(&records, 10.0);

    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0].len(), 3);
    assert_eq!(episodes[0].start(), at(0));
    assert_eq!(episodes[0].end(), at(9));
    assert_eq!(episodes[1].len(), 1);
    assert_eq!(episodes[1].start(), at(25));
}

#[test]
fn test_gap_exactly_threshold_merges() {
    let records = vec![drowsy(0), drowsy(10)];

    let episodes = group_episodes(&records, 10.0);

    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].len(), 2);
}

#[test]
fn test_empty_input_yields_no_episodes() {
    assert!(group_episodes(&[], 10.0).is_empty());
}

#[test]
fn test_every_event_lands_in_exactly_one_episode() {
    let records = vec![drowsy(0), drowsy(3), drowsy(40), drowsy(41), drowsy(90)];

    let episodes = group_episodes(&records, 10.0);

    assert!(episodes.iter().all(|e| !e.is_empty()));
    let total: usize = episodes.iter().map(|e| e.len()).sum();
    assert_eq!(total, records.len());
}

#[test]
fn test_unsorted_input_is_sorted_first() {
    let shuffled = vec![drowsy(25), drowsy(0), drowsy(9), drowsy(5)];
    let sorted = vec![drowsy(0), drowsy(5), drowsy(9), drowsy(25)];

    let a = group_episodes(&shuffled, 10.0);
    let b = group_episodes(&sorted, 10.0);

    assert_eq!(a.len(), b.len());
    for (ea, eb) in a.iter().zip(b.iter()) {
        assert_eq!(ea.start(), eb.start());
        assert_eq!(ea.end(), eb.end());
        assert_eq!(ea.len(), eb.len());
    }
}

#[test]
fn test_episode_kinds_keep_first_appearance_order() {
    let records = vec![
        EventRecord::new(at(0), EventKind::Yawning),
        EventRecord::new(at(2), EventKind::Drowsy),
        EventRecord::new(at(4), EventKind::Yawning),
    ];

    let episodes = group_episodes(&records, 10.0);

    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].kinds(), vec!["Yawning", "Drowsy"]);
}
