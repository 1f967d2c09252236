#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use super::*;

fn shots(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("shot{i}.png")).collect()
}

/// Closed form of any advance sequence.
fn expected_cursor(start: usize, deltas: &[i64], len: usize) -> usize {
    let sum: i64 = deltas.iter().sum();
    let len = len as i64;
    ((((start as i64) + sum) % len + len) % len) as usize
}

#[test]
fn wrap_index_handles_both_directions() {
    assert_eq!(wrap_index(-1, 5), 4);
    assert_eq!(wrap_index(5, 5), 0);
    assert_eq!(wrap_index(-6, 5), 4);
    assert_eq!(wrap_index(12, 5), 2);
    assert_eq!(wrap_index(0, 1), 0);
    assert_eq!(wrap_index(3, 0), 0);
}

#[test]
fn empty_set_has_no_session() {
    assert!(CarouselSession::new(Vec::new(), 0).is_none());
}

#[test]
fn start_is_wrapped_into_range() {
    let session = CarouselSession::new(shots(3), 4).unwrap();
    assert_eq!(session.cursor(), 1);
}

#[test]
fn advance_forward_wraps_to_first() {
    let mut session = CarouselSession::new(shots(3), 2).unwrap();
    assert_eq!(session.advance(1), "shot1.png");
    assert_eq!(session.cursor(), 0);
}

#[test]
fn advance_backward_wraps_to_last() {
    let mut session = CarouselSession::new(shots(3), 0).unwrap();
    assert_eq!(session.advance(-1), "shot3.png");
    assert_eq!(session.cursor(), 2);
}

#[test]
fn singleton_stays_put() {
    let mut session = CarouselSession::new(vec!["x.png".to_owned()], 0).unwrap();
    session.advance(1);
    session.advance(-3);
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.current(), "x.png");
}

#[test]
fn cursor_follows_closed_form_for_mixed_sequences() {
    let sequences: &[&[i64]] = &[
        &[1, 1, 1, 1, 1, 1, 1],
        &[-1, -1, -1, -1],
        &[1, -1, -1, 1, -1, -1, -1],
        &[7, -13, 2],
        &[-100, 3, 41],
    ];
    for len in 1..=6 {
        for start in 0..len {
            for deltas in sequences {
                let mut session = CarouselSession::new(shots(len), start).unwrap();
                for delta in *deltas {
                    session.advance(*delta);
                }
                assert_eq!(
                    session.cursor(),
                    expected_cursor(start, deltas, len),
                    "len={len} start={start} deltas={deltas:?}"
                );
            }
        }
    }
}

#[test]
fn extreme_deltas_still_wrap_exactly() {
    for delta in [i64::MAX, i64::MIN, i64::MAX - 1, i64::MIN + 1] {
        let mut session = CarouselSession::new(shots(3), 2).unwrap();
        session.advance(delta);
        let expected = (2 + i128::from(delta)).rem_euclid(3) as usize;
        assert_eq!(session.cursor(), expected, "delta={delta}");
    }
}

#[test]
fn max_delta_from_last_lands_on_first() {
    let mut session = CarouselSession::new(shots(3), 2).unwrap();
    session.advance(i64::MAX);
    assert_eq!(session.cursor(), 0);
    session.advance(i64::MIN);
    assert_eq!(session.cursor(), 1);
}

#[test]
fn caption_is_one_based() {
    let mut session = CarouselSession::new(shots(5), 0).unwrap();
    assert_eq!(session.caption("Project Screenshot"), "Project Screenshot (1 of 5)");
    session.advance(1);
    assert_eq!(session.caption("Project Screenshot"), "Project Screenshot (2 of 5)");
}
