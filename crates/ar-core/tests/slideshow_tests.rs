// Host-side tests for slideshow navigation.

use ar_core::*;

fn slides(n: usize) -> Slideshow<usize> {
    Slideshow::new((0..n).collect()).unwrap()
}

#[test]
fn empty_slideshow_is_rejected() {
    assert_eq!(
        Slideshow::<String>::new(Vec::new()),
        Err(CoreError::EmptySlideshow)
    );
}

#[test]
fn next_len_times_returns_to_start() {
    for n in 1..=7 {
        let mut s = slides(n);
        for start in 0..n {
            while s.current_index() != start {
                s.next();
            }
            for _ in 0..n {
                s.next();
            }
            assert_eq!(s.current_index(), start, "len {n} start {start}");
        }
    }
}

#[test]
fn prev_wraps_from_first_to_last() {
    let mut s = slides(3);
    assert_eq!(s.prev(), 2);
    assert_eq!(s.prev(), 1);
    assert_eq!(s.prev(), 0);
    assert_eq!(*s.current(), 0);
}

#[test]
fn single_slide_cycles_in_place() {
    let mut s = slides(1);
    assert_eq!(s.next(), 0);
    assert_eq!(s.prev(), 0);
}

#[test]
fn next_then_prev_is_identity() {
    let mut s = slides(4);
    s.next();
    s.next();
    let at = s.current_index();
    s.next();
    s.prev();
    assert_eq!(s.current_index(), at);
    assert_eq!(s.len(), 4);
}
