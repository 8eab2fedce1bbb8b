use std::cell::RefCell;
use std::rc::Rc;

use auraailyf::services::{start_typewriter, VirtualScheduler};
use pretty_assertions::assert_eq;

/// Start a typewriter and record `(time, text)` for every render.
fn record(clock: &Rc<VirtualScheduler>, text: &str, delay: u32) -> Rc<RefCell<Vec<(u64, String)>>> {
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = frames.clone();
    let timer = clock.clone();
    start_typewriter(clock.clone(), text, delay, move |revealed| {
        sink.borrow_mut().push((timer.now(), revealed.to_string()));
    });
    frames
}

#[test]
fn reveals_one_character_per_tick() {
    let clock = Rc::new(VirtualScheduler::new());
    let frames = record(&clock, "AURAAILYF", 150);

    assert_eq!(*frames.borrow(), vec![(0, String::new()), (0, "A".to_string())]);

    clock.run_until_idle();
    let frames = frames.borrow();
    // Clearing render plus one append per character
    assert_eq!(frames.len(), 1 + 9);
    assert_eq!(frames.last().map(|(_, text)| text.as_str()), Some("AURAAILYF"));
    assert_eq!(clock.now(), 8 * 150);

    for pair in frames[1..].windows(2) {
        assert!(pair[1].0 - pair[0].0 >= 150);
        assert_eq!(pair[1].1.chars().count(), pair[0].1.chars().count() + 1);
    }
}

#[test]
fn nothing_is_scheduled_after_completion() {
    let clock = Rc::new(VirtualScheduler::new());
    let frames = record(&clock, "abc", 100);

    clock.advance(200);
    assert_eq!(frames.borrow().last().map(|(_, t)| t.clone()), Some("abc".to_string()));
    assert_eq!(clock.pending(), 0);

    clock.advance(10_000);
    assert_eq!(frames.borrow().len(), 4);
}

#[test]
fn restarting_begins_from_an_empty_container() {
    let clock = Rc::new(VirtualScheduler::new());
    let first = record(&clock, "hi", 10);
    clock.run_until_idle();
    assert_eq!(first.borrow().last().map(|(_, t)| t.clone()), Some("hi".to_string()));

    let second = record(&clock, "hi", 10);
    assert_eq!(second.borrow()[0].1, "");
    clock.run_until_idle();
    assert_eq!(second.borrow().len(), 3);
}

#[test]
fn empty_text_only_clears() {
    let clock = Rc::new(VirtualScheduler::new());
    let frames = record(&clock, "", 50);
    assert_eq!(*frames.borrow(), vec![(0, String::new())]);
    assert_eq!(clock.pending(), 0);
}
