use std::cell::RefCell;
use std::rc::Rc;

use super::scheduler::{Millis, Scheduler};

/// Cursor over a fixed text, revealing one character per tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
    revealed: String,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
            revealed: String::with_capacity(text.len()),
        }
    }

    /// Append the next character. Returns the text revealed so far, or
    /// `None` once everything has been shown.
    pub fn tick(&mut self) -> Option<&str> {
        let next = *self.chars.get(self.index)?;
        self.revealed.push(next);
        self.index += 1;
        Some(&self.revealed)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }
}

struct Run {
    typewriter: Typewriter,
    render: Box<dyn FnMut(&str)>,
}

/// Clear the target through `render("")`, then reveal `text` one character
/// every `delay` ms. The first character shows immediately and nothing is
/// scheduled after the last one.
pub fn start_typewriter(
    scheduler: Rc<dyn Scheduler>,
    text: &str,
    delay: Millis,
    mut render: impl FnMut(&str) + 'static,
) {
    render("");
    let run = Rc::new(RefCell::new(Run {
        typewriter: Typewriter::new(text),
        render: Box::new(render),
    }));
    step(scheduler, run, delay);
}

fn step(scheduler: Rc<dyn Scheduler>, run: Rc<RefCell<Run>>, delay: Millis) {
    let finished = {
        let mut guard = run.borrow_mut();
        let Run { typewriter, render } = &mut *guard;
        let Some(revealed) = typewriter.tick() else {
            return;
        };
        render(revealed);
        typewriter.is_finished()
    };
    if finished {
        return;
    }

    let next = scheduler.clone();
    scheduler.schedule(delay, Box::new(move || step(next, run, delay)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reveals_characters_in_order() {
        let mut typewriter = Typewriter::new("abc");
        assert_eq!(typewriter.tick(), Some("a"));
        assert_eq!(typewriter.tick(), Some("ab"));
        assert!(!typewriter.is_finished());
        assert_eq!(typewriter.tick(), Some("abc"));
        assert!(typewriter.is_finished());
        assert_eq!(typewriter.tick(), None);
        assert_eq!(typewriter.revealed(), "abc");
    }

    #[test]
    fn multibyte_text_is_revealed_per_character() {
        let mut typewriter = Typewriter::new("né✓");
        assert_eq!(typewriter.tick(), Some("n"));
        assert_eq!(typewriter.tick(), Some("né"));
        assert_eq!(typewriter.tick(), Some("né✓"));
        assert_eq!(typewriter.tick(), None);
    }

    #[test]
    fn empty_text_is_finished_from_the_start() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_finished());
        assert_eq!(typewriter.tick(), None);
    }
}
