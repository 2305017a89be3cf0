use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("a carousel needs at least one item")]
    Empty,
}

/// Which item is on screen and whether autoplay is on.
///
/// The item list is fixed for the lifetime of the store. Every write to the
/// index goes through [`CarouselState::go_to`], which normalizes into range,
/// so the index is valid by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState<T> {
    items: Vec<T>,
    current: usize,
    autoplay: bool,
}

impl<T> CarouselState<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            current: 0,
            autoplay: true,
        })
    }

    /// Jump to `index`, wrapping any signed value into `[0, len)`.
    pub fn go_to(&mut self, index: i64) -> usize {
        let len = self.items.len() as i64;
        self.current = index.rem_euclid(len) as usize;
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current as i64 + 1)
    }

    pub fn previous(&mut self) -> usize {
        self.go_to(self.current as i64 - 1)
    }

    /// Flip autoplay and return the new value.
    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplay = !self.autoplay;
        self.autoplay
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &T {
        &self.items[self.current]
    }

    pub fn previous_index(&self) -> usize {
        (self.current + self.items.len() - 1) % self.items.len()
    }

    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.items.len()
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(n: usize) -> CarouselState<usize> {
        CarouselState::new((0..n).collect()).unwrap()
    }

    #[test]
    fn rejects_empty_items() {
        assert_eq!(
            CarouselState::<u8>::new(Vec::new()).unwrap_err(),
            CarouselError::Empty
        );
    }

    #[test]
    fn starts_at_first_item_with_autoplay_on() {
        let s = state(3);
        assert_eq!(s.current_index(), 0);
        assert!(s.is_autoplay());
        assert_eq!(*s.current_item(), 0);
    }

    #[test]
    fn go_to_normalizes_any_index() {
        for n in 1..=7usize {
            let mut s = state(n);
            for k in -25i64..=25 {
                let got = s.go_to(k);
                let n_i = n as i64;
                assert_eq!(got as i64, ((k % n_i) + n_i) % n_i, "n={n} k={k}");
                assert!(got < n);
                assert_eq!(s.current_index(), got);
            }
        }
    }

    #[test]
    fn go_to_handles_extreme_values() {
        let mut s = state(6);
        assert!(s.go_to(i64::MIN) < 6);
        assert!(s.go_to(i64::MAX) < 6);
    }

    #[test]
    fn next_and_previous_round_trip() {
        for n in 1..=6usize {
            let mut s = state(n);
            for start in 0..n {
                s.go_to(start as i64);
                s.next();
                s.previous();
                assert_eq!(s.current_index(), start);
                s.previous();
                s.next();
                assert_eq!(s.current_index(), start);
            }
        }
    }

    #[test]
    fn neighbours_are_one_step_away() {
        for n in 1..=6usize {
            let mut s = state(n);
            for i in 0..n {
                s.go_to(i as i64);
                assert_eq!(s.next_index(), (i + 1) % n);
                assert_eq!(s.previous_index(), (i + n - 1) % n);
            }
        }
    }

    #[test]
    fn six_items_wrap_both_ways() {
        let mut s = state(6);
        for _ in 0..5 {
            s.next();
        }
        assert_eq!(s.current_index(), 5);
        assert_eq!(s.next(), 0);
        assert_eq!(s.previous(), 5);
    }

    #[test]
    fn single_item_always_stays_put() {
        let mut s = state(1);
        assert_eq!(s.next(), 0);
        assert_eq!(s.previous(), 0);
        assert_eq!(s.previous_index(), 0);
        assert_eq!(s.next_index(), 0);
    }

    #[test]
    fn toggle_autoplay_flips() {
        let mut s = state(2);
        assert!(!s.toggle_autoplay());
        assert!(s.toggle_autoplay());
    }
}
