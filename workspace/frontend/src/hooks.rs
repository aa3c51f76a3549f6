use std::cell::Cell;
use std::rc::Rc;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> From<Result<T, String>> for FetchState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err),
        }
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Counter that lets async work check whether it is still the latest request.
///
/// Clones share the counter. Starting a new request invalidates every ticket
/// handed out before it.
#[derive(Clone, Debug, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    pub fn next(&self) -> Ticket {
        let id = self.0.get().wrapping_add(1);
        self.0.set(id);
        Ticket {
            current: self.0.clone(),
            id,
        }
    }
}

/// Handed to one request; stale once a newer request started.
#[derive(Debug)]
pub struct Ticket {
    current: Rc<Cell<u64>>,
    id: u64,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.current.get() == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_is_current() {
        let generation = Generation::default();
        let first = generation.next();
        assert!(first.is_current());

        let second = generation.clone().next();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn slow_first_response_does_not_overwrite_newer_one() {
        let generation = Generation::default();
        let mut shown = None;

        let slow = generation.next();
        let fast = generation.next();
        for (ticket, value) in [(fast, "b.csv"), (slow, "a.csv")] {
            if ticket.is_current() {
                shown = Some(value);
            }
        }
        assert_eq!(shown, Some("b.csv"));
    }

    #[test]
    fn fetch_state_from_result() {
        let ok: FetchState<u32> = Ok(3).into();
        assert_eq!(ok.data(), Some(&3));
        let err: FetchState<u32> = Err("boom".to_string()).into();
        assert!(err == FetchState::Error("boom".to_string()));
        assert!(FetchState::<u32>::Loading.is_loading());
    }
}
