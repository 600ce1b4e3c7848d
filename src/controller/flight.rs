use std::cell::Cell;

/// Tracks the most recently started flow of one kind. A flow holding an
/// older ticket must drop whatever its requests return.
#[derive(Debug, Default)]
pub struct Flight {
    latest: Cell<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Flight {
    pub fn begin(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}
