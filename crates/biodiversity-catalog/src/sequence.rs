//! Request tickets for catalog fetches.
//!
//! Each load path writes its own slot of viewer state. A fetch takes a
//! ticket for its slot before it starts; when the response arrives it is
//! applied only if no newer ticket was issued for that slot in the meantime.
//! Late responses from superseded fetches are dropped.

use tracing::debug;

/// The independent state slots a fetch can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchSlot {
    Campuses,
    CampusSpecies,
    AllCampusSpecies,
    SpeciesImages,
}

impl FetchSlot {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            FetchSlot::Campuses => 0,
            FetchSlot::CampusSpecies => 1,
            FetchSlot::AllCampusSpecies => 2,
            FetchSlot::SpeciesImages => 3,
        }
    }
}

/// A monotonic request number for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    slot: FetchSlot,
    seq: u64,
}

impl FetchTicket {
    pub fn slot(&self) -> FetchSlot {
        self.slot
    }
}

/// Issues tickets and decides which responses are still current.
#[derive(Debug, Clone, Default)]
pub struct FetchSequencer {
    latest: [u64; FetchSlot::COUNT],
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch for `slot`, superseding any fetch already in flight.
    pub fn begin(&mut self, slot: FetchSlot) -> FetchTicket {
        let latest = &mut self.latest[slot.index()];
        *latest += 1;
        FetchTicket {
            slot,
            seq: *latest,
        }
    }

    /// Whether a response carrying `ticket` may still be applied.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        let current = self.latest[ticket.slot.index()] == ticket.seq;
        if !current {
            debug!(
                slot = ?ticket.slot,
                seq = ticket.seq,
                latest = self.latest[ticket.slot.index()],
                "Discarding stale fetch response"
            );
        }
        current
    }
}
