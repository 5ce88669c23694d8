use std::collections::BTreeMap;

/// Seats at a table, numbered `0..NUM_SEATS`.
pub const NUM_SEATS: usize = 8;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("starting chips must be positive")]
    NoStarterChips,
    #[error("blind size must be positive and even, got {0}")]
    InvalidBlind(u64),
    #[error("table already at capacity of 8 players")]
    Full,
    #[error("invalid seat number {0}")]
    InvalidSeat(usize),
    #[error("seat {0} is already taken")]
    SeatTaken(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) chips: u64,
    pub(crate) seat: usize,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> u64 {
        self.chips
    }

    pub fn seat(&self) -> usize {
        self.seat
    }
}

/// Seat registry for a game: who sits where, and the table's chip rules.
///
/// ```
/// use poker_showdown::table::Table;
///
/// let mut table = Table::new(1000, 20).unwrap();
/// table.add_player("alice", 3).unwrap();
/// assert_eq!(table.players().count(), 1);
/// assert!(!table.empty_seats().contains(&3));
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    players: BTreeMap<usize, Player>,
    starter_chips: u64,
    blind_size: u64,
}

impl Table {
    pub fn new(starter_chips: u64, blind_size: u64) -> Result<Self, TableError> {
        if starter_chips == 0 {
            return Err(TableError::NoStarterChips);
        }
        if blind_size == 0 || blind_size % 2 != 0 {
            return Err(TableError::InvalidBlind(blind_size));
        }
        Ok(Self { players: BTreeMap::new(), starter_chips, blind_size })
    }

    /// Seat a new player with the starting chips.
    pub fn add_player(&mut self, name: impl Into<String>, seat: usize) -> Result<&Player, TableError> {
        if self.players.len() >= NUM_SEATS {
            return Err(TableError::Full);
        }
        if seat >= NUM_SEATS {
            return Err(TableError::InvalidSeat(seat));
        }
        if self.players.contains_key(&seat) {
            return Err(TableError::SeatTaken(seat));
        }

        let player = Player { name: name.into(), chips: self.starter_chips, seat };
        log::debug!("seated {} at seat {seat}", player.name);
        Ok(self.players.entry(seat).or_insert(player))
    }

    /// Seated players in seat order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(&seat)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Unoccupied seats, ascending.
    pub fn empty_seats(&self) -> Vec<usize> {
        (0..NUM_SEATS).filter(|seat| !self.players.contains_key(seat)).collect()
    }

    pub fn starter_chips(&self) -> u64 {
        self.starter_chips
    }

    pub fn blind_size(&self) -> u64 {
        self.blind_size
    }
}
