/// State is the three-valued status a ring cell can hold.
/// The numeric value (0, 1, 2) is what neighbourhood sums and counts add up.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum State {
    #[default]
    Empty,
    Low,
    High,
}

impl State {
    /// All states in numeric order
    pub const ALL: [State; 3] = [State::Empty, State::Low, State::High];

    /// Numeric value of the state (0, 1 or 2)
    pub const fn value(self) -> u8 {
        match self {
            State::Empty => 0,
            State::Low => 1,
            State::High => 2,
        }
    }

    /// Build a state from a base-3 digit; anything above 2 is rejected
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(State::Empty),
            1 => Some(State::Low),
            2 => Some(State::High),
            _ => None,
        }
    }

    /// Check if the cell is currently active (non-zero)
    pub const fn is_active(self) -> bool {
        !matches!(self, State::Empty)
    }

    /// Glyph used by the console rendering
    pub const fn symbol(self) -> char {
        match self {
            State::Empty => ' ',
            State::Low => '-',
            State::High => '+',
        }
    }
}

/// One cell of the ring.
///
/// `local_sum` is a cache of `left + self + right` as of the last
/// [`World::recompute_sums`](super::World::recompute_sums); it goes stale
/// as soon as any status changes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub status: State,
    pub local_sum: u8,
    pub count: u32,
}

impl Cell {
    /// Take on a new status and add its value to the lifetime count
    pub fn absorb(&mut self, status: State) {
        self.status = status;
        self.count += u32::from(status.value());
    }
}
