//! Fixed game constants and the runtime knobs for the two open behaviors:
//! how hard ship placement retries and whether sinking is detected.

use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Consecutive misses that add one strike.
pub const MISSES_PER_STRIKE: u32 = 5;

/// Strikes that end the game in a loss.
pub const STRIKES_TO_LOSE: u32 = 3;

/// How `Board::place_one_ship` searches for a free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPolicy {
    /// Keep drawing random slots until one fits. Not provably bounded, but the
    /// standard fleet occupies only 17 of 100 cells.
    #[default]
    Unbounded,
    /// Draw at most `attempts` random slots, then take the first fitting slot
    /// in row-major order, horizontal before vertical.
    Capped { attempts: u32 },
}

/// Whether a hit can report the ship it belongs to as sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SunkDetection {
    /// Never report a sunk ship.
    #[default]
    Placeholder,
    /// Report sunk when the hit completes every cell of its ship.
    Tracked,
}

/// Runtime configuration for a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub placement: PlacementPolicy,
    pub sunk_detection: SunkDetection,
}

impl GameConfig {
    pub fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_sunk_detection(mut self, sunk_detection: SunkDetection) -> Self {
        self.sunk_detection = sunk_detection;
        self
    }
}
