//! Ship occupancy for one game: random fleet placement and shot lookup.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{GameConfig, PlacementPolicy, SunkDetection, BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::ship::{Orientation, Ship, ShipType};
use core::fmt;
use log::debug;
use rand::Rng;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Occupancy mask sized for the game board.
pub type Grid = BitBoard<u128, GRID_SIZE>;

/// A ship placed on the game board.
pub type PlacedShip = Ship<u128, GRID_SIZE>;

/// The 10×10 grid and the ships laid out on it.
///
/// Firing never changes a `Board`; the caller keeps track of which cells have
/// been fired upon and hands that mask back when asking about sunk ships.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ship_map: Grid,
    ships: [Option<PlacedShip>; NUM_SHIPS],
    placed: usize,
    placement: PlacementPolicy,
    sunk_detection: SunkDetection,
}

impl Board {
    /// Empty board (no ships placed).
    pub fn new(config: GameConfig) -> Self {
        Board {
            ship_map: Grid::new(),
            ships: [None; NUM_SHIPS],
            placed: 0,
            placement: config.placement,
            sunk_detection: config.sunk_detection,
        }
    }

    /// Clear the grid and place the standard fleet at random.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        *self = Board::new(GameConfig {
            placement: self.placement,
            sunk_detection: self.sunk_detection,
        });
        for def in SHIPS {
            self.place_one_ship(rng, def)?;
        }
        debug!("board reset with {} ship cells", self.ship_map.count_ones());
        Ok(())
    }

    /// Place a single ship at a random free slot and return it.
    pub fn place_one_ship<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<PlacedShip, BoardError> {
        let len = ship_type.length();
        let mut attempts: u32 = 0;
        loop {
            if let PlacementPolicy::Capped { attempts: cap } = self.placement {
                if attempts >= cap {
                    debug!(
                        "{} not placed after {} random attempts, scanning",
                        ship_type.name(),
                        attempts
                    );
                    let (r, c, orient) = self
                        .first_free_slot(len)
                        .ok_or(BoardError::UnableToPlaceShip)?;
                    return self.place(ship_type, r, c, orient);
                }
            }
            attempts += 1;

            let r = rng.random_range(0..GRID_SIZE);
            let c = rng.random_range(0..GRID_SIZE);
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if self.can_place(r, c, len, orient) {
                debug!(
                    "placed {} at ({}, {}) {:?} after {} attempts",
                    ship_type.name(),
                    r,
                    c,
                    orient,
                    attempts
                );
                return self.place(ship_type, r, c, orient);
            }
        }
    }

    /// Place a ship at an explicit origin and orientation.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<PlacedShip, BoardError> {
        if self.placed >= NUM_SHIPS {
            return Err(BoardError::UnableToPlaceShip);
        }
        let ship = PlacedShip::new(ship_type, orientation, row, col)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships[self.placed] = Some(ship);
        self.placed += 1;
        Ok(ship)
    }

    /// Whether `length` cells from (`row`, `col`) along `orientation` are all
    /// on the grid and empty.
    pub fn can_place(&self, row: usize, col: usize, length: usize, orientation: Orientation) -> bool {
        (0..length).all(|i| {
            let (r, c) = orientation.step(row, col, i);
            r < GRID_SIZE && c < GRID_SIZE && !self.ship_map.get(r, c).unwrap_or(true)
        })
    }

    fn first_free_slot(&self, length: usize) -> Option<(usize, usize, Orientation)> {
        (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
            .flat_map(|(r, c)| {
                [Orientation::Horizontal, Orientation::Vertical]
                    .into_iter()
                    .map(move |o| (r, c, o))
            })
            .find(|&(r, c, o)| self.can_place(r, c, length, o))
    }

    /// Resolve a shot at (`row`, `col`). The board is left untouched.
    pub fn fire_at(&self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        if self.ship_map.get(row, col)? {
            Ok(ShotOutcome::Hit)
        } else {
            Ok(ShotOutcome::Miss)
        }
    }

    /// Whether the ship covering (`row`, `col`) has every cell in `hits`.
    ///
    /// Always `false` under [`SunkDetection::Placeholder`].
    pub fn is_ship_fully_sunk(&self, row: usize, col: usize, hits: &Grid) -> bool {
        match self.sunk_detection {
            SunkDetection::Placeholder => false,
            SunkDetection::Tracked => self.ship_at(row, col).is_some_and(|s| s.is_sunk(hits)),
        }
    }

    /// The ship occupying (`row`, `col`), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&PlacedShip> {
        self.ships().find(|s| s.contains(row, col))
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &PlacedShip> {
        self.ships.iter().flatten()
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    /// Number of SHIP cells on the grid.
    pub fn occupied_cells(&self) -> usize {
        self.ship_map.count_ones()
    }

    pub fn sunk_detection(&self) -> SunkDetection {
        self.sunk_detection
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(GameConfig::default())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  ships: {:?},\n  placement: {:?},\n  sunk_detection: {:?}\n}}",
            self.ship_map, self.ships, self.placement, self.sunk_detection
        )
    }
}
