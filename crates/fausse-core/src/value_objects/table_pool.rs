//! Table pool and booking policy

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

use super::time_slot::OccupancyWindow;
use crate::error::DomainError;

pub const DEFAULT_TABLE_COUNT: i32 = 30;
pub const DEFAULT_DURATION_MINUTES: i64 = 90;
pub const DEFAULT_MAX_PARTY_SIZE: i32 = 20;

/// The conceptual set of tables numbered `1..=size`
///
/// Tables are not persisted; a reservation only records the number it was
/// given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePool {
    size: i32,
}

impl TablePool {
    pub fn new(size: i32) -> Self {
        Self { size: size.max(1) }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn contains(&self, table_number: i32) -> bool {
        (1..=self.size).contains(&table_number)
    }

    /// Tables not in the occupied set, in ascending order
    pub fn free_tables(&self, occupied: &BTreeSet<i32>) -> Vec<i32> {
        (1..=self.size).filter(|t| !occupied.contains(t)).collect()
    }

    /// The pool counts as full once it has as many distinct occupied tables
    /// as it has tables
    pub fn is_full(&self, occupied: &BTreeSet<i32>) -> bool {
        occupied.len() >= self.size as usize
    }

    /// Tables left for the window, never negative
    pub fn remaining(&self, occupied: &BTreeSet<i32>) -> i32 {
        let taken = i32::try_from(occupied.len()).unwrap_or(i32::MAX);
        (self.size - taken).max(0)
    }

    /// Pick a table uniformly at random among the free ones
    ///
    /// If the occupied set leaves nothing free even though the pool was not
    /// reported full, any table of the pool may be returned.
    pub fn assign<R: Rng + ?Sized>(&self, occupied: &BTreeSet<i32>, rng: &mut R) -> i32 {
        let free = self.free_tables(occupied);
        match free.choose(rng) {
            Some(table) => *table,
            None => rng.gen_range(1..=self.size),
        }
    }
}

impl Default for TablePool {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_COUNT)
    }
}

/// Capacity rules for bookings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    pub table_count: i32,
    pub duration_minutes: i64,
    pub max_party_size: i32,
}

impl BookingPolicy {
    pub fn pool(&self) -> TablePool {
        TablePool::new(self.table_count)
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_minutes)
    }

    /// The occupancy window of a reservation starting at `start`
    pub fn window_at(&self, start: NaiveDateTime) -> OccupancyWindow {
        OccupancyWindow::new(start, self.duration())
    }

    /// Party size must be in `1..=max_party_size`
    pub fn check_party_size(&self, guests: i32) -> Result<(), DomainError> {
        if guests > 0 && guests <= self.max_party_size {
            Ok(())
        } else {
            Err(DomainError::InvalidPartySize {
                max: self.max_party_size,
            })
        }
    }

    pub fn check_table_number(&self, table_number: i32) -> Result<(), DomainError> {
        if self.pool().contains(table_number) {
            Ok(())
        } else {
            Err(DomainError::InvalidTableNumber {
                max: self.table_count,
            })
        }
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            table_count: DEFAULT_TABLE_COUNT,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            max_party_size: DEFAULT_MAX_PARTY_SIZE,
        }
    }
}
