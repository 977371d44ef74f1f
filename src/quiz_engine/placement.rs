//! Book-stack placement.
//!
//! Correct answers stack on the central tower in submission order. Wrong
//! answers go to whichever of the four lateral towers is currently lowest,
//! ties resolved left to right, which keeps the lateral towers within one
//! book of each other at all times.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quiz_engine::models::{PlacementRecord, TowerId};

// Stack geometry, in px.
pub const BOOK_HEIGHT_PX: f32 = 16.0;
pub const CENTER_BASE_PX: f32 = 96.0;
pub const LATERAL_BASE_PX: f32 = 20.0;
pub const LATERAL_X_OFFSETS_PX: [f32; 4] = [-300.0, -150.0, 150.0, 300.0];

// Jitter bounds (symmetric around zero).
pub const CENTER_JITTER_PX: f32 = 5.0;
pub const LATERAL_JITTER_PX: f32 = 4.0;
pub const ROTATION_JITTER_DEG: f32 = 2.0;

/// Occupancy of the four lateral towers, indexed like [`TowerId::LATERAL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerCounts([u32; 4]);

impl TowerCounts {
    pub fn get(&self, tower: TowerId) -> u32 {
        tower.lateral_index().map_or(0, |i| self.0[i])
    }

    pub fn as_array(&self) -> [u32; 4] {
        self.0
    }

    /// Lowest tower; the leftmost one wins a tie.
    pub fn least_loaded(&self) -> TowerId {
        let mut best = 0;
        for i in 1..self.0.len() {
            if self.0[i] < self.0[best] {
                best = i;
            }
        }
        TowerId::LATERAL[best]
    }

    /// Difference between the tallest and shortest lateral tower.
    pub fn spread(&self) -> u32 {
        let max = self.0.iter().copied().max().unwrap_or(0);
        let min = self.0.iter().copied().min().unwrap_or(0);
        max - min
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    fn increment(&mut self, tower: TowerId) {
        if let Some(i) = tower.lateral_index() {
            self.0[i] += 1;
        }
    }
}

/// Per-session placement state. Append-only.
#[derive(Debug, Clone, Default)]
pub struct PlacementEngine {
    towers: TowerCounts,
    records: Vec<PlacementRecord>,
}

impl PlacementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the book for one answered question and record it.
    pub fn place<R: Rng>(&mut self, rng: &mut R, question_index: usize, is_correct: bool) -> PlacementRecord {
        let (tower_id, rank, jitter_bound) = if is_correct {
            (TowerId::Center, self.center_height(), CENTER_JITTER_PX)
        } else {
            let tower = self.towers.least_loaded();
            let rank = self.towers.get(tower);
            self.towers.increment(tower);
            (tower, rank, LATERAL_JITTER_PX)
        };

        let record = PlacementRecord {
            question_index,
            is_correct,
            tower_id,
            rank,
            horizontal_jitter: rng.gen_range(-jitter_bound..=jitter_bound),
            rotation_jitter: rng.gen_range(-ROTATION_JITTER_DEG..=ROTATION_JITTER_DEG),
        };
        debug!(question_index, %tower_id, rank, "book placed");

        self.records.push(record.clone());
        record
    }

    /// Books on the central tower; derived from the records, not tracked.
    pub fn center_height(&self) -> u32 {
        self.records.iter().filter(|r| r.is_correct).count() as u32
    }

    pub fn tower_counts(&self) -> TowerCounts {
        self.towers
    }

    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }
}

impl PlacementRecord {
    /// Distance of this book's bottom edge from the floor.
    pub fn bottom_px(&self) -> f32 {
        let base = if self.tower_id.is_lateral() { LATERAL_BASE_PX } else { CENTER_BASE_PX };
        base + self.rank as f32 * BOOK_HEIGHT_PX
    }

    /// Horizontal offset from the scene center, jitter included.
    pub fn x_offset(&self) -> f32 {
        let base = self.tower_id.lateral_index().map_or(0.0, |i| LATERAL_X_OFFSETS_PX[i]);
        base + self.horizontal_jitter
    }
}
