// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Level thresholds and the derivations computed from a point total.
//!
//! Points are the single source of truth: the current level, the distance
//! to the next level and the progress-bar fraction are all recomputed from
//! them on demand.

use crate::models::GameLevel;
use once_cell::sync::Lazy;

static STANDARD_LEVELS: Lazy<LevelTable> = Lazy::new(|| LevelTable {
    levels: vec![
        level(
            1,
            "Explorador",
            0,
            &["Acesso ao mapa de negócios"],
            "from-gray-400 to-gray-600",
        ),
        level(
            2,
            "Descobridor",
            100,
            &["Ofertas exclusivas", "Badge de Descobridor"],
            "from-green-400 to-green-600",
        ),
        level(
            3,
            "Aventureiro",
            300,
            &["Descontos especiais", "Prioridade em eventos"],
            "from-blue-400 to-blue-600",
        ),
        level(
            4,
            "Embaixador",
            600,
            &["Cashback em pontos", "Acesso VIP"],
            "from-purple-400 to-purple-600",
        ),
        level(
            5,
            "Lenda Local",
            1000,
            &["Benefícios premium", "Influência na comunidade"],
            "from-yellow-400 to-orange-600",
        ),
    ],
});

fn level(number: u32, name: &str, min_points: u32, benefits: &[&str], color: &str) -> GameLevel {
    GameLevel {
        level: number,
        name: name.to_string(),
        min_points,
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        color: color.to_string(),
    }
}

/// Ordered level table (ascending thresholds).
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTable {
    levels: Vec<GameLevel>,
}

impl LevelTable {
    /// The five-tier table used by the application.
    pub fn standard() -> &'static LevelTable {
        &STANDARD_LEVELS
    }

    /// Build a custom table.
    ///
    /// The first level must start at 0 points, level numbers must strictly
    /// increase and thresholds must not decrease.
    pub fn new(levels: Vec<GameLevel>) -> Result<Self, LevelTableError> {
        let first = levels.first().ok_or(LevelTableError::Empty)?;
        if first.min_points != 0 {
            return Err(LevelTableError::NonZeroBase(first.min_points));
        }

        for pair in levels.windows(2) {
            if pair[1].level <= pair[0].level {
                return Err(LevelTableError::LevelOrder(pair[1].level));
            }
            if pair[1].min_points < pair[0].min_points {
                return Err(LevelTableError::ThresholdOrder(pair[1].level));
            }
        }

        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[GameLevel] {
        &self.levels
    }

    pub fn get(&self, level: u32) -> Option<&GameLevel> {
        self.levels.iter().find(|l| l.level == level)
    }

    /// Highest level in the table.
    pub fn max_level(&self) -> &GameLevel {
        // Non-empty by construction.
        &self.levels[self.levels.len() - 1]
    }

    /// Level held with `points`: the last entry whose threshold is `<= points`.
    pub fn level_for(&self, points: u32) -> &GameLevel {
        self.levels
            .iter()
            .fold(&self.levels[0], |held, l| if points >= l.min_points { l } else { held })
    }

    /// Points still needed for the next level, or 0 at the maximum level.
    pub fn points_to_next_level(&self, points: u32) -> u32 {
        let current = self.level_for(points);
        self.levels
            .iter()
            .find(|l| l.level > current.level)
            .map(|next| next.min_points.saturating_sub(points))
            .unwrap_or(0)
    }

    /// Everything the progress card shows for a point total.
    pub fn progress(&self, points: u32) -> LevelProgress {
        let current = self.level_for(points).clone();
        let is_max_level = current.level == self.max_level().level;
        let points_to_next = self.points_to_next_level(points);

        let fraction = if is_max_level {
            1.0
        } else {
            let earned_in_level = f64::from(points - current.min_points);
            let span = f64::from(points_to_next) + earned_in_level;
            if span == 0.0 {
                1.0
            } else {
                earned_in_level / span
            }
        };

        LevelProgress {
            points,
            level: current,
            points_to_next,
            fraction,
            is_max_level,
        }
    }
}

/// Derived view of a user's standing.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelProgress {
    pub points: u32,
    pub level: GameLevel,
    /// Points still needed for the next level (0 at max level)
    pub points_to_next: u32,
    /// Progress towards the next level (0.0 - 1.0)
    pub fraction: f64,
    pub is_max_level: bool,
}

impl LevelProgress {
    /// Progress as a whole percentage for display.
    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0).round() as u32
    }
}

/// Errors from building a custom level table.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LevelTableError {
    #[error("Level table is empty")]
    Empty,

    #[error("First level must start at 0 points, found {0}")]
    NonZeroBase(u32),

    #[error("Level {0} is not numbered above its predecessor")]
    LevelOrder(u32),

    #[error("Level {0} has a lower threshold than its predecessor")]
    ThresholdOrder(u32),
}
