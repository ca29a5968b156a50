//! Overall rating built from the individual ratings.
//!
//! The fighter is first classified into a style from the ratings and their
//! win methods. The style picks the weight given to each rating and the
//! bonus awarded on top, and the result is capped at 99. The archetype,
//! strengths and weakness come from the same classification plus a few raw
//! career signals.

use super::extract::{per_minute, percentage, strike_totals, takedown_totals};
use super::record::{FighterRecord, WeightClassAverage};
use serde::Serialize;

pub const OVERALL_MAX: f64 = 99.0;
/// Rating substituted when aggressiveness has too few fights behind it.
const NEUTRAL_AGGRESSION: f64 = 50.0;
const MAX_STRENGTHS: usize = 2;

/// The individual ratings feeding the overall rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSuite {
    pub striking: f64,
    pub grappling: f64,
    pub defense: f64,
    pub aggressiveness: Option<f64>,
    pub finish: f64,
    pub positional: f64,
}

impl RatingSuite {
    fn aggression(&self) -> f64 {
        self.aggressiveness.unwrap_or(NEUTRAL_AGGRESSION)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FighterStyle {
    Striker,
    Grappler,
    KnockoutArtist,
    SubmissionSpecialist,
    Mixed,
    Balanced,
}

impl FighterStyle {
    pub fn label(self) -> &'static str {
        match self {
            FighterStyle::Striker => "Striker",
            FighterStyle::Grappler => "Grappler",
            FighterStyle::KnockoutArtist => "Knockout artist",
            FighterStyle::SubmissionSpecialist => "Submission specialist",
            FighterStyle::Mixed => "Mixed",
            FighterStyle::Balanced => "Balanced",
        }
    }

    /// Strong thresholds are checked before the looser dominance flags.
    pub fn classify(ratings: &RatingSuite, knockout_wins: f64, submission_wins: f64) -> Self {
        let striking_dominant = ratings.striking >= 65.0;
        let grappling_dominant = ratings.grappling >= 70.0 || ratings.positional >= 75.0;
        let finishing_dominant = ratings.finish >= 60.0;
        let knockouts_lead = knockout_wins > submission_wins;
        let submissions_lead = submission_wins > knockout_wins;

        if ratings.grappling >= 80.0 && ratings.positional >= 80.0 {
            FighterStyle::Grappler
        } else if ratings.striking >= 80.0 && ratings.grappling <= 50.0 {
            FighterStyle::Striker
        } else if ratings.finish >= 75.0 && knockouts_lead {
            FighterStyle::KnockoutArtist
        } else if ratings.finish >= 75.0 && submissions_lead {
            FighterStyle::SubmissionSpecialist
        } else if grappling_dominant && !striking_dominant {
            FighterStyle::Grappler
        } else if striking_dominant && !grappling_dominant {
            FighterStyle::Striker
        } else if finishing_dominant && knockouts_lead {
            FighterStyle::KnockoutArtist
        } else if finishing_dominant && submissions_lead {
            FighterStyle::SubmissionSpecialist
        } else if striking_dominant && grappling_dominant {
            FighterStyle::Mixed
        } else {
            FighterStyle::Balanced
        }
    }

    fn weights(self) -> StyleWeights {
        let (striking, defense, grappling, position, aggression, finishes) = match self {
            FighterStyle::Striker => (0.35, 0.25, 0.10, 0.15, 0.10, 0.05),
            FighterStyle::Grappler => (0.15, 0.25, 0.35, 0.15, 0.05, 0.05),
            FighterStyle::KnockoutArtist => (0.35, 0.20, 0.10, 0.15, 0.15, 0.05),
            FighterStyle::SubmissionSpecialist => (0.10, 0.25, 0.35, 0.15, 0.10, 0.05),
            FighterStyle::Mixed | FighterStyle::Balanced => (0.30, 0.25, 0.25, 0.15, 0.03, 0.02),
        };
        StyleWeights {
            striking,
            defense,
            grappling,
            position,
            aggression,
            finishes,
        }
    }

    fn bonus(self, r: &RatingSuite) -> f64 {
        let award = |hit: bool, points: f64| if hit { points } else { 0.0 };
        match self {
            FighterStyle::Striker => {
                award(r.striking >= 75.0, 8.0)
                    + award(r.striking >= 80.0, 5.0)
                    + award(r.defense >= 70.0, 3.0)
            }
            FighterStyle::Grappler => {
                award(r.grappling >= 75.0, 8.0)
                    + award(r.positional >= 75.0, 8.0)
                    + award(r.grappling >= 80.0 && r.positional >= 80.0, 5.0)
                    + award(r.defense >= 70.0, 3.0)
            }
            FighterStyle::KnockoutArtist => {
                award(r.finish >= 75.0, 8.0)
                    + award(r.striking >= 70.0, 5.0)
                    + award(r.aggressiveness.is_some_and(|a| a >= 70.0), 3.0)
            }
            FighterStyle::SubmissionSpecialist => {
                award(r.finish >= 75.0, 8.0)
                    + award(r.grappling >= 70.0, 5.0)
                    + award(r.positional >= 70.0, 3.0)
            }
            FighterStyle::Mixed => {
                award(r.striking >= 70.0 && r.grappling >= 70.0, 8.0)
                    + award(r.defense >= 70.0, 5.0)
            }
            FighterStyle::Balanced => 0.0,
        }
    }
}

struct StyleWeights {
    striking: f64,
    defense: f64,
    grappling: f64,
    position: f64,
    aggression: f64,
    finishes: f64,
}

/// Raw career numbers behind the archetype and strength picks.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CareerSignals {
    total_fights: f64,
    win_rate: f64,
    striking_accuracy: f64,
    takedown_accuracy: f64,
    finish_rate: f64,
    dominance_ratio: f64,
    aggression_ratio: f64,
    knockout_wins: f64,
    submission_wins: f64,
    decision_wins: f64,
    total_finishes: f64,
    strikes_landed: f64,
    takedowns_landed: f64,
}

impl CareerSignals {
    fn from_record(record: &FighterRecord, cohort: Option<&WeightClassAverage>) -> Self {
        let outcomes = &record.fight_outcome_stats;
        let t = &record.total_stats;
        let takedowns = takedown_totals(&record.takedown_stats);

        let dominant = record.center_octagon + record.ground_stats.on_top_ground;
        let defensive = record.pushed_back_to_cage + record.ground_stats.on_bottom_ground;
        let dominance_ratio = if dominant + defensive > 0.0 {
            dominant / (dominant + defensive)
        } else {
            0.5
        };

        let landed_per_minute = strike_totals(record).strikes_landed_per_minute;
        let cohort_per_minute = cohort
            .map(|wc| per_minute(wc.total_punches_landed + wc.total_kicks_landed, wc.minutes))
            .unwrap_or(0.0);
        let aggression_ratio = if cohort_per_minute > 0.0 {
            landed_per_minute / cohort_per_minute
        } else {
            1.0
        };

        CareerSignals {
            total_fights: record.fights_tracked,
            win_rate: percentage(outcomes.fighter_wins, record.fights_tracked),
            striking_accuracy: percentage(t.total_strikes_landed, t.total_strikes_thrown),
            takedown_accuracy: takedowns.success_rate,
            finish_rate: percentage(outcomes.finishes(), outcomes.fighter_wins),
            dominance_ratio,
            aggression_ratio,
            knockout_wins: outcomes.knockout_wins(),
            submission_wins: outcomes.submission_wins,
            decision_wins: outcomes.decision_wins(),
            total_finishes: outcomes.finishes(),
            strikes_landed: t.total_strikes_landed,
            takedowns_landed: takedowns.success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallRating {
    pub rating: f64,
    pub style: FighterStyle,
    pub specialist_bonus: f64,
    pub archetype: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl OverallRating {
    pub fn compute(
        record: &FighterRecord,
        cohort: Option<&WeightClassAverage>,
        ratings: &RatingSuite,
    ) -> Self {
        let signals = CareerSignals::from_record(record, cohort);
        let style = FighterStyle::classify(ratings, signals.knockout_wins, signals.submission_wins);
        let specialist_bonus = style.bonus(ratings);
        let rating = overall_rating(ratings, style);

        OverallRating {
            rating,
            style,
            specialist_bonus,
            archetype: archetype(rating, style, &signals).to_string(),
            strengths: strengths(&signals),
            weaknesses: weaknesses(ratings, &signals),
        }
    }
}

/// Style-weighted blend plus the specialist bonus, rounded and capped at 99.
pub fn overall_rating(ratings: &RatingSuite, style: FighterStyle) -> f64 {
    let w = style.weights();
    let weighted = ratings.striking * w.striking
        + ratings.defense * w.defense
        + ratings.grappling * w.grappling
        + ratings.aggression() * w.aggression
        + ratings.finish * w.finishes
        + ratings.positional * w.position;

    let overall = (weighted + style.bonus(ratings)).round();
    if overall.is_finite() {
        overall.clamp(1.0, OVERALL_MAX)
    } else {
        NEUTRAL_AGGRESSION
    }
}

fn archetype(rating: f64, style: FighterStyle, s: &CareerSignals) -> &'static str {
    if rating >= 85.0 {
        return match style {
            FighterStyle::Striker => "Elite Striker",
            FighterStyle::Grappler => "Elite Grappler",
            FighterStyle::KnockoutArtist => "Elite Knockout Artist",
            FighterStyle::SubmissionSpecialist => "Elite Submission Specialist",
            _ => "Elite Mixed Martial Artist",
        };
    }

    if rating >= 75.0 {
        return match style {
            FighterStyle::Striker => "Striking Specialist",
            FighterStyle::Grappler => "Grappling Specialist",
            FighterStyle::KnockoutArtist => "Knockout Artist",
            FighterStyle::SubmissionSpecialist => "Submission Specialist",
            _ if s.win_rate >= 75.0 && s.decision_wins > s.total_finishes => "Decision Machine",
            _ => "Well-Rounded Fighter",
        };
    }

    if rating >= 60.0 {
        return match style {
            FighterStyle::Striker => "Striker",
            FighterStyle::Grappler => "Grappler",
            FighterStyle::KnockoutArtist => "Power Puncher",
            FighterStyle::SubmissionSpecialist => "Submission Artist",
            _ if s.aggression_ratio >= 1.2 => "Aggressive Fighter",
            _ if s.dominance_ratio >= 0.6 => "Positional Fighter",
            _ => "Balanced Fighter",
        };
    }

    match style {
        FighterStyle::Striker => "One-Dimensional Striker",
        FighterStyle::Grappler => "One-Dimensional Grappler",
        FighterStyle::KnockoutArtist => "Power Puncher",
        FighterStyle::SubmissionSpecialist => "Submission Artist",
        _ if s.aggression_ratio >= 1.1 => "Aggressive but Limited",
        _ if s.dominance_ratio <= 0.3 => "Defensive Fighter",
        _ => "Technical Fighter",
    }
}

/// Up to two, highest score first.
fn strengths(s: &CareerSignals) -> Vec<String> {
    let mut found: Vec<(&str, f64)> = Vec::new();

    if s.striking_accuracy >= 55.0 || s.strikes_landed > 100.0 {
        let name = if s.striking_accuracy >= 60.0 {
            "Technical Striking"
        } else {
            "Striking Volume"
        };
        found.push((name, s.striking_accuracy));
    }
    if s.takedown_accuracy >= 40.0 || s.takedowns_landed > 10.0 {
        let name = if s.takedown_accuracy >= 50.0 {
            "Technical Grappling"
        } else {
            "Grappling Control"
        };
        found.push((name, s.takedown_accuracy));
    }
    if s.finish_rate >= 50.0 || s.knockout_wins > 3.0 {
        let name = if s.knockout_wins > s.submission_wins {
            "Knockout Power"
        } else {
            "Submission Game"
        };
        found.push((name, s.finish_rate));
    }
    if s.aggression_ratio >= 1.1 {
        found.push(("Fighting Aggression", s.aggression_ratio * 50.0));
    }
    if s.dominance_ratio >= 0.6 {
        found.push(("Positional Control", s.dominance_ratio * 100.0));
    }
    if s.win_rate >= 70.0 && s.total_fights >= 5.0 {
        found.push(("Fight IQ", s.win_rate));
    }

    found.sort_by(|a, b| b.1.total_cmp(&a.1));
    found
        .into_iter()
        .take(MAX_STRENGTHS)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// The first glaring gap, otherwise the lowest rating.
fn weaknesses(r: &RatingSuite, s: &CareerSignals) -> Vec<String> {
    let glaring = if s.striking_accuracy < 40.0 && s.strikes_landed < 50.0 {
        Some("Striking Fundamentals")
    } else if s.takedown_accuracy < 30.0 && s.takedowns_landed < 5.0 {
        Some("Grappling Defense")
    } else if s.finish_rate < 30.0 && s.total_fights >= 5.0 {
        Some("Finishing Ability")
    } else if s.aggression_ratio < 0.8 {
        Some("Fighting Aggression")
    } else if s.dominance_ratio < 0.4 {
        Some("Positional Control")
    } else if s.win_rate < 50.0 && s.total_fights >= 5.0 {
        Some("Fight Strategy")
    } else {
        None
    };

    let name = glaring.unwrap_or_else(|| {
        [
            ("Striking", r.striking),
            ("Defense", r.defense),
            ("Grappling", r.grappling),
            ("Aggression", r.aggression()),
            ("Finishes", r.finish),
            ("Position", r.positional),
        ]
        .into_iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
        .unwrap_or("Striking")
    });
    vec![name.to_string()]
}
