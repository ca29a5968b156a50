//! Cohort-relative ratings.
//!
//! Two curves are used. `normalize_value` is a linear map where the cohort
//! average scores 50 and twice the average saturates at 99. The takedown and
//! striking ratings push a weighted ratio through `tanh_curve`, which bends
//! extreme ratios toward the 1..100 bounds instead of clipping them.

use super::extract::{
    clinch_control_percentage, ground_control_percentage, per_minute, per_round, percentage,
    takedown_totals, CagePosition,
};
use super::record::{FighterRecord, WeightClassAverage};
use serde::Serialize;

/// League-wide takedown success rate used as the success baseline.
pub const TAKEDOWN_SUCCESS_BASELINE: f64 = 0.38;
/// Striking accuracy assumed when the cohort has none recorded.
pub const STRIKING_ACCURACY_BASELINE: f64 = 50.0;
/// Positional control is rated against an even split.
pub const CONTROL_BASELINE: f64 = 50.0;
pub const MIDPOINT: f64 = 50.0;
/// Finish rate assumed when the cohort has none recorded.
pub const FINISH_BASELINE: f64 = 40.0;
/// Fights needed before an aggressiveness rating is given.
pub const AGGRESSION_MIN_FIGHTS: f64 = 5.0;
const AGGRESSION_MIN_MINUTES: f64 = 0.001;

const CLINCH_WEIGHTS: (f64, f64, f64) = (0.4, 0.3, 0.3);
const GROUND_WEIGHTS: (f64, f64, f64) = (0.4, 0.3, 0.3);
const SUBMISSION_WEIGHTS: (f64, f64) = (0.6, 0.4);
const GRADE_WEIGHTS: (f64, f64, f64, f64) = (0.35, 0.15, 0.20, 0.30);
/// Per absorbed strike type, in `absorbed_by_type` order.
const DEFENSE_WEIGHTS: [f64; 8] = [0.20, 0.15, 0.15, 0.15, 0.10, 0.10, 0.10, 0.05];

fn bounded(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        MIDPOINT
    }
}

/// Map a fighter value onto 1..=99 relative to the cohort value.
pub fn normalize_value(fighter: f64, weight_class: f64) -> f64 {
    if weight_class == 0.0 {
        return bounded(fighter / fighter.max(1.0) * 99.0, 1.0, 99.0);
    }

    let pct = fighter / weight_class * 100.0;
    bounded(50.0 + (pct - 100.0) * 0.5, 1.0, 99.0)
}

pub fn tanh_curve(ratio: f64) -> f64 {
    50.0 + 50.0 * ((ratio - 1.0) * 2.0).tanh()
}

fn or_one(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortTakedowns {
    pub attempts: f64,
    pub fights: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TakedownInputs {
    pub attempts: f64,
    pub successes: f64,
    pub fights: f64,
    pub cohort: Option<CohortTakedowns>,
}

impl TakedownInputs {
    pub fn from_record(record: &FighterRecord, cohort: Option<&WeightClassAverage>) -> Self {
        let totals = takedown_totals(&record.takedown_stats);
        TakedownInputs {
            attempts: totals.attempts,
            successes: totals.success,
            fights: record.fights_tracked,
            cohort: cohort.map(|wc| CohortTakedowns {
                attempts: wc.takedown_attempts(),
                fights: wc.fights,
            }),
        }
    }
}

/// Takedown rating on 1..=100, blending success rate (70%) and frequency (30%).
pub fn takedown_rating(inputs: &TakedownInputs) -> f64 {
    let Some(cohort) = inputs.cohort else {
        return MIDPOINT;
    };
    if inputs.attempts == 0.0 && cohort.attempts == 0.0 {
        return MIDPOINT;
    }

    let success_rate = if inputs.attempts > 0.0 {
        inputs.successes / inputs.attempts
    } else {
        0.0
    };
    let success_ratio = success_rate / TAKEDOWN_SUCCESS_BASELINE;

    let attempts_per_fight = inputs.attempts / or_one(inputs.fights);
    let cohort_per_fight = cohort.attempts / or_one(cohort.fights);

    let ratio = if cohort_per_fight == 0.0 {
        success_ratio
    } else {
        0.7 * success_ratio + 0.3 * (attempts_per_fight / cohort_per_fight)
    };

    bounded(tanh_curve(ratio).round(), 1.0, 100.0)
}

pub fn clinch_rating(control: f64, accuracy: f64, volume: f64) -> f64 {
    let (c, a, v) = CLINCH_WEIGHTS;
    c * control + a * accuracy + v * volume
}

pub fn ground_game_rating(control: f64, accuracy: f64, volume: f64) -> f64 {
    let (c, a, v) = GROUND_WEIGHTS;
    c * control + a * accuracy + v * volume
}

pub fn submission_rating(attempt_rate: f64, success_rate: f64) -> f64 {
    let (a, s) = SUBMISSION_WEIGHTS;
    a * attempt_rate + s * success_rate
}

/// Overall grappling grade, rounded and bounded to 1..=100.
pub fn grappling_grade(takedown: f64, submission: f64, clinch: f64, ground_game: f64) -> f64 {
    let (t, s, c, g) = GRADE_WEIGHTS;
    let grade = t * takedown + s * submission + c * clinch + g * ground_game;
    bounded(grade.round(), 1.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikingInputs {
    pub accuracy: f64,
    pub landed_per_minute: f64,
    pub cohort_accuracy: f64,
    pub cohort_landed_per_minute: f64,
}

impl StrikingInputs {
    /// Accuracy counts landed against landed plus missed. Volume covers
    /// standing, clinch and ground strikes.
    pub fn from_record(record: &FighterRecord, cohort: Option<&WeightClassAverage>) -> Self {
        let t = &record.total_stats;
        let landed = t.standing_landed()
            + record.clinch_stats.total_clinch_strikes_made
            + record.ground_stats.total_ground_strikes_made;

        let (cohort_accuracy, cohort_landed_per_minute) = match cohort {
            Some(wc) => {
                let accuracy = percentage(
                    wc.total_strikes_landed,
                    wc.total_strikes_landed + wc.total_missed(),
                );
                let wc_landed = wc.standing_landed()
                    + wc.total_clinch_strikes_made
                    + wc.total_ground_strikes_made;
                (accuracy, per_minute(wc_landed, wc.minutes))
            }
            None => (0.0, 0.0),
        };

        StrikingInputs {
            accuracy: percentage(t.total_strikes_landed, t.total_strikes_landed + t.total_missed()),
            landed_per_minute: per_minute(landed, record.minutes_tracked),
            cohort_accuracy: if cohort_accuracy > 0.0 {
                cohort_accuracy
            } else {
                STRIKING_ACCURACY_BASELINE
            },
            cohort_landed_per_minute,
        }
    }
}

/// Striking rating on 1..=100. Without cohort volume the fighter's own
/// accuracy stands in.
pub fn striking_rating(inputs: &StrikingInputs) -> f64 {
    if inputs.cohort_accuracy == 0.0 || inputs.cohort_landed_per_minute == 0.0 {
        return bounded(inputs.accuracy, 1.0, 100.0);
    }

    let accuracy_ratio = inputs.accuracy / inputs.cohort_accuracy;
    let volume_ratio = inputs.landed_per_minute / inputs.cohort_landed_per_minute;
    let ratio = 0.7 * accuracy_ratio + 0.3 * volume_ratio;

    bounded(tanh_curve(ratio).round(), 1.0, 100.0)
}

/// Cage location rating. Being pushed back counts against the fighter.
pub fn location_control_rating(fighter: &CagePosition, cohort: &CagePosition) -> f64 {
    let pushing = normalize_value(fighter.pushing, cohort.pushing);
    let center = normalize_value(fighter.center, cohort.center);
    let pushed_back = 99.0 - normalize_value(fighter.pushed_back, cohort.pushed_back);

    bounded(0.4 * pushing + 0.35 * center + 0.25 * pushed_back, 1.0, 99.0)
}

/// Finishes (KO, TKO and submission) as a share of wins.
pub fn finish_percentage(record: &FighterRecord) -> f64 {
    let outcomes = &record.fight_outcome_stats;
    percentage(outcomes.finishes(), outcomes.fighter_wins)
}

/// Finish rating on 1..=100 against the cohort finish rate.
pub fn finish_rating(finish_percentage: f64, cohort_finish_percentage: f64) -> f64 {
    let baseline = if cohort_finish_percentage > 0.0 {
        cohort_finish_percentage
    } else {
        FINISH_BASELINE
    };
    bounded(tanh_curve(finish_percentage / baseline).round(), 1.0, 100.0)
}

/// Share of positional events spent in a dominant spot, mapped piecewise so
/// an even split scores 50. No tracked positions also scores 50.
pub fn positional_rating(record: &FighterRecord) -> f64 {
    let total = record.positional_events();
    if total <= 0.0 {
        return MIDPOINT;
    }

    let dominant = record.center_octagon
        + record.pushing_against_cage
        + record.clinch_stats.in_clinch
        + record.ground_stats.on_top_ground;
    let ratio = dominant / total;

    let rating = if ratio <= 0.5 {
        1.0 + 49.0 * (ratio / 0.5)
    } else {
        50.0 + 50.0 * ((ratio - 0.5) / 0.5)
    };
    bounded(rating.round(), 1.0, 100.0)
}

/// Absorbing less than the cohort scores above 50.
fn defense_curve(fighter: f64, cohort: f64) -> f64 {
    if cohort == 0.0 {
        return MIDPOINT;
    }
    50.0 + 50.0 * ((1.0 - fighter / cohort) * 2.0).tanh()
}

/// Defense rating on 1..=100 from strikes absorbed per minute, type by type.
pub fn defense_rating(record: &FighterRecord, cohort: Option<&WeightClassAverage>) -> f64 {
    let minutes = or_one(record.minutes_tracked);
    let fighter = record.striking_stats.absorbed_by_type();
    let (cohort_minutes, cohort_absorbed) = match cohort {
        Some(wc) => (or_one(wc.minutes), wc.absorbed_by_type()),
        None => (1.0, [0.0; 8]),
    };

    let rating: f64 = DEFENSE_WEIGHTS
        .iter()
        .zip(fighter.iter().zip(cohort_absorbed.iter()))
        .map(|(weight, (f, c))| weight * defense_curve(f / minutes, c / cohort_minutes))
        .sum();
    bounded(rating.round(), 1.0, 100.0)
}

fn rate_ratio(fighter: f64, cohort: f64) -> f64 {
    if cohort > 0.0 {
        fighter / cohort
    } else {
        1.0
    }
}

/// Output relative to the cohort across striking, takedowns, submissions
/// and dominant position. `None` below five tracked fights.
pub fn aggressiveness_rating(record: &FighterRecord, cohort: Option<&WeightClassAverage>) -> Option<f64> {
    if record.fights_tracked < AGGRESSION_MIN_FIGHTS {
        return None;
    }

    let minutes = record.minutes_tracked.max(AGGRESSION_MIN_MINUTES);
    let takedowns = takedown_totals(&record.takedown_stats).success;
    let sub_attempts = record.submission_stats.sub_attempts;

    let (strike_ratio, takedown_ratio, sub_ratio) = match cohort {
        Some(wc) => {
            let wc_minutes = wc.minutes.max(AGGRESSION_MIN_MINUTES);
            (
                rate_ratio(record.all_strikes_thrown() / minutes, wc.strikes_thrown() / wc_minutes),
                rate_ratio(takedowns / minutes, wc.takedown_successes() / wc_minutes),
                rate_ratio(sub_attempts / minutes, wc.sub_attempts / wc_minutes),
            )
        }
        None => (1.0, 1.0, 1.0),
    };

    let total = record.positional_events();
    let position_ratio = if total > 0.0 {
        let dominant = record.pushing_against_cage
            + record.clinch_stats.in_clinch
            + record.ground_stats.on_top_ground;
        percentage(dominant, total) / 50.0
    } else {
        1.0
    };

    let composite = (strike_ratio + takedown_ratio + sub_ratio + position_ratio) / 4.0;
    let score = (50.0 + 49.0 * (composite - 1.0).tanh()).round();
    Some(bounded(score, 1.0, 99.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrapplingRatings {
    pub takedown: f64,
    pub clinch_control: f64,
    pub clinch_accuracy: f64,
    pub clinch_volume: f64,
    pub clinch: f64,
    pub ground_control: f64,
    pub ground_accuracy: f64,
    pub ground_volume: f64,
    pub ground_game: f64,
    pub submission_attempt_rate: f64,
    pub submission_success_rate: f64,
    pub submission: f64,
    pub grade: f64,
}

impl GrapplingRatings {
    pub fn compute(record: &FighterRecord, cohort: Option<&WeightClassAverage>) -> Self {
        let empty = WeightClassAverage::default();
        let wc = cohort.unwrap_or(&empty);
        let clinch = &record.clinch_stats;
        let ground = &record.ground_stats;
        let rounds = record.rounds_tracked;

        let clinch_control = normalize_value(clinch_control_percentage(record), CONTROL_BASELINE);
        let clinch_accuracy = normalize_value(
            percentage(clinch.total_clinch_strikes_made, clinch.total_clinch_strikes_thrown),
            percentage(wc.total_clinch_strikes_made, wc.total_clinch_strikes_thrown),
        );
        let clinch_volume = normalize_value(
            per_round(clinch.total_clinch_strikes_made, rounds),
            per_round(wc.total_clinch_strikes_made, wc.rounds),
        );

        let ground_control = normalize_value(ground_control_percentage(record), CONTROL_BASELINE);
        let ground_accuracy = normalize_value(
            percentage(ground.total_ground_strikes_made, ground.total_ground_strikes_thrown),
            percentage(wc.total_ground_strikes_made, wc.total_ground_strikes_thrown),
        );
        let ground_volume = normalize_value(
            per_round(ground.total_ground_strikes_made, rounds),
            per_round(wc.total_ground_strikes_made, wc.rounds),
        );

        let sub_attempts = record.submission_stats.sub_attempts;
        let submission_attempt_rate = normalize_value(
            per_round(sub_attempts, rounds),
            per_round(wc.sub_attempts, wc.rounds),
        );
        let submission_success_rate = normalize_value(
            percentage(record.fight_outcome_stats.submission_wins, sub_attempts),
            percentage(wc.submission_wins, wc.sub_attempts),
        );

        let takedown = takedown_rating(&TakedownInputs::from_record(record, cohort));
        let clinch = clinch_rating(clinch_control, clinch_accuracy, clinch_volume);
        let ground_game = ground_game_rating(ground_control, ground_accuracy, ground_volume);
        let submission = submission_rating(submission_attempt_rate, submission_success_rate);

        GrapplingRatings {
            takedown,
            clinch_control,
            clinch_accuracy,
            clinch_volume,
            clinch,
            ground_control,
            ground_accuracy,
            ground_volume,
            ground_game,
            submission_attempt_rate,
            submission_success_rate,
            submission,
            grade: grappling_grade(takedown, submission, clinch, ground_game),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::record::StrikingStats;

    fn in_range(value: f64, min: f64, max: f64) -> bool {
        value.is_finite() && value >= min && value <= max
    }

    #[test]
    fn test_normalize_at_cohort_average_is_midpoint() {
        for v in [0.5, 1.0, 12.0, 37.5, 1000.0] {
            assert_eq!(normalize_value(v, v), 50.0);
        }
    }

    #[test]
    fn test_normalize_linear_map() {
        assert_eq!(normalize_value(20.0, 10.0), 99.0);
        assert_eq!(normalize_value(5.0, 10.0), 25.0);
        assert_eq!(normalize_value(15.0, 10.0), 75.0);
        assert_eq!(normalize_value(0.0, 10.0), 1.0);
        assert_eq!(normalize_value(100.0, 10.0), 99.0);
    }

    #[test]
    fn test_normalize_without_cohort() {
        for x in [0.0, 0.2, 1.0, 3.0, 450.0] {
            assert!(in_range(normalize_value(x, 0.0), 1.0, 99.0));
        }
        assert_eq!(normalize_value(0.0, 0.0), 1.0);
        assert_eq!(normalize_value(7.0, 0.0), 99.0);
        assert!((normalize_value(0.5, 0.0) - 49.5).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_never_returns_nan() {
        assert_eq!(normalize_value(f64::NAN, 10.0), MIDPOINT);
        assert_eq!(normalize_value(f64::INFINITY, 0.0), MIDPOINT);
    }

    #[test]
    fn test_tanh_curve() {
        assert_eq!(tanh_curve(1.0), 50.0);
        assert!(tanh_curve(3.0) > 99.0);
        assert!(tanh_curve(0.0) < 2.0);
    }

    #[test]
    fn test_takedown_rating_without_attempts_is_midpoint() {
        let inputs = TakedownInputs {
            attempts: 0.0,
            successes: 0.0,
            fights: 3.0,
            cohort: Some(CohortTakedowns { attempts: 0.0, fights: 5.0 }),
        };
        assert_eq!(takedown_rating(&inputs), 50.0);
    }

    #[test]
    fn test_takedown_rating_without_cohort_is_midpoint() {
        let inputs = TakedownInputs {
            attempts: 10.0,
            successes: 9.0,
            fights: 3.0,
            cohort: None,
        };
        assert_eq!(takedown_rating(&inputs), 50.0);
    }

    #[test]
    fn test_takedown_rating_at_baseline() {
        // 38% success at the cohort's frequency lands on the midpoint.
        let inputs = TakedownInputs {
            attempts: 50.0,
            successes: 19.0,
            fights: 10.0,
            cohort: Some(CohortTakedowns { attempts: 5.0, fights: 1.0 }),
        };
        assert_eq!(takedown_rating(&inputs), 50.0);
    }

    #[test]
    fn test_takedown_rating_success_only_when_cohort_never_attempts() {
        let inputs = TakedownInputs {
            attempts: 10.0,
            successes: 0.0,
            fights: 2.0,
            cohort: Some(CohortTakedowns { attempts: 0.0, fights: 4.0 }),
        };
        // ratio 0 => 50 + 50*tanh(-2) ~= 1.8 => rounds to 2
        assert_eq!(takedown_rating(&inputs), 2.0);
    }

    #[test]
    fn test_takedown_rating_bounds() {
        let elite = TakedownInputs {
            attempts: 40.0,
            successes: 40.0,
            fights: 1.0,
            cohort: Some(CohortTakedowns { attempts: 1.0, fights: 10.0 }),
        };
        assert_eq!(takedown_rating(&elite), 100.0);
        assert!(in_range(takedown_rating(&elite), 1.0, 100.0));
    }

    #[test]
    fn test_composite_weights() {
        assert!((clinch_rating(50.0, 80.0, 20.0) - 50.0).abs() < 1e-9);
        assert!((ground_game_rating(99.0, 1.0, 1.0) - 40.2).abs() < 1e-9);
        assert!((submission_rating(60.0, 10.0) - 40.0).abs() < 1e-9);
        assert_eq!(grappling_grade(50.0, 50.0, 50.0, 50.0), 50.0);
        assert_eq!(grappling_grade(100.0, 99.0, 99.0, 99.0), 99.0);
    }

    #[test]
    fn test_grappling_grade_bounds() {
        assert_eq!(grappling_grade(0.0, 0.0, 0.0, 0.0), 1.0);
        assert_eq!(grappling_grade(500.0, 500.0, 500.0, 500.0), 100.0);
    }

    #[test]
    fn test_striking_rating_falls_back_to_accuracy() {
        let inputs = StrikingInputs {
            accuracy: 42.0,
            landed_per_minute: 5.0,
            cohort_accuracy: 50.0,
            cohort_landed_per_minute: 0.0,
        };
        assert_eq!(striking_rating(&inputs), 42.0);

        let empty = StrikingInputs { accuracy: 0.0, ..inputs };
        assert_eq!(striking_rating(&empty), 1.0);
    }

    #[test]
    fn test_striking_rating_at_cohort_average() {
        let inputs = StrikingInputs {
            accuracy: 45.0,
            landed_per_minute: 4.0,
            cohort_accuracy: 45.0,
            cohort_landed_per_minute: 4.0,
        };
        assert_eq!(striking_rating(&inputs), 50.0);
    }

    #[test]
    fn test_striking_inputs_from_record() {
        let mut record = FighterRecord::default();
        record.minutes_tracked = 10.0;
        record.total_stats.total_strikes_landed = 30.0;
        record.total_stats.total_jabs_made = 20.0;
        record.total_stats.total_jabs_missed = 20.0;
        record.total_stats.total_hooks_made = 10.0;
        record.total_stats.total_hooks_missed = 10.0;
        record.clinch_stats.total_clinch_strikes_made = 5.0;
        record.ground_stats.total_ground_strikes_made = 5.0;

        let inputs = StrikingInputs::from_record(&record, None);
        assert_eq!(inputs.accuracy, 50.0);
        assert_eq!(inputs.landed_per_minute, 4.0);
        assert_eq!(inputs.cohort_accuracy, STRIKING_ACCURACY_BASELINE);
        assert_eq!(inputs.cohort_landed_per_minute, 0.0);
        assert_eq!(striking_rating(&inputs), 50.0);
    }

    #[test]
    fn test_location_control_rating() {
        let even = CagePosition { center: 40.0, pushed_back: 30.0, pushing: 30.0 };
        // 0.4*50 + 0.35*50 + 0.25*(99-50)
        assert!((location_control_rating(&even, &even) - 49.75).abs() < 1e-9);

        let rating = location_control_rating(&even, &CagePosition::default());
        assert!(in_range(rating, 1.0, 99.0));
    }

    #[test]
    fn test_grappling_ratings_without_cohort_stay_in_range() {
        let mut record = FighterRecord::default();
        record.rounds_tracked = 9.0;
        record.fights_tracked = 3.0;
        record.clinch_stats.in_clinch = 30.0;
        record.clinch_stats.being_clinched = 10.0;
        record.clinch_stats.total_clinch_strikes_made = 12.0;
        record.clinch_stats.total_clinch_strikes_thrown = 20.0;
        record.ground_stats.on_top_ground = 50.0;
        record.submission_stats.sub_attempts = 4.0;
        record.fight_outcome_stats.submission_wins = 1.0;

        let ratings = GrapplingRatings::compute(&record, None);
        assert_eq!(ratings.takedown, 50.0);
        assert_eq!(ratings.clinch_control, 75.0);
        assert_eq!(ratings.ground_control, 99.0);
        for value in [
            ratings.clinch_accuracy,
            ratings.clinch_volume,
            ratings.clinch,
            ratings.ground_accuracy,
            ratings.ground_volume,
            ratings.ground_game,
            ratings.submission_attempt_rate,
            ratings.submission_success_rate,
            ratings.submission,
        ] {
            assert!(in_range(value, 1.0, 99.0), "{} out of range", value);
        }
        assert!(in_range(ratings.grade, 1.0, 100.0));
    }

    #[test]
    fn test_grappling_ratings_at_cohort_average() {
        let mut record = FighterRecord::default();
        record.rounds_tracked = 10.0;
        record.clinch_stats.in_clinch = 5.0;
        record.clinch_stats.being_clinched = 5.0;
        record.clinch_stats.total_clinch_strikes_made = 20.0;
        record.clinch_stats.total_clinch_strikes_thrown = 40.0;
        record.ground_stats.on_top_ground = 5.0;
        record.ground_stats.on_bottom_ground = 5.0;
        record.ground_stats.total_ground_strikes_made = 30.0;
        record.ground_stats.total_ground_strikes_thrown = 60.0;
        record.submission_stats.sub_attempts = 5.0;
        record.fight_outcome_stats.submission_wins = 1.0;

        let cohort = WeightClassAverage {
            rounds: 2.0,
            total_clinch_strikes_made: 4.0,
            total_clinch_strikes_thrown: 8.0,
            total_ground_strikes_made: 6.0,
            total_ground_strikes_thrown: 12.0,
            sub_attempts: 1.0,
            submission_wins: 0.2,
            ..WeightClassAverage::default()
        };

        let ratings = GrapplingRatings::compute(&record, Some(&cohort));
        assert!((ratings.clinch - 50.0).abs() < 1e-9);
        assert!((ratings.ground_game - 50.0).abs() < 1e-9);
        assert!((ratings.submission - 50.0).abs() < 1e-9);
        assert_eq!(ratings.takedown, 50.0);
        assert_eq!(ratings.grade, 50.0);
    }

    #[test]
    fn test_finish_percentage_counts_all_finishes() {
        let mut record = FighterRecord::default();
        record.fight_outcome_stats.fighter_wins = 10.0;
        record.fight_outcome_stats.ko_wins = 3.0;
        record.fight_outcome_stats.tko_wins = 2.0;
        record.fight_outcome_stats.submission_wins = 1.0;
        assert_eq!(finish_percentage(&record), 60.0);

        assert_eq!(finish_percentage(&FighterRecord::default()), 0.0);
    }

    #[test]
    fn test_finish_rating() {
        assert_eq!(finish_rating(60.0, 60.0), 50.0);
        // Missing cohort finish rate falls back to 40%.
        assert_eq!(finish_rating(40.0, 0.0), 50.0);
        assert_eq!(finish_rating(0.0, 40.0), 2.0);
        assert_eq!(finish_rating(100.0, 40.0), 100.0);
        for pct in [0.0, 12.5, 33.0, 80.0, 100.0] {
            assert!(in_range(finish_rating(pct, 25.0), 1.0, 100.0));
        }
    }

    #[test]
    fn test_positional_rating() {
        assert_eq!(positional_rating(&FighterRecord::default()), MIDPOINT);

        let mut record = FighterRecord::default();
        record.center_octagon = 5.0;
        record.pushed_back_to_cage = 5.0;
        assert_eq!(positional_rating(&record), 50.0);

        record.center_octagon = 0.0;
        assert_eq!(positional_rating(&record), 1.0);

        let mut grinder = FighterRecord::default();
        grinder.ground_stats.on_top_ground = 3.0;
        grinder.ground_stats.on_bottom_ground = 1.0;
        assert_eq!(positional_rating(&grinder), 75.0);

        grinder.ground_stats.on_bottom_ground = 0.0;
        assert_eq!(positional_rating(&grinder), 100.0);
    }

    #[test]
    fn test_defense_rating_without_cohort_is_midpoint() {
        let mut record = FighterRecord::default();
        record.minutes_tracked = 15.0;
        record.striking_stats.jabs_absorbed = 40.0;
        record.striking_stats.head_kicks_absorbed = 2.0;
        assert_eq!(defense_rating(&record, None), 50.0);
    }

    #[test]
    fn test_defense_rating_against_cohort() {
        let cohort = WeightClassAverage {
            minutes: 10.0,
            head_kicks_absorbed: 10.0,
            ..WeightClassAverage::default()
        };
        let mut record = FighterRecord::default();
        record.minutes_tracked = 20.0;

        // Only head kicks have a cohort rate: 0.2 * 98.2 + 0.8 * 50
        assert_eq!(defense_rating(&record, Some(&cohort)), 60.0);

        record.striking_stats.head_kicks_absorbed = 20.0;
        assert_eq!(defense_rating(&record, Some(&cohort)), 50.0);

        let everything = WeightClassAverage {
            minutes: 10.0,
            head_kicks_absorbed: 1.0,
            body_kicks_absorbed: 1.0,
            leg_kicks_absorbed: 1.0,
            jabs_absorbed: 1.0,
            hooks_absorbed: 1.0,
            overhands_absorbed: 1.0,
            straights_absorbed: 1.0,
            uppercuts_absorbed: 1.0,
            ..WeightClassAverage::default()
        };
        let mut punching_bag = FighterRecord::default();
        punching_bag.minutes_tracked = 1.0;
        punching_bag.striking_stats = StrikingStats {
            head_kicks_absorbed: 50.0,
            body_kicks_absorbed: 50.0,
            leg_kicks_absorbed: 50.0,
            jabs_absorbed: 50.0,
            hooks_absorbed: 50.0,
            overhands_absorbed: 50.0,
            straights_absorbed: 50.0,
            uppercuts_absorbed: 50.0,
        };
        assert_eq!(defense_rating(&punching_bag, Some(&everything)), 1.0);
    }

    #[test]
    fn test_aggressiveness_needs_five_fights() {
        let mut record = FighterRecord::default();
        record.fights_tracked = 4.0;
        record.minutes_tracked = 60.0;
        assert_eq!(aggressiveness_rating(&record, None), None);

        record.fights_tracked = 5.0;
        assert_eq!(aggressiveness_rating(&record, None), Some(50.0));
    }

    #[test]
    fn test_aggressiveness_against_cohort() {
        let cohort = WeightClassAverage {
            minutes: 10.0,
            total_punches_thrown: 50.0,
            ..WeightClassAverage::default()
        };
        let mut record = FighterRecord::default();
        record.fights_tracked = 6.0;
        record.minutes_tracked = 10.0;
        record.total_stats.total_punches_thrown = 100.0;

        // Twice the cohort strike rate, other ratios neutral: 50 + 49*tanh(0.25)
        assert_eq!(aggressiveness_rating(&record, Some(&cohort)), Some(62.0));

        record.total_stats.total_punches_thrown = 100_000.0;
        record.pushing_against_cage = 10.0;
        let rating = aggressiveness_rating(&record, Some(&cohort));
        assert_eq!(rating, Some(99.0));
    }

    #[test]
    fn test_aggressiveness_position_ratio() {
        let mut record = FighterRecord::default();
        record.fights_tracked = 5.0;
        record.pushing_against_cage = 10.0;
        assert_eq!(aggressiveness_rating(&record, None), Some(62.0));

        // Center octagon counts toward the total but not as dominant here.
        record.center_octagon = 10.0;
        assert_eq!(aggressiveness_rating(&record, None), Some(50.0));
    }
}
