use super::record::{FighterRecord, TakedownStats};
use serde::Serialize;

pub const TOP_N: usize = 3;

pub fn percentage(made: f64, thrown: f64) -> f64 {
    if thrown > 0.0 {
        made / thrown * 100.0
    } else {
        0.0
    }
}

pub fn per_round(count: f64, rounds: f64) -> f64 {
    if rounds > 0.0 {
        count / rounds
    } else {
        0.0
    }
}

pub fn per_minute(count: f64, minutes: f64) -> f64 {
    if minutes > 0.0 {
        count / minutes
    } else {
        0.0
    }
}

/// Share of positional time spent in the dominant position.
pub fn control_percentage(top: f64, bottom: f64) -> f64 {
    percentage(top, top + bottom)
}

pub fn ground_control_percentage(record: &FighterRecord) -> f64 {
    control_percentage(record.ground_stats.on_top_ground, record.ground_stats.on_bottom_ground)
}

pub fn clinch_control_percentage(record: &FighterRecord) -> f64 {
    control_percentage(record.clinch_stats.in_clinch, record.clinch_stats.being_clinched)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Entries with a positive key, most first. Ties keep their input order.
pub fn top_n<T, F>(items: Vec<T>, key: F, n: usize) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    let mut kept: Vec<T> = items.into_iter().filter(|item| key(item) > 0.0).collect();
    kept.sort_by(|a, b| key(b).total_cmp(&key(a)));
    kept.truncate(n);
    kept
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TakedownTotals {
    pub attempts: f64,
    pub success: f64,
    pub success_rate: f64,
}

pub fn takedown_totals(stats: &TakedownStats) -> TakedownTotals {
    let (attempts, success) = takedown_techniques(stats)
        .iter()
        .fold((0.0, 0.0), |(a, s), t| (a + t.attempts, s + t.success));

    TakedownTotals {
        attempts,
        success,
        success_rate: percentage(success, attempts),
    }
}

struct Technique {
    name: &'static str,
    attempts: f64,
    success: f64,
    description: &'static str,
}

fn takedown_techniques(stats: &TakedownStats) -> [Technique; 7] {
    [
        Technique {
            name: "Single Leg",
            attempts: stats.single_leg_takedown_attempts,
            success: stats.single_leg_takedown_success,
            description: "Takedown targeting one leg, often used to drive opponent to the ground",
        },
        Technique {
            name: "Double Leg",
            attempts: stats.double_leg_takedown_attempts,
            success: stats.double_leg_takedown_success,
            description: "Classic wrestling takedown targeting both legs simultaneously",
        },
        Technique {
            name: "Body Lock",
            attempts: stats.body_lock_takedown_attempts,
            success: stats.body_lock_takedown_success,
            description: "Takedown using a clinch around the opponent's body",
        },
        Technique {
            name: "Trip",
            attempts: stats.trip_takedown_attempts,
            success: stats.trip_takedown_success,
            description: "Takedown using leg sweeps or trips to off-balance opponent",
        },
        Technique {
            name: "Ankle Pick",
            attempts: stats.ankle_pick_attempts,
            success: stats.ankle_pick_success,
            description: "Quick takedown targeting the ankle to bring opponent down",
        },
        Technique {
            name: "Throw",
            attempts: stats.throw_attempts,
            success: stats.throw_success,
            description: "Judoka-style takedown using throws and sweeps",
        },
        Technique {
            name: "Imanari Roll",
            attempts: stats.imanari_attempts,
            success: stats.imanari_success,
            description: "Leg lock entry technique using rolling movements",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechniqueStat {
    pub name: String,
    pub attempts: f64,
    pub success: f64,
    pub success_rate: f64,
    pub attempts_per_round: f64,
    pub attempts_per_minute: f64,
    pub description: String,
}

/// Most attempted takedowns.
pub fn top_takedowns(record: &FighterRecord) -> Vec<TechniqueStat> {
    let stats: Vec<TechniqueStat> = takedown_techniques(&record.takedown_stats)
        .into_iter()
        .map(|t| TechniqueStat {
            name: t.name.to_string(),
            attempts: t.attempts,
            success: t.success,
            success_rate: percentage(t.success, t.attempts),
            attempts_per_round: per_round(t.attempts, record.rounds_tracked),
            attempts_per_minute: per_minute(t.attempts, record.minutes_tracked),
            description: t.description.to_string(),
        })
        .collect();

    top_n(stats, |t| t.attempts, TOP_N)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vulnerability {
    pub name: String,
    pub times_taken_down: f64,
    pub per_round: f64,
}

/// Techniques this fighter is most often taken down by.
pub fn top_vulnerabilities(record: &FighterRecord) -> Vec<Vulnerability> {
    let d = &record.defensive_stats;
    let counts = [
        ("Single Leg", d.times_single_legged),
        ("Double Leg", d.times_double_legged),
        ("Body Lock", d.times_body_locked),
        ("Trip", d.times_tripped),
        ("Ankle Pick", d.times_ankle_picked),
        ("Throw", d.times_thrown),
        ("Imanari Roll", d.times_imanaried),
    ];

    let vulnerabilities: Vec<Vulnerability> = counts
        .into_iter()
        .map(|(name, times)| Vulnerability {
            name: name.to_string(),
            times_taken_down: times,
            per_round: per_round(times, record.rounds_tracked),
        })
        .collect();

    top_n(vulnerabilities, |v| v.times_taken_down, TOP_N)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrikeStat {
    pub name: String,
    pub landed: f64,
    pub thrown: f64,
    pub accuracy: f64,
    pub share_of_landed: f64,
    pub landed_per_round: f64,
    pub landed_per_minute: f64,
}

/// Most landed standing strikes.
pub fn top_strikes(record: &FighterRecord) -> Vec<StrikeStat> {
    let t = &record.total_stats;
    let types = [
        ("Jab", t.total_jabs_made, t.total_jabs_thrown),
        ("Straight", t.total_straights_made, t.total_straights_thrown),
        ("Hook", t.total_hooks_made, t.total_hooks_thrown),
        ("Uppercut", t.total_uppercuts_made, t.total_uppercuts_thrown),
        ("Leg Kick", t.total_leg_kicks_made, t.total_leg_kicks_thrown),
        ("Body Kick", t.total_body_kicks_made, t.total_body_kicks_thrown),
        ("Head Kick", t.total_high_kicks_made, t.total_high_kicks_thrown),
        ("Elbow", t.total_elbows_made, t.total_elbows_thrown),
        ("Overhand", t.total_overhands_made, t.total_overhands_thrown),
        ("Spin Back Fist", t.total_spin_back_fists_made, t.total_spin_back_fists_thrown),
    ];

    let strikes: Vec<StrikeStat> = types
        .into_iter()
        .map(|(name, landed, thrown)| StrikeStat {
            name: name.to_string(),
            landed,
            thrown,
            accuracy: round_to(percentage(landed, thrown), 1),
            share_of_landed: round_to(percentage(landed, t.total_strikes_landed), 1),
            landed_per_round: round_to(per_round(landed, record.rounds_tracked), 1),
            landed_per_minute: round_to(per_minute(landed, record.minutes_tracked), 2),
        })
        .collect();

    top_n(strikes, |s| s.landed, TOP_N)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StrikeTotals {
    pub punches_landed: f64,
    pub punches_thrown: f64,
    pub kicks_landed: f64,
    pub kicks_thrown: f64,
    pub strikes_landed: f64,
    pub strikes_thrown: f64,
    pub strike_accuracy: f64,
    pub punch_accuracy: f64,
    pub kick_accuracy: f64,
    pub strikes_landed_per_minute: f64,
    pub punches_landed_per_minute: f64,
    pub kicks_landed_per_minute: f64,
}

/// Punch and kick totals. Strikes are punches plus kicks.
pub fn strike_totals(record: &FighterRecord) -> StrikeTotals {
    let t = &record.total_stats;
    let minutes = record.minutes_tracked;
    let strikes_landed = t.total_punches_landed + t.total_kicks_landed;
    let strikes_thrown = t.total_punches_thrown + t.total_kicks_thrown;

    StrikeTotals {
        punches_landed: t.total_punches_landed,
        punches_thrown: t.total_punches_thrown,
        kicks_landed: t.total_kicks_landed,
        kicks_thrown: t.total_kicks_thrown,
        strikes_landed,
        strikes_thrown,
        strike_accuracy: round_to(percentage(strikes_landed, strikes_thrown), 2),
        punch_accuracy: round_to(percentage(t.total_punches_landed, t.total_punches_thrown), 2),
        kick_accuracy: round_to(percentage(t.total_kicks_landed, t.total_kicks_thrown), 2),
        strikes_landed_per_minute: per_minute(strikes_landed, minutes),
        punches_landed_per_minute: per_minute(t.total_punches_landed, minutes),
        kicks_landed_per_minute: per_minute(t.total_kicks_landed, minutes),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CagePosition {
    pub center: f64,
    pub pushed_back: f64,
    pub pushing: f64,
}

pub fn cage_position(center: f64, pushed_back: f64, pushing: f64) -> CagePosition {
    let total = center + pushed_back + pushing;
    CagePosition {
        center: percentage(center, total),
        pushed_back: percentage(pushed_back, total),
        pushing: percentage(pushing, total),
    }
}

impl CagePosition {
    pub fn of(record: &FighterRecord) -> Self {
        cage_position(
            record.center_octagon,
            record.pushed_back_to_cage,
            record.pushing_against_cage,
        )
    }
}
