use super::extract::{
    cage_position, clinch_control_percentage, ground_control_percentage, strike_totals,
    takedown_totals, top_strikes, top_takedowns, top_vulnerabilities, CagePosition, StrikeStat,
    StrikeTotals, TakedownTotals, TechniqueStat, Vulnerability,
};
use super::overall::{OverallRating, RatingSuite};
use super::rating::{
    aggressiveness_rating, defense_rating, finish_percentage, finish_rating,
    location_control_rating, positional_rating, striking_rating, GrapplingRatings,
    StrikingInputs,
};
use super::record::{FighterRecord, WeightClassAverage};
use serde::Serialize;

/// Knockdowns and stuns suffered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Durability {
    pub knocked_down: f64,
    pub stunned: f64,
    pub knocked_down_per_fight: f64,
    pub stunned_per_fight: f64,
}

impl Durability {
    pub fn of(record: &FighterRecord) -> Self {
        let d = &record.defensive_stats;
        Durability {
            knocked_down: d.times_knocked_down,
            stunned: d.times_stunned,
            knocked_down_per_fight: per_fight(d.times_knocked_down, record.fights_tracked),
            stunned_per_fight: per_fight(d.times_stunned, record.fights_tracked),
        }
    }
}

fn per_fight(count: f64, fights: f64) -> f64 {
    if fights > 0.0 {
        count / fights
    } else {
        0.0
    }
}

/// Everything shown for a single fighter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FighterProfile {
    pub id: String,
    pub fighter_code: String,
    pub fighter_name: String,
    pub weight_class: Option<String>,
    /// Weight limit in pounds, from the weight-class document.
    pub weight_limit: Option<f64>,
    pub has_cohort: bool,

    pub rounds_tracked: f64,
    pub minutes_tracked: f64,
    pub fights_tracked: f64,

    pub takedowns: TakedownTotals,
    pub top_takedowns: Vec<TechniqueStat>,
    pub top_vulnerabilities: Vec<Vulnerability>,

    pub strikes: StrikeTotals,
    pub top_strikes: Vec<StrikeStat>,

    pub ground_control: f64,
    pub clinch_control: f64,
    pub cage_position: CagePosition,
    pub durability: Durability,
    pub finish_percentage: f64,

    pub grappling: GrapplingRatings,
    pub striking_rating: f64,
    pub location_control_rating: f64,
    pub finish_rating: f64,
    pub positional_rating: f64,
    pub defense_rating: f64,
    /// `None` until enough fights are tracked.
    pub aggressiveness_rating: Option<f64>,
    pub overall: OverallRating,
}

impl FighterProfile {
    pub fn build(record: &FighterRecord, cohort: Option<&WeightClassAverage>) -> Self {
        let position = CagePosition::of(record);
        let cohort_position = cohort
            .map(|wc| cage_position(wc.center_octagon, wc.pushed_back_to_cage, wc.pushing_against_cage))
            .unwrap_or_default();

        let grappling = GrapplingRatings::compute(record, cohort);
        let finish_pct = finish_percentage(record);
        let ratings = RatingSuite {
            striking: striking_rating(&StrikingInputs::from_record(record, cohort)),
            grappling: grappling.grade,
            defense: defense_rating(record, cohort),
            aggressiveness: aggressiveness_rating(record, cohort),
            finish: finish_rating(finish_pct, cohort.map_or(0.0, |wc| wc.finish_percentage)),
            positional: positional_rating(record),
        };

        FighterProfile {
            id: record.id.clone(),
            fighter_code: record.code().to_string(),
            fighter_name: record.display_name().to_string(),
            weight_class: record.weight_class.clone(),
            weight_limit: cohort.map(|wc| wc.weight).filter(|w| *w > 0.0),
            has_cohort: cohort.is_some(),

            rounds_tracked: record.rounds_tracked,
            minutes_tracked: record.minutes_tracked,
            fights_tracked: record.fights_tracked,

            takedowns: takedown_totals(&record.takedown_stats),
            top_takedowns: top_takedowns(record),
            top_vulnerabilities: top_vulnerabilities(record),

            strikes: strike_totals(record),
            top_strikes: top_strikes(record),

            ground_control: ground_control_percentage(record),
            clinch_control: clinch_control_percentage(record),
            cage_position: position,
            durability: Durability::of(record),
            finish_percentage: finish_pct,

            grappling,
            striking_rating: ratings.striking,
            location_control_rating: location_control_rating(&position, &cohort_position),
            finish_rating: ratings.finish,
            positional_rating: ratings.positional,
            defense_rating: ratings.defense,
            aggressiveness_rating: ratings.aggressiveness,
            overall: OverallRating::compute(record, cohort, &ratings),
        }
    }
}
