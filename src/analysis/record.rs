//! Typed schema for fighter and weight-class documents.
//!
//! Every counter is optional in the source data. Absent (or null) fields
//! deserialize to zero, so the extraction layer never has to check for
//! missing values.

use crate::api::models::Document;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const UNKNOWN_FIGHTER: &str = "Unknown Fighter";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FighterRecord {
    #[serde(rename = "id")]
    pub id: String,
    #[serde(rename = "fighterCode")]
    pub fighter_code: Option<String>,
    #[serde(rename = "fighterName")]
    pub fighter_name: Option<String>,
    #[serde(rename = "name")]
    pub name: Option<String>,
    #[serde(rename = "weightClass")]
    pub weight_class: Option<String>,

    pub rounds_tracked: f64,
    pub minutes_tracked: f64,
    pub fights_tracked: f64,
    pub center_octagon: f64,
    pub pushed_back_to_cage: f64,
    pub pushing_against_cage: f64,

    #[serde(rename = "takedown_stats")]
    pub takedown_stats: TakedownStats,
    #[serde(rename = "defensive_stats")]
    pub defensive_stats: DefensiveStats,
    #[serde(rename = "ground_stats")]
    pub ground_stats: GroundStats,
    #[serde(rename = "clinch_stats")]
    pub clinch_stats: ClinchStats,
    #[serde(rename = "striking_stats")]
    pub striking_stats: StrikingStats,
    #[serde(rename = "submission_stats")]
    pub submission_stats: SubmissionStats,
    #[serde(rename = "fight_outcome_stats")]
    pub fight_outcome_stats: FightOutcomeStats,
    #[serde(rename = "total_stats")]
    pub total_stats: TotalStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TakedownStats {
    pub single_leg_takedown_attempts: f64,
    pub single_leg_takedown_success: f64,
    pub double_leg_takedown_attempts: f64,
    pub double_leg_takedown_success: f64,
    pub body_lock_takedown_attempts: f64,
    pub body_lock_takedown_success: f64,
    pub trip_takedown_attempts: f64,
    pub trip_takedown_success: f64,
    #[serde(rename = "AttemptedAnklePickTD")]
    pub ankle_pick_attempts: f64,
    #[serde(rename = "SuccessfulAnklePickTD")]
    pub ankle_pick_success: f64,
    #[serde(rename = "AttemptedThrowTD")]
    pub throw_attempts: f64,
    #[serde(rename = "SuccessfulThrowTD")]
    pub throw_success: f64,
    #[serde(rename = "AttemptedImanariTD")]
    pub imanari_attempts: f64,
    #[serde(rename = "SuccessfulImanariTD")]
    pub imanari_success: f64,
}

/// Times this fighter was taken down, per technique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DefensiveStats {
    pub times_single_legged: f64,
    pub times_double_legged: f64,
    pub times_body_locked: f64,
    pub times_tripped: f64,
    pub times_ankle_picked: f64,
    pub times_thrown: f64,
    pub times_imanaried: f64,
    pub times_knocked_down: f64,
    pub times_stunned: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GroundStats {
    pub on_top_ground: f64,
    pub on_bottom_ground: f64,
    pub total_ground_strikes_made: f64,
    pub total_ground_strikes_thrown: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClinchStats {
    pub in_clinch: f64,
    pub being_clinched: f64,
    pub total_clinch_strikes_made: f64,
    pub total_clinch_strikes_thrown: f64,
}

/// Strikes absorbed, per type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StrikingStats {
    pub head_kicks_absorbed: f64,
    pub body_kicks_absorbed: f64,
    pub leg_kicks_absorbed: f64,
    pub jabs_absorbed: f64,
    pub hooks_absorbed: f64,
    pub overhands_absorbed: f64,
    pub straights_absorbed: f64,
    pub uppercuts_absorbed: f64,
}

impl StrikingStats {
    /// Head kicks, hooks, overhands, uppercuts, body kicks, straights, leg kicks, jabs.
    pub fn absorbed_by_type(&self) -> [f64; 8] {
        [
            self.head_kicks_absorbed,
            self.hooks_absorbed,
            self.overhands_absorbed,
            self.uppercuts_absorbed,
            self.body_kicks_absorbed,
            self.straights_absorbed,
            self.leg_kicks_absorbed,
            self.jabs_absorbed,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SubmissionStats {
    pub sub_attempts: f64,
    #[serde(rename = "SUBRNCWin")]
    pub rear_naked_choke_wins: f64,
    pub sub_guillotine_win: f64,
    pub sub_kimura_win: f64,
    pub sub_triangle_win: f64,
    pub sub_arm_triangle_win: f64,
}

impl SubmissionStats {
    pub fn total_wins(&self) -> f64 {
        self.rear_naked_choke_wins
            + self.sub_guillotine_win
            + self.sub_kimura_win
            + self.sub_triangle_win
            + self.sub_arm_triangle_win
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FightOutcomeStats {
    pub fighter_wins: f64,
    pub fighter_loss: f64,
    #[serde(rename = "FighterSUBWin")]
    pub submission_wins: f64,
    #[serde(rename = "FighterKOWins")]
    pub ko_wins: f64,
    #[serde(rename = "FighterTKOWins")]
    pub tko_wins: f64,
    #[serde(rename = "FighterUDWins")]
    pub unanimous_decision_wins: f64,
    pub fighter_split_dec_win: f64,
    pub fighter_maj_dec_win: f64,
    pub wins_in_title_fights: f64,
    pub losses_in_title_fights: f64,
}

impl FightOutcomeStats {
    pub fn knockout_wins(&self) -> f64 {
        self.ko_wins + self.tko_wins
    }

    pub fn finishes(&self) -> f64 {
        self.knockout_wins() + self.submission_wins
    }

    pub fn decision_wins(&self) -> f64 {
        self.unanimous_decision_wins + self.fighter_split_dec_win + self.fighter_maj_dec_win
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TotalStats {
    pub total_punches_thrown: f64,
    pub total_punches_landed: f64,
    pub total_kicks_thrown: f64,
    pub total_kicks_landed: f64,
    pub total_strikes_landed: f64,
    pub total_strikes_thrown: f64,

    pub total_jabs_thrown: f64,
    pub total_jabs_made: f64,
    pub total_jabs_missed: f64,
    pub total_hooks_thrown: f64,
    pub total_hooks_made: f64,
    pub total_hooks_missed: f64,
    pub total_straights_thrown: f64,
    pub total_straights_made: f64,
    pub total_straights_missed: f64,
    pub total_uppercuts_thrown: f64,
    pub total_uppercuts_made: f64,
    pub total_uppercuts_missed: f64,
    pub total_overhands_thrown: f64,
    pub total_overhands_made: f64,
    pub total_overhands_missed: f64,
    pub total_spin_back_fists_thrown: f64,
    pub total_spin_back_fists_made: f64,
    pub total_spin_back_fists_missed: f64,
    pub total_body_kicks_thrown: f64,
    pub total_body_kicks_made: f64,
    pub total_body_kicks_missed: f64,
    pub total_leg_kicks_thrown: f64,
    pub total_leg_kicks_made: f64,
    pub total_leg_kicks_missed: f64,
    pub total_high_kicks_thrown: f64,
    pub total_high_kicks_made: f64,
    pub total_high_kicks_missed: f64,
    pub total_elbows_thrown: f64,
    pub total_elbows_made: f64,
    pub total_elbows_missed: f64,
}

impl TotalStats {
    /// Misses across every standing strike subtype.
    pub fn total_missed(&self) -> f64 {
        self.total_jabs_missed
            + self.total_hooks_missed
            + self.total_straights_missed
            + self.total_uppercuts_missed
            + self.total_overhands_missed
            + self.total_spin_back_fists_missed
            + self.total_body_kicks_missed
            + self.total_leg_kicks_missed
            + self.total_high_kicks_missed
            + self.total_elbows_missed
    }

    pub fn standing_landed(&self) -> f64 {
        self.total_jabs_made
            + self.total_hooks_made
            + self.total_straights_made
            + self.total_uppercuts_made
            + self.total_overhands_made
            + self.total_spin_back_fists_made
            + self.total_body_kicks_made
            + self.total_leg_kicks_made
            + self.total_high_kicks_made
            + self.total_elbows_made
    }
}

/// Mean counters across every fighter in one weight class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WeightClassAverage {
    #[serde(rename = "id")]
    pub id: String,
    #[serde(rename = "weightclassname")]
    pub weight_class_name: String,
    #[serde(rename = "weight")]
    pub weight: f64,
    #[serde(rename = "fights")]
    pub fights: f64,
    #[serde(rename = "minutes")]
    pub minutes: f64,
    #[serde(rename = "rounds")]
    pub rounds: f64,

    pub single_leg_takedown_attempts: f64,
    pub single_leg_takedown_success: f64,
    pub double_leg_takedown_attempts: f64,
    pub double_leg_takedown_success: f64,
    pub body_lock_takedown_attempts: f64,
    pub body_lock_takedown_success: f64,
    pub trip_takedown_attempts: f64,
    pub trip_takedown_success: f64,
    #[serde(rename = "AttemptedThrowTD")]
    pub throw_attempts: f64,
    #[serde(rename = "SuccessfulThrowTD")]
    pub throw_success: f64,

    pub sub_attempts: f64,
    #[serde(rename = "subwin")]
    pub submission_wins: f64,
    /// Share of wins ending in KO, TKO or submission. Zero when not recorded.
    #[serde(rename = "finishPercentage")]
    pub finish_percentage: f64,

    pub head_kicks_absorbed: f64,
    pub body_kicks_absorbed: f64,
    pub leg_kicks_absorbed: f64,
    pub jabs_absorbed: f64,
    pub hooks_absorbed: f64,
    pub overhands_absorbed: f64,
    pub straights_absorbed: f64,
    pub uppercuts_absorbed: f64,

    pub in_clinch: f64,
    pub being_clinched: f64,
    pub total_clinch_strikes_made: f64,
    pub total_clinch_strikes_thrown: f64,
    pub on_top_ground: f64,
    pub on_bottom_ground: f64,
    pub total_ground_strikes_made: f64,
    pub total_ground_strikes_thrown: f64,

    pub center_octagon: f64,
    pub pushed_back_to_cage: f64,
    pub pushing_against_cage: f64,

    pub total_strikes_landed: f64,
    pub total_punches_landed: f64,
    pub total_punches_thrown: f64,
    pub total_kicks_landed: f64,
    pub total_kicks_thrown: f64,

    pub total_jabs_made: f64,
    pub total_jabs_thrown: f64,
    pub total_hooks_made: f64,
    pub total_hooks_thrown: f64,
    pub total_straights_made: f64,
    pub total_straights_thrown: f64,
    pub total_uppercuts_made: f64,
    pub total_uppercuts_thrown: f64,
    pub total_overhands_made: f64,
    pub total_overhands_thrown: f64,
    pub total_spin_back_fists_made: f64,
    pub total_spin_back_fists_thrown: f64,
    pub total_body_kicks_made: f64,
    pub total_body_kicks_thrown: f64,
    pub total_leg_kicks_made: f64,
    pub total_leg_kicks_thrown: f64,
    pub total_high_kicks_made: f64,
    pub total_high_kicks_thrown: f64,
    pub total_elbows_made: f64,
    pub total_elbows_thrown: f64,
}

impl WeightClassAverage {
    /// Cohort takedown attempts. The weight-class documents only carry five techniques.
    pub fn takedown_attempts(&self) -> f64 {
        self.single_leg_takedown_attempts
            + self.double_leg_takedown_attempts
            + self.body_lock_takedown_attempts
            + self.trip_takedown_attempts
            + self.throw_attempts
    }

    /// Same order as `StrikingStats::absorbed_by_type`.
    pub fn absorbed_by_type(&self) -> [f64; 8] {
        [
            self.head_kicks_absorbed,
            self.hooks_absorbed,
            self.overhands_absorbed,
            self.uppercuts_absorbed,
            self.body_kicks_absorbed,
            self.straights_absorbed,
            self.leg_kicks_absorbed,
            self.jabs_absorbed,
        ]
    }

    /// Everything thrown: punches, kicks, elbows, spinning backfists, clinch and ground strikes.
    pub fn strikes_thrown(&self) -> f64 {
        self.total_punches_thrown
            + self.total_kicks_thrown
            + self.total_elbows_thrown
            + self.total_spin_back_fists_thrown
            + self.total_clinch_strikes_thrown
            + self.total_ground_strikes_thrown
    }

    pub fn takedown_successes(&self) -> f64 {
        self.single_leg_takedown_success
            + self.double_leg_takedown_success
            + self.body_lock_takedown_success
            + self.trip_takedown_success
            + self.throw_success
    }

    /// Missed standing strikes, derived as thrown minus made.
    pub fn total_missed(&self) -> f64 {
        (self.standing_thrown() - self.standing_landed()).max(0.0)
    }

    pub fn standing_thrown(&self) -> f64 {
        self.total_jabs_thrown
            + self.total_hooks_thrown
            + self.total_straights_thrown
            + self.total_uppercuts_thrown
            + self.total_overhands_thrown
            + self.total_spin_back_fists_thrown
            + self.total_body_kicks_thrown
            + self.total_leg_kicks_thrown
            + self.total_high_kicks_thrown
            + self.total_elbows_thrown
    }

    pub fn standing_landed(&self) -> f64 {
        self.total_jabs_made
            + self.total_hooks_made
            + self.total_straights_made
            + self.total_uppercuts_made
            + self.total_overhands_made
            + self.total_spin_back_fists_made
            + self.total_body_kicks_made
            + self.total_leg_kicks_made
            + self.total_high_kicks_made
            + self.total_elbows_made
    }

    pub fn from_document(doc: Document) -> Result<Self, AppError> {
        let id = doc.id.clone();
        let mut avg: WeightClassAverage = decode(doc)?;
        avg.id = id;
        Ok(avg)
    }
}

impl FighterRecord {
    pub fn from_document(doc: Document) -> Result<Self, AppError> {
        let id = doc.id.clone();
        let mut record: FighterRecord = decode(doc)?;
        record.id = id;
        Ok(record)
    }

    /// Same coverage as `WeightClassAverage::strikes_thrown`.
    pub fn all_strikes_thrown(&self) -> f64 {
        let t = &self.total_stats;
        t.total_punches_thrown
            + t.total_kicks_thrown
            + t.total_elbows_thrown
            + t.total_spin_back_fists_thrown
            + self.clinch_stats.total_clinch_strikes_thrown
            + self.ground_stats.total_ground_strikes_thrown
    }

    /// Every tracked positional event, dominant or not.
    pub fn positional_events(&self) -> f64 {
        self.center_octagon
            + self.pushed_back_to_cage
            + self.pushing_against_cage
            + self.clinch_stats.in_clinch
            + self.clinch_stats.being_clinched
            + self.ground_stats.on_top_ground
            + self.ground_stats.on_bottom_ground
    }

    pub fn display_name(&self) -> &str {
        self.fighter_name
            .as_deref()
            .or(self.name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_FIGHTER)
    }

    pub fn code(&self) -> &str {
        self.fighter_code
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.id)
    }
}

fn decode<T: DeserializeOwned>(doc: Document) -> Result<T, AppError> {
    let id = doc.id;
    let mut fields = strip_nulls(doc.fields);
    fields.remove("id");
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::JsonError(format!("document '{}': {}", id, e)))
}

/// Drop explicit nulls so they read the same as absent fields.
fn strip_nulls(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::Object(inner) => Some((key, Value::Object(strip_nulls(inner)))),
            other => Some((key, other)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(id: &str, fields: Value) -> Document {
        match fields {
            Value::Object(fields) => Document { id: id.to_string(), fields },
            _ => panic!("fields must be an object"),
        }
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let record = FighterRecord::from_document(document("F1", json!({}))).unwrap();
        assert_eq!(record.id, "F1");
        assert_eq!(record.minutes_tracked, 0.0);
        assert_eq!(record.takedown_stats, TakedownStats::default());
        assert_eq!(record.display_name(), UNKNOWN_FIGHTER);
        assert_eq!(record.code(), "F1");
    }

    #[test]
    fn test_nested_counters_and_nulls() {
        let record = FighterRecord::from_document(document(
            "F2",
            json!({
                "fighterName": "Merab Dvalishvili",
                "fighterCode": "MD01",
                "weightClass": "Bantamweight",
                "MinutesTracked": 75,
                "RoundsTracked": 15.0,
                "CenterOctagon": null,
                "takedown_stats": {
                    "DoubleLegTakedownAttempts": 40,
                    "DoubleLegTakedownSuccess": 15,
                    "AttemptedAnklePickTD": 3,
                    "TripTakedownSuccess": null
                },
                "submission_stats": { "SubAttempts": 2, "SUBRNCWin": 1 },
                "fight_outcome_stats": { "FighterWins": 12, "FighterSUBWin": 1 }
            }),
        ))
        .unwrap();

        assert_eq!(record.display_name(), "Merab Dvalishvili");
        assert_eq!(record.code(), "MD01");
        assert_eq!(record.weight_class.as_deref(), Some("Bantamweight"));
        assert_eq!(record.minutes_tracked, 75.0);
        assert_eq!(record.rounds_tracked, 15.0);
        assert_eq!(record.center_octagon, 0.0);
        assert_eq!(record.takedown_stats.double_leg_takedown_attempts, 40.0);
        assert_eq!(record.takedown_stats.ankle_pick_attempts, 3.0);
        assert_eq!(record.takedown_stats.trip_takedown_success, 0.0);
        assert_eq!(record.submission_stats.total_wins(), 1.0);
        assert_eq!(record.fight_outcome_stats.submission_wins, 1.0);
    }

    #[test]
    fn test_legacy_name_field() {
        let record =
            FighterRecord::from_document(document("F3", json!({ "name": "Legacy Name" }))).unwrap();
        assert_eq!(record.display_name(), "Legacy Name");
    }

    #[test]
    fn test_wrong_type_is_rejected_at_boundary() {
        let result = FighterRecord::from_document(document(
            "F4",
            json!({ "MinutesTracked": "a lot" }),
        ));
        assert!(matches!(result, Err(AppError::JsonError(msg)) if msg.contains("F4")));
    }

    #[test]
    fn test_weight_class_document() {
        let avg = WeightClassAverage::from_document(document(
            "WC1",
            json!({
                "weightclassname": "Lightweight",
                "fights": 4,
                "rounds": 10,
                "SingleLegTakedownAttempts": 3,
                "AttemptedThrowTD": 1,
                "subwin": 0.4
            }),
        ))
        .unwrap();

        assert_eq!(avg.id, "WC1");
        assert_eq!(avg.weight_class_name, "Lightweight");
        assert_eq!(avg.takedown_attempts(), 4.0);
        assert_eq!(avg.submission_wins, 0.4);
    }
}
