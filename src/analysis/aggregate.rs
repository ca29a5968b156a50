use super::extract::{per_minute, percentage, round_to, strike_totals, takedown_totals, CagePosition};
use super::record::FighterRecord;
use clap::ValueEnum;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Minimum experience for the default leaderboard view.
pub const DEFAULT_MIN_MINUTES: f64 = 20.0;
pub const DEFAULT_LIMIT: usize = 50;

/// Derived per-fighter quantities used for filtering, sorting and charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FighterTotal {
    pub fighter_code: String,
    pub fighter_name: String,

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

    pub minutes_tracked: f64,
    pub fights_tracked: f64,
    pub rounds_tracked: f64,
    pub wins: f64,
    pub losses: f64,
    pub win_percentage: f64,
    pub title_fight_wins: f64,
    pub title_fight_losses: f64,

    pub jabs_thrown: f64,
    pub hooks_thrown: f64,
    pub straights_thrown: f64,
    pub uppercuts_thrown: f64,
    pub body_kicks_thrown: f64,
    pub leg_kicks_thrown: f64,
    pub high_kicks_thrown: f64,
    pub elbows_thrown: f64,

    pub clinch_strikes_landed: f64,
    pub clinch_strikes_thrown: f64,
    pub ground_strikes_landed: f64,
    pub ground_strikes_thrown: f64,
    pub clinch_strikes_per_minute: f64,
    pub ground_strikes_per_minute: f64,

    pub takedown_attempts: f64,
    pub takedown_success: f64,
    pub takedown_success_rate: f64,
    pub submission_attempts: f64,
    pub submission_wins: f64,
    pub submission_success_rate: f64,

    pub center_octagon: f64,
    pub pushed_back_to_cage: f64,
    pub pushing_against_cage: f64,
}

impl FighterTotal {
    pub fn from_record(record: &FighterRecord) -> Self {
        let strikes = strike_totals(record);
        let outcomes = &record.fight_outcome_stats;
        let t = &record.total_stats;
        let minutes = record.minutes_tracked;
        let takedowns = takedown_totals(&record.takedown_stats);
        let submission_attempts = record.submission_stats.sub_attempts;
        let submission_wins = record.submission_stats.total_wins();

        FighterTotal {
            fighter_code: record.code().to_string(),
            fighter_name: record.display_name().to_string(),

            punches_landed: strikes.punches_landed,
            punches_thrown: strikes.punches_thrown,
            kicks_landed: strikes.kicks_landed,
            kicks_thrown: strikes.kicks_thrown,
            strikes_landed: strikes.strikes_landed,
            strikes_thrown: strikes.strikes_thrown,
            strike_accuracy: strikes.strike_accuracy,
            punch_accuracy: strikes.punch_accuracy,
            kick_accuracy: strikes.kick_accuracy,
            strikes_landed_per_minute: strikes.strikes_landed_per_minute,
            punches_landed_per_minute: strikes.punches_landed_per_minute,
            kicks_landed_per_minute: strikes.kicks_landed_per_minute,

            minutes_tracked: minutes,
            fights_tracked: record.fights_tracked,
            rounds_tracked: record.rounds_tracked,
            wins: outcomes.fighter_wins,
            losses: outcomes.fighter_loss,
            win_percentage: round_to(
                percentage(outcomes.fighter_wins, outcomes.fighter_wins + outcomes.fighter_loss),
                2,
            ),
            title_fight_wins: outcomes.wins_in_title_fights,
            title_fight_losses: outcomes.losses_in_title_fights,

            jabs_thrown: t.total_jabs_thrown,
            hooks_thrown: t.total_hooks_thrown,
            straights_thrown: t.total_straights_thrown,
            uppercuts_thrown: t.total_uppercuts_thrown,
            body_kicks_thrown: t.total_body_kicks_thrown,
            leg_kicks_thrown: t.total_leg_kicks_thrown,
            high_kicks_thrown: t.total_high_kicks_thrown,
            elbows_thrown: t.total_elbows_thrown,

            clinch_strikes_landed: record.clinch_stats.total_clinch_strikes_made,
            clinch_strikes_thrown: record.clinch_stats.total_clinch_strikes_thrown,
            ground_strikes_landed: record.ground_stats.total_ground_strikes_made,
            ground_strikes_thrown: record.ground_stats.total_ground_strikes_thrown,
            clinch_strikes_per_minute: per_minute(record.clinch_stats.total_clinch_strikes_made, minutes),
            ground_strikes_per_minute: per_minute(record.ground_stats.total_ground_strikes_made, minutes),

            takedown_attempts: takedowns.attempts,
            takedown_success: takedowns.success,
            takedown_success_rate: takedowns.success_rate,
            submission_attempts,
            submission_wins,
            submission_success_rate: percentage(submission_wins, submission_attempts),

            center_octagon: record.center_octagon,
            pushed_back_to_cage: record.pushed_back_to_cage,
            pushing_against_cage: record.pushing_against_cage,
        }
    }

    /// Share of thrown strikes spread across the eight tracked subtypes.
    pub fn striking_diversity(&self) -> f64 {
        let subtypes = self.jabs_thrown
            + self.hooks_thrown
            + self.straights_thrown
            + self.uppercuts_thrown
            + self.body_kicks_thrown
            + self.leg_kicks_thrown
            + self.high_kicks_thrown
            + self.elbows_thrown;
        percentage(subtypes, self.strikes_thrown)
    }

    pub fn cage_position(&self) -> CagePosition {
        super::extract::cage_position(
            self.center_octagon,
            self.pushed_back_to_cage,
            self.pushing_against_cage,
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Accuracy,
    StrikesLanded,
    StrikesThrown,
    Name,
    MinutesTracked,
    Wins,
    WinPercentage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Inclusion thresholds. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub min_minutes_tracked: Option<f64>,
    pub min_fights_tracked: Option<f64>,
    pub min_rounds_tracked: Option<f64>,

    pub min_strikes_thrown: Option<f64>,
    pub min_strikes_landed: Option<f64>,
    pub min_punches_thrown: Option<f64>,
    pub min_punches_landed: Option<f64>,
    pub min_kicks_thrown: Option<f64>,
    pub min_kicks_landed: Option<f64>,

    pub min_jabs_thrown: Option<f64>,
    pub min_hooks_thrown: Option<f64>,
    pub min_straights_thrown: Option<f64>,
    pub min_uppercuts_thrown: Option<f64>,
    pub min_body_kicks_thrown: Option<f64>,
    pub min_leg_kicks_thrown: Option<f64>,
    pub min_high_kicks_thrown: Option<f64>,
    pub min_elbows_thrown: Option<f64>,

    pub min_wins: Option<f64>,
    pub max_losses: Option<f64>,
    pub min_win_percentage: Option<f64>,
    pub has_title_fight_wins: Option<bool>,
    pub has_title_fight_losses: Option<bool>,

    pub min_strike_accuracy: Option<f64>,
    pub max_strike_accuracy: Option<f64>,
    pub min_punch_accuracy: Option<f64>,
    pub max_punch_accuracy: Option<f64>,
    pub min_kick_accuracy: Option<f64>,
    pub max_kick_accuracy: Option<f64>,

    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub limit: Option<usize>,
}

fn below(value: f64, min: Option<f64>) -> bool {
    min.is_some_and(|m| value < m)
}

fn above(value: f64, max: Option<f64>) -> bool {
    max.is_some_and(|m| value > m)
}

fn lacks(count: f64, required: Option<bool>) -> bool {
    required == Some(true) && count <= 0.0
}

impl FilterOptions {
    /// 20 minutes of tracked experience, most accurate first, 50 rows.
    pub fn default_view() -> Self {
        FilterOptions {
            min_minutes_tracked: Some(DEFAULT_MIN_MINUTES),
            sort_by: SortKey::Accuracy,
            sort_order: SortOrder::Desc,
            limit: Some(DEFAULT_LIMIT),
            ..FilterOptions::default()
        }
    }

    /// Experience, volume, style, outcomes, then accuracy. Stops at the first failure.
    pub fn accepts(&self, f: &FighterTotal) -> bool {
        let experience = below(f.minutes_tracked, self.min_minutes_tracked)
            || below(f.fights_tracked, self.min_fights_tracked)
            || below(f.rounds_tracked, self.min_rounds_tracked);
        if experience {
            return false;
        }

        let volume = below(f.strikes_thrown, self.min_strikes_thrown)
            || below(f.strikes_landed, self.min_strikes_landed)
            || below(f.punches_thrown, self.min_punches_thrown)
            || below(f.punches_landed, self.min_punches_landed)
            || below(f.kicks_thrown, self.min_kicks_thrown)
            || below(f.kicks_landed, self.min_kicks_landed);
        if volume {
            return false;
        }

        let style = below(f.jabs_thrown, self.min_jabs_thrown)
            || below(f.hooks_thrown, self.min_hooks_thrown)
            || below(f.straights_thrown, self.min_straights_thrown)
            || below(f.uppercuts_thrown, self.min_uppercuts_thrown)
            || below(f.body_kicks_thrown, self.min_body_kicks_thrown)
            || below(f.leg_kicks_thrown, self.min_leg_kicks_thrown)
            || below(f.high_kicks_thrown, self.min_high_kicks_thrown)
            || below(f.elbows_thrown, self.min_elbows_thrown);
        if style {
            return false;
        }

        let outcomes = below(f.wins, self.min_wins)
            || above(f.losses, self.max_losses)
            || below(f.win_percentage, self.min_win_percentage)
            || lacks(f.title_fight_wins, self.has_title_fight_wins)
            || lacks(f.title_fight_losses, self.has_title_fight_losses);
        if outcomes {
            return false;
        }

        !(below(f.strike_accuracy, self.min_strike_accuracy)
            || above(f.strike_accuracy, self.max_strike_accuracy)
            || below(f.punch_accuracy, self.min_punch_accuracy)
            || above(f.punch_accuracy, self.max_punch_accuracy)
            || below(f.kick_accuracy, self.min_kick_accuracy)
            || above(f.kick_accuracy, self.max_kick_accuracy))
    }
}

fn compare(a: &FighterTotal, b: &FighterTotal, key: SortKey) -> Ordering {
    match key {
        SortKey::Accuracy => a.strike_accuracy.total_cmp(&b.strike_accuracy),
        SortKey::StrikesLanded => a.strikes_landed.total_cmp(&b.strikes_landed),
        SortKey::StrikesThrown => a.strikes_thrown.total_cmp(&b.strikes_thrown),
        SortKey::Name => a.fighter_name.cmp(&b.fighter_name),
        SortKey::MinutesTracked => a.minutes_tracked.total_cmp(&b.minutes_tracked),
        SortKey::Wins => a.wins.total_cmp(&b.wins),
        SortKey::WinPercentage => a.win_percentage.total_cmp(&b.win_percentage),
    }
}

/// Stable sort. Descending inverts the comparator so ties keep input order.
pub fn sort_totals(totals: &mut [FighterTotal], key: SortKey, order: SortOrder) {
    totals.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

/// Scan every record, keep those passing `options`, sort and truncate.
pub fn aggregate(records: &[FighterRecord], options: &FilterOptions) -> Vec<FighterTotal> {
    let mut totals: Vec<FighterTotal> = records
        .iter()
        .map(FighterTotal::from_record)
        .filter(|total| options.accepts(total))
        .collect();
    let matched = totals.len();

    sort_totals(&mut totals, options.sort_by, options.sort_order);
    if let Some(limit) = options.limit {
        totals.truncate(limit);
    }

    debug!(
        scanned = records.len(),
        matched,
        returned = totals.len(),
        "aggregated fighter totals"
    );
    totals
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    #[default]
    StrikeEfficiency,
    PunchEfficiency,
    KickEfficiency,
    VolumeVsAccuracy,
    ClinchVsGround,
    TakedownVsSubmission,
    CageControl,
    StrikingDiversity,
    ExperienceVsSuccess,
}

impl ChartKind {
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::StrikeEfficiency => "Strike Efficiency Analysis",
            ChartKind::PunchEfficiency => "Punch Efficiency Analysis",
            ChartKind::KickEfficiency => "Kick Efficiency Analysis",
            ChartKind::VolumeVsAccuracy => "Volume vs Accuracy Analysis",
            ChartKind::ClinchVsGround => "Clinch vs Ground Fighting",
            ChartKind::TakedownVsSubmission => "Takedown vs Submission Success",
            ChartKind::CageControl => "Cage Control Analysis",
            ChartKind::StrikingDiversity => "Striking Diversity vs Volume",
            ChartKind::ExperienceVsSuccess => "Experience vs Success Rate",
        }
    }

    /// Axis labels as (x, y).
    pub fn axes(self) -> (&'static str, &'static str) {
        match self {
            ChartKind::StrikeEfficiency => ("Strikes Landed per Minute", "Strike Accuracy (%)"),
            ChartKind::PunchEfficiency => ("Punches Landed per Minute", "Punch Accuracy (%)"),
            ChartKind::KickEfficiency => ("Kicks Landed per Minute", "Kick Accuracy (%)"),
            ChartKind::VolumeVsAccuracy => ("Total Strikes Thrown", "Strike Accuracy (%)"),
            ChartKind::ClinchVsGround => ("Clinch Strikes per Minute", "Ground Strikes per Minute"),
            ChartKind::TakedownVsSubmission => {
                ("Takedown Success Rate (%)", "Submission Success Rate (%)")
            }
            ChartKind::CageControl => ("Center Octagon Time (%)", "Pushing Against Cage (%)"),
            ChartKind::StrikingDiversity => {
                ("Strikes Landed per Minute", "Striking Diversity Score (%)")
            }
            ChartKind::ExperienceVsSuccess => ("Minutes Tracked", "Win Percentage (%)"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BubbleSize {
    #[default]
    MinutesTracked,
    FightsTracked,
    TotalStrikesThrown,
    Wins,
    WinPercentage,
}

impl BubbleSize {
    pub fn label(self) -> &'static str {
        match self {
            BubbleSize::MinutesTracked => "Minutes Tracked",
            BubbleSize::FightsTracked => "Fights Tracked",
            BubbleSize::TotalStrikesThrown => "Total Strikes Thrown",
            BubbleSize::Wins => "Wins",
            BubbleSize::WinPercentage => "Win Percentage",
        }
    }

    fn value(self, f: &FighterTotal) -> f64 {
        match self {
            BubbleSize::MinutesTracked => f.minutes_tracked,
            BubbleSize::FightsTracked => f.fights_tracked,
            BubbleSize::TotalStrikesThrown => f.strikes_thrown,
            BubbleSize::Wins => f.wins,
            BubbleSize::WinPercentage => f.win_percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub index: usize,
    pub fighter_name: String,
    pub x: f64,
    pub y: f64,
    pub bubble_size: f64,
    pub accuracy: f64,
}

/// Project aggregated totals onto the axes of `kind`, keeping their order.
pub fn chart_points(totals: &[FighterTotal], kind: ChartKind, bubble: BubbleSize) -> Vec<ChartPoint> {
    totals
        .iter()
        .enumerate()
        .map(|(index, f)| {
            let (x, y, accuracy) = match kind {
                ChartKind::StrikeEfficiency => {
                    (f.strikes_landed_per_minute, f.strike_accuracy, f.strike_accuracy)
                }
                ChartKind::PunchEfficiency => {
                    (f.punches_landed_per_minute, f.punch_accuracy, f.punch_accuracy)
                }
                ChartKind::KickEfficiency => {
                    (f.kicks_landed_per_minute, f.kick_accuracy, f.kick_accuracy)
                }
                ChartKind::VolumeVsAccuracy => (f.strikes_thrown, f.strike_accuracy, f.strike_accuracy),
                ChartKind::ClinchVsGround => (
                    f.clinch_strikes_per_minute,
                    f.ground_strikes_per_minute,
                    f.strike_accuracy,
                ),
                ChartKind::TakedownVsSubmission => (
                    f.takedown_success_rate,
                    f.submission_success_rate,
                    f.strike_accuracy,
                ),
                ChartKind::CageControl => {
                    let position = f.cage_position();
                    (position.center, position.pushing, f.strike_accuracy)
                }
                ChartKind::StrikingDiversity => (
                    f.strikes_landed_per_minute,
                    f.striking_diversity(),
                    f.strike_accuracy,
                ),
                ChartKind::ExperienceVsSuccess => {
                    (f.minutes_tracked, f.win_percentage, f.strike_accuracy)
                }
            };

            ChartPoint {
                index,
                fighter_name: f.fighter_name.clone(),
                x,
                y,
                bubble_size: bubble.value(f),
                accuracy,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(name: &str, minutes: f64, landed: f64, thrown: f64) -> FighterRecord {
        let mut record = FighterRecord {
            id: name.to_lowercase(),
            fighter_name: Some(name.to_string()),
            minutes_tracked: minutes,
            ..FighterRecord::default()
        };
        record.total_stats.total_punches_landed = landed;
        record.total_stats.total_punches_thrown = thrown;
        record
    }

    fn names(totals: &[FighterTotal]) -> Vec<&str> {
        totals.iter().map(|t| t.fighter_name.as_str()).collect()
    }

    #[test]
    fn test_fighter_total_derived_values() {
        let mut record = fighter("Zhang Weili", 25.0, 50.0, 100.0);
        record.total_stats.total_kicks_landed = 10.0;
        record.total_stats.total_kicks_thrown = 20.0;
        record.fight_outcome_stats.fighter_wins = 2.0;
        record.fight_outcome_stats.fighter_loss = 1.0;
        record.submission_stats.sub_attempts = 4.0;
        record.submission_stats.rear_naked_choke_wins = 1.0;
        record.submission_stats.sub_kimura_win = 1.0;
        record.takedown_stats.imanari_attempts = 2.0;
        record.takedown_stats.trip_takedown_attempts = 2.0;
        record.takedown_stats.trip_takedown_success = 1.0;

        let total = FighterTotal::from_record(&record);
        assert_eq!(total.fighter_code, "zhang weili");
        assert_eq!(total.strikes_landed, 60.0);
        assert_eq!(total.strike_accuracy, 50.0);
        assert_eq!(total.win_percentage, 66.67);
        assert_eq!(total.submission_wins, 2.0);
        assert_eq!(total.submission_success_rate, 50.0);
        assert_eq!(total.takedown_attempts, 4.0);
        assert_eq!(total.takedown_success_rate, 25.0);
        assert_eq!(total.strikes_landed_per_minute, 2.4);
    }

    #[test]
    fn test_default_view_excludes_inexperienced() {
        let records = vec![
            fighter("Rookie", 19.9, 30.0, 40.0),
            fighter("Veteran", 20.0, 10.0, 40.0),
        ];
        let totals = aggregate(&records, &FilterOptions::default_view());
        assert_eq!(names(&totals), vec!["Veteran"]);
    }

    #[test]
    fn test_default_view_limit() {
        let records: Vec<FighterRecord> = (0..60)
            .map(|i| fighter(&format!("F{:02}", i), 30.0, i as f64, 100.0))
            .collect();
        let totals = aggregate(&records, &FilterOptions::default_view());
        assert_eq!(totals.len(), DEFAULT_LIMIT);
        assert_eq!(totals[0].fighter_name, "F59");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let mut records = vec![
            fighter("A", 30.0, 40.0, 100.0),
            fighter("B", 30.0, 10.0, 200.0),
            fighter("C", 10.0, 90.0, 100.0),
            fighter("D", 60.0, 5.0, 10.0),
        ];
        records[0].fight_outcome_stats.fighter_wins = 3.0;
        records[3].fight_outcome_stats.fighter_wins = 1.0;

        let mut options = FilterOptions::default();
        let mut previous = aggregate(&records, &options).len();
        assert_eq!(previous, 4);

        let steps: Vec<Box<dyn Fn(&mut FilterOptions)>> = vec![
            Box::new(|o: &mut FilterOptions| o.min_minutes_tracked = Some(20.0)),
            Box::new(|o: &mut FilterOptions| o.min_strikes_thrown = Some(50.0)),
            Box::new(|o: &mut FilterOptions| o.min_wins = Some(1.0)),
            Box::new(|o: &mut FilterOptions| o.min_strike_accuracy = Some(30.0)),
        ];
        for step in steps {
            step(&mut options);
            let size = aggregate(&records, &options).len();
            assert!(size <= previous);
            previous = size;
        }
        assert_eq!(previous, 1);
    }

    #[test]
    fn test_inclusive_bounds() {
        let record = fighter("Edge", 20.0, 50.0, 100.0);
        let total = FighterTotal::from_record(&record);

        let options = FilterOptions {
            min_strike_accuracy: Some(50.0),
            max_strike_accuracy: Some(50.0),
            min_punches_thrown: Some(100.0),
            ..FilterOptions::default()
        };
        assert!(options.accepts(&total));

        let stricter = FilterOptions {
            max_strike_accuracy: Some(49.99),
            ..options
        };
        assert!(!stricter.accepts(&total));
    }

    #[test]
    fn test_zero_thresholds_are_constraints() {
        let mut record = fighter("Loser", 30.0, 1.0, 2.0);
        record.fight_outcome_stats.fighter_loss = 1.0;
        let total = FighterTotal::from_record(&record);

        let options = FilterOptions {
            max_losses: Some(0.0),
            ..FilterOptions::default()
        };
        assert!(!options.accepts(&total));
    }

    #[test]
    fn test_title_fight_flags() {
        let mut champ = fighter("Champ", 30.0, 1.0, 2.0);
        champ.fight_outcome_stats.wins_in_title_fights = 1.0;
        let contender = fighter("Contender", 30.0, 1.0, 2.0);

        let options = FilterOptions {
            has_title_fight_wins: Some(true),
            ..FilterOptions::default()
        };
        let totals = aggregate(&[champ.clone(), contender.clone()], &options);
        assert_eq!(names(&totals), vec!["Champ"]);

        let options = FilterOptions {
            has_title_fight_wins: Some(false),
            ..FilterOptions::default()
        };
        assert_eq!(aggregate(&[champ, contender], &options).len(), 2);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let records = vec![
            fighter("First", 30.0, 50.0, 100.0),
            fighter("High", 30.0, 90.0, 100.0),
            fighter("Second", 30.0, 25.0, 50.0),
            fighter("Low", 30.0, 10.0, 100.0),
        ];

        let desc = aggregate(&records, &FilterOptions::default());
        assert_eq!(names(&desc), vec!["High", "First", "Second", "Low"]);

        let asc = aggregate(
            &records,
            &FilterOptions {
                sort_order: SortOrder::Asc,
                ..FilterOptions::default()
            },
        );
        // Ties keep input order rather than flipping with the direction.
        assert_eq!(names(&asc), vec!["Low", "First", "Second", "High"]);
    }

    #[test]
    fn test_sort_by_name_and_wins() {
        let mut records = vec![
            fighter("Volkanovski", 30.0, 1.0, 2.0),
            fighter("Adesanya", 30.0, 1.0, 2.0),
            fighter("Makhachev", 30.0, 1.0, 2.0),
        ];
        records[0].fight_outcome_stats.fighter_wins = 5.0;
        records[1].fight_outcome_stats.fighter_wins = 3.0;
        records[2].fight_outcome_stats.fighter_wins = 9.0;

        let by_name = aggregate(
            &records,
            &FilterOptions {
                sort_by: SortKey::Name,
                sort_order: SortOrder::Asc,
                ..FilterOptions::default()
            },
        );
        assert_eq!(names(&by_name), vec!["Adesanya", "Makhachev", "Volkanovski"]);

        let by_wins = aggregate(
            &records,
            &FilterOptions {
                sort_by: SortKey::Wins,
                ..FilterOptions::default()
            },
        );
        assert_eq!(names(&by_wins), vec!["Makhachev", "Volkanovski", "Adesanya"]);
    }

    #[test]
    fn test_chart_points_strike_efficiency() {
        let records = vec![fighter("A", 10.0, 30.0, 60.0), fighter("B", 20.0, 10.0, 40.0)];
        let totals = aggregate(&records, &FilterOptions::default());
        let points = chart_points(&totals, ChartKind::StrikeEfficiency, BubbleSize::MinutesTracked);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].index, 0);
        assert_eq!(points[0].fighter_name, "A");
        assert_eq!(points[0].x, 3.0);
        assert_eq!(points[0].y, 50.0);
        assert_eq!(points[0].bubble_size, 10.0);
        assert_eq!(points[1].y, 25.0);
    }

    #[test]
    fn test_chart_points_cage_and_diversity() {
        let mut record = fighter("Pusher", 10.0, 20.0, 100.0);
        record.center_octagon = 60.0;
        record.pushing_against_cage = 30.0;
        record.pushed_back_to_cage = 10.0;
        record.total_stats.total_jabs_thrown = 40.0;
        record.total_stats.total_leg_kicks_thrown = 10.0;
        let totals = vec![FighterTotal::from_record(&record)];

        let cage = chart_points(&totals, ChartKind::CageControl, BubbleSize::Wins);
        assert_eq!((cage[0].x, cage[0].y), (60.0, 30.0));
        assert_eq!(cage[0].bubble_size, 0.0);

        let diversity = chart_points(&totals, ChartKind::StrikingDiversity, BubbleSize::TotalStrikesThrown);
        assert_eq!(diversity[0].y, 50.0);
        assert_eq!(diversity[0].bubble_size, 100.0);
    }

    #[test]
    fn test_chart_points_empty_input() {
        assert!(chart_points(&[], ChartKind::ExperienceVsSuccess, BubbleSize::Wins).is_empty());
    }
}
