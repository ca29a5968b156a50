use crate::analysis::aggregate::{BubbleSize, ChartKind, ChartPoint, FighterTotal};
use crate::analysis::profile::FighterProfile;
use crate::error::AppError;
use colored::*;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "#")]
    rank: String,
    fighter: String,
    minutes: String,
    landed: String,
    thrown: String,
    accuracy: String,
    #[tabled(rename = "SLpM")]
    landed_per_minute: String,
    record: String,
    #[tabled(rename = "win %")]
    win_percentage: String,
}

#[derive(Tabled)]
struct TechniqueRow {
    technique: String,
    attempts: String,
    success: String,
    rate: String,
    #[tabled(rename = "per round")]
    per_round: String,
    #[tabled(rename = "per min")]
    per_minute: String,
}

#[derive(Tabled)]
struct VulnerabilityRow {
    technique: String,
    #[tabled(rename = "times taken down")]
    times: String,
    #[tabled(rename = "per round")]
    per_round: String,
}

#[derive(Tabled)]
struct StrikeRow {
    strike: String,
    landed: String,
    thrown: String,
    accuracy: String,
    share: String,
    #[tabled(rename = "per round")]
    per_round: String,
    #[tabled(rename = "per min")]
    per_minute: String,
}

#[derive(Tabled)]
struct RatingRow {
    rating: String,
    value: String,
}

#[derive(Tabled)]
struct ChartRow {
    #[tabled(rename = "#")]
    index: String,
    fighter: String,
    x: String,
    y: String,
    bubble: String,
    accuracy: String,
}

/// Shown whenever ratings are computed without weight-class averages.
pub const NO_COHORT_NOTE: &str =
    "No weight class averages loaded, ratings fall back to fixed baselines";

/// Which result an empty render stands in for.
#[derive(Debug, Clone, Copy)]
pub enum EmptyView {
    Leaderboard,
    Chart(ChartKind, BubbleSize),
}

fn heading(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
}

fn optional_rating_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => rating_cell(v),
        None => "Insufficient data".dimmed().to_string(),
    }
}

fn rating_cell(value: f64) -> String {
    let text = format!("{:.0}", value);
    if value >= 70.0 {
        text.green().to_string()
    } else if value >= 40.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

pub fn display_profile(profile: &FighterProfile) {
    heading(&format!("🥋 {} ({})", profile.fighter_name, profile.fighter_code));
    println!(
        "  Weight class: {}",
        profile.weight_class.as_deref().unwrap_or("unknown")
    );
    println!(
        "  Tracked: {} fights, {} rounds, {:.1} minutes",
        profile.fights_tracked, profile.rounds_tracked, profile.minutes_tracked
    );
    if let Some(limit) = profile.weight_limit {
        println!("  Weight limit: {} lbs", limit);
    }
    if !profile.has_cohort {
        println!("  {}", NO_COHORT_NOTE.yellow());
    }

    let overall = &profile.overall;
    println!(
        "\n  {} {}  {} ({})",
        "Overall".bold(),
        rating_cell(overall.rating),
        overall.archetype.bold(),
        overall.style.label()
    );
    if overall.specialist_bonus > 0.0 {
        println!("  Specialist bonus +{:.0}", overall.specialist_bonus);
    }
    if !overall.strengths.is_empty() {
        println!("  Strengths: {}", overall.strengths.join(", ").green());
    }
    if !overall.weaknesses.is_empty() {
        println!("  Weaknesses: {}", overall.weaknesses.join(", ").red());
    }

    let g = &profile.grappling;
    let ratings = vec![
        ("Striking", rating_cell(profile.striking_rating)),
        ("Grappling grade", rating_cell(g.grade)),
        ("Takedown", rating_cell(g.takedown)),
        ("Clinch", rating_cell(g.clinch)),
        ("Ground game", rating_cell(g.ground_game)),
        ("Submission", rating_cell(g.submission)),
        ("Defense", rating_cell(profile.defense_rating)),
        ("Aggressiveness", optional_rating_cell(profile.aggressiveness_rating)),
        ("Finish", rating_cell(profile.finish_rating)),
        ("Positional", rating_cell(profile.positional_rating)),
        ("Location control", rating_cell(profile.location_control_rating)),
    ];
    let rows: Vec<RatingRow> = ratings
        .into_iter()
        .map(|(rating, value)| RatingRow {
            rating: rating.to_string(),
            value,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("\n{}", "Ratings".bold().yellow());
    println!("{}", table);
    println!(
        "  Finish rate {:.1}%, knocked down {} ({:.2} per fight), stunned {} ({:.2} per fight)",
        profile.finish_percentage,
        profile.durability.knocked_down,
        profile.durability.knocked_down_per_fight,
        profile.durability.stunned,
        profile.durability.stunned_per_fight
    );

    let s = &profile.strikes;
    println!("\n{}", "Striking".bold().yellow());
    println!(
        "  Strikes {}/{} ({:.2}%), punches {:.2}%, kicks {:.2}%, {:.2} landed per minute",
        s.strikes_landed,
        s.strikes_thrown,
        s.strike_accuracy,
        s.punch_accuracy,
        s.kick_accuracy,
        s.strikes_landed_per_minute
    );
    if profile.top_strikes.is_empty() {
        println!("  {}", "No strikes recorded".yellow());
    } else {
        let rows: Vec<StrikeRow> = profile
            .top_strikes
            .iter()
            .map(|st| StrikeRow {
                strike: st.name.clone(),
                landed: format!("{}", st.landed),
                thrown: format!("{}", st.thrown),
                accuracy: format!("{:.1}%", st.accuracy),
                share: format!("{:.1}%", st.share_of_landed),
                per_round: format!("{:.1}", st.landed_per_round),
                per_minute: format!("{:.2}", st.landed_per_minute),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    let t = &profile.takedowns;
    println!("\n{}", "Takedowns".bold().yellow());
    println!(
        "  {}/{} landed ({:.1}%)",
        t.success, t.attempts, t.success_rate
    );
    if !profile.top_takedowns.is_empty() {
        let rows: Vec<TechniqueRow> = profile
            .top_takedowns
            .iter()
            .map(|td| TechniqueRow {
                technique: td.name.clone(),
                attempts: format!("{}", td.attempts),
                success: format!("{}", td.success),
                rate: format!("{:.1}%", td.success_rate),
                per_round: format!("{:.2}", td.attempts_per_round),
                per_minute: format!("{:.3}", td.attempts_per_minute),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    if !profile.top_vulnerabilities.is_empty() {
        println!("\n{}", "Most taken down by".bold().yellow());
        let rows: Vec<VulnerabilityRow> = profile
            .top_vulnerabilities
            .iter()
            .map(|v| VulnerabilityRow {
                technique: v.name.clone(),
                times: format!("{}", v.times_taken_down),
                per_round: format!("{:.2}", v.per_round),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    let cage = &profile.cage_position;
    println!("\n{}", "Position".bold().yellow());
    println!(
        "  Ground control {:.1}%, clinch control {:.1}%",
        profile.ground_control, profile.clinch_control
    );
    println!(
        "  Center {:.1}%, pushing {:.1}%, pushed back {:.1}%\n",
        cage.center, cage.pushing, cage.pushed_back
    );
}

pub fn display_leaderboard(totals: &[FighterTotal], matched_note: &str) {
    heading("📊 Fighter Leaderboard");

    if totals.is_empty() {
        println!("{}", "No fighters match the current filters".yellow());
        return;
    }

    let rows: Vec<LeaderboardRow> = totals
        .iter()
        .enumerate()
        .map(|(idx, f)| LeaderboardRow {
            rank: format!("#{}", idx + 1),
            fighter: f.fighter_name.clone(),
            minutes: format!("{:.1}", f.minutes_tracked),
            landed: format!("{}", f.strikes_landed),
            thrown: format!("{}", f.strikes_thrown),
            accuracy: format!("{:.2}%", f.strike_accuracy),
            landed_per_minute: format!("{:.2}", f.strikes_landed_per_minute),
            record: format!("{}-{}", f.wins, f.losses),
            win_percentage: format!("{:.2}%", f.win_percentage),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("{}\n", matched_note.dimmed());
}

pub fn display_chart(points: &[ChartPoint], kind: ChartKind, bubble: BubbleSize) {
    heading(&format!("📈 {}", kind.title()));

    if points.is_empty() {
        println!("{}", "No data points".yellow());
        return;
    }

    let (x_label, y_label) = kind.axes();
    println!("  x: {}", x_label);
    println!("  y: {}", y_label);
    println!("  bubble: {}\n", bubble.label());

    let rows: Vec<ChartRow> = points
        .iter()
        .map(|p| ChartRow {
            index: p.index.to_string(),
            fighter: p.fighter_name.clone(),
            x: format!("{:.2}", p.x),
            y: format!("{:.2}", p.y),
            bubble: format!("{:.2}", p.bubble_size),
            accuracy: format!("{:.2}%", p.accuracy),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::JsonError(format!("Failed to serialize output: {}", e)))
}

pub fn display_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", json_string(value)?);
    Ok(())
}

/// Renders an empty leaderboard or chart in place of results when `error`
/// is a fetch failure. Returns whether anything was rendered.
pub fn display_empty_on_failure(
    error: &AppError,
    view: EmptyView,
    json: bool,
) -> Result<bool, AppError> {
    if !error.is_fetch_failure() {
        return Ok(false);
    }
    if json {
        display_json::<[()]>(&[])?;
        return Ok(true);
    }
    match view {
        EmptyView::Leaderboard => display_leaderboard(&[], "0 fighters shown"),
        EmptyView::Chart(kind, bubble) => display_chart(&[], kind, bubble),
    }
    Ok(true)
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_no_cohort_warning() {
    display_warning(NO_COHORT_NOTE);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
