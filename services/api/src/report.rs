use crate::infra::{report_options, role_listing, score_range};
use chrono::{DateTime, Utc};
use clap::Args;
use role_fit::config::AppConfig;
use role_fit::error::AppError;
use role_fit::roster::RosterImporter;
use role_fit::scoring::report::PivotMatrix;
use role_fit::scoring::{FormulaTerm, RoleCatalogue, RoleFitReport, RoleGroup, ScoringEngine};
use role_fit::telemetry;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Squad export in CSV form (one row per player, a `Name` column plus attribute columns)
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Show every role score for this player
    #[arg(long)]
    pub(crate) player: Option<String>,
    /// Rank cut-off for the outside-top-N view (defaults to APP_TOP_N)
    #[arg(long)]
    pub(crate) top_n: Option<usize>,
    /// Lower bound of the score range filter (requires --max)
    #[arg(long)]
    pub(crate) min: Option<f64>,
    /// Upper bound of the score range filter (requires --min)
    #[arg(long)]
    pub(crate) max: Option<f64>,
    /// List each player's K best roles
    #[arg(long, value_name = "K")]
    pub(crate) best: Option<usize>,
    /// Print the full report as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Show ranks instead of scores in the outside-top-N view
    #[arg(long)]
    pub(crate) ranks: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RolesArgs {
    /// Print the catalogue as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct CliReport<'a> {
    evaluated_at: DateTime<Utc>,
    catalogue_version: &'a str,
    roster: String,
    report: &'a RoleFitReport,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let catalogue = RoleCatalogue::load(&config.scoring)?;
    let roster = RosterImporter::from_path(&args.roster)?;
    let options = report_options(
        args.top_n.unwrap_or(config.scoring.default_top_n),
        args.player.clone(),
        score_range(args.min, args.max)?,
        args.best,
    )?;

    let run = ScoringEngine::from_config(&config.scoring).score_all(&roster, &catalogue);
    let report = RoleFitReport::build(&run, catalogue.groups(), &options);

    if args.json {
        let payload = CliReport {
            evaluated_at: Utc::now(),
            catalogue_version: catalogue.version(),
            roster: args.roster.display().to_string(),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    render_report(&report, &catalogue, &args);
    Ok(())
}

pub(crate) fn run_roles(args: RolesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let catalogue = RoleCatalogue::load(&config.scoring)?;
    let listing = role_listing(&catalogue);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!(
        "Role catalogue {} ({} roles, {} weight warnings)",
        listing.version,
        listing.count,
        listing.weight_warnings.len()
    );
    for group in RoleGroup::ordered() {
        let roles: Vec<_> = listing
            .roles
            .iter()
            .filter(|role| role.group == group)
            .collect();
        if roles.is_empty() {
            continue;
        }
        println!("\n{}", group.label());
        for role in roles {
            println!("- {}: {}", role.name, describe_terms(&role.terms));
        }
    }
    Ok(())
}

fn render_report(report: &RoleFitReport, catalogue: &RoleCatalogue, args: &ScoreArgs) {
    println!("Role fit report");
    println!(
        "Roster: {} ({} players x {} roles, catalogue {})",
        args.roster.display(),
        report.counts.players,
        report.counts.roles,
        catalogue.version()
    );
    println!(
        "Scored pairs: {} | Skipped pairs: {}",
        report.counts.pairs, report.counts.skipped
    );

    if report.is_empty() {
        println!("\nNo scores to show: the roster or catalogue is empty.");
        return;
    }
    if let Some(range) = report.data_range {
        println!("Score range in data: {:.2} - {:.2}", range.min(), range.max());
    }

    println!("\nTop player per role");
    for top in &report.top_per_role {
        println!(
            "- {}: {:.2} ({})",
            top.role,
            top.score,
            top.players.join(", ")
        );
    }

    if let Some(name) = &args.player {
        match &report.player_view {
            Some(view) => {
                println!("\nRoles for {}", view.player);
                for role in &view.roles {
                    println!("- {}: {:.2} (rank {})", role.role, role.score, role.rank);
                }
            }
            None => println!("\nRoles for {}: no scores in this roster", name),
        }
    }

    if !report.best_roles.is_empty() {
        println!("\nBest roles per player");
        for view in &report.best_roles {
            let roles: Vec<String> = view
                .roles
                .iter()
                .map(|role| format!("{} {:.2}", role.role, role.score))
                .collect();
            println!("- {}: {}", view.player, roles.join(", "));
        }
    }

    println!("\nScore matrix (* marks each player's best role)");
    print_matrix(&report.score_matrix, Some(report.row_maxima.as_slice()), |score| {
        format!("{score:.2}")
    });

    if let Some(range) = &report.range_filter {
        println!(
            "\nPlayers with a score in [{:.2}, {:.2}]: {}",
            range.range.min(),
            range.range.max(),
            if range.players.is_empty() {
                "none".to_string()
            } else {
                range.players.join(", ")
            }
        );
    }

    let outside = &report.outside_top;
    if outside.players.is_empty() {
        println!("\nPlayers outside the top {} of every role: none", outside.top_n);
    } else if args.ranks {
        println!("\nPlayers outside the top {} of every role (ranks)", outside.top_n);
        print_matrix(&outside.ranks, None, |rank| rank.to_string());
    } else {
        println!("\nPlayers outside the top {} of every role (scores)", outside.top_n);
        print_matrix(&outside.scores, None, |score| format!("{score:.2}"));
    }
}

/// Tab separated so the grid pastes straight into a spreadsheet.
fn print_matrix<T: Copy>(
    matrix: &PivotMatrix<T>,
    highlights: Option<&[Vec<usize>]>,
    format_cell: impl Fn(T) -> String,
) {
    let header: Vec<&str> = matrix
        .columns
        .iter()
        .map(|column| column.role.as_str())
        .collect();
    println!("Player\t{}", header.join("\t"));

    for (index, row) in matrix.rows.iter().enumerate() {
        let marked = highlights.and_then(|maxima| maxima.get(index));
        let cells: Vec<String> = row
            .cells
            .iter()
            .enumerate()
            .map(|(column, cell)| match cell {
                Some(value) if marked.is_some_and(|best| best.contains(&column)) => {
                    format!("{}*", format_cell(*value))
                }
                Some(value) => format_cell(*value),
                None => "-".to_string(),
            })
            .collect();
        println!("{}\t{}", row.player, cells.join("\t"));
    }
}

fn describe_terms(terms: &[FormulaTerm]) -> String {
    terms
        .iter()
        .map(|term| {
            let codes = term.attributes.join(", ");
            match term.divisor {
                Some(divisor) => format!("{} x sum({})/{}", term.weight, codes, divisor),
                None => format!("{} x avg({})", term.weight, codes),
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_averages_and_fixed_divisors() {
        let terms = vec![
            FormulaTerm {
                attributes: vec!["Fin".to_string(), "Cmp".to_string()],
                weight: 0.8,
                divisor: None,
            },
            FormulaTerm {
                attributes: vec!["Fir".to_string(), "Pas".to_string(), "OtB".to_string()],
                weight: 0.2,
                divisor: Some(2),
            },
        ];
        assert_eq!(
            describe_terms(&terms),
            "0.8 x avg(Fin, Cmp) + 0.2 x sum(Fir, Pas, OtB)/2"
        );
    }
}
