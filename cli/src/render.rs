//! Text output for the CLI

use draft_picker_core::{
    AvailabilitySummary, DraftConfig, DraftOutcome, Position, SimulationReport,
};

pub fn position_name(position: Position) -> &'static str {
    match position {
        Position::PointGuard => "Point Guard",
        Position::ShootingGuard => "Shooting Guard",
        Position::SmallForward => "Small Forward",
        Position::PowerForward => "Power Forward",
        Position::Center => "Center",
    }
}

pub fn print_outcome(outcome: &DraftOutcome, config: &DraftConfig) {
    let result = match outcome {
        DraftOutcome::Completed(result) => result,
        DraftOutcome::NoEligibleYear { simulated_year } => {
            println!("No draft year is available at simulated year {}.", simulated_year);
            return;
        }
    };

    if result.auto_reset {
        println!("Every year was cooling down or blocked; all years were reset automatically.");
    }

    println!("\n===== Draft Year =====");
    println!("Selected year: {}", result.selected_year);
    println!(
        "Year {} enters a {}-year cooldown (available again from {}).",
        result.selected_year,
        config.cooldown,
        result.simulated_year.saturating_add(config.cooldown)
    );

    println!(
        "\n===== {} Players To Lose (sorted by team) =====",
        result.players.len()
    );
    for (i, player) in result.players.iter().enumerate() {
        println!(
            "{}. {} {} ({})",
            i + 1,
            player.team,
            player.position,
            position_name(player.position)
        );
    }

    println!("\nTime advanced to: {}", result.new_simulated_year);
}

pub fn print_availability(summary: &AvailabilitySummary) {
    println!("\nCurrent simulated year: {}", summary.simulated_year);
    print_year_list("Available years:", &summary.available);

    if !summary.cooling.is_empty() {
        let cooling: Vec<String> = summary
            .cooling
            .iter()
            .map(|c| format!("{} ({} left)", c.year, c.remaining))
            .collect();
        println!("Cooling down: {}", cooling.join(", "));
    }

    println!(
        "{} available, {} cooling down (cooldown: {} years)",
        summary.available.len(),
        summary.cooling.len(),
        summary.cooldown
    );
}

pub fn print_year_list(header: &str, years: &[i32]) {
    println!("{}", header);
    if years.is_empty() {
        println!("  none");
    } else {
        let list: Vec<String> = years.iter().map(|y| y.to_string()).collect();
        println!("  {}", list.join(", "));
    }
}

pub fn print_simulation(report: &SimulationReport) {
    println!(
        "===== Simulation {} -> {} =====",
        report.start_year, report.end_year
    );
    println!("Drafts completed:  {}", report.completed_count());
    println!(
        "Drafts aborted:    {}",
        report.drafts.len() - report.completed_count()
    );
    println!("Automatic resets:  {}", report.auto_reset_count());
    println!("Distinct years:    {}", report.distinct_years());
    match report.min_reuse_gap() {
        Some(gap) => println!("Shortest reuse:    {} years", gap),
        None => println!("Shortest reuse:    no year repeated"),
    }

    let repeated: Vec<String> = report
        .year_usage
        .iter()
        .filter(|(_, uses)| uses.len() > 1)
        .map(|(year, uses)| {
            let list: Vec<String> = uses.iter().map(|u| u.to_string()).collect();
            format!("{} [{}]", year, list.join(", "))
        })
        .collect();
    if !repeated.is_empty() {
        println!("Reused years:      {}", repeated.join("; "));
    }

    println!("\nPlayers lost per team:");
    for (team, count) in report.team_losses() {
        println!("  {:<14} {}", team, count);
    }
}
