use anyhow::Result;
use colored::*;
use serde_json::json;
use teams_core::{Matchup, TeamRecord, TeamTable, ValidationReport};

pub fn print_validation_report(report: &ValidationReport, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(report),
        _ => {
            print_text_report(report);
            Ok(())
        }
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  TEAM TABLE REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.to_string().red());
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {}", i + 1, warning.yellow());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Records:        {}", report.stats.records_validated);
    println!("  Checks:         {}", report.stats.checks_evaluated);
    println!("  Total errors:   {}", report.errors.len());
    println!("  Total warnings: {}", report.warnings.len());
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport) -> Result<()> {
    let output = json!({
        "passed": report.passed(),
        "errors": report.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        "warnings": report.warnings,
        "summary": {
            "records": report.stats.records_validated,
            "checks": report.stats.checks_evaluated,
            "error_count": report.errors.len(),
            "warning_count": report.warnings.len(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_teams(table: &TeamTable, format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(table.all())?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:<4} {:<5} {:<24} {:<16} {}",
            "ID", "ABBR", "NAME", "AREA", "VENUE"
        )
        .bold()
    );
    for team in table {
        println!(
            "{:<4} {:<5} {:<24} {:<16} {}",
            team.team_id, team.team_abbr, team.team_name, team.team_area, team.team_venue
        );
    }
    println!("\n{} teams (season {})", table.len(), table.season());
    Ok(())
}

pub fn print_team(team: &TeamRecord, format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(team)?);
        return Ok(());
    }

    println!("{}", team.team_name.bold());
    for (field, value) in team.fields() {
        println!("  {:<11} {}", format!("{}:", field), value);
    }
    Ok(())
}

pub fn print_matchup(matchup: &Matchup<'_>, format: &str) -> Result<()> {
    if format == "json" {
        let output = json!({
            "channel": matchup.channel,
            "team1": matchup.team1,
            "team2": matchup.team2,
            "time": matchup.time,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_success(&format!(
        "{} vs {} @ {}",
        matchup.team1.team_abbr, matchup.team2.team_abbr, matchup.time
    ));
    println!("  Channel: {}", matchup.channel);
    println!("  Teams:   {} vs {}", matchup.team1.team_name, matchup.team2.team_name);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
