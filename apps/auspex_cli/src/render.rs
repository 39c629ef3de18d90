//! Plain-text output for the subcommands.

use auspex::election::{ElectionReport, ScoredDay};
use auspex::hours::PlanetaryHour;
use auspex::lunar::MoonReport;
use auspex::scoring::Polarity;
use std::io::{self, Write};

fn marker(polarity: Polarity) -> char {
    match polarity {
        Polarity::Positive => '+',
        Polarity::Negative => '-',
        Polarity::Neutral => '~',
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub fn report<W: Write>(out: &mut W, report: &ElectionReport) -> io::Result<()> {
    let who = if report.name.is_empty() {
        String::new()
    } else {
        format!(" for {}", report.name)
    };
    writeln!(out, "Election{} - {}", who, report.project_label)?;
    writeln!(
        out,
        "{} to {}, {} days scanned",
        report.start, report.end, report.days_scanned
    )?;

    for (rank, day) in report.days.iter().enumerate() {
        writeln!(out)?;
        write!(out, "{:>2}. ", rank + 1)?;
        scored_day(out, day)?;
    }

    writeln!(out)?;
    writeln!(out, "Rules applied:")?;
    for rule in &report.rules_applied {
        writeln!(out, "  {}", rule)?;
    }
    Ok(())
}

pub fn scored_day<W: Write>(out: &mut W, day: &ScoredDay) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}  score {} ({})",
        day.weekday, day.day, day.month, day.score, day.level
    )?;
    for factor in &day.factors {
        writeln!(out, "    {} {}", marker(factor.polarity), factor.text)?;
    }
    if day.best_hours.is_empty() {
        writeln!(out, "    Hours: none")?;
    } else {
        writeln!(out, "    Hours: {}", day.best_hours.join(", "))?;
    }
    Ok(())
}

pub fn moon<W: Write>(out: &mut W, report: &MoonReport) -> io::Result<()> {
    writeln!(out, "JD {:.1}", report.jd)?;
    match &report.position {
        Some(moon) => writeln!(
            out,
            "Moon {:.1}° {}{}",
            moon.degree,
            moon.sign,
            if moon.retrograde { " ℞" } else { "" }
        )?,
        None => writeln!(out, "Moon position unavailable")?,
    }
    match &report.phase {
        Some(phase) => writeln!(
            out,
            "Phase: {} ({:.1}°, {})",
            phase.name,
            phase.elongation,
            if phase.waxing { "waxing" } else { "waning" }
        )?,
        None => writeln!(out, "Phase: unknown")?,
    }
    writeln!(out, "Void of course: {}", yes_no(report.void_of_course))?;
    writeln!(out, "Via Combusta: {}", yes_no(report.via_combusta))?;
    Ok(())
}

pub fn hours<W: Write>(out: &mut W, hours: &[PlanetaryHour]) -> io::Result<()> {
    for hour in hours {
        let mark = if hour.favorable { " *" } else { "" };
        writeln!(out, "{}{}", hour.label(), mark)?;
    }
    Ok(())
}
