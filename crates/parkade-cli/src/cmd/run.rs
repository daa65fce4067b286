//! `parkade run` — simulate every configured lot and print the results table.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::Args;
use parkade_sim::clock::days_and_hours;
use parkade_sim::{CampaignReport, run_campaign};
use serde::Serialize;

use super::SimOptions;
use crate::output::{
    OutputMode, format_average, group_thousands, pretty_kv, pretty_section, render_mode,
};

const COLUMN_WIDTH: usize = 12;

/// Arguments for `parkade run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub sim: SimOptions,
}

/// JSON output for `parkade run`.
#[derive(Debug, Serialize)]
struct RunOutput {
    seed: u32,
    days: u32,
    total_hours: u32,
    lots: Vec<LotOutput>,
    final_state: u32,
}

#[derive(Debug, Serialize)]
struct LotOutput {
    capacity: usize,
    admitted: u64,
    refused: u64,
    total_parked_hours: u64,
    total_revenue: u64,
    average_hours: Option<f64>,
}

impl From<&CampaignReport> for RunOutput {
    fn from(report: &CampaignReport) -> Self {
        Self {
            seed: report.seed,
            days: report.days,
            total_hours: report.total_hours,
            lots: report
                .lots
                .iter()
                .map(|lot| LotOutput {
                    capacity: lot.capacity,
                    admitted: lot.stats.admitted,
                    refused: lot.stats.refused,
                    total_parked_hours: lot.stats.total_parked_hours,
                    total_revenue: lot.stats.total_revenue,
                    average_hours: lot.stats.average_hours(),
                })
                .collect(),
            final_state: report.final_state,
        }
    }
}

/// Execute `parkade run`.
pub fn run_run(args: &RunArgs, output: OutputMode, working_dir: &Path) -> Result<()> {
    let config = args.sim.resolve(working_dir)?;
    let report = run_campaign(&config)?;
    let out = RunOutput::from(&report);

    render_mode(output, &out, render_text, render_pretty)
}

fn render_text(out: &RunOutput, w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "campaign seed={} days={} total_hours={} lots={} final_state={}",
        out.seed,
        out.days,
        out.total_hours,
        out.lots.len(),
        out.final_state
    )?;
    for lot in &out.lots {
        writeln!(
            w,
            "lot capacity={} paid={} admitted={} refused={} hours={} average_hours={}",
            lot.capacity,
            lot.total_revenue,
            lot.admitted,
            lot.refused,
            lot.total_parked_hours,
            format_average(lot.average_hours)
        )?;
    }
    Ok(())
}

fn render_pretty(out: &RunOutput, w: &mut dyn Write) -> io::Result<()> {
    let (days, hours) = days_and_hours(out.total_hours);
    pretty_section(w, "Simulation Results")?;
    pretty_kv(w, "Seed", out.seed.to_string())?;
    pretty_kv(
        w,
        "Duration",
        format!(
            "{} hours per lot ({days} days and {hours} hours)",
            out.total_hours
        ),
    )?;
    writeln!(w)?;

    for column in 1..=6 {
        write!(w, "{:>COLUMN_WIDTH$}", format!("({column})"))?;
    }
    writeln!(w)?;

    for lot in &out.lots {
        let cells = [
            group_thousands(u64::try_from(lot.capacity).unwrap_or(u64::MAX)),
            group_thousands(lot.total_revenue),
            group_thousands(lot.admitted),
            group_thousands(lot.refused),
            group_thousands(lot.total_parked_hours),
            format_average(lot.average_hours),
        ];
        for cell in &cells {
            write!(w, "{cell:>COLUMN_WIDTH$}")?;
        }
        writeln!(w)?;
    }

    writeln!(w)?;
    writeln!(w, "(1) : lot size (number of slots)")?;
    writeln!(w, "(2) : total ($) paid during the simulation")?;
    writeln!(w, "(3) : number of vehicles admitted")?;
    writeln!(w, "(4) : number of vehicles refused")?;
    writeln!(w, "(5) : total hours parked by departed vehicles")?;
    writeln!(w, "(6) : average hours parked per admitted vehicle")
}
