//! `parkade trace` — hour-by-hour account of one lot.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::Args;
use parkade_sim::{LotTrace, replay_lot};

use super::SimOptions;
use crate::output::{
    OutputMode, format_average, pretty_kv, pretty_rule, pretty_section, render_mode,
};

/// Arguments for `parkade trace`.
#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Zero-based index of the lot in the configured capacity list.
    #[arg(long, default_value = "0")]
    pub lot: usize,

    /// Only print hours where something happened.
    #[arg(long)]
    pub active_only: bool,

    #[command(flatten)]
    pub sim: SimOptions,
}

/// Execute `parkade trace`.
pub fn run_trace(args: &TraceArgs, output: OutputMode, working_dir: &Path) -> Result<()> {
    let config = args.sim.resolve(working_dir)?;
    let mut trace = replay_lot(&config, args.lot)?;
    if args.active_only {
        trace
            .hours
            .retain(|hour| hour.report.departed > 0 || hour.report.arrivals > 0);
    }

    render_mode(output, &trace, render_text, render_pretty)
}

fn render_text(trace: &LotTrace, w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "lot capacity={} start_state={} admitted={} refused={} hours={} paid={} unfinished={}",
        trace.capacity,
        trace.start_state,
        trace.stats.admitted,
        trace.stats.refused,
        trace.stats.total_parked_hours,
        trace.stats.total_revenue,
        trace.unfinished
    )?;
    for hour in &trace.hours {
        let r = hour.report;
        writeln!(
            w,
            "hour elapsed={} hour_of_day={} departed={} arrivals={} admitted={} refused={} occupied={}",
            hour.elapsed,
            hour.hour_of_day,
            r.departed,
            r.arrivals,
            r.admitted,
            r.refused,
            r.occupied
        )?;
    }
    Ok(())
}

fn render_pretty(trace: &LotTrace, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("Lot Trace (capacity {})", trace.capacity))?;
    pretty_kv(w, "Start state", trace.start_state.to_string())?;
    pretty_kv(w, "Admitted", trace.stats.admitted.to_string())?;
    pretty_kv(w, "Refused", trace.stats.refused.to_string())?;
    pretty_kv(w, "Hours", trace.stats.total_parked_hours.to_string())?;
    pretty_kv(w, "Paid", format!("${}", trace.stats.total_revenue))?;
    pretty_kv(w, "Average", format_average(trace.stats.average_hours()))?;
    pretty_kv(w, "Unfinished", trace.unfinished.to_string())?;
    writeln!(w)?;

    writeln!(
        w,
        "{:>7} {:>4} {:>8} {:>8} {:>8} {:>7} {:>8} {:>8}",
        "elapsed", "hour", "departed", "revenue", "arrivals", "in", "refused", "occupied"
    )?;
    pretty_rule(w)?;
    for hour in &trace.hours {
        let r = hour.report;
        writeln!(
            w,
            "{:>7} {:>4} {:>8} {:>8} {:>8} {:>7} {:>8} {:>8}",
            hour.elapsed,
            format!("{:02}h", hour.hour_of_day),
            r.departed,
            r.revenue,
            r.arrivals,
            r.admitted,
            r.refused,
            r.occupied
        )?;
    }
    Ok(())
}
