use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use dupwindow::prelude::*;
use log::info;
use serde::Serialize;

use crate::utils::{
    open_bed,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct ScoreArgs {
    #[arg(
        value_parser,
        required = true,
        help = "Coordinate-sorted BED file (.gz accepted, '-' for stdin)"
    )]
    input:       PathBuf,
    #[arg(
        short,
        long,
        help = "Output bedGraph path. Written to stdout if not set"
    )]
    output:      Option<PathBuf>,
    #[arg(
        short,
        long,
        default_value_t = 100,
        help = "Width of the neighborhood around each center"
    )]
    windowsize:  u64,
    #[arg(short, long, value_enum, default_value_t = ScoreStrategy::Mean)]
    strategy:    ScoreStrategy,
    #[arg(long, default_value = "dups", help = "Name of the bedGraph track")]
    track_name:  String,
    #[arg(long, default_value_t = false, help = "Do not write the track line")]
    no_header:   bool,
    #[arg(
        long,
        default_value_t = false,
        help = "Skip the coordinate ordering check"
    )]
    no_check_order: bool,
    #[arg(long, help = "Write a JSON run summary to this path")]
    summary:     Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    input:       String,
    output:      Option<String>,
    windowsize:  u64,
    strategy:    ScoreStrategy,
    check_order: bool,
    records:     u64,
    windows:     u64,
    chromosomes: u64,
}

impl ScoreArgs {
    fn sink(&self) -> anyhow::Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create {}", path.display())
                })?;
                Box::new(BufWriter::new(file))
            },
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }

    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let config = WindowConfig::new(self.windowsize)
            .with_check_order(!self.no_check_order)
            .with_debug(utils.verbose > 2);
        let source = open_bed(&self.input)?;
        let mut scored = config.try_finish(source)?.into_scored(self.strategy);

        let sink = self.sink()?;
        let mut writer = if self.no_header {
            BedGraphWriter::new(sink)
        }
        else {
            BedGraphWriter::with_track_name(sink, &self.track_name)?
        };

        let progress_bar = utils.progress_bar()?;
        for position in scored.by_ref() {
            writer.write_position(&position?)?;
            progress_bar.inc(1);
        }
        writer.finish()?;
        progress_bar.finish_and_clear();

        let engine = scored.engine();
        info!(
            "Scored {} windows from {} records on {} chromosomes",
            engine.windows_emitted(),
            engine.records_read(),
            engine.chromosomes_seen()
        );

        if let Some(summary_path) = &self.summary {
            let summary = RunSummary {
                input:       self.input.display().to_string(),
                output:      self.output.as_ref().map(|p| p.display().to_string()),
                windowsize:  self.windowsize,
                strategy:    self.strategy,
                check_order: !self.no_check_order,
                records:     engine.records_read(),
                windows:     engine.windows_emitted(),
                chromosomes: engine.chromosomes_seen(),
            };
            let file = File::create(summary_path).with_context(|| {
                format!("Failed to create {}", summary_path.display())
            })?;
            serde_json::to_writer_pretty(BufWriter::new(file), &summary)?;
            eprintln!(
                "[{}] Summary written to {}",
                style("V").green(),
                style(summary_path.display()).green()
            );
        }
        Ok(())
    }
}
