use std::path::PathBuf;

use clap::Args;
use console::style;
use dupwindow::prelude::*;
use itertools::Itertools;

use crate::utils::{
    open_bed,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct InspectArgs {
    #[arg(
        value_parser,
        required = true,
        help = "Coordinate-sorted BED file (.gz accepted, '-' for stdin)"
    )]
    input:      PathBuf,
    #[arg(short, long, default_value_t = 100)]
    windowsize: u64,
    #[arg(short = 'n', long, help = "Stop after this many windows")]
    limit:      Option<usize>,
}

impl InspectArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let mut engine = WindowConfig::new(self.windowsize)
            .with_debug(utils.verbose > 2)
            .try_finish(open_bed(&self.input)?)?;

        let mut shown = 0;
        while let Some(window) = engine.advance()? {
            if self.limit.is_some_and(|limit| shown >= limit) {
                break;
            }
            println!(
                "{}:{} [{}, {}) low=[{}] high=[{}] score={}",
                style(window.chrom).cyan(),
                style(window.center).green(),
                window.left_edge,
                window.right_edge,
                window.low.iter().map(Record::start).join(","),
                window.high.iter().map(Record::start).join(","),
                style(format!("{:.4}", ScoreStrategy::Mean.score(&window))).yellow()
            );
            shown += 1;
        }
        eprintln!(
            "[{}] {} windows shown, {} records read",
            style("V").green(),
            shown,
            engine.records_read()
        );
        Ok(())
    }
}
