use std::io::{self, Write};

mod options;
mod stats;

use sqlife::{Grid, Pattern, Render, TextRender};
use stats::{Recorder, SimpleRecord};

/// Renders each generation and records it in the run statistics
struct Recording<'a, R: Render> {
    render: &'a mut R,
    stats: SimpleRecord,
}
impl<R: Render> Render for Recording<'_, R> {
    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        self.stats.record(grid.alive_count());
        log::debug!("{}", self.stats.report());
        self.render.render(grid)
    }
}

fn run_scenario<W: Write>(scenario: options::Scenario, out: &mut TextRender<W>) -> io::Result<()> {
    out.message(scenario.title())?;
    let options::Scenario {
        mut grid,
        generations,
        ..
    } = scenario;
    log::info!(
        "running {}x{} grid {} for {} generations",
        grid.side(),
        grid.side(),
        Pattern::encode(&grid),
        generations
    );

    out.message("Input State:")?;
    out.render_plain(&grid)?;

    let mut recording = Recording {
        stats: SimpleRecord::new(grid.alive_count()),
        render: &mut *out,
    };
    grid.run(generations, &mut recording)?;

    let summary = recording.stats.summary();
    out.message(summary)?;
    log::info!("final state {}", Pattern::encode(&grid));
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    let scenarios = args.scenarios()?;

    let mut out = TextRender::stdout();
    for scenario in scenarios {
        run_scenario(scenario, &mut out)?;
    }
    Ok(())
}
