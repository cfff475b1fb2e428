//! Outbound collaborators: the reporting sink that receives per-turn and
//! per-generation output, and the statistics tracker that remembers the best
//! agent of the run.

use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct BestAgent {
    pub name: String,
    pub gene_summary: String,
    pub fitness: i64,
}

/// Keeps the single fittest agent recorded over the life of the process.
#[derive(Debug, Default)]
pub struct Statistics {
    best: Option<BestAgent>,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    /// Ties keep the agent that was recorded first.
    pub fn record_agent(&mut self, name: &str, gene_summary: &str, fitness: i64) {
        let better = match &self.best {
            None => true,
            Some(best) => fitness > best.fitness,
        };
        if better {
            self.best = Some(BestAgent {
                name: name.to_string(),
                gene_summary: gene_summary.to_string(),
                fitness,
            });
        }
    }

    pub fn best(&self) -> Option<&BestAgent> {
        self.best.as_ref()
    }
}

/// Receives what the simulation produces. Formatting and display are left to
/// the implementor; every hook defaults to doing nothing.
pub trait Reporter {
    fn turn(&mut self, _turn: u64, _tile: &str, _statuses: &[String]) {}

    fn generation(&mut self, _generation: u32, _gene_summaries: &[String]) {}

    fn best(&mut self, _best: &BestAgent) {}
}

/// Discards everything.
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Logs every report through `tracing` at info level.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn turn(&mut self, turn: u64, tile: &str, statuses: &[String]) {
        info!(turn, tile, "{}", statuses.join(" | "));
    }

    fn generation(&mut self, generation: u32, gene_summaries: &[String]) {
        for summary in gene_summaries {
            info!(generation, "{}", summary);
        }
    }

    fn best(&mut self, best: &BestAgent) {
        info!(
            name = %best.name,
            genes = %best.gene_summary,
            "best agent: {}: {}¢",
            best.name,
            best.fitness
        );
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub turn: u64,
    pub tile: String,
    pub statuses: Vec<String>,
}

/// Keeps every report in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub turns: Vec<TurnReport>,
    pub generations: Vec<(u32, Vec<String>)>,
    pub bests: Vec<BestAgent>,
}

impl Reporter for RecordingReporter {
    fn turn(&mut self, turn: u64, tile: &str, statuses: &[String]) {
        self.turns.push(TurnReport {
            turn,
            tile: tile.to_string(),
            statuses: statuses.to_vec(),
        });
    }

    fn generation(&mut self, generation: u32, gene_summaries: &[String]) {
        self.generations.push((generation, gene_summaries.to_vec()));
    }

    fn best(&mut self, best: &BestAgent) {
        self.bests.push(best.clone());
    }
}
