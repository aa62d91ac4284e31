//! Embedded benchmark result tables
//!
//! Recorded values: the Email-Enron and Wiki-Vote size histograms and
//! clique counts, and the Wiki-Vote run time `00:00:40:228` (listed under
//! Tomita). The recorded Email-Enron run took `00:01:17:271` but
//! was not attributed to an algorithm, so it is not placed in the table.
//!
//! Illustrative values: every other run time, the Email-Enron Tomita,
//! ELS and Chiba-Nishizeki times (`52187`, `65432` and `75763` ms), and all
//! as-Skitter figures.

use super::benchmark::{AlgorithmResult, BenchmarkData, Dataset, HistogramBin};

pub const ENRON: &str = "enron";
pub const WIKI_VOTE: &str = "wiki-vote";
pub const AS_SKITTER: &str = "as-skitter";

pub const TOMITA: &str = "Tomita";
pub const ELS: &str = "ELS";
pub const CHIBA_NISHIZEKI: &str = "Chiba-Nishizeki";

const ENRON_CLIQUES: u64 = 226_859;
const WIKI_VOTE_CLIQUES: u64 = 459_002;
const AS_SKITTER_CLIQUES: u64 = 37_322_355;

// (size, count)
const ENRON_HISTOGRAM: &[(u32, u64)] = &[
    (2, 14070), (3, 7077), (4, 13319), (5, 18143), (6, 22715),
    (7, 25896), (8, 24766), (9, 22884), (10, 21393), (11, 17833),
    (12, 15181), (13, 11487), (14, 7417), (15, 3157), (16, 1178),
    (17, 286), (18, 41), (19, 10), (20, 6),
];

const WIKI_VOTE_HISTOGRAM: &[(u32, u64)] = &[
    (2, 8655), (3, 13718), (4, 27292), (5, 48416), (6, 68872),
    (7, 83266), (8, 76732), (9, 54456), (10, 35470), (11, 21736),
    (12, 11640), (13, 5449), (14, 2329), (15, 740), (16, 208),
    (17, 23),
];

fn histogram(bins: &[(u32, u64)]) -> Vec<HistogramBin> {
    bins.iter().map(|&(size, count)| HistogramBin::new(size, count)).collect()
}

pub fn benchmark_data() -> BenchmarkData {
    BenchmarkData {
        datasets: vec![
            Dataset::new(ENRON, "Email-Enron", histogram(ENRON_HISTOGRAM)),
            Dataset::new(WIKI_VOTE, "Wiki-Vote", histogram(WIKI_VOTE_HISTOGRAM)),
            Dataset::new(AS_SKITTER, "as-Skitter", Vec::new()),
        ],
        algorithms: vec![
            AlgorithmResult::new(TOMITA)
                .with_run(ENRON, ENRON_CLIQUES, "00:00:52:187")
                .with_run(WIKI_VOTE, WIKI_VOTE_CLIQUES, "00:00:40:228")
                .with_run(AS_SKITTER, AS_SKITTER_CLIQUES, "00:07:28:650"),
            AlgorithmResult::new(ELS)
                .with_run(ENRON, ENRON_CLIQUES, "00:01:05:432")
                .with_run(WIKI_VOTE, WIKI_VOTE_CLIQUES, "00:00:46:913")
                .with_run(AS_SKITTER, AS_SKITTER_CLIQUES, "00:06:14:392"),
            AlgorithmResult::new(CHIBA_NISHIZEKI)
                .with_run(ENRON, ENRON_CLIQUES, "00:01:15:763")
                .with_run(WIKI_VOTE, WIKI_VOTE_CLIQUES, "00:01:02:604")
                .with_run(AS_SKITTER, AS_SKITTER_CLIQUES, "00:23:51:077"),
        ],
    }
}
