// Synthetic submission generator for trying the checker end to end.
//
// Documents are assigned to topic groups in blocks (the first `per_topic`
// documents get the first topic, and so on), and each line is drawn at random
// from that topic's sentences. Documents in the same group therefore score
// high against each other and low against everyone else.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

pub const TOPIC_GROUPS: &[(&str, &[&str])] = &[
    (
        "machine_learning",
        &[
            "Machine learning enables systems to learn from data and improve automatically.",
            "Supervised learning uses labeled data to train predictive models.",
            "Neural networks simulate the human brain for pattern recognition.",
            "Reinforcement learning improves behaviour using rewards and penalties.",
        ],
    ),
    (
        "operating_systems",
        &[
            "Operating systems manage hardware resources and system processes.",
            "Process scheduling determines the execution order of tasks.",
            "Memory management allocates and tracks system RAM usage.",
            "File systems organize and store data on storage devices.",
        ],
    ),
    (
        "networking",
        &[
            "Computer networks enable communication between devices.",
            "TCP/IP is the foundational protocol suite of the internet.",
            "Routing determines the best path for data packets.",
            "Network security protects systems from unauthorized access.",
        ],
    ),
    (
        "geography",
        &[
            "India is a country in South Asia with diverse landscapes.",
            "The Himalayas form the northern mountain boundary.",
            "Major rivers include the Ganges, Brahmaputra, and Yamuna.",
            "Indian culture includes languages, religions, and traditions.",
        ],
    ),
    (
        "astronomy",
        &[
            "The solar system consists of the sun and orbiting planets.",
            "Earth is the third planet and supports life.",
            "Gas giants include Jupiter and Saturn.",
            "Galaxies contain billions of stars and cosmic structures.",
        ],
    ),
];

/// Chance that a line gets an "Additional note N." suffix.
const NOTE_PROBABILITY: f64 = 0.2;

pub struct SampleOptions {
    pub count: usize,
    pub lines_per_doc: usize,
    /// Documents per topic group before moving to the next group
    pub per_topic: usize,
    /// Fixed seed for reproducible output; random when None
    pub seed: Option<u64>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            count: 25,
            lines_per_doc: 1000,
            per_topic: 5,
            seed: None,
        }
    }
}

/// Topic index for the document at zero-based position `index`.
pub fn topic_for(index: usize, per_topic: usize) -> usize {
    (index / per_topic.max(1)).min(TOPIC_GROUPS.len() - 1)
}

/// Generate one document's text.
pub fn generate_text<R: Rng>(rng: &mut R, topic: usize, lines: usize) -> String {
    let (_, sentences) = TOPIC_GROUPS[topic.min(TOPIC_GROUPS.len() - 1)];
    (0..lines)
        .map(|_| {
            let mut line = sentences.choose(rng).copied().unwrap_or_default().to_string();
            if rng.random::<f64>() < NOTE_PROBABILITY {
                line.push_str(&format!(" Additional note {}.", rng.random_range(1..=9999)));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `sample_1.txt` .. `sample_N.txt` into `dir`, creating it if needed.
pub fn generate(dir: &Path, options: &SampleOptions) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut written = Vec::with_capacity(options.count);
    for i in 0..options.count {
        let topic = topic_for(i, options.per_topic);
        let text = generate_text(&mut rng, topic, options.lines_per_doc);
        let path = dir.join(format!("sample_{}.txt", i + 1));
        fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    info!(
        count = written.len(),
        lines = options.lines_per_doc,
        dir = %dir.display(),
        "Generated sample documents"
    );
    Ok(written)
}
