//! `train` binary: load the four input files, run hard-EM, report results.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use kakure_core::{accuracy, train, ModelParams, TrainingReport};
use kakure_trainer::{
    decoded_labels, format_matrix, parse_observations, parse_reference, parse_sensory,
    parse_transition,
};

#[derive(Parser, Debug)]
#[command(name = "train", about = "Hard-EM training of a 3-state coin HMM")]
struct Args {
    /// Observation sequence file ('H'/'T', other characters ignored)
    observations: PathBuf,

    /// Transition table file (3 rows of 3 probabilities, [to][from])
    transition: PathBuf,

    /// Sensory file (3 probabilities, P(H | state))
    sensory: PathBuf,

    /// Reference label file ('1'/'2'/'3', used only for scoring)
    reference: PathBuf,

    /// Number of re-estimation rounds (0 decodes once without learning)
    #[arg(short = 'k', long, default_value_t = 0)]
    iterations: usize,

    /// Write the decoded label string to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write a JSON training report to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let obs_text = fs::read_to_string(&args.observations)
        .with_context(|| format!("reading observations from {:?}", args.observations))?;
    let transition_text = fs::read_to_string(&args.transition)
        .with_context(|| format!("reading transition table from {:?}", args.transition))?;
    let sensory_text = fs::read_to_string(&args.sensory)
        .with_context(|| format!("reading sensory table from {:?}", args.sensory))?;
    let reference_text = fs::read_to_string(&args.reference)
        .with_context(|| format!("reading reference labels from {:?}", args.reference))?;

    let obs = parse_observations(&obs_text)?;
    let transition = parse_transition(&transition_text)?;
    let emission = parse_sensory(&sensory_text)?;
    let reference = parse_reference(&reference_text)?;
    info!(
        observations = obs.len(),
        iterations = args.iterations,
        "inputs loaded"
    );

    println!("initial transition:\n{}", format_matrix(&transition));
    println!("initial emission:\n{}", format_matrix(&emission));

    let params = ModelParams::from_probabilities(transition, emission)?;
    let outcome = train(params, &obs, args.iterations)?;
    let acc = accuracy(&outcome.decoded, &reference)?;

    println!("final transition:\n{}", format_matrix(&outcome.transition));
    println!("final emission:\n{}", format_matrix(&outcome.emission));
    println!("decoded: {}", decoded_labels(&outcome.decoded));
    println!("accuracy: {acc:.4}");

    if let Some(path) = &args.output {
        let mut labels = decoded_labels(&outcome.decoded);
        labels.push('\n');
        fs::write(path, labels).with_context(|| format!("writing decoded labels to {path:?}"))?;
        info!(path = %path.display(), "decoded labels written");
    }

    if let Some(path) = &args.json {
        let report = TrainingReport::new(&outcome, Some(acc));
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("writing JSON report to {path:?}"))?;
        info!(path = %path.display(), "JSON report written");
    }

    Ok(())
}
