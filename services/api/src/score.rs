use clap::Args;
use referral_rewards::error::AppError;
use referral_rewards::rewards::{Scores, ScoringService};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Referral log to score. Reads stdin when omitted or `-`.
    pub(crate) path: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = read_log(args.path.as_deref())?;
    let scores = score_log(&raw)?;
    println!("{}", render_scores(&scores)?);
    Ok(())
}

fn read_log(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn score_log(raw: &str) -> Result<Scores, AppError> {
    ScoringService::new().score(raw).map_err(AppError::from)
}

fn render_scores(scores: &Scores) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(scores)?)
}
