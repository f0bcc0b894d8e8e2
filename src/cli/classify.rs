use std::path::PathBuf;

use clap::Args;

use crate::classify::classify;
use crate::cli::OutputFormat;
use crate::core::config::{CaseNormalization, Configuration, LetterCasePolicy, Quantity};
use crate::core::types::Classification;

/// Letter-case handling selectable on the command line
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum CaseArg {
    /// Compare as typed and report case mismatches
    AsIs,
    Capitalized,
    Uppercase,
    Lowercase,
}

impl From<CaseArg> for LetterCasePolicy {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::AsIs => Self::CompareAsIs,
            CaseArg::Capitalized => Self::NormalizeTo(CaseNormalization::Capitalized),
            CaseArg::Uppercase => Self::NormalizeTo(CaseNormalization::Uppercase),
            CaseArg::Lowercase => Self::NormalizeTo(CaseNormalization::Lowercase),
        }
    }
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// The typed text
    #[arg(required = true)]
    pub compared: String,

    /// The expected text
    #[arg(required = true)]
    pub exemplary: String,

    /// Path to a JSON configuration file; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Letter-case handling
    #[arg(long, value_enum)]
    pub case: Option<CaseArg>,

    /// Minimum matched characters, as a count (3) or a percentage of the expected length (50%)
    #[arg(long)]
    pub min_matched: Option<Quantity>,

    /// Maximum wrong characters, as a count (2) or a percentage of the typed length (25%)
    #[arg(long)]
    pub max_wrong: Option<Quantity>,
}

impl ClassifyArgs {
    fn configuration(&self) -> anyhow::Result<Configuration> {
        let mut config = match &self.config {
            Some(path) => Configuration::load_from_file(path)?,
            None => Configuration::default(),
        };

        if let Some(case) = self.case {
            config = config.with_letter_case(case.into());
        }
        if let Some(quantity) = self.min_matched {
            config = config.with_required_minimum_matched_chars(quantity);
        }
        if let Some(quantity) = self.max_wrong {
            config = config.with_acceptable_maximum_wrong_chars(quantity);
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.configuration()?;

    if verbose {
        eprintln!(
            "Compared: {} chars, exemplary: {} chars",
            args.compared.chars().count(),
            args.exemplary.chars().count()
        );
        eprintln!("Configuration: {}", serde_json::to_string(&config)?);
    }

    let result = classify(&args.compared, &args.exemplary, &config);

    match format {
        OutputFormat::Text => print_text(&args, &result),
        OutputFormat::Json => print_json(&args, &result)?,
        OutputFormat::Tsv => print_tsv(&result),
    }

    Ok(())
}

fn print_text(args: &ClassifyArgs, result: &Classification) {
    println!("Classification Results");
    println!("{}", "=".repeat(60));

    println!("\nCompared:  {}", args.compared);
    println!("Exemplary: {}", args.exemplary);

    let annotated: String = result.iter().map(|c| c.value).collect();
    println!("\n  {annotated}");
    println!("  {}", result.markers());

    println!("\nSummary:");
    println!("  Correct: {}", result.correct_count());
    println!("  Missing: {}", result.missing_count());
    println!("  Extra: {}", result.extra_count());
    println!("  Letter case mismatches: {}", result.letter_case_mismatches());
    println!("  Exact match: {}", result.is_exact_match());
}

fn print_json(args: &ClassifyArgs, result: &Classification) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "compared": args.compared,
        "exemplary": args.exemplary,
        "chars": result.chars,
        "summary": {
            "correct": result.correct_count(),
            "missing": result.missing_count(),
            "extra": result.extra_count(),
            "letter_case_mismatches": result.letter_case_mismatches(),
            "exact_match": result.is_exact_match(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(result: &Classification) {
    println!("position\tvalue\tkind\tletter_case_correct");
    for (i, c) in result.iter().enumerate() {
        let letter_case = c
            .letter_case_correct
            .map_or_else(String::new, |correct| correct.to_string());
        println!("{i}\t{}\t{}\t{letter_case}", c.value, c.kind);
    }
}
