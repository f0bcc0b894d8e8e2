use clap::Args;

use crate::alignment::basis::{build_basis, Basis};
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct BasisArgs {
    /// The typed text
    #[arg(required = true)]
    pub compared: String,

    /// The expected text
    #[arg(required = true)]
    pub exemplary: String,
}

pub fn run(args: BasisArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let basis = build_basis(&args.compared, &args.exemplary);

    if verbose {
        eprintln!(
            "Matched {} of {} expected characters",
            basis.matched_len(),
            basis.exemplary_sequence.len()
        );
    }

    match format {
        OutputFormat::Text => print_text(&args, &basis),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&basis)?),
        OutputFormat::Tsv => print_tsv(&args, &basis),
    }

    Ok(())
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_text(args: &BasisArgs, basis: &Basis) {
    println!("Alignment Basis");
    println!("{}", "=".repeat(60));
    println!("\nCompared:  {}", args.compared);
    println!("Exemplary: {}", args.exemplary);
    println!("\n  Exemplary sequence: [{}]", join(&basis.exemplary_sequence));
    println!("  Sequence: [{}]", join(&basis.sequence));
    println!("  Subsequence: [{}]", join(&basis.subsequence));
    println!("  Missing elements: [{}]", join(&basis.missing_elements));
}

fn print_tsv(args: &BasisArgs, basis: &Basis) {
    println!("position\tvalue\tslot\tmatched");
    let mut accepted = basis.subsequence.iter().peekable();
    for (i, (c, slot)) in args.compared.chars().zip(&basis.sequence).enumerate() {
        let matched = match slot.index() {
            Some(position) if accepted.peek() == Some(&&position) => {
                accepted.next();
                true
            }
            _ => false,
        };
        println!("{i}\t{c}\t{slot}\t{matched}");
    }
}
