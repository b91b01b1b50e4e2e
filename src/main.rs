use anyhow::Context;
use clap::Parser;
use pratt_calc::{
    MAX_NESTING_DEPTH, evaluate, parse_prefix_form_with_max_depth, parse_with_max_depth, render,
    tokenize,
};
use tracing_subscriber::EnvFilter;

/// pratt-calc evaluates integer arithmetic such as `2 + 3 * 4`, `-2^2` or
/// `5!`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the tokens before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed tree in prefix notation before evaluating.
    #[arg(short, long)]
    ast: bool,

    /// Reads the expression in prefix notation, e.g. `(+ 1 (* 2 3))`.
    #[arg(short, long)]
    prefix_form: bool,

    /// Maximum nesting depth of the expression.
    #[arg(long, default_value_t = MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// The expression to evaluate.
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let tokens = tokenize(args.expression.as_bytes()).context("failed to tokenize expression")?;

    if args.tokens {
        println!("#== Tokens ==");
        for (token, _) in &tokens {
            println!("{token}");
        }
        println!();
    }

    let expr = if args.prefix_form {
        parse_prefix_form_with_max_depth(&tokens, args.max_depth)
    } else {
        parse_with_max_depth(&tokens, args.max_depth)
    }.context("failed to parse expression")?;

    if args.ast {
        println!("#== AST =====");
        println!("{}\n", render(&expr));
    }

    let result = evaluate(&expr).context("failed to evaluate expression")?;
    println!("{result}");

    Ok(())
}
