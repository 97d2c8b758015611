use clap::Parser;
use rpncalc::{BaseOperators, EvalContext, ShuntingParser};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate integer infix expressions")]
struct Args {
    /// Fail on unused operands instead of ignoring them
    #[arg(short, long)]
    strict: bool,

    /// Print the postfix form along with the result
    #[arg(short, long)]
    postfix: bool,

    /// Expression to evaluate, starts an interactive session if missing
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expr: Vec<String>,
}

fn evalexpr(args: &Args, ops: &BaseOperators, input: &str) -> rpncalc::Result<String> {
    let rpn = ShuntingParser::parse_str(ops, input)?;
    let result = EvalContext::new(ops).strict(args.strict).eval(&rpn)?;
    if args.postfix {
        Ok(format!("{} = {}", rpn, result))
    } else {
        Ok(result.to_string())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let ops = BaseOperators::default();

    if !args.expr.is_empty() {
        let input = args.expr.join(" ");
        match evalexpr(&args, &ops, &input) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            log::info!("no history at {}", path.display());
        }
    }
    loop {
        match rl.readline(">> ") {
            Ok(input) => {
                if input.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(input.as_str())?;
                match evalexpr(&args, &ops, &input) {
                    Ok(out) => println!("{}", out),
                    Err(e) => println!("error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path)?;
    }
    Ok(())
}
