use fsmc_lib::Graph;

use super::input::{InputArgs, load_or_exit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automaton definition syntax.
    Def,
    /// Node/edge graph as JSON.
    Json,
    /// Regex syntax tree.
    Ast,
}

pub struct DumpArgs {
    pub input: InputArgs,
    pub format: OutputFormat,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let compiled = load_or_exit(&args.input, args.color);

    match args.format {
        OutputFormat::Def => {
            print!("{}", compiled.automaton);
        }
        OutputFormat::Json => match Graph::from(&compiled.automaton).to_json(true) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        },
        OutputFormat::Ast => {
            let Some(expr) = compiled.expr else {
                eprintln!("error: --format ast requires --regex");
                std::process::exit(1);
            };
            println!("{}", expr);
            println!("{:#?}", expr);
        }
    }
}
