use fsmc_core::word;

use super::input::{InputArgs, load_or_exit};

pub struct RunArgs {
    pub input: InputArgs,
    pub words: Vec<String>,
    pub color: bool,
}

pub fn run(args: RunArgs) {
    let compiled = load_or_exit(&args.input, args.color);

    let mut all_accepted = true;
    for text in &args.words {
        match compiled.automaton.accepts(&word(text)) {
            Ok(true) => println!("{text:?}: accept"),
            Ok(false) => {
                println!("{text:?}: reject");
                all_accepted = false;
            }
            Err(e) => {
                eprintln!("error: {text:?}: {}", e);
                all_accepted = false;
            }
        }
    }

    if !all_accepted {
        std::process::exit(1);
    }
}
