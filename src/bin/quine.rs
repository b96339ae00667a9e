use std::process;

use clap::Parser;
use quine_logic::{canonical, parse, Error, Form, Method, TruthTable};

/// Minimize a propositional expression over the variables a-e.
#[derive(Debug, Parser)]
#[command(name = "quine", version, about)]
struct Args {
    /// Expression to minimize, e.g. "(a -> b) & c"
    expression: String,

    /// Print the full truth table
    #[arg(long)]
    table: bool,

    /// Print each method's intermediate stages
    #[arg(long)]
    stages: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let parsed = parse(&args.expression)?;
    let table = TruthTable::from_expression(&parsed)?;
    let variables = table.variables();

    println!("expression: {}", parsed.cleaned());
    println!(
        "variables:  {}",
        variables.iter().collect::<String>()
    );

    if args.table {
        println!();
        let header: Vec<String> = variables.iter().map(char::to_string).collect();
        println!("{} | f", header.join(" "));
        for row in table.rows() {
            let bits: Vec<&str> = row
                .assignment
                .iter()
                .map(|b| if *b { "1" } else { "0" })
                .collect();
            println!("{} | {}", bits.join(" "), if row.result { "1" } else { "0" });
        }
    }

    println!();
    println!("SDNF: {}", canonical::sdnf(variables, table.minterm_indices()));
    println!("SKNF: {}", canonical::sknf(variables, table.maxterm_indices()));
    println!("minterms:   {:?}", table.minterm_indices());
    println!("maxterms:   {:?}", table.maxterm_indices());
    println!("index form: {}", table.index_form());

    let methods = [
        ("calculation", Method::Calculation),
        ("quine-mccluskey", Method::QuineMcCluskey),
        ("karnaugh", Method::Karnaugh),
    ];
    let forms = [("SDNF", Form::Sdnf), ("SKNF", Form::Sknf)];

    for (method_name, method) in methods {
        for (form_name, form) in forms {
            let result = table.minimize(method, form)?;
            println!();
            println!("{method_name} {form_name}: {}", result.expression);
            if args.stages {
                for stage in &result.stages {
                    println!("  {}:", stage.description);
                    for item in &stage.items {
                        println!("    {item}");
                    }
                }
            }
        }
    }

    Ok(())
}
