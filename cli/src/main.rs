use solver::{
    SolveOutcome,
    Solver,
    Variable,
};
use std::{
    fs,
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
    process,
};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "simplesatc")]
struct Opt {
    #[structopt(name = "input .cnf file", parse(from_os_str))]
    input: PathBuf,
}

const OUTPUT_FILE: &str = "SimpleSATc.out";
const BANNER: &str = "################################# SimpleSATc #################################";

fn model_line(solver: &Solver) -> String {
    (0..solver.num_vars())
        .map(|index| {
            let variable = Variable::from_index(index);
            let bit = u8::from(solver.model_bit(variable));
            format!("x{}={}", index, bit)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn append_result(input: &PathBuf, outcome: SolveOutcome, solver: &Solver) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(OUTPUT_FILE)?;
    writeln!(file, "{}", BANNER)?;
    writeln!(file, "Input file: {}", input.display())?;
    match outcome {
        SolveOutcome::Sat => {
            writeln!(file, "Result: SATISFIABLE")?;
            writeln!(file, "Satisfying Solution:")?;
            writeln!(file, "{}", model_line(solver))?;
        }
        SolveOutcome::Unsat => {
            writeln!(file, "Result: UNSATISFIABLE")?;
        }
    }
    writeln!(file)?;
    Ok(())
}

fn append_trivial_unsat(input: &PathBuf) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(OUTPUT_FILE)?;
    writeln!(file, "{}", BANNER)?;
    writeln!(file, "Input file: {}", input.display())?;
    writeln!(file, "Result: UNSATISFIABLE")?;
    writeln!(file)?;
    Ok(())
}

fn main() {
    let opt = Opt::from_args();

    let cnf_contents = match fs::read(&opt.input) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("couldn't read {}: {}", opt.input.display(), error);
            process::exit(1);
        }
    };

    let mut solver = match Solver::from_cnf(&mut &cnf_contents[..]) {
        Ok(solver) => solver,
        Err(error) => {
            eprintln!("couldn't parse {}: {:?}", opt.input.display(), error);
            process::exit(1);
        }
    };

    if solver.is_trivially_unsat() {
        println!("Trivial problem");
        println!("UNSATISFIABLE");
        if let Err(error) = append_trivial_unsat(&opt.input) {
            eprintln!("couldn't append to {}: {}", OUTPUT_FILE, error);
        }
        process::exit(20);
    }

    let outcome = solver
        .solve()
        .expect("the driver loop violated one of its own invariants");

    match outcome {
        SolveOutcome::Sat => println!("SAT"),
        SolveOutcome::Unsat => println!("UNSAT"),
    }
    if let Err(error) = append_result(&opt.input, outcome, &solver) {
        eprintln!("couldn't append to {}: {}", OUTPUT_FILE, error);
    }
}
