use clap::{Parser, Subcommand, ValueEnum};
use failstop::assert_true;

/// Printed by every run that survives its assertions.
const ANSWER: i64 = 42;

#[derive(Parser, Debug)]
#[command(author, version, about = "Exercise the failstop assertion primitive", long_about = None)]
struct Args {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one of the built-in scenarios
    Scenario {
        #[arg(value_enum)]
        name: Scenario,
    },
    /// Assert that two integers are equal, then print the answer
    Compare {
        #[arg(short, long, allow_hyphen_values = true)]
        left: i64,

        #[arg(short, long, allow_hyphen_values = true)]
        right: i64,
    },
    /// Fail unconditionally with a message
    Fail {
        #[arg(short, long, default_value = "unreachable state")]
        message: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Scenario {
    /// 5 == 5 holds
    Equal,
    /// 10 == 20 does not
    Unequal,
    /// A false assertion as the very first statement
    First,
    /// true, true, then false
    Sequence,
    /// Unterminated output followed by a false assertion
    Partial,
}

fn run_scenario(scenario: Scenario) {
    match scenario {
        Scenario::Equal => {
            let a = 5;
            let b = 5;
            assert_true(a == b);
        }
        Scenario::Unequal => {
            let a = 10;
            let b = 20;
            let c = a == b;
            assert_true(c);
        }
        Scenario::First => assert_true(false),
        Scenario::Sequence => {
            assert_true(true);
            assert_true!(1 + 1 == 2);
            assert_true!(ANSWER < 0, "sequence must stop here");
        }
        Scenario::Partial => {
            print!("partial result");
            assert_true(false);
        }
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match args.command {
        Commands::Scenario { name } => {
            log::info!("Running scenario: {:?}", name);
            run_scenario(name);
        }
        Commands::Compare { left, right } => {
            log::info!("Comparing {} and {}", left, right);
            assert_true!(left == right);
        }
        Commands::Fail { message } => failstop::fail_assert(message),
    }

    println!("{}", ANSWER);
}
