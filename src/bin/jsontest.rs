//! jsontest - end-to-end harness for the json CLI

use jsontest::cli::args::{Command, ListArgs, RunArgs, parse_args};
use jsontest::cli::output::{format_case_list, format_json, format_text};
use jsontest::{FilterSpec, RunOptions};
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable, warnings by default)
    // Example: RUST_LOG=debug jsontest run test
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let exit_code = match &cli_args.command {
        Command::Run(run_args) => handle_run(run_args),
        Command::List(list_args) => handle_list(list_args),
    };

    process::exit(exit_code);
}

fn filter_from(only: Option<&str>) -> FilterSpec {
    match only {
        Some(tokens) => {
            log::warn!("Note: Limiting tests by --only: '{tokens}'");
            FilterSpec::parse(tokens)
        }
        None => FilterSpec::from_env(),
    }
}

fn handle_run(args: &RunArgs) -> i32 {
    let opts = RunOptions {
        filter: filter_from(args.only.as_deref()),
        jobs: args.jobs,
    };

    let report = match jsontest::run_suite(&args.root, &opts) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            return match e {
                jsontest::Error::InvalidInput(_) => 2,
                _ => 4,
            };
        }
    };

    if args.json {
        println!("{}", format_json(&report));
    } else {
        print!("{}", format_text(&report, args.quiet));
    }

    if report.is_success() { 0 } else { 1 }
}

fn handle_list(args: &ListArgs) -> i32 {
    let filter = filter_from(args.only.as_deref());

    match jsontest::list_cases(&args.root, &filter) {
        Ok(cases) => {
            print!("{}", format_case_list(&cases, args.json));
            if args.json {
                println!();
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                jsontest::Error::InvalidInput(_) => 2,
                _ => 4,
            }
        }
    }
}

fn print_help() {
    println!("jsontest - Run the json CLI end-to-end test suite");
    println!();
    println!("USAGE:");
    println!("    jsontest run [ROOT] [OPTIONS]");
    println!("    jsontest list [ROOT] [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    run       Execute every case directory and check its fixtures");
    println!("    list      Print the case names that would run");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("OPTIONS:");
    println!("    --only <TOKENS>           Select cases (overrides $TEST_ONLY)");
    println!("    -j, --jobs <N>            Run up to N cases at once (run only)");
    println!("    --json                    Emit machine-readable output");
    println!("    --quiet                   Only report failing cases (run only)");
    println!();
    println!("CASE LAYOUT:");
    println!("    <ROOT>/<name>/cmd                Script run as `bash cmd` (required)");
    println!("    <ROOT>/<name>/expected.exitCode  Expected exit status (optional)");
    println!("    <ROOT>/<name>/expected.stdout    Exact expected stdout (optional)");
    println!();
    println!("SELECTION:");
    println!("    TEST_ONLY=\"hello-server\" jsontest run    Run only hello-server");
    println!("    TEST_ONLY=\"-irc\" jsontest run            Run all but irc");
    println!();
    println!("ROOT defaults to 'test'. Exit status is 1 when any case fails.");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("jsontest {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
