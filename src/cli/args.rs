//! CLI argument parsing

/// Test root used when none is given on the command line.
pub const DEFAULT_ROOT: &str = "test";

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Run(RunArgs),
    List(ListArgs),
}

#[derive(Debug, Clone)]
pub struct RunArgs {
    pub root: String,
    pub only: Option<String>,
    pub jobs: Option<usize>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct ListArgs {
    pub root: String,
    pub only: Option<String>,
    pub json: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            only: None,
            jobs: None,
            json: false,
            quiet: false,
        }
    }
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            only: None,
            json: false,
        }
    }
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    let command = match args[1].as_str() {
        "run" => Command::Run(parse_run_args(&args[2..])?),
        "list" => Command::List(parse_list_args(&args[2..])?),
        _ => return Err(format!("Unknown command: {}", args[1])),
    };

    Ok(CliArgs { command })
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_run_args(args: &[String]) -> Result<RunArgs, String> {
    let mut run_args = RunArgs::default();
    let mut root_seen = false;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--only" => {
                run_args.only = Some(take_value(args, &mut i, "--only")?.to_string());
            }
            "--jobs" | "-j" => {
                let jobs: usize = take_value(args, &mut i, "--jobs")?
                    .parse()
                    .map_err(|_| "--jobs must be a positive integer".to_string())?;
                if jobs == 0 {
                    return Err("--jobs must be greater than zero".to_string());
                }
                run_args.jobs = Some(jobs);
            }
            "--json" => {
                run_args.json = true;
            }
            "--quiet" => {
                run_args.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                if root_seen {
                    return Err(format!("Unexpected argument: {arg}"));
                }
                run_args.root = arg.to_string();
                root_seen = true;
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(run_args)
}

fn parse_list_args(args: &[String]) -> Result<ListArgs, String> {
    let mut list_args = ListArgs::default();
    let mut root_seen = false;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--only" => {
                list_args.only = Some(take_value(args, &mut i, "--only")?.to_string());
            }
            "--json" => {
                list_args.json = true;
            }
            arg if !arg.starts_with("--") => {
                if root_seen {
                    return Err(format!("Unexpected argument: {arg}"));
                }
                list_args.root = arg.to_string();
                root_seen = true;
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(list_args)
}
