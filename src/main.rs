use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command,
};
use colored::Colorize;
use cotree::{config::Config, Outcome, Settings, EXAMPLE_STRUCTURE};
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input")
                .help("Text file describing the tree to create")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Directory the tree is created in [default: current directory]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("preview")
                .short('p')
                .long("preview")
                .help("Print the tree before creating it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the tree without creating anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("confirm")
                .short('c')
                .long("confirm")
                .help("Ask before creating anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with default settings")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    let Some(input) = matches.get_one::<PathBuf>("input") else {
        println!(
            "Provide an input file structured like the following example:\n{}",
            EXAMPLE_STRUCTURE
        );
        return Ok(());
    };

    let settings = settings_from(&matches)?;

    match cotree::create_tree_from_file(input, &settings)? {
        Outcome::Applied(summary) => println!(
            "{} {} directories, {} files",
            "done".bold().green(),
            summary.directories,
            summary.files
        ),
        Outcome::DryRun => println!("{}", "dry run, nothing created".yellow()),
        Outcome::Declined => println!("{}", "cancelled, nothing created".yellow()),
    }

    Ok(())
}

fn init_logger(is_verbose: bool) {
    let default_level = if is_verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::debug!("executing in verbose mode");
}

fn settings_from(args: &ArgMatches) -> Result<Settings, cotree::CotreeError> {
    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let mut settings = Settings::from_config(config);

    if let Some(output) = args.get_one::<PathBuf>("output") {
        settings.output = output.clone();
    }
    settings.preview |= args.get_flag("preview");
    settings.dry_run |= args.get_flag("dry-run");
    settings.confirm |= args.get_flag("confirm");

    Ok(settings)
}
