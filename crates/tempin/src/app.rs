use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("tempin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Describe running applications as temporary pins")
        .long_about("tempin turns a running-window record into a UI-ready pin descriptor: packaged-application identity, the sharpest available icon, a launchable execution path and a display title. Descriptors are printed as JSON.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("resolve")
                .about("Resolve one record from flags, or records as JSON from stdin")
                .arg(
                    Arg::new("stdin")
                        .long("stdin")
                        .help("Read a JSON record or array of records from stdin")
                        .action(ArgAction::SetTrue)
                        .conflicts_with_all(["exe", "execution-path", "hwnd", "icon-path"])
                )
                .arg(
                    Arg::new("exe")
                        .long("exe")
                        .short('e')
                        .help("Executable path of the running application")
                        .required_unless_present("stdin")
                )
                .arg(
                    Arg::new("execution-path")
                        .long("execution-path")
                        .help("Launch command for the application (default: the exe path)")
                )
                .arg(
                    Arg::new("hwnd")
                        .long("hwnd")
                        .help("Window handle of the originating window")
                        .value_parser(clap::value_parser!(isize))
                        .allow_negative_numbers(true)
                        .default_value("0")
                )
                .arg(
                    Arg::new("icon-path")
                        .long("icon-path")
                        .short('i')
                        .help("Destination icon file the descriptor will reference")
                        .required_unless_present("stdin")
                )
        )
        .subcommand(
            Command::new("config")
                .about("Print the effective configuration as TOML")
        )
}
