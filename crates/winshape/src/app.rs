use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};

/// Attach the `--title`/`--id` window selector pair to a subcommand.
/// Exactly one is accepted; `required` controls whether one must be given.
fn with_selector(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("title")
            .long("title")
            .help("Select the first window whose title contains this substring (case-sensitive)"),
    )
    .arg(
        Arg::new("id")
            .long("id")
            .help("Select a window by its raw handle value")
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(isize))
            .conflicts_with("title"),
    )
    .group(
        ArgGroup::new("selector")
            .args(["title", "id"])
            .required(required),
    )
}

pub fn build_cli() -> Command {
    Command::new("winshape")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resize, de-border, and inspect native Win32 windows")
        .long_about(
            "winshape manipulates the on-screen presentation of native windows: \
             read a window's size and title, resize it, strip its border and \
             title-bar chrome, and restore the saved styles later. Aimed at \
             games and media players that behave better without chrome.",
        )
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
        .subcommand(with_selector(
            Command::new("set-resolution")
                .about("Resize a window, keeping its current top-left position")
                .arg(
                    Arg::new("width")
                        .long("width")
                        .required(true)
                        .help("Target width in pixels")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .required(true)
                        .help("Target height in pixels")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i32)),
                ),
            true,
        ))
        .subcommand(with_selector(
            Command::new("set-borderless")
                .about("Strip a window's border and title-bar chrome, saving its styles"),
            true,
        ))
        .subcommand(with_selector(
            Command::new("revert-borderless")
                .about("Restore the styles saved by a prior set-borderless"),
            true,
        ))
        .subcommand(
            with_selector(
                Command::new("get-info")
                    .about("Report a window's handle, title, resolution, and aspect ratio")
                    .long_about(
                        "Report a window's handle, title, resolution, and aspect ratio. \
                         With no --title/--id, enters an interactive mode: hover over a \
                         window and press Ctrl+Alt+A to capture it, Ctrl+Alt+C to exit.",
                    ),
                false,
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .help("Output in JSON format")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(
            Command::new("list")
                .about("List all visible titled windows")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
}

#[allow(dead_code)]
pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}
