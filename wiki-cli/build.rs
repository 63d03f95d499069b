use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs; build scripts can't reach src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("wiki")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn site pages into editable wiki documents and back")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("deconstruct")
                .arg(
                    Arg::new("files")
                        .num_args(1..)
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("generate")
                .arg(
                    Arg::new("input-dir")
                        .long("input-dir")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("template-dir")
                        .long("template-dir")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("backend")
                        .long("backend")
                        .value_parser(["template", "markdown"]),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("as")
                        .long("as")
                        .value_parser(["intermediate", "json"]),
                ),
        )
        .subcommand(
            Command::new("classify").arg(
                Arg::new("file")
                    .required(true)
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(Command::new("codecs"));

    generate_to(Bash, &mut cmd, "wiki", &outdir)?;
    generate_to(Zsh, &mut cmd, "wiki", &outdir)?;
    generate_to(Fish, &mut cmd, "wiki", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
