// Command-line interface for the page wiki
//
// The site is a folder of hand written HTML pages. A few of them have a known shape (the blog
// listing, the community page, tool pages) and can be turned into a plain text wiki document,
// edited, and turned back into HTML. This binary drives the wiki-babel library over files.
//
// Usage:
//  wiki deconstruct <files…> [--output-dir DIR]   - HTML pages → wiki documents
//  wiki generate [--input-dir DIR] [--output-dir DIR] [--template-dir DIR] [--backend NAME]
//                                                  - wiki documents → HTML pages
//  wiki inspect <file> [--as intermediate|json]    - Show what a codec recovers from a page
//  wiki classify <file>                            - Which codec a file name routes to
//  wiki codecs                                     - List the page codecs
//
// Directories default to the `[paths]` section of the configuration. Flags are applied as
// overrides on top of the layered configuration (defaults, ./wiki.toml, --config).

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wiki_babel::publish::{self, FileOutcome, FileReport};
use wiki_babel::{
    BackendKind, CodecRegistry, MarkdownBackend, SiteBackend, TemplateBackend, TemplateNames,
    TemplateRenderer, TemplateStore, VariantRules,
};
use wiki_config::{Loader, WikiConfig, LOCAL_CONFIG_FILE};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "WIKI_LOG";

fn build_cli() -> Command {
    Command::new("wiki")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn site pages into editable wiki documents and back")
        .long_about(
            "wiki converts a few known HTML page shapes into plain text documents and \
            regenerates the pages from them.\n\n\
            Commands:\n  \
            - deconstruct: HTML pages to wiki documents\n  \
            - generate:    wiki documents to HTML pages\n  \
            - inspect:     show what is recovered from one page\n  \
            - classify:    show which codec a file name routes to\n  \
            - codecs:      list the page codecs\n\n\
            Examples:\n  \
            wiki deconstruct website/index.html website/discord.html\n  \
            wiki generate --backend markdown --output-dir preview\n  \
            wiki inspect website/index.html --as json",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wiki.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("deconstruct")
                .about("Deconstruct HTML pages into wiki documents")
                .arg(
                    Arg::new("files")
                        .help("HTML pages to deconstruct")
                        .num_args(1..)
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .value_name("DIR")
                        .help("Where documents are written (default: paths.wiki_dir)")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate HTML pages from wiki documents")
                .arg(
                    Arg::new("input-dir")
                        .long("input-dir")
                        .value_name("DIR")
                        .help("Directory of wiki documents (default: paths.wiki_dir)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .value_name("DIR")
                        .help("Where pages are written (default: paths.site_dir)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("template-dir")
                        .long("template-dir")
                        .value_name("DIR")
                        .help("Directory of base templates (default: paths.template_dir)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("backend")
                        .long("backend")
                        .value_name("NAME")
                        .help("Rendering back end (default: generate.backend)")
                        .value_parser(["template", "markdown"]),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the intermediate recovered from one HTML page")
                .arg(
                    Arg::new("file")
                        .help("HTML page to inspect")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("as")
                        .long("as")
                        .value_name("FORMAT")
                        .help("Output the wiki document or the structured intermediate")
                        .value_parser(["intermediate", "json"])
                        .default_value("intermediate"),
                ),
        )
        .subcommand(
            Command::new("classify")
                .about("Print the page variant a file name routes to")
                .arg(
                    Arg::new("file")
                        .help("Page file name or path")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("codecs").about("List the page codecs and their templates"))
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let Some((command, sub_matches)) = matches.subcommand() else {
        return;
    };
    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &path_overrides(command, sub_matches),
    );
    debug!(command, "configuration loaded");

    match command {
        "deconstruct" => {
            let files: Vec<&String> = sub_matches
                .get_many::<String>("files")
                .expect("files are required")
                .collect();
            handle_deconstruct_command(&files, &config);
        }
        "generate" => handle_generate_command(&config),
        "inspect" => {
            let file = sub_matches
                .get_one::<String>("file")
                .expect("file is required");
            let format = sub_matches
                .get_one::<String>("as")
                .map(|s| s.as_str())
                .unwrap_or("intermediate");
            handle_inspect_command(file, format, &config);
        }
        "classify" => {
            let file = sub_matches
                .get_one::<String>("file")
                .expect("file is required");
            handle_classify_command(file, &config);
        }
        "codecs" => handle_codecs_command(&config),
        _ => unreachable!("subcommand is required"),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Config keys set by the flags of `command`.
fn path_overrides(command: &str, matches: &ArgMatches) -> Vec<(&'static str, String)> {
    let flags: &[(&str, &'static str)] = match command {
        "deconstruct" => &[("output-dir", "paths.wiki_dir")],
        "generate" => &[
            ("input-dir", "paths.wiki_dir"),
            ("output-dir", "paths.site_dir"),
            ("template-dir", "paths.template_dir"),
            ("backend", "generate.backend"),
        ],
        _ => &[],
    };

    flags
        .iter()
        .filter_map(|(flag, key)| {
            matches
                .get_one::<String>(flag)
                .map(|value| (*key, value.clone()))
        })
        .collect()
}

fn load_cli_config(explicit_path: Option<&str>, overrides: &[(&'static str, String)]) -> WikiConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    for (key, value) in overrides {
        loader = loader
            .set_override(key, value.clone())
            .unwrap_or_else(|err| {
                eprintln!("Invalid value for {key}: {err}");
                std::process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn registry_from_config(config: &WikiConfig) -> CodecRegistry {
    CodecRegistry::with_defaults(
        VariantRules::from(&config.routing),
        &TemplateNames::from(&config.templates),
    )
}

fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

fn handle_deconstruct_command(files: &[&String], config: &WikiConfig) {
    let registry = registry_from_config(config);
    let out_dir = &config.paths.wiki_dir;

    let mut failed = false;
    for file in files {
        println!("Deconstructing {file}...");
        match publish::deconstruct_file(Path::new(file.as_str()), out_dir, &registry) {
            Ok(publish::DeconstructOutcome::Written(path)) => {
                println!("  -> Saved to {}", path.display());
            }
            Ok(publish::DeconstructOutcome::Skipped) => {
                println!(
                    "  -> No deconstruction logic for {}, skipping.",
                    file_name(file)
                );
            }
            Err(err) => {
                eprintln!("  -> Error: {err}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn handle_generate_command(config: &WikiConfig) {
    let backend: Box<dyn SiteBackend> = match config.generate.backend {
        BackendKind::Template => {
            let templates =
                TemplateStore::from_dir(&config.paths.template_dir).unwrap_or_else(|err| {
                    eprintln!("Failed to load templates: {err}");
                    std::process::exit(1);
                });
            debug!(count = templates.len(), "templates loaded");
            Box::new(TemplateBackend::new(
                registry_from_config(config),
                templates,
                TemplateRenderer::from(&config.templates),
            ))
        }
        BackendKind::Markdown => Box::new(MarkdownBackend),
    };

    let reports = publish::generate_site(
        &config.paths.wiki_dir,
        &config.paths.site_dir,
        backend.as_ref(),
        &config.generate.tool_subdir,
    )
    .unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });

    if reports.is_empty() {
        println!(
            "No documents found in {}",
            config.paths.wiki_dir.display()
        );
    }
    for report in &reports {
        print_generate_report(report);
    }

    if reports.iter().any(FileReport::is_failure) {
        std::process::exit(1);
    }
}

fn print_generate_report(report: &FileReport) {
    println!("Processing {}...", report.source.display());
    match &report.outcome {
        FileOutcome::Written { path, fallback } => {
            if let Some(fallback) = fallback {
                eprintln!(
                    "  -> Warning: template '{}' not found, using '{}'",
                    fallback.requested, fallback.used
                );
            }
            println!("  -> Generated {}", path.display());
        }
        FileOutcome::Skipped => println!("  -> Skipped"),
        FileOutcome::Failed(err) => eprintln!("  -> Error: {err}"),
    }
}

fn handle_inspect_command(file: &str, format: &str, config: &WikiConfig) {
    let registry = registry_from_config(config);
    let name = file_name(file);
    let source = fs::read_to_string(PathBuf::from(file)).unwrap_or_else(|e| {
        eprintln!("Error reading file '{file}': {e}");
        std::process::exit(1);
    });

    let output = match format {
        "json" => registry.extract(name, &source).map(|intermediate| {
            intermediate.map(|intermediate| {
                serde_json::to_string_pretty(&intermediate).unwrap_or_else(|e| {
                    eprintln!("Serialization error: {e}");
                    std::process::exit(1);
                })
            })
        }),
        _ => registry.deconstruct(name, &source),
    };

    match output {
        Ok(Some(text)) => println!("{text}"),
        Ok(None) => {
            eprintln!("No deconstruction logic for {name}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn handle_classify_command(file: &str, config: &WikiConfig) {
    let rules = VariantRules::from(&config.routing);
    println!("{}", rules.classify(file_name(file)));
}

fn handle_codecs_command(config: &WikiConfig) {
    let registry = registry_from_config(config);
    println!("Page codecs:\n");
    for codec in registry.codecs() {
        println!(
            "  {:<8} {:<20} {}",
            codec.name(),
            codec.template(),
            codec.description()
        );
    }
}
