//! `lgc`: predicate consistency checker for logic-query syntax trees.

use lgc_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lgcc::commands::{check_file, explain_error, map_file, CommandOptions, OutputFormat};
use lgcc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let options = parse_options(&args[2..]);
            match check_file(&options) {
                Ok(summary) if summary.is_clean() => {
                    if options.format == OutputFormat::Text {
                        println!(
                            "OK: {} ({} rules, all predicate calls consistent)",
                            options.input_name(),
                            summary.rules
                        );
                    }
                }
                Ok(_) => std::process::exit(1),
                Err(err) => fail(&err),
            }
        }
        "map" => {
            let options = parse_options(&args[2..]);
            if let Err(err) = map_file(&options) {
                fail(&err);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lgc {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: lgc explain <ERROR_CODE>");
                eprintln!("Example: lgc explain E1004");
                std::process::exit(1);
            }
            match explain_error(&args[2]) {
                Ok(doc) => println!("{doc}"),
                Err(err) => fail(&err),
            }
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_options(args: &[String]) -> CommandOptions {
    match CommandOptions::parse(args) {
        Ok(options) => options,
        Err(err) => fail(&err),
    }
}

/// Report a fatal error on stderr and exit with status 1.
fn fail(err: &CliError) -> ! {
    tracing::debug!(error = ?err, "command failed");
    if let Some(diagnostic) = err.to_diagnostic() {
        let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
        let mut emitter =
            TerminalEmitter::with_color_mode(std::io::stderr(), ColorMode::Auto, is_tty);
        emitter.emit(&diagnostic);
        emitter.flush();
    } else {
        eprintln!("error: {err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!();
            eprintln!("Run `lgc help` for usage.");
        }
    }
    std::process::exit(1);
}

fn print_usage() {
    println!("lgc: predicate consistency checker for logic-query syntax trees");
    println!();
    println!("Usage: lgc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check [tree.json]    Report inconsistent predicate calls");
    println!("  map [tree.json]      List every predicate call with field types");
    println!("  explain <code>       Explain a diagnostic code (e.g., E1004)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("The syntax tree is read from standard input when no file (or `-`) is given.");
    println!();
    println!("Options (check, map):");
    println!("  --catalog=<file>         JSON object of table path -> [{{field, type}}]");
    println!("  --schema-command=<cmd>   Run `<cmd> <sql>` to list a table's columns");
    println!();
    println!("Options (check):");
    println!("  --format=<fmt>      Report format: text (default), json");
    println!("  --color=<mode>      Colors: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Log filter (default: warn)");
    println!("  LGC_LOG_TREE=1      Hierarchical log output");
    println!();
    println!("Examples:");
    println!("  logica query.l parse | lgc check");
    println!("  lgc check tree.json --catalog=tables.json");
    println!("  lgc check tree.json --format=json");
    println!("  lgc map tree.json --schema-command=\"bq query --format=json --nouse_legacy_sql\"");
    println!("  lgc explain E1004");
}
