//! narrowc CLI
//!
//! Runs the narrowing scenarios: `list`, `demo <name>`, `all`.

use narrowc::commands::{list_scenarios, parse_dispatch_options, run_all, run_demo, CommandError};

fn main() {
    narrowc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "list" => Ok(list_scenarios()),
        "demo" => {
            let Some(name) = args.get(2).filter(|a| !a.starts_with('-')) else {
                eprintln!("Usage: narrowc demo <name> [--loose] [--tag-field=<name>]");
                eprintln!();
                eprintln!("Run `narrowc list` to see the scenario names.");
                std::process::exit(1);
            };
            parse_dispatch_options(&args[3..]).and_then(|config| run_demo(name, &config))
        }
        "all" => parse_dispatch_options(&args[2..]).and_then(|config| run_all(&config)),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => report(&err),
    }
}

fn report(err: &CommandError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("narrowc - runtime type narrowing demonstrations");
    println!();
    println!("Usage: narrowc <command> [options]");
    println!();
    println!("Commands:");
    println!("  list                 List the available scenarios");
    println!("  demo <name>          Run one scenario");
    println!("  all                  Run every scenario");
    println!("  help                 Show this message");
    println!();
    println!("Options (demo, all):");
    println!("  --loose              Treat null and undefined as one shape");
    println!("  --strict             Keep null and undefined apart (default)");
    println!("  --tag-field=<name>   Field holding the shape tag (default: kind)");
    println!();
    println!("Set RUST_LOG=debug to trace dispatch; add NARROW_LOG_TREE=1 for a tree view.");
}
