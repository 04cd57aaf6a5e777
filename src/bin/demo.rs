//! Demo binary for btext E2E testing.
//!
//! This binary exercises btext's public API for PTY-based integration tests.
//! Each subcommand demonstrates a specific feature.

use btext::{
    Console, Direction, InputOptions, PrintOptions, StderrSink, global, resolve, set_warning_sink,
};
use colored::Colorize;
use serde_json::json;
use std::env;
use std::sync::Arc;

fn usage() -> ! {
    eprintln!("{} btext-demo <command> [args...]", "Usage:".bold());
    eprintln!("Commands:");
    eprintln!("  print <color> <args...>");
    eprintln!("  multi");
    eprintln!("  animate <left|right> <delay> <text> [color]");
    eprintln!("  animate-multi");
    eprintln!("  random <spec> <text>");
    eprintln!("  options <json> <args...>");
    eprintln!("  input <color> <prompt>");
    eprintln!("  restore");
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    set_warning_sink(Arc::new(StderrSink));
    let console = Console::stdio();

    let result = match args[1].as_str() {
        "print" => {
            let color = args.get(2).map(|s| s.as_str()).unwrap_or("white");
            let rest = args.get(3..).unwrap_or_default();
            console
                .print_strs(rest, &PrintOptions::new().color(color))
                .map(drop)
        }

        "multi" => console
            .print_strs(
                &["a", "+color=red", "b", "+color=blue", "c"],
                &PrintOptions::default(),
            )
            .map(drop),

        "animate" => {
            let direction = args
                .get(2)
                .and_then(|s| Direction::parse(s))
                .unwrap_or_default();
            let delay = args.get(3).map(|s| s.as_str()).unwrap_or("20ms");
            let text = args.get(4).map(|s| s.as_str()).unwrap_or("hello");
            let color = args.get(5).map(|s| s.as_str()).unwrap_or("cyan");
            let opts = PrintOptions::new()
                .color(color)
                .animated(true)
                .direction(direction)
                .delay(delay);
            console.print_strs(&[text], &opts).map(drop)
        }

        "animate-multi" => {
            // Two segments: printed statically with a warning on stderr
            let opts = PrintOptions::new().animated(true).delay("1s");
            console
                .print_strs(&["left", "+color=green", "right"], &opts)
                .map(drop)
        }

        "random" => {
            let spec = args.get(2).map(|s| s.as_str()).unwrap_or("random");
            let text = args.get(3).map(|s| s.as_str()).unwrap_or("rainbow");
            println!("{}", resolve(spec).apply(text));
            Ok(())
        }

        "options" => {
            let opts_json = args.get(2).map(|s| s.as_str()).unwrap_or("{}");
            let value = serde_json::from_str(opts_json).unwrap_or(json!({}));
            let rest = args.get(3..).unwrap_or_default();
            console
                .print_strs(rest, &PrintOptions::from_json(&value))
                .map(drop)
        }

        "input" => {
            let color = args.get(2).map(|s| s.as_str()).unwrap_or("green");
            let prompt = args.get(3).map(|s| s.as_str()).unwrap_or("name? ");
            console
                .input(prompt, &InputOptions::new().color(color))
                .map(|line| println!("got: [{line}]"))
        }

        "restore" => {
            // Colored while installed, plain after restore
            global::install(Arc::new(console));
            let installed = global::print(&[&"colored"], &PrintOptions::new().color("red"));
            global::restore();
            let plain = global::print(&[&"plain", &"+color=red"], &PrintOptions::new().color("red"));
            installed.and(plain).map(drop)
        }

        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{}", format!("error: {e}").red());
        std::process::exit(1);
    }
}
