use hexagony::trace::DEFAULT_TRACE_PATH;
use hexagony::{Debugger, Executor, ExecutorConfig, HexError, ProgramGrid, RunStatus, TraceLogger};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: hexagony <file.hxg> [options]");
        println!();
        println!("Options:");
        println!("  --debug         Start paused in step mode");
        println!(
            "  --trace [file]  Log every executed instruction (default: {})",
            DEFAULT_TRACE_PATH
        );
        std::process::exit(1);
    }

    let filename = &args[1];
    let force_debug = args.contains(&"--debug".to_string());

    let source = match fs::read(filename) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{}", HexError::io("open", Some(filename), &e));
            std::process::exit(1);
        }
    };

    let program = ProgramGrid::parse(&source);
    let config = ExecutorConfig {
        force_debug,
        ..ExecutorConfig::default()
    };
    let mut executor = Executor::with_config(program, config);
    executor.debugger = Debugger::interactive();

    if let Some(idx) = args.iter().position(|a| a == "--trace") {
        let trace_path = if idx + 1 < args.len() && !args[idx + 1].starts_with('-') {
            args[idx + 1].clone()
        } else {
            DEFAULT_TRACE_PATH.to_string()
        };
        match TraceLogger::with_path(&trace_path) {
            Ok(logger) => executor.set_trace(logger),
            Err(e) => eprintln!("Warning: could not open trace log: {}", e),
        }
    }

    executor.run();

    if let RunStatus::Error(err) = &executor.status {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
