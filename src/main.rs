//! arg-delimiter entry point.

use arg_delimiter::audit::AuditLogger;
use arg_delimiter::config::Config;
use arg_delimiter::input::SplitRequest;
use arg_delimiter::output::{format_error, format_response};

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut input_str = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_str) {
        eprintln!("ERROR: failed to read stdin: {}", e);
        return ExitCode::from(2);
    }

    let request = match SplitRequest::parse(&input_str) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::from(2);
        }
    };

    let cwd = std::env::current_dir().ok();
    let compiled = match Config::load(cwd.as_deref()).and_then(Config::compile) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::from(1);
        }
    };

    let outcome = request.split(&compiled.delimiter);

    // Audit failures never change the outcome.
    if compiled.raw.audit.enabled
        && let Some(path) = &compiled.raw.audit.path
        && let Ok(mut logger) = AuditLogger::open(Path::new(path))
    {
        let _ = logger.log_split(&request, &outcome, &compiled.redact_patterns);
    }

    match &outcome {
        Ok(arguments) => match format_response(arguments) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("ERROR: failed to encode response: {}", e);
                ExitCode::from(2)
            }
        },
        Err(e) => {
            eprintln!("{}", format_error(e));
            ExitCode::from(2)
        }
    }
}
