mod args;

use args::Cli;
use clap::Parser;

use std::process::ExitCode;
use std::time::Instant;

use log::info;
use mcrypt_interop::{KeySize, Rijndael128, TrialReport, Verifier};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match interop_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn interop_cli() -> mcrypt_interop::Result<()> {
    let args = Cli::parse();
    let key_size: KeySize = args.key_size.into();

    info!(
        "checking {} against aes-{} for {} runs{}",
        Rijndael128::CIPHER,
        key_size.bits(),
        args.runs,
        if args.fresh_keys { " (fresh key per run)" } else { "" }
    );

    let start = Instant::now();

    let report: TrialReport = if args.fresh_keys {
        mcrypt_interop::run_fresh_trials(key_size, args.runs)?
    } else {
        let mut verifier = Verifier::with_parts(
            mcrypt_interop::SecureRandom::from_os()?,
            key_size,
            Rijndael128,
            mcrypt_interop::AesToolkit,
        )?;
        mcrypt_interop::run_trials(&mut verifier, args.runs)?
    };

    info!(
        "{} trials, {} mode checks in {} ms",
        report.trials,
        report.checks,
        start.elapsed().as_millis()
    );
    println!("done");
    Ok(())
}
