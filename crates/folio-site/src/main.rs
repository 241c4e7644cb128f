#![forbid(unsafe_code)]

//! folio-site binary entry point.

use std::io::Write;
use std::process::ExitCode;

use folio_content::Route;
use folio_extras::logging;
use folio_site::cli::{self, Command, Opts};
use folio_site::{SiteGenerator, SiteRenderer};
use tracing::error;

fn main() -> ExitCode {
    let opts = match Opts::parse() {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            println!("{}", cli::HELP_TEXT);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("folio-site {}", cli::VERSION);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Run with --help for usage information.");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = logging::init(&opts.log_config()) {
        eprintln!("{err}");
        return ExitCode::from(2);
    }

    match &opts.route {
        Some(path) => render_one(&opts, path),
        None => generate(&opts),
    }
}

fn render_one(opts: &Opts, path: &str) -> ExitCode {
    let route = Route::parse(path);
    let html = match SiteRenderer::new(opts.endpoint.as_str()).render(&route) {
        Ok(html) => html,
        Err(err) => {
            error!(%route, %err, "render failed");
            return ExitCode::from(1);
        }
    };
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = stdout.write_all(html.as_bytes()) {
        error!(%err, "writing to stdout failed");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn generate(opts: &Opts) -> ExitCode {
    let generator = SiteGenerator::new(&opts.out, &opts.assets, opts.endpoint.as_str());
    match generator.generate() {
        Ok(report) => {
            for path in &report.skipped {
                eprintln!("skipped missing asset: {}", path.display());
            }
            println!(
                "wrote {} pages and {} assets to {}",
                report.pages,
                report.assets,
                generator.out_dir().display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "generation failed");
            eprintln!("generation failed: {err}");
            ExitCode::from(1)
        }
    }
}
