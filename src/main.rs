mod cli;

use namesmith::{
    config, metadata,
    notifications::{Notification, NotificationManager},
    rename::{RenameAction, Renamer, RunMode, RunReport},
    scanner::RenameScheduler,
};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "namesmith=trace,namesmith_parser=trace".to_string()
        } else {
            "namesmith=info,namesmith_parser=info".to_string()
        }
    });

    // Logs go to stderr so `--json` output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    // One file at a time; a single-threaded runtime is all the run needs
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(run(cli))
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load_config_or_default(cli.config.as_deref())?;
    let notifications = NotificationManager::new(&config.notifications);

    let resolver = metadata::resolver_from_config(&config.resolver)?;
    tracing::debug!("Using '{}' metadata resolver", resolver.name());
    let renamer = Renamer::from_config(resolver, &config);

    let mut scheduler = RenameScheduler::from_config(renamer, &config);
    if let Some(secs) = cli.lookup_delay {
        scheduler = scheduler.with_lookup_delay(Duration::from_secs(secs));
    }

    let mode = if cli.execute {
        RunMode::Execute
    } else {
        RunMode::Preview
    };

    let report = match scheduler.run(&cli.directory, mode).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{}", e);
            notifications
                .notify(&Notification::failure(e.to_string()))
                .await;
            return Err(e.into());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    notifications
        .notify(&Notification::from_report(&report))
        .await;

    Ok(())
}

fn print_report(report: &RunReport) {
    if report.mode == RunMode::Preview {
        println!("[PREVIEW] No files were changed. Re-run with --execute to apply.\n");
    }

    for entry in &report.entries {
        let source = entry
            .source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| entry.source.display().to_string());
        let tag = entry
            .action
            .map(|a| a.to_string())
            .unwrap_or_else(|| "error".to_string());

        match (&entry.target, &entry.error) {
            (Some(target), None) => {
                let target = target
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                let marker = if entry.action == Some(RenameAction::LocalFallback) {
                    " (local fallback)"
                } else {
                    ""
                };
                println!("  {} -> {}{}", source, target, marker);
            }
            (_, Some(error)) => println!("  ✗ {} [{}]: {}", source, tag, error),
            (None, None) => println!("  {} [{}]", source, tag),
        }
    }

    println!();
    println!("{}", report.summary());
    if report.skipped > 0 {
        println!("  Skipped: {}", report.skipped);
    }
}
