use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

mod config;
mod context;
mod controller;
mod ui;

use anyhow::{Context, Result};
use booking_core::{
    CatalogStore, ChannelSink, Clock, ConfirmPolicy, FanoutSink, InMemoryCatalog, LogSink,
    StepController, SystemClock,
};
use clap::Parser;
use crossbeam_channel::{bounded, Receiver};
use shared::protocol::ConfirmationSummary;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{load_settings, LoadedSettings, Settings},
    context::{AppContext, ContextChange},
    controller::{
        events::parse_command,
        orchestration::{BookingApp, Flow},
    },
    ui::{widgets, LayoutKind, Theme},
};

const CONFIRMATION_QUEUE_DEPTH: usize = 8;

#[derive(Parser, Debug)]
#[command(name = "wellness-booking", about = "Book a counselling session")]
struct Args {
    /// Settings file; defaults to ./wellness.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    layout: Option<LayoutKind>,
    /// TOML catalog of counselors and time slots; the built-in seed otherwise.
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long, value_enum)]
    theme: Option<Theme>,
    /// Confirm even if the counselor or slot went unavailable after selection.
    #[arg(long)]
    no_revalidate: bool,
    #[arg(long)]
    no_color: bool,
    /// Print outbound booking events as JSON lines instead of drawing screens.
    #[arg(long)]
    emit_json: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(layout) = self.layout {
            settings.layout = layout;
        }
        if let Some(catalog) = &self.catalog {
            settings.catalog_path = Some(catalog.clone());
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if self.no_revalidate {
            settings.revalidate_on_confirm = false;
        }
        if self.no_color {
            settings.color = false;
        }
        if self.emit_json {
            settings.emit_json = true;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let LoadedSettings {
        mut settings,
        warnings,
    } = load_settings(args.config.as_deref())?;
    args.apply(&mut settings);

    let filter = EnvFilter::try_new(&settings.log_filter)
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let catalog = match &settings.catalog_path {
        Some(path) => InMemoryCatalog::load(path)
            .with_context(|| format!("failed to load catalog '{}'", path.display()))?,
        None => InMemoryCatalog::seed(),
    };
    let policy = ConfirmPolicy {
        revalidate_availability: settings.revalidate_on_confirm,
    };
    let controller = StepController::with_policy(catalog, SystemClock, policy);

    let (confirm_tx, confirm_rx) = bounded(CONFIRMATION_QUEUE_DEPTH);
    let sink = FanoutSink::new()
        .with(LogSink)
        .with(ChannelSink::new(confirm_tx));

    let context = AppContext::new(settings.theme, settings.color, settings.streak_days);
    let mut app = BookingApp::new(controller, settings.layout.build(), context, Box::new(sink));
    let context_changes = app.context_mut().subscribe();
    tracing::info!(
        layout = ?settings.layout,
        revalidate = settings.revalidate_on_confirm,
        "booking screen ready"
    );

    run(&mut app, &settings, &confirm_rx, &context_changes)
}

fn run<S: CatalogStore, C: Clock>(
    app: &mut BookingApp<S, C>,
    settings: &Settings,
    confirmations: &Receiver<ConfirmationSummary>,
    context_changes: &Receiver<ContextChange>,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    if !settings.emit_json {
        writeln!(stdout, "{}", app.render())?;
    }

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let flow = match parse_command(&line, app.controller().today()) {
            Ok(event) => app.route(event),
            Err(err) => {
                app.warn(err.to_string());
                Flow::Continue
            }
        };

        for change in context_changes.try_iter() {
            tracing::debug!(?change, "app context changed");
        }

        let confirmed: Vec<ConfirmationSummary> = confirmations.try_iter().collect();
        if settings.emit_json {
            for event in app.drain_events() {
                writeln!(stdout, "{}", serde_json::to_string(&event)?)?;
            }
        } else {
            app.drain_events();
            writeln!(stdout, "{}", app.render())?;
            for summary in &confirmed {
                writeln!(stdout, "\n{}", widgets::confirmation_dialog(app.context(), summary))?;
            }
        }
        stdout.flush()?;

        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}
