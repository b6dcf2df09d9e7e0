//! Entry point for the line-driven dashboard shell.
//!
//! The shell is a thin driver: a typed line edits the review text, a line
//! starting with `/` navigates, `:submit` submits, `:quit` exits. All logic
//! lives in the library; the loop only feeds events in and prints the
//! resulting page.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use sentiboard::app::AppController;
use sentiboard::app::view_model::{self, PageView};
use sentiboard::{config, logging};

/// How long to wait for outstanding network work after each event.
const SETTLE_DEADLINE: Duration = Duration::from_secs(20);
const POLL_INTERVAL: Duration = Duration::from_millis(25);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_or_default()?;
    if let Err(err) = logging::init(config.debug) {
        eprintln!("Logging disabled: {err}");
    }
    tracing::info!(
        api_base = config.api_base(),
        host = config.host,
        "Starting dashboard"
    );

    let mut controller = AppController::new(&config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    render(&controller, &mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim_end() {
            ":quit" | ":q" => break,
            ":submit" => controller.submit(),
            input if input.starts_with('/') => controller.navigate(input),
            input => controller.set_review_text(input),
        }
        settle(&mut controller);
        render(&controller, &mut stdout)?;
    }
    Ok(())
}

/// Poll job results until the controller goes quiet or the deadline passes.
fn settle(controller: &mut AppController) {
    let deadline = Instant::now() + SETTLE_DEADLINE;
    loop {
        controller.poll_jobs();
        if !controller.busy() || Instant::now() >= deadline {
            break;
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

fn render(controller: &AppController, out: &mut impl Write) -> std::io::Result<()> {
    match view_model::page_view(&controller.ui) {
        PageView::Home(view) => {
            writeln!(out, "-- Home --")?;
            if view.pending {
                writeln!(out, "analyzing...")?;
            } else if let Some(error) = &view.error {
                writeln!(out, "error: {error}")?;
            } else if !view.probability_label.is_empty() {
                let color = view.progress_color.unwrap_or("none");
                writeln!(
                    out,
                    "sentiment: {} [{color}]  rating: {}/5",
                    view.probability_label, view.rating
                )?;
            }
            let submit = if view.submit_enabled { "enabled" } else { "disabled" };
            writeln!(out, "submit: {submit}")?;
        }
        PageView::Admin(view) => {
            writeln!(out, "-- Admin --")?;
            if view.loading {
                writeln!(out, "loading reviews...")?;
            } else if let Some(error) = &view.error {
                writeln!(out, "error: {error}")?;
            } else {
                writeln!(out, "{}", view.columns.join(" | "))?;
                for row in &view.rows {
                    writeln!(out, "{}", row.join(" | "))?;
                }
            }
            writeln!(out, "back: {}", view.home_link)?;
        }
        PageView::NotFound(view) => {
            writeln!(out, "-- Not found --")?;
            writeln!(out, "go home: {}", view.home_link)?;
        }
    }
    let status = &controller.ui.status;
    if !status.text.is_empty() {
        writeln!(out, "[{:?}] {}", status.tone, status.text)?;
    }
    out.flush()
}
