//! Plain-text and JSON console output for search results.

use crate::model::{Notification, SearchResult};
use crate::types::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Format every notification as its own text block, lazily and in order.
pub fn render(result: &SearchResult) -> impl Iterator<Item = String> + '_ {
    result.notifications.iter().map(render_notification)
}

/// Page and element totals reported by the server.
pub fn render_totals(result: &SearchResult) -> String {
    format!(
        "Total Pages: {}\nTotal Elements: {}",
        result.total_pages, result.total_elements
    )
}

fn render_notification(notification: &Notification) -> String {
    let mut block = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(block, "Notification ID: {}", notification.notif_id);
    let _ = writeln!(block, "EC Validation Date: {}", notification.ec_validation_date);
    let _ = writeln!(block, "Reference: {}", notification.reference);
    let _ = writeln!(
        block,
        "Notifying Country: {} ({})",
        notification.notifying_country.organization_name, notification.notifying_country.iso_code
    );
    let _ = writeln!(block, "Subject: {}", notification.subject);
    let _ = writeln!(block, "Product Category: {}", notification.product_category.description);
    let _ = writeln!(block, "Product Type: {}", notification.product_type.description);
    let _ = writeln!(
        block,
        "Notification Classification: {}",
        notification.notification_classification.description
    );
    let _ = writeln!(block, "Risk Decision: {}", notification.risk_decision.description);
    let _ = writeln!(block, "Published: {}", notification.published);
    let _ = writeln!(block, "Origin Countries:");
    for country in &notification.origin_countries {
        let _ = writeln!(block, "  - {} ({})", country.organization_name, country.iso_code);
    }

    block
}

/// Console output handler.
pub struct ConsoleOutput {
    json_mode: bool,
}

impl ConsoleOutput {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }

    /// Write the report (or JSON) for `result` to stdout.
    pub fn print_result(&self, result: &SearchResult) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_result(&mut out, result)?;
        out.flush()?;
        Ok(())
    }

    /// Write the report (or JSON) for `result` to `out`.
    pub fn write_result<W: Write>(&self, out: &mut W, result: &SearchResult) -> Result<()> {
        if self.json_mode {
            writeln!(out, "{}", to_json(result))?;
            return Ok(());
        }

        writeln!(out, "{}", "Notifications:".bold())?;
        for block in render(result) {
            writeln!(out, "{}", block)?;
        }
        writeln!(out, "{}", render_totals(result))?;
        Ok(())
    }

    /// Spinner on stderr while the search is in flight. None in JSON mode.
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.json_mode {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}

/// Write the result as pretty JSON to `path`.
pub fn write_json_file(path: &Path, result: &SearchResult) -> Result<()> {
    std::fs::write(path, to_json(result))?;
    Ok(())
}

fn to_json(result: &SearchResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_default()
}
