//! Rendering reports and submissions for the terminal.

use std::fmt::Write;

use clap::ValueEnum;
use contact_core::{Delivery, FormReport, Submission};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render_report(report: &FormReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(report_text(report)),
    }
}

pub fn render_submission(submission: &Submission, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(submission)?);
    }

    Ok(match submission {
        Submission::Rejected { report, .. } => report_text(report),
        Submission::Delivered { delivery, .. } => match delivery {
            Delivery::Link { url } => url.clone(),
            Delivery::Request {
                endpoint,
                content_type,
                body,
            } => format!("POST {endpoint}\nContent-Type: {content_type}\n\n{body}"),
        },
    })
}

fn report_text(report: &FormReport) -> String {
    let mut out = String::new();
    for (field, result) in report.iter() {
        let status = if result.valid { "ok" } else { result.message.as_str() };
        let _ = writeln!(out, "{:<10} {}", field.label(), status);
    }

    if report.is_valid() {
        out.push_str("Formulario válido");
    } else {
        let _ = write!(out, "{} campo(s) inválido(s)", report.errors().len());
    }
    out
}
