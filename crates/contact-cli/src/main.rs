//! `contact`: validate contact form submissions and build delivery links.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use contact_core::{
    submit, validate_form, ContactConfig, ContactForm, DeliverySink, FormBackendSink,
    WhatsAppSink,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "contact")]
#[command(about = "Contact form validation and delivery")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form and report every invalid field
    Validate {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Validate a form and build its delivery artifact
    Submit {
        #[command(flatten)]
        form: FormArgs,

        /// Delivery configuration (YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Where to deliver the form
        #[arg(long, value_enum, default_value_t = SinkKind::Whatsapp)]
        sink: SinkKind,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SinkKind {
    /// Pre-filled WhatsApp chat link
    Whatsapp,
    /// JSON request for a hosted form backend
    FormBackend,
}

/// Form values, read from a file and/or flags. Flags win over the file.
#[derive(Args, Debug)]
struct FormArgs {
    /// Form file (YAML or JSON)
    #[arg(long)]
    file: Option<PathBuf>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    message: Option<String>,
}

impl FormArgs {
    fn load(self) -> anyhow::Result<ContactForm> {
        let mut form = match &self.file {
            Some(path) => ContactForm::from_file(path)
                .with_context(|| format!("loading form from {}", path.display()))?,
            None => ContactForm::default(),
        };

        if self.name.is_some() {
            form.name = self.name;
        }
        if self.email.is_some() {
            form.email = self.email;
        }
        if self.phone.is_some() {
            form.phone = self.phone;
        }
        if self.message.is_some() {
            form.message = self.message;
        }

        Ok(form)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    initialise_logging(cli.verbose);

    match cli.command {
        Commands::Validate { form } => {
            let form = form.load()?;
            let report = validate_form(&form);
            println!("{}", output::render_report(&report, cli.format)?);
            Ok(exit_code(report.is_valid()))
        }
        Commands::Submit { form, config, sink } => {
            let form = form.load()?;
            let config = match config {
                Some(path) => ContactConfig::from_file(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => ContactConfig::default(),
            };

            let sink = build_sink(sink, &config)?;
            let submission = submit(&form, sink.as_ref())?;
            println!("{}", output::render_submission(&submission, cli.format)?);
            Ok(exit_code(submission.is_delivered()))
        }
    }
}

fn build_sink(kind: SinkKind, config: &ContactConfig) -> anyhow::Result<Box<dyn DeliverySink>> {
    Ok(match kind {
        SinkKind::Whatsapp => Box::new(WhatsAppSink::from_config(config)),
        SinkKind::FormBackend => Box::new(FormBackendSink::from_config(config)?),
    })
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn initialise_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so stdout stays clean for links and JSON.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    // Ignore the error if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
