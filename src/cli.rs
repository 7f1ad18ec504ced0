//! Command-line front end: a line-oriented stand-in for the presentation
//! layer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, ConfigError};
use crate::error::Result;
use crate::ui::events::{stdin_events, LineMode};
use crate::ui::registration::{
    FormField, FormUpdate, Gender, Registration, RegistrationFormModel, SubmitError,
};
use crate::ui::runtime::Session;

#[derive(Debug, Parser)]
#[command(
    name = "echoform",
    about = "Debounced text echo and live-validated registration form",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/echoform/config.toml).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Override the echo debounce window in milliseconds.
    #[arg(long = "debounce-ms", value_name = "MS", global = true)]
    pub debounce_ms: Option<u64>,

    /// Log filter used when ECHOFORM_LOG is unset.
    #[arg(long = "log-level", default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Echo stdin lines back once typing pauses.
    Echo,

    /// Drive the registration form with `field=value` lines on stdin.
    Form,

    /// Validate one set of registration values.
    Register(RegisterArgs),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub password: String,

    /// male, female or other.
    #[arg(long, default_value_t = Gender::Male)]
    pub gender: Gender,

    /// Submit when the form is valid.
    #[arg(long)]
    pub submit: bool,

    /// Print the form state as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Commands::Echo => block_on(run_echo(&config)),
        Commands::Form => block_on(run_form(&config)),
        Commands::Register(args) => run_register(&config, args),
    }
}

/// Load the config file and apply command-line overrides.
pub fn load_config(cli: &Cli) -> std::result::Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(ms) = cli.debounce_ms {
        config.echo.debounce_ms = ms;
    }
    config.validate()?;
    Ok(config)
}

fn block_on(fut: impl std::future::Future<Output = Result<()>>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(fut);
    // The stdin reader may still be parked in a blocking read.
    runtime.shutdown_background();
    result
}

async fn run_echo(config: &Config) -> Result<()> {
    let mut session = Session::new(config);
    session
        .echo
        .output()
        .subscribe(|output| println!("{output}"))
        .detach();

    run_session(&mut session, LineMode::Echo).await;
    Ok(())
}

async fn run_form(config: &Config) -> Result<()> {
    let mut session = Session::new(config);
    session.form = RegistrationFormModel::new(&config.registration).with_submitter(
        |registration: &Registration| -> std::result::Result<(), SubmitError> {
            println!("submitted: {} <{}>", registration.name, registration.email);
            Ok(())
        },
    );

    // Form mode has no echo field.
    session.echo.cancel_pending();

    let form = &session.form;
    form.name_valid()
        .subscribe(|v| println!("name_valid: {v}"))
        .detach();
    form.email_valid()
        .subscribe(|v| println!("email_valid: {v}"))
        .detach();
    form.password_valid()
        .subscribe(|v| println!("password_valid: {v}"))
        .detach();
    form.form_valid()
        .subscribe(|v| println!("form_valid: {v}"))
        .detach();

    run_session(&mut session, LineMode::Form).await;
    Ok(())
}

async fn run_session(session: &mut Session, mode: LineMode) {
    let mut events = stdin_events(mode);
    let interrupted = tokio::select! {
        reason = session.run(&mut events) => {
            tracing::debug!(?reason, "session finished");
            false
        }
        Ok(()) = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        session.echo.cancel_pending();
        tracing::info!("interrupted");
    }
}

fn run_register(config: &Config, args: RegisterArgs) -> Result<()> {
    let mut model = RegistrationFormModel::new(&config.registration);
    model.apply(
        FormUpdate::new()
            .name(args.name)
            .email(args.email)
            .password(args.password)
            .gender(args.gender),
    );
    let state = model.state();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    } else {
        println!("name_valid: {}", state.name_valid);
        println!("email_valid: {}", state.email_valid);
        println!("password_valid: {}", state.password_valid);
        println!("form_valid: {}", state.form_valid);
        for field in [FormField::Name, FormField::Email, FormField::Password] {
            if let Some(hint) = state.field_error(field) {
                println!("hint: {hint}");
            }
        }
    }

    if args.submit {
        if state.form_valid {
            model.submit()?;
            println!("submit: ok");
        } else {
            println!("submit: disabled");
        }
    }
    Ok(())
}
