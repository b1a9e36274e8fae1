use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use reservable_dates_api::{create_router, AppState, CorsOrigins};
use reservable_dates_core::calculator::{
    ReservationPlan, ReservationPolicy, ReservationWindowCalculator, DEFAULT_BOOKING_LEAD_DAYS,
    DEFAULT_CYCLES_AHEAD,
};
use reservable_dates_core::clock::{Clock, FixedClock, SystemClock};
use reservable_dates_core::error::ValidationErrors;
use reservable_dates_core::request::RawShiftRequest;
use reservable_dates_core::service::ReservableDatesService;
use reservable_dates_core::validator::{InputValidator, ValidatorOptions};
use reservable_dates_core::window::DateWindow;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "reservable-dates",
    about = "Find weekdays that are both reservable and inside the next bookable shift cycle"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// IANA timezone used to decide what "today" is
    #[arg(long, env = "RESERVABLE_DATES_TIMEZONE", default_value = "UTC", global = true)]
    timezone: String,

    /// Days before a stay date at which reservations open
    #[arg(long, default_value_t = DEFAULT_BOOKING_LEAD_DAYS, global = true)]
    booking_lead_days: i64,

    /// Whole shift cycles between the current cycle and the target cycle
    #[arg(long, default_value_t = DEFAULT_CYCLES_AHEAD, global = true)]
    cycles_ahead: i64,

    /// Reject a shift start date earlier than today
    #[arg(long, global = true)]
    reject_past_shift_start: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute reservable dates for one shift schedule
    Calculate {
        /// First day of the current shift cycle (YYYY-MM-DD)
        #[arg(long)]
        shift_start_date: String,

        /// Publication deadline of the next cycle (YYYY-MM-DD)
        #[arg(long)]
        due_date: String,

        /// Length of one shift cycle in days
        #[arg(long, allow_hyphen_values = true)]
        due_date_rule: String,

        /// Evaluate as of this date instead of the current date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Also print the reservable and target shift windows
        #[arg(long)]
        explain: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "RESERVABLE_DATES_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to bind
        #[arg(long, env = "RESERVABLE_DATES_PORT", default_value_t = 3000)]
        port: u16,

        /// Allowed CORS origins (comma-separated, any origin if omitted)
        #[arg(
            long = "allow-origin",
            env = "RESERVABLE_DATES_ALLOW_ORIGINS",
            value_delimiter = ','
        )]
        allow_origins: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn build_service(cli: &Cli, today: Option<NaiveDate>) -> Result<ReservableDatesService> {
    let policy = ReservationPolicy {
        booking_lead_days: cli.booking_lead_days,
        cycles_ahead: cli.cycles_ahead,
    };
    policy.validate()?;

    let clock: Arc<dyn Clock> = match today {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(
            SystemClock::from_tz_name(&cli.timezone)
                .with_context(|| format!("failed to configure clock for {}", cli.timezone))?,
        ),
    };

    Ok(ReservableDatesService::new(
        InputValidator::new(ValidatorOptions {
            reject_past_shift_start: cli.reject_past_shift_start,
        }),
        ReservationWindowCalculator::new(policy),
        clock,
    ))
}

fn describe_window(window: Option<&DateWindow>) -> String {
    match window {
        Some(w) if w.is_empty() => format!("{w} (empty)"),
        Some(w) => w.to_string(),
        None => "out of calendar range".to_string(),
    }
}

fn render_text(plan: &ReservationPlan, explain: bool) -> String {
    let mut out = String::new();
    if explain {
        out.push_str(&format!(
            "Reservable window:   {}\n",
            describe_window(plan.reservable_window.as_ref())
        ));
        out.push_str(&format!(
            "Target shift window: {}\n",
            describe_window(plan.target_shift_window.as_ref())
        ));
    }
    if plan.dates.is_empty() {
        out.push_str("No reservable dates.\n");
    }
    for date in &plan.dates {
        out.push_str(&format!("{}\n", date.format("%Y-%m-%d (%a)")));
    }
    out
}

fn render_json(plan: &ReservationPlan, explain: bool) -> Result<String> {
    let value = if explain {
        serde_json::to_value(plan)?
    } else {
        serde_json::json!({ "dates": plan.dates })
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_errors(errors: &ValidationErrors, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(errors
            .messages()
            .iter()
            .map(|m| format!("ERROR: {m}\n"))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(
            &serde_json::json!({ "errors": errors.messages() }),
        )?),
    }
}

fn cmd_calculate(
    service: &ReservableDatesService,
    raw: &RawShiftRequest,
    explain: bool,
    format: OutputFormat,
) -> Result<ExitCode> {
    let today = service.today();
    info!("Evaluating as of {today}");

    match service.plan_on(raw, today) {
        Ok(plan) => {
            let out = match format {
                OutputFormat::Text => render_text(&plan, explain),
                OutputFormat::Json => render_json(&plan, explain)?,
            };
            print!("{out}");
            if format == OutputFormat::Json {
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            let out = render_errors(&errors, format)?;
            match format {
                OutputFormat::Text => eprint!("{out}"),
                OutputFormat::Json => println!("{out}"),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn cmd_serve(
    service: ReservableDatesService,
    host: &str,
    port: u16,
    allow_origins: &[String],
) -> Result<()> {
    let cors = CorsOrigins::parse(allow_origins).context("failed to configure CORS")?;
    let app = create_router(AppState::new(service), &cors);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address {host}:{port}"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    match &cors {
        CorsOrigins::Any => info!("CORS: any origin"),
        CorsOrigins::List(origins) => info!("CORS: {} allowed origin(s)", origins.len()),
    }
    info!("Listening on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    match &cli.command {
        Commands::Calculate {
            shift_start_date,
            due_date,
            due_date_rule,
            today,
            explain,
            format,
        } => {
            let service = build_service(&cli, *today)?;
            let raw = RawShiftRequest::new(
                shift_start_date.as_str(),
                due_date.as_str(),
                due_date_rule.as_str(),
            );
            cmd_calculate(&service, &raw, *explain, *format)
        }
        Commands::Serve {
            host,
            port,
            allow_origins,
        } => {
            let service = build_service(&cli, None)?;
            cmd_serve(service, host, *port, allow_origins).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
