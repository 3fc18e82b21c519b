use clap::{Parser, Subcommand, ValueEnum};
use memoraid_client::HttpAdminApi;
use memoraid_console::{
    AlertsView, ApprovalsView, DashboardView, InquiriesView, RegistryView, UsersView,
};
use memoraid_core::constants::{
    ENV_ACCESS_TOKEN, ENV_ALERT_POLL_SECS, ENV_API_BASE_URL, ENV_HTTP_TIMEOUT_SECS,
};
use memoraid_core::{
    classify, toggle_label, AlertTab, ApprovalAction, ConsoleConfig, IntegrityReport,
    UserFilter,
};
use memoraid_types::{AccountStatus, InquiryStatus, LinkRequest, RecordId, Role};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "memoraid")]
#[command(about = "Memoraid admin console CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dashboard counters
    Stats,
    /// List users
    Users {
        /// Only users with this role (admin, caregiver, patient)
        #[arg(long)]
        role: Option<Role>,
        /// Only users with this account status
        #[arg(long)]
        status: Option<AccountStatus>,
        /// Only users with this care level (case-insensitive)
        #[arg(long)]
        level: Option<String>,
    },
    /// Activate or deactivate a user account
    Toggle {
        /// User ID
        id: RecordId,
    },
    /// List link requests awaiting review
    Approvals {
        /// Show processed requests instead
        #[arg(long)]
        history: bool,
    },
    /// Approve a pending link request
    Approve {
        /// Link request ID
        id: RecordId,
    },
    /// Reject a pending link request
    Reject {
        /// Link request ID
        id: RecordId,
    },
    /// Revoke an approved or rejected link request
    Revoke {
        /// Link request ID
        id: RecordId,
    },
    /// Show the patient registry
    Registry,
    /// Show profile integrity for a patient
    Integrity {
        /// Patient user ID
        id: RecordId,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// List system alerts
    Alerts {
        /// active, resolved or history
        #[arg(long, default_value = "active")]
        tab: AlertTab,
    },
    /// Mark an alert handled
    Ack {
        /// Alert ID
        id: RecordId,
    },
    /// List caregiver inquiries
    Inquiries,
    /// Respond to a caregiver inquiry
    Respond {
        /// Inquiry ID
        id: RecordId,
        /// New status (open, in_progress, resolved)
        #[arg(long)]
        status: InquiryStatus,
        /// Response shown to the caregiver
        #[arg(long)]
        response: String,
    },
}

fn load_config() -> anyhow::Result<ConsoleConfig> {
    let var = |name: &str| std::env::var(name).ok();
    Ok(ConsoleConfig::from_values(
        var(ENV_API_BASE_URL),
        var(ENV_ACCESS_TOKEN),
        var(ENV_ALERT_POLL_SECS),
        var(ENV_HTTP_TIMEOUT_SECS),
    )?)
}

fn print_request(request: &LinkRequest) {
    let classification = classify(request);
    let actions: Vec<&str> = classification
        .available_actions
        .iter()
        .map(|a| a.as_str())
        .collect();
    println!(
        "#{} {} -> {} [{}] level: {} actions: {}",
        request.id,
        request.caregiver.full_name,
        request.patient.full_name,
        classification.state,
        request
            .level
            .map_or_else(|| "-".to_string(), |l| l.to_string()),
        actions.join(", ")
    );
}

fn print_report(
    name: &str,
    id: RecordId,
    report: &IntegrityReport,
    format: Format,
) -> anyhow::Result<()> {
    match format {
        Format::Text => {
            println!("{name} (#{id}): {}", report.badge());
            for reason in &report.reasons {
                println!("  - {reason}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(report)?),
        Format::Yaml => print!("{}", serde_yaml::to_string(report)?),
    }
    Ok(())
}

async fn approval(
    api: Arc<HttpAdminApi>,
    id: RecordId,
    action: ApprovalAction,
) -> anyhow::Result<()> {
    let mut view = ApprovalsView::new(api);
    view.refresh().await?;
    view.apply(id, action).await?;
    match view.notice() {
        Some(notice) => eprintln!("{notice}"),
        None => println!("Request {id}: {action} recorded"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("memoraid=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("Use --help to see available commands");
        return Ok(());
    };

    let config = load_config()?;
    let api = Arc::new(HttpAdminApi::new(&config)?);

    match command {
        Commands::Stats => {
            let mut view = DashboardView::new(api);
            view.refresh().await?;
            if let Some(stats) = view.stats() {
                for (name, value) in stats.counters() {
                    println!("{name}: {value}");
                }
            }
        }
        Commands::Users {
            role,
            status,
            level,
        } => {
            let mut view = UsersView::new(api);
            view.refresh().await?;
            let filter = UserFilter {
                role,
                status,
                level,
            };
            let users = view.filtered(&filter);
            if users.is_empty() {
                println!("No users found.");
            }
            for user in users {
                println!(
                    "#{} {} <{}> {} {} level: {} [{}]",
                    user.id,
                    user.full_name,
                    user.email,
                    user.role,
                    user.status,
                    user.care_level.as_deref().unwrap_or("-"),
                    toggle_label(user.status)
                );
            }
        }
        Commands::Toggle { id } => {
            let mut view = UsersView::new(api);
            view.refresh().await?;
            let change = view.toggle_status(id).await?;
            println!("User {id} is now {}", change.target());
        }
        Commands::Approvals { history } => {
            let mut view = ApprovalsView::new(api);
            view.refresh().await?;
            let requests = if history {
                view.history()
            } else {
                view.pending()
            };
            if requests.is_empty() {
                println!("No link requests.");
            }
            for request in requests {
                print_request(request);
            }
        }
        Commands::Approve { id } => approval(api, id, ApprovalAction::Approve).await?,
        Commands::Reject { id } => approval(api, id, ApprovalAction::Reject).await?,
        Commands::Revoke { id } => approval(api, id, ApprovalAction::Revoke).await?,
        Commands::Registry => {
            let mut view = RegistryView::new(api);
            view.refresh().await?;
            for row in view.rows() {
                println!(
                    "#{} {} ({}) {} / {} primary: {} [{}] {}",
                    row.patient_id,
                    row.full_name,
                    row.unique_id,
                    row.condition,
                    row.stage,
                    row.primary_caregiver.as_deref().unwrap_or("Unassigned"),
                    row.link_state.label(),
                    row.integrity.badge()
                );
            }
        }
        Commands::Integrity { id, format } => {
            let mut view = RegistryView::new(api);
            view.refresh().await?;
            let report = view.integrity(id)?;
            let name = view
                .patient(id)
                .map(|p| p.full_name.clone())
                .unwrap_or_default();
            print_report(&name, id, &report, format)?;
        }
        Commands::Alerts { tab } => {
            let view = AlertsView::new(api);
            view.refresh().await?;
            let alerts = view.alerts(tab);
            if alerts.is_empty() {
                println!("No alerts.");
            }
            for alert in alerts {
                println!(
                    "#{} {} [{}] {} {}",
                    alert.id,
                    alert.kind.headline(),
                    alert.severity(),
                    alert.patient_name.as_deref().unwrap_or("Unknown patient"),
                    alert.message.as_deref().unwrap_or("")
                );
            }
        }
        Commands::Ack { id } => {
            let view = AlertsView::new(api);
            view.acknowledge(id).await?;
            println!(
                "Alert {id} handled; {} active alert(s) remain",
                view.active_count()
            );
        }
        Commands::Inquiries => {
            let mut view = InquiriesView::new(api);
            view.refresh().await?;
            for inquiry in view.inquiries() {
                println!(
                    "#{} [{}] {} from {}",
                    inquiry.id,
                    inquiry.status.label(),
                    inquiry.subject,
                    inquiry.caregiver_name.as_deref().unwrap_or("unknown caregiver")
                );
            }
        }
        Commands::Respond {
            id,
            status,
            response,
        } => {
            let mut view = InquiriesView::new(api);
            view.respond(id, status, response).await?;
            if let Some(notice) = view.notice() {
                println!("{notice}");
            }
        }
    }

    Ok(())
}
