use clientbook_cli::config::log_format_from_env;
use clientbook_cli::{ConsoleReporter, DemoConfig};

fn main() -> anyhow::Result<()> {
    clientbook_observability::init_with(log_format_from_env());
    let config = DemoConfig::from_env();

    tracing::info!(
        order_amount = %config.order_amount,
        bonus_points = config.bonus_points,
        log_format = ?config.log_format,
        "starting customer walkthrough"
    );

    let summary = clientbook_cli::run(&config, &ConsoleReporter::stdout())?;

    tracing::info!(
        total_customers = summary.total_customers,
        orders = summary.receipts.len(),
        "walkthrough finished"
    );
    Ok(())
}
