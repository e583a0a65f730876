use anyhow::Result;
use chrono::Local;
use market_movers_bot::{
    app::{Config, Scheduler, keep_alive, logger, schedule},
    services::MoversService,
};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    logger::init_tracing();

    let config = Config::from_env()?;

    let listener = keep_alive::bind(*config.keep_alive_addr()).await?;
    tokio::spawn(async move {
        if let Err(err) = keep_alive::serve(listener).await {
            error!("{:#}", err);
        }
    });

    let service = MoversService::new(&config);
    let mut scheduler = Scheduler::new(schedule::weekday_jobs(), Local::now().naive_local());

    info!(
        symbols = config.symbols().len(),
        jobs = scheduler.jobs().count(),
        next_run = ?scheduler.next_run(),
        "Scheduler started"
    );

    let mut ticker = interval(*config.poll_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        for trigger in scheduler.due(Local::now().naive_local()) {
            if let Err(err) = service.run(trigger).await {
                warn!(%trigger, "Trigger finished with errors: {:#}", err);
            }
        }
    }
}
