use attendance_client::eligibility::{self, EligibilityContext};
use attendance_client::{ui, ApiClient, AttendanceController};
use chrono::Local;
use std::env;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let base_url =
        env::var("ATTENDANCE_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let bearer = env::var("ATTENDANCE_BEARER_TOKEN").ok();
    if bearer.is_none() {
        info!("ATTENDANCE_BEARER_TOKEN is not set; authenticated calls will fail");
    }

    info!("attendance client for {base_url}");
    let mut controller = AttendanceController::new(ApiClient::new(base_url, bearer));

    controller.refresh_settings().await;
    match controller.refresh_sessions().await {
        Ok(sessions) => println!("{}", ui::render_session_list(sessions)),
        Err(err) => error!("error loading sessions: {err}"),
    }
    println!("commands: select <id> | mark <token> | sessions | records | quit");

    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut context = controller.context();
    render_status(context);

    loop {
        tokio::select! {
            _ = ticker.tick() => render_status(context),
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                println!();
                // The clock keeps ticking while a command's fetch is in
                // flight; the verdict is derived from the last known context.
                let keep_going = {
                    let command = handle_command(&mut controller, line.trim());
                    tokio::pin!(command);
                    loop {
                        tokio::select! {
                            done = &mut command => break done,
                            _ = ticker.tick() => render_status(context),
                        }
                    }
                };
                if !keep_going {
                    break;
                }
                // A refresh can flip the verdict without a clock tick.
                context = controller.context();
                render_status(context);
            }
        }
    }

    Ok(())
}

fn render_status(context: EligibilityContext) {
    let now = Local::now().time();
    let verdict = eligibility::evaluate(context, now);
    print!("\r{}    ", ui::render_status_line(&verdict, now));
    let _ = std::io::stdout().flush();
}

async fn handle_command(controller: &mut AttendanceController, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("select") => match parts.next().and_then(|raw| raw.parse::<i64>().ok()) {
            Some(id) => {
                controller.select_session(id);
                if controller.selected() == Some(id) {
                    println!("selected session {id}");
                } else {
                    println!("session {id} is not selectable");
                }
            }
            None => println!("usage: select <session-id>"),
        },
        Some("mark") => {
            let token = parts.next().unwrap_or("");
            match controller.selected() {
                Some(id) => match controller.submit(id, token).await {
                    Ok(()) => {
                        println!("attendance marked successfully");
                        println!("{}", ui::render_session_list(controller.sessions()));
                    }
                    Err(err) => println!("{err}"),
                },
                None => println!("please select a session first"),
            }
        }
        Some("sessions") => {
            controller.refresh_settings().await;
            match controller.refresh_sessions().await {
                Ok(sessions) => println!("{}", ui::render_session_list(sessions)),
                Err(err) => println!("error loading sessions: {err}"),
            }
        }
        Some("records") => match controller.my_records().await {
            Ok(records) => println!("{}", ui::render_records(&records)),
            Err(err) => println!("error loading records: {err}"),
        },
        Some("quit") | Some("exit") => return false,
        Some(other) => println!("unknown command: {other}"),
        None => {}
    }
    true
}
