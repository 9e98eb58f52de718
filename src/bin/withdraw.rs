use std::io::{self, BufRead, Write};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use withdrawal_api::form::{
    controller::{FormController, SubmitOutcome},
    models::withdrawal_form::WithdrawalForm,
    view::FormView,
};

#[derive(Debug, Deserialize)]
struct ClientEnvy {
    #[serde(default = "default_api_url")]
    api_url: String,
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

struct TerminalView;

impl FormView for TerminalView {
    fn show_message(&mut self, message: &str) {
        println!("{}", message);
    }

    fn alert(&mut self, message: &str) {
        eprintln!("! {}", message);
    }
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Ok(String::new()),
    }
}

fn read_form() -> io::Result<WithdrawalForm> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    Ok(WithdrawalForm {
        nickname: prompt(&mut lines, "Nickname")?,
        phone: prompt(&mut lines, "Phone")?,
        amount: prompt(&mut lines, "Amount")?,
        address: prompt(&mut lines, "Address (optional)")?,
        card_number: prompt(&mut lines, "Card number")?,
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let envy = match envy::prefixed("WITHDRAW_").from_env::<ClientEnvy>() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let form = match read_form() {
        Ok(form) => form,
        Err(e) => {
            eprintln!("failed to read form: {}", e);
            std::process::exit(2);
        }
    };

    let controller = FormController::new(&envy.api_url);

    match controller.submit(&form, &mut TerminalView).await {
        SubmitOutcome::Accepted(_) => {}
        SubmitOutcome::Rejected | SubmitOutcome::Failed(_) => std::process::exit(1),
    }
}
