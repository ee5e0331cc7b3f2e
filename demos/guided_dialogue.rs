use std::env;
use std::io::{self, BufRead};

use zeto::analysis::{submit_session, AnalysisClient};
use zeto::dialogue::{DialogueSession, Message, Phase, Sender};
use zeto::export::export_report;
use zeto::zeto_errors::ZetoError;

/// Render a batch of dialogue messages on the terminal.
fn render(messages: &[Message]) {
    for message in messages {
        match message.sender {
            Sender::Bot if message.is_error => println!("[zeto !] {}", message.content),
            Sender::Bot => println!("[zeto] {}", message.content),
            Sender::User => println!("[you ] {}", message.content),
        }
    }
}

/// Minimal driver: run the guided dialogue on stdin/stdout, then classify.
/// Usage:
///   guided_dialogue [ENDPOINT]
/// The endpoint may also come from ZETO_ANALYSIS_URL; without one, the
/// collected parameter set is printed instead of being submitted.
#[tokio::main]
async fn main() -> Result<(), ZetoError> {
    tracing_subscriber::fmt::init();

    let endpoint = env::args()
        .nth(1)
        .or_else(|| env::var("ZETO_ANALYSIS_URL").ok());

    let mut session = DialogueSession::new();
    render(&session.open());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while session.phase() == Phase::AwaitingAnswer {
        let (current, total) = session.progress();
        println!("({current}/{total}) > ");

        let Some(line) = lines.next() else {
            eprintln!("[guided_dialogue] input closed before the dialogue finished");
            return Ok(());
        };
        let line = line.expect("failed to read from stdin");
        render(&session.submit(&line));
    }

    let Some(endpoint) = endpoint else {
        let parameters = session.take_completed().expect("dialogue just completed");
        println!("{}", serde_json::to_string_pretty(&parameters)?);
        return Ok(());
    };

    let client = AnalysisClient::new(endpoint)?;
    match submit_session(&client, &mut session).await {
        Some(Ok(verdict)) => {
            println!("[zeto] {} ({:.0}% confidence)", verdict.title, verdict.confidence);
            println!("[zeto] {}", verdict.description);
            println!("{}", export_report(&verdict, session.parameters())?);
        }
        Some(Err(err)) => eprintln!("[guided_dialogue] analysis failed: {err}"),
        None => unreachable!("completed session always hands off once"),
    }

    Ok(())
}
