use std::{env, fs::File, path::Path};

use rust_decimal::Decimal;

use banking_engine::domain::{Pin, SeedAccount};
use banking_engine::{App, CsvReader, Engine, Ledger, StdErrDLQ, TerminalPresenter};

// Demo accounts. Seeding is the embedding application's concern; the engine
// only validates what it is handed.
fn seed() -> Vec<SeedAccount> {
    let pin = |value| Pin::new(value).expect("seed pin is four digits");
    let d = |mantissa, scale| Decimal::new(mantissa, scale);

    vec![
        SeedAccount {
            owner: "Maya Jensen".to_owned(),
            movements: vec![
                d(200, 0),
                d(450, 0),
                d(-400, 0),
                d(3000, 0),
                d(-65099, 2),
                d(-130, 0),
                d(70, 0),
                d(1300, 0),
            ],
            interest_rate: d(12, 1),
            pin: pin(1111),
        },
        SeedAccount {
            owner: "Arthur Holm".to_owned(),
            movements: vec![
                d(5000, 0),
                d(3400, 0),
                d(-150, 0),
                d(-790, 0),
                d(-3210, 0),
                d(-1000, 0),
                d(8500, 0),
                d(-30, 0),
            ],
            interest_rate: d(15, 1),
            pin: pin(2222),
        },
        SeedAccount {
            owner: "Nora Lind Vik".to_owned(),
            movements: vec![
                d(200, 0),
                d(-200, 0),
                d(340, 0),
                d(-300, 0),
                d(-20, 0),
                d(50, 0),
                d(400, 0),
                d(-460, 0),
            ],
            interest_rate: d(7, 1),
            pin: pin(3333),
        },
        SeedAccount {
            owner: "Sara Moe".to_owned(),
            movements: vec![d(430, 0), d(1000, 0), d(700, 0), d(50, 0), d(90, 0)],
            interest_rate: d(10, 1),
            pin: pin(4444),
        },
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays clean for the presenter.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args();
    let file_path = args.nth(1).expect("no command file was provided");
    let file = File::open(Path::new(&file_path))?;

    let ingestion = CsvReader::new(file)?;
    let ledger = Ledger::from_seed(seed())?;
    let mut app = App::new(
        ingestion,
        TerminalPresenter::default(),
        StdErrDLQ::default(),
        Engine::new(ledger),
    );

    app.process().await?;
    app.flush();

    Ok(())
}
