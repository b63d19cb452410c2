use std::env;
use std::error::Error;
use std::io;
use std::process;

use notice_ledger::{run, Command, FileStorage, StoreConfig, USAGE};

fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    if let Err(err) = try_main() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(USAGE.into());
    }
    let storage = FileStorage::new(&args[1]);
    let command = Command::parse(&args[2..])?;
    let config = StoreConfig::from_env()?;
    run(&storage, config, command, io::stdout().lock())
}
