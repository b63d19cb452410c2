use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::info;

use crate::{
    csv_utils::write_csv,
    dto::{Notification, NotificationRow},
    AccountKeyedStore, StorageBackend, StoreConfig,
};

pub const USAGE: &str = "Usage: notice-ledger <store.json> <command>

Commands:
  notifications <account>
  save-notifications <account> <records.json>
  unread <account> [true|false]
  last-block <account> [number]";

/// One CLI invocation, minus the storage path.
#[derive(Debug, PartialEq)]
pub enum Command {
    Notifications { account: String },
    SaveNotifications { account: String, input: PathBuf },
    Unread { account: String, set: Option<bool> },
    LastBlock { account: String, set: Option<i64> },
}

impl Command {
    /// Parses the arguments following the storage path.
    pub fn parse(args: &[String]) -> Result<Self, Box<dyn Error>> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let command = match args.as_slice() {
            ["notifications", account] => Command::Notifications {
                account: account.to_string(),
            },
            ["save-notifications", account, input] => Command::SaveNotifications {
                account: account.to_string(),
                input: PathBuf::from(input),
            },
            ["unread", account] => Command::Unread {
                account: account.to_string(),
                set: None,
            },
            ["unread", account, flag] => Command::Unread {
                account: account.to_string(),
                set: Some(flag.parse()?),
            },
            ["last-block", account] => Command::LastBlock {
                account: account.to_string(),
                set: None,
            },
            ["last-block", account, block] => Command::LastBlock {
                account: account.to_string(),
                set: Some(block.parse()?),
            },
            _ => return Err(USAGE.into()),
        };
        Ok(command)
    }
}

/// Runs `command` against `backend` and writes the result to `writer`.
///
/// # Arguments
/// * `backend` - Where the ledger documents live
/// * `config` - Key prefix and notification limit
/// * `command` - What to read or write
/// * `writer` - Where to write the output (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * A stored document or the records file is malformed
/// * The backend fails
/// * Writing to the output fails
pub fn run<B, W>(
    backend: &B,
    config: StoreConfig,
    command: Command,
    mut writer: W,
) -> Result<(), Box<dyn Error>>
where
    B: StorageBackend + ?Sized,
    W: Write,
{
    let store = AccountKeyedStore::with_config(backend, config);

    match command {
        Command::Notifications { account } => {
            let notifications = store.get_notifications(&account)?;
            write_csv(writer, notifications.iter().map(NotificationRow::from))?;
        }
        Command::SaveNotifications { account, input } => {
            let text = fs::read_to_string(&input)?;
            let notifications: Vec<Notification> = serde_json::from_str(&text)?;
            let count = notifications.len();
            store.save_notifications(notifications, &account)?;
            let kept = store.get_notifications(&account)?.len();
            info!("saved {} of {} notification(s) for {}", kept, count, account);
            writeln!(writer, "{}", kept)?;
        }
        Command::Unread { account, set } => {
            if let Some(flag) = set {
                store.save_has_unread_notifications(flag, &account)?;
            }
            writeln!(writer, "{}", store.get_has_unread_notifications(&account)?)?;
        }
        Command::LastBlock { account, set } => {
            if let Some(block) = set {
                store.save_last_block_checked(block, &account)?;
            }
            writeln!(writer, "{}", store.get_last_block_checked(&account)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    fn run_to_string(storage: &MemoryStorage, command: Command) -> Result<String, Box<dyn Error>> {
        let mut output = Vec::new();
        run(storage, StoreConfig::default(), command, &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn test_parse_commands() -> Result<(), Box<dyn Error>> {
        assert_eq!(
            Command::parse(&args(&["unread", "0xa", "true"]))?,
            Command::Unread {
                account: "0xa".to_string(),
                set: Some(true),
            }
        );
        assert_eq!(
            Command::parse(&args(&["last-block", "0xa"]))?,
            Command::LastBlock {
                account: "0xa".to_string(),
                set: None,
            }
        );
        assert_eq!(
            Command::parse(&args(&["save-notifications", "0xa", "in.json"]))?,
            Command::SaveNotifications {
                account: "0xa".to_string(),
                input: PathBuf::from("in.json"),
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Command::parse(&args(&[])).is_err());
        assert!(Command::parse(&args(&["frobnicate", "0xa"])).is_err());
        assert!(Command::parse(&args(&["unread", "0xa", "maybe"])).is_err());
        assert!(Command::parse(&args(&["last-block", "0xa", "ten"])).is_err());
    }

    #[test]
    fn test_flag_and_block_commands() -> Result<(), Box<dyn Error>> {
        let storage = MemoryStorage::new();
        let account = "0xa".to_string();

        let output = run_to_string(
            &storage,
            Command::Unread {
                account: account.clone(),
                set: None,
            },
        )?;
        assert_eq!(output, "false\n");

        let output = run_to_string(
            &storage,
            Command::Unread {
                account: account.clone(),
                set: Some(true),
            },
        )?;
        assert_eq!(output, "true\n");

        let output = run_to_string(
            &storage,
            Command::LastBlock {
                account,
                set: Some(-3),
            },
        )?;
        assert_eq!(output, "-3\n");
        Ok(())
    }

    #[test]
    fn test_save_and_list_notifications() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("records.json");
        fs::write(
            &input,
            r#"[
                {"id": "old", "kind": "Limit", "amount": "2", "timestamp": "2019-01-01T00:00:00.000Z"},
                {"id": "undated", "kind": "CancelOrder"},
                {"id": "new", "kind": "Market", "amount": "0.5", "timestamp": "2019-02-01T00:00:00.000Z", "tx": {}}
            ]"#,
        )?;

        let storage = MemoryStorage::new();
        let output = run_to_string(
            &storage,
            Command::SaveNotifications {
                account: "0xa".to_string(),
                input,
            },
        )?;
        assert_eq!(output, "3\n");

        let output = run_to_string(
            &storage,
            Command::Notifications {
                account: "0xa".to_string(),
            },
        )?;
        let expected = "id,kind,amount,timestamp
new,Market,0.5,2019-02-01T00:00:00.000Z
old,Limit,2,2019-01-01T00:00:00.000Z
undated,CancelOrder,,
";
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_listing_unknown_account_prints_nothing() -> Result<(), Box<dyn Error>> {
        let storage = MemoryStorage::new();
        let output = run_to_string(
            &storage,
            Command::Notifications {
                account: "nobody".to_string(),
            },
        )?;
        assert_eq!(output, "");
        Ok(())
    }
}
