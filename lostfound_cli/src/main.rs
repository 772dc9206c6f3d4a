//! Command-line consumer for the lost-and-found API: env-file loading,
//! credential pickup from the environment, optional login, and a handful of
//! browse commands against the backend selected by `LOSTFOUND_API_URL`.

use std::{env, process};

use chrono::NaiveDateTime;
use lostfound_api::{
    api::{AuthApi, ItemsApi, MessagesApi, ModerationApi, UsersApi},
    client::LostFoundClient,
    error::LostFoundError,
    types::{Item, ItemQuery},
};

fn print_help() {
    println!("lostfound-cli — talk to a lost-and-found backend");
    println!();
    println!("USAGE:");
    println!("    lostfound_cli [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    lost                     List your lost-item reports (requires --email)");
    println!("    found                    List the public found-item feed");
    println!("    user <id>                Show a user's public profile");
    println!("    matches <id>             Show a user's reports with match candidates");
    println!("    conversations            List your conversations (requires login)");
    println!("    messages <conv-id>       Show a conversation's messages (requires login)");
    println!("    moderator [email]        Check moderator access for an email");
    println!();
    println!("OPTIONS:");
    println!("    -e, --env-file <FILE>    Load environment variables from FILE first");
    println!("    -u, --email <EMAIL>      Account email (or LOSTFOUND_EMAIL)");
    println!("    -p, --password <PASS>    Account password (or LOSTFOUND_PASSWORD)");
    println!("        --page <N>           Listing page");
    println!("        --limit <N>          Listing page size");
    println!("        --json               Dump listings as JSON instead of text");
    println!("    -v, --verbose            Chatty progress output");
    println!("        --help               Show this help");
    println!("        --version            Show the version");
    println!();
    println!("The backend is selected by the LOSTFOUND_API_URL environment variable");
    println!("and defaults to the local development server.");
}

#[tokio::main]
async fn main() {
    let args = env::args().skip(1).collect::<Vec<String>>();

    // Show help and exit if requested.
    if args.iter().any(|a| a == "--help") {
        print_help();
        process::exit(0);
    }

    // Show version and exit if requested.
    if args.iter().any(|a| a == "--version") {
        println!("lostfound-cli {}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    // Prepare for argument handling.
    let mut env_file: Option<String> = None;
    let mut email: Option<String> = None;
    let mut password: Option<String> = None;
    let mut page: Option<i64> = None;
    let mut limit: Option<i64> = None;
    let mut json = false;
    let mut verbose = false;
    let mut command: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--env-file" | "-e" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("[ERROR] --env-file requires a file name.");
                    process::exit(1);
                }
                env_file = Some(args[i].clone());
            }
            "--email" | "-u" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("[ERROR] --email requires an address.");
                    process::exit(1);
                }
                email = Some(args[i].clone());
            }
            "--password" | "-p" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("[ERROR] --password requires a password.");
                    process::exit(1);
                }
                password = Some(args[i].clone());
            }
            "--page" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<i64>().ok()) {
                    Some(n) => page = Some(n),
                    None => {
                        eprintln!("[ERROR] --page requires a number.");
                        process::exit(1);
                    }
                }
            }
            "--limit" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<i64>().ok()) {
                    Some(n) => limit = Some(n),
                    None => {
                        eprintln!("[ERROR] --limit requires a number.");
                        process::exit(1);
                    }
                }
            }
            "--json" => {
                json = true;
            }
            "--verbose" | "-v" => {
                verbose = true;
            }
            val => {
                command.push(val.to_string());
            }
        }
        i += 1;
    }

    // If we have an env file, load it.
    if let Some(env_path) = env_file {
        if verbose {
            println!("[VERBOSE] Loading environment from file: {}", env_path);
        }
        if let Err(e) = dotenvy::from_filename(&env_path) {
            eprintln!("[ERROR] Failed to load .env file '{}': {:?}", env_path, e);
            process::exit(1);
        }
    }

    // Check for credentials in environment if not provided on CLI.
    if email.is_none() {
        email = env::var("LOSTFOUND_EMAIL").ok();
    }
    if password.is_none() {
        password = env::var("LOSTFOUND_PASSWORD").ok();
    }

    let client = LostFoundClient::from_env();
    if verbose {
        println!("[VERBOSE] Using backend at {}", client.config.base_url());
    }

    // Log in when both credentials are present. Browsing the found feed
    // works without a session; the personal commands check for one below.
    let mut session_user_id: Option<i64> = None;
    if let (Some(u), Some(p)) = (&email, &password) {
        match client.login(u, p).await {
            Ok(login) => {
                session_user_id = Some(login.user.id);
                if verbose {
                    println!(
                        "[VERBOSE] Logged in as {} (id {})",
                        login.user.name, login.user.id
                    );
                }
            }
            Err(e) => {
                eprintln!("[ERROR] Login failed: {e}");
                process::exit(1);
            }
        }
    }

    let Some(cmd) = command.first() else {
        eprintln!("[ERROR] No command given. See --help.");
        process::exit(1);
    };

    let result = match cmd.as_str() {
        "lost" => cmd_lost(&client, email.as_deref(), page, limit, json).await,
        "found" => cmd_found(&client, page, limit, json).await,
        "user" => cmd_user(&client, command.get(1)).await,
        "matches" => cmd_matches(&client, command.get(1)).await,
        "conversations" => cmd_conversations(&client, session_user_id).await,
        "messages" => cmd_messages(&client, command.get(1), session_user_id).await,
        "moderator" => cmd_moderator(&client, command.get(1).map(String::as_str).or(email.as_deref())).await,
        other => {
            eprintln!("[ERROR] Unknown command '{}'. See --help.", other);
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("[ERROR] {e}");
        process::exit(1);
    }
}

async fn cmd_lost(
    client: &LostFoundClient,
    email: Option<&str>,
    page: Option<i64>,
    limit: Option<i64>,
    json: bool,
) -> Result<(), LostFoundError> {
    let Some(email) = email else {
        return Err(LostFoundError::Other(
            "lost items are private; pass --email or set LOSTFOUND_EMAIL".to_string(),
        ));
    };

    let query = ItemQuery {
        user_email: Some(email.to_string()),
        page,
        limit,
        ..Default::default()
    };
    let listing = client.lost_items(Some(query)).await?;
    print_items("lost", &listing.items, json)
}

async fn cmd_found(
    client: &LostFoundClient,
    page: Option<i64>,
    limit: Option<i64>,
    json: bool,
) -> Result<(), LostFoundError> {
    let query = ItemQuery {
        page,
        limit,
        ..Default::default()
    };
    let listing = client.found_items(Some(query)).await?;
    print_items("found", &listing.items, json)
}

fn print_items(kind: &str, items: &[Item], json: bool) -> Result<(), LostFoundError> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No {kind} items.");
        return Ok(());
    }

    for item in items {
        let location = item
            .location_name
            .as_deref()
            .or(item.current_location.as_deref())
            .unwrap_or("unknown location");
        println!(
            "#{:<5} {:<32} {:<24} {}",
            item.id,
            item.title,
            location,
            time_ago(item.created_at.as_deref())
        );
        if let Some(description) = &item.description {
            println!("       {}", description);
        }
    }
    println!("{} {} item(s).", items.len(), kind);
    Ok(())
}

async fn cmd_user(
    client: &LostFoundClient,
    user_id: Option<&String>,
) -> Result<(), LostFoundError> {
    let Some(user_id) = user_id else {
        return Err(LostFoundError::Other("user requires an id".to_string()));
    };

    let user = client.fetch_user(user_id).await?;
    println!("#{} {} <{}>", user.id, user.full_name, user.email);
    Ok(())
}

async fn cmd_matches(
    client: &LostFoundClient,
    user_id: Option<&String>,
) -> Result<(), LostFoundError> {
    let Some(user_id) = user_id else {
        return Err(LostFoundError::Other("matches requires a user id".to_string()));
    };

    let reports = client.reports_with_matches(user_id).await?;
    for (kind, reports) in [("lost", &reports.lost_reports), ("found", &reports.found_reports)] {
        for report in reports {
            println!("[{}] #{} {}", kind, report.item.id, report.item.title);
            if report.matches.is_empty() {
                println!("       no match candidates");
            }
            for candidate in &report.matches {
                println!(
                    "       {:>3.0}%  #{} {}",
                    candidate.similarity * 100.0,
                    candidate.item.id,
                    candidate.item.title
                );
            }
        }
    }
    Ok(())
}

async fn cmd_conversations(
    client: &LostFoundClient,
    session_user_id: Option<i64>,
) -> Result<(), LostFoundError> {
    let Some(user_id) = session_user_id else {
        return Err(LostFoundError::Other(
            "conversations requires a login (--email/--password)".to_string(),
        ));
    };

    let conversations = client.conversations(user_id).await?;
    if conversations.is_empty() {
        println!("No conversations.");
        return Ok(());
    }

    for conv in &conversations {
        let unread = conv.unread_count.unwrap_or(0);
        let marker = if unread > 0 {
            format!(" ({unread} unread)")
        } else {
            String::new()
        };
        println!(
            "{}  with {} about '{}'{}",
            conv.conversation_id,
            conv.other_user_name.as_deref().unwrap_or("?"),
            conv.item_title.as_deref().unwrap_or("?"),
            marker
        );
        if let Some(last) = &conv.last_message {
            println!(
                "       {}  — {}",
                last,
                time_ago(conv.last_message_time.as_deref())
            );
        }
    }
    Ok(())
}

async fn cmd_messages(
    client: &LostFoundClient,
    conversation_id: Option<&String>,
    session_user_id: Option<i64>,
) -> Result<(), LostFoundError> {
    let Some(conversation_id) = conversation_id else {
        return Err(LostFoundError::Other(
            "messages requires a conversation id".to_string(),
        ));
    };
    let Some(user_id) = session_user_id else {
        return Err(LostFoundError::Other(
            "messages requires a login (--email/--password)".to_string(),
        ));
    };

    let messages = client.fetch_messages(conversation_id, user_id).await?;
    for msg in &messages {
        let who = if msg.sender_id == user_id {
            "me"
        } else {
            msg.sender_name.as_deref().unwrap_or("them")
        };
        println!(
            "[{}] {}: {}",
            time_ago(msg.created_at.as_deref()),
            who,
            msg.message_text
        );
    }
    Ok(())
}

async fn cmd_moderator(
    client: &LostFoundClient,
    email: Option<&str>,
) -> Result<(), LostFoundError> {
    let Some(email) = email else {
        return Err(LostFoundError::Other(
            "moderator requires an email (argument or --email)".to_string(),
        ));
    };

    let status = client.check_moderator(email).await?;
    if status.is_moderator {
        println!(
            "{} is a moderator{}",
            email,
            status
                .role
                .as_deref()
                .map(|r| format!(" ({r})"))
                .unwrap_or_default()
        );
    } else {
        println!("{} is not a moderator", email);
    }
    Ok(())
}

/// Render a backend timestamp (`YYYY-MM-DD HH:MM:SS`) as a relative age,
/// falling back to the raw string when it doesn't parse.
fn time_ago(timestamp: Option<&str>) -> String {
    let Some(raw) = timestamp else {
        return "unknown".to_string();
    };
    let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") else {
        return raw.to_string();
    };

    let seconds = (chrono::Local::now().naive_local() - parsed).num_seconds();
    if seconds < 0 {
        return raw.to_string();
    }

    if seconds < 60 {
        format!("{} second{} ago", seconds, plural(seconds))
    } else if seconds < 3600 {
        let minutes = seconds / 60;
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if seconds < 86400 {
        let hours = seconds / 3600;
        format!("{} hour{} ago", hours, plural(hours))
    } else {
        let days = seconds / 86400;
        format!("{} day{} ago", days, plural(days))
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ago_formats_each_magnitude() {
        let now = chrono::Local::now().naive_local();
        let stamp = |secs: i64| {
            (now - chrono::Duration::seconds(secs))
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        };

        assert!(time_ago(Some(&stamp(5))).ends_with("seconds ago"));
        assert_eq!(time_ago(Some(&stamp(60))), "1 minute ago");
        assert_eq!(time_ago(Some(&stamp(7200))), "2 hours ago");
        assert_eq!(time_ago(Some(&stamp(3 * 86400))), "3 days ago");
    }

    #[test]
    fn time_ago_passes_junk_through() {
        assert_eq!(time_ago(None), "unknown");
        assert_eq!(time_ago(Some("yesterday-ish")), "yesterday-ish");
    }
}
