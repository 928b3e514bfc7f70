//! tmux-styler: colorized `tmux list-sessions` / `list-windows` output.

use clap::Parser;

mod cli;
mod cmd_session_info;
mod cmd_sessions;
mod context;
mod display;
mod style;

fn init_tracing() {
    let filter = std::env::var("TMUX_STYLER_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let argv: Vec<String> = std::env::args().collect();
    let args = match cli::Cli::try_parse_from(&argv) {
        Ok(args) => args,
        Err(err) => std::process::exit(cli::handle_parse_error(&err, &argv)),
    };

    let exit_code = run(args)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn run(args: cli::Cli) -> anyhow::Result<i32> {
    let Some(command) = args.command.as_ref() else {
        println!("{}", cli::USAGE);
        return Ok(1);
    };

    let executor = context::executor_from_cli(&args);
    let use_color = context::resolve_color(args.color);

    match command {
        cli::Command::Sessions => {
            cmd_sessions::cmd_sessions(&executor, use_color, &mut std::io::stdout().lock())?;
        }
        cli::Command::SessionInfo {
            session: Some(name),
        } if !name.is_empty() => {
            cmd_session_info::cmd_session_info(
                &executor,
                name,
                use_color,
                &mut std::io::stdout().lock(),
            )?;
        }
        cli::Command::SessionInfo { .. } => {
            println!("{}", cli::SESSION_INFO_USAGE);
            return Ok(1);
        }
        cli::Command::Unknown(words) => {
            let name = words.first().map(String::as_str).unwrap_or_default();
            println!("Unknown command: {name}");
            return Ok(1);
        }
    }

    Ok(0)
}
