// shell.rs - line-oriented interactive front end over a Session
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::render::{ErrorBanner, SampleList, SessionView};
use super::{Sample, Session};
use crate::summarizer::types::MAX_NEW_TOKENS_RANGE;
use crate::summarizer::SummarizerError;

/// Line that ends a `paste` block
pub const PASTE_TERMINATOR: &str = ".";

pub const HELP: &str = "\
Commands:
  text <document>        set the document to summarize
  paste                  enter a multi-line document, end with a line holding only '.'
  sample [name]          use a sample text (no name lists them)
  file <path.txt>        load a UTF-8 .txt file
  set <param> <value>    max_new_tokens (50-300), temperature (0.1-1.0), top_p (0.1-1.0)
  health                 check the API
  demo                   fetch the demo summary
  summarize              summarize through the summarization API
  infer                  summarize through the inference endpoint
  show                   show the current session
  help                   show this help
  quit                   leave
";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Text(String),
    Paste,
    Sample(Option<Sample>),
    File(PathBuf),
    Set(Param, f64),
    Health,
    Demo,
    Summarize,
    Infer,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    MaxNewTokens,
    Temperature,
    TopP,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<ShellCommand, String> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        let command = match word.to_lowercase().as_str() {
            "text" if rest.is_empty() => return Err("usage: text <document>".to_string()),
            "text" => ShellCommand::Text(rest.to_string()),
            "paste" => ShellCommand::Paste,
            "sample" if rest.is_empty() => ShellCommand::Sample(None),
            "sample" => match Sample::find(rest) {
                Some(sample) => ShellCommand::Sample(Some(sample)),
                None => return Err(format!("unknown sample: {rest}")),
            },
            "file" if rest.is_empty() => return Err("usage: file <path.txt>".to_string()),
            "file" => ShellCommand::File(PathBuf::from(rest)),
            "set" => parse_set(rest)?,
            "health" => ShellCommand::Health,
            "demo" => ShellCommand::Demo,
            "summarize" | "go" => ShellCommand::Summarize,
            "infer" => ShellCommand::Infer,
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            "" => return Err(String::new()),
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };
        Ok(command)
    }
}

fn parse_set(rest: &str) -> Result<ShellCommand, String> {
    let usage = || "usage: set <max_new_tokens|temperature|top_p> <value>".to_string();
    let (name, value) = rest.split_once(char::is_whitespace).ok_or_else(usage)?;

    let param = match name.to_lowercase().replace('-', "_").as_str() {
        "max_new_tokens" | "max_tokens" => Param::MaxNewTokens,
        "temperature" | "temp" => Param::Temperature,
        "top_p" => Param::TopP,
        _ => return Err(usage()),
    };
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {}", value.trim()))?;

    Ok(ShellCommand::Set(param, value))
}

fn whole_number(value: f64) -> Option<u32> {
    (value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64).then_some(value as u32)
}

/// Drive `session` from `input` until `quit` or end of input, writing every
/// view to `out`
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    let health = session.refresh_health().await;
    write!(out, "{health}")?;
    writeln!(out, "Type `help` for commands.")?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(msg) if msg.is_empty() => continue,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => write!(out, "{HELP}")?,
            ShellCommand::Show => write!(out, "{}", SessionView(session))?,
            ShellCommand::Text(text) => {
                session.set_document(text);
                writeln!(out, "Document set.")?;
            }
            ShellCommand::Paste => {
                let mut buf = Vec::new();
                while let Some(line) = lines.next_line().await? {
                    if line.trim() == PASTE_TERMINATOR {
                        break;
                    }
                    buf.push(line);
                }
                session.set_document(buf.join("\n"));
                writeln!(out, "Document set.")?;
            }
            ShellCommand::Sample(None) => write!(out, "{}", SampleList)?,
            ShellCommand::Sample(Some(sample)) => {
                session.use_sample(sample);
                writeln!(out, "Using sample: {}", sample.title())?;
            }
            ShellCommand::File(path) => match session.use_file(&path) {
                Ok(()) => writeln!(out, "Loaded {}", path.display())?,
                Err(err) => write!(out, "{}", ErrorBanner(&err))?,
            },
            ShellCommand::Set(param, value) => {
                let params = session.params();
                let updated = match param {
                    Param::MaxNewTokens => match whole_number(value) {
                        Some(tokens) => params.with_max_new_tokens(tokens),
                        None => Err(SummarizerError::InvalidParameter {
                            name: "max_new_tokens",
                            value,
                            min: MAX_NEW_TOKENS_RANGE.0 as f64,
                            max: MAX_NEW_TOKENS_RANGE.1 as f64,
                        }),
                    },
                    Param::Temperature => params.with_temperature(value),
                    Param::TopP => params.with_top_p(value),
                };
                match updated {
                    Ok(params) => {
                        session.set_params(params);
                        write!(out, "{params}")?;
                    }
                    Err(err) => write!(out, "{}", ErrorBanner(&err))?,
                }
            }
            ShellCommand::Health => {
                let health = session.refresh_health().await;
                write!(out, "{health}")?;
            }
            ShellCommand::Demo => {
                writeln!(out, "🔄 Fetching demo...")?;
                let outcome = session.demo().await;
                write!(out, "{outcome}")?;
            }
            ShellCommand::Summarize => {
                writeln!(out, "🔄 Summarizing...")?;
                let outcome = session.summarize().await;
                write!(out, "{outcome}")?;
            }
            ShellCommand::Infer => {
                writeln!(out, "🔄 Summarizing...")?;
                let outcome = session.infer().await;
                write!(out, "{outcome}")?;
            }
        }
    }
    Ok(())
}
