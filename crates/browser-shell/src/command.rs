//! Shell command parsing

use anyhow::{bail, Context, Result};

pub const HELP: &str = "\
commands:
  add <url> [private] [parent=<id>] [select]   open a tab
  custom <url>                                 open a custom tab
  select <id>                                  select a tab
  remove <id> [keep-parent]                    close a tab
  close-all | close-private | close-normal     close many tabs
  undo                                         reopen the last closed tab
  title <id> <text>                            set a tab title
  list                                         print the tab list
  json                                         print the whole state as JSON
  save                                         write the session file
  help                                         show this help
  quit                                         exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        url: String,
        private: bool,
        parent: Option<String>,
        select: bool,
    },
    Custom {
        url: String,
    },
    Select {
        id: String,
    },
    Remove {
        id: String,
        keep_parent: bool,
    },
    CloseAll,
    ClosePrivate,
    CloseNormal,
    Undo,
    Title {
        id: String,
        title: String,
    },
    List,
    Json,
    Save,
    Help,
    Quit,
}

/// Parse one input line, `None` for a blank line
pub fn parse(line: &str) -> Result<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };

    let command = match name {
        "add" => {
            let url = words
                .next()
                .context("usage: add <url> [private] [parent=<id>] [select]")?;
            let (mut private, mut parent, mut select) = (false, None, false);
            for flag in words {
                match flag {
                    "private" => private = true,
                    "select" => select = true,
                    _ => match flag.strip_prefix("parent=") {
                        Some(id) if !id.is_empty() => parent = Some(id.to_string()),
                        _ => bail!("unknown option '{}'", flag),
                    },
                }
            }
            Command::Add {
                url: url.to_string(),
                private,
                parent,
                select,
            }
        }
        "custom" => Command::Custom {
            url: words.next().context("usage: custom <url>")?.to_string(),
        },
        "select" => Command::Select {
            id: words.next().context("usage: select <id>")?.to_string(),
        },
        "remove" => {
            let id = words.next().context("usage: remove <id> [keep-parent]")?;
            let keep_parent = match words.next() {
                None => false,
                Some("keep-parent") => true,
                Some(other) => bail!("unknown option '{}'", other),
            };
            Command::Remove {
                id: id.to_string(),
                keep_parent,
            }
        }
        "close-all" => Command::CloseAll,
        "close-private" => Command::ClosePrivate,
        "close-normal" => Command::CloseNormal,
        "undo" => Command::Undo,
        "title" => {
            let id = words.next().context("usage: title <id> <text>")?;
            let title: Vec<&str> = words.collect();
            Command::Title {
                id: id.to_string(),
                title: title.join(" "),
            }
        }
        "list" | "ls" => Command::List,
        "json" => Command::Json,
        "save" => Command::Save,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command '{}', try 'help'", other),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_add_with_options() {
        let command = parse("add https://www.mozilla.org private parent=abc select")
            .unwrap()
            .unwrap();
        assert_eq!(
            command,
            Command::Add {
                url: "https://www.mozilla.org".to_string(),
                private: true,
                parent: Some("abc".to_string()),
                select: true,
            }
        );
    }

    #[test]
    fn test_parse_add_rejects_unknown_option() {
        assert!(parse("add https://www.mozilla.org pinned").is_err());
        assert!(parse("add https://www.mozilla.org parent=").is_err());
        assert!(parse("add").is_err());
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            parse("remove a keep-parent").unwrap(),
            Some(Command::Remove {
                id: "a".to_string(),
                keep_parent: true
            })
        );
        assert_eq!(
            parse("remove a").unwrap(),
            Some(Command::Remove {
                id: "a".to_string(),
                keep_parent: false
            })
        );
    }

    #[test]
    fn test_parse_title_joins_words() {
        assert_eq!(
            parse("title a Hello   World").unwrap(),
            Some(Command::Title {
                id: "a".to_string(),
                title: "Hello World".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse("reload").is_err());
    }
}
