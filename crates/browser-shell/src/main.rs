use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use browser_state::middleware::session_middleware::restore_action;
use browser_state::middleware::{LoggingMiddleware, RecentlyClosedMiddleware, SessionMiddleware};
use browser_state::{
    Action, BrowserState, ContentAction, CustomTabListAction, Middleware, RecentlyClosedAction,
    RecentlyClosedState, SessionAction, Store, TabId, TabListAction, TabSessionState, Target,
};
use browser_state_config::{AppConfig, Session};

mod command;
mod logger;

use command::Command;

fn main() -> Result<()> {
    // Logging is not up yet, report config problems once it is
    let (config, config_error) = match AppConfig::read() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let log_file = logger::init(config.log_level.as_deref())?;

    log::info!("Starting browser-shell");
    if let Some(e) = config_error {
        log::warn!("{:#}, using defaults", e);
        eprintln!("warning: {:#}, using defaults", e);
    }
    log::debug!("Logging to {:?}, config {:?}", log_file, config);

    let initial_state = BrowserState {
        closed_tabs: RecentlyClosedState::with_max_size(config.max_closed_tabs),
        ..BrowserState::default()
    };

    // Middleware execute in this order
    let mut middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(RecentlyClosedMiddleware::new()),
    ];
    if config.persist_session {
        middleware.push(Box::new(SessionMiddleware::new(&config)?));
    }
    let store = Store::new(initial_state, middleware);

    if config.persist_session {
        if let Some(action) = restore_action(&Session::load(), config.restore_private_tabs) {
            store.dispatch(action).join()?;
        }
    }

    let result = run(&store);

    store.shutdown();
    log::info!("Exiting browser-shell");
    result
}

fn run(store: &Store) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_tabs(&store.state());
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;

        match command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(store, command)?,
            Ok(None) => {}
            Err(e) => println!("{}", e),
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> Result<()> {
    print!("> ");
    stdout.flush().context("Failed to flush stdout")
}

fn execute(store: &Store, command: Command) -> Result<()> {
    let state = store.state();

    let action: Action = match command {
        Command::Add {
            url,
            private,
            parent,
            select,
        } => {
            let tab = TabSessionState::new(url).private(private);
            println!("opened {}", tab.id);
            TabListAction::AddTab {
                tab,
                select,
                parent_id: parent.map(TabId::from),
            }
            .into()
        }
        Command::Custom { url } => {
            let tab = TabSessionState::new(url);
            println!("opened custom tab {}", tab.id);
            CustomTabListAction::AddCustomTab { tab }.into()
        }
        Command::Select { id } => TabListAction::select(id).into(),
        Command::Remove { id, keep_parent } => TabListAction::RemoveTab {
            id: TabId::from(id),
            select_parent_if_exists: !keep_parent,
        }
        .into(),
        Command::CloseAll => TabListAction::RemoveAllTabs.into(),
        Command::ClosePrivate => TabListAction::RemoveAllPrivateTabs.into(),
        Command::CloseNormal => TabListAction::RemoveAllNormalTabs.into(),
        Command::Undo => {
            let Some(closed) = state.closed_tabs.tabs.first().cloned() else {
                println!("nothing to reopen");
                return Ok(());
            };
            let _ = store.dispatch(RecentlyClosedAction::RemoveClosedTab(closed.id.clone()));
            let parent_id = closed.parent_id.clone();
            TabListAction::AddTab {
                tab: closed.into_tab_session(),
                select: true,
                parent_id,
            }
            .into()
        }
        Command::Title { id, title } => {
            // "." addresses the selected tab
            let target = if id == "." {
                Target::SelectedTab
            } else {
                Target::Tab(TabId::from(id))
            };
            let Some(tab) = target.lookup_in(&state) else {
                println!("no such tab");
                return Ok(());
            };
            ContentAction::UpdateTitle {
                id: tab.id.clone(),
                title,
            }
            .into()
        }
        Command::List => {
            print_tabs(&state);
            return Ok(());
        }
        Command::Json => {
            let json = serde_json::to_string_pretty(&*state).context("Failed to serialize state")?;
            println!("{}", json);
            return Ok(());
        }
        Command::Save => SessionAction::Save.into(),
        Command::Help => {
            println!("{}", command::HELP);
            return Ok(());
        }
        Command::Quit => return Ok(()),
    };

    store.dispatch(action).join()?;
    print_tabs(&store.state());
    Ok(())
}

/// Number of ancestors of `tab` that are still open
fn depth(state: &BrowserState, tab: &TabSessionState) -> usize {
    let mut depth = 0;
    let mut parent = tab.parent_id.as_ref();
    while let Some(found) = parent.and_then(|id| state.find_tab(id)) {
        depth += 1;
        if depth >= state.tabs.len() {
            break;
        }
        parent = found.parent_id.as_ref();
    }
    depth
}

fn print_tabs(state: &BrowserState) {
    if state.tabs.is_empty() && state.custom_tabs.is_empty() {
        println!("(no tabs)");
    }

    for tab in &state.tabs {
        let marker = if state.selected_tab_id.as_ref() == Some(&tab.id) {
            '*'
        } else {
            ' '
        };
        let private = if tab.private { " [private]" } else { "" };
        let label = if tab.content.title.is_empty() {
            &tab.content.url
        } else {
            &tab.content.title
        };
        println!(
            "{} {}{} {}{}",
            marker,
            "  ".repeat(depth(state, tab)),
            tab.id,
            label,
            private
        );
    }

    for tab in &state.custom_tabs {
        println!("  (custom) {} {}", tab.id, tab.content.url);
    }

    if !state.closed_tabs.tabs.is_empty() {
        println!("  {} recently closed", state.closed_tabs.tabs.len());
    }
}
