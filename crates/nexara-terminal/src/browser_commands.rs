//! Terminal commands that drive the browsing session.

use nexara_nav::{NavigationController, TabId};
use nexara_types::error::{NexaraError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register all browser commands into a registry.
pub fn register_browser_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(OpenCmd));
    reg.register(Box::new(BackCmd));
    reg.register(Box::new(ForwardCmd));
    reg.register(Box::new(ReloadCmd));
    reg.register(Box::new(HomeCmd));
    reg.register(Box::new(UrlCmd));
    reg.register(Box::new(SubmitCmd));
    reg.register(Box::new(TabCmd));
    reg.register(Box::new(BookmarkCmd));
    reg.register(Box::new(RecentCmd));
    reg.register(Box::new(LoadedCmd));
    reg.register(Box::new(StateCmd));
    reg.register(Box::new(QuitCmd));
}

/// One-line description of the active tab.
fn status(nav: &NavigationController) -> String {
    let tab = nav.current_tab();
    format!(
        "[tab {}] {} <{}>",
        tab.id(),
        nav.display_title(tab),
        tab.url()
    )
}

/// Status line when the intent changed something, `unchanged` otherwise.
fn outcome(nav: &NavigationController, changed: bool, unchanged: &str) -> CommandOutput {
    if changed {
        CommandOutput::Text(status(nav))
    } else {
        CommandOutput::Text(format!("{unchanged}\n{}", status(nav)))
    }
}

fn parse_tab_id(arg: Option<&&str>, usage: &str) -> Result<TabId> {
    let raw = arg.ok_or_else(|| NexaraError::Command(format!("usage: {usage}")))?;
    raw.parse::<u64>()
        .map(TabId::new)
        .map_err(|_| NexaraError::Command(format!("invalid tab id: {raw}")))
}

// -------------------------------------------------------------------
// open
// -------------------------------------------------------------------
struct OpenCmd;

impl Command for OpenCmd {
    fn name(&self) -> &str {
        "open"
    }

    fn description(&self) -> &str {
        "Navigate the active tab to a URL"
    }

    fn usage(&self) -> &str {
        "open <url>"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(NexaraError::Command(format!("usage: {}", self.usage())));
        }
        let changed = env.nav.navigate(&args.join(" "));
        Ok(outcome(env.nav, changed, "Nothing to open"))
    }
}

// -------------------------------------------------------------------
// back / forward / reload / home
// -------------------------------------------------------------------
struct BackCmd;

impl Command for BackCmd {
    fn name(&self) -> &str {
        "back"
    }

    fn description(&self) -> &str {
        "Go back in the active tab's history"
    }

    fn usage(&self) -> &str {
        "back"
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let changed = env.nav.go_back();
        Ok(outcome(env.nav, changed, "Already at the oldest page"))
    }
}

struct ForwardCmd;

impl Command for ForwardCmd {
    fn name(&self) -> &str {
        "forward"
    }

    fn description(&self) -> &str {
        "Go forward in the active tab's history"
    }

    fn usage(&self) -> &str {
        "forward"
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let changed = env.nav.go_forward();
        Ok(outcome(env.nav, changed, "Already at the newest page"))
    }
}

struct ReloadCmd;

impl Command for ReloadCmd {
    fn name(&self) -> &str {
        "reload"
    }

    fn description(&self) -> &str {
        "Reload the active page"
    }

    fn usage(&self) -> &str {
        "reload"
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let changed = env.nav.reload();
        Ok(outcome(env.nav, changed, "Nothing to reload"))
    }
}

struct HomeCmd;

impl Command for HomeCmd {
    fn name(&self) -> &str {
        "home"
    }

    fn description(&self) -> &str {
        "Open the start page in the active tab"
    }

    fn usage(&self) -> &str {
        "home"
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        env.nav.go_home();
        Ok(CommandOutput::Text(status(env.nav)))
    }
}

// -------------------------------------------------------------------
// url / submit
// -------------------------------------------------------------------
struct UrlCmd;

impl Command for UrlCmd {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Show or edit the URL bar"
    }

    fn usage(&self) -> &str {
        "url [text]"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if !args.is_empty() {
            env.nav.set_url_bar(&args.join(" "));
        }
        Ok(CommandOutput::Text(format!(
            "URL bar: {}",
            env.nav.url_bar_display()
        )))
    }
}

struct SubmitCmd;

impl Command for SubmitCmd {
    fn name(&self) -> &str {
        "submit"
    }

    fn description(&self) -> &str {
        "Navigate to the URL bar contents"
    }

    fn usage(&self) -> &str {
        "submit"
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let changed = env.nav.submit_url_bar();
        Ok(outcome(env.nav, changed, "URL bar is empty"))
    }
}

// -------------------------------------------------------------------
// tab
// -------------------------------------------------------------------
struct TabCmd;

impl TabCmd {
    fn list(nav: &NavigationController) -> CommandOutput {
        let active = nav.tabs().active_id();
        let rows = nav
            .tabs()
            .tabs()
            .iter()
            .map(|tab| {
                vec![
                    if tab.id() == active { "*" } else { "" }.to_string(),
                    tab.id().to_string(),
                    nav.display_title(tab).to_string(),
                    tab.url().to_string(),
                ]
            })
            .collect();
        CommandOutput::Table {
            headers: vec![
                String::new(),
                "ID".to_string(),
                "TITLE".to_string(),
                "URL".to_string(),
            ],
            rows,
        }
    }
}

impl Command for TabCmd {
    fn name(&self) -> &str {
        "tab"
    }

    fn description(&self) -> &str {
        "Open, close, switch or list tabs"
    }

    fn usage(&self) -> &str {
        "tab new | tab close <id> | tab switch <id> | tab list"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match args.first().copied().unwrap_or("list") {
            "new" => {
                env.nav.new_tab();
                Ok(CommandOutput::Text(status(env.nav)))
            },
            "close" => {
                let id = parse_tab_id(args.get(1), "tab close <id>")?;
                let changed = env.nav.close_tab(id);
                Ok(outcome(env.nav, changed, &format!("Tab {id} left open")))
            },
            "switch" => {
                let id = parse_tab_id(args.get(1), "tab switch <id>")?;
                let changed = env.nav.switch_tab(id);
                Ok(outcome(env.nav, changed, &format!("No tab {id}")))
            },
            "list" => Ok(Self::list(env.nav)),
            other => Err(NexaraError::Command(format!(
                "tab: unknown subcommand: {other}"
            ))),
        }
    }
}

// -------------------------------------------------------------------
// bookmark
// -------------------------------------------------------------------
struct BookmarkCmd;

impl Command for BookmarkCmd {
    fn name(&self) -> &str {
        "bookmark"
    }

    fn description(&self) -> &str {
        "Bookmark the active page, remove or list bookmarks"
    }

    fn usage(&self) -> &str {
        "bookmark add [name] | bookmark rm <url> | bookmark list"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match args.first().copied().unwrap_or("list") {
            "add" => {
                let added = if args.len() > 1 {
                    let name = args[1..].join(" ");
                    let mut given = move |_: &str| Some(name.clone());
                    env.nav.bookmark_current(&mut given)
                } else {
                    env.nav.bookmark_current(&mut *env.prompt)
                };
                let url = env.nav.current_tab().url().to_string();
                Ok(CommandOutput::Text(if added {
                    format!("Bookmarked {url}")
                } else {
                    format!("Not bookmarked: {url}")
                }))
            },
            "rm" | "remove" => {
                let url = args
                    .get(1)
                    .ok_or_else(|| NexaraError::Command("usage: bookmark rm <url>".to_string()))?;
                let removed = env.nav.remove_bookmark(url)
                    || nexara_nav::url::normalize(url)
                        .is_some_and(|normalized| env.nav.remove_bookmark(&normalized));
                Ok(CommandOutput::Text(if removed {
                    format!("Removed bookmark {url}")
                } else {
                    format!("No bookmark for {url}")
                }))
            },
            "list" => {
                let rows = env
                    .nav
                    .sites()
                    .bookmarks()
                    .iter()
                    .map(|bm| vec![bm.name.clone(), bm.url.clone()])
                    .collect();
                Ok(CommandOutput::Table {
                    headers: vec!["NAME".to_string(), "URL".to_string()],
                    rows,
                })
            },
            other => Err(NexaraError::Command(format!(
                "bookmark: unknown subcommand: {other}"
            ))),
        }
    }
}

// -------------------------------------------------------------------
// recent
// -------------------------------------------------------------------
struct RecentCmd;

impl Command for RecentCmd {
    fn name(&self) -> &str {
        "recent"
    }

    fn description(&self) -> &str {
        "List recently visited sites"
    }

    fn usage(&self) -> &str {
        "recent"
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let rows = env
            .nav
            .sites()
            .recents()
            .map(|r| vec![r.name.clone(), r.url.clone()])
            .collect();
        Ok(CommandOutput::Table {
            headers: vec!["NAME".to_string(), "URL".to_string()],
            rows,
        })
    }
}

// -------------------------------------------------------------------
// loaded
// -------------------------------------------------------------------
struct LoadedCmd;

impl Command for LoadedCmd {
    fn name(&self) -> &str {
        "loaded"
    }

    fn description(&self) -> &str {
        "Report a finished page load and its title"
    }

    fn usage(&self) -> &str {
        "loaded <tab> <url> <title...>"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if args.len() < 3 {
            return Err(NexaraError::Command(format!("usage: {}", self.usage())));
        }
        let id = parse_tab_id(args.first(), self.usage())?;
        let applied = env.nav.page_loaded(id, args[1], &args[2..].join(" "));
        Ok(outcome(env.nav, applied, "Load report ignored"))
    }
}

// -------------------------------------------------------------------
// state
// -------------------------------------------------------------------
struct StateCmd;

impl Command for StateCmd {
    fn name(&self) -> &str {
        "state"
    }

    fn description(&self) -> &str {
        "Print the chrome state as JSON"
    }

    fn usage(&self) -> &str {
        "state"
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let json = serde_json::to_string_pretty(&env.nav.snapshot())?;
        Ok(CommandOutput::Text(json))
    }
}

// -------------------------------------------------------------------
// quit
// -------------------------------------------------------------------
struct QuitCmd;

impl Command for QuitCmd {
    fn name(&self) -> &str {
        "quit"
    }

    fn description(&self) -> &str {
        "End the session"
    }

    fn usage(&self) -> &str {
        "quit"
    }

    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Quit)
    }
}
