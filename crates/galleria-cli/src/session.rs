//! Interactive browse-and-select session.
//!
//! Reads line commands from stdin and feeds the resulting table events into
//! a [`SelectionManager`]; the manager is the single owner of selection
//! state, the session only translates commands and renders pages.

use std::collections::HashSet;
use std::io::Write;

use anyhow::Context;
use galleria_artic::{ArticClient, ArticError, ArtworkId, FIELDS_FULL};
use galleria_core::{SelectProgress, SelectionManager, TableEvent};

use crate::output::{self, ColorMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Next,
    Prev,
    Goto(u32),
    Toggle(Vec<ArtworkId>),
    Select(usize),
    Selected,
    Help,
    Quit,
}

/// Parse one input line. `Ok(None)` means a blank line.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let command = match word {
        "n" | "next" => SessionCommand::Next,
        "p" | "prev" => SessionCommand::Prev,
        "g" | "goto" => {
            let page: u32 = args
                .first()
                .and_then(|a| a.parse().ok())
                .filter(|p| *p >= 1)
                .ok_or("usage: goto <page>")?;
            SessionCommand::Goto(page)
        }
        "t" | "toggle" => {
            if args.is_empty() {
                return Err("usage: toggle <id> [<id>...]".into());
            }
            let ids = args
                .iter()
                .map(|a| a.parse::<ArtworkId>().map_err(|_| format!("not an id: {a}")))
                .collect::<Result<Vec<_>, _>>()?;
            SessionCommand::Toggle(ids)
        }
        "s" | "select" => {
            let limit: usize = args
                .first()
                .and_then(|a| a.parse().ok())
                .ok_or("usage: select <count>")?;
            SessionCommand::Select(limit)
        }
        "ls" | "selected" => SessionCommand::Selected,
        "h" | "help" | "?" => SessionCommand::Help,
        "q" | "quit" | "exit" => SessionCommand::Quit,
        other => return Err(format!("unknown command `{other}` (try `help`)")),
    };
    Ok(Some(command))
}

const HELP: &str = "\
commands:
  next / prev          move one page
  goto <page>          jump to a page
  toggle <id> [...]    check or uncheck rows on this page
  select <count>       select the first <count> artworks of the dataset
  selected             list every selected id
  quit";

pub struct Session {
    manager: SelectionManager,
    client: ArticClient,
    page_size: u32,
    page: u32,
    total: u64,
    color: ColorMode,
}

impl Session {
    pub fn new(client: ArticClient, page_size: u32, color: ColorMode) -> Self {
        Self {
            manager: SelectionManager::new(),
            client,
            page_size,
            page: 1,
            total: 0,
            color,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        self.goto(1).await.context("initial page load failed")?;
        self.render();

        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            print!("galleria> ");
            std::io::stdout().flush()?;

            line.clear();
            if stdin.read_line(&mut line)? == 0 {
                break;
            }
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    if !self.handle(command).await? {
                        break;
                    }
                }
                Err(message) => println!("{message}"),
            }
        }
        Ok(())
    }

    async fn handle(&mut self, command: SessionCommand) -> anyhow::Result<bool> {
        match command {
            SessionCommand::Next => {
                if u64::from(self.page) < self.total_pages() {
                    self.navigate(self.page + 1).await;
                } else {
                    println!("already on the last page");
                }
            }
            SessionCommand::Prev => {
                if self.page > 1 {
                    self.navigate(self.page - 1).await;
                } else {
                    println!("already on the first page");
                }
            }
            SessionCommand::Goto(page) => {
                if u64::from(page) <= self.total_pages() {
                    self.navigate(page).await;
                } else {
                    println!(
                        "page {page} is past the end (last page is {})",
                        self.total_pages()
                    );
                }
            }
            SessionCommand::Toggle(ids) => {
                self.toggle(ids);
                self.render();
            }
            SessionCommand::Select(limit) => {
                self.select_first(limit).await;
            }
            SessionCommand::Selected => {
                let mut stdout = std::io::stdout();
                output::print_selected(&mut stdout, self.manager.selected_ids(), self.color)?;
            }
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Fetch and load a page; a failure keeps the current page and reports
    /// a message, the selection set is untouched either way.
    async fn navigate(&mut self, page: u32) {
        match self.goto(page).await {
            Ok(()) => self.render(),
            Err(e) => println!("page load failed: {e}"),
        }
    }

    async fn goto(&mut self, page: u32) -> Result<(), ArticError> {
        let fetched = self
            .client
            .fetch_page(page, self.page_size, FIELDS_FULL)
            .await?;
        self.total = fetched.total;
        self.page = page;
        self.manager.apply(TableEvent::PageLoaded(fetched));
        Ok(())
    }

    /// Flip the given rows and report the resulting checked set to the
    /// manager, the way a table widget reports its current page selection.
    fn toggle(&mut self, ids: Vec<ArtworkId>) {
        let on_page: HashSet<ArtworkId> =
            self.manager.current_page().iter().map(|a| a.id).collect();
        let mut chosen: HashSet<ArtworkId> = self
            .manager
            .visible_selection()
            .iter()
            .map(|a| a.id)
            .collect();

        for id in ids {
            if !on_page.contains(&id) {
                println!("id {id} is not on this page");
                continue;
            }
            if !chosen.remove(&id) {
                chosen.insert(id);
            }
        }
        self.manager.apply(TableEvent::SelectionChanged(chosen));
    }

    async fn select_first(&mut self, limit: usize) {
        let result = self
            .manager
            .select_first_n(limit, self.page_size, &self.client, |progress| {
                if let SelectProgress::PageFetched {
                    page,
                    accumulated,
                    target,
                } = progress
                {
                    println!("  fetched page {page} ({accumulated}/{target} ids)");
                }
            })
            .await;

        match result {
            Ok(count) => {
                println!("selected the first {count} artworks");
                self.render();
            }
            Err(e) => println!("bulk select failed, nothing was committed: {e}"),
        }
    }

    fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.page_size)).max(1)
    }

    fn render(&self) {
        let visible: HashSet<ArtworkId> = self
            .manager
            .visible_selection()
            .iter()
            .map(|a| a.id)
            .collect();
        let mut stdout = std::io::stdout();
        let _ = output::print_page(
            &mut stdout,
            self.page,
            self.page_size,
            self.manager.current_page(),
            self.total,
            &visible,
            self.manager.selected_count(),
            self.color,
        );
    }
}
