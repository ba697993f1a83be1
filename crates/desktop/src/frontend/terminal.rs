//! Line-oriented terminal front end.

use std::fmt::Write as _;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use stockroom_core::ItemId;

use crate::api::InventoryApi;
use crate::frontend::app::{Dashboard, DashboardView, Prompter};
use crate::frontend::form::FormField;
use crate::frontend::views::ListView;

pub const HELP: &str = "commands: refresh | add | edit <id> | cancel | set <field> <value> | submit | delete <id> | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Add,
    Edit(ItemId),
    Cancel,
    Set(FormField, String),
    Submit,
    Delete(ItemId),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_lowercase().as_str() {
            "refresh" | "r" => Ok(Command::Refresh),
            "add" | "new" => Ok(Command::Add),
            "edit" => parse_id(rest).map(Command::Edit),
            "cancel" => Ok(Command::Cancel),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = field.parse::<FormField>().map_err(|e| e.to_string())?;
                Ok(Command::Set(field, value.trim().to_string()))
            }
            "submit" | "save" => Ok(Command::Submit),
            "delete" | "rm" => parse_id(rest).map(Command::Delete),
            "help" | "?" | "" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command '{other}'")),
        }
    }
}

fn parse_id(raw: &str) -> Result<ItemId, String> {
    raw.parse::<ItemId>()
        .map_err(|_| format!("expected an item id, got '{raw}'"))
}

pub fn render(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Inventory Dashboard ===");

    if let Some(error) = &view.error_banner {
        let _ = writeln!(out, "!! {error}");
    }

    let stats = &view.stats;
    let _ = writeln!(
        out,
        "Items: {}  |  Total value: {}  |  Low stock: {}{}",
        stats.item_count,
        stats.total_value,
        stats.low_stock_count,
        if stats.warning { " (!)" } else { "" }
    );
    let _ = writeln!(out);

    match &view.list {
        ListView::Loading => {
            let _ = writeln!(out, "Loading inventory...");
        }
        ListView::Empty => {
            let _ = writeln!(out, "No items in inventory. Add your first item above!");
        }
        ListView::Items(cards) => {
            for card in cards {
                let badge = if card.low_stock { "  [LOW STOCK]" } else { "" };
                let _ = writeln!(out, "#{} {}{}", card.id, card.name, badge);
                if let Some(description) = &card.description {
                    let _ = writeln!(out, "    {description}");
                }
                let _ = write!(
                    out,
                    "    qty {}  @ {}  = {}",
                    card.quantity, card.price, card.line_value
                );
                if let Some(category) = &card.category {
                    let _ = write!(out, "  [{category}]");
                }
                let _ = writeln!(out);
            }
        }
    }

    let form = &view.form;
    let _ = writeln!(out);
    let _ = writeln!(out, "--- {} ---", form.title);
    for (label, value) in form.form.fields() {
        let _ = writeln!(out, "  {label:<12} {value}");
    }
    let _ = write!(out, "  submit: {}", form.submit_label);
    if form.can_cancel {
        let _ = write!(out, "  |  cancel");
    }
    let _ = writeln!(out);
    out
}

/// Prompts on an output stream and reads answers from the same input the
/// command loop uses.
pub struct Terminal<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    pub async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.lines.next_line().await
    }

    pub async fn print(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }

    pub async fn prompt(&mut self) -> std::io::Result<()> {
        self.print("> ").await
    }
}

#[async_trait]
impl<R, W> Prompter for Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&mut self, message: &str) -> bool {
        if self.print(&format!("{message} [y/N] ")).await.is_err() {
            return false;
        }
        match self.read_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }

    async fn notify(&mut self, message: &str) {
        if let Err(e) = self.print(&format!("{message}\n")).await {
            tracing::warn!(error = %e, "failed to write notification");
        }
    }
}

/// Drive the dashboard until `quit` or end of input.
pub async fn run<A, R, W>(dashboard: &mut Dashboard<A>, terminal: &mut Terminal<R, W>) -> std::io::Result<()>
where
    A: InventoryApi,
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    dashboard.refresh().await;
    terminal.print(&render(&dashboard.view())).await?;
    terminal.print(&format!("{HELP}\n")).await?;

    loop {
        terminal.prompt().await?;
        let Some(line) = terminal.read_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                terminal.print(&format!("{e}\n{HELP}\n")).await?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                terminal.print(&format!("{HELP}\n")).await?;
                continue;
            }
            Command::Refresh => dashboard.refresh().await,
            Command::Add => dashboard.cancel_edit(),
            Command::Edit(id) => {
                if !dashboard.start_edit(id) {
                    terminal.print(&format!("no listed item with id {id}\n")).await?;
                    continue;
                }
            }
            Command::Cancel => dashboard.cancel_edit(),
            Command::Set(field, value) => dashboard.set_field(field, value),
            Command::Submit => {
                dashboard.submit(terminal).await;
            }
            Command::Delete(id) => {
                dashboard.delete(id, terminal).await;
            }
        }

        terminal.print(&render(&dashboard.view())).await?;
    }

    Ok(())
}
