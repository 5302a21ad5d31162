use std::env;
use std::error::Error;
use std::io::{self, Stdout, Write};
use std::path::Path;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use unicode_width::UnicodeWidthStr;

use panelform::{
    Effect, FormSchema, FormSession, PanelEvent, Record, RenderPlan, Row, TextInputKind,
    TextPrompt, config, demo,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let schema = match env::args().nth(1) {
        Some(path) => config::load_path(Path::new(&path))?,
        None => demo::report_issue_schema(),
    };

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let result = event_loop(&mut stdout, schema);

    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    terminal::disable_raw_mode()?;

    if let Some(record) = result? {
        println!("Record delivered:");
        println!("{}", serde_json::to_string_pretty(&record.to_json())?);
    }
    Ok(())
}

fn event_loop(stdout: &mut Stdout, schema: FormSchema) -> Result<Option<Record>, Box<dyn Error>> {
    let mut host = Host::new(schema);
    let effects = host.session.handle(PanelEvent::Opened);
    host.apply(effects);

    loop {
        host.draw(stdout)?;

        let Event::Key(key) = read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            break;
        }
        if matches!(host.mode, Mode::Panel)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            break;
        }

        host.handle_key(key);
        if host.delivered.is_some() {
            break;
        }
    }

    Ok(host.delivered)
}

enum Mode {
    Panel,
    Prompt { prompt: TextPrompt, buffer: String },
}

/// Terminal stand-in for a touch panel: rows become numbered lines, the text
/// dialog becomes an inline line editor, delivery ends the program.
struct Host {
    session: FormSession,
    plan: RenderPlan,
    mode: Mode,
    notice: Option<String>,
    delivered: Option<Record>,
}

impl Host {
    fn new(schema: FormSchema) -> Self {
        Self {
            session: FormSession::new(schema),
            plan: RenderPlan::default(),
            mode: Mode::Panel,
            notice: None,
            delivered: None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;
        if matches!(self.mode, Mode::Panel) {
            self.panel_key(key);
        } else {
            self.prompt_key(key);
        }
    }

    fn panel_key(&mut self, key: KeyEvent) {
        let KeyCode::Char(ch) = key.code else { return };
        if ch == 'r' {
            let effects = self.session.handle(PanelEvent::Opened);
            self.apply(effects);
            return;
        }

        let Some(digit) = ch.to_digit(10) else { return };
        if digit == 0 {
            return;
        }
        let Some(event) = self.pressable(digit as usize - 1) else {
            return;
        };
        let effects = self.session.handle(event);
        self.apply(effects);
    }

    /// Map a 0-based on-screen number to the event its row stands for.
    fn pressable(&self, index: usize) -> Option<PanelEvent> {
        self.plan
            .rows()
            .iter()
            .filter_map(|row| match row {
                Row::Prompt { .. } => None,
                Row::Field { id, .. } | Row::Submit { id, .. } => {
                    Some(PanelEvent::WidgetPressed { id: id.clone() })
                }
                Row::Option { field, index, .. } => Some(PanelEvent::OptionPicked {
                    field: field.clone(),
                    index: *index,
                }),
            })
            .nth(index)
    }

    fn prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Panel;
            }
            KeyCode::Enter => {
                let Mode::Prompt { prompt, buffer } =
                    std::mem::replace(&mut self.mode, Mode::Panel)
                else {
                    return;
                };
                let effects = self.session.handle(PanelEvent::TextEntered {
                    field: prompt.field,
                    text: buffer,
                });
                self.apply(effects);
            }
            KeyCode::Backspace => {
                if let Mode::Prompt { buffer, .. } = &mut self.mode {
                    buffer.pop();
                }
            }
            KeyCode::Char(ch) => {
                if let Mode::Prompt { prompt, buffer } = &mut self.mode {
                    if accepts(prompt.input, ch) {
                        buffer.push(ch);
                    }
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Render(plan) => self.plan = plan,
                Effect::PromptText(prompt) => {
                    let buffer = prompt.initial.clone().unwrap_or_default();
                    self.mode = Mode::Prompt { prompt, buffer };
                }
                Effect::Notify { message, .. } => self.notice = Some(message),
                Effect::ClosePanel => {}
                Effect::Deliver(record) => self.delivered = Some(record),
            }
        }
    }

    fn draw(&self, stdout: &mut Stdout) -> io::Result<()> {
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(self.session.schema().title()),
            SetAttribute(Attribute::Reset),
            Print("\r\n\r\n")
        )?;

        match &self.mode {
            Mode::Panel => self.draw_panel(stdout)?,
            Mode::Prompt { prompt, buffer } => draw_prompt(stdout, prompt, buffer)?,
        }

        if let Some(notice) = &self.notice {
            queue!(
                stdout,
                Print("\r\n"),
                SetForegroundColor(Color::Yellow),
                Print(notice),
                ResetColor,
                Print("\r\n")
            )?;
        }
        stdout.flush()
    }

    fn draw_panel(&self, stdout: &mut Stdout) -> io::Result<()> {
        let widest = self.plan.widest_label();
        let mut number = 0;

        for row in self.plan.rows() {
            if let Row::Prompt { text } = row {
                queue!(
                    stdout,
                    SetForegroundColor(Color::DarkGrey),
                    Print(text),
                    ResetColor,
                    Print("\r\n")
                )?;
                continue;
            }

            number += 1;
            let label = row.button_label().unwrap_or_default();
            let color = if matches!(row, Row::Submit { .. }) {
                Color::Green
            } else {
                Color::Cyan
            };
            queue!(
                stdout,
                SetForegroundColor(color),
                Print(format!("[{}] ", number)),
                ResetColor,
                Print(label)
            )?;
            if let Some(text) = row.text() {
                let gap = widest.saturating_sub(label.width()) + 2;
                queue!(
                    stdout,
                    Print(" ".repeat(gap)),
                    SetForegroundColor(Color::DarkGrey),
                    Print(text),
                    ResetColor
                )?;
            }
            queue!(stdout, Print("\r\n"))?;
        }

        queue!(
            stdout,
            Print("\r\n"),
            SetForegroundColor(Color::DarkGrey),
            Print("1-9 press  r restart  q quit"),
            ResetColor,
            Print("\r\n")
        )?;
        Ok(())
    }
}

fn draw_prompt(stdout: &mut Stdout, prompt: &TextPrompt, buffer: &str) -> io::Result<()> {
    if !prompt.prompt.is_empty() {
        queue!(stdout, Print(&prompt.prompt), Print("\r\n"))?;
    }
    if !prompt.placeholder.is_empty() {
        queue!(
            stdout,
            SetForegroundColor(Color::DarkGrey),
            Print(&prompt.placeholder),
            ResetColor,
            Print("\r\n")
        )?;
    }

    let shown = match prompt.input {
        TextInputKind::Password | TextInputKind::Pin => "*".repeat(buffer.chars().count()),
        TextInputKind::SingleLine | TextInputKind::Numeric => buffer.to_string(),
    };
    queue!(stdout, Print("> "), Print(shown), Print("_\r\n"))?;
    queue!(
        stdout,
        Print("\r\n"),
        SetForegroundColor(Color::DarkGrey),
        Print("Enter confirm  Esc cancel"),
        ResetColor,
        Print("\r\n")
    )?;
    Ok(())
}

fn accepts(input: TextInputKind, ch: char) -> bool {
    match input {
        TextInputKind::Numeric | TextInputKind::Pin => ch.is_ascii_digit(),
        TextInputKind::SingleLine | TextInputKind::Password => !ch.is_control(),
    }
}
