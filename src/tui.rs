mod input;

use crossbeam::channel::Sender;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Terminal,
};
use std::time::Instant;
use std::{error::Error, io, time::Duration};

use crate::event_loop::EngineMessage;
use crate::state::SharedState;
use crate::tui::input::{is_quit_key, map_key_event};

pub fn run_tui_event_loop(
    shared_state: SharedState,
    message_tx: Sender<EngineMessage>,
) -> Result<(), Box<dyn Error>> {
    log::info!("Starting TUI event loop");
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &shared_state, &message_tx);

    // Clean up the terminal before handing control back
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    log::info!("Terminal cleaned up, TUI event loop done");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared_state: &SharedState,
    message_tx: &Sender<EngineMessage>,
) -> Result<(), Box<dyn Error>> {
    loop {
        // Repaint the UI on every iteration
        terminal.draw(|f| render_ui(f, shared_state))?;

        // Poll for an event with a timeout
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let message = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit_key(&key) {
                    log::info!("Quit key pressed, leaving TUI event loop");
                    let _ = message_tx.send(EngineMessage::Quit);
                    return Ok(());
                }
                map_key_event(key)
            }
            // A mouse click taps, same as the spacebar
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(EngineMessage::Tap(Instant::now()))
            }
            _ => None,
        };

        if let Some(message) = message {
            log::debug!("Sending message to engine: {:?}", message);
            if message_tx.send(message).is_err() {
                log::error!("Engine channel disconnected, leaving TUI event loop");
                return Ok(());
            }
        }
    }
}

fn render_ui<B: ratatui::backend::Backend>(
    f: &mut ratatui::Frame<B>,
    shared_state: &SharedState,
) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Title area
                Constraint::Length(4), // Tempo readout
                Constraint::Min(12),   // Timing table
                Constraint::Length(4), // Controls and notices
            ]
            .as_ref(),
        )
        .split(size);

    let (display_bpm, round_outputs, division_mode, timings, notice) = {
        let state = shared_state.lock().unwrap();
        (
            state.display_bpm(),
            state.round_state(),
            state.division_mode(),
            state.timings(),
            state.update_notice().map(|info| info.message.clone()),
        )
    };

    let title_block = Block::default().title("taptempors").borders(Borders::ALL);
    f.render_widget(title_block, chunks[0]);

    let tempo_text = if display_bpm > 0.0 {
        format!("BPM: {:.2}", display_bpm)
    } else {
        "BPM: --  (tap to begin)".to_string()
    };
    let tempo_info = format!(
        "{}\nRounding: {} | Unit: {}",
        tempo_text,
        if round_outputs { "on" } else { "off" },
        division_mode.label(),
    );
    let tempo_block = Block::default().title("Tempo").borders(Borders::ALL);
    let tempo_widget = Paragraph::new(tempo_info)
        .style(Style::default().fg(Color::Green))
        .block(tempo_block);
    f.render_widget(tempo_widget, chunks[1]);

    let rows: Vec<Row> = timings
        .rows()
        .iter()
        .map(|(note, value)| Row::new(vec![Cell::from(*note), Cell::from(value.to_string())]))
        .collect();
    let widths = [Constraint::Length(8), Constraint::Length(16)];
    let table = Table::new(rows)
        .header(
            Row::new(vec!["Note", division_mode.label()])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().title("Timings").borders(Borders::ALL))
        .widths(&widths)
        .column_spacing(2);
    f.render_widget(table, chunks[2]);

    let mut footer = String::from(
        "Space/Click: tap | R: reset | F: rounding | D: unit | U: update check | O: release page | Q: quit",
    );
    if let Some(notice) = notice {
        footer.push('\n');
        footer.push_str(&notice);
    }
    let footer_widget = Paragraph::new(footer)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title("Controls").borders(Borders::ALL));
    f.render_widget(footer_widget, chunks[3]);
}
