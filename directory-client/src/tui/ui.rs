use ratatui::{prelude::*, widgets::*};
use shared::Employee;
use tui_input::Input;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::app::{App, Focus, StatusKind};

const CREATED_FORMAT: &str = "%b %-d, %Y";

pub fn draw(f: &mut Frame, app: &App, logger_state: &TuiWidgetState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Form + table
            Constraint::Length(3), // Status
            Constraint::Length(8), // Logs
        ])
        .split(f.area());

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    draw_header(f, app, chunks[0]);
    draw_form(f, app, main_chunks[0]);
    draw_directory(f, app, main_chunks[1]);
    draw_status(f, app, chunks[2]);

    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs (PgUp/PgDown) ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(logger_state);
    f.render_widget(logs, chunks[3]);

    if let Some(employee) = &app.confirm_delete {
        draw_confirm(f, employee);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let backend = match app.backend_ok {
        None => Span::styled(" CONNECTING... ", Style::default().fg(Color::Yellow)),
        Some(true) => Span::styled(
            " Online ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Some(false) => Span::styled(
            " Offline ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::raw(" Employee Directory "),
        Span::raw(" | "),
        Span::styled(app.base_url.as_str(), Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        backend,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);

    let help = Paragraph::new("a add  e edit  d delete  / search  r refresh  q quit ")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(help, area.inner(Margin::new(1, 1)));
}

/// Single-line text box; places the cursor when focused
fn draw_input(f: &mut Frame, input: &Input, title: &str, focused: bool, disabled: bool, area: Rect) {
    let style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let paragraph = Paragraph::new(input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(paragraph, area);

    if focused && !disabled {
        f.set_cursor_position((
            area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.editing {
        Some(employee) => format!(" Edit Employee #{} ", employee.id),
        None => " Add New Employee ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.focus.is_form() {
            Color::Yellow
        } else {
            Color::Blue
        }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    draw_input(f, &app.name, " Name ", app.focus == Focus::Name, app.loading, rows[0]);
    draw_input(f, &app.email, " Email ", app.focus == Focus::Email, app.loading, rows[1]);
    draw_input(
        f,
        &app.position,
        " Position ",
        app.focus == Focus::Position,
        app.loading,
        rows[2],
    );

    let submit = if app.loading {
        Span::styled("[ Saving... ]", Style::default().fg(Color::DarkGray))
    } else if app.editing.is_some() {
        Span::styled("[ Enter: Update Employee ]  Esc: cancel", Style::default().fg(Color::Green))
    } else {
        Span::styled("[ Enter: Add Employee ]", Style::default().fg(Color::Green))
    };
    f.render_widget(Paragraph::new(Line::from(submit)), rows[3]);
}

fn draw_directory(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let search_title = if app.is_fetching() {
        " Search by name ... "
    } else {
        " Search by name "
    };
    draw_input(f, &app.search, search_title, app.focus == Focus::Search, false, chunks[0]);

    let header = Row::new(["ID", "Name", "Email", "Position", "Created"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .employees
        .iter()
        .map(|e| {
            Row::new(vec![
                e.id.to_string(),
                e.name.clone(),
                e.email.clone(),
                e.position.clone(),
                e.created_at.format(CREATED_FORMAT).to_string(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(25),
        Constraint::Percentage(30),
        Constraint::Percentage(20),
        Constraint::Length(14),
    ];

    let title = format!(" Employees ({}) ", app.employees.len());
    let mut state = TableState::default();
    if !app.employees.is_empty() {
        state.select(Some(app.selected));
    }

    if app.employees.is_empty() {
        let empty = Paragraph::new("No employees found")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ")
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if app.focus == Focus::Table {
                    Color::Yellow
                } else {
                    Color::Magenta
                })),
        );
    f.render_stateful_widget(table, chunks[1], &mut state);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => Color::Cyan,
                StatusKind::Success => Color::Green,
                StatusKind::Error => Color::Red,
            };
            (status.text.as_str(), Style::default().fg(color))
        }
        None => ("", Style::default()),
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(paragraph, area);
}

fn draw_confirm(f: &mut Frame, employee: &Employee) {
    let area = centered(f.area(), 50, 5);
    let text = vec![
        Line::from(format!("Delete {} ({})?", employee.name, employee.email)),
        Line::from(Span::styled(
            "y: confirm   n: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popup = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = area.width * percent_x / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height: height.min(area.height),
    }
}
