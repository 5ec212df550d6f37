//! Client application state
//!
//! `App` holds everything the screen shows and turns key presses and
//! server outcomes into [`Command`]s. It performs no I/O itself; the
//! terminal runner executes commands with [`execute`] and feeds the
//! resulting [`Outcome`]s back through [`App::apply`].

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shared::{Employee, EmployeeCreate, EmployeeUpdate, HealthResponse};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::subscription::{Fetch, SearchSubscription};
use crate::{ClientResult, HttpClient};

/// Which widget receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Search,
    Name,
    Email,
    Position,
}

impl Focus {
    pub fn is_form(self) -> bool {
        matches!(self, Focus::Name | Focus::Email | Focus::Position)
    }

    fn next_field(self) -> Self {
        match self {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Position,
            _ => Focus::Name,
        }
    }

    fn prev_field(self) -> Self {
        match self {
            Focus::Position => Focus::Email,
            Focus::Email => Focus::Name,
            _ => Focus::Position,
        }
    }
}

/// Work the runner must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Health,
    FetchList(Fetch),
    Create(EmployeeCreate),
    Update { id: i64, data: EmployeeUpdate },
    Delete(i64),
}

/// Result of an executed [`Command`]
#[derive(Debug)]
pub enum Outcome {
    Health(ClientResult<HealthResponse>),
    Listed {
        seq: u64,
        result: ClientResult<Vec<Employee>>,
    },
    Created(ClientResult<Employee>),
    Updated(ClientResult<Employee>),
    Deleted {
        id: i64,
        result: ClientResult<()>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

pub const MSG_FILL_ALL: &str = "Please fill all fields";
pub const MSG_WAIT: &str = "Please wait for the current request";

#[derive(Debug)]
pub struct App {
    pub base_url: String,
    pub focus: Focus,
    pub search: Input,
    pub name: Input,
    pub email: Input,
    pub position: Input,
    pub employees: Vec<Employee>,
    pub selected: usize,
    /// Row loaded into the form; `None` means the form creates
    pub editing: Option<Employee>,
    /// Row awaiting a y/n answer
    pub confirm_delete: Option<Employee>,
    pub status: Option<Status>,
    /// A write is in flight; the form is read-only
    pub loading: bool,
    pub backend_ok: Option<bool>,
    pub should_quit: bool,
    subscription: SearchSubscription,
}

impl App {
    pub fn new(base_url: impl Into<String>, search_debounce: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            focus: Focus::default(),
            search: Input::default(),
            name: Input::default(),
            email: Input::default(),
            position: Input::default(),
            employees: Vec::new(),
            selected: 0,
            editing: None,
            confirm_delete: None,
            status: None,
            loading: false,
            backend_ok: None,
            should_quit: false,
            subscription: SearchSubscription::new(search_debounce),
        }
    }

    /// First frame: probe the backend and subscribe to the search text
    pub fn mount(&mut self, now: Instant) -> Vec<Command> {
        self.subscription.observe(self.search.value(), now);
        vec![Command::Health]
    }

    /// Re-evaluate the search subscription
    pub fn tick(&mut self, now: Instant) -> Option<Command> {
        self.subscription.observe(self.search.value(), now);
        self.subscription.poll(now).map(Command::FetchList)
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees.get(self.selected)
    }

    pub fn is_fetching(&self) -> bool {
        self.subscription.is_pending()
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(Status {
            kind,
            text: text.into(),
        });
    }

    fn clear_form(&mut self) {
        self.name.reset();
        self.email.reset();
        self.position.reset();
        self.editing = None;
    }

    // ========== Key handling ==========

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Vec<Command> {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return Vec::new();
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }
        if self.confirm_delete.is_some() {
            return self.handle_confirm_key(key).into_iter().collect();
        }

        match self.focus {
            Focus::Table => self.handle_table_key(key, now),
            Focus::Search => {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter => self.focus = Focus::Table,
                    _ => {
                        self.search.handle_event(&Event::Key(key));
                    }
                }
                Vec::new()
            }
            Focus::Name | Focus::Email | Focus::Position => {
                self.handle_form_key(key).into_iter().collect()
            }
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent, now: Instant) -> Vec<Command> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('a') | KeyCode::Tab => self.focus = Focus::Name,
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            KeyCode::Char('r') => self.subscription.refresh(now),
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.employees.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Esc => {
                if self.editing.is_some() && !self.loading {
                    self.clear_form();
                    self.set_status(StatusKind::Info, "Edit cancelled");
                }
                self.focus = Focus::Table;
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev_field(),
            KeyCode::Enter => return self.submit(),
            _ if self.loading => {}
            _ => {
                let event = Event::Key(key);
                match self.focus {
                    Focus::Name => self.name.handle_event(&event),
                    Focus::Email => self.email.handle_event(&event),
                    Focus::Position => self.position.handle_event(&event),
                    _ => None,
                };
            }
        }
        None
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_delete(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.confirm_delete(false),
            _ => None,
        }
    }

    // ========== Actions ==========

    /// Validate the form locally and build the write request
    pub fn submit(&mut self) -> Option<Command> {
        if self.loading {
            self.set_status(StatusKind::Info, MSG_WAIT);
            return None;
        }

        let name = self.name.value().trim().to_string();
        let email = self.email.value().trim().to_string();
        let position = self.position.value().trim().to_string();
        if name.is_empty() || email.is_empty() || position.is_empty() {
            self.set_status(StatusKind::Error, MSG_FILL_ALL);
            return None;
        }

        let command = match &self.editing {
            Some(current) => {
                let data = EmployeeUpdate::diff(current, &name, &email, &position);
                if data.is_empty() {
                    self.set_status(StatusKind::Info, "No changes to save");
                    return None;
                }
                Command::Update {
                    id: current.id,
                    data,
                }
            }
            None => Command::Create(EmployeeCreate {
                name,
                email,
                position,
            }),
        };

        self.loading = true;
        self.set_status(StatusKind::Info, "Saving...");
        Some(command)
    }

    /// Load the selected row into the form
    pub fn begin_edit(&mut self) {
        let Some(employee) = self.selected_employee().cloned() else {
            return;
        };
        if self.loading {
            return;
        }
        self.name = Input::new(employee.name.clone());
        self.email = Input::new(employee.email.clone());
        self.position = Input::new(employee.position.clone());
        self.set_status(StatusKind::Info, format!("Editing {}", employee.name));
        self.editing = Some(employee);
        self.focus = Focus::Name;
    }

    /// Ask for confirmation before deleting the selected row
    pub fn request_delete(&mut self) {
        if self.loading {
            self.set_status(StatusKind::Info, MSG_WAIT);
            return;
        }
        if let Some(employee) = self.selected_employee().cloned() {
            self.set_status(
                StatusKind::Info,
                format!("Delete {}? Press y to confirm, n to cancel", employee.name),
            );
            self.confirm_delete = Some(employee);
        }
    }

    pub fn confirm_delete(&mut self, confirmed: bool) -> Option<Command> {
        let employee = self.confirm_delete.take()?;
        if !confirmed {
            self.set_status(StatusKind::Info, "Delete cancelled");
            return None;
        }
        if self.loading {
            self.set_status(StatusKind::Info, MSG_WAIT);
            return None;
        }
        self.loading = true;
        self.set_status(StatusKind::Info, format!("Deleting {}...", employee.name));
        Some(Command::Delete(employee.id))
    }

    // ========== Outcomes ==========

    pub fn apply(&mut self, outcome: Outcome, now: Instant) {
        match outcome {
            Outcome::Health(Ok(health)) => {
                tracing::info!(status = %health.status, "Backend health check: {}", health.message);
                self.backend_ok = Some(true);
            }
            Outcome::Health(Err(e)) => {
                tracing::error!(error = %e, "Backend connection failed");
                self.backend_ok = Some(false);
                self.set_status(StatusKind::Error, e.user_message(&self.base_url));
            }
            Outcome::Listed { seq, result } => {
                if !self.subscription.accept(seq) {
                    return;
                }
                match result {
                    Ok(employees) => {
                        tracing::debug!(count = employees.len(), "Employees loaded");
                        self.employees = employees;
                        self.selected = self.selected.min(self.employees.len().saturating_sub(1));
                        self.backend_ok = Some(true);
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Error fetching employees");
                        self.set_status(StatusKind::Error, e.user_message(&self.base_url));
                    }
                }
            }
            Outcome::Created(result) => {
                self.loading = false;
                match result {
                    Ok(employee) => {
                        tracing::info!(id = employee.id, "Employee added");
                        self.clear_form();
                        self.set_status(StatusKind::Success, "Employee added successfully!");
                        self.subscription.refresh(now);
                    }
                    Err(e) => self.set_status(StatusKind::Error, e.user_message(&self.base_url)),
                }
            }
            Outcome::Updated(result) => {
                self.loading = false;
                match result {
                    Ok(employee) => {
                        tracing::info!(id = employee.id, "Employee updated");
                        self.clear_form();
                        self.set_status(StatusKind::Success, "Employee updated successfully!");
                        self.subscription.refresh(now);
                    }
                    Err(e) => self.set_status(StatusKind::Error, e.user_message(&self.base_url)),
                }
            }
            Outcome::Deleted { id, result } => {
                self.loading = false;
                match result {
                    Ok(()) => {
                        tracing::info!(id, "Employee deleted");
                        if self.editing.as_ref().is_some_and(|e| e.id == id) {
                            self.clear_form();
                        }
                        self.set_status(StatusKind::Success, "Employee deleted successfully!");
                        self.subscription.refresh(now);
                    }
                    Err(e) => self.set_status(StatusKind::Error, e.user_message(&self.base_url)),
                }
            }
        }
    }
}

/// Perform a command against the server
pub async fn execute(client: &HttpClient, command: Command) -> Outcome {
    match command {
        Command::Health => Outcome::Health(client.health().await),
        Command::FetchList(fetch) => Outcome::Listed {
            seq: fetch.seq,
            result: client.list_employees(Some(&fetch.search)).await,
        },
        Command::Create(data) => Outcome::Created(client.create_employee(&data).await),
        Command::Update { id, data } => Outcome::Updated(client.update_employee(id, &data).await),
        Command::Delete(id) => Outcome::Deleted {
            id,
            result: client.delete_employee(id).await,
        },
    }
}
