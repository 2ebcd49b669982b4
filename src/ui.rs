use crate::adoption::Shelter;
use crate::entities::{Adoptable, Animal, SpeciesKind};
use crate::ledger::AdoptionRecord;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Animals,
    Adoptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    None,
    Available,
    Species(SpeciesKind),
}

impl FilterType {
    pub fn label(&self) -> &'static str {
        match self {
            FilterType::None => "All",
            FilterType::Available => "Available",
            FilterType::Species(SpeciesKind::Cat) => "Cats",
            FilterType::Species(SpeciesKind::Dog) => "Dogs",
        }
    }
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Animals => Page::Adoptions,
            Page::Adoptions => Page::Animals,
        }
    }

    pub fn previous(&self) -> Self {
        // Two pages: previous and next coincide
        self.next()
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Animals => "Animals",
            Page::Adoptions => "Adoptions",
        }
    }
}

/// Read-only snapshot of a shelter for browsing
pub struct App {
    pub animals: Vec<Animal>,
    pub filtered_animals: Vec<Animal>,
    pub records: Vec<AdoptionRecord>,
    pub state: TableState,
    pub adoptions_state: TableState,
    pub current_page: Page,
    pub show_detail: bool,
    pub active_filter: FilterType,
}

impl App {
    pub fn new(shelter: &Shelter) -> Self {
        let animals = shelter.catalog.list_all();
        let records = shelter.ledger.list_all().to_vec();

        let mut state = TableState::default();
        if !animals.is_empty() {
            state.select(Some(0));
        }

        let mut adoptions_state = TableState::default();
        if !records.is_empty() {
            adoptions_state.select(Some(0));
        }

        Self {
            filtered_animals: animals.clone(),
            animals,
            records,
            state,
            adoptions_state,
            current_page: Page::Animals,
            show_detail: false,
            active_filter: FilterType::None,
        }
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn selected_animal(&self) -> Option<&Animal> {
        self.state.selected().and_then(|i| self.filtered_animals.get(i))
    }

    pub fn apply_filter(&mut self, filter: FilterType) {
        self.active_filter = filter;

        self.filtered_animals = match filter {
            FilterType::None => self.animals.clone(),
            FilterType::Available => self
                .animals
                .iter()
                .filter(|a| !a.is_adopted())
                .cloned()
                .collect(),
            FilterType::Species(kind) => self
                .animals
                .iter()
                .filter(|a| a.kind() == kind)
                .cloned()
                .collect(),
        };

        // Reset selection to first item
        if !self.filtered_animals.is_empty() {
            self.state.select(Some(0));
        } else {
            self.state.select(None);
        }
    }

    pub fn clear_filter(&mut self) {
        self.apply_filter(FilterType::None);
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    fn current_len(&self) -> usize {
        match self.current_page {
            Page::Animals => self.filtered_animals.len(),
            Page::Adoptions => self.records.len(),
        }
    }

    fn current_state(&mut self) -> &mut TableState {
        match self.current_page {
            Page::Animals => &mut self.state,
            Page::Adoptions => &mut self.adoptions_state,
        }
    }

    pub fn next(&mut self) {
        let len = self.current_len();
        if len == 0 {
            return;
        }
        let state = self.current_state();
        let i = match state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.current_len();
        if len == 0 {
            return;
        }
        let state = self.current_state();
        let i = match state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
    }

    pub fn stats(&self) -> ShelterStats {
        let mut stats = ShelterStats::default();

        for animal in &self.animals {
            match animal.kind() {
                SpeciesKind::Cat => stats.cats += 1,
                SpeciesKind::Dog => stats.dogs += 1,
            }
            if animal.is_adopted() {
                stats.adopted += 1;
            } else {
                stats.available += 1;
            }
        }

        stats
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct ShelterStats {
    pub cats: usize,
    pub dogs: usize,
    pub available: usize,
    pub adopted: usize,
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Char('c') => app.clear_filter(),
                KeyCode::Char('1') => app.apply_filter(FilterType::None),
                KeyCode::Char('2') => app.apply_filter(FilterType::Available),
                KeyCode::Char('3') => app.apply_filter(FilterType::Species(SpeciesKind::Cat)),
                KeyCode::Char('4') => app.apply_filter(FilterType::Species(SpeciesKind::Dog)),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Animals if app.show_detail => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[1]);

            render_animals(f, content_chunks[0], app);
            render_detail_panel(f, content_chunks[1], app);
        }
        Page::Animals => render_animals(f, chunks[1], app),
        Page::Adoptions => render_adoptions(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn header_cells(titles: &[&'static str]) -> Row<'static> {
    let cells = titles.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    Row::new(cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1)
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let stats = app.stats();

    let mut tab_spans = vec![];
    for (i, page) in [Page::Animals, Page::Adoptions].iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Cats: {}  Dogs: {}", stats.cats, stats.dogs),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Available: {}", stats.available),
        Style::default().fg(Color::Green),
    ));
    tab_spans.push(Span::raw("  "));
    tab_spans.push(Span::styled(
        format!("Adopted: {}", stats.adopted),
        Style::default().fg(Color::Red),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_animals(f: &mut Frame, area: Rect, app: &mut App) {
    let rows = app.filtered_animals.iter().map(|animal| {
        let color = if animal.is_adopted() {
            Color::Red
        } else {
            Color::Green
        };

        Row::new(vec![
            Cell::from(animal.id().to_string()),
            Cell::from(animal.name.clone()),
            Cell::from(animal.kind().as_str()),
            Cell::from(animal.species.describe()),
            Cell::from(animal.age.to_string()),
            Cell::from(animal.gender.as_str()),
            Cell::from(animal.status().as_str()).style(Style::default().fg(color)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(18),
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(header_cells(&[
        "ID", "Name", "Species", "Details", "Age", "Gender", "Status",
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" Animals - {} ", app.active_filter.label())),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_adoptions(f: &mut Frame, area: Rect, app: &mut App) {
    let rows = app
        .records
        .iter()
        .map(|record| Row::new(adoption_row(record).map(Cell::from)).height(1));

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Min(10),
        ],
    )
    .header(header_cells(&[
        "When", "Adopter", "Handle", "ID", "Animal", "Preferred pet",
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Completed Adoptions "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.adoptions_state);
}

/// Cells of one Adoptions table row
pub fn adoption_row(record: &AdoptionRecord) -> [String; 6] {
    [
        record.adopted_at().format("%Y-%m-%d %H:%M").to_string(),
        record.adopter().name.clone(),
        record.adopter().handle(),
        record.animal().id().to_string(),
        record.animal().name.clone(),
        record.adopter().preferred_pet.clone().unwrap_or_default(),
    ]
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = match app.current_page {
        Page::Animals => app.state.selected(),
        Page::Adoptions => app.adoptions_state.selected(),
    }
    .map(|i| i + 1)
    .unwrap_or(0);

    let mut status_spans = vec![Span::styled(
        format!(" Row: {}/{} ", selected, app.current_len()),
        Style::default().fg(Color::Cyan),
    )];

    if app.current_page == Page::Animals {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled("1-4", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" All/Available/Cats/Dogs | "));
        status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Details"));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Nav | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Animal Details ");

    let Some(animal) = app.selected_animal() else {
        f.render_widget(Paragraph::new("No animal selected").block(block), area);
        return;
    };

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut content = vec![
        Line::from(""),
        Line::from(vec![Span::styled("  ID: ", label), Span::raw(animal.id().to_string())]),
        Line::from(vec![Span::styled("  Name: ", label), Span::raw(animal.name.clone())]),
        Line::from(vec![Span::styled("  Age: ", label), Span::raw(animal.age.to_string())]),
        Line::from(vec![Span::styled("  Gender: ", label), Span::raw(animal.gender.as_str())]),
        Line::from(vec![
            Span::styled("  Species: ", label),
            Span::raw(animal.species.describe()),
        ]),
        Line::from(vec![
            Span::styled("  Status: ", label),
            Span::raw(animal.adoption_status_line()),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  HANDOVER NOTES",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )]),
        Line::from(""),
    ];

    for note in animal.prepare_adoption() {
        content.push(Line::from(format!("  • {}", note)));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Press Enter to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    f.render_widget(Paragraph::new(content).block(block), area);
}
