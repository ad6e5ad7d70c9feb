//! TUI forecast panel using ratatui.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Dataset, GraphType, LegendPosition, Paragraph, Row,
        Table,
    },
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use stockcast_report::ForecastReport;

/// Points of the actual-vs-predicted chart, x in days since the first bar.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartData {
    pub actual: Vec<(f64, f64)>,
    pub predicted: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl ChartData {
    /// The predicted line starts at the last actual close so both lines join.
    pub fn from_report(report: &ForecastReport) -> Self {
        let origin = report.history.first().map(|b| b.date);
        let x = |date: chrono::NaiveDate| {
            origin
                .map(|o| (date - o).num_days() as f64)
                .unwrap_or_default()
        };

        let actual: Vec<(f64, f64)> = report.history.iter().map(|b| (x(b.date), b.close)).collect();

        let mut predicted: Vec<(f64, f64)> = Vec::with_capacity(report.forecast.len() + 1);
        if let Some(last) = actual.last() {
            predicted.push(*last);
        }
        predicted.extend(
            report
                .forecast
                .points()
                .iter()
                .map(|p| (x(p.date), p.predicted_close)),
        );

        let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for (_, y) in actual.iter().chain(predicted.iter()) {
            lo = lo.min(*y);
            hi = hi.max(*y);
        }
        if !lo.is_finite() || !hi.is_finite() {
            (lo, hi) = (0.0, 1.0);
        }
        let pad = ((hi - lo) * 0.05).max(hi.abs() * 0.001).max(f64::EPSILON);

        let x_max = predicted
            .last()
            .or(actual.last())
            .map(|(x, _)| *x)
            .unwrap_or(1.0)
            .max(1.0);

        Self {
            actual,
            predicted,
            x_bounds: [0.0, x_max],
            y_bounds: [lo - pad, hi + pad],
        }
    }
}

/// Full-screen panel with the forecast table and chart.
pub struct ForecastPanel {
    refresh_ms: u64,
}

impl ForecastPanel {
    /// Create a new panel.
    pub fn new(refresh_ms: u64) -> Self {
        Self { refresh_ms }
    }

    /// Show the panel until the user presses `q` or `Esc`.
    pub fn run(&self, report: &ForecastReport) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal, report);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        report: &ForecastReport,
    ) -> io::Result<()> {
        let chart = ChartData::from_report(report);
        loop {
            terminal.draw(|f| self.ui(f, report, &chart))?;

            if event::poll(Duration::from_millis(self.refresh_ms))? {
                if let Event::Key(key) = event::read()? {
                    if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn ui(&self, frame: &mut Frame, report: &ForecastReport, chart: &ChartData) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Stats
                Constraint::Min(10),   // Table + chart
            ])
            .split(frame.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(30)])
            .split(chunks[2]);

        self.render_header(frame, chunks[0], report);
        self.render_stats(frame, chunks[1], report);
        self.render_table(frame, body[0], report);
        self.render_chart(frame, body[1], report, chart);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, report: &ForecastReport) {
        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "Stock Price Forecast",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(&report.symbol, Style::default().fg(Color::Cyan)),
            Span::raw(format!(" | {} days | Press 'q' to quit", report.horizon_days)),
        ])])
        .block(Block::default().borders(Borders::ALL).title("stockcast"));
        frame.render_widget(header, area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, report: &ForecastReport) {
        let stats = &report.stats;
        let change_color = if stats.projected_change_pct >= 0.0 {
            Color::Green
        } else {
            Color::Red
        };

        let paragraph = Paragraph::new(vec![
            Line::from(vec![
                Span::raw("Mean actual: "),
                Span::styled(
                    format!("{:.2}", stats.mean_actual),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  |  Mean predicted: "),
                Span::styled(
                    format!("{:.2}", stats.mean_predicted),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  |  Change: "),
                Span::styled(
                    format!("{:+.2}%", stats.projected_change_pct),
                    Style::default().fg(change_color),
                ),
            ]),
            Line::from(format!(
                "close[t] = {:.4} + {:.4} * close[t-1]  ({} bars)",
                stats.intercept, stats.slope, stats.history_points
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
        frame.render_widget(paragraph, area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, report: &ForecastReport) {
        let header_cells = ["Date", "Predicted Close"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells).height(1);

        let rows = report.forecast.points().iter().map(|p| {
            Row::new(vec![
                Cell::from(p.date.to_string()),
                Cell::from(format!("{:.2}", p.predicted_close)),
            ])
        });

        let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(15)])
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Forecast"));

        frame.render_widget(table, area);
    }

    fn render_chart(
        &self,
        frame: &mut Frame,
        area: Rect,
        report: &ForecastReport,
        chart: &ChartData,
    ) {
        let datasets = vec![
            Dataset::default()
                .name("Actual")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Blue))
                .data(&chart.actual),
            Dataset::default()
                .name(format!("Predicted ({} days)", report.horizon_days))
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Green))
                .data(&chart.predicted),
        ];

        let first = report.history.first().map(|b| b.date.to_string());
        let last = report
            .forecast
            .last()
            .map(|p| p.date.to_string())
            .or_else(|| report.history.last().map(|b| b.date.to_string()));
        let x_labels: Vec<String> = first.into_iter().chain(last).collect();

        let [y_lo, y_hi] = chart.y_bounds;
        let y_labels = vec![
            format!("{:.2}", y_lo),
            format!("{:.2}", (y_lo + y_hi) / 2.0),
            format!("{:.2}", y_hi),
        ];

        let widget = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(report.title()),
            )
            .x_axis(
                Axis::default()
                    .title("Date")
                    .bounds(chart.x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("Close")
                    .bounds(chart.y_bounds)
                    .labels(y_labels),
            )
            .legend_position(Some(LegendPosition::TopLeft));

        frame.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use stockcast_core::types::{ForecastRequest, PriceSeries};
    use stockcast_engine::{forecast, ForecastOutcome};

    fn report() -> ForecastReport {
        let d = |day| NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        let history = PriceSeries::from_closes(
            "DCII.JK",
            vec![(d(7), 100.0), (d(8), 110.0), (d(9), 120.0), (d(10), 130.0)],
        );
        let projected = forecast(&history, 3).unwrap();

        ForecastReport::from(ForecastOutcome {
            request: ForecastRequest::new("DCII.JK", 3, d(11)),
            history,
            forecast: projected,
        })
    }

    #[test]
    fn test_chart_data() {
        let data = ChartData::from_report(&report());

        assert_eq!(data.actual.len(), 4);
        assert_eq!(data.actual[0], (0.0, 100.0));
        assert_eq!(data.actual[3], (3.0, 130.0));

        // Anchor plus three projected days: Mon 13th, Tue 14th, Wed 15th
        assert_eq!(data.predicted.len(), 4);
        assert_eq!(data.predicted[0], (3.0, 130.0));
        assert_eq!(data.predicted[1].0, 6.0);
        assert_eq!(data.predicted[3].0, 8.0);

        assert_eq!(data.x_bounds, [0.0, 8.0]);
        assert!(data.y_bounds[0] < 100.0);
        assert!(data.y_bounds[1] > 160.0);
    }

    #[test]
    fn test_renders_table_and_chart() {
        let report = report();
        let chart = ChartData::from_report(&report);
        let panel = ForecastPanel::new(250);

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| panel.ui(f, &report, &chart)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();

        assert!(text.contains("Stock Price Forecast"));
        assert!(text.contains("2024-05-13"));
        assert!(text.contains("140.00"));
        assert!(text.contains("Mean actual: 115.00"));
        assert!(text.contains("price forecast for the next 3 days"));
    }
}
