//! Screen rendering (read-only from state).

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::logic::{self, average_score, final_comment, format_won, format_won_diff};
use crate::state::{
    stock_info, GameState, Mood, Step, ALL_CLIENTS, ALL_STOCKS, INITIAL_ASSETS, TOTAL_ROUNDS,
};

pub fn render(state: &GameState, f: &mut Frame) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Help
        ])
        .split(area);

    render_header(state, f, chunks[0]);

    match state.step {
        Step::Intro => render_intro(state, f, chunks[1]),
        Step::Scenario => render_scenario(state, f, chunks[1]),
        Step::AllocMix => render_alloc_mix(state, f, chunks[1]),
        Step::AllocStocks => render_alloc_stocks(state, f, chunks[1]),
        Step::Result => render_result(state, f, chunks[1]),
        Step::Ending => render_ending(state, f, chunks[1]),
    }

    render_help(state, f, chunks[2]);
}

// ── Header ─────────────────────────────────────────────────────────────

fn render_header(state: &GameState, f: &mut Frame, area: Rect) {
    let round_label = match state.step {
        Step::Intro => "READY".to_string(),
        Step::Ending => "COMPLETE".to_string(),
        _ => format!("R{} / {}", state.round, TOTAL_ROUNDS),
    };

    let line = Line::from(vec![
        Span::styled(" 운용자산: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_won(state.assets),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  VIP: {}", state.client.name()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!("  [{}]", round_label),
            Style::default().fg(Color::Blue),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " 두근두근!! 억만장자 키우기 ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(header, area);
}

// ── Intro ──────────────────────────────────────────────────────────────

fn render_intro(state: &GameState, f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "당신은 VIP 전담 PB입니다.",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("매 라운드마다 바뀌는 경제 상황!"),
        Line::from("당신의 선택이 VIP의 미래를 결정합니다."),
        Line::from(""),
        Line::from(Span::styled(
            "함께할 VIP를 선택하세요:",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
    ];

    for (i, &client) in ALL_CLIENTS.iter().enumerate() {
        let selected = client == state.client;
        let marker = if selected { "▶" } else { " " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {}. {} ({})", marker, i + 1, client.name(), client.role()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "본 서비스는 가상 시뮬레이션이며, 실존 인물의 실제 판단과 무관합니다.",
        Style::default().fg(Color::DarkGray),
    )));

    let intro = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center)
        .block(bordered(" INTRO "));
    f.render_widget(intro, area);
}

// ── Scenario briefing ──────────────────────────────────────────────────

fn render_scenario(state: &GameState, f: &mut Frame, area: Rect) {
    let Some(scenario) = state.current_scenario() else {
        return;
    };

    let mut lines = vec![Line::from("")];
    for paragraph in scenario.description.split('\n') {
        lines.push(Line::from(paragraph));
    }
    lines.push(Line::from(""));
    for bullet in scenario.bullets {
        lines.push(Line::from(Span::styled(
            format!(" · {}", bullet),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("판단 포인트: ", Style::default().fg(Color::Cyan)),
        Span::styled(scenario.hint, Style::default().fg(Color::White)),
    ]));

    let briefing = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(titled_border(scenario.title, Color::Cyan));
    f.render_widget(briefing, area);
}

// ── Allocation: stock vs cash ──────────────────────────────────────────

fn render_alloc_mix(state: &GameState, f: &mut Frame, area: Rect) {
    let stock = state.draft.stock_ratio;
    let cash = 100 - stock;
    let bar_width = (area.width as usize).saturating_sub(20).clamp(10, 40);

    let lines = vec![
        Line::from(""),
        Line::from(format!(
            "내 자산 {}을 어떻게 나눌까요?",
            format_won(state.assets)
        )),
        Line::from(""),
        gauge_line("주식", stock, bar_width, Color::Blue),
        Line::from(""),
        gauge_line("현금", cash, bar_width, Color::Green),
        Line::from(""),
        Line::from(Span::styled(
            "←/→ 로 주식 비중을 조절하세요. 현금 비중은 자동으로 맞춰집니다.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(titled_border(" STEP 1. 자산 배분 ", Color::Cyan));
    f.render_widget(panel, area);
}

// ── Allocation: per-stock weights ──────────────────────────────────────

fn render_alloc_stocks(state: &GameState, f: &mut Frame, area: Rect) {
    let weights = state.draft.weights.map(f64::from);
    let normalized = logic::normalize(&weights);
    let bar_width = (area.width as usize).saturating_sub(44).clamp(8, 20);

    let mut lines = vec![
        Line::from(format!(
            "주식 {}% 안에서 종목별 비중을 정하세요. (상대 가중치)",
            state.draft.stock_ratio
        )),
        Line::from(""),
    ];

    for (i, &id) in ALL_STOCKS.iter().enumerate() {
        let info = stock_info(id);
        let selected = i == state.draft.cursor;
        let marker = if selected { "▶" } else { " " };
        let name_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let weight = state.draft.weights[i];
        let filled = (weight as usize * bar_width) / 100;
        let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), name_style),
            Span::styled(format!("{:　<9}", info.name), name_style),
            Span::styled(bar, Style::default().fg(Color::Blue)),
            Span::styled(
                format!(" {:>3}", weight),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(" → {:>5.1}%", normalized[i]),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("  {}", info.sector),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let total: f64 = normalized.iter().sum();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("정규화 합계: {:.0}%", total),
        Style::default().fg(Color::Gray),
    )));

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(titled_border(" STEP 2. 종목 선택 ", Color::Cyan));
    f.render_widget(panel, area);
}

// ── Round result ───────────────────────────────────────────────────────

fn render_result(state: &GameState, f: &mut Frame, area: Rect) {
    let Some(outcome) = state.history.last() else {
        return;
    };

    let assets_before = state
        .history
        .len()
        .checked_sub(2)
        .and_then(|i| state.history.get(i))
        .map_or(INITIAL_ASSETS, |prev| prev.assets_after);

    let profit_style = if outcome.profit_rate >= 0.0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    };

    let mood = Mood::from_score(outcome.satisfaction);
    let bar_width = 20usize;
    let filled = (outcome.satisfaction as usize * bar_width) / 100;
    let gauge: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("수익률  ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{:+.2}%", outcome.profit_rate), profit_style),
            Span::styled(
                format!("  ({})", format_won_diff(outcome.assets_after, assets_before)),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::styled("총 자산 ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_won(outcome.assets_after),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("만족도  ", Style::default().fg(Color::Gray)),
            Span::styled(gauge, Style::default().fg(Color::Magenta)),
            Span::styled(
                format!(" {} / 100", outcome.satisfaction),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} {} ", mood.face(), mood.label()),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                format!("— {}", state.client.name()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("“{}”", outcome.comment),
            Style::default().fg(Color::White),
        )),
    ];

    let title = format!(" ROUND {} 결과 ", outcome.round_id);
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(titled_border(&title, Color::Cyan));
    f.render_widget(panel, area);
}

// ── Ending report ──────────────────────────────────────────────────────

fn render_ending(state: &GameState, f: &mut Frame, area: Rect) {
    let average = average_score(state.total_score, TOTAL_ROUNDS);
    let mood = Mood::from_score(average);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("평균 만족도 ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} / 100", average),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} {}", mood.face(), mood.label()),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(vec![
            Span::styled("자산 변화  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(
                    "{} → {} ({})",
                    format_won(INITIAL_ASSETS),
                    format_won(state.assets),
                    format_won_diff(state.assets, INITIAL_ASSETS)
                ),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    let mut assets_before = INITIAL_ASSETS;
    for outcome in &state.history {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" R{}  ", outcome.round_id),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(
                format!("{:>7.2}%", outcome.profit_rate),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {:>6}", format_won_diff(outcome.assets_after, assets_before)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("  만족도 {:>3}", outcome.satisfaction),
                Style::default().fg(Color::Magenta),
            ),
        ]));
        assets_before = outcome.assets_after;
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("“{}”", final_comment(average)),
        Style::default().fg(Color::White),
    )));

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(titled_border(" 운용 성과 보고서 ", Color::Yellow));
    f.render_widget(panel, area);
}

// ── Help bar ───────────────────────────────────────────────────────────

fn render_help(state: &GameState, f: &mut Frame, area: Rect) {
    let help = match state.step {
        Step::Intro => "←/→ 또는 1-4: VIP 선택   Enter: 시뮬레이션 시작",
        Step::Scenario => "Enter: 자산 배분으로",
        Step::AllocMix => "←/→: 주식 비중 조절   Enter: 종목 선택으로",
        Step::AllocStocks => "↑/↓: 종목 이동   ←/→: 비중 조절   Enter: 운용 결과 확인",
        Step::Result => "Enter: 다음으로",
        Step::Ending => "r: 다시 도전하기",
    };

    let bar = Paragraph::new(Line::from(Span::styled(
        help,
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(bar, area);
}

// ── Shared helpers ─────────────────────────────────────────────────────

fn bordered(title: &str) -> Block<'_> {
    titled_border(title, Color::Cyan)
}

fn titled_border(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
}

fn gauge_line(label: &str, percent: u32, bar_width: usize, color: Color) -> Line<'static> {
    let filled = (percent as usize * bar_width) / 100;
    let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);
    Line::from(vec![
        Span::styled(format!(" {} ", label), Style::default().fg(Color::White)),
        Span::styled(bar, Style::default().fg(color)),
        Span::styled(
            format!(" {:>3}%", percent),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
