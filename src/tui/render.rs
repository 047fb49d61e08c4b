use std::borrow::Cow;

use super::theme::Theme;
use crate::arena::composer::Composer;
use crate::arena::Arena;
use crate::config::{Config, LinksConfig};
use crate::feed::board::{FeedBoard, FeedStatus, LaneFeed};
use crate::feed::types::PostSummary;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const COMPOSER_PLACEHOLDER: &str = "subreddit name (without r/)";
const WELCOME_BLURB: &str = "Stay updated with multiple subreddits at once! Add your favorite \
subreddits as lanes and track their latest posts side by side. Perfect for moderators, \
power users, or anyone who loves to keep up with multiple communities simultaneously.";

/// Draw one frame. The arena is always drawn; the welcome overlay and the
/// add-lane modal are layered on top when active.
pub fn draw(
    f: &mut Frame,
    arena: &mut Arena,
    board: &FeedBoard,
    config: &Config,
    spinner_frame: u8,
) {
    let theme = Theme::for_mode(arena.display_mode());
    f.render_widget(Block::default().style(theme.base()), f.area());

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(f.area());

    draw_header(f, arena, &theme, chunks[0]);
    draw_arena(f, arena, board, config.ui.lane_width, &theme, chunks[1], spinner_frame);
    if arena.welcome_visible() {
        draw_welcome(f, &config.links, &theme, chunks[1]);
    }
    draw_footer(f, arena, &theme, chunks[2]);

    if arena.modal_open() {
        draw_composer(f, arena.composer(), &theme);
    }
}

fn draw_header(f: &mut Frame, arena: &Arena, theme: &Theme, area: Rect) {
    let count = arena.lanes().len();
    let mut spans = vec![
        Span::styled(" [w] ", theme.key_hint()),
        Span::styled(
            format!("{} lane{}", count, if count == 1 { "" } else { "s" }),
            theme.muted(),
        ),
        Span::raw("   "),
    ];

    if !arena.welcome_visible() {
        spans.extend([
            Span::styled("[a]", theme.key_hint()),
            Span::raw(" Add Lane  "),
            Span::styled("[C]", Style::default().fg(theme.danger).add_modifier(Modifier::BOLD)),
            Span::raw(" Clear All  "),
        ]);
    }
    spans.extend([
        Span::styled("[t]", theme.key_hint()),
        Span::raw(format!(" {}", arena.display_mode().toggle_label())),
    ]);

    let block = Block::default()
        .title(Span::styled(
            " Lane Arena ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(theme.panel());
    let para = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(para, area);
}

/// Everything a card needs; cards know their index, never a stable id.
struct LaneCard<'a> {
    index: usize,
    source: &'a str,
    feed: Option<&'a LaneFeed>,
    selected: bool,
    post_scroll: usize,
    active: bool,
}

fn draw_arena(
    f: &mut Frame,
    arena: &mut Arena,
    board: &FeedBoard,
    lane_width: u16,
    theme: &Theme,
    area: Rect,
    spinner_frame: u8,
) {
    let active = arena.visibility().arena_interactive();
    let (lanes, layout) = arena.render_parts();

    if lanes.is_empty() {
        let style = if active { theme.muted() } else { theme.dimmed() };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("No lanes yet", style.add_modifier(Modifier::BOLD))),
            Line::from(Span::styled("Press [a] to add a subreddit lane", style)),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        return;
    }

    let lane_width = lane_width.max(12);
    let capacity = (area.width / lane_width).max(1) as usize;
    let range = layout.visible_range(lanes.len(), capacity);

    let mut constraints: Vec<Constraint> = range
        .clone()
        .map(|_| Constraint::Length(lane_width))
        .collect();
    constraints.push(Constraint::Min(0));
    let columns = Layout::horizontal(constraints).split(area);

    for (slot, index) in range.enumerate() {
        let Some(lane) = lanes.get(index) else { continue };
        let source = lane.source_name.as_str();
        let card = LaneCard {
            index,
            source,
            feed: board.get(source),
            selected: index == layout.selected(),
            post_scroll: layout.post_scroll(index),
            active,
        };
        draw_lane_card(f, &card, theme, columns[slot], spinner_frame);
    }
}

fn draw_lane_card(f: &mut Frame, card: &LaneCard, theme: &Theme, area: Rect, spinner_frame: u8) {
    let border_style = if !card.active {
        theme.dimmed()
    } else if card.selected {
        Style::default().fg(theme.selection).add_modifier(Modifier::BOLD)
    } else {
        theme.muted()
    };
    let sub_style = if card.active { theme.muted() } else { theme.dimmed() };

    let block = Block::default()
        .title(Span::styled(format!(" r/{} ", card.source), border_style))
        .title_top(
            Line::from(Span::styled(format!(" {} ", card.index + 1), sub_style)).right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.panel());

    let inner_width = area.width.saturating_sub(2) as usize;
    let visible_lines = area.height.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(visible_lines);
    lines.push(status_line(card.feed, theme, card.active, inner_width, spinner_frame));

    if let Some(feed) = card.feed {
        for post in feed.posts.iter().skip(card.post_scroll) {
            if lines.len() + 2 > visible_lines {
                break;
            }
            let (title, meta) = post_lines(post, theme, card.active, inner_width);
            lines.push(title);
            lines.push(meta);
        }
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn status_line(
    feed: Option<&LaneFeed>,
    theme: &Theme,
    active: bool,
    width: usize,
    spinner_frame: u8,
) -> Line<'static> {
    let style_for = |s: Style| if active { s } else { theme.dimmed() };
    match feed {
        None => Line::from(Span::styled(" waiting for feed", style_for(theme.muted()))),
        Some(LaneFeed { status: FeedStatus::Loading, .. }) => {
            let ch = SPINNER_FRAMES[(spinner_frame as usize) % SPINNER_FRAMES.len()];
            Line::from(Span::styled(
                format!(" {} loading...", ch),
                style_for(Style::default().fg(theme.accent)),
            ))
        }
        Some(LaneFeed { status: FeedStatus::Failed(msg), .. }) => {
            let text = truncate_with_ellipsis(msg, width.saturating_sub(3)).into_owned();
            Line::from(Span::styled(
                format!(" ! {}", text),
                style_for(Style::default().fg(theme.danger)),
            ))
        }
        Some(LaneFeed { status: FeedStatus::Ready, posts, fetched_at }) => {
            let at = fetched_at
                .as_ref()
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string());
            Line::from(Span::styled(
                format!(" {} posts \u{00b7} updated {}", posts.len(), at),
                style_for(theme.muted()),
            ))
        }
    }
}

fn post_lines(
    post: &PostSummary,
    theme: &Theme,
    active: bool,
    width: usize,
) -> (Line<'static>, Line<'static>) {
    let (text_style, sub_style, score_style) = if active {
        (Style::default().fg(theme.fg), theme.muted(), Style::default().fg(theme.accent))
    } else {
        (theme.dimmed(), theme.dimmed(), theme.dimmed())
    };
    let score = format!("{:>5} ", compact_count(post.score));
    let pin = if post.stickied { "\u{2691} " } else { "" };
    let title_max = width.saturating_sub(score.chars().count() + pin.chars().count());
    let title = truncate_with_ellipsis(&post.title, title_max).into_owned();

    let age = (chrono::Utc::now() - post.created_utc)
        .to_std()
        .unwrap_or_default();
    let meta = format!(
        "      u/{} \u{00b7} {} comments \u{00b7} {}",
        post.author,
        post.num_comments,
        format_age(age),
    );
    let meta = truncate_with_ellipsis(&meta, width).into_owned();

    (
        Line::from(vec![
            Span::styled(score, score_style),
            Span::styled(pin.to_string(), score_style),
            Span::styled(title, text_style),
        ]),
        Line::from(Span::styled(meta, sub_style)),
    )
}

fn draw_welcome(f: &mut Frame, links: &LinksConfig, theme: &Theme, area: Rect) {
    let panel = centered_rect(70, 60, area);
    f.render_widget(Clear, panel);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to Lane Arena!",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(WELCOME_BLURB, theme.muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[a]", theme.key_hint()),
            Span::styled(
                " Add Your First Lane",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let visible_links = links.visible();
    if !visible_links.is_empty() {
        lines.push(Line::from(""));
        let mut spans = Vec::new();
        for (i, (label, url)) in visible_links.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  \u{00b7}  ", theme.muted()));
            }
            spans.push(Span::styled(format!("{}: ", label), Style::default().fg(theme.accent)));
            spans.push(Span::styled(url.to_string(), theme.muted()));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(theme.panel());
    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, panel);
}

fn draw_composer(f: &mut Frame, composer: &Composer, theme: &Theme) {
    let area = f.area();
    let width = area.width.saturating_sub(4).min(60);
    let [v_area] = Layout::vertical([Constraint::Length(7)]).flex(Flex::Center).areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(v_area);
    f.render_widget(Clear, popup);

    let input = if composer.buffer().is_empty() {
        Line::from(vec![
            Span::styled("\u{258f}", Style::default().fg(theme.accent)),
            Span::styled(COMPOSER_PLACEHOLDER, theme.muted()),
        ])
    } else {
        let max = (width as usize).saturating_sub(4);
        // Keep the tail visible so the cursor end is always on screen
        let buf = composer.buffer();
        let skip = buf.chars().count().saturating_sub(max);
        let shown: String = buf.chars().skip(skip).collect();
        Line::from(vec![
            Span::styled(shown, Style::default().fg(theme.fg)),
            Span::styled("\u{258f}", Style::default().fg(theme.accent)),
        ])
    };

    let lines = vec![
        Line::from(""),
        input,
        Line::from(""),
        Line::from(vec![
            Span::styled("[Esc]", theme.key_hint()),
            Span::raw(" Cancel  "),
            Span::styled("[Enter]", theme.key_hint()),
            Span::raw(" Add"),
        ])
        .right_aligned(),
    ];

    let block = Block::default()
        .title(Span::styled(
            " Enter subreddit name ",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(theme.panel());
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn draw_footer(f: &mut Frame, arena: &Arena, theme: &Theme, area: Rect) {
    let hint = |key: &'static str, label: &'static str| {
        [Span::styled(key, theme.key_hint()), Span::styled(label, theme.muted())]
    };

    let spans: Vec<Span> = if arena.modal_open() {
        [hint("  [Enter]", " add  "), hint("[Esc]", " cancel  ")].concat()
    } else if arena.welcome_visible() {
        [hint("  [a]", " add lane  "), hint("[t]", " theme  "), hint("[q]", "uit  ")].concat()
    } else {
        let mut spans = [
            hint("  [h/l]", " select  "),
            hint("[j/k]", " scroll  "),
            hint("[x]", " delete  "),
            hint("[r]", "efresh  "),
            hint("[w]", "elcome  "),
            hint("[q]", "uit  "),
        ]
        .concat();
        if !arena.lanes().is_empty() {
            spans.push(Span::styled(
                format!("lane {}/{}", arena.layout().selected() + 1, arena.lanes().len()),
                Style::default().fg(theme.fg),
            ));
        }
        spans
    };

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [v_area] = vertical.areas(area);
    let [h_area] = horizontal.areas(v_area);
    h_area
}

/// `1234` -> `1.2k`, `2500000` -> `2.5m`.
fn compact_count(n: i64) -> String {
    let abs = n.unsigned_abs();
    let sign = if n < 0 { "-" } else { "" };
    if abs >= 1_000_000 {
        format!("{}{:.1}m", sign, abs as f64 / 1_000_000.0)
    } else if abs >= 10_000 {
        format!("{}{}k", sign, abs / 1000)
    } else if abs >= 1000 {
        format!("{}{:.1}k", sign, abs as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

fn format_age(elapsed: std::time::Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        format!("{}h{:02}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d", secs / 86_400)
    }
}

fn truncate_with_ellipsis(s: &str, max_width: usize) -> Cow<'_, str> {
    let char_count = s.chars().count();
    if char_count <= max_width {
        Cow::Borrowed(s)
    } else if max_width <= 3 {
        Cow::Owned(".".repeat(max_width))
    } else {
        let end = s
            .char_indices()
            .nth(max_width - 3)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        Cow::Owned(format!("{}...", &s[..end]))
    }
}
