// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal styling and box drawing for `inspect` and `links`.
//!
//! Output is styled by [`Tone`], not by colour: each tone has a OneDark shade
//! for dark terminals and a One Light shade for light ones. `ALMANAC_THEME`
//! (`dark`/`light`) picks the theme, else a light `COLORFGBG` background, else
//! dark. With `NO_COLOR` set or stdout not a TTY nothing is styled.

use std::env;
use std::sync::OnceLock;

use almanac::{RecordKind, ResolvedLink};

/// Visible width between the left and right borders.
pub const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Dark,
    Light,
}

fn pick_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    match explicit.map(str::to_ascii_lowercase).as_deref() {
        Some("light" | "l") => return Theme::Light,
        Some("dark" | "d") => return Theme::Dark,
        _ => {}
    }
    // "fg;bg": 7 and 9..=15 are light backgrounds, 8 is dark gray.
    let light_bg = colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg >= 7 && bg != 8);
    if light_bg {
        Theme::Light
    } else {
        Theme::Dark
    }
}

fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(|| {
        pick_theme(
            env::var("ALMANAC_THEME").ok().as_deref(),
            env::var("COLORFGBG").ok().as_deref(),
        )
    })
}

/// Whether stdout gets escape codes at all.
pub fn use_colors() -> bool {
    static COLORS: OnceLock<bool> = OnceLock::new();
    *COLORS.get_or_init(|| env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout))
}

/// What a piece of output means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Heading,
    Title,
    Muted,
    Good,
    Warn,
    Bad,
    Highlight,
}

impl Tone {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        let (dark, light) = match self {
            Tone::Accent => ((97, 175, 239), (64, 120, 242)),
            Tone::Heading => ((86, 182, 194), (1, 132, 188)),
            Tone::Title => ((102, 217, 239), (1, 112, 158)),
            Tone::Muted => ((92, 99, 112), (160, 161, 167)),
            Tone::Good => ((152, 195, 121), (80, 161, 79)),
            Tone::Warn => ((229, 192, 123), (193, 132, 1)),
            Tone::Bad => ((224, 108, 117), (228, 86, 73)),
            Tone::Highlight => ((198, 120, 221), (166, 38, 164)),
        };
        match theme {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }
}

fn style(tone: Tone, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let (r, g, b) = tone.rgb(theme());
    let weight = if bold { BOLD } else { "" };
    format!("{}\x1b[38;2;{};{};{}m{}{}", weight, r, g, b, text, RESET)
}

pub fn paint(tone: Tone, text: &str) -> String {
    style(tone, false, text)
}

pub fn strong(tone: Tone, text: &str) -> String {
    style(tone, true, text)
}

/// Character count with escape sequences skipped.
pub fn visible_len(s: &str) -> usize {
    let mut chars = s.chars();
    let mut len = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

/// Cut to `max` characters, the last one replaced by `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    kept + "…"
}

fn gap(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(visible_len(s)))
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, gap(s, width))
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", gap(s, width), s)
}

/// A horizontal border with an optional heading after the left corner.
fn rule(left: char, label: Option<&str>, right: char) -> String {
    let label = label
        .map(|l| format!("─ {} ", strong(Tone::Heading, l)))
        .unwrap_or_default();
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label)));
    format!(
        "{}{}{}",
        paint(Tone::Muted, &left.to_string()),
        label,
        paint(Tone::Muted, &format!("{}{}", fill, right))
    )
}

fn boxed_row(content: &str) -> String {
    let edge = paint(Tone::Muted, "│");
    format!("{}{}{}", edge, pad_right(content, BOX_WIDTH), edge)
}

pub fn row(content: &str) {
    println!("{}", boxed_row(content));
}

pub fn section_top(label: &str) {
    println!("{}", rule('┌', Some(label), '┐'));
}

pub fn section_mid(label: &str) {
    println!("{}", rule('├', Some(label), '┤'));
}

pub fn section_bot() {
    println!("{}", rule('└', None, '┘'));
}

/// Double-lined banner with `text` centred.
pub fn title(text: &str) {
    let bar = "═".repeat(BOX_WIDTH);
    let text = strong(Tone::Title, text);
    let spare = BOX_WIDTH.saturating_sub(visible_len(&text));
    let edge = |s: &str| paint(Tone::Accent, s);

    println!("{}", edge(&format!("╔{}╗", bar)));
    println!(
        "{}{}{}{}{}",
        edge("║"),
        " ".repeat(spare / 2),
        text,
        " ".repeat(spare - spare / 2),
        edge("║")
    );
    println!("{}", edge(&format!("╚{}╝", bar)));
}

pub fn kind_badge(kind: RecordKind) -> String {
    let tone = match kind {
        RecordKind::Term => Tone::Highlight,
        RecordKind::Person => Tone::Good,
        RecordKind::Event => Tone::Warn,
        RecordKind::Archive => Tone::Accent,
    };
    paint(tone, &format!("[{}]", kind.as_str()))
}

/// Right-aligned merit, brighter for heavier contributors.
pub fn merit_value(merit: usize) -> String {
    let tone = match merit {
        20.. => Tone::Good,
        5..=19 => Tone::Warn,
        _ => Tone::Muted,
    };
    paint(tone, &format!("{:>5}", merit))
}

/// `label → target`, or `label ✗ dangling`.
pub fn link_status(link: &ResolvedLink) -> String {
    match &link.target {
        Some(target) => format!("{} → {}", link.label(), paint(Tone::Good, target)),
        None => format!("{} {}", link.label(), strong(Tone::Bad, "✗ dangling")),
    }
}
