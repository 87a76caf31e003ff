use doccards_domain::{Notice, NoticeLevel};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerVariant {
    Error,
    Warning,
    Success,
}

impl BannerVariant {
    fn color(self) -> Color {
        match self {
            BannerVariant::Error => Color::Red,
            BannerVariant::Warning => Color::Yellow,
            BannerVariant::Success => Color::Green,
        }
    }
}

/// Transient message shown above the cards.
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub variant: BannerVariant,
    pub created_at: Instant,
}

impl Banner {
    fn with_variant(message: impl Into<String>, variant: BannerVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_variant(message, BannerVariant::Error)
    }

    pub fn from_notice(notice: &Notice) -> Self {
        let variant = match notice.level() {
            NoticeLevel::Success => BannerVariant::Success,
            NoticeLevel::Warning => BannerVariant::Warning,
        };
        Self::with_variant(notice.to_string(), variant)
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = self.variant.color();

        // +4 for border chars and padding
        let box_width = (self.message.chars().count() + 4).min(area.width as usize) as u16;
        let centered_x = area.width.saturating_sub(box_width) / 2;

        let banner_area = Rect {
            x: area.x + centered_x,
            y: area.y,
            width: box_width,
            height: area.height.min(3),
        };

        let widget = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        frame.render_widget(widget, banner_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_notice_variant() {
        let banner = Banner::from_notice(&Notice::NothingToDownload);
        assert_eq!(banner.variant, BannerVariant::Warning);

        let banner = Banner::from_notice(&Notice::Uploaded {
            name: "a.pdf".to_string(),
        });
        assert_eq!(banner.variant, BannerVariant::Success);
        assert!(banner.message.contains("a.pdf"));
    }

    #[test]
    fn test_fresh_banner_not_expired() {
        let banner = Banner::error("boom");
        assert!(!banner.is_expired(Duration::from_secs(3)));
    }
}
