//! Page geometry.
//!
//! The site is laid out as one tall page in page coordinates (row 0 is the top
//! of the hero). The renderer draws the whole page off screen and shows the
//! scrolled window.

use super::utils::wrap_words;
use crate::consts::cli_consts::gallery::CARD_HEADER_ROWS;
use crate::content::hero::{CTA, DESCRIPTION};
use crate::content::services;
use crate::ui::gallery::ServiceGallery;
use crate::ui::hero::CONTENT_CHILDREN;
use ratatui::layout::Rect;
use std::time::Instant;

const HERO_MIN_ROWS: u16 = 20;
const HEADING_ROWS: u16 = 5;
const PANEL_ROWS: u16 = 18;
const FOOTER_ROWS: u16 = 4;
const CONTENT_MAX_WIDTH: u16 = 72;
/// Below this width the detail panel goes under the cards.
const WIDE_LAYOUT_MIN: u16 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub element: Rect,
    pub header: Rect,
    /// Wrapped description lines; the body also holds a blank and the CTA.
    pub lines: Vec<String>,
    /// Body rows currently shown, between 0 and `lines.len() + 2`.
    pub shown_rows: u16,
    pub cta: Option<Rect>,
}

impl CardLayout {
    /// Body rows of a fully open card with the given description.
    pub fn body_rows(lines: &[String]) -> u16 {
        lines.len() as u16 + 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    pub width: u16,
    pub hero: Rect,
    /// Badge, headline, subheading, description, call to action.
    pub hero_content: Vec<Rect>,
    pub indicator: Rect,
    pub heading: Rect,
    pub cards: Vec<CardLayout>,
    pub panel: Rect,
    pub footer: Rect,
    pub height: u16,
}

fn centered(width: u16, inner: u16, y: u16, height: u16) -> Rect {
    let inner = inner.min(width);
    Rect::new((width - inner) / 2, y, inner, height)
}

impl PageLayout {
    pub fn compute(width: u16, viewport_height: u16, gallery: &ServiceGallery, now: Instant) -> Self {
        let width = width.max(20);
        let hero = Rect::new(0, 0, width, viewport_height.max(HERO_MIN_ROWS));
        let (hero_content, indicator) = Self::hero_content(hero);

        let heading = Rect::new(0, hero.bottom(), width, HEADING_ROWS);
        let top = heading.bottom() + 1;
        let wide = width >= WIDE_LAYOUT_MIN;
        let cards_width = if wide {
            width * 55 / 100 - 3
        } else {
            width.saturating_sub(4)
        };

        let mut cards = Vec::with_capacity(gallery.entries().len());
        let mut y = top;
        for (index, entry) in gallery.entries().iter().enumerate() {
            let lines = wrap_words(entry.description, cards_width.saturating_sub(4));
            let full_rows = CardLayout::body_rows(&lines);
            let fraction = gallery.region_fraction(index, now);
            let shown_rows = (fraction * full_rows as f64).round() as u16;
            let element = Rect::new(2, y, cards_width, CARD_HEADER_ROWS + shown_rows);
            let header = Rect::new(2, y, cards_width, CARD_HEADER_ROWS);
            let cta = (shown_rows == full_rows).then(|| {
                let cta_width =
                    (services::CTA.chars().count() as u16 + 4).min(cards_width.saturating_sub(4));
                Rect::new(4, y + 1 + full_rows, cta_width, 1)
            });
            cards.push(CardLayout {
                element,
                header,
                lines,
                shown_rows,
                cta,
            });
            y = element.bottom() + 1;
        }

        let panel = if wide {
            let x = 2 + cards_width + 2;
            Rect::new(x, top, width.saturating_sub(x + 2), PANEL_ROWS)
        } else {
            Rect::new(2, y, width.saturating_sub(4), PANEL_ROWS)
        };
        let gallery_bottom = y.max(panel.bottom());
        let footer = Rect::new(0, gallery_bottom + 1, width, FOOTER_ROWS);

        Self {
            width,
            hero,
            hero_content,
            indicator,
            heading,
            cards,
            panel,
            footer,
            height: footer.bottom(),
        }
    }

    fn hero_content(hero: Rect) -> (Vec<Rect>, Rect) {
        let content_width = hero.width.saturating_sub(4).min(CONTENT_MAX_WIDTH);
        let description_rows = wrap_words(DESCRIPTION, content_width).len() as u16;
        let heights: [u16; CONTENT_CHILDREN] = [1, 2, 2, description_rows, 1];
        let total: u16 = heights.iter().sum::<u16>() + (CONTENT_CHILDREN as u16 - 1);
        let mut y = (hero.height.saturating_sub(total) / 2).max(1);

        let content = heights
            .iter()
            .enumerate()
            .map(|(index, &height)| {
                let rect = if index == CONTENT_CHILDREN - 1 {
                    centered(hero.width, CTA.chars().count() as u16 + 6, y, height)
                } else {
                    centered(hero.width, content_width, y, height)
                };
                y += height + 1;
                rect
            })
            .collect();
        let indicator = centered(hero.width, 8, hero.bottom().saturating_sub(4), 2);
        (content, indicator)
    }

    /// Headline and subheading rows, watched by the reveals.
    pub fn headline(&self) -> Rect {
        self.hero_content.get(1).copied().unwrap_or_default()
    }

    pub fn subheading(&self) -> Rect {
        self.hero_content.get(2).copied().unwrap_or_default()
    }

    pub fn hero_cta(&self) -> Rect {
        self.hero_content.last().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICES;

    #[test]
    fn hero_fills_the_viewport() {
        let gallery = ServiceGallery::new(&SERVICES);
        let layout = PageLayout::compute(120, 40, &gallery, Instant::now());
        assert_eq!(layout.hero, Rect::new(0, 0, 120, 40));
        assert_eq!(layout.hero_content.len(), CONTENT_CHILDREN);
        assert!(layout.hero_content.iter().all(|r| r.bottom() <= 40));
        assert_eq!(layout.heading.y, 40);
    }

    #[test]
    fn collapsed_cards_are_header_only() {
        let gallery = ServiceGallery::new(&SERVICES);
        let layout = PageLayout::compute(120, 40, &gallery, Instant::now());
        assert_eq!(layout.cards.len(), SERVICES.len());
        for pair in layout.cards.windows(2) {
            assert_eq!(pair[0].element.height, CARD_HEADER_ROWS);
            assert_eq!(pair[1].element.y, pair[0].element.bottom() + 1);
            assert!(pair[0].cta.is_none());
        }
    }

    #[test]
    fn expanded_card_pushes_the_rest_down() {
        let now = Instant::now();
        let mut gallery = ServiceGallery::new(&SERVICES);
        let before = PageLayout::compute(120, 40, &gallery, now);
        gallery.click(0, now);

        let opened = PageLayout::compute(120, 40, &gallery, now + std::time::Duration::from_secs(1));
        let card = &opened.cards[0];
        assert_eq!(card.shown_rows, CardLayout::body_rows(&card.lines));
        assert!(card.cta.is_some());
        assert_eq!(
            opened.cards[1].element.y,
            before.cards[1].element.y + CardLayout::body_rows(&card.lines)
        );
    }

    #[test]
    fn narrow_terminals_stack_the_panel() {
        let gallery = ServiceGallery::new(&SERVICES);
        let layout = PageLayout::compute(60, 30, &gallery, Instant::now());
        let last = layout.cards.last().unwrap();
        assert!(layout.panel.y > last.element.y);
        assert!(layout.footer.y > layout.panel.y);
        assert_eq!(layout.height, layout.footer.bottom());
    }
}
