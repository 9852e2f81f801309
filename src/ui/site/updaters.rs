//! Site state update logic
//!
//! Per-frame updates plus keyboard and mouse handling.

use super::layout::PageLayout;
use super::state::SiteState;
use crate::consts::cli_consts::ui::{CELL_HEIGHT_PX, WHEEL_SCROLL_ROWS};
use crate::ui::visibility::visible_ratio;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::info;
use ratatui::layout::{Position, Rect};
use std::time::Instant;

impl SiteState {
    /// Advance one frame for a terminal of size `area`.
    pub fn update(&mut self, now: Instant, area: Rect) {
        self.tick += 1;
        self.area = area;
        self.relayout(now);

        let viewport_height = self.viewport_height();
        self.hero.set_scroll(self.scroll, self.layout.hero.height, now);
        self.hero
            .tick(self.scroll as f64 * CELL_HEIGHT_PX, now);

        let headline = self.layout.headline();
        let subheading = self.layout.subheading();
        self.hero.headline.observe(
            visible_ratio(headline.y, headline.height, self.scroll, viewport_height),
            now,
        );
        self.hero.subheading.observe(
            visible_ratio(subheading.y, subheading.height, self.scroll, viewport_height),
            now,
        );
        self.gallery.observe(self.scroll, viewport_height, now);
    }

    /// Recomputes the page and re-mounts every interactive surface on it.
    fn relayout(&mut self, now: Instant) {
        self.layout = PageLayout::compute(self.area.width, self.viewport_height(), &self.gallery, now);
        self.hero.cta.mount(self.layout.hero_cta());
        for (index, card) in self.layout.cards.iter().enumerate() {
            self.gallery
                .mount_card(index, card.element, card.header, card.cta);
        }
        self.gallery.mount_panel(self.layout.panel);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = target as u16;
        self.route_pointer();
    }

    pub fn scroll_to(&mut self, row: u16) {
        self.scroll = row.min(self.max_scroll());
        self.route_pointer();
    }

    /// Sends the current pointer position to every surface. Used after moves
    /// and after the page scrolls under a still pointer.
    fn route_pointer(&mut self) {
        let Some((column, row)) = self.pointer else {
            return;
        };
        // A pointer over the status bar is outside every surface.
        let (column, row) = self.to_page(column, row).unwrap_or((column, u16::MAX));
        self.hero.cta.route(column, row);
        self.gallery.route_pointer(column, row);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let page = self.viewport_height().saturating_sub(1).max(1) as i32;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(u16::MAX),
            KeyCode::Tab => self.gallery.expand_next(now),
            KeyCode::BackTab => self.gallery.expand_previous(now),
            KeyCode::Enter => self.gallery.toggle_active(now),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_SCROLL_ROWS as i32),
            MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_SCROLL_ROWS as i32)),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Some((mouse.column, mouse.row));
                self.route_pointer();
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer = Some((mouse.column, mouse.row));
                let Some((column, row)) = self.to_page(mouse.column, mouse.row) else {
                    return;
                };
                if self.layout.hero_cta().contains(Position::new(column, row)) {
                    info!("Explore Solutions: jumping to services");
                    self.scroll_to(self.layout.heading.y);
                } else {
                    self.gallery.click_at(column, row, now);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::tilt::CARD_PERSPECTIVE_PX;
    use crate::ui::app::UIConfig;
    use crate::ui::tilt::Transform;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn site(now: Instant) -> SiteState {
        let mut site = SiteState::new(now, &UIConfig::new(true, Duration::from_millis(33)));
        site.update(now, Rect::new(0, 0, 120, 41));
        site
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn scrolling_is_clamped_to_the_page() {
        let now = Instant::now();
        let mut site = site(now);
        site.handle_mouse(mouse(MouseEventKind::ScrollUp, 0, 0), now);
        assert_eq!(site.scroll, 0);

        site.handle_mouse(mouse(MouseEventKind::ScrollDown, 0, 0), now);
        assert_eq!(site.scroll, WHEEL_SCROLL_ROWS);

        site.handle_key(key(KeyCode::End), now);
        assert_eq!(site.scroll, site.max_scroll());
        site.handle_key(key(KeyCode::Down), now);
        assert_eq!(site.scroll, site.max_scroll());
        site.handle_key(key(KeyCode::Home), now);
        assert_eq!(site.scroll, 0);
    }

    #[test]
    fn headline_reveal_starts_when_visible() {
        let now = Instant::now();
        let site = site(now);
        assert!(site.hero.headline.is_revealing());
        assert!(site.hero.subheading.is_revealing());
    }

    #[test]
    fn clicking_a_card_header_expands_it() {
        let now = Instant::now();
        let mut site = site(now);
        site.scroll_to(site.layout.heading.y);
        let header = site.layout.cards[2].header;
        let row = header.y - site.scroll + 1;

        site.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), header.x + 3, row), now);
        assert_eq!(site.gallery.selection().expanded(), Some(2));

        site.update(now + Duration::from_secs(1), site.area);
        assert!(site.layout.cards[2].cta.is_some());
    }

    #[test]
    fn hero_cta_jumps_to_services() {
        let now = Instant::now();
        let mut site = site(now);
        let cta = site.layout.hero_cta();

        site.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), cta.x + 1, cta.y), now);
        assert_eq!(site.scroll, site.layout.heading.y.min(site.max_scroll()));
    }

    #[test]
    fn pointer_leaves_cards_when_page_scrolls() {
        let now = Instant::now();
        let mut site = site(now);
        site.scroll_to(site.layout.heading.y);
        let header = site.layout.cards[0].header;
        let row = header.y - site.scroll + 1;

        site.handle_mouse(mouse(MouseEventKind::Moved, header.x + 5, row), now);
        assert!(site.gallery.cards()[0].tilt.is_hovered());

        site.scroll_by(-20);
        assert!(!site.gallery.cards()[0].tilt.is_hovered());
        assert_eq!(
            site.gallery.cards()[0].tilt.transform(),
            Transform::neutral(CARD_PERSPECTIVE_PX)
        );
    }

    #[test]
    fn keyboard_moves_the_expanded_card() {
        let now = Instant::now();
        let mut site = site(now);
        site.handle_key(key(KeyCode::Tab), now);
        site.handle_key(key(KeyCode::Tab), now);
        assert_eq!(site.gallery.selection().expanded(), Some(1));
        site.handle_key(key(KeyCode::BackTab), now);
        assert_eq!(site.gallery.selection().expanded(), Some(0));
        site.handle_key(key(KeyCode::Enter), now);
        assert_eq!(site.gallery.selection().expanded(), None);
    }
}
