//! Service gallery state: cards, selection and the shared detail panel.

use super::selection::Selection;
use crate::consts::cli_consts::gallery::*;
use crate::content::ServiceEntry;
use crate::ui::motion::{back_out, ease_out, lerp, progress};
use crate::ui::tilt::{ParallaxScene, TiltConfig, TiltSurface};
use crate::ui::visibility::{VisibilityTrigger, visible_ratio};
use log::info;
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

/// Layers of the detail panel's parallax scene.
const PANEL_LAYERS: usize = 3;

/// Offset, scale, rotation and opacity of an entering card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrancePose {
    pub dx_px: f64,
    pub dy_px: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
}

impl EntrancePose {
    pub const REST: EntrancePose = EntrancePose {
        dx_px: 0.0,
        dy_px: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
        opacity: 1.0,
    };

    const fn hidden(dx_px: f64, dy_px: f64, scale: f64, rotate_deg: f64) -> Self {
        Self {
            dx_px,
            dy_px,
            scale,
            rotate_deg,
            opacity: 0.0,
        }
    }

    /// Starting pose of card `index`; six variants, cycled.
    pub fn starting(index: usize) -> Self {
        const VARIANTS: [EntrancePose; 6] = [
            EntrancePose::hidden(-100.0, 0.0, 1.0, -30.0),
            EntrancePose::hidden(0.0, 100.0, 1.0, 30.0),
            EntrancePose::hidden(0.0, 0.0, 0.7, -10.0),
            EntrancePose::hidden(100.0, 0.0, 1.0, 10.0),
            EntrancePose::hidden(0.0, -100.0, 0.8, 0.0),
            EntrancePose::hidden(0.0, 0.0, 1.0, 45.0),
        ];
        VARIANTS[index % VARIANTS.len()]
    }

    fn toward_rest(self, t: f64) -> Self {
        let eased = back_out(t);
        let rest = Self::REST;
        Self {
            dx_px: lerp(self.dx_px, rest.dx_px, eased),
            dy_px: lerp(self.dy_px, rest.dy_px, eased),
            scale: lerp(self.scale, rest.scale, eased),
            rotate_deg: lerp(self.rotate_deg, rest.rotate_deg, eased),
            opacity: lerp(self.opacity, rest.opacity, t),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceCard {
    pub index: usize,
    trigger: VisibilityTrigger,
    element: Option<Rect>,
    header: Option<Rect>,
    pub tilt: TiltSurface,
    pub cta: TiltSurface,
}

impl ServiceCard {
    fn new(index: usize) -> Self {
        Self {
            index,
            trigger: VisibilityTrigger::new(ENTRANCE_THRESHOLD),
            element: None,
            header: None,
            tilt: TiltSurface::new(TiltConfig::card()),
            cta: TiltSurface::new(TiltConfig::button()),
        }
    }

    pub fn has_entered(&self) -> bool {
        self.trigger.is_fired()
    }

    pub fn entrance_pose(&self, now: Instant) -> EntrancePose {
        let start = EntrancePose::starting(self.index);
        let Some(fired) = self.trigger.fired_at() else {
            return start;
        };
        let t = progress(
            fired,
            now,
            Duration::from_millis(CARD_ENTRANCE_STAGGER_MS * self.index as u64),
            Duration::from_millis(CARD_ENTRANCE_MS),
        );
        start.toward_rest(t)
    }
}

#[derive(Debug, Clone)]
pub struct DetailPanel {
    trigger: VisibilityTrigger,
    element: Option<Rect>,
    pub scene: ParallaxScene,
}

impl DetailPanel {
    fn new() -> Self {
        Self {
            trigger: VisibilityTrigger::new(ENTRANCE_THRESHOLD),
            element: None,
            scene: ParallaxScene::new(PANEL_LAYERS),
        }
    }

    /// Opacity and vertical offset (px) of the panel entrance.
    pub fn entrance(&self, now: Instant) -> (f64, f64) {
        let Some(fired) = self.trigger.fired_at() else {
            return (0.0, PANEL_ENTRANCE_OFFSET_PX);
        };
        let t = ease_out(progress(
            fired,
            now,
            Duration::ZERO,
            Duration::from_millis(PANEL_ENTRANCE_MS),
        ));
        (t, PANEL_ENTRANCE_OFFSET_PX * (1.0 - t))
    }
}

/// Last expand/collapse, used to animate the collapsible regions.
#[derive(Debug, Clone, Copy)]
struct Toggle {
    at: Instant,
    opened: Option<usize>,
    closed: Option<usize>,
}

#[derive(Debug)]
pub struct ServiceGallery {
    entries: &'static [ServiceEntry],
    selection: Selection,
    cards: Vec<ServiceCard>,
    panel: DetailPanel,
    toggle: Option<Toggle>,
}

impl ServiceGallery {
    pub fn new(entries: &'static [ServiceEntry]) -> Self {
        let mut gallery = Self {
            entries,
            selection: Selection::default(),
            cards: (0..entries.len()).map(ServiceCard::new).collect(),
            panel: DetailPanel::new(),
            toggle: None,
        };
        gallery.sync_active();
        gallery
    }

    pub fn entries(&self) -> &'static [ServiceEntry] {
        self.entries
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn cards(&self) -> &[ServiceCard] {
        &self.cards
    }

    pub fn panel(&self) -> &DetailPanel {
        &self.panel
    }

    /// The entry mirrored by the detail panel.
    pub fn detail(&self) -> &ServiceEntry {
        &self.entries[self.selection.active()]
    }

    fn sync_active(&mut self) {
        let active = self.selection.active();
        for card in &mut self.cards {
            card.tilt.set_active(card.index == active);
        }
    }

    pub fn click(&mut self, index: usize, now: Instant) {
        if index >= self.entries.len() {
            return;
        }
        let previous = self.selection.expanded();
        self.selection.click(index);
        let expanded = self.selection.expanded();
        self.toggle = Some(Toggle {
            at: now,
            opened: expanded,
            closed: previous.filter(|&p| Some(p) != expanded),
        });
        self.sync_active();
        match expanded {
            Some(i) => info!("Expanded service: {}", self.entries[i].title),
            None => info!("Collapsed services"),
        }
    }

    /// Clicks the card whose header is under the pointer. Returns whether a
    /// card was hit.
    pub fn click_at(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let hit = self.cards.iter().find_map(|card| {
            card.header
                .filter(|rect| rect.contains(Position::new(column, row)))
                .map(|_| card.index)
        });
        match hit {
            Some(index) => {
                self.click(index, now);
                true
            }
            None => false,
        }
    }

    /// Expands the entry after the expanded one, wrapping.
    pub fn expand_next(&mut self, now: Instant) {
        let count = self.entries.len();
        if count == 0 {
            return;
        }
        let next = self.selection.expanded().map_or(0, |i| (i + 1) % count);
        self.click(next, now);
    }

    pub fn expand_previous(&mut self, now: Instant) {
        let count = self.entries.len();
        if count == 0 {
            return;
        }
        let previous = self
            .selection
            .expanded()
            .map_or(count - 1, |i| (i + count - 1) % count);
        self.click(previous, now);
    }

    pub fn toggle_active(&mut self, now: Instant) {
        let active = self.selection.active();
        self.click(active, now);
    }

    /// How far the collapsible region of card `index` is open, in `[0, 1]`.
    pub fn region_fraction(&self, index: usize, now: Instant) -> f64 {
        let duration = Duration::from_millis(COLLAPSE_MS);
        let t = |toggle: &Toggle| progress(toggle.at, now, Duration::ZERO, duration);
        match self.toggle {
            Some(toggle) if toggle.opened == Some(index) => ease_out(t(&toggle)),
            Some(toggle) if toggle.closed == Some(index) => 1.0 - ease_out(t(&toggle)),
            _ if self.selection.is_expanded(index) => 1.0,
            _ => 0.0,
        }
    }

    /// Places card `index` on the page. `cta` is `None` while the card's call
    /// to action is not shown.
    pub fn mount_card(&mut self, index: usize, element: Rect, header: Rect, cta: Option<Rect>) {
        let Some(card) = self.cards.get_mut(index) else {
            return;
        };
        card.element = Some(element);
        card.header = Some(header);
        card.tilt.mount(element);
        match cta {
            Some(rect) => card.cta.mount(rect),
            None => card.cta.unmount(),
        }
    }

    pub fn mount_panel(&mut self, rect: Rect) {
        self.panel.element = Some(rect);
        self.panel.scene.mount(rect);
    }

    /// Runs the entrance triggers against the current viewport (page rows).
    pub fn observe(&mut self, viewport_top: u16, viewport_height: u16, now: Instant) {
        for card in &mut self.cards {
            if let Some(rect) = card.element {
                let ratio = visible_ratio(rect.y, rect.height, viewport_top, viewport_height);
                card.trigger.observe(ratio, now);
            }
        }
        if let Some(rect) = self.panel.element {
            let ratio = visible_ratio(rect.y, rect.height, viewport_top, viewport_height);
            self.panel.trigger.observe(ratio, now);
        }
    }

    /// Routes a pointer position (page coordinates) to every surface.
    pub fn route_pointer(&mut self, column: u16, row: u16) {
        for card in &mut self.cards {
            card.tilt.route(column, row);
            card.cta.route(column, row);
        }
        self.panel.scene.route(column, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICES;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn mounted() -> ServiceGallery {
        let mut gallery = ServiceGallery::new(&SERVICES);
        for i in 0..SERVICES.len() {
            let y = 10 + i as u16 * 4;
            gallery.mount_card(i, Rect::new(2, y, 40, 3), Rect::new(2, y, 40, 3), None);
        }
        gallery.mount_panel(Rect::new(45, 10, 30, 14));
        gallery
    }

    #[test]
    fn detail_panel_mirrors_active_entry() {
        let now = Instant::now();
        let mut gallery = mounted();
        assert_eq!(gallery.detail().title, "Main Media");

        gallery.click(2, now);
        assert_eq!(gallery.detail().title, "Influencer Marketing");

        gallery.click(2, now);
        assert_eq!(gallery.detail().title, "Main Media");
    }

    #[test]
    fn click_at_hits_card_headers_only() {
        let now = Instant::now();
        let mut gallery = mounted();

        assert!(gallery.click_at(5, 14, now));
        assert_eq!(gallery.selection().expanded(), Some(1));
        assert!(!gallery.click_at(5, 13, now));
        assert_eq!(gallery.selection().expanded(), Some(1));
    }

    #[test]
    fn only_active_card_glows_bright() {
        let now = Instant::now();
        let mut gallery = mounted();
        gallery.click(3, now);
        gallery.route_pointer(10, 22);

        let card = &gallery.cards()[3];
        assert!(card.tilt.is_hovered());
        match card.tilt.light() {
            crate::ui::tilt::Light::Glow { intensity, .. } => assert_eq!(intensity, 0.4),
            other => panic!("unexpected light {:?}", other),
        }
    }

    #[test]
    fn regions_animate_open_and_closed() {
        let now = Instant::now();
        let mut gallery = mounted();
        gallery.click(1, now);
        gallery.click(4, now + ms(1000));

        let later = now + ms(1000);
        assert_eq!(gallery.region_fraction(4, later), 0.0);
        assert_eq!(gallery.region_fraction(1, later), 1.0);
        assert_eq!(gallery.region_fraction(4, later + ms(800)), 1.0);
        assert_eq!(gallery.region_fraction(1, later + ms(800)), 0.0);
        assert_eq!(gallery.region_fraction(0, later + ms(800)), 0.0);
    }

    #[test]
    fn keyboard_navigation_wraps() {
        let now = Instant::now();
        let mut gallery = mounted();

        gallery.expand_next(now);
        assert_eq!(gallery.selection().expanded(), Some(0));
        gallery.expand_previous(now);
        assert_eq!(gallery.selection().expanded(), Some(5));
        gallery.expand_next(now);
        assert_eq!(gallery.selection().expanded(), Some(0));
        gallery.toggle_active(now);
        assert_eq!(gallery.selection().expanded(), None);
    }

    #[test]
    fn cards_enter_once_with_their_own_variant() {
        let now = Instant::now();
        let mut gallery = mounted();
        assert_eq!(gallery.cards()[0].entrance_pose(now), EntrancePose::starting(0));

        // Viewport covers the first two cards only.
        gallery.observe(0, 18, now);
        assert!(gallery.cards()[0].has_entered());
        assert!(gallery.cards()[1].has_entered());
        assert!(!gallery.cards()[2].has_entered());

        let settled = now + ms(100 + 800);
        assert_eq!(gallery.cards()[1].entrance_pose(settled), EntrancePose::REST);
        assert_eq!(EntrancePose::starting(7), EntrancePose::starting(1));
    }

    #[test]
    fn panel_enters_when_visible() {
        let now = Instant::now();
        let mut gallery = mounted();
        assert_eq!(gallery.panel().entrance(now), (0.0, 100.0));

        gallery.observe(0, 40, now);
        assert_eq!(gallery.panel().entrance(now + ms(1000)), (1.0, 0.0));
    }
}
