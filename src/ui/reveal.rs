//! Blur-in text reveal.
//!
//! Text is split into word or character tokens. Once the container becomes
//! visible past the threshold, token `i` animates through three keyframes
//! starting `i * delay` later. If the container never becomes visible the tokens
//! stay hidden; there is no fallback reveal.

use crate::consts::cli_consts::reveal::*;
use crate::ui::motion::{lerp, linear};
use crate::ui::visibility::VisibilityTrigger;
use log::debug;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitBy {
    Words,
    Chars,
}

/// Side the tokens come in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top,
    Bottom,
}

/// Style of one token at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenStyle {
    /// Blur radius in px.
    pub blur: f64,
    pub opacity: f64,
    /// Vertical offset in px, negative is up.
    pub offset_px: f64,
}

impl TokenStyle {
    pub const VISIBLE: TokenStyle = TokenStyle {
        blur: 0.0,
        opacity: 1.0,
        offset_px: 0.0,
    };

    fn hidden(direction: Direction) -> Self {
        let offset_px = match direction {
            Direction::Top => -HIDDEN_OFFSET_PX,
            Direction::Bottom => HIDDEN_OFFSET_PX,
        };
        TokenStyle {
            blur: HIDDEN_BLUR,
            opacity: 0.0,
            offset_px,
        }
    }

    fn midway(direction: Direction) -> Self {
        let offset_px = match direction {
            Direction::Top => MIDWAY_OFFSET_PX,
            Direction::Bottom => -MIDWAY_OFFSET_PX,
        };
        TokenStyle {
            blur: MIDWAY_BLUR,
            opacity: MIDWAY_OPACITY,
            offset_px,
        }
    }

    fn tween(from: TokenStyle, to: TokenStyle, t: f64) -> Self {
        TokenStyle {
            blur: lerp(from.blur, to.blur, t),
            opacity: lerp(from.opacity, to.opacity, t),
            offset_px: lerp(from.offset_px, to.offset_px, t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealToken {
    pub text: String,
    pub index: usize,
    settled: bool,
}

/// Splits `text` into reveal tokens. Spaces become non-breaking blanks when
/// splitting by character so they keep their width.
pub fn tokenize(text: &str, split: SplitBy) -> Vec<RevealToken> {
    let pieces: Vec<String> = match split {
        SplitBy::Words => text.split_whitespace().map(str::to_string).collect(),
        SplitBy::Chars => text
            .chars()
            .map(|c| if c == ' ' { '\u{00A0}' } else { c }.to_string())
            .collect(),
    };
    pieces
        .into_iter()
        .enumerate()
        .map(|(index, text)| RevealToken {
            text,
            index,
            settled: false,
        })
        .collect()
}

pub struct RevealText {
    tokens: Vec<RevealToken>,
    split: SplitBy,
    direction: Direction,
    token_delay: Duration,
    trigger: VisibilityTrigger,
    settled: usize,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for RevealText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealText")
            .field("tokens", &self.tokens)
            .field("split", &self.split)
            .field("direction", &self.direction)
            .field("token_delay", &self.token_delay)
            .field("trigger", &self.trigger)
            .field("settled", &self.settled)
            .finish_non_exhaustive()
    }
}

impl RevealText {
    pub fn new(text: &str, split: SplitBy) -> Self {
        Self {
            tokens: tokenize(text, split),
            split,
            direction: Direction::Top,
            token_delay: Duration::from_millis(DEFAULT_TOKEN_DELAY_MS),
            trigger: VisibilityTrigger::new(DEFAULT_THRESHOLD),
            settled: 0,
            on_complete: None,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn token_delay(mut self, delay: Duration) -> Self {
        self.token_delay = delay;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.trigger = VisibilityTrigger::new(threshold);
        self
    }

    /// Called once, after every token has settled.
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn tokens(&self) -> &[RevealToken] {
        &self.tokens
    }

    pub fn split(&self) -> SplitBy {
        self.split
    }

    pub fn is_revealing(&self) -> bool {
        self.trigger.is_fired()
    }

    pub fn is_complete(&self) -> bool {
        self.settled == self.tokens.len() && self.trigger.is_fired()
    }

    /// Feeds the container's visible ratio. Arms the animation at most once.
    pub fn observe(&mut self, visible_ratio: f64, now: Instant) -> bool {
        let fired = self.trigger.observe(visible_ratio, now);
        if fired {
            debug!("Reveal started for {} tokens", self.tokens.len());
            if self.tokens.is_empty() {
                self.complete();
            }
        }
        fired
    }

    fn token_start(&self, index: usize) -> Option<Instant> {
        self.trigger
            .fired_at()
            .map(|at| at + self.token_delay * index as u32)
    }

    fn total_duration() -> Duration {
        Duration::from_millis(SEGMENT_MS * 2)
    }

    /// Style of the token before the reveal starts.
    pub fn initial_style(&self) -> TokenStyle {
        TokenStyle::hidden(self.direction)
    }

    pub fn style(&self, index: usize, now: Instant) -> TokenStyle {
        let Some(start) = self.token_start(index) else {
            return self.initial_style();
        };
        if now < start {
            return self.initial_style();
        }
        let segment = Duration::from_millis(SEGMENT_MS);
        let local = now - start;
        if local >= Self::total_duration() {
            return TokenStyle::VISIBLE;
        }
        let midway = TokenStyle::midway(self.direction);
        if local < segment {
            let t = linear(local.as_secs_f64() / segment.as_secs_f64());
            TokenStyle::tween(self.initial_style(), midway, t)
        } else {
            let t = linear((local - segment).as_secs_f64() / segment.as_secs_f64());
            TokenStyle::tween(midway, TokenStyle::VISIBLE, t)
        }
    }

    /// Settles every token whose animation has finished by `now`.
    pub fn update(&mut self, now: Instant) {
        if !self.is_revealing() || self.is_complete() {
            return;
        }
        let finished: Vec<usize> = (0..self.tokens.len())
            .filter(|&i| !self.tokens[i].settled)
            .filter(|&i| {
                self.token_start(i)
                    .is_some_and(|start| now >= start + Self::total_duration())
            })
            .collect();
        for index in finished {
            self.settle(index);
        }
    }

    /// Records that token `index` came to rest. Each token counts once; the
    /// completion callback runs when the count reaches the token total, in
    /// whatever order tokens settle. Returns true if this call completed the
    /// reveal. Tokens cannot settle before the trigger fires.
    pub fn settle(&mut self, index: usize) -> bool {
        if !self.is_revealing() {
            return false;
        }
        let Some(token) = self.tokens.get_mut(index) else {
            return false;
        };
        if token.settled {
            return false;
        }
        token.settled = true;
        self.settled += 1;
        if self.settled == self.tokens.len() {
            self.complete();
            return true;
        }
        false
    }

    fn complete(&mut self) {
        debug!("Reveal complete");
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const HEADLINE: &str = "Crafting Responsive digital experiences";

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn headline_splits_into_four_words() {
        let reveal = RevealText::new(HEADLINE, SplitBy::Words);
        let words: Vec<_> = reveal.tokens().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["Crafting", "Responsive", "digital", "experiences"]);
    }

    #[test]
    fn chars_keep_spaces_as_blanks() {
        let tokens = tokenize("a b", SplitBy::Chars);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "\u{00A0}");
    }

    #[test]
    fn direction_sets_sign_of_initial_offset() {
        let top = RevealText::new(HEADLINE, SplitBy::Words).direction(Direction::Top);
        let bottom = RevealText::new(HEADLINE, SplitBy::Words).direction(Direction::Bottom);
        let now = Instant::now();

        for i in 0..top.tokens().len() {
            assert!(top.style(i, now).offset_px < 0.0);
            assert!(bottom.style(i, now).offset_px > 0.0);
        }
    }

    #[test]
    fn midway_offset_flips_with_direction() {
        let now = Instant::now();
        let mut top = RevealText::new(HEADLINE, SplitBy::Words).direction(Direction::Top);
        let mut bottom = RevealText::new(HEADLINE, SplitBy::Words).direction(Direction::Bottom);
        top.observe(1.0, now);
        bottom.observe(1.0, now);

        let at_midway = now + ms(SEGMENT_MS);
        assert_eq!(top.style(0, at_midway).offset_px, MIDWAY_OFFSET_PX);
        assert_eq!(bottom.style(0, at_midway).offset_px, -MIDWAY_OFFSET_PX);
        assert_eq!(top.style(0, at_midway).opacity, MIDWAY_OPACITY);
    }

    #[test]
    fn stays_hidden_without_intersection() {
        let now = Instant::now();
        let mut reveal = RevealText::new(HEADLINE, SplitBy::Words);
        reveal.observe(0.05, now);
        reveal.update(now + Duration::from_secs(60));

        assert!(!reveal.is_revealing());
        assert_eq!(
            reveal.style(0, now + Duration::from_secs(60)),
            reveal.initial_style()
        );
    }

    #[test]
    fn tokens_are_staggered_by_delay() {
        let now = Instant::now();
        let mut reveal = RevealText::new(HEADLINE, SplitBy::Words).token_delay(ms(150));
        reveal.observe(1.0, now);

        let at = now + ms(200);
        assert!(reveal.style(0, at).opacity > 0.0);
        assert!(reveal.style(1, at).opacity > 0.0);
        assert_eq!(reveal.style(2, at).opacity, 0.0);
        assert_eq!(reveal.style(3, now + ms(450 + 700)), TokenStyle::VISIBLE);
    }

    #[test]
    fn completion_fires_once_after_last_token() {
        let now = Instant::now();
        let (count, callback) = counter();
        let mut reveal = RevealText::new(HEADLINE, SplitBy::Words)
            .token_delay(ms(150))
            .on_complete(callback);
        reveal.observe(1.0, now);

        // Last token settles 3 * 150 + 700 ms after the trigger.
        reveal.update(now + ms(1149));
        assert_eq!(count.get(), 0);
        reveal.update(now + ms(1150));
        assert_eq!(count.get(), 1);
        reveal.update(now + ms(5000));
        assert_eq!(count.get(), 1);
        assert!(reveal.is_complete());
    }

    #[test]
    fn completion_ignores_settle_order_and_duplicates() {
        let (count, callback) = counter();
        let mut reveal = RevealText::new(HEADLINE, SplitBy::Words).on_complete(callback);
        reveal.observe(1.0, Instant::now());

        assert!(!reveal.settle(3));
        assert!(!reveal.settle(3));
        assert!(!reveal.settle(0));
        assert!(!reveal.settle(2));
        assert_eq!(count.get(), 0);
        assert!(reveal.settle(1));
        assert_eq!(count.get(), 1);
        assert!(!reveal.settle(1));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn settling_before_trigger_is_ignored() {
        let (count, callback) = counter();
        let mut reveal = RevealText::new(HEADLINE, SplitBy::Words).on_complete(callback);

        for i in 0..reveal.tokens().len() {
            assert!(!reveal.settle(i));
        }
        assert_eq!(count.get(), 0);
        assert!(!reveal.is_complete());

        reveal.observe(1.0, Instant::now());
        for i in 0..reveal.tokens().len() - 1 {
            assert!(!reveal.settle(i));
        }
        assert!(reveal.settle(reveal.tokens().len() - 1));
        assert_eq!(count.get(), 1);
        assert!(reveal.is_complete());
    }
}
