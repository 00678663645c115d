//! Open/closed state of the mobile dropdown and the timeline it drives.

use crate::anim::{Frame, Position, Timeline};

const PANEL_FROM: Frame = Frame::new(-20.0, 0.0);
const ITEM_FROM: Frame = Frame::new(-10.0, 0.0);
const SHOWN: Frame = Frame::new(0.0, 1.0);

const PANEL_SECS: f64 = 0.15;
const ITEM_SECS: f64 = 0.1;
const ITEM_STAGGER_SECS: f64 = 0.03;
const ITEM_OVERLAP_SECS: f64 = 0.05;

const PANEL_SHADOW: &str = "box-shadow:0 4px 12px rgba(0,0,0,0.08);";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Label of the toggle button, describing what a click will do.
    pub fn toggle_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Open menu",
            MenuState::Open => "Close menu",
        }
    }
}

/// Panel entrance: the panel slides down, then its rows follow one by one,
/// starting a little before the panel has finished.
pub fn dropdown_timeline(items: usize) -> Timeline {
    let mut tl = Timeline::default();
    tl.from_to(PANEL_FROM, SHOWN, PANEL_SECS, Position::At(0.0));
    tl.stagger(
        items,
        ITEM_FROM,
        SHOWN,
        ITEM_SECS,
        ITEM_STAGGER_SECS,
        Position::FromEnd(-ITEM_OVERLAP_SECS),
    );
    tl
}

#[derive(Clone, Debug, PartialEq)]
pub struct Menu {
    state: MenuState,
    timeline: Timeline,
}

impl Menu {
    /// `items` is the number of rows in the panel.
    pub fn new(items: usize) -> Self {
        Self {
            state: MenuState::Closed,
            timeline: dropdown_timeline(items),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
        self.sync_timeline();
    }

    /// Used by every link and action inside the panel. Closing a closed
    /// menu is a no-op.
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
        self.sync_timeline();
    }

    fn sync_timeline(&mut self) {
        match self.state {
            MenuState::Open => self.timeline.play(),
            MenuState::Closed => self.timeline.reverse(),
        }
    }

    /// Advances the animation by `secs`; `true` while it is still moving.
    pub fn advance(&mut self, secs: f64) -> bool {
        self.timeline.advance(secs)
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.is_active()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn pointer_events(&self) -> &'static str {
        if self.is_open() { "auto" } else { "none" }
    }

    pub fn panel_style(&self) -> String {
        format!(
            "{}pointer-events:{};{}",
            self.timeline.sample(0).style(),
            self.pointer_events(),
            PANEL_SHADOW
        )
    }

    pub fn item_style(&self, index: usize) -> String {
        self.timeline.sample(index + 1).style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::Direction;

    const ROWS: usize = 4;

    fn settle(menu: &mut Menu) {
        while menu.advance(1.0 / 60.0) {}
    }

    #[test]
    fn starts_closed_and_hidden() {
        let menu = Menu::new(ROWS);

        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.is_animating());
        assert!(menu.panel_style().starts_with("opacity:0.000;"));
        assert!(menu.panel_style().contains("pointer-events:none;"));
        assert!(menu.item_style(0).starts_with("opacity:0.000;"));
    }

    #[test]
    fn dropdown_duration_accounts_for_stagger() {
        let tl = dropdown_timeline(ROWS);
        let expected = 0.10 + 0.03 * (ROWS as f64 - 1.0) + 0.10;
        assert!((tl.duration() - expected).abs() < 1e-9);
    }

    #[test]
    fn toggle_parity_decides_state() {
        for clicks in 0..9 {
            let mut menu = Menu::new(ROWS);
            for i in 0..clicks {
                menu.toggle();
                // uneven gaps between clicks, sometimes mid-animation
                menu.advance(0.013 * (i % 4) as f64);
            }
            let expected = if clicks % 2 == 0 { MenuState::Closed } else { MenuState::Open };
            assert_eq!(menu.state(), expected, "after {clicks} clicks");
        }
    }

    #[test]
    fn open_becomes_interactive_immediately() {
        let mut menu = Menu::new(ROWS);
        menu.toggle();

        assert!(menu.panel_style().contains("pointer-events:auto;"));
        assert!(menu.is_animating());

        settle(&mut menu);
        assert!(menu.panel_style().starts_with("opacity:1.000;transform:translateY(0.00px);"));
        for row in 0..ROWS {
            assert!(menu.item_style(row).starts_with("opacity:1.000;"));
        }
    }

    #[test]
    fn rows_enter_top_to_bottom() {
        let mut menu = Menu::new(ROWS);
        menu.toggle();
        menu.advance(0.2);

        let tl = menu.timeline();
        let opacities: Vec<f64> = (1..=ROWS).map(|t| tl.sample(t).opacity).collect();
        assert!(opacities.windows(2).all(|w| w[0] > w[1]), "{opacities:?}");
    }

    #[test]
    fn close_mid_transition_reverses_from_current_position() {
        let mut menu = Menu::new(ROWS);
        menu.toggle();
        menu.advance(0.1);
        let at = menu.timeline().time();

        menu.close();

        assert_eq!(menu.state(), MenuState::Closed);
        assert!(menu.panel_style().contains("pointer-events:none;"));
        assert_eq!(menu.timeline().direction(), Direction::Reverse);
        assert_eq!(menu.timeline().time(), at);

        settle(&mut menu);
        assert!(menu.panel_style().starts_with("opacity:0.000;"));
    }

    #[test]
    fn rows_leave_bottom_first() {
        let mut menu = Menu::new(ROWS);
        menu.toggle();
        settle(&mut menu);

        menu.close();
        menu.advance(0.05);

        let tl = menu.timeline();
        let last = tl.sample(ROWS).opacity;
        let first = tl.sample(1).opacity;
        assert!(last < first, "last {last} first {first}");
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = Menu::new(ROWS);
        menu.close();
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.is_animating());

        menu.toggle();
        menu.advance(0.05);
        menu.close();
        menu.close();
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.timeline().direction(), Direction::Reverse);
    }

    #[test]
    fn reopen_mid_close_resumes_forward() {
        let mut menu = Menu::new(ROWS);
        menu.toggle();
        settle(&mut menu);

        menu.toggle();
        menu.advance(0.05);
        let at = menu.timeline().time();

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.timeline().direction(), Direction::Forward);
        assert_eq!(menu.timeline().time(), at);

        settle(&mut menu);
        assert!(menu.panel_style().starts_with("opacity:1.000;"));
        assert!(menu.item_style(ROWS - 1).starts_with("opacity:1.000;"));
    }

    #[test]
    fn panel_without_rows_still_animates() {
        let mut menu = Menu::new(0);
        menu.toggle();
        settle(&mut menu);
        assert!(menu.panel_style().starts_with("opacity:1.000;"));

        menu.close();
        settle(&mut menu);
        assert!(menu.panel_style().starts_with("opacity:0.000;"));
    }

    #[test]
    fn toggle_label_describes_next_action() {
        assert_eq!(MenuState::Closed.toggle_label(), "Open menu");
        assert_eq!(MenuState::Open.toggle_label(), "Close menu");
    }
}
