//! Polling scheduler state.
//!
//! A single fixed-interval driver tick multiplexes two independently
//! paced feeds (server list, player list). Refreshes are skipped, not
//! blocked: an open detail view skips both feeds, recent interaction
//! skips only the player list (the server list and online total keep
//! refreshing while the user scrolls). All timestamps are wall-clock
//! epoch milliseconds (what
//! `js_sys::Date::now()` returns), so the whole state machine is
//! plain arithmetic and unit-testable off the browser.

/// Driver tick period.
pub const DRIVER_TICK_MS: u32 = 5_000;
/// Minimum spacing between server-list refreshes.
pub const SERVER_LIST_INTERVAL_MS: f64 = 10_000.0;
/// Minimum spacing between player-list refreshes.
pub const PLAYER_LIST_INTERVAL_MS: f64 = 5_000.0;
/// How long an interaction suppresses refreshes.
pub const INTERACTION_GRACE_MS: f64 = 3_000.0;
/// Fixed timeout for every API request.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;
/// Delay before the single server-list retry.
pub const SERVER_LIST_RETRY_MS: u32 = 30_000;
/// Delay before the single player-list retry.
pub const PLAYER_LIST_RETRY_MS: u32 = 5_000;

/// Interaction/detail-view suspension flags.
///
/// `Interacting` auto-expires a fixed grace window after the last
/// interaction event and suspends only the player-list feed.
/// `ViewingDetail` holds until the detail view is explicitly closed
/// and suspends both feeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    viewing_detail: bool,
    interacting_until: Option<f64>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interaction event (scroll, touch, selector click).
    pub fn note_interaction(&mut self, now: f64) {
        self.interacting_until = Some(now + INTERACTION_GRACE_MS);
    }

    pub fn is_interacting(&self, now: f64) -> bool {
        self.interacting_until.is_some_and(|until| now < until)
    }

    pub fn open_detail(&mut self) {
        self.viewing_detail = true;
    }

    pub fn close_detail(&mut self) {
        self.viewing_detail = false;
    }

    pub fn viewing_detail(&self) -> bool {
        self.viewing_detail
    }
}

/// Which feeds a driver tick should refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DueFeeds {
    pub server_list: bool,
    pub player_list: bool,
}

impl DueFeeds {
    pub const NONE: DueFeeds = DueFeeds {
        server_list: false,
        player_list: false,
    };
}

/// Tracks when each feed last refreshed and decides what a tick owes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PollScheduler {
    last_server_list: f64,
    last_player_list: f64,
}

impl PollScheduler {
    /// Scheduler with both feeds immediately due.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds whose interval has elapsed, unless suspended. An open
    /// detail view suspends both feeds; interaction suspends only the
    /// player list. Suspension skips the refresh entirely; the elapsed
    /// time keeps counting, so clearing a suspension makes the next
    /// tick fire exactly the overdue feeds.
    pub fn due(&self, view: &ViewState, now: f64) -> DueFeeds {
        if view.viewing_detail() {
            return DueFeeds::NONE;
        }
        DueFeeds {
            server_list: now - self.last_server_list >= SERVER_LIST_INTERVAL_MS,
            player_list: !view.is_interacting(now)
                && now - self.last_player_list >= PLAYER_LIST_INTERVAL_MS,
        }
    }

    /// Mark the server-list feed as refreshed at `now`.
    pub fn mark_server_list(&mut self, now: f64) {
        self.last_server_list = now;
    }

    /// Mark the player-list feed as refreshed at `now`.
    pub fn mark_player_list(&mut self, now: f64) {
        self.last_player_list = now;
    }

    /// Whether the player-list feed is overdue, ignoring suspension.
    /// Used for the catch-up refresh when a detail view closes.
    pub fn player_list_overdue(&self, now: f64) -> bool {
        now - self.last_player_list > PLAYER_LIST_INTERVAL_MS
    }
}

/// Monotonic request id per logical operation (player-list refresh for
/// the selected server, detail load). A completion handler applies its
/// result only if the epoch it captured is still current, so a late
/// response can never overwrite a newer selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpochCounter(u64);

impl EpochCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation, invalidating all prior ones.
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.0 == epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_scheduler_owes_both_feeds() {
        let sched = PollScheduler::new();
        let view = ViewState::new();
        let due = sched.due(&view, 100_000.0);
        assert!(due.server_list);
        assert!(due.player_list);
    }

    #[test]
    fn feeds_pace_independently() {
        let mut sched = PollScheduler::new();
        let view = ViewState::new();
        let t0 = 100_000.0;
        sched.mark_server_list(t0);
        sched.mark_player_list(t0);

        // 6s later only the player list (5s interval) is due.
        let due = sched.due(&view, t0 + 6_000.0);
        assert!(!due.server_list);
        assert!(due.player_list);

        // 11s later both are due.
        let due = sched.due(&view, t0 + 11_000.0);
        assert!(due.server_list);
        assert!(due.player_list);
    }

    #[test]
    fn viewing_detail_blocks_everything_until_closed() {
        let mut sched = PollScheduler::new();
        let mut view = ViewState::new();
        let t0 = 100_000.0;
        sched.mark_server_list(t0);
        sched.mark_player_list(t0);
        view.open_detail();

        // Far past both intervals, nothing fires while the detail
        // view is open.
        let late = t0 + 60_000.0;
        assert_eq!(sched.due(&view, late), DueFeeds::NONE);

        // Once closed, the next tick issues exactly the overdue
        // fetches.
        view.close_detail();
        let due = sched.due(&view, late);
        assert!(due.server_list);
        assert!(due.player_list);
    }

    #[test]
    fn interaction_blocks_only_the_player_list() {
        let mut sched = PollScheduler::new();
        let mut view = ViewState::new();
        let t0 = 100_000.0;
        sched.mark_server_list(t0);
        sched.mark_player_list(t0);

        // Both feeds overdue, last interaction 1s ago: the server
        // list still refreshes so the selector and online total stay
        // fresh while the user scrolls.
        view.note_interaction(t0 + 11_000.0);
        let due = sched.due(&view, t0 + 12_000.0);
        assert!(due.server_list);
        assert!(!due.player_list);

        // Grace window (3s) elapsed; the player list resumes.
        let due = sched.due(&view, t0 + 14_500.0);
        assert!(due.server_list);
        assert!(due.player_list);
    }

    #[test]
    fn repeated_interaction_extends_the_grace_window() {
        let mut view = ViewState::new();
        view.note_interaction(0.0);
        view.note_interaction(2_000.0);
        assert!(view.is_interacting(4_000.0));
        assert!(!view.is_interacting(5_000.0));
    }

    #[test]
    fn stale_epoch_is_rejected() {
        let mut epochs = EpochCounter::new();
        // Request for server A issued, then the user selects B.
        let for_a = epochs.begin();
        let for_b = epochs.begin();
        // A's late response must be dropped, B's applied.
        assert!(!epochs.is_current(for_a));
        assert!(epochs.is_current(for_b));
    }

    #[test]
    fn context_switch_invalidates_before_the_replacement_request() {
        let mut epochs = EpochCounter::new();
        let for_a = epochs.begin();

        // Selecting a new server bumps the counter immediately, not
        // when its replacement request eventually starts. A's response
        // settling in that gap must already be stale.
        epochs.begin();
        assert!(!epochs.is_current(for_a));

        // The replacement request then gets its own current epoch.
        let for_b = epochs.begin();
        assert!(epochs.is_current(for_b));
        assert!(!epochs.is_current(for_a));
    }

    #[test]
    fn catch_up_check_ignores_suspension() {
        let mut sched = PollScheduler::new();
        let t0 = 100_000.0;
        sched.mark_player_list(t0);
        assert!(!sched.player_list_overdue(t0 + 4_000.0));
        assert!(sched.player_list_overdue(t0 + 6_000.0));
    }
}
