//! Run a countdown session to completion

use crate::domain::session::Countdown;
use std::time::Duration;

/// Wall-clock length of one tick
pub const TICK: Duration = Duration::from_secs(1);

/// Tick `session` until it stops running. `wait` is called before every tick
/// (the CLI sleeps for [`TICK`]); `on_tick` sees the session after each tick
/// together with any event that tick produced. Returns the number of ticks.
pub fn drive<C, W, F>(session: &mut C, mut wait: W, mut on_tick: F) -> u32
where
    C: Countdown,
    W: FnMut(),
    F: FnMut(&C, Option<C::Event>),
{
    let mut ticks = 0;
    while session.is_running() {
        wait();
        let event = session.tick();
        ticks += 1;
        on_tick(session, event);
    }
    tracing::debug!(ticks, "session ended");
    ticks
}

/// Block the current thread for one tick
pub fn sleep_one_tick() {
    std::thread::sleep(TICK);
}
