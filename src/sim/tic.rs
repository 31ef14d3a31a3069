use super::player::{InputCmd, Player};
use std::time::{Duration, Instant};

pub const SIM_FPS: u32 = 70;
pub const DT: f32 = 1.0 / SIM_FPS as f32;
const TIC: Duration = Duration::from_micros(1_000_000 / SIM_FPS as u64);
/// Simulation time older than this is dropped instead of replayed.
const MAX_LAG: Duration = Duration::from_millis(100);

/// Drives `Player::update` at a fixed rate, independent of the frame rate.
///
/// Turns and back steps are edges: they are queued until the next tic and
/// applied once. `forward` is a level and holds for every tic.
pub struct TicRunner {
    last: Instant,
    pending: InputCmd,
}

impl Default for TicRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TicRunner {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            pending: InputCmd::default(),
        }
    }

    /// Advance enough tics to synchronise the player with real time.
    ///
    /// `blocked` is asked before every tic, so several tics in one frame
    /// cannot walk through a wall. Returns the number of tics run.
    pub fn pump<F>(&mut self, player: &mut Player, cmd: &InputCmd, blocked: F) -> u32
    where
        F: FnMut(&Player) -> bool,
    {
        self.pump_until(Instant::now(), player, cmd, blocked)
    }

    fn pump_until<F>(
        &mut self,
        now: Instant,
        player: &mut Player,
        cmd: &InputCmd,
        mut blocked: F,
    ) -> u32
    where
        F: FnMut(&Player) -> bool,
    {
        self.pending.forward = cmd.forward;
        self.pending.back_step |= cmd.back_step;
        self.pending.turn += cmd.turn;

        if now.saturating_duration_since(self.last) > MAX_LAG {
            self.last = now - MAX_LAG;
        }

        let mut tics = 0;
        while now.saturating_duration_since(self.last) >= TIC {
            let stop = blocked(player);
            player.update(&self.pending, stop, DT);
            self.pending.back_step = false;
            self.pending.turn = 0.0;
            self.last += TIC;
            tics += 1;
        }
        tics
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
