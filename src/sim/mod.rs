mod player;
mod tic;

pub use player::{BACK_STEP, InputCmd, MAX_STEP, Player, WALK_SPEED};
pub use tic::{DT, SIM_FPS, TicRunner};
