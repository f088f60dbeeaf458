//! Chaos Systems
//!
//! Starts the timer chains, polls them every frame and turns each fire into
//! the matching scene action.

use bevy::prelude::*;
use rand::Rng;

use super::state::*;
use crate::scene::types::*;

/// Start all chains unless the session begins under user control
pub fn start_chaos_chains(
    time: Res<Time>,
    params: Res<SimulationParameters>,
    mut schedule: ResMut<ChaosSchedule>,
    mut rng: ResMut<SceneRng>,
) {
    if params.user_control {
        info!("Starting under user control, chaos chains idle");
        return;
    }
    schedule.start_all(time.elapsed_secs_f64(), &mut rng.0);
    info!("Chaos chains started");
}

/// Poll the chains and run the action of every chain that fired
pub fn drive_chaos_chains(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut schedule: ResMut<ChaosSchedule>,
    mut rng: ResMut<SceneRng>,
    mut params: ResMut<SimulationParameters>,
    mut randomize: MessageWriter<RandomizeStyles>,
    mut earthquakes: MessageWriter<Earthquake>,
    mut resets: MessageWriter<ResetScene>,
) {
    let now = time.elapsed_secs_f64();

    for kind in schedule.poll(now, &mut rng.0) {
        debug!("Chaos chain '{}' fired at {:.1}s", kind.name(), now);
        match kind {
            ChainKind::Texture => {
                randomize.write(RandomizeStyles);
            }
            ChainKind::Force => {
                params.earthquake_force = random_earthquake_force(config.earthquake_force, &mut rng.0);
                earthquakes.write(Earthquake {
                    cause: EarthquakeCause::Timer,
                });
            }
            ChainKind::Gravity => {
                params.gravity = random_gravity(&mut rng.0);
                debug!("Gravity set to ({:.1}, {:.1})", params.gravity.x, params.gravity.y);
            }
            ChainKind::Reset => {
                resets.write(ResetScene {
                    cause: ResetCause::Timer,
                });
            }
        }
    }
}

/// Engage or release direct user control.
///
/// Engaging stops all chains (each may still fire once) and hands gravity to
/// the pointer; releasing restarts them.
pub fn set_user_control(
    engaged: bool,
    now: f64,
    params: &mut SimulationParameters,
    schedule: &mut ChaosSchedule,
    rng: &mut impl Rng,
) {
    params.user_control = engaged;
    params.mouse_gravity = engaged;

    if engaged {
        schedule.stop_all();
        info!("User control engaged, chaos chains stopping");
    } else {
        schedule.start_all(now, rng);
        info!("User control released, chaos chains restarted");
    }
}
